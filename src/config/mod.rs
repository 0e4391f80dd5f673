#[cfg(feature = "cli")]
pub mod cli;
pub mod storage;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_path, validate_range, Validate};
use serde::{Deserialize, Serialize};

pub const DEFAULT_INPUT_PATH: &str = "100k.txt";
pub const DEFAULT_OUTPUT_PATH: &str = "words.json";
pub const DEFAULT_INDENT: usize = 2;
pub const MAX_INDENT: usize = 8;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvertConfig {
    pub input_path: String,
    pub output_path: String,
    pub indent: usize,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            input_path: DEFAULT_INPUT_PATH.to_string(),
            output_path: DEFAULT_OUTPUT_PATH.to_string(),
            indent: DEFAULT_INDENT,
        }
    }
}

impl ConvertConfig {
    pub fn new(input_path: impl Into<String>, output_path: impl Into<String>) -> Self {
        Self {
            input_path: input_path.into(),
            output_path: output_path.into(),
            ..Self::default()
        }
    }
}

impl ConfigProvider for ConvertConfig {
    fn input_path(&self) -> &str {
        &self.input_path
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn indent(&self) -> usize {
        self.indent
    }
}

impl Validate for ConvertConfig {
    fn validate(&self) -> Result<()> {
        validate_path("input_path", &self.input_path)?;
        validate_path("output_path", &self.output_path)?;
        validate_range("indent", self.indent, 0, MAX_INDENT)?;
        Ok(())
    }
}
