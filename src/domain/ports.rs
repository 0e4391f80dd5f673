use crate::domain::model::{ConvertOutput, WordList};
use crate::utils::error::Result;

pub trait Storage {
    fn read_file(&self, path: &str) -> Result<Vec<u8>>;
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}

pub trait ConfigProvider {
    fn input_path(&self) -> &str;
    fn output_path(&self) -> &str;
    fn indent(&self) -> usize;
}

/// Extract, transform and load steps of a single conversion.
pub trait Pipeline {
    /// Raw input text, already decoded.
    fn extract(&self) -> Result<String>;
    fn transform(&self, text: String) -> Result<WordList>;
    fn load(&self, words: WordList) -> Result<ConvertOutput>;
}
