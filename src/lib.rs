pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::config::{storage::LocalStorage, ConvertConfig};
pub use crate::core::{
    etl::{convert, ConvertEngine},
    pipeline::WordListPipeline,
    trie::Trie,
};
pub use crate::domain::model::{ConvertOutput, WordList};
pub use crate::utils::error::{ConvertError, Result};
