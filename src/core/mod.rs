pub mod etl;
pub mod normalize;
pub mod pipeline;
pub mod trie;

pub use crate::domain::model::{ConvertOutput, WordList};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
