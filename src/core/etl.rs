use crate::config::{storage::LocalStorage, ConvertConfig};
use crate::core::normalize::{decode_utf8, split_lines};
use crate::core::{ConvertOutput, Pipeline, Storage, WordList};
use crate::core::pipeline::WordListPipeline;
use crate::utils::error::Result;
use crate::utils::validation::Validate;

pub struct ConvertEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> ConvertEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub fn run(&self) -> Result<ConvertOutput> {
        tracing::info!("Starting word list conversion");

        let text = self.pipeline.extract()?;
        tracing::info!("Extracted {} lines", split_lines(&text).len());

        let words = self.pipeline.transform(text)?;
        tracing::info!("Normalized {} words", words.len());

        let output = self.pipeline.load(words)?;
        tracing::info!(
            "Wrote {} words to {}",
            output.word_count,
            output.output_path
        );
        tracing::debug!("Output size: {} bytes", output.bytes_written);

        Ok(output)
    }
}

/// Validates `config` and converts relative to the working directory.
pub fn convert(config: &ConvertConfig) -> Result<ConvertOutput> {
    config.validate()?;
    let pipeline = WordListPipeline::new(LocalStorage::current_dir(), config.clone());
    ConvertEngine::new(pipeline).run()
}

/// Reads a previously written JSON array back into a word list.
pub fn load_word_list<S: Storage>(storage: &S, path: &str) -> Result<WordList> {
    let text = decode_utf8(path, storage.read_file(path)?)?;
    Ok(serde_json::from_str(&text)?)
}
