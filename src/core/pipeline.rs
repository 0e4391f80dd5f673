use crate::core::normalize::{decode_utf8, normalize_lines, render_json};
use crate::core::{ConfigProvider, ConvertOutput, Pipeline, Storage, WordList};
use crate::utils::error::Result;

pub struct WordListPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> WordListPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

impl<S: Storage, C: ConfigProvider> Pipeline for WordListPipeline<S, C> {
    fn extract(&self) -> Result<String> {
        let path = self.config.input_path();
        tracing::debug!("Reading word list from: {}", path);

        let bytes = self.storage.read_file(path)?;
        tracing::debug!("Read {} bytes", bytes.len());

        decode_utf8(path, bytes)
    }

    fn transform(&self, text: String) -> Result<WordList> {
        Ok(normalize_lines(&text))
    }

    fn load(&self, words: WordList) -> Result<ConvertOutput> {
        let path = self.config.output_path();
        let json = render_json(&words, self.config.indent())?;

        tracing::debug!("Writing {} bytes to: {}", json.len(), path);
        self.storage.write_file(path, &json)?;

        Ok(ConvertOutput {
            output_path: path.to_string(),
            word_count: words.len(),
            bytes_written: json.len(),
        })
    }
}
