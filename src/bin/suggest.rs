use anyhow::Context;
use clap::Parser;
use wordlist_json::config::{cli::SuggestConfig, DEFAULT_OUTPUT_PATH};
use wordlist_json::core::etl::load_word_list;
use wordlist_json::utils::logger;
use wordlist_json::{LocalStorage, Trie};

fn main() -> anyhow::Result<()> {
    let config = SuggestConfig::parse();
    logger::init_cli_logger(config.verbose);

    let words = load_word_list(&LocalStorage::current_dir(), DEFAULT_OUTPUT_PATH)
        .with_context(|| format!("loading {}", DEFAULT_OUTPUT_PATH))?;
    tracing::debug!("Indexing {} words", words.len());

    let trie = Trie::from_words(words.iter());
    let suggestions = trie.search_with_limit(&config.prefix, config.limit);
    if suggestions.is_empty() {
        tracing::info!("No words start with {:?}", config.prefix);
    }
    for word in suggestions {
        println!("{}", word);
    }

    Ok(())
}
