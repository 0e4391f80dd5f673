use clap::Parser;
use serde::{Deserialize, Serialize};

/// Options for the converter binary; paths are fixed, only logging is tunable.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "wordlist-json")]
#[command(about = "Convert 100k.txt into a normalized words.json array")]
pub struct CliConfig {
    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

/// Options for the suggestion binary.
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "suggest")]
#[command(about = "Print prefix completions from words.json")]
pub struct SuggestConfig {
    /// Prefix to complete
    pub prefix: String,

    #[arg(long, default_value_t = crate::core::trie::DEFAULT_SUGGESTION_LIMIT)]
    pub limit: usize,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}
