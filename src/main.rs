use clap::Parser;
use wordlist_json::utils::logger;
use wordlist_json::{convert, CliConfig, ConvertConfig};

fn main() {
    let cli = CliConfig::parse();

    if cli.json_logs {
        logger::init_json_logger();
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    let config = ConvertConfig::default();
    tracing::debug!("Convert config: {:?}", config);

    match convert(&config) {
        Ok(output) => {
            println!(
                "✅ Wrote {} words to {}",
                output.word_count, output.output_path
            );
        }
        Err(e) => {
            tracing::error!(
                "❌ Conversion failed: {} (Category: {:?})",
                e,
                e.category()
            );
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    }
}
