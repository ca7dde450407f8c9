use cardboard::models::Card;
use clap::ValueEnum;
use serde::Serialize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
}

/// Bundled output configuration passed to all print functions
#[derive(Debug, Clone, Copy)]
pub struct OutputConfig {
    /// The output format
    pub format: OutputFormat,
    /// When true, print minimal output (just IDs)
    pub quiet: bool,
}

/// Prints any serializable value as pretty JSON
fn print_json<T: Serialize + ?Sized>(value: &T) {
    match serde_json::to_string_pretty(value) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize output: {}", e),
    }
}

/// Prints a list of cards in the specified format
pub fn print_cards(cards: &[Card], config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if cards.is_empty() {
                if !config.quiet {
                    println!("No cards found.");
                }
                return;
            }
            if config.quiet {
                for card in cards {
                    println!("{}", card.get_id());
                }
                return;
            }
            let max_id = cards
                .iter()
                .map(|c| c.get_id().to_string().len())
                .max()
                .unwrap_or(2)
                .max(2);
            let max_status = cards
                .iter()
                .map(|c| c.get_status().len())
                .max()
                .unwrap_or(6)
                .max(6);
            println!(
                "{:<id_w$}  {:<status_w$}  TITLE",
                "ID",
                "STATUS",
                id_w = max_id,
                status_w = max_status,
            );
            for card in cards {
                println!(
                    "{:<id_w$}  {:<status_w$}  {}",
                    card.get_id(),
                    card.get_status(),
                    card.get_title(),
                    id_w = max_id,
                    status_w = max_status,
                );
            }
        }
        OutputFormat::Json => print_json(cards),
    }
}

/// Prints a single card in the specified format
pub fn print_card(card: &Card, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if config.quiet {
                println!("{}", card.get_id());
                return;
            }
            println!("ID:          {}", card.get_id());
            println!("Title:       {}", card.get_title());
            println!("Description: {}", card.get_description().unwrap_or("-"));
            println!("Status:      {}", card.get_status());
            println!("Created:     {}", card.get_created_at().format("%Y-%m-%d %H:%M"));
        }
        OutputFormat::Json => print_json(card),
    }
}

/// Prints a success message in the specified format
pub fn print_success(message: &str, config: &OutputConfig) {
    match config.format {
        OutputFormat::Human => {
            if !config.quiet {
                println!("{}", message);
            }
        }
        OutputFormat::Json => {
            print_json(&serde_json::json!({"status": "ok", "message": message}));
        }
    }
}
