use cardboard::dto::CardPayload;
use clap::Subcommand;

use crate::client::CardboardClient;
use crate::output::{self, OutputConfig};

/// Card management commands
#[derive(Subcommand, Debug)]
pub enum CardCommands {
    /// List all cards
    List,
    /// Get a specific card by ID
    Get {
        /// The card ID
        id: i64,
    },
    /// Create a new card
    Create {
        /// The initial status
        #[clap(long)]
        status: String,
        /// The card title
        #[clap(long, default_value = "")]
        title: String,
        /// An optional description
        #[clap(long)]
        description: Option<String>,
    },
    /// Move a card to a new status
    Status {
        /// The card ID
        id: i64,
        /// The new status
        status: String,
    },
    /// Delete a card
    Delete {
        /// The card ID
        id: i64,
    },
}

/// Executes a card command
pub async fn execute(
    client: &CardboardClient,
    cmd: CardCommands,
    config: &OutputConfig,
) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        CardCommands::List => {
            let cards = client.list_cards().await?;
            output::print_cards(&cards, config);
        }
        CardCommands::Get { id } => match client.get_card(id).await? {
            Some(card) => output::print_card(&card, config),
            None => {
                eprintln!("Card not found: {}", id);
                std::process::exit(1);
            }
        },
        CardCommands::Create {
            status,
            title,
            description,
        } => {
            let payload = CardPayload {
                title,
                description,
                status,
            };
            let card = client.create_card(&payload).await?;
            output::print_card(&card, config);
        }
        CardCommands::Status { id, status } => match client.update_card_status(id, &status).await {
            Ok(Some(card)) => output::print_card(&card, config),
            Ok(None) => output::print_success(&format!("Card {} already has status {}", id, status), config),
            Err(crate::client::ClientError::Server { status: code })
                if code == reqwest::StatusCode::NOT_FOUND =>
            {
                eprintln!("Card not found: {}", id);
                std::process::exit(1);
            }
            Err(e) => return Err(e.into()),
        },
        CardCommands::Delete { id } => {
            if client.delete_card(id).await? {
                output::print_success(&format!("Deleted card {}", id), config);
            } else {
                eprintln!("Card not found: {}", id);
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
