use cardboard::dto::CardPayload;
use cardboard::models::Card;
use reqwest::{Client, StatusCode};

/// Error type for CLI client operations
#[derive(Debug)]
pub enum ClientError {
    /// Server answered with an unexpected status
    Server { status: StatusCode },
    /// Network/connection/request error
    Request(reqwest::Error),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClientError::Server { status } => {
                write!(f, "Server error ({})", status)
            }
            ClientError::Request(err) => write!(f, "{}", err),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ClientError::Request(err) => Some(err),
            ClientError::Server { .. } => None,
        }
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        ClientError::Request(err)
    }
}

/// Extension trait for rejecting unexpected HTTP statuses
trait ResponseExt {
    /// Passes successful responses through and turns anything else into an error
    fn check(self) -> Result<reqwest::Response, ClientError>;
}

impl ResponseExt for reqwest::Response {
    fn check(self) -> Result<reqwest::Response, ClientError> {
        if self.status().is_success() {
            Ok(self)
        } else {
            // Error bodies are always empty, so the status is all there is
            Err(ClientError::Server { status: self.status() })
        }
    }
}

/// HTTP client wrapper for communicating with the Cardboard server
pub struct CardboardClient {
    /// The base URL of the server (e.g. "http://localhost:3000")
    base_url: String,
    /// The underlying HTTP client
    client: Client,
}

impl CardboardClient {
    /// Creates a new CardboardClient
    ///
    /// ### Arguments
    ///
    /// * `base_url` - The base URL of the Cardboard server
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn card_url(&self, id: i64) -> String {
        format!("{}/cards/{}", self.base_url, id)
    }

    /// Lists all cards
    pub async fn list_cards(&self) -> Result<Vec<Card>, ClientError> {
        let url = format!("{}/cards", self.base_url);
        let response = self.client.get(&url).send().await?.check()?;
        Ok(response.json().await?)
    }

    /// Gets a card by ID, or None if the server has no such card
    pub async fn get_card(&self, id: i64) -> Result<Option<Card>, ClientError> {
        let response = self.client.get(self.card_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        Ok(Some(response.check()?.json().await?))
    }

    /// Creates a card
    pub async fn create_card(&self, payload: &CardPayload) -> Result<Card, ClientError> {
        let url = format!("{}/cards", self.base_url);
        let response = self.client.post(&url).json(payload).send().await?.check()?;
        Ok(response.json().await?)
    }

    /// Moves a card to a new status
    ///
    /// ### Returns
    ///
    /// The updated card, or None if the card already had that status
    pub async fn update_card_status(&self, id: i64, status: &str) -> Result<Option<Card>, ClientError> {
        let payload = CardPayload::with_status(status);
        let response = self.client.put(self.card_url(id)).json(&payload).send().await?.check()?;
        if response.status() == StatusCode::NO_CONTENT {
            return Ok(None);
        }
        Ok(Some(response.json().await?))
    }

    /// Deletes a card
    ///
    /// ### Returns
    ///
    /// `true` if the card was deleted, `false` if the server had no such card
    pub async fn delete_card(&self, id: i64) -> Result<bool, ClientError> {
        let response = self.client.delete(self.card_url(id)).send().await?;
        if response.status() == StatusCode::NOT_FOUND {
            return Ok(false);
        }
        response.check()?;
        Ok(true)
    }
}
