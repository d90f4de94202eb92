use crate::component::RaffleLabels;
use crate::models::{ApiErrorBody, DrawQuery, DrawResponse, Winner};

/// Local development endpoint used when nothing else is configured
pub const DEFAULT_ENDPOINT: &str = "http://localhost:3000/api";

/// Error type for draw operations
#[derive(Debug, Clone, PartialEq)]
pub enum DrawError {
    /// Form input rejected before any request was made
    Validation(String),
    /// Endpoint unreachable or the transfer failed
    Network(String),
    /// 2xx response without a usable winners list
    MalformedResponse,
    /// Non-2xx response carrying a message from the API
    Api(String),
    /// Non-2xx response without a usable message
    Server(u16),
    /// A draw is in flight or its winners are still shown
    Busy,
}

impl std::fmt::Display for DrawError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DrawError::Validation(msg) => write!(f, "Validation error: {}", msg),
            DrawError::Network(msg) => write!(f, "Network error: {}", msg),
            DrawError::MalformedResponse => write!(f, "Received a malformed response"),
            DrawError::Api(msg) => write!(f, "API error: {}", msg),
            DrawError::Server(status) => write!(f, "Server returned status: {}", status),
            DrawError::Busy => write!(f, "A draw is already in progress"),
        }
    }
}

impl std::error::Error for DrawError {}

impl DrawError {
    /// English text for the result area; localized text comes from `RaffleLabels`
    pub fn user_message(&self) -> String {
        RaffleLabels::english().error_message(self)
    }
}

/// Maps an HTTP status and body from the draw endpoint to winners or an error
pub fn interpret_response(status: u16, body: &str) -> Result<Vec<Winner>, DrawError> {
    if (200..300).contains(&status) {
        return serde_json::from_str::<DrawResponse>(body)
            .map(|response| response.winners)
            .map_err(|e| {
                log::warn!("Draw response without winners list: {}", e);
                DrawError::MalformedResponse
            });
    }

    match serde_json::from_str::<ApiErrorBody>(body) {
        Ok(api_error) if !api_error.error.message.trim().is_empty() => {
            Err(DrawError::Api(api_error.error.message))
        }
        _ => Err(DrawError::Server(status)),
    }
}

/// Client for the remote winner-drawing endpoint
#[derive(Clone)]
pub struct DrawService {
    endpoint: String,
    client: reqwest::Client,
}

impl DrawService {
    /// Create a new draw service for the given endpoint base URL
    pub fn new(endpoint: String) -> Result<Self, DrawError> {
        Self::with_timeout(endpoint, 30)
    }

    pub fn with_timeout(endpoint: String, timeout_secs: u64) -> Result<Self, DrawError> {
        let client = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(timeout_secs))
            .connect_timeout(std::time::Duration::from_secs(10))
            .user_agent("MeetupRaffle/0.1.0")
            .build()
            .map_err(|e| DrawError::Network(format!("Client build failed: {}", e)))?;

        Ok(Self { endpoint, client })
    }

    pub fn draw_url(&self) -> String {
        format!("{}/draw", self.endpoint.trim_end_matches('/'))
    }

    /// Request a new set of winners
    pub async fn draw(&self, query: &DrawQuery) -> Result<Vec<Winner>, DrawError> {
        let url = self.draw_url();
        log::debug!("Drawing {} winner(s) for {}", query.count, query.meetup);

        let response = self
            .client
            .get(&url)
            .query(&query.params())
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| DrawError::Network(format!("Request failed: {}", e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| DrawError::Network(format!("Failed to read response: {}", e)))?;

        let result = interpret_response(status, &body);
        match &result {
            Ok(winners) => log::info!("Drew {} winner(s)", winners.len()),
            Err(e) => log::warn!("Draw failed: {}", e),
        }
        result
    }
}
