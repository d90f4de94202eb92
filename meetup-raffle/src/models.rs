use serde::{Deserialize, Serialize};

use crate::service::DrawError;

/// Image shown when a winner has no photo (or the photo fails to load)
pub const PLACEHOLDER_PHOTO: &str = "/user-placeholder.svg";

/// Winner count used when nothing usable was persisted
pub const DEFAULT_WINNER_COUNT: u32 = 1;

/// One raffle result as returned by the draw endpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Winner {
    pub name: String,
    #[serde(rename = "photoURL", default, skip_serializing_if = "Option::is_none")]
    pub photo_url: Option<String>,
    #[serde(rename = "profileURL")]
    pub profile_url: String,
}

impl Winner {
    pub fn photo_or_placeholder(&self) -> &str {
        match self.photo_url.as_deref() {
            Some(url) if !url.trim().is_empty() => url,
            _ => PLACEHOLDER_PHOTO,
        }
    }
}

/// Successful draw response body
#[derive(Debug, Clone, Deserialize)]
pub struct DrawResponse {
    pub winners: Vec<Winner>,
}

/// Error body the draw endpoint sends with non-2xx responses
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub error: ApiErrorDetail,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorDetail {
    pub message: String,
}

/// Raw form input as typed by the user
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FormFields {
    pub group_name: String,
    /// Kept as typed so that an empty or non-numeric count can be shown back
    pub winner_count: String,
    pub specific_event_id: String,
    pub api_key: String,
}

impl FormFields {
    pub fn new(group_name: String, winner_count: u32) -> Self {
        Self {
            group_name,
            winner_count: winner_count.to_string(),
            ..Default::default()
        }
    }

    /// Parsed winner count, `None` unless it is a positive integer
    pub fn parsed_count(&self) -> Option<u32> {
        match self.winner_count.trim().parse::<u32>() {
            Ok(n) if n >= 1 => Some(n),
            _ => None,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Validates the form and builds the query for the draw endpoint
    pub fn validate(&self) -> Result<DrawQuery, DrawError> {
        let meetup = self.group_name.trim();
        if meetup.is_empty() {
            return Err(DrawError::Validation("Meetup name is required".to_string()));
        }

        let count = self.parsed_count().ok_or_else(|| {
            DrawError::Validation("Number of winners must be a positive whole number".to_string())
        })?;

        Ok(DrawQuery {
            meetup: meetup.to_string(),
            count,
            specific_event_id: non_blank(&self.specific_event_id),
            meetup_api_key: non_blank(&self.api_key),
        })
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Validated parameters of a single draw request
#[derive(Debug, Clone, PartialEq)]
pub struct DrawQuery {
    pub meetup: String,
    pub count: u32,
    pub specific_event_id: Option<String>,
    pub meetup_api_key: Option<String>,
}

impl DrawQuery {
    /// Query string pairs in the order the endpoint documents them
    pub fn params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("meetup", self.meetup.clone()),
            ("count", self.count.to_string()),
        ];
        if let Some(id) = &self.specific_event_id {
            params.push(("specificEventId", id.clone()));
        }
        if let Some(key) = &self.meetup_api_key {
            params.push(("meetupApiKey", key.clone()));
        }
        params
    }
}

/// State of the current draw attempt
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DrawState {
    /// Form is shown, nothing requested yet
    #[default]
    Idle,
    /// Request in flight
    Loading,
    /// Winners in the order the server returned them
    Success(Vec<Winner>),
    /// Failed draw; the view turns it into localized text
    Error(DrawError),
}

impl DrawState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, DrawState::Success(_) | DrawState::Error(_))
    }
}

/// Text inputs that select their content on focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TextField {
    GroupName,
    SpecificEventId,
    ApiKey,
}

/// Selection range inside a text input, in UTF-16 code units like the DOM's
/// `selectionStart` / `selectionEnd`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TextSelection {
    pub start: usize,
    pub end: usize,
}

impl TextSelection {
    pub fn all(text: &str) -> Self {
        Self {
            start: 0,
            end: text.encode_utf16().count(),
        }
    }
}
