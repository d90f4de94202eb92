//! # Meetup Raffle
//!
//! A reusable raffle-drawing form: collect a meetup name and a winner count,
//! ask a remote drawing API for winners and show them.
//!
//! This crate provides:
//! - Form state with validation and the draw state machine ([`RaffleController`])
//! - An HTTP client for the `/draw` endpoint ([`DrawService`])
//! - A pluggable key-value store remembering the last submitted inputs
//! - Dioxus UI components for the form and the results
//!
//! ## Separation of Concerns
//!
//! This crate does **not**:
//! - Pick winners itself (the remote API does)
//! - Decide where inputs are persisted (the application injects a store)
//!
//! ## Example Usage
//!
//! ```rust,ignore
//! use meetup_raffle::{DrawService, FormFields, RaffleForm};
//!
//! // Programmatic usage
//! let query = FormFields::new("rust-berlin".to_string(), 3).validate()?;
//! let winners = DrawService::new(endpoint)?.draw(&query).await?;
//!
//! // UI component usage
//! RaffleForm {
//!     endpoint: endpoint.clone(),
//!     store: Some(StoreHandle::new(MemoryStore::new())),
//! }
//! ```

pub mod component;
pub mod controller;
pub mod models;
pub mod service;
pub mod store;

pub use component::{
    RaffleForm, RaffleFormProps, RaffleLabels, RaffleView, ResetButtons, WinnerCard,
};
pub use controller::{DrawTicket, Lifecycle, RaffleController};
pub use models::{
    DrawQuery, DrawState, FormFields, TextField, TextSelection, Winner, DEFAULT_WINNER_COUNT,
    PLACEHOLDER_PHOTO,
};
pub use service::{interpret_response, DrawError, DrawService, DEFAULT_ENDPOINT};
pub use store::{
    KeyValueStore, MemoryStore, PersistedFields, StoreError, StoreHandle, GROUP_NAME_KEY,
    WINNER_COUNT_KEY,
};
