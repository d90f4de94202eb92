use std::cell::Cell;
use std::rc::Rc;

use crate::models::{
    DrawQuery, DrawState, FormFields, TextField, TextSelection, Winner, DEFAULT_WINNER_COUNT,
};
use crate::service::DrawError;
use crate::store::{load_persisted, save_persisted, StoreHandle};

/// Mounted flag shared between the controller and its in-flight requests
#[derive(Debug, Clone)]
pub struct Lifecycle(Rc<Cell<bool>>);

impl Lifecycle {
    fn new() -> Self {
        Self(Rc::new(Cell::new(true)))
    }

    pub fn is_mounted(&self) -> bool {
        self.0.get()
    }

    pub fn dispose(&self) {
        self.0.set(false);
    }
}

/// A request the controller has committed to; results are matched by `id`
#[derive(Debug, Clone, PartialEq)]
pub struct DrawTicket {
    pub id: u64,
    pub query: DrawQuery,
}

/// Form state and draw state machine behind the raffle form
///
/// All transitions are synchronous. The caller performs the request for a
/// returned [`DrawTicket`] and feeds the outcome back through
/// [`RaffleController::complete`].
#[derive(Debug)]
pub struct RaffleController {
    fields: FormFields,
    advanced_open: bool,
    state: DrawState,
    last_query: Option<DrawQuery>,
    next_ticket: u64,
    pending: Option<u64>,
    /// Current `Loading` was started by `retry`, the result area stays up
    retrying: bool,
    store: Option<StoreHandle>,
    lifecycle: Lifecycle,
}

impl RaffleController {
    /// Creates the controller and seeds the form from the store, if any
    pub fn new(store: Option<StoreHandle>) -> Self {
        let persisted = load_persisted(store.as_ref());
        let fields = FormFields::new(
            persisted.group_name.unwrap_or_default(),
            persisted.winner_count.unwrap_or(DEFAULT_WINNER_COUNT),
        );

        Self {
            fields,
            advanced_open: false,
            state: DrawState::Idle,
            last_query: None,
            next_ticket: 0,
            pending: None,
            retrying: false,
            store,
            lifecycle: Lifecycle::new(),
        }
    }

    pub fn fields(&self) -> &FormFields {
        &self.fields
    }

    pub fn state(&self) -> &DrawState {
        &self.state
    }

    pub fn winners(&self) -> &[Winner] {
        match &self.state {
            DrawState::Success(winners) => winners.as_slice(),
            _ => &[],
        }
    }

    pub fn error(&self) -> Option<&DrawError> {
        match &self.state {
            DrawState::Error(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state == DrawState::Loading
    }

    /// Loading a repeat draw, with Start Over / Draw Again still shown
    pub fn is_retrying(&self) -> bool {
        self.retrying && self.is_loading()
    }

    pub fn advanced_open(&self) -> bool {
        self.advanced_open
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle.clone()
    }

    pub fn set_group_name(&mut self, value: String) {
        self.fields.group_name = value;
    }

    pub fn set_winner_count(&mut self, value: String) {
        self.fields.winner_count = value;
    }

    pub fn set_specific_event_id(&mut self, value: String) {
        self.fields.specific_event_id = value;
    }

    pub fn set_api_key(&mut self, value: String) {
        self.fields.api_key = value;
    }

    pub fn increment_count(&mut self) {
        let next = match self.fields.parsed_count() {
            Some(n) => n.saturating_add(1),
            None => DEFAULT_WINNER_COUNT,
        };
        self.fields.winner_count = next.to_string();
    }

    pub fn decrement_count(&mut self) {
        let next = match self.fields.parsed_count() {
            Some(n) => n.saturating_sub(1).max(1),
            None => DEFAULT_WINNER_COUNT,
        };
        self.fields.winner_count = next.to_string();
    }

    pub fn toggle_advanced(&mut self) {
        self.advanced_open = !self.advanced_open;
    }

    /// Range a focused input selects: its whole current text
    pub fn on_focus(&self, field: TextField) -> TextSelection {
        let text = match field {
            TextField::GroupName => &self.fields.group_name,
            TextField::SpecificEventId => &self.fields.specific_event_id,
            TextField::ApiKey => &self.fields.api_key,
        };
        TextSelection::all(text)
    }

    /// Whether the Draw control is enabled
    pub fn can_submit(&self) -> bool {
        self.accepts_submit() && self.fields.is_valid()
    }

    /// Submitting starts from the form or after an error, never over shown winners
    fn accepts_submit(&self) -> bool {
        matches!(self.state, DrawState::Idle | DrawState::Error(_))
    }

    /// Validates, persists the inputs and enters `Loading`
    pub fn submit(&mut self) -> Result<DrawTicket, DrawError> {
        if !self.accepts_submit() {
            return Err(DrawError::Busy);
        }
        let query = self.fields.validate()?;

        save_persisted(
            self.store.as_ref(),
            &self.fields.group_name,
            &self.fields.winner_count,
        );
        self.last_query = Some(query.clone());
        self.retrying = false;
        Ok(self.start(query))
    }

    /// Re-issues the last request from a finished draw
    pub fn retry(&mut self) -> Option<DrawTicket> {
        if !self.state.is_terminal() {
            return None;
        }
        let query = self.last_query.clone()?;
        self.retrying = true;
        Some(self.start(query))
    }

    /// Back to the form; field values are kept
    pub fn reset(&mut self) {
        self.state = DrawState::Idle;
        self.pending = None;
        self.retrying = false;
    }

    /// Applies the outcome of a request; returns `false` if it was dropped
    pub fn complete(&mut self, ticket_id: u64, result: Result<Vec<Winner>, DrawError>) -> bool {
        if !self.lifecycle.is_mounted() {
            log::debug!("Dropping draw result {} after teardown", ticket_id);
            return false;
        }
        if self.pending != Some(ticket_id) {
            log::debug!("Dropping stale draw result {}", ticket_id);
            return false;
        }

        self.pending = None;
        self.retrying = false;
        self.state = match result {
            Ok(winners) => DrawState::Success(winners),
            Err(e) => DrawState::Error(e),
        };
        true
    }

    pub fn dispose(&mut self) {
        self.lifecycle.dispose();
        self.pending = None;
    }

    fn start(&mut self, query: DrawQuery) -> DrawTicket {
        self.next_ticket += 1;
        self.pending = Some(self.next_ticket);
        self.state = DrawState::Loading;
        DrawTicket {
            id: self.next_ticket,
            query,
        }
    }
}
