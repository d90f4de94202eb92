use crate::controller::{DrawTicket, RaffleController};
use crate::models::{DrawState, TextField, TextSelection, Winner, PLACEHOLDER_PHOTO};
use crate::service::{DrawError, DrawService};
use crate::store::StoreHandle;
use dioxus::prelude::*;

/// Props for the RaffleForm component
#[derive(Props, Clone, PartialEq)]
pub struct RaffleFormProps {
    /// Base URL of the drawing API (`/draw` is appended)
    pub endpoint: String,
    /// Where the last submitted meetup name and count are remembered
    #[props(default)]
    pub store: Option<StoreHandle>,
    /// Request timeout in seconds
    #[props(default = 30)]
    pub timeout_secs: u64,
    /// Custom labels for UI elements (optional)
    #[props(default)]
    pub labels: Option<RaffleLabels>,
}

/// Custom labels for the raffle UI
#[derive(Clone, PartialEq, Debug)]
pub struct RaffleLabels {
    pub meetup_name: String,
    pub meetup_name_hint: String,
    pub winner_count: String,
    pub decrement: String,
    pub increment: String,
    pub advanced: String,
    pub specific_event_id: String,
    pub api_key: String,
    pub draw_button: String,
    pub drawing: String,
    pub start_over: String,
    pub draw_again: String,
    pub error_unreachable: String,
    pub error_malformed: String,
    pub error_busy: String,
}

impl RaffleLabels {
    pub fn english() -> Self {
        Self {
            meetup_name: "Meetup name".to_string(),
            meetup_name_hint: "as it appears in the meetup.com URL".to_string(),
            winner_count: "Number of winners:".to_string(),
            decrement: "Decrement".to_string(),
            increment: "Increment".to_string(),
            advanced: "Advanced options".to_string(),
            specific_event_id: "Specific event ID".to_string(),
            api_key: "Meetup API key".to_string(),
            draw_button: "Draw".to_string(),
            drawing: "Drawing…".to_string(),
            start_over: "Start Over".to_string(),
            draw_again: "Draw Again".to_string(),
            error_unreachable: "Sorry, the raffle server could not be reached. Please try again."
                .to_string(),
            error_malformed: "Sorry, the raffle server sent a malformed response.".to_string(),
            error_busy: "Please wait for the current draw to finish.".to_string(),
        }
    }

    /// Display text for a failed draw; API messages are shown verbatim
    pub fn error_message(&self, error: &DrawError) -> String {
        match error {
            DrawError::Validation(msg) | DrawError::Api(msg) => msg.clone(),
            DrawError::Network(_) | DrawError::Server(_) => self.error_unreachable.clone(),
            DrawError::MalformedResponse => self.error_malformed.clone(),
            DrawError::Busy => self.error_busy.clone(),
        }
    }
}

impl Default for RaffleLabels {
    fn default() -> Self {
        Self::english()
    }
}

fn input_id(field: TextField) -> &'static str {
    match field {
        TextField::GroupName => "raffle-meetup",
        TextField::SpecificEventId => "raffle-event-id",
        TextField::ApiKey => "raffle-api-key",
    }
}

/// Applies the selection range to the input in the DOM
fn select_text(field: TextField, selection: TextSelection) {
    let script = format!(
        "const el = document.getElementById('{}'); if (el && el.setSelectionRange) {{ el.setSelectionRange({}, {}); }}",
        input_id(field),
        selection.start,
        selection.end
    );
    let _ = document::eval(&script);
}

/// Raffle drawing form
///
/// Collects a meetup name and winner count, asks the draw endpoint for
/// winners and shows them. The last submitted values are restored from
/// `store` on mount.
///
/// # Example
/// ```rust,ignore
/// RaffleForm {
///     endpoint: "https://raffle.example.com/api".to_string(),
///     store: Some(StoreHandle::new(MemoryStore::new())),
/// }
/// ```
#[component]
pub fn RaffleForm(props: RaffleFormProps) -> Element {
    let store = props.store.clone();
    let mut controller = use_signal(move || RaffleController::new(store));

    let endpoint = props.endpoint.clone();
    let timeout_secs = props.timeout_secs;
    let service = use_signal(move || DrawService::with_timeout(endpoint, timeout_secs));

    let labels = props.labels.clone().unwrap_or_else(RaffleLabels::english);

    let lifecycle = use_hook(|| controller.peek().lifecycle());
    use_drop(move || lifecycle.dispose());

    let run_draw = move |ticket: DrawTicket| {
        let lifecycle = controller.peek().lifecycle();
        let service = service.peek().clone();

        spawn(async move {
            let result = match service {
                Ok(service) => service.draw(&ticket.query).await,
                Err(e) => Err(e),
            };

            if lifecycle.is_mounted() {
                controller.write().complete(ticket.id, result);
            }
        });
    };

    rsx! {
        RaffleView { controller, labels, on_draw: run_draw }
    }
}

/// Form and result area for a controller; accepted draws go to `on_draw`
#[component]
pub fn RaffleView(
    controller: Signal<RaffleController>,
    labels: RaffleLabels,
    on_draw: EventHandler<DrawTicket>,
) -> Element {
    let mut controller = controller;

    let on_submit = move |e: FormEvent| {
        e.prevent_default();
        let outcome = controller.write().submit();
        match outcome {
            Ok(ticket) => on_draw.call(ticket),
            Err(err) => log::debug!("Draw not started: {}", err),
        }
    };

    let on_retry = move |_: ()| {
        let ticket = controller.write().retry();
        if let Some(ticket) = ticket {
            on_draw.call(ticket);
        }
    };

    let select_all = move |field: TextField| {
        let selection = controller.peek().on_focus(field);
        select_text(field, selection);
    };

    let (fields, state, can_submit, advanced_open, retrying) = {
        let ctl = controller.read();
        (
            ctl.fields().clone(),
            ctl.state().clone(),
            ctl.can_submit(),
            ctl.advanced_open(),
            ctl.is_retrying(),
        )
    };

    let loading = matches!(state, DrawState::Loading);

    let content = match state {
        DrawState::Loading if retrying => rsx! {
            p { class: "raffle-loading", style: "text-align: center; color: #666;", "{labels.drawing}" }
            ResetButtons {
                start_over: labels.start_over.clone(),
                draw_again: labels.draw_again.clone(),
                retry_disabled: true,
                on_reset: move |_| controller.write().reset(),
                on_retry,
            }
        },
        DrawState::Idle | DrawState::Loading => {
            rsx! {
                form { class: "raffle-form", onsubmit: on_submit,
                    label { r#for: "raffle-meetup", style: "display: block; margin-bottom: 4px; font-weight: 600;",
                        "{labels.meetup_name} "
                        span { style: "font-weight: 400; font-size: 12px; color: #666;", "({labels.meetup_name_hint})" }
                    }
                    input {
                        id: "raffle-meetup",
                        r#type: "text",
                        value: "{fields.group_name}",
                        style: "width: 100%; padding: 10px; margin-bottom: 16px; box-sizing: border-box;",
                        oninput: move |e| controller.write().set_group_name(e.value()),
                        onfocus: move |_| select_all(TextField::GroupName),
                    }

                    label { r#for: "raffle-count", style: "display: block; margin-bottom: 4px; font-weight: 600;",
                        "{labels.winner_count}"
                    }
                    div { style: "display: flex; gap: 8px; margin-bottom: 16px;",
                        button {
                            r#type: "button",
                            class: "btn-secondary",
                            "aria-label": "{labels.decrement}",
                            onclick: move |_| controller.write().decrement_count(),
                            "−"
                        }
                        input {
                            id: "raffle-count",
                            r#type: "text",
                            "inputmode": "numeric",
                            value: "{fields.winner_count}",
                            style: "flex: 1; padding: 10px; text-align: center;",
                            oninput: move |e| controller.write().set_winner_count(e.value()),
                        }
                        button {
                            r#type: "button",
                            class: "btn-secondary",
                            "aria-label": "{labels.increment}",
                            onclick: move |_| controller.write().increment_count(),
                            "+"
                        }
                    }

                    button {
                        r#type: "button",
                        class: "raffle-advanced-toggle",
                        style: "background: none; border: none; padding: 0; margin-bottom: 12px; cursor: pointer; color: #0066cc;",
                        onclick: move |_| controller.write().toggle_advanced(),
                        span { if advanced_open { "▾ " } else { "▸ " } }
                        "{labels.advanced}"
                    }

                    if advanced_open {
                        div { class: "raffle-advanced", style: "margin-bottom: 16px;",
                            label { r#for: "raffle-event-id", style: "display: block; margin-bottom: 4px;",
                                "{labels.specific_event_id}"
                            }
                            input {
                                id: "raffle-event-id",
                                r#type: "text",
                                value: "{fields.specific_event_id}",
                                style: "width: 100%; padding: 10px; margin-bottom: 12px; box-sizing: border-box;",
                                oninput: move |e| controller.write().set_specific_event_id(e.value()),
                                onfocus: move |_| select_all(TextField::SpecificEventId),
                            }
                            label { r#for: "raffle-api-key", style: "display: block; margin-bottom: 4px;",
                                "{labels.api_key}"
                            }
                            input {
                                id: "raffle-api-key",
                                r#type: "text",
                                value: "{fields.api_key}",
                                style: "width: 100%; padding: 10px; box-sizing: border-box;",
                                oninput: move |e| controller.write().set_api_key(e.value()),
                                onfocus: move |_| select_all(TextField::ApiKey),
                            }
                        }
                    }

                    button {
                        r#type: "submit",
                        class: "btn-primary",
                        style: "width: 100%;",
                        disabled: !can_submit,
                        if loading { "{labels.drawing}" } else { "{labels.draw_button}" }
                    }
                }
            }
        }
        DrawState::Success(winners) => rsx! {
            div { class: "raffle-winners", style: "display: flex; flex-wrap: wrap; justify-content: space-around; gap: 12px;",
                for (idx, winner) in winners.into_iter().enumerate() {
                    WinnerCard { key: "{idx}", winner }
                }
            }
            ResetButtons {
                start_over: labels.start_over.clone(),
                draw_again: labels.draw_again.clone(),
                on_reset: move |_| controller.write().reset(),
                on_retry,
            }
        },
        DrawState::Error(error) => {
            let message = labels.error_message(&error);
            rsx! {
                p { class: "raffle-error", style: "color: #c62828; text-align: center;", "{message}" }
                ResetButtons {
                    start_over: labels.start_over.clone(),
                    draw_again: labels.draw_again.clone(),
                    on_reset: move |_| controller.write().reset(),
                    on_retry,
                }
            }
        }
    };

    rsx! {
        div { class: "raffle", {content} }
    }
}

/// One winner card linking to the winner's profile
#[component]
pub fn WinnerCard(winner: Winner) -> Element {
    let photo = winner.photo_or_placeholder().to_string();

    rsx! {
        a {
            class: "raffle-winner",
            href: "{winner.profile_url}",
            target: "_blank",
            rel: "noopener noreferrer",
            style: "display: block; width: 160px; border: 1px solid #0066cc; text-decoration: none; color: inherit;",
            div {
                "role": "img",
                "aria-label": "{winner.name}",
                style: "width: 160px; height: 160px; background-image: url('{photo}'), url('{PLACEHOLDER_PHOTO}'); background-position: center center; background-repeat: no-repeat; background-size: cover;",
            }
            span { style: "display: block; padding: 12px; text-align: center; background: #f5f5f5;",
                "{winner.name}"
            }
        }
    }
}

#[component]
pub fn ResetButtons(
    start_over: String,
    draw_again: String,
    #[props(default)] retry_disabled: bool,
    on_reset: EventHandler,
    on_retry: EventHandler,
) -> Element {
    rsx! {
        div { style: "display: flex; flex-wrap: wrap; justify-content: space-around; margin: 32px 0;",
            button { r#type: "button", class: "btn-secondary", onclick: move |_| on_reset.call(()), "{start_over}" }
            button {
                r#type: "button",
                class: "btn-primary",
                disabled: retry_disabled,
                onclick: move |_| on_retry.call(()),
                "{draw_again}"
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{KeyValueStore, MemoryStore, GROUP_NAME_KEY, WINNER_COUNT_KEY};

    fn mock_winners() -> Vec<Winner> {
        (0..2)
            .map(|idx| Winner {
                name: format!("Pickle Rick {}", idx),
                photo_url: Some(format!("https://i.imgur.com/3VhMoBD.png?i={}", idx)),
                profile_url: format!("https://en.wikipedia.org/wiki/Pickle_Rick?i={}", idx),
            })
            .collect()
    }

    fn has_disabled(html: &str) -> bool {
        html.contains("disabled=true")
            || html.contains("disabled=\"true\"")
            || html.contains("disabled=\"\"")
    }

    #[derive(Clone, Copy, PartialEq)]
    enum Scenario {
        Empty,
        Filled,
        Submitted,
        AdvancedOpen,
        Drawn,
        DrawnThenReset,
        Retrying,
        Malformed,
        ApiError,
    }

    impl Scenario {
        fn controller(self) -> RaffleController {
            let mut controller = RaffleController::new(None);
            if self == Scenario::Empty {
                return controller;
            }
            controller.set_group_name("foo".to_string());
            controller.set_winner_count("2".to_string());

            match self {
                Scenario::Empty | Scenario::Filled => {}
                Scenario::AdvancedOpen => controller.toggle_advanced(),
                Scenario::Submitted => {
                    controller.submit().unwrap();
                }
                Scenario::Drawn | Scenario::DrawnThenReset | Scenario::Retrying => {
                    let ticket = controller.submit().unwrap();
                    controller.complete(ticket.id, Ok(mock_winners()));
                    if self == Scenario::DrawnThenReset {
                        controller.reset();
                    }
                    if self == Scenario::Retrying {
                        controller.retry().unwrap();
                    }
                }
                Scenario::Malformed => {
                    let ticket = controller.submit().unwrap();
                    controller.complete(ticket.id, Err(DrawError::MalformedResponse));
                }
                Scenario::ApiError => {
                    let ticket = controller.submit().unwrap();
                    controller.complete(
                        ticket.id,
                        Err(DrawError::Api("Sorry, something went awry.".to_string())),
                    );
                }
            }
            controller
        }
    }

    #[component]
    fn ScenarioView(scenario: Scenario) -> Element {
        let controller = use_signal(move || scenario.controller());
        rsx! {
            RaffleView {
                controller,
                labels: RaffleLabels::english(),
                on_draw: move |_: DrawTicket| {},
            }
        }
    }

    #[component]
    fn ScenarioHost(scenario: Scenario) -> Element {
        rsx! { ScenarioView { scenario } }
    }

    fn render(scenario: Scenario) -> String {
        let mut dom = VirtualDom::new_with_props(ScenarioHost, ScenarioHostProps { scenario });
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[component]
    fn StoredForm() -> Element {
        let store = use_hook(|| {
            let store = StoreHandle::new(MemoryStore::new());
            store.set(GROUP_NAME_KEY, "foo").unwrap();
            store.set(WINNER_COUNT_KEY, "5").unwrap();
            Some(store)
        });
        rsx! {
            RaffleForm { endpoint: "http://127.0.0.1:9/api".to_string(), store }
        }
    }

    #[component]
    fn StorelessForm() -> Element {
        rsx! {
            RaffleForm { endpoint: "http://127.0.0.1:9/api".to_string() }
        }
    }

    #[component]
    fn Cards() -> Element {
        let mut winners = mock_winners();
        winners[1].photo_url = None;
        rsx! {
            for winner in winners {
                WinnerCard { winner }
            }
        }
    }

    fn render_root(root: fn() -> Element) -> String {
        let mut dom = VirtualDom::new(root);
        dom.rebuild_in_place();
        dioxus_ssr::render(&dom)
    }

    #[test]
    fn test_draw_disabled_for_invalid_input() {
        let html = render(Scenario::Empty);
        assert!(html.contains("raffle-form"));
        assert!(has_disabled(&html));

        let html = render(Scenario::Filled);
        assert!(!has_disabled(&html));
    }

    #[test]
    fn test_draw_disabled_while_loading() {
        let html = render(Scenario::Submitted);
        assert!(html.contains("raffle-form"));
        assert!(html.contains("Drawing…"));
        assert!(has_disabled(&html));
    }

    #[test]
    fn test_form_restores_stored_values() {
        let html = render_root(StoredForm);
        assert!(html.contains("value=\"5\""), "{}", html);
        assert!(html.contains("value=\"foo\""));
        assert!(!has_disabled(&html));
    }

    #[test]
    fn test_form_renders_without_store() {
        let html = render_root(StorelessForm);
        assert!(html.contains("value=\"1\""));
        assert!(has_disabled(&html));
    }

    #[test]
    fn test_winners_render_in_received_order() {
        let html = render(Scenario::Drawn);
        let first = html.find("Pickle Rick 0").unwrap();
        let second = html.find("Pickle Rick 1").unwrap();
        assert!(first < second);
        assert!(!html.contains("raffle-form"));
        assert!(html.contains("Start Over"));
        assert!(html.contains("Draw Again"));
        assert!(!has_disabled(&html));
    }

    #[test]
    fn test_start_over_shows_form_without_winners() {
        let html = render(Scenario::DrawnThenReset);
        assert!(html.contains("raffle-form"));
        assert!(!html.contains("Pickle Rick"));
        assert!(html.contains("value=\"foo\""));
    }

    #[test]
    fn test_draw_again_keeps_buttons_and_hides_winners() {
        let html = render(Scenario::Retrying);
        assert!(!html.contains("Pickle Rick"));
        assert!(!html.contains("raffle-form"));
        assert!(html.contains("Start Over"));
        assert!(html.contains("Draw Again"));
        assert!(has_disabled(&html));
    }

    #[test]
    fn test_error_messages_are_rendered() {
        let html = render(Scenario::Malformed);
        assert!(html.to_lowercase().contains("malformed response"));
        assert!(html.contains("Draw Again"));

        let html = render(Scenario::ApiError);
        assert!(html.contains("awry"));
    }

    #[test]
    fn test_advanced_toggle_flips_icon() {
        let closed = render(Scenario::Filled);
        assert!(closed.contains("▸"));
        assert!(!closed.contains("raffle-event-id"));

        let open = render(Scenario::AdvancedOpen);
        assert!(open.contains("▾"));
        assert!(open.contains("raffle-event-id"));
        assert!(open.contains("raffle-api-key"));
    }

    #[test]
    fn test_winner_cards_open_profile_in_new_tab() {
        let html = render_root(Cards);
        assert!(html.contains("target=\"_blank\""));
        assert!(html.contains("rel=\"noopener noreferrer\""));
        assert!(html.contains("https://en.wikipedia.org/wiki/Pickle_Rick?i=0"));
        assert!(html.contains("3VhMoBD.png?i=0"));
        assert!(html.contains(PLACEHOLDER_PHOTO));
        assert!(!html.contains("3VhMoBD.png?i=1"));
    }

    #[test]
    fn test_labels_localize_error_messages() {
        let mut labels = RaffleLabels::english();
        labels.error_malformed = "Fehlerhafte Antwort".to_string();
        assert_eq!(
            labels.error_message(&DrawError::MalformedResponse),
            "Fehlerhafte Antwort"
        );
        assert_eq!(
            labels.error_message(&DrawError::Api("awry".to_string())),
            "awry"
        );
        assert_eq!(
            labels.error_message(&DrawError::Server(500)),
            labels.error_unreachable
        );
    }
}
