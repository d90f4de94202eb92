use dioxus_i18n::prelude::*;
use dioxus_i18n::t;
use meetup_raffle::RaffleLabels;

/// Initialize i18n configuration with English as default and German as second language
pub fn init_i18n() -> I18nConfig {
    I18nConfig::new(unic_langid::langid!("en-US"))
        .with_locale(Locale::new_static(
            unic_langid::langid!("en-US"),
            include_str!("../locales/en-US.ftl"),
        ))
        .with_locale(Locale::new_static(
            unic_langid::langid!("de-DE"),
            include_str!("../locales/de-DE.ftl"),
        ))
}

/// Translated labels for the raffle form
pub fn raffle_labels() -> RaffleLabels {
    RaffleLabels {
        meetup_name: t!("raffle-meetup-name"),
        meetup_name_hint: t!("raffle-meetup-name-hint"),
        winner_count: t!("raffle-winner-count"),
        decrement: t!("raffle-decrement"),
        increment: t!("raffle-increment"),
        advanced: t!("raffle-advanced"),
        specific_event_id: t!("raffle-specific-event-id"),
        api_key: t!("raffle-api-key"),
        draw_button: t!("action-draw"),
        drawing: t!("raffle-drawing"),
        start_over: t!("action-start-over"),
        draw_again: t!("action-draw-again"),
        error_unreachable: t!("raffle-error-unreachable"),
        error_malformed: t!("raffle-error-malformed"),
        error_busy: t!("raffle-error-busy"),
    }
}
