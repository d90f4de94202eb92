use crate::{database, i18n};
use dioxus::prelude::*;
use dioxus_i18n::prelude::i18n as use_i18n_context;
use dioxus_i18n::t;
use meetup_raffle::{RaffleForm, StoreHandle};
use unic_langid::langid;

/// Opens the database-backed store; without it the form simply starts empty
fn open_store() -> Option<StoreHandle> {
    match database::init_database() {
        Ok(conn) => Some(StoreHandle::new(database::SqliteStore::new(conn))),
        Err(e) => {
            log::warn!("Form values will not be remembered: {}", e);
            None
        }
    }
}

#[component]
pub fn RafflePage(endpoint: String, timeout_secs: u64) -> Element {
    let store = use_hook(open_store);
    let mut i18n = use_i18n_context();
    let is_german = i18n.language() == langid!("de-DE");

    rsx! {
        div { style: "padding: 16px; max-width: 600px; width: 100%; margin: 0 auto; box-sizing: border-box;",

            div { style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 24px;",
                div {
                    h1 { style: "color: #0066cc; font-size: 24px; font-weight: 700; margin: 0;",
                        {t!("app-title")}
                    }
                    p { style: "margin: 4px 0 0 0; font-size: 14px; color: #666;",
                        {t!("app-subtitle")}
                    }
                }
                button {
                    class: "btn-secondary",
                    style: "padding: 8px 12px; font-size: 14px;",
                    title: t!("language-label"),
                    onclick: move |_| {
                        if is_german {
                            i18n.set_language(langid!("en-US"));
                        } else {
                            i18n.set_language(langid!("de-DE"));
                        }
                    },
                    if is_german { "EN" } else { "DE" }
                }
            }

            div { class: "card",
                RaffleForm {
                    endpoint,
                    store,
                    timeout_secs,
                    labels: Some(i18n::raffle_labels()),
                }
            }
        }
    }
}
