use dioxus::prelude::*;
use dioxus_i18n::prelude::use_init_i18n;

mod components;
mod config;
mod database;
mod error;
mod i18n;

use components::RafflePage;
use config::AppConfig;

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    init_logging();
    dioxus::launch(App);
}

#[cfg(target_os = "android")]
fn init_logging() {
    android_logger::init_once(
        android_logger::Config::default()
            .with_max_level(log::LevelFilter::Info)
            .with_tag("raffle"),
    );
}

#[cfg(not(target_os = "android"))]
fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}

#[component]
fn App() -> Element {
    use_init_i18n(i18n::init_i18n);
    let config = use_hook(AppConfig::load);

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        div { style: "display: flex; flex-direction: column; min-height: 100vh; font-family: sans-serif;",
            RafflePage {
                endpoint: config.api_endpoint.clone(),
                timeout_secs: config.request_timeout_secs,
            }
        }
    }
}
