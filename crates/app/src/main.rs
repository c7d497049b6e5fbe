use dioxus::prelude::*;
use shared_ui::theme::{ThemeFamily, ThemeSeed};

mod config;
mod routes;

use routes::Dashboard;

const THEME_BASE: Asset = asset!("/assets/theme-base.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    let config = config::app_config();

    use_hook(|| {
        tracing::info!(
            default_section = %config.dashboard.default_section,
            theme = %config.dashboard.theme,
            utc_offset_hours = config.dashboard.utc_offset_hours,
            "LegalHub dashboard starting"
        );
    });

    use_context_provider(|| config.features.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: THEME_BASE }
        ThemeSeed { family: ThemeFamily::from_key(&config.dashboard.theme) }
        Dashboard {
            initial_section: config.dashboard.default_section,
            utc_offset_hours: config.dashboard.utc_offset_hours,
        }
    }
}
