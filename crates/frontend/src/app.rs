use crate::layout::{Page, Shell};
use crate::shared::config::{load_config, AppConfig};
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            log::warn!("Falling back to default config: {}", e);
            AppConfig::default()
        }
    };
    log::debug!("App config: {:?}", config);

    // Provide the configuration to every page via context.
    provide_context(config);

    let page = RwSignal::new(Page::Employees);

    view! {
        <Shell page=page />
    }
}
