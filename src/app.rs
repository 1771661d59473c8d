use dioxus::prelude::*;

use crate::config::ViewerConfig;
#[cfg(not(target_arch = "wasm32"))]
use crate::ui::components::export::ExportButton;
use crate::ui::components::filters::FilterBar;
use crate::ui::components::pagination::Pagination;
use crate::ui::components::summary::SummaryPanel;
use crate::ui::components::table::RecordTable;
use crate::ui::state::app_state::AppState;
use crate::ui::styles::{error_style, root_container_style};
use crate::usecase::services::load_service::LoadService;
use crate::usecase::services::view_controller::ViewController;

/// Replaces the whole surface when the dataset cannot be loaded.
pub fn load_error_heading(message: &str) -> String {
    format!("Error loading data: {message}")
}

#[component]
pub fn App() -> Element {
    let config = use_context::<ViewerConfig>();

    let AppState {
        mut controller,
        mut load_error,
        mut status,
    } = AppState::new();

    let data_source = config.data_source.clone();
    let page_size = config.page_size;
    use_future(move || {
        let data_source = data_source.clone();
        async move {
            let service = match LoadService::from_config(&data_source) {
                Ok(service) => service,
                Err(err) => {
                    load_error.set(Some(err.to_string()));
                    return;
                }
            };
            match service.load().await {
                Ok(dataset) => {
                    let loaded_at = chrono::Local::now().format("%H:%M:%S");
                    status.set(format!(
                        "Loaded {} records from {} at {loaded_at}",
                        dataset.len(),
                        service.source()
                    ));
                    controller.set(Some(ViewController::new(dataset, page_size)));
                }
                Err(err) => {
                    load_error.set(Some(err.to_string()));
                }
            }
        }
    });

    if let Some(message) = load_error() {
        return rsx! {
            h2 { style: "{error_style()}", "{load_error_heading(&message)}" }
        };
    }

    if controller.read().is_none() {
        return rsx! {
            p { style: "{root_container_style()}", "{status}" }
        };
    }

    // Browsers have no save dialog, so export is desktop-only.
    #[cfg(not(target_arch = "wasm32"))]
    let export_button = rsx! {
        ExportButton { controller, schema: config.schema, status }
    };
    #[cfg(target_arch = "wasm32")]
    let export_button = rsx! {};

    rsx! {
        div {
            style: "{root_container_style()}",
            h1 { style: "margin: 0; font-size: 1.4em;", "Regulations" }
            FilterBar { controller }
            RecordTable {
                controller,
                schema: config.schema,
                sort_glyphs: config.sort_glyphs,
            }
            Pagination { controller }
            if config.summary {
                SummaryPanel { controller, scope: config.summary_scope }
            }
            div {
                style: "display: flex; gap: 12px; align-items: center;",
                {export_button}
                span { "{status}" }
            }
        }
    }
}
