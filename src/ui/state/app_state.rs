use dioxus::prelude::{use_signal, Signal};

use crate::usecase::services::view_controller::ViewController;

pub struct AppState {
    /// `None` until the dataset has loaded.
    pub controller: Signal<Option<ViewController>>,
    pub load_error: Signal<Option<String>>,
    pub status: Signal<String>,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            controller: use_signal(|| None::<ViewController>),
            load_error: use_signal(|| None::<String>),
            status: use_signal(|| "Loading data…".to_string()),
        }
    }
}
