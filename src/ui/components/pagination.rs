use dioxus::prelude::*;

use crate::ui::styles::pagination_style;
use crate::usecase::services::view_controller::ViewController;

#[component]
pub fn Pagination(mut controller: Signal<Option<ViewController>>) -> Element {
    let Some(window) = controller.read().as_ref().map(|ctrl| ctrl.window()) else {
        return rsx! {};
    };
    let label = window.label();

    rsx! {
        div {
            class: "pagination",
            style: "{pagination_style()}",
            button {
                id: "prev-btn",
                disabled: !window.has_prev,
                onclick: move |_| {
                    if let Some(ctrl) = controller.write().as_mut() {
                        ctrl.prev_page();
                    }
                },
                "Previous"
            }
            span { id: "page-info", "{label}" }
            button {
                id: "next-btn",
                disabled: !window.has_next,
                onclick: move |_| {
                    if let Some(ctrl) = controller.write().as_mut() {
                        ctrl.next_page();
                    }
                },
                "Next"
            }
        }
    }
}
