use dioxus::prelude::*;

use crate::domain::entities::view::SummaryScope;
use crate::ui::styles::summary_panel_style;
use crate::usecase::services::view_controller::ViewController;

#[component]
pub fn SummaryPanel(controller: Signal<Option<ViewController>>, scope: SummaryScope) -> Element {
    let Some(summary) = controller.read().as_ref().map(|ctrl| ctrl.summary(scope)) else {
        return rsx! {};
    };

    rsx! {
        section {
            style: "{summary_panel_style()}",
            h3 { "Summary" }
            ul {
                id: "summary-list",
                li { strong { "Total:" } " {summary.total}" }
                for group in summary.by_application {
                    li { "{group.value}: {group.count}" }
                }
                li { strong { "Countries/Orgs:" } }
                for group in summary.by_country_org {
                    li { "{group.value}: {group.count}" }
                }
            }
        }
    }
}
