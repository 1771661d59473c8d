use dioxus::prelude::*;

use crate::domain::entities::view::Category;
use crate::ui::styles::filter_bar_style;
use crate::usecase::services::view_controller::ViewController;
use crate::usecase::view::options::FilterOption;

fn category_label(category: Category) -> &'static str {
    match category {
        Category::Application => "Application",
        Category::CountryOrg => "Country/Org",
        Category::Institution => "Institution",
    }
}

#[component]
pub fn FilterBar(mut controller: Signal<Option<ViewController>>) -> Element {
    let (search, matches) = controller
        .read()
        .as_ref()
        .map(|ctrl| (ctrl.filter().search.clone(), ctrl.filtered_len()))
        .unwrap_or_default();

    rsx! {
        div {
            class: "filters",
            style: "{filter_bar_style()}",
            for category in Category::ALL {
                FilterSelect { key: "{category.control_id()}", category, controller }
            }
            label {
                "Search "
                input {
                    id: "search-bar",
                    r#type: "search",
                    placeholder: "Search all fields",
                    value: "{search}",
                    oninput: move |event| {
                        if let Some(ctrl) = controller.write().as_mut() {
                            ctrl.set_search(event.value());
                        }
                    },
                }
            }
            button {
                id: "clear-filters",
                onclick: move |_| {
                    if let Some(ctrl) = controller.write().as_mut() {
                        ctrl.clear_filters();
                    }
                },
                "Clear filters"
            }
            span { id: "match-count", "{matches} matching records" }
        }
    }
}

#[component]
fn FilterSelect(category: Category, mut controller: Signal<Option<ViewController>>) -> Element {
    let (options, selected): (Vec<FilterOption>, String) = controller
        .read()
        .as_ref()
        .map(|ctrl| {
            (
                ctrl.options().for_category(category).to_vec(),
                ctrl.filter().selection(category).to_string(),
            )
        })
        .unwrap_or_default();

    rsx! {
        label {
            "{category_label(category)} "
            select {
                id: "{category.control_id()}",
                value: "{selected}",
                onchange: move |event| {
                    if let Some(ctrl) = controller.write().as_mut() {
                        ctrl.set_filter(category, event.value());
                    }
                },
                for opt in options {
                    option {
                        value: "{opt.value}",
                        selected: opt.value == selected,
                        "{opt.label}"
                    }
                }
            }
        }
    }
}
