use dioxus::prelude::*;

use crate::domain::entities::dataset::{Field, Record};
use crate::domain::entities::view::{SchemaVariant, SortState};
use crate::ui::styles::{
    empty_row_style, table_cell_style, table_container_style, table_header_cell_style,
};
use crate::usecase::services::view_controller::ViewController;

pub const EMPTY_MESSAGE: &str = "No matching records found";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellView {
    Text(String),
    Link { href: String, text: String },
}

/// Returns the value when it can be used as a hyperlink target.
pub fn document_href(value: &str) -> Option<&str> {
    let trimmed = value.trim();
    let lower = trimmed.to_ascii_lowercase();
    (lower.starts_with("http://") || lower.starts_with("https://")).then_some(trimmed)
}

pub fn cell_view(record: &Record, field: Field, schema: SchemaVariant) -> CellView {
    let value = record.field(field);
    if field == Field::Document && schema.links_documents() {
        if let Some(href) = document_href(value) {
            return CellView::Link {
                href: href.to_string(),
                text: value.to_string(),
            };
        }
    }
    CellView::Text(value.to_string())
}

/// Value of the header's `data-order` attribute.
pub fn header_order(sort: Option<SortState>, column: Field) -> &'static str {
    match sort {
        Some(state) if state.column == column => state.direction.as_attr(),
        _ => "",
    }
}

/// Only the active column carries a glyph.
pub fn header_glyph(sort: Option<SortState>, column: Field, enabled: bool) -> &'static str {
    match sort {
        Some(state) if enabled && state.column == column => state.direction.glyph(),
        _ => "",
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
struct HeaderView {
    column: Field,
    order: &'static str,
    glyph: &'static str,
}

#[component]
pub fn RecordTable(
    mut controller: Signal<Option<ViewController>>,
    schema: SchemaVariant,
    sort_glyphs: bool,
) -> Element {
    let columns = schema.columns();
    let (headers, rows) = {
        let guard = controller.read();
        let Some(ctrl) = guard.as_ref() else {
            return rsx! {};
        };
        let sort = ctrl.sort();
        let headers: Vec<HeaderView> = columns
            .iter()
            .map(|column| HeaderView {
                column: *column,
                order: header_order(sort, *column),
                glyph: header_glyph(sort, *column, sort_glyphs),
            })
            .collect();
        let rows: Vec<Vec<CellView>> = ctrl
            .current_page()
            .rows
            .into_iter()
            .map(|record| {
                columns
                    .iter()
                    .map(|column| cell_view(record, *column, schema))
                    .collect()
            })
            .collect();
        (headers, rows)
    };
    let colspan = columns.len();

    rsx! {
        div {
            style: "{table_container_style()}",
            table {
                id: "reg-table",
                style: "border-collapse: collapse; width: 100%; background: #fff;",
                thead {
                    tr {
                        for header in headers {
                            th {
                                key: "{header.column.key()}",
                                class: "sortable",
                                style: "{table_header_cell_style(true)}",
                                "data-column": "{header.column.key()}",
                                "data-order": "{header.order}",
                                onclick: move |_| {
                                    if let Some(ctrl) = controller.write().as_mut() {
                                        ctrl.toggle_column(header.column);
                                    }
                                },
                                "{header.column.label()}"
                                if !header.glyph.is_empty() {
                                    span { class: "sort-glyph", " {header.glyph}" }
                                }
                            }
                        }
                    }
                }
                tbody {
                    if rows.is_empty() {
                        tr {
                            td {
                                colspan: "{colspan}",
                                style: "{empty_row_style()}",
                                "{EMPTY_MESSAGE}"
                            }
                        }
                    }
                    for row in rows {
                        tr {
                            for cell in row {
                                td {
                                    style: "{table_cell_style()}",
                                    {match cell {
                                        CellView::Text(text) => rsx! { "{text}" },
                                        CellView::Link { href, text } => rsx! {
                                            a {
                                                href: "{href}",
                                                target: "_blank",
                                                rel: "noopener noreferrer",
                                                "{text}"
                                            }
                                        },
                                    }}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
