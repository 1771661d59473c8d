pub fn root_container_style() -> &'static str {
    "height: 100vh; display: flex; flex-direction: column; gap: 8px; padding: 12px; box-sizing: border-box; overflow: hidden; font-family: sans-serif;"
}

pub fn filter_bar_style() -> &'static str {
    "display: flex; gap: 12px; align-items: center; flex-wrap: wrap; padding: 8px 0;"
}

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #ddd;"
}

pub fn table_header_cell_style(sortable: bool) -> String {
    format!(
        "position: sticky; top: 0; z-index: 2; background: #f5f5f5; border: 1px solid #bbb; padding: 6px; text-align: left;{}",
        if sortable {
            " cursor: pointer; user-select: none;"
        } else {
            ""
        }
    )
}

pub fn table_cell_style() -> &'static str {
    "border: 1px solid #ddd; padding: 4px 6px; vertical-align: top;"
}

pub fn empty_row_style() -> &'static str {
    "border: 1px solid #ddd; padding: 12px; text-align: center; color: #666;"
}

pub fn pagination_style() -> &'static str {
    "display: flex; gap: 12px; align-items: center; justify-content: center; padding: 6px 0;"
}

pub fn summary_panel_style() -> &'static str {
    "border-top: 1px solid #ddd; padding-top: 6px; max-height: 30vh; overflow-y: auto;"
}

pub fn error_style() -> &'static str {
    "color: #b00020; font-family: sans-serif; padding: 24px;"
}
