use dioxus::prelude::*;
use rfd::FileDialog;

use crate::domain::entities::view::SchemaVariant;
use crate::infra::export::csv::{default_export_file_name, export_records_csv};
use crate::usecase::services::view_controller::ViewController;

#[component]
pub fn ExportButton(
    controller: Signal<Option<ViewController>>,
    schema: SchemaVariant,
    mut status: Signal<String>,
) -> Element {
    rsx! {
        button {
            id: "export-btn",
            onclick: move |_| {
                let Some(path) = FileDialog::new()
                    .add_filter("CSV", &["csv"])
                    .set_file_name(default_export_file_name())
                    .save_file() else {
                    status.set("Export cancelled".to_string());
                    return;
                };

                let guard = controller.read();
                let Some(ctrl) = guard.as_ref() else {
                    return;
                };
                match export_records_csv(&path, schema.columns(), ctrl.filtered()) {
                    Ok(count) => {
                        status.set(format!("Exported {count} records to {}", path.display()));
                    }
                    Err(err) => {
                        tracing::warn!(error = %err, "export failed");
                        status.set(format!("Export failed: {err:#}"));
                    }
                }
            },
            "Export CSV"
        }
    }
}
