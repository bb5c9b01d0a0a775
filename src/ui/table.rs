use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};
use space_missions::data::table::{SortField, SortOrder};

use crate::color::{status_color, SECONDARY_TEXT};
use crate::state::AppState;
use crate::ui::thousands;

const HEADERS: [&str; 8] = [
    "Date", "Company", "Mission", "Rocket", "Location", "Status", "Rocket Status",
    "Price ($M)",
];

/// Search box and sort pickers. Returns true when the table must be rebuilt.
fn controls(ui: &mut Ui, state: &mut AppState) -> bool {
    let mut changed = false;
    ui.horizontal(|ui: &mut Ui| {
        changed |= ui
            .add(
                egui::TextEdit::singleline(&mut state.table.search)
                    .hint_text("Search missions...")
                    .desired_width(280.0),
            )
            .changed();

        egui::ComboBox::from_id_salt("sort_by")
            .selected_text(state.table.sort_by.to_string())
            .show_ui(ui, |ui: &mut Ui| {
                for field in SortField::ALL {
                    changed |= ui
                        .selectable_value(&mut state.table.sort_by, field, field.to_string())
                        .changed();
                }
            });

        egui::ComboBox::from_id_salt("sort_order")
            .selected_text(state.table.order.label())
            .show_ui(ui, |ui: &mut Ui| {
                for order in SortOrder::ALL {
                    changed |= ui
                        .selectable_value(&mut state.table.order, order, order.label())
                        .changed();
                }
            });
    });
    changed
}

/// Searchable, sortable mission table over the filtered rows.
pub fn mission_table(ui: &mut Ui, state: &mut AppState) {
    ui.label(RichText::new("Mission Data").heading());

    if controls(ui, state) {
        state.refresh_table();
    }

    let Some(ds) = &state.dataset else {
        return;
    };
    let rows = &state.table_rows;

    TableBuilder::new(ui)
        .striped(true)
        .resizable(true)
        .cell_layout(egui::Layout::left_to_right(egui::Align::Center))
        .column(Column::auto())
        .column(Column::initial(140.0).clip(true))
        .column(Column::initial(180.0).clip(true))
        .column(Column::initial(150.0).clip(true))
        .column(Column::initial(260.0).clip(true))
        .column(Column::auto())
        .column(Column::auto())
        .column(Column::remainder())
        .min_scrolled_height(0.0)
        .max_scroll_height(400.0)
        .header(20.0, |mut header| {
            for title in HEADERS {
                header.col(|ui: &mut Ui| {
                    ui.strong(title);
                });
            }
        })
        .body(|body| {
            body.rows(18.0, rows.len(), |mut row| {
                let Some(rec) = rows.get(row.index()).and_then(|&i| ds.records.get(i)) else {
                    return;
                };
                row.col(|ui: &mut Ui| {
                    ui.label(rec.date.format("%Y-%m-%d").to_string());
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.company);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.mission);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.rocket);
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.location);
                });
                row.col(|ui: &mut Ui| {
                    let status = rec.mission_status.as_str();
                    ui.label(RichText::new(status).color(status_color(status)));
                });
                row.col(|ui: &mut Ui| {
                    ui.label(&rec.rocket_status);
                });
                row.col(|ui: &mut Ui| {
                    if let Some(price) = rec.price {
                        ui.label(format!("{price:.1}"));
                    }
                });
            });
        });

    ui.label(
        RichText::new(format!(
            "Showing {} of {} missions",
            thousands(state.table_rows.len()),
            thousands(state.visible_indices.len())
        ))
        .small()
        .color(SECONDARY_TEXT),
    );
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::HEADERS;

    #[test]
    fn column_titles_are_distinct() {
        let unique: HashSet<&str> = HEADERS.iter().copied().collect();
        assert_eq!(unique.len(), HEADERS.len());
        assert_eq!(HEADERS[6], "Rocket Status");
    }
}
