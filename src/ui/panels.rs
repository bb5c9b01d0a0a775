use std::collections::BTreeSet;
use std::sync::Arc;

use eframe::egui::{self, Color32, RichText, Ui};
use egui_extras::DatePickerButton;
use space_missions::data::filter::{
    DateFilterStatus, Selection, ALL_COMPANIES, ALL_ROCKET_STATUSES, ALL_STATUSES,
};
use space_missions::data::loader::load_file;

use crate::color::{SECONDARY_TEXT, WARNING};
use crate::state::AppState;
use crate::ui::thousands;

// ---------------------------------------------------------------------------
// Left side panel – filter widgets
// ---------------------------------------------------------------------------

fn filter_label(ui: &mut Ui, text: &str) {
    ui.add_space(8.0);
    ui.label(RichText::new(text.to_uppercase()).small().color(SECONDARY_TEXT));
}

/// Choice box with a leading "all" entry. Returns the new selection when
/// the user picked something.
fn selection_combo(
    ui: &mut Ui,
    id: &str,
    sentinel: &str,
    options: &BTreeSet<String>,
    current: &Selection,
) -> Option<Selection> {
    let mut picked = None;
    let text = RichText::new(current.label(sentinel));
    let text = if current.is_active() { text.strong() } else { text };
    egui::ComboBox::from_id_salt(id)
        .selected_text(text)
        .width(ui.available_width())
        .show_ui(ui, |ui: &mut Ui| {
            if ui.selectable_label(!current.is_active(), sentinel).clicked() {
                picked = Some(Selection::All);
            }
            for value in options {
                if ui
                    .selectable_label(current.matches(value) && current.is_active(), value)
                    .clicked()
                {
                    picked = Some(Selection::from_label(value, sentinel));
                }
            }
        });
    picked
}

/// Render the left filter panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Filters");
    ui.separator();

    let Some(dataset) = state.dataset.clone() else {
        ui.label("No dataset loaded.");
        return;
    };

    if ui
        .add_sized([ui.available_width(), 24.0], egui::Button::new("Reset"))
        .clicked()
    {
        state.reset_filters();
    }
    ui.separator();

    // ---- Date range ----
    filter_label(ui, "Date range");
    let mut dates_changed = false;
    ui.horizontal(|ui: &mut Ui| {
        dates_changed |= ui.checkbox(&mut state.use_start, "From").changed();
        ui.add_enabled_ui(state.use_start, |ui: &mut Ui| {
            dates_changed |= ui
                .add(DatePickerButton::new(&mut state.start_date).id_salt("start_date"))
                .changed();
        });
    });
    ui.horizontal(|ui: &mut Ui| {
        dates_changed |= ui.checkbox(&mut state.use_end, "To").changed();
        ui.add_enabled_ui(state.use_end, |ui: &mut Ui| {
            dates_changed |= ui
                .add(DatePickerButton::new(&mut state.end_date).id_salt("end_date"))
                .changed();
        });
    });
    if dates_changed {
        state.apply_date_inputs();
    }
    if state.date_status == DateFilterStatus::Incomplete {
        ui.label(RichText::new("Select both dates for range filter").small().color(WARNING));
    }

    // ---- Column predicates ----
    filter_label(ui, "Company");
    if let Some(sel) = selection_combo(
        ui,
        "company_filter",
        ALL_COMPANIES,
        &dataset.companies,
        &state.filter.company,
    ) {
        state.set_company(sel);
    }

    filter_label(ui, "Mission status");
    if let Some(sel) = selection_combo(
        ui,
        "mission_status_filter",
        ALL_STATUSES,
        &dataset.mission_statuses,
        &state.filter.mission_status,
    ) {
        state.set_mission_status(sel);
    }

    filter_label(ui, "Rocket status");
    if let Some(sel) = selection_combo(
        ui,
        "rocket_status_filter",
        ALL_ROCKET_STATUSES,
        &dataset.rocket_statuses,
        &state.filter.rocket_status,
    ) {
        state.set_rocket_status(sel);
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!(
                "{} missions loaded, {} visible",
                thousands(ds.len()),
                thousands(state.visible_indices.len())
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Pick a file and swap in the new dataset once it is fully loaded.
pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open space missions data")
        .add_filter("Supported files", &["csv", "json"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .pick_file();

    if let Some(path) = file {
        match load_file(&path) {
            Ok(dataset) => state.set_dataset(Arc::new(dataset)),
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }
}
