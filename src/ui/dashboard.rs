use eframe::egui::{self, RichText, Ui};

use crate::color::SECONDARY_TEXT;
use crate::state::AppState;
use crate::ui::{charts, table, thousands};

fn metric(ui: &mut Ui, value: String, label: &str) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(RichText::new(value).size(30.0).strong());
        ui.label(RichText::new(label.to_uppercase()).small().color(SECONDARY_TEXT));
    });
}

/// Headline numbers for the filtered view.
fn summary_row(ui: &mut Ui, state: &AppState) {
    let s = &state.summary;
    ui.columns(5, |cols| {
        metric(&mut cols[0], thousands(s.missions), "Missions");
        metric(&mut cols[1], format!("{:.1}%", s.success_rate), "Success Rate");
        metric(&mut cols[2], s.companies.to_string(), "Companies");
        metric(&mut cols[3], s.rockets.to_string(), "Rockets");
        metric(&mut cols[4], s.locations.to_string(), "Launch Sites");
    });
}

/// Whole-dataset reference figures.
fn quick_reference(ui: &mut Ui, state: &AppState) {
    let r = &state.reference;
    ui.label(RichText::new("Quick Reference").heading());
    ui.columns(3, |cols| {
        let ui = &mut cols[0];
        ui.label(RichText::new("MOST USED ROCKET").small().color(SECONDARY_TEXT));
        ui.label(&r.most_used_rocket);
        ui.add_space(8.0);
        ui.label(RichText::new("MISSION OUTCOMES").small().color(SECONDARY_TEXT));
        for (status, count) in r.status_counts.entries() {
            ui.label(format!("{status}: {}", thousands(count)));
        }

        let ui = &mut cols[1];
        ui.label(RichText::new("TOP 5 ORGANIZATIONS").small().color(SECONDARY_TEXT));
        for (company, count) in &r.top_companies {
            ui.label(format!("{company}: {}", thousands(*count)));
        }

        let ui = &mut cols[2];
        ui.label(RichText::new("AVERAGE MISSIONS PER YEAR").small().color(SECONDARY_TEXT));
        for (decade, avg) in &r.decade_averages {
            ui.label(format!("{decade}s: {avg:.1}"));
        }
    });
}

/// Render everything right of the filter panel.
pub fn central(ui: &mut Ui, state: &mut AppState) {
    if state.dataset.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a mission file to begin  (File → Open…)");
        });
        return;
    }

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            summary_row(ui, state);
            ui.separator();

            ui.columns(2, |cols| {
                charts::missions_over_time(&mut cols[0], state);
                charts::mission_outcomes(&mut cols[1], state);
            });
            ui.add_space(16.0);
            ui.columns(2, |cols| {
                charts::top_companies(&mut cols[0], state);
                charts::success_by_company(&mut cols[1], state);
            });
            ui.separator();

            table::mission_table(ui, state);
            ui.separator();

            quick_reference(ui, state);
        });
}
