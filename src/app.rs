use std::sync::Arc;

use eframe::egui;
use space_missions::data::model::Dataset;

use crate::state::AppState;
use crate::ui::{dashboard, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct SpaceMissionsApp {
    pub state: AppState,
}

impl SpaceMissionsApp {
    /// Start with an already loaded dataset, or empty with a message.
    pub fn new(dataset: Option<Arc<Dataset>>, status_message: Option<String>) -> Self {
        let mut state = AppState::default();
        if let Some(ds) = dataset {
            state.set_dataset(ds);
        }
        state.status_message = status_message;
        Self { state }
    }
}

impl eframe::App for SpaceMissionsApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: filters ----
        egui::SidePanel::left("filter_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: metrics, charts, table ----
        egui::CentralPanel::default().show(ctx, |ui| {
            dashboard::central(ui, &mut self.state);
        });
    }
}
