use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::{status_color, ACCENT, SECONDARY_TEXT};
use crate::state::AppState;

const CHART_HEIGHT: f32 = 300.0;

fn chart_header(ui: &mut Ui, title: &str, caption: &str) {
    ui.label(RichText::new(title).heading());
    ui.label(RichText::new(caption).small().color(SECONDARY_TEXT));
    ui.add_space(4.0);
}

fn static_plot(id: &str) -> Plot {
    Plot::new(id)
        .height(CHART_HEIGHT)
        .legend(Legend::default())
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .allow_boxed_zoom(false)
}

// ---------------------------------------------------------------------------
// Missions over time
// ---------------------------------------------------------------------------

pub fn missions_over_time(ui: &mut Ui, state: &AppState) {
    chart_header(
        ui,
        "Missions Over Time",
        "Annual launch frequency showing historical trends in space exploration activity.",
    );

    let points: PlotPoints = state
        .yearly
        .iter()
        .map(|(&year, &count)| [f64::from(year), count as f64])
        .collect();

    static_plot("missions_over_time")
        .x_axis_label("Year")
        .y_axis_label("Missions")
        .show(ui, |plot_ui| {
            plot_ui.line(
                Line::new(points)
                    .name("Missions")
                    .color(ACCENT)
                    .fill(0.0_f32)
                    .width(2.0_f32),
            );
        });
}

// ---------------------------------------------------------------------------
// Mission outcomes
// ---------------------------------------------------------------------------

pub fn mission_outcomes(ui: &mut Ui, state: &AppState) {
    chart_header(
        ui,
        "Mission Outcomes",
        "Distribution of mission results across the selected launches.",
    );

    let total = state.summary.missions.max(1) as f64;
    static_plot("mission_outcomes")
        .y_axis_label("Share of missions (%)")
        .show_x(false)
        .show(ui, |plot_ui| {
            for (i, (status, count)) in state.statuses.iter().enumerate() {
                let share = *count as f64 / total * 100.0;
                let bar = Bar::new(i as f64, share)
                    .name(format!("{status}: {count}"))
                    .width(0.7);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .name(status)
                        .color(status_color(status)),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Leading organisations / success rate by company
// ---------------------------------------------------------------------------

/// One horizontal bar per company, largest at the top; each bar is its own
/// series so the legend names the companies.
fn company_bars(ui: &mut Ui, id: &str, x_label: &str, state: &AppState, value: impl Fn(usize) -> f64) {
    let n = state.company_rates.len();
    static_plot(id)
        .x_axis_label(x_label)
        .show_y(false)
        .show(ui, |plot_ui| {
            for (i, rate) in state.company_rates.iter().enumerate() {
                let bar = Bar::new((n - i) as f64, value(i))
                    .name(&rate.company)
                    .width(0.7);
                plot_ui.bar_chart(
                    BarChart::new(vec![bar])
                        .horizontal()
                        .name(&rate.company)
                        .color(state.company_colors.color_for(&rate.company)),
                );
            }
        });
}

pub fn top_companies(ui: &mut Ui, state: &AppState) {
    chart_header(
        ui,
        "Leading Organizations",
        "Top 10 companies by total number of launches.",
    );
    company_bars(ui, "top_companies", "Number of missions", state, |i| {
        state.company_rates[i].missions as f64
    });
}

pub fn success_by_company(ui: &mut Ui, state: &AppState) {
    chart_header(
        ui,
        "Success Rate by Company",
        "Reliability comparison of the top 10 launch providers.",
    );
    if state.company_rates.is_empty() {
        ui.label("No data available for the selected filters.");
        return;
    }
    company_bars(ui, "success_by_company", "Success rate (%)", state, |i| {
        state.company_rates[i].success_rate
    });
}
