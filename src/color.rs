use std::collections::{BTreeMap, BTreeSet};

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Fixed colours
// ---------------------------------------------------------------------------

pub const ACCENT: Color32 = Color32::from_rgb(0x4a, 0x9e, 0xff);
pub const SECONDARY_TEXT: Color32 = Color32::from_rgb(0x86, 0x86, 0x8b);
pub const WARNING: Color32 = Color32::from_rgb(0xff, 0xa9, 0x4d);

/// Colour for a mission outcome; unknown outcomes are grey.
pub fn status_color(status: &str) -> Color32 {
    match status {
        "Success" => Color32::from_rgb(0x4e, 0xcd, 0xc4),
        "Failure" => Color32::from_rgb(0xff, 0x6b, 0x6b),
        "Partial Failure" => WARNING,
        "Prelaunch Failure" => Color32::from_rgb(0x84, 0x5e, 0xf7),
        _ => Color32::GRAY,
    }
}

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.65, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Company → colour
// ---------------------------------------------------------------------------

/// Stable colour per company so a company keeps its colour across charts
/// and filter changes.
#[derive(Debug, Clone, Default)]
pub struct CompanyColors {
    mapping: BTreeMap<String, Color32>,
}

impl CompanyColors {
    pub fn new(companies: &BTreeSet<String>) -> Self {
        let palette = generate_palette(companies.len());
        let mapping = companies
            .iter()
            .cloned()
            .zip(palette)
            .collect();
        CompanyColors { mapping }
    }

    pub fn color_for(&self, company: &str) -> Color32 {
        self.mapping.get(company).copied().unwrap_or(ACCENT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_size() {
        assert!(generate_palette(0).is_empty());
        assert_eq!(generate_palette(7).len(), 7);
    }

    #[test]
    fn company_colors_are_distinct_with_fallback() {
        let companies: BTreeSet<String> =
            ["CASC", "NASA", "SpaceX"].iter().map(|s| s.to_string()).collect();
        let colors = CompanyColors::new(&companies);
        assert_ne!(colors.color_for("CASC"), colors.color_for("NASA"));
        assert_eq!(colors.color_for("Unknown"), ACCENT);
    }

    #[test]
    fn canonical_statuses_have_colors() {
        assert_ne!(status_color("Success"), Color32::GRAY);
        assert_eq!(status_color("Scrubbed"), Color32::GRAY);
    }
}
