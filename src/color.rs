use std::collections::BTreeMap;
use std::str::FromStr;

use eframe::egui::Color32;
use palette::Srgb;

use crate::data::model::Category;

/// Series colour when no category colouring applies.
pub const DEFAULT_SERIES_HEX: &str = "#636efa";

/// Opacity of histogram bars.
pub const HISTOGRAM_OPACITY: f32 = 0.75;

// ---------------------------------------------------------------------------
// Hex parsing
// ---------------------------------------------------------------------------

/// Parse `#rrggbb` into a colour, falling back to grey on malformed input.
pub fn hex_color(hex: &str) -> Color32 {
    match Srgb::<u8>::from_str(hex) {
        Ok(rgb) => Color32::from_rgb(rgb.red, rgb.green, rgb.blue),
        Err(e) => {
            log::warn!("Invalid colour '{hex}': {e}");
            Color32::GRAY
        }
    }
}

pub fn default_series_color() -> Color32 {
    hex_color(DEFAULT_SERIES_HEX)
}

pub fn histogram_color() -> Color32 {
    default_series_color().gamma_multiply(HISTOGRAM_OPACITY)
}

// ---------------------------------------------------------------------------
// Color mapping: category → Color32
// ---------------------------------------------------------------------------

/// Fixed colours for the derived gender categories.
#[derive(Debug, Clone)]
pub struct ColorMap {
    mapping: BTreeMap<Category, Color32>,
    default_color: Color32,
}

impl Default for ColorMap {
    fn default() -> Self {
        let mapping = [
            (Category::Male, hex_color("#1958a3")),
            (Category::Female, hex_color("#69a6d8")),
        ]
        .into_iter()
        .collect();

        ColorMap {
            mapping,
            default_color: default_series_color(),
        }
    }
}

impl ColorMap {
    pub fn color_for(&self, category: Category) -> Color32 {
        self.mapping
            .get(&category)
            .copied()
            .unwrap_or(self.default_color)
    }

    /// Colour used when the scatter is not split by category.
    pub fn default_color(&self) -> Color32 {
        self.default_color
    }

    /// Return the legend entries (category label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(String, Color32)> {
        self.mapping
            .iter()
            .map(|(cat, c)| (cat.to_string(), *c))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_colours() {
        assert_eq!(hex_color("#1958a3"), Color32::from_rgb(0x19, 0x58, 0xa3));
        assert_eq!(hex_color("not a colour"), Color32::GRAY);
    }

    #[test]
    fn categories_have_distinct_colours() {
        let cm = ColorMap::default();
        assert_eq!(cm.color_for(Category::Female), hex_color("#69a6d8"));
        assert_ne!(cm.color_for(Category::Male), cm.color_for(Category::Female));
        let legend = cm.legend_entries();
        assert_eq!(legend[0].0, "male");
        assert_eq!(legend[1].0, "female");
    }
}
