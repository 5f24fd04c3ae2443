//! Fixed styling shared by every chart.

use crate::spec::{CellStyle, Font, Layout, Margin};

pub const BACKGROUND: &str = "#ffffff";
pub const TEXT_COLOR: &str = "#333";
pub const TITLE_FONT_SIZE: u32 = 18;
pub const CHART_HEIGHT: u32 = 500;
pub const TABLE_HEIGHT: u32 = 600;

pub const HEADER_FILL: &str = "#0d6efd";
pub const CELL_FILL: &str = "#f8f9fa";
pub const TABLE_LINE: &str = "white";

/// Qualitative "Bold" palette, one color per bar in order of appearance.
pub const BOLD: [&str; 11] = [
    "rgb(127, 60, 141)",
    "rgb(17, 165, 121)",
    "rgb(57, 105, 172)",
    "rgb(242, 180, 1)",
    "rgb(231, 63, 116)",
    "rgb(128, 186, 90)",
    "rgb(230, 131, 16)",
    "rgb(0, 134, 149)",
    "rgb(207, 28, 144)",
    "rgb(249, 123, 114)",
    "rgb(165, 170, 153)",
];

/// Name of the continuous scale used by the choropleth.
pub const RDYLBU_NAME: &str = "RdYlBu";

/// Diverging red-yellow-blue stops, low values red, high values blue.
pub const RDYLBU: [[u8; 3]; 11] = [
    [165, 0, 38],
    [215, 48, 39],
    [244, 109, 67],
    [253, 174, 97],
    [254, 224, 144],
    [255, 255, 191],
    [224, 243, 248],
    [171, 217, 233],
    [116, 173, 209],
    [69, 117, 180],
    [49, 54, 149],
];

pub fn bold_color(index: usize) -> &'static str {
    BOLD[index % BOLD.len()]
}

/// Color of `value` on the RdYlBu scale stretched over `[min, max]`.
///
/// A degenerate range maps everything to the scale midpoint.
pub fn rdylbu_color(value: f64, min: f64, max: f64) -> String {
    let t = if max > min {
        ((value - min) / (max - min)).clamp(0.0, 1.0)
    } else {
        0.5
    };
    let pos = t * (RDYLBU.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = (lo + 1).min(RDYLBU.len() - 1);
    let frac = pos - lo as f64;

    let channel = |i: usize| {
        let a = RDYLBU[lo][i] as f64;
        let b = RDYLBU[hi][i] as f64;
        (a + (b - a) * frac).round() as u8
    };
    format!("rgb({}, {}, {})", channel(0), channel(1), channel(2))
}

fn title_font() -> Font {
    Font {
        size: Some(TITLE_FONT_SIZE),
        color: TEXT_COLOR,
    }
}

fn body_font() -> Font {
    Font {
        size: None,
        color: TEXT_COLOR,
    }
}

pub fn bar_layout() -> Layout {
    Layout {
        height: CHART_HEIGHT,
        paper_bgcolor: BACKGROUND,
        plot_bgcolor: BACKGROUND,
        margin: Margin {
            t: Some(50),
            b: Some(50),
            ..Margin::default()
        },
        title_font: title_font(),
        font: body_font(),
        geo_bgcolor: None,
    }
}

pub fn map_layout() -> Layout {
    Layout {
        height: CHART_HEIGHT,
        paper_bgcolor: BACKGROUND,
        plot_bgcolor: BACKGROUND,
        margin: Margin {
            t: Some(50),
            l: Some(0),
            r: Some(0),
            b: Some(0),
        },
        title_font: title_font(),
        font: body_font(),
        geo_bgcolor: Some(BACKGROUND),
    }
}

pub fn table_layout() -> Layout {
    Layout {
        height: TABLE_HEIGHT,
        paper_bgcolor: BACKGROUND,
        plot_bgcolor: BACKGROUND,
        margin: Margin {
            t: Some(0),
            l: Some(0),
            r: Some(0),
            b: Some(0),
        },
        title_font: title_font(),
        font: body_font(),
        geo_bgcolor: None,
    }
}

pub fn table_header_style() -> CellStyle {
    CellStyle {
        align: "left",
        fill_color: HEADER_FILL,
        line_color: TABLE_LINE,
        font: Font {
            size: Some(12),
            color: "white",
        },
    }
}

pub fn table_cell_style() -> CellStyle {
    CellStyle {
        align: "left",
        fill_color: CELL_FILL,
        line_color: TABLE_LINE,
        font: Font {
            size: Some(11),
            color: TEXT_COLOR,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_palette_cycles() {
        assert_eq!(bold_color(0), BOLD[0]);
        assert_eq!(bold_color(11), BOLD[0]);
        assert_eq!(bold_color(14), BOLD[3]);
    }

    #[test]
    fn rdylbu_endpoints_and_midpoint() {
        assert_eq!(rdylbu_color(30.0, 30.0, 80.0), "rgb(165, 0, 38)");
        assert_eq!(rdylbu_color(80.0, 30.0, 80.0), "rgb(49, 54, 149)");
        assert_eq!(rdylbu_color(55.0, 30.0, 80.0), "rgb(255, 255, 191)");
    }

    #[test]
    fn rdylbu_clamps_and_handles_flat_range() {
        assert_eq!(rdylbu_color(-5.0, 0.0, 10.0), "rgb(165, 0, 38)");
        assert_eq!(rdylbu_color(7.0, 7.0, 7.0), "rgb(255, 255, 191)");
    }

    #[test]
    fn rdylbu_interpolates_between_stops() {
        // Halfway between stop 0 (165,0,38) and stop 1 (215,48,39)
        assert_eq!(rdylbu_color(0.05, 0.0, 1.0), "rgb(190, 24, 39)");
    }
}
