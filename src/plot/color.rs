// src/plot/color.rs
use eframe::egui::Color32;
use crate::config::MetricValue;

/// Colour for missing values (#808080).
pub const NAN_COLOR: Color32 = Color32::from_rgb(128, 128, 128);

/// Linear mapping of [low, high] onto a palette, one equal-width bin per colour.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScale {
    pub palette: Vec<Color32>,
    pub low: f64,
    pub high: f64,
    pub nan_color: Color32,
}

impl ColorScale {
    pub fn new(palette: Vec<Color32>, low: f64, high: f64) -> Self {
        Self {
            palette,
            low,
            high,
            nan_color: NAN_COLOR,
        }
    }

    pub fn color(&self, value: MetricValue) -> Color32 {
        match value {
            MetricValue::Value(v) if v.is_finite() => self.color_for(v),
            _ => self.nan_color,
        }
    }

    fn color_for(&self, value: f64) -> Color32 {
        let (Some(&first), Some(&last)) = (self.palette.first(), self.palette.last()) else {
            return self.nan_color;
        };
        if value <= self.low {
            return first;
        }
        if value >= self.high {
            return last;
        }
        let n = self.palette.len();
        let bin = ((value - self.low) / (self.high - self.low) * n as f64).floor() as usize;
        self.palette[bin.min(n - 1)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scale() -> ColorScale {
        let palette = (0..4u8).map(|i| Color32::from_gray(i * 50)).collect();
        ColorScale::new(palette, 0.0, 100.0)
    }

    #[test]
    fn test_bins() {
        let s = scale();
        assert_eq!(s.color(MetricValue::Value(0.0)), Color32::from_gray(0));
        assert_eq!(s.color(MetricValue::Value(24.9)), Color32::from_gray(0));
        assert_eq!(s.color(MetricValue::Value(25.0)), Color32::from_gray(50));
        assert_eq!(s.color(MetricValue::Value(99.0)), Color32::from_gray(150));
        assert_eq!(s.color(MetricValue::Value(100.0)), Color32::from_gray(150));
    }

    #[test]
    fn test_out_of_range_clamps() {
        let s = scale();
        assert_eq!(s.color(MetricValue::Value(-10.0)), Color32::from_gray(0));
        assert_eq!(s.color(MetricValue::Value(1e9)), Color32::from_gray(150));
    }

    #[test]
    fn test_no_data_uses_nan_color() {
        assert_eq!(scale().color(MetricValue::NoData), Color32::from_rgb(0x80, 0x80, 0x80));
    }
}
