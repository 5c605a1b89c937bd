// src/plot/builder.rs
use anyhow::Result;
use eframe::egui::Color32;

use crate::config::{palette, Metric, NO_DATA};
use crate::error::AtlasError;
use crate::geo::{GeoPatch, GeoSource};
use super::color::ColorScale;
use super::format::NumeralFormat;
use super::ticks::{nice_ticks, DESIRED_TICKS};

pub const PLOT_WIDTH: f32 = 1100.0;
pub const PLOT_HEIGHT: f32 = 550.0;
pub const COLOR_BAR_WIDTH: f32 = 500.0;
pub const LABEL_STANDOFF: f32 = 10.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Horizontal legend strip drawn under the map.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorBar {
    pub ticks: Vec<Tick>,
    pub width: f32,
    pub label_standoff: f32,
    pub border_color: Option<Color32>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TooltipField {
    Country,
    Metric(Metric, NumeralFormat),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tooltip {
    pub rows: Vec<(String, TooltipField)>,
}

impl Tooltip {
    /// Label/value pairs for one country.
    pub fn lines(&self, patch: &GeoPatch) -> Vec<(String, String)> {
        self.rows.iter()
            .map(|(label, field)| {
                let value = match field {
                    TooltipField::Country => patch.country.clone(),
                    TooltipField::Metric(metric, format) => match patch.value(*metric).as_f64() {
                        Some(v) => format.format(v),
                        None => NO_DATA.to_string(),
                    },
                };
                (label.clone(), value)
            })
            .collect()
    }
}

/// Fill colours for every patch in the source, in source order.
#[derive(Debug, Clone, PartialEq)]
pub struct PatchLayer {
    pub fills: Vec<Color32>,
    pub line_color: Color32,
    pub line_width: f32,
    pub fill_alpha: f32,
}

/// Everything needed to draw one metric.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    pub metric: Metric,
    pub scale: ColorScale,
    pub color_bar: ColorBar,
    pub tooltip: Tooltip,
    pub layer: PatchLayer,
}

pub struct PlotBuilder<'a> {
    source: &'a GeoSource,
}

impl<'a> PlotBuilder<'a> {
    pub fn new(source: &'a GeoSource) -> Self {
        Self { source }
    }

    pub fn build_by_identifier(&self, identifier: &str) -> Result<Visual> {
        self.build(Metric::from_identifier(identifier)?)
    }

    pub fn build(&self, metric: Metric) -> Result<Visual> {
        let spec = metric.spec();

        let mut colors = palette::brewer(spec.palette, spec.palette_size)
            .ok_or_else(|| AtlasError::UnknownPalette {
                name: spec.palette.to_string(),
                size: spec.palette_size,
            })?;
        // Darkest colour at the top of the range.
        colors.reverse();
        let scale = ColorScale::new(colors, spec.min, spec.max);

        let format = NumeralFormat::parse(spec.format)?;
        let color_bar = ColorBar {
            ticks: nice_ticks(spec.min, spec.max, DESIRED_TICKS)
                .into_iter()
                .map(|value| Tick { value, label: format.format(value) })
                .collect(),
            width: COLOR_BAR_WIDTH,
            label_standoff: LABEL_STANDOFF,
            border_color: None,
        };

        let tooltip = Tooltip {
            rows: vec![
                ("Country".to_string(), TooltipField::Country),
                (spec.label.to_string(), TooltipField::Metric(metric, format)),
            ],
        };

        let layer = PatchLayer {
            fills: self.source.patches().iter()
                .map(|patch| scale.color(patch.value(metric)))
                .collect(),
            line_color: Color32::BLACK,
            line_width: 0.25,
            fill_alpha: 1.0,
        };

        tracing::debug!(metric = metric.identifier(), patches = layer.fills.len(), "built plot");

        Ok(Visual {
            metric,
            scale,
            color_bar,
            tooltip,
            layer,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::fixtures::geo_source;
    use crate::plot::color::NAN_COLOR;

    #[test]
    fn test_build_is_deterministic() {
        let source = geo_source();
        let builder = PlotBuilder::new(&source);
        let first = builder.build(Metric::CountNob).unwrap();
        let second = builder.build(Metric::CountNob).unwrap();

        assert_eq!(first.scale, second.scale);
        assert_eq!(first.color_bar, second.color_bar);
        assert_eq!(first, second);
    }

    #[test]
    fn test_palette_is_reversed() {
        let source = geo_source();
        let visual = PlotBuilder::new(&source).build(Metric::CountNob).unwrap();
        let bugn = palette::brewer("BuGn", 9).unwrap();

        assert_eq!(visual.scale.palette.first(), bugn.last());
        assert_eq!(visual.scale.palette.last(), bugn.first());
        assert_eq!((visual.scale.low, visual.scale.high), (1.0, 276.0));
    }

    #[test]
    fn test_fills_follow_source_order() {
        let source = geo_source();
        let visual = PlotBuilder::new(&source).build(Metric::Ladder).unwrap();

        assert_eq!(visual.layer.fills.len(), source.len());
        // Norway, ladder 2 of [1, 156]: lowest bin.
        assert_eq!(visual.layer.fills[0], visual.scale.palette[0]);
        // Iceland has no data.
        assert_eq!(visual.layer.fills[3], NAN_COLOR);
        assert_eq!(visual.layer.line_color, Color32::BLACK);
    }

    #[test]
    fn test_color_bar_labels_use_format() {
        let source = geo_source();
        let visual = PlotBuilder::new(&source).build(Metric::DataScientistAvSalary).unwrap();
        let labels: Vec<_> = visual.color_bar.ticks.iter().map(|t| t.label.as_str()).collect();

        assert_eq!(labels.first(), Some(&"$50,000"));
        assert_eq!(labels.last(), Some(&"$300,000"));
        assert_eq!(visual.color_bar.width, COLOR_BAR_WIDTH);
        assert!(visual.color_bar.border_color.is_none());
    }

    #[test]
    fn test_tooltip_lines() {
        let source = geo_source();
        let visual = PlotBuilder::new(&source).build(Metric::DataScientistAvSalary).unwrap();

        let norway = visual.tooltip.lines(&source.patches()[0]);
        assert_eq!(norway, vec![
            ("Country".to_string(), "Norway".to_string()),
            ("Average yearly data scientist salary".to_string(), "$68,000".to_string()),
        ]);

        let iceland = visual.tooltip.lines(&source.patches()[3]);
        assert_eq!(iceland[1].1, "No data");
    }

    #[test]
    fn test_build_by_identifier() {
        let source = geo_source();
        let builder = PlotBuilder::new(&source);

        assert_eq!(builder.build_by_identifier("count_sat").unwrap().metric, Metric::CountSat);
        let err = builder.build_by_identifier("median_rent").unwrap_err();
        assert!(matches!(err.downcast_ref::<AtlasError>(), Some(AtlasError::UnknownMetric(_))));
    }
}
