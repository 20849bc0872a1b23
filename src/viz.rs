//! Visual description of data series: the pairing of a color scale and a
//! marker-radius scale, and the chart-level bookkeeping around multiple
//! series.
//!
//! One series drives two visual channels. Region fills and marker fills share
//! a single color scale; marker sizes come from a separate numeric scale.
//! Both scales share the bucket count and boundary scale so a value lands in
//! the same bucket on either channel.

use crate::color;
use crate::error::{ChartError, ScaleError};
use crate::registry::CountryRegistry;
use crate::scale::BucketScale;
use crate::series::PreparedSeries;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Marker radius bounds in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct RadiusRange {
    pub min: f64,
    pub max: f64,
}

/// Chart-level configuration the host may override.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub marker_radius: RadiusRange,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            marker_radius: RadiusRange { min: 4.0, max: 7.0 },
        }
    }
}

/// Declarative description of one series' visual encoding.
#[derive(Debug, Clone, Deserialize)]
pub struct VisualSpec {
    /// Bucket count shared by the color and radius scales.
    pub buckets: usize,
    /// Fill at the low end of the value domain.
    pub color_min: String,
    /// Fill at the high end of the value domain.
    pub color_max: String,
    /// Fill for regions without data; defaults to `color_min` when absent.
    pub null_value_color: Option<String>,
    /// Named boundary scale: `"linear"` or `"log"`.
    pub scale_function: String,
    /// Shown in the series switcher when the chart has several series.
    pub label: Option<String>,
}

/// Paired scales driving one series' visual channels.
#[derive(Debug)]
pub struct SeriesVisual {
    pub color_scale: BucketScale,
    pub radius_scale: BucketScale,
    pub label: Option<String>,
}

impl SeriesVisual {
    /// Wire both scales from a spec. The radius scale maps missing data to a
    /// radius of `0` so countries without data draw no marker.
    pub fn from_spec(spec: &VisualSpec, config: &ChartConfig) -> Result<Self, ChartError> {
        let mut color_scale = BucketScale::new();
        color_scale.set_bucket_count(spec.buckets)?;
        if let Some(null_color) = &spec.null_value_color {
            let parsed = color::parse(null_color).ok_or(ScaleError::InvalidArgument(
                "null value color is not a valid color spec",
            ))?;
            color_scale.set_null_value(parsed);
        }
        color_scale.set_range(spec.color_min.as_str(), spec.color_max.as_str())?;
        color_scale.set_scale_function(&spec.scale_function)?;

        let mut radius_scale = BucketScale::new();
        radius_scale.set_bucket_count(spec.buckets)?;
        radius_scale.set_null_value(0.0);
        radius_scale.set_range(config.marker_radius.min, config.marker_radius.max)?;
        radius_scale.set_scale_function(&spec.scale_function)?;

        Ok(Self {
            color_scale,
            radius_scale,
            label: spec.label.clone(),
        })
    }

    /// Feed a prepared series' extremes into both scales and rebuild their
    /// bucket tables.
    ///
    /// The color scale serves regions and markers alike, so its domain covers
    /// the larger of the two maxima. The radius scale only ever sees marker
    /// values.
    pub fn apply_series(&mut self, series: &PreparedSeries) -> Result<(), ChartError> {
        let marker_max = series.max_marker.unwrap_or(0.0);
        let overall_max = marker_max.max(series.max_visible.unwrap_or(0.0));

        self.color_scale.set_extremes(0.0, overall_max)?;
        self.color_scale.calculate_buckets()?;

        self.radius_scale.set_extremes(0.0, marker_max)?;
        self.radius_scale.calculate_buckets()?;

        Ok(())
    }
}

/// Data-side state of a multi-series chart: visual descriptions, prepared
/// datasets and the active series index. No DOM, no tooltip — the rendering
/// widget consumes what this holds.
#[derive(Debug, Default)]
pub struct ChartModel {
    visuals: Vec<SeriesVisual>,
    data: Vec<PreparedSeries>,
    active: usize,
}

impl ChartModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visual description. Must be called before (or together
    /// with) the matching [`update_data`](Self::update_data).
    pub fn update_visuals(&mut self, visuals: Vec<SeriesVisual>) {
        self.visuals = visuals;
    }

    /// Prepare every input series against the registry and reconfigure the
    /// scales. The visual description must cover exactly as many series as
    /// the input supplies.
    pub fn update_data(
        &mut self,
        registry: &CountryRegistry,
        inputs: &[BTreeMap<String, f64>],
    ) -> Result<(), ChartError> {
        if self.visuals.is_empty() || self.visuals.len() != inputs.len() {
            return Err(ChartError::SeriesMismatch {
                visuals: self.visuals.len(),
                series: inputs.len(),
            });
        }

        let mut data = Vec::with_capacity(inputs.len());
        for input in inputs {
            data.push(PreparedSeries::prepare(registry, input)?);
        }
        for (visual, series) in self.visuals.iter_mut().zip(&data) {
            visual.apply_series(series)?;
        }

        self.data = data;
        if self.active >= self.data.len() {
            self.active = 0;
        }
        Ok(())
    }

    /// Switch the active series.
    pub fn change_series(&mut self, index: usize) -> Result<(), ChartError> {
        if index >= self.data.len() {
            return Err(ChartError::UnknownSeries(index));
        }
        self.active = index;
        Ok(())
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    /// The active series' visual and prepared data, once data has been set.
    pub fn active(&self) -> Option<(&SeriesVisual, &PreparedSeries)> {
        Some((self.visuals.get(self.active)?, self.data.get(self.active)?))
    }

    pub fn series_count(&self) -> usize {
        self.data.len()
    }

    /// Labels for the series switcher. A single-series chart shows no
    /// switcher, so this is empty unless there are at least two series.
    pub fn series_labels(&self) -> Vec<&str> {
        if self.visuals.len() > 1 {
            self.visuals
                .iter()
                .map(|v| v.label.as_deref().unwrap_or(""))
                .collect()
        } else {
            Vec::new()
        }
    }
}
