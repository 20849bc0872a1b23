//! Reconciliation of a sparse per-country dataset against the registry.
//!
//! The input is whatever subset of countries the backend happened to report.
//! Rendering needs more structure than that: every visible region must carry
//! a value (so the whole map paints), and small countries become markers only
//! when they actually have data.

use crate::error::RegistryError;
use crate::models::{Country, Datum};
use crate::registry::CountryRegistry;
use std::collections::BTreeMap;

/// One small-country marker: display metadata plus its value.
#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub country: Country,
    pub value: f64,
}

/// A dataset shaped for rendering, produced by [`PreparedSeries::prepare`].
#[derive(Debug, Clone, PartialEq)]
pub struct PreparedSeries {
    /// Every visible-tier country, with `Datum::Missing` where the input had
    /// no entry.
    pub visible_values: BTreeMap<String, Datum>,
    /// Small-tier countries present in the input with a non-zero value, in
    /// input key order.
    pub markers: Vec<Marker>,
    /// Largest present visible value; `None` when the input covered no
    /// visible country.
    pub max_visible: Option<f64>,
    /// Largest marker value; `None` when there are no markers.
    pub max_marker: Option<f64>,
}

impl PreparedSeries {
    /// Partition `data` by tier, default every uncovered visible country to
    /// `Missing`, drop zero-valued small countries, and cache both maxima so
    /// redraws don't recompute them.
    ///
    /// Codes the registry does not know ride along as visible values; the
    /// rendering widget ignores codes it has no geometry for.
    pub fn prepare(
        registry: &CountryRegistry,
        data: &BTreeMap<String, f64>,
    ) -> Result<Self, RegistryError> {
        let mut visible_values: BTreeMap<String, Datum> = registry
            .visible_countries()
            .map(|c| (c.alpha2.clone(), Datum::Missing))
            .collect();

        let mut markers = Vec::new();
        for (alpha2, &value) in data {
            if registry.is_small(alpha2) {
                if value != 0.0 {
                    markers.push(Marker {
                        country: registry.small_country(alpha2)?.clone(),
                        value,
                    });
                }
            } else {
                visible_values.insert(alpha2.clone(), Datum::Present(value));
            }
        }

        let max_visible = max_of(visible_values.values().filter_map(Datum::value));
        let max_marker = max_of(markers.iter().map(|m| m.value));

        Ok(Self {
            visible_values,
            markers,
            max_visible,
            max_marker,
        })
    }

    /// Marker values positionally aligned with [`markers`](Self::markers),
    /// the shape the widget's marker value channel consumes.
    pub fn marker_values(&self) -> Vec<f64> {
        self.markers.iter().map(|m| m.value).collect()
    }

    /// Visible values as plain widget numbers (`-1` for gaps).
    pub fn widget_visible_values(&self) -> BTreeMap<String, f64> {
        self.visible_values
            .iter()
            .map(|(code, datum)| (code.clone(), datum.widget_value()))
            .collect()
    }
}

fn max_of(values: impl Iterator<Item = f64>) -> Option<f64> {
    values.fold(None, |acc, v| Some(acc.map_or(v, |m: f64| m.max(v))))
}
