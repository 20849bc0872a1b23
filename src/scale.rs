//! Bucketed value-to-visual scale.
//!
//! A [`BucketScale`] slices a continuous input domain into a small number of
//! contiguous buckets and pairs each bucket with one interpolated output
//! value, either a color or a number. Bucket *boundaries* follow the
//! configured [`BoundaryScale`] (linear or logarithmic); mapped *output*
//! values are always interpolated linearly. Only boundaries may be
//! log-scaled.

use crate::color;
use crate::error::ScaleError;
use crate::models::Datum;
use log::debug;
use palette::Srgb;
use std::fmt;

/// Endpoint accepted by [`BucketScale::set_range`]: a plain number or a
/// color specification string.
#[derive(Debug, Clone, PartialEq)]
pub enum RangeEndpoint {
    Number(f64),
    Spec(String),
}

impl From<f64> for RangeEndpoint {
    fn from(v: f64) -> Self {
        RangeEndpoint::Number(v)
    }
}

impl From<&str> for RangeEndpoint {
    fn from(s: &str) -> Self {
        RangeEndpoint::Spec(s.to_string())
    }
}

impl From<String> for RangeEndpoint {
    fn from(s: String) -> Self {
        RangeEndpoint::Spec(s)
    }
}

/// Interpolation range. Whether a scale maps to colors or numbers is decided
/// once, when the range is set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleRange {
    Numeric { min: f64, max: f64 },
    Color { min: Srgb<u8>, max: Srgb<u8> },
}

impl ScaleRange {
    /// Output value at the low end of the range.
    fn min_value(&self) -> ScaleValue {
        match *self {
            ScaleRange::Numeric { min, .. } => ScaleValue::Number(min),
            ScaleRange::Color { min, .. } => ScaleValue::Color(min),
        }
    }
}

/// One interpolated output value: a marker radius, a fill color, …
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ScaleValue {
    Number(f64),
    Color(Srgb<u8>),
}

impl ScaleValue {
    pub fn as_number(&self) -> Option<f64> {
        match *self {
            ScaleValue::Number(v) => Some(v),
            ScaleValue::Color(_) => None,
        }
    }

    pub fn as_color(&self) -> Option<Srgb<u8>> {
        match *self {
            ScaleValue::Color(c) => Some(c),
            ScaleValue::Number(_) => None,
        }
    }
}

/// Numbers render as-is, colors as lowercase `#rrggbb` — the two forms the
/// rendering widget's value channels accept.
impl fmt::Display for ScaleValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            ScaleValue::Number(v) => write!(f, "{v}"),
            ScaleValue::Color(c) => write!(f, "{}", color::to_hex(c)),
        }
    }
}

impl From<f64> for ScaleValue {
    fn from(v: f64) -> Self {
        ScaleValue::Number(v)
    }
}

impl From<Srgb<u8>> for ScaleValue {
    fn from(c: Srgb<u8>) -> Self {
        ScaleValue::Color(c)
    }
}

/// A contiguous sub-range of the input domain paired with its output value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bucket {
    pub domain_min: f64,
    pub domain_max: f64,
    pub value: ScaleValue,
}

/// Strategy for placing bucket boundaries across the input domain.
///
/// `boundary(min, max, steps, step)` returns the domain position of boundary
/// `step` when the domain `[min, max]` is divided into `steps` buckets.
/// Closures with the same signature implement this trait, so a one-off curve
/// can be passed without a named type.
pub trait BoundaryScale {
    fn boundary(&self, min: f64, max: f64, steps: usize, step: usize) -> f64;
}

impl<F> BoundaryScale for F
where
    F: Fn(f64, f64, usize, usize) -> f64,
{
    fn boundary(&self, min: f64, max: f64, steps: usize, step: usize) -> f64 {
        self(min, max, steps, step)
    }
}

/// Evenly spaced boundaries (standard lerp over steps/step).
#[derive(Debug, Clone, Copy, Default)]
pub struct Linear;

impl BoundaryScale for Linear {
    fn boundary(&self, min: f64, max: f64, steps: usize, step: usize) -> f64 {
        (max - min) / steps as f64 * step as f64 + min
    }
}

/// Logarithmically spaced boundaries.
///
/// Steps `0` and `steps - 1` are pinned to `min` and `max` exactly, which
/// avoids `log10(0)` and floating rounding at the extremes; intermediate
/// boundaries follow a log curve anchored to pass through `(0, min)` and
/// `(steps, max)`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logarithmic;

impl BoundaryScale for Logarithmic {
    fn boundary(&self, min: f64, max: f64, steps: usize, step: usize) -> f64 {
        if step == 0 {
            min
        } else if step + 1 == steps {
            max
        } else {
            10f64.powf(((max - min) / steps as f64 * step as f64 + 1.0).log10()) + min - 1.0
        }
    }
}

fn scale_by_name(name: &str) -> Result<Box<dyn BoundaryScale + Send + Sync>, ScaleError> {
    match name {
        "linear" => Ok(Box::new(Linear)),
        "log" => Ok(Box::new(Logarithmic)),
        other => Err(ScaleError::UnknownScaleFunction(other.to_string())),
    }
}

/// Maps data values onto a bucketed visual scale.
///
/// Configure the range, the extreme values observed in the dataset, the
/// bucket count and the boundary scale, then call
/// [`calculate_buckets`](Self::calculate_buckets). Recalculation after any of
/// those four inputs changes is the caller's responsibility; nothing here
/// invalidates automatically.
#[derive(Default)]
pub struct BucketScale {
    range: Option<ScaleRange>,
    extremes: Option<(f64, f64)>,
    bucket_count: Option<usize>,
    null_value: Option<ScaleValue>,
    scale_fn: Option<Box<dyn BoundaryScale + Send + Sync>>,
    buckets: Vec<Bucket>,
}

impl BucketScale {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output range. Two parseable color specs make this a color
    /// scale, two finite numbers a numeric scale; anything else is invalid.
    pub fn set_range(
        &mut self,
        min: impl Into<RangeEndpoint>,
        max: impl Into<RangeEndpoint>,
    ) -> Result<(), ScaleError> {
        let range = match (min.into(), max.into()) {
            (RangeEndpoint::Number(min), RangeEndpoint::Number(max))
                if min.is_finite() && max.is_finite() =>
            {
                ScaleRange::Numeric { min, max }
            }
            (RangeEndpoint::Spec(min), RangeEndpoint::Spec(max)) => {
                match (color::parse(&min), color::parse(&max)) {
                    (Some(min), Some(max)) => ScaleRange::Color { min, max },
                    _ => return Err(ScaleError::InvalidRange),
                }
            }
            _ => return Err(ScaleError::InvalidRange),
        };
        self.range = Some(range);
        Ok(())
    }

    /// Set the domain bounds observed in the dataset.
    pub fn set_extremes(&mut self, min: f64, max: f64) -> Result<(), ScaleError> {
        if !min.is_finite() || !max.is_finite() {
            return Err(ScaleError::InvalidArgument("extreme values must be finite numbers"));
        }
        if min > max {
            return Err(ScaleError::RangeOrder { min, max });
        }
        self.extremes = Some((min, max));
        Ok(())
    }

    pub fn set_bucket_count(&mut self, count: usize) -> Result<(), ScaleError> {
        if count < 1 {
            return Err(ScaleError::InvalidArgument("bucket count must be at least 1"));
        }
        self.bucket_count = Some(count);
        Ok(())
    }

    /// Output substituted for [`Datum::Missing`] lookups.
    pub fn set_null_value(&mut self, value: impl Into<ScaleValue>) {
        self.null_value = Some(value.into());
    }

    /// Select a named boundary scale: `"linear"` or `"log"`.
    pub fn set_scale_function(&mut self, name: &str) -> Result<(), ScaleError> {
        self.scale_fn = Some(scale_by_name(name)?);
        Ok(())
    }

    /// Install a caller-supplied boundary scale.
    pub fn set_custom_scale_function(&mut self, scale: Box<dyn BoundaryScale + Send + Sync>) {
        self.scale_fn = Some(scale);
    }

    /// The current bucket table (empty until `calculate_buckets` succeeds).
    pub fn buckets(&self) -> &[Bucket] {
        &self.buckets
    }

    /// Recompute the bucket table from the current configuration.
    ///
    /// Bucket `i` of `n` covers `[boundary(i), boundary(i+1)]`, so consecutive
    /// buckets share a boundary, the first starts at the domain minimum and
    /// the last ends at the domain maximum. Its output value sits at step
    /// fraction `i / (n - 1)` of the range (`1/2` when `n == 1`): a channel
    /// mix for color ranges, a lerp for numeric ranges.
    pub fn calculate_buckets(&mut self) -> Result<(), ScaleError> {
        let range = self.range.ok_or(ScaleError::NotConfigured("range"))?;
        let (lo, hi) = self.extremes.ok_or(ScaleError::NotConfigured("extreme values"))?;
        let count = self.bucket_count.ok_or(ScaleError::NotConfigured("number of buckets"))?;
        let scale_fn = self
            .scale_fn
            .as_ref()
            .ok_or(ScaleError::NotConfigured("scale function"))?;

        let mut buckets = Vec::with_capacity(count);
        for i in 0..count {
            let fraction = if count == 1 {
                0.5
            } else {
                i as f64 / (count - 1) as f64
            };

            let value = match range {
                ScaleRange::Color { min, max } => {
                    ScaleValue::Color(color::mix(min, max, fraction * 100.0))
                }
                ScaleRange::Numeric { min, max } => {
                    ScaleValue::Number(min + (max - min) * fraction)
                }
            };

            buckets.push(Bucket {
                domain_min: scale_fn.boundary(lo, hi, count, i),
                domain_max: scale_fn.boundary(lo, hi, count, i + 1),
                value,
            });
        }

        debug!("recalculated {count} buckets over [{lo}, {hi}]");
        self.buckets = buckets;
        Ok(())
    }

    /// Map one datum to its output value.
    ///
    /// `Missing` yields the configured null value, or the range's low end when
    /// none is set. A present value is matched against the bucket table with
    /// inclusive bounds on both ends; a value no bucket covers is outside the
    /// configured extremes and is an error.
    pub fn value_for(&self, datum: impl Into<Datum>) -> Result<ScaleValue, ScaleError> {
        match datum.into() {
            Datum::Missing => match self.null_value {
                Some(v) => Ok(v),
                None => Ok(self
                    .range
                    .ok_or(ScaleError::NotConfigured("range"))?
                    .min_value()),
            },
            Datum::Present(value) => self
                .buckets
                .iter()
                .find(|b| b.domain_min <= value && value <= b.domain_max)
                .map(|b| b.value)
                .ok_or_else(|| {
                    let (lo, hi) = self.extremes.unwrap_or((f64::NAN, f64::NAN));
                    ScaleError::ValueOutOfRange { value, lo, hi }
                }),
        }
    }
}

impl fmt::Debug for BucketScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BucketScale")
            .field("range", &self.range)
            .field("extremes", &self.extremes)
            .field("bucket_count", &self.bucket_count)
            .field("null_value", &self.null_value)
            .field("buckets", &self.buckets)
            .finish_non_exhaustive()
    }
}
