use serde::{Deserialize, Serialize};

/// How a country is drawn on the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tier {
    /// Full region rendered as filled geography.
    Visible,
    /// Point marker; the country's render area is too small for a fill.
    Small,
}

/// Marker anchor position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// One map entity from the unified registry (one row = one country).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Country {
    /// ISO-3166-1 alpha-2 code, e.g. `"DE"`.
    pub alpha2: String,
    pub name: String,
    pub tier: Tier,
    /// Present only for [`Tier::Small`].
    pub lat_lng: Option<LatLng>,
}

impl Country {
    pub fn is_small(&self) -> bool {
        self.tier == Tier::Small
    }
}

/// A single observation for one country: either a value or an explicit gap.
///
/// The rendering widget cannot represent true nulls and expects `-1` in place
/// of a missing value; that sentinel exists only at the widget boundary, via
/// [`Datum::widget_value`]. Everywhere inside this crate a gap is `Missing`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Datum {
    Present(f64),
    Missing,
}

impl Datum {
    /// Numeric stand-in for `Missing` expected by the rendering widget.
    pub const WIDGET_NULL: f64 = -1.0;

    pub fn value(&self) -> Option<f64> {
        match *self {
            Datum::Present(v) => Some(v),
            Datum::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Datum::Missing)
    }

    /// Plain number for the widget's value channel (`-1` for a gap).
    pub fn widget_value(&self) -> f64 {
        match *self {
            Datum::Present(v) => v,
            Datum::Missing => Self::WIDGET_NULL,
        }
    }
}

impl From<f64> for Datum {
    fn from(v: f64) -> Self {
        Datum::Present(v)
    }
}

impl From<Option<f64>> for Datum {
    fn from(v: Option<f64>) -> Self {
        match v {
            Some(v) => Datum::Present(v),
            None => Datum::Missing,
        }
    }
}
