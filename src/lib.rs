//! choromap
//!
//! The data core of a world-map chart widget: bucketed visual scales and
//! country data preparation for choropleth (region-fill) and proportional
//! marker (bubble) series. Pairs with an external rendering widget that owns
//! all SVG/DOM concerns.
//!
//! ### Features
//! - [`BucketScale`]: slice a value domain into contiguous buckets, each with
//!   one interpolated output (color or number); linear or logarithmic
//!   boundaries, pluggable via [`scale::BoundaryScale`]
//! - [`CountryRegistry`]: unified registry of visible regions and small
//!   marker countries, with an alpha-3 → alpha-2 bridge
//! - [`PreparedSeries`]: reconcile a sparse `{alpha2: value}` input into a
//!   complete per-region value set plus a filtered marker list
//! - [`viz`]: per-series pairing of color and radius scales, and multi-series
//!   chart state
//!
//! ### Example
//! ```
//! use choromap::{BucketScale, CountryRegistry, PreparedSeries};
//! use std::collections::BTreeMap;
//!
//! let registry = CountryRegistry::new()?;
//! let input = BTreeMap::from([
//!     ("DE".to_string(), 120.0),
//!     ("FR".to_string(), 80.0),
//!     ("SG".to_string(), 40.0), // small country: becomes a marker
//! ]);
//! let series = PreparedSeries::prepare(&registry, &input)?;
//! assert_eq!(series.markers.len(), 1);
//!
//! let mut scale = BucketScale::new();
//! scale.set_range("#ffffff", "#ff0000")?;
//! scale.set_bucket_count(5)?;
//! scale.set_scale_function("linear")?;
//! scale.set_extremes(0.0, 120.0)?;
//! scale.calculate_buckets()?;
//! let fill = scale.value_for(80.0)?;
//! println!("{fill}");
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod color;
pub mod error;
pub mod models;
pub mod registry;
pub mod scale;
pub mod series;
pub mod viz;

pub use error::{ChartError, RegistryError, ScaleError};
pub use models::{Country, Datum, LatLng, Tier};
pub use registry::CountryRegistry;
pub use scale::{Bucket, BucketScale, ScaleValue};
pub use series::{Marker, PreparedSeries};
pub use viz::{ChartConfig, ChartModel, SeriesVisual, VisualSpec};
