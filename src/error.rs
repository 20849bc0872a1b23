//! Error taxonomy. All failures here are configuration or computation errors
//! raised synchronously to the immediate caller; nothing is transient and
//! nothing is retried.

use thiserror::Error;

/// Failures while configuring or querying a [`crate::scale::BucketScale`].
#[derive(Debug, Error)]
pub enum ScaleError {
    /// Range endpoints were neither two numbers nor two parseable colors.
    #[error("invalid range: endpoints must be two numbers or two color specs")]
    InvalidRange,

    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),

    #[error("minimum {min} may not be greater than maximum {max}")]
    RangeOrder { min: f64, max: f64 },

    #[error("unknown scale function `{0}`")]
    UnknownScaleFunction(String),

    /// No bucket matched the queried value; it lies outside the configured
    /// extreme values.
    #[error("value {value} is outside the scale domain [{lo}, {hi}]")]
    ValueOutOfRange { value: f64, lo: f64, hi: f64 },

    /// A required input was not set before buckets were calculated or queried.
    #[error("{0} must be set first")]
    NotConfigured(&'static str),
}

/// Failures while building or querying the country registry.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A code appeared in both the small-country and visible-country tables.
    #[error("country `{0}` is already present in small countries")]
    DuplicateCode(String),

    #[error("invalid alpha-3 code `{0}`")]
    UnknownAlpha3(String),

    #[error("unknown country code `{0}`")]
    UnknownCountry(String),

    /// An embedded reference table failed to deserialize.
    #[error("malformed reference table: {0}")]
    MalformedTable(#[from] serde_json::Error),
}

/// Failures in the chart-level bookkeeping around series and visuals.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The visual description does not cover the supplied data series.
    #[error(
        "visualisation description ({visuals} series) does not correspond to supplied data \
         ({series} series); update the visualisation description first"
    )]
    SeriesMismatch { visuals: usize, series: usize },

    #[error("no data series at index {0}")]
    UnknownSeries(usize),

    #[error(transparent)]
    Scale(#[from] ScaleError),

    #[error(transparent)]
    Registry(#[from] RegistryError),
}
