//! Registry of all supported map countries.
//!
//! Built from three static reference tables embedded at compile time: the
//! visible-region name table, the small-country name/position table and the
//! ISO-3166-1 alpha-3 → alpha-2 bridge. Construct one [`CountryRegistry`] at
//! startup and pass it by reference; it is immutable and freely shareable
//! across threads.

use crate::error::RegistryError;
use crate::models::{Country, LatLng, Tier};
use ahash::AHashMap;
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;

const VISIBLE_COUNTRIES: &str = include_str!("../data/visible_countries.json");
const SMALL_COUNTRIES: &str = include_str!("../data/small_countries.json");
const ISO3166_ALPHA3: &str = include_str!("../data/iso3166_alpha3.json");

/// Row of the visible-region reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct VisibleRecord {
    pub name: String,
}

/// Row of the small-country reference table.
#[derive(Debug, Clone, Deserialize)]
pub struct SmallRecord {
    pub name: String,
    /// `[lat, lng]` marker anchor.
    #[serde(rename = "latLng")]
    pub lat_lng: [f64; 2],
}

/// Unified, immutable registry of visible and small countries.
#[derive(Debug, Clone)]
pub struct CountryRegistry {
    countries: BTreeMap<String, Country>,
    alpha3_to_alpha2: AHashMap<String, String>,
}

impl CountryRegistry {
    /// Build the registry from the embedded reference tables.
    pub fn new() -> Result<Self, RegistryError> {
        let visible: BTreeMap<String, VisibleRecord> = serde_json::from_str(VISIBLE_COUNTRIES)?;
        let small: BTreeMap<String, SmallRecord> = serde_json::from_str(SMALL_COUNTRIES)?;
        let alpha3: AHashMap<String, String> = serde_json::from_str(ISO3166_ALPHA3)?;
        Self::from_tables(visible, small, alpha3)
    }

    /// Build from caller-supplied tables.
    ///
    /// Small countries are ingested first; a code that reappears in the
    /// visible table is a hard error. Construction is a pure function of its
    /// inputs — the same tables produce the same registry (and the same
    /// failure).
    pub fn from_tables(
        visible: BTreeMap<String, VisibleRecord>,
        small: BTreeMap<String, SmallRecord>,
        alpha3_to_alpha2: AHashMap<String, String>,
    ) -> Result<Self, RegistryError> {
        let mut countries = BTreeMap::new();

        for (alpha2, record) in small {
            let [lat, lng] = record.lat_lng;
            countries.insert(
                alpha2.clone(),
                Country {
                    alpha2,
                    name: record.name,
                    tier: Tier::Small,
                    lat_lng: Some(LatLng { lat, lng }),
                },
            );
        }

        for (alpha2, record) in visible {
            if countries.contains_key(&alpha2) {
                return Err(RegistryError::DuplicateCode(alpha2));
            }
            countries.insert(
                alpha2.clone(),
                Country {
                    alpha2,
                    name: record.name,
                    tier: Tier::Visible,
                    lat_lng: None,
                },
            );
        }

        debug!("country registry built with {} entries", countries.len());
        Ok(Self {
            countries,
            alpha3_to_alpha2,
        })
    }

    /// All supported countries, ordered by alpha-2 code.
    pub fn countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values()
    }

    /// Countries rendered as filled regions, ordered by alpha-2 code.
    pub fn visible_countries(&self) -> impl Iterator<Item = &Country> {
        self.countries.values().filter(|c| c.tier == Tier::Visible)
    }

    pub fn get(&self, alpha2: &str) -> Option<&Country> {
        self.countries.get(alpha2)
    }

    pub fn len(&self) -> usize {
        self.countries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.countries.is_empty()
    }

    /// Country name for an alpha-2 code.
    pub fn country_name(&self, alpha2: &str) -> Result<&str, RegistryError> {
        self.countries
            .get(alpha2)
            .map(|c| c.name.as_str())
            .ok_or_else(|| RegistryError::UnknownCountry(alpha2.to_string()))
    }

    /// Whether `alpha2` is listed in the small-country tier.
    pub fn is_small(&self, alpha2: &str) -> bool {
        self.countries
            .get(alpha2)
            .is_some_and(|c| c.tier == Tier::Small)
    }

    /// Small-country metadata (name and marker position) for an alpha-2 code.
    pub fn small_country(&self, alpha2: &str) -> Result<&Country, RegistryError> {
        match self.countries.get(alpha2) {
            Some(country) if country.tier == Tier::Small => Ok(country),
            _ => Err(RegistryError::UnknownCountry(alpha2.to_string())),
        }
    }

    /// Bridge an ISO-3166-1 alpha-3 code to its alpha-2 equivalent.
    pub fn alpha2_from_alpha3(&self, alpha3: &str) -> Result<&str, RegistryError> {
        self.alpha3_to_alpha2
            .get(alpha3)
            .map(String::as_str)
            .ok_or_else(|| RegistryError::UnknownAlpha3(alpha3.to_string()))
    }
}
