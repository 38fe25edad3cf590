//! Geographic data provider.
//!
//! Loads the named regions and bounding extent for a city. The game itself
//! never touches this crate; callers use it to build the candidate pool
//! before creating a `Game`.
//!
//! # Files
//!
//! For a city key `k` the data directory holds:
//!
//! - `k.suburbs.json`: a GeoJSON `FeatureCollection`; only features with a
//!   `properties.name` become regions
//! - `k.bounds.json`: `{"minlat":..,"minlon":..,"maxlat":..,"maxlon":..}`
//!
//! plus `australia.bounds.json` for the country-wide view.

pub mod error;
pub mod geojson;
pub mod source;

pub use suburb_quiz_types as types;

pub use error::GeoError;
pub use geojson::{parse_bounds, parse_regions};
pub use source::{CityData, FileRegionSource, RegionSource};
