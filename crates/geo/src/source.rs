//! Region sources: where a city's candidate names come from.

use std::future::Future;
use std::path::{Path, PathBuf};

use crate::types::{Bounds, CityKey, Region};
use crate::{parse_bounds, parse_regions, GeoError};

const COUNTRY_BOUNDS_FILE: &str = "australia.bounds.json";

/// Everything the quiz needs about one city
#[derive(Debug, Clone, PartialEq)]
pub struct CityData {
    pub city: CityKey,
    pub regions: Vec<Region>,
    pub bounds: Bounds,
}

impl CityData {
    /// Region names, in file order, for building a candidate pool
    pub fn candidate_pool(&self) -> Vec<String> {
        self.regions.iter().map(|r| r.name.clone()).collect()
    }

    pub fn region(&self, name: &str) -> Option<&Region> {
        self.regions.iter().find(|r| r.name == name)
    }
}

/// Loads region sets by city key
pub trait RegionSource {
    fn load(&self, city: CityKey) -> impl Future<Output = Result<CityData, GeoError>> + Send;
}

/// Reads `<city>.suburbs.json` / `<city>.bounds.json` from a directory
#[derive(Debug, Clone)]
pub struct FileRegionSource {
    data_dir: PathBuf,
}

impl FileRegionSource {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn suburbs_path(&self, city: CityKey) -> PathBuf {
        self.data_dir.join(format!("{}.suburbs.json", city.as_str()))
    }

    pub fn bounds_path(&self, city: CityKey) -> PathBuf {
        self.data_dir.join(format!("{}.bounds.json", city.as_str()))
    }

    /// Bounds covering the whole country, used before a city is picked
    pub async fn load_country_bounds(&self) -> Result<Bounds, GeoError> {
        let path = self.data_dir.join(COUNTRY_BOUNDS_FILE);
        let bounds = parse_bounds(&read(&path).await?)?;
        tracing::debug!(?bounds, "loaded country bounds");
        Ok(bounds)
    }
}

impl RegionSource for FileRegionSource {
    async fn load(&self, city: CityKey) -> Result<CityData, GeoError> {
        let regions = parse_regions(&read(&self.suburbs_path(city)).await?)?;
        let bounds = parse_bounds(&read(&self.bounds_path(city)).await?)?;

        tracing::debug!(
            %city,
            regions = regions.len(),
            ?bounds,
            "loaded city data"
        );
        Ok(CityData {
            city,
            regions,
            bounds,
        })
    }
}

async fn read(path: &Path) -> Result<String, GeoError> {
    tokio::fs::read_to_string(path)
        .await
        .map_err(|source| GeoError::Read {
            path: path.to_path_buf(),
            source,
        })
}
