//! Minimal GeoJSON decoding: region names and bounds only.

use serde::Deserialize;

use crate::types::{Bounds, Region};
use crate::GeoError;

#[derive(Debug, Deserialize)]
struct FeatureCollection {
    #[serde(default)]
    features: Vec<Feature>,
}

#[derive(Debug, Deserialize)]
struct Feature {
    #[serde(default)]
    properties: Option<Properties>,
}

#[derive(Debug, Deserialize)]
struct Properties {
    #[serde(default)]
    name: Option<String>,
}

/// Extract named regions from a GeoJSON feature collection.
///
/// Features without a `properties.name` are skipped. Geometry is ignored.
pub fn parse_regions(json: &str) -> Result<Vec<Region>, GeoError> {
    let collection: FeatureCollection =
        serde_json::from_str(json).map_err(|source| GeoError::Parse {
            what: "feature collection".to_string(),
            source,
        })?;

    Ok(collection
        .features
        .into_iter()
        .filter_map(|f| f.properties.and_then(|p| p.name))
        .map(Region::new)
        .collect())
}

pub fn parse_bounds(json: &str) -> Result<Bounds, GeoError> {
    serde_json::from_str(json).map_err(|source| GeoError::Parse {
        what: "bounds".to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_regions_skips_unnamed_features() {
        let json = r#"{
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {"name": "Richmond"}, "geometry": null},
                {"type": "Feature", "properties": {}, "geometry": null},
                {"type": "Feature", "geometry": null},
                {"type": "Feature", "properties": {"name": "Fitzroy", "pop": 10000}}
            ]
        }"#;

        let regions = parse_regions(json).unwrap();
        assert_eq!(regions, vec![Region::new("Richmond"), Region::new("Fitzroy")]);
    }

    #[test]
    fn test_parse_regions_empty_collection() {
        assert!(parse_regions(r#"{"type":"FeatureCollection","features":[]}"#)
            .unwrap()
            .is_empty());
        assert!(parse_regions(r#"{"type":"FeatureCollection"}"#)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_parse_regions_rejects_garbage() {
        let err = parse_regions("not json").unwrap_err();
        assert!(matches!(err, GeoError::Parse { .. }));
    }

    #[test]
    fn test_parse_bounds() {
        let b = parse_bounds(r#"{"minlat":-38.5,"minlon":144.4,"maxlat":-37.4,"maxlon":145.9}"#)
            .unwrap();
        assert_eq!(b, Bounds::new(-38.5, 144.4, -37.4, 145.9));

        assert!(parse_bounds(r#"{"minlat":-38.5}"#).is_err());
    }
}
