//! Map collaborator consumed by the front end (never by the game).

use std::time::Duration;

use crate::types::{Bounds, Region};

/// Operations the front end needs from whatever draws the map
pub trait MapView {
    /// Replace the active region set
    fn set_regions(&mut self, regions: &[Region]);
    fn set_bounds(&mut self, bounds: Bounds);
    fn zoom_to_region(&mut self, name: &str);
    /// Flash a region for `duration`
    fn highlight_region(&mut self, name: &str, duration: Duration);
    /// Fit the view back to the loaded bounds
    fn reset_zoom(&mut self);
    fn set_interactive(&mut self, interactive: bool);
}

/// Map stand-in that logs each call and remembers what it was told.
///
/// Names not in the current region set are ignored, as a real map would
/// find no matching feature.
#[derive(Debug, Clone, Default)]
pub struct TraceMapView {
    regions: Vec<String>,
    bounds: Option<Bounds>,
    zoomed: Option<String>,
    highlighted: Option<String>,
    interactive: bool,
}

impl TraceMapView {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn region_count(&self) -> usize {
        self.regions.len()
    }

    pub fn bounds(&self) -> Option<Bounds> {
        self.bounds
    }

    pub fn zoomed(&self) -> Option<&str> {
        self.zoomed.as_deref()
    }

    pub fn highlighted(&self) -> Option<&str> {
        self.highlighted.as_deref()
    }

    pub fn is_interactive(&self) -> bool {
        self.interactive
    }

    fn knows(&self, name: &str) -> bool {
        self.regions.iter().any(|r| r == name)
    }
}

impl MapView for TraceMapView {
    fn set_regions(&mut self, regions: &[Region]) {
        tracing::debug!(count = regions.len(), "setting map regions");
        self.regions = regions.iter().map(|r| r.name.clone()).collect();
        self.zoomed = None;
        self.highlighted = None;
    }

    fn set_bounds(&mut self, bounds: Bounds) {
        tracing::debug!(?bounds, "setting map bounds");
        self.bounds = Some(bounds);
        self.zoomed = None;
    }

    fn zoom_to_region(&mut self, name: &str) {
        tracing::debug!(region = name, "zooming to region");
        if self.knows(name) {
            self.zoomed = Some(name.to_string());
        }
    }

    fn highlight_region(&mut self, name: &str, duration: Duration) {
        tracing::debug!(region = name, ?duration, "highlighting region");
        if self.knows(name) {
            self.highlighted = Some(name.to_string());
        }
    }

    fn reset_zoom(&mut self) {
        tracing::debug!("resetting zoom");
        self.zoomed = None;
    }

    fn set_interactive(&mut self, interactive: bool) {
        tracing::debug!(interactive, "setting map interactivity");
        self.interactive = interactive;
    }
}
