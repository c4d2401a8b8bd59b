//! Hazard records and the overlay mode used to show them.

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

/// A point-referenced hazard report. Beyond its position the payload is
/// opaque to the map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HazardRecord {
    pub id: String,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl HazardRecord {
    pub fn new(id: impl Into<String>, latitude: f64, longitude: f64) -> Self {
        Self {
            id: id.into(),
            latitude,
            longitude,
            category: None,
            description: None,
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn position(&self) -> Coordinate {
        Coordinate::new(self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum VisualizationMode {
    #[default]
    None,
    Points,
    Heatmap,
}

/// Hazard records plus the requested way of showing them.
#[derive(Debug, Clone, Default)]
pub struct HazardOverlay {
    records: Vec<HazardRecord>,
    mode: VisualizationMode,
}

impl HazardOverlay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the records. `None` or an empty list forces the mode to
    /// [`VisualizationMode::None`].
    pub fn set_records(&mut self, records: Option<Vec<HazardRecord>>) {
        self.records = records.unwrap_or_default();
        if self.records.is_empty() && self.mode != VisualizationMode::None {
            tracing::debug!(previous = ?self.mode, "no hazard records, overlay mode reset");
            self.mode = VisualizationMode::None;
        }
    }

    /// Stores the requested mode. A later [`set_records`](Self::set_records)
    /// with nothing to show resets it.
    pub fn set_mode(&mut self, mode: VisualizationMode) {
        self.mode = mode;
    }

    pub fn active_mode(&self) -> VisualizationMode {
        self.mode
    }

    pub fn records(&self) -> &[HazardRecord] {
        &self.records
    }
}
