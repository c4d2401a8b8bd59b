//! Test fixtures for route-overlay.
//!
//! Provides:
//! - A recording `RenderSurface` with a flat linear projection
//! - A stub `HeatmapGenerator` that stamps its inputs into the "image"
//! - A sample directions response

#![allow(dead_code)]

use std::cell::Cell;

use route_overlay::geo::Coordinate;
use route_overlay::hazard::HazardRecord;
use route_overlay::polyline::Polyline;
use route_overlay::traits::{
    Camera, GroundOverlay, HeatmapGenerator, LineStyle, MarkerKind, RenderSurface, ScreenPoint,
    ViewportSize, ZIndex,
};

/// Degrees per screen unit for the fake projection.
pub const DEGREES_PER_UNIT: f64 = 0.001;

/// Stand-in for a heatmap bitmap: records what it was generated from.
#[derive(Debug, Clone, PartialEq)]
pub struct HeatmapStamp {
    pub record_ids: Vec<String>,
    pub zoom: f32,
    pub bearing: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCall {
    Clear,
    Line {
        path: Polyline,
        style: LineStyle,
        z_index: ZIndex,
    },
    Marker {
        position: Coordinate,
        kind: MarkerKind,
        z_index: ZIndex,
    },
    Overlay {
        overlay: GroundOverlay<HeatmapStamp>,
        z_index: ZIndex,
    },
}

#[derive(Debug, Clone)]
pub struct RecordingSurface {
    pub camera: Camera,
    pub size: ViewportSize,
    pub calls: Vec<DrawCall>,
}

impl RecordingSurface {
    pub fn new(center: Coordinate) -> Self {
        Self {
            camera: Camera {
                center,
                zoom: 14.0,
                bearing: 0.0,
            },
            size: ViewportSize {
                width: 400.0,
                height: 800.0,
            },
            calls: Vec::new(),
        }
    }

    /// Calls recorded since the last clear, i.e. what is currently on screen.
    pub fn frame(&self) -> &[DrawCall] {
        let start = self
            .calls
            .iter()
            .rposition(|call| *call == DrawCall::Clear)
            .map_or(0, |index| index + 1);
        &self.calls[start..]
    }

    pub fn markers(&self) -> Vec<(Coordinate, MarkerKind, ZIndex)> {
        self.frame()
            .iter()
            .filter_map(|call| match call {
                DrawCall::Marker {
                    position,
                    kind,
                    z_index,
                } => Some((*position, kind.clone(), *z_index)),
                _ => None,
            })
            .collect()
    }
}

impl RenderSurface for RecordingSurface {
    type Image = HeatmapStamp;

    fn clear_all_drawables(&mut self) {
        self.calls.push(DrawCall::Clear);
    }

    fn add_line(&mut self, path: &Polyline, style: &LineStyle, z_index: ZIndex) {
        self.calls.push(DrawCall::Line {
            path: path.clone(),
            style: *style,
            z_index,
        });
    }

    fn add_marker(&mut self, position: Coordinate, kind: MarkerKind, z_index: ZIndex) {
        self.calls.push(DrawCall::Marker {
            position,
            kind,
            z_index,
        });
    }

    fn add_ground_overlay(&mut self, overlay: GroundOverlay<HeatmapStamp>, z_index: ZIndex) {
        self.calls.push(DrawCall::Overlay { overlay, z_index });
    }

    fn project_screen_point(&self, point: ScreenPoint) -> Coordinate {
        let dx = point.x - self.size.width / 2.0;
        let dy = point.y - self.size.height / 2.0;
        Coordinate::new(
            self.camera.center.latitude - dy * DEGREES_PER_UNIT,
            self.camera.center.longitude + dx * DEGREES_PER_UNIT,
        )
    }

    fn current_camera(&self) -> Camera {
        self.camera
    }

    fn viewport_size(&self) -> ViewportSize {
        self.size
    }
}

#[derive(Debug, Default)]
pub struct StubHeatmap {
    pub generated: Cell<usize>,
}

impl HeatmapGenerator for StubHeatmap {
    type Image = HeatmapStamp;

    fn generate_heatmap(
        &self,
        camera: &Camera,
        _viewport: ViewportSize,
        records: &[HazardRecord],
    ) -> HeatmapStamp {
        self.generated.set(self.generated.get() + 1);
        HeatmapStamp {
            record_ids: records.iter().map(|record| record.id.clone()).collect(),
            zoom: camera.zoom,
            bearing: camera.bearing,
        }
    }
}

/// Two alternatives: the first with one leg, the second with two legs and
/// no overview path.
pub const SAMPLE_RESPONSE: &str = r#"{
  "status": "OK",
  "routes": [
    {
      "summary": "US-101 S",
      "overview_polyline": { "points": "_p~iF~ps|U_ulLnnqC_mqNvxq`@" },
      "legs": [
        { "distance": { "value": 1200 }, "end_location": { "lat": 43.252, "lng": -126.453 } }
      ]
    },
    {
      "summary": "I-5 S",
      "legs": [
        { "end_location": { "lat": 40.7, "lng": -120.95 } },
        { "end_location": { "lat": 41.0, "lng": -121.0 } }
      ]
    }
  ]
}"#;

pub fn sample_hazards() -> Vec<HazardRecord> {
    vec![
        HazardRecord::new("c-1", 37.7749, -122.4194).with_category("assault"),
        HazardRecord::new("c-2", 37.7755, -122.4180).with_category("theft"),
        HazardRecord::new("c-3", 37.7760, -122.4201),
    ]
}
