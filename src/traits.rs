//! Interfaces to the host's map surface and heatmap generator.
//!
//! The core never renders or projects anything itself. A host implements
//! these traits over its real map widget; tests implement them with
//! recorders.

use crate::geo::Coordinate;
use crate::hazard::HazardRecord;
use crate::polyline::Polyline;

/// A point in the surface's screen space.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Size of the visible viewport in screen units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewportSize {
    pub width: f64,
    pub height: f64,
}

/// Current camera position of the surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub center: Coordinate,
    pub zoom: f32,
    /// Degrees clockwise from north.
    pub bearing: f64,
}

/// Paint order of drawables. Higher values paint over lower ones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ZIndex {
    Route,
    Destination,
    Waypoint,
    Hazard,
    Heatmap,
}

impl ZIndex {
    pub fn value(self) -> i32 {
        match self {
            ZIndex::Route => 10,
            ZIndex::Destination => 20,
            ZIndex::Waypoint => 30,
            ZIndex::Hazard => 40,
            ZIndex::Heatmap => 50,
        }
    }
}

/// What a marker stands for. Set when the marker is created.
#[derive(Debug, Clone, PartialEq)]
pub enum MarkerKind {
    Destination,
    Waypoint,
    Hazard(HazardRecord),
}

/// Stroke style of a route line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineStyle {
    pub width: f32,
    /// RGBA.
    pub color: [u8; 4],
    pub tappable: bool,
}

impl Default for LineStyle {
    fn default() -> Self {
        Self {
            width: 4.0,
            color: [35, 150, 232, 255],
            tappable: false,
        }
    }
}

/// An image anchored to the ground, scaled for `zoom_level`.
#[derive(Debug, Clone, PartialEq)]
pub struct GroundOverlay<I> {
    pub image: I,
    pub position: Coordinate,
    pub zoom_level: f32,
    pub bearing: f64,
}

/// The host map widget.
pub trait RenderSurface {
    type Image;

    /// Removes every drawable previously added.
    fn clear_all_drawables(&mut self);

    fn add_line(&mut self, path: &Polyline, style: &LineStyle, z_index: ZIndex);

    fn add_marker(&mut self, position: Coordinate, kind: MarkerKind, z_index: ZIndex);

    fn add_ground_overlay(&mut self, overlay: GroundOverlay<Self::Image>, z_index: ZIndex);

    fn project_screen_point(&self, point: ScreenPoint) -> Coordinate;

    fn current_camera(&self) -> Camera;

    fn viewport_size(&self) -> ViewportSize;
}

/// Produces a heatmap image for the given view of the records.
///
/// Treated as a pure function of its inputs.
pub trait HeatmapGenerator {
    type Image;

    fn generate_heatmap(
        &self,
        camera: &Camera,
        viewport: ViewportSize,
        records: &[HazardRecord],
    ) -> Self::Image;
}
