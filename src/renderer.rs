//! Full-frame redraw of the route and hazard layers.

use crate::geo::{BoundingBox, bounding_box};
use crate::hazard::{HazardOverlay, VisualizationMode};
use crate::polyline::Polyline;
use crate::route_state::RouteState;
use crate::traits::{
    GroundOverlay, HeatmapGenerator, LineStyle, MarkerKind, RenderSurface, ScreenPoint, ZIndex,
};

#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    /// Stroke used for every route line.
    pub route_style: LineStyle,
}

/// Draws [`RouteState`] and [`HazardOverlay`] onto a host surface.
///
/// Every [`draw`](Self::draw) clears the surface and rebuilds all drawables;
/// nothing is diffed against the previous frame.
pub struct MapRenderer<S, H> {
    surface: S,
    heatmap: H,
    options: RenderOptions,
}

impl<S, H> MapRenderer<S, H>
where
    S: RenderSurface,
    H: HeatmapGenerator<Image = S::Image>,
{
    pub fn new(surface: S, heatmap: H) -> Self {
        Self::with_options(surface, heatmap, RenderOptions::default())
    }

    pub fn with_options(surface: S, heatmap: H, options: RenderOptions) -> Self {
        Self {
            surface,
            heatmap,
            options,
        }
    }

    pub fn draw(&mut self, route: &RouteState, hazards: &HazardOverlay) {
        self.surface.clear_all_drawables();

        match hazards.active_mode() {
            VisualizationMode::Points => self.draw_hazard_markers(hazards),
            VisualizationMode::Heatmap => self.draw_heatmap(hazards),
            VisualizationMode::None => {}
        }

        if route.route().is_some() {
            self.draw_route(route);
        }

        tracing::trace!(
            mode = ?hazards.active_mode(),
            hazards = hazards.records().len(),
            route_loaded = route.route().is_some(),
            waypoints = route.waypoints().len(),
            "map redrawn"
        );
    }

    /// Latitude/longitude box covering the visible viewport.
    pub fn visible_bounds(&self) -> BoundingBox {
        let size = self.surface.viewport_size();
        let corners = [
            ScreenPoint::new(0.0, 0.0),
            ScreenPoint::new(0.0, size.height),
            ScreenPoint::new(size.width, 0.0),
            ScreenPoint::new(size.width, size.height),
        ]
        .map(|point| self.surface.project_screen_point(point));

        bounding_box(&corners)
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn options(&self) -> &RenderOptions {
        &self.options
    }

    fn draw_hazard_markers(&mut self, hazards: &HazardOverlay) {
        for record in hazards.records() {
            self.surface.add_marker(
                record.position(),
                MarkerKind::Hazard(record.clone()),
                ZIndex::Hazard,
            );
        }
    }

    fn draw_heatmap(&mut self, hazards: &HazardOverlay) {
        let records = hazards.records();
        if records.is_empty() {
            return;
        }

        let camera = self.surface.current_camera();
        let size = self.surface.viewport_size();
        let image = self.heatmap.generate_heatmap(&camera, size, records);
        let position = self
            .surface
            .project_screen_point(ScreenPoint::new(size.width / 2.0, size.height / 2.0));

        self.surface.add_ground_overlay(
            GroundOverlay {
                image,
                position,
                zoom_level: camera.zoom,
                bearing: camera.bearing,
            },
            ZIndex::Heatmap,
        );
    }

    fn draw_route(&mut self, route: &RouteState) {
        if let Some(decoded) = route.route() {
            for encoded in decoded.encoded_paths() {
                match Polyline::decode(encoded) {
                    Ok(path) => {
                        self.surface
                            .add_line(&path, &self.options.route_style, ZIndex::Route)
                    }
                    Err(err) => tracing::warn!(error = %err, "skipping undecodable route path"),
                }
            }
        }

        if let Some(destination) = route.destination() {
            self.surface
                .add_marker(destination, MarkerKind::Destination, ZIndex::Destination);
        }

        for waypoint in route.waypoints() {
            self.surface
                .add_marker(*waypoint, MarkerKind::Waypoint, ZIndex::Waypoint);
        }
    }
}
