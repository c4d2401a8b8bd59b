//! route-overlay core
//!
//! State and redraw orchestration for a map showing a route, its waypoints
//! and a hazard overlay. Rendering and heatmap generation are supplied by the
//! host through the traits in [`traits`].

pub mod traits;
pub mod geo;
pub mod polyline;
pub mod directions;
pub mod route_state;
pub mod editor;
pub mod hazard;
pub mod renderer;
