//! Drag-to-move editing of waypoints.
//!
//! The host reports where a drag started and where it ended, both already
//! projected to coordinates. Projection is lossy, so the start point is
//! matched to a stored waypoint by distance rather than equality.

use crate::geo::Coordinate;
use crate::route_state::RouteState;

/// Radius within which a drag start is matched to a stored waypoint.
pub const DEFAULT_MATCH_RADIUS_METERS: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum EditorState {
    #[default]
    Idle,
    Editing { original: Coordinate },
}

#[derive(Debug, Clone)]
pub struct WaypointEditor {
    state: EditorState,
    match_radius_meters: f64,
}

impl Default for WaypointEditor {
    fn default() -> Self {
        Self::with_match_radius(DEFAULT_MATCH_RADIUS_METERS)
    }
}

impl WaypointEditor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_match_radius(match_radius_meters: f64) -> Self {
        Self {
            state: EditorState::Idle,
            match_radius_meters,
        }
    }

    /// Begins a drag from `point`, replacing any session already open.
    pub fn start(&mut self, point: Coordinate) {
        if let EditorState::Editing { original } = self.state {
            tracing::debug!(?original, "editing session replaced");
        }
        self.state = EditorState::Editing { original: point };
    }

    /// Finishes the drag at `point`.
    ///
    /// The first waypoint within the match radius of the drag start is moved
    /// to `point`. With no open session, or no waypoint in range, nothing
    /// changes. Either way the editor returns to idle. Returns the index of
    /// the moved waypoint.
    pub fn end(&mut self, point: Coordinate, route: &mut RouteState) -> Option<usize> {
        let EditorState::Editing { original } = std::mem::take(&mut self.state) else {
            tracing::trace!("drag end without an editing session ignored");
            return None;
        };

        let Some(index) = route.waypoint_index_near(original, self.match_radius_meters) else {
            tracing::debug!(?original, dropped = ?point, "no waypoint near drag start");
            return None;
        };

        match route.replace_waypoint_at(index, point) {
            Ok(previous) => {
                tracing::debug!(index, from = ?previous, to = ?point, "waypoint moved");
                Some(index)
            }
            Err(err) => {
                tracing::warn!(error = %err, "matched waypoint vanished before move");
                None
            }
        }
    }

    /// Abandons the current session without touching any waypoint.
    pub fn cancel(&mut self) {
        self.state = EditorState::Idle;
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, EditorState::Editing { .. })
    }

    pub fn state(&self) -> EditorState {
        self.state
    }
}
