//! Destination and waypoint bookkeeping.

use std::fmt;

use crate::directions::DecodedRoute;
use crate::geo::{Coordinate, great_circle_distance_meters};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteStateError {
    IndexOutOfRange { index: usize, len: usize },
}

impl fmt::Display for RouteStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteStateError::IndexOutOfRange { index, len } => {
                write!(f, "waypoint index {} out of range (len {})", index, len)
            }
        }
    }
}

impl std::error::Error for RouteStateError {}

/// The current route: the loaded decoded response, its destination, and the
/// user's intermediate waypoints.
///
/// A waypoint can only exist once a destination is set; the first point
/// appended to an empty state becomes the destination.
#[derive(Debug, Clone, Default)]
pub struct RouteState {
    route: Option<DecodedRoute>,
    destination: Option<Coordinate>,
    waypoints: Vec<Coordinate>,
}

impl RouteState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a new routing result.
    ///
    /// `None` clears everything. Otherwise the destination moves to the last
    /// leg end location across all routes (or is unset if there is none) and
    /// the waypoints are kept as they are.
    pub fn set_from_decoded_route(&mut self, route: Option<DecodedRoute>) {
        let Some(route) = route else {
            tracing::debug!("route unloaded, clearing destination and waypoints");
            self.route = None;
            self.clear();
            return;
        };

        self.destination = route.end_locations().last().copied();
        tracing::debug!(
            alternatives = route.routes().len(),
            destination = ?self.destination,
            waypoints = self.waypoints.len(),
            "route loaded"
        );
        self.route = Some(route);
    }

    /// Adds a point: the destination if none is set yet, otherwise a new
    /// trailing waypoint.
    pub fn append_point(&mut self, point: Coordinate) {
        if self.destination.is_none() {
            tracing::trace!(?point, "destination set");
            self.destination = Some(point);
        } else {
            tracing::trace!(?point, index = self.waypoints.len(), "waypoint appended");
            self.waypoints.push(point);
        }
    }

    /// Unsets the destination and drops every waypoint. The loaded route is
    /// kept.
    pub fn clear(&mut self) {
        self.destination = None;
        self.waypoints.clear();
    }

    pub fn remove_waypoint_at(&mut self, index: usize) -> Result<Coordinate, RouteStateError> {
        self.check_index(index)?;
        Ok(self.waypoints.remove(index))
    }

    /// Overwrites a waypoint in place, returning the old coordinate.
    pub fn replace_waypoint_at(
        &mut self,
        index: usize,
        point: Coordinate,
    ) -> Result<Coordinate, RouteStateError> {
        self.check_index(index)?;
        Ok(std::mem::replace(&mut self.waypoints[index], point))
    }

    /// Index of the first waypoint within `radius_meters` of `point`.
    ///
    /// Scans in order and stops at the first hit, which is not necessarily
    /// the closest.
    pub fn waypoint_index_near(&self, point: Coordinate, radius_meters: f64) -> Option<usize> {
        self.waypoints
            .iter()
            .position(|waypoint| great_circle_distance_meters(*waypoint, point) <= radius_meters)
    }

    pub fn route(&self) -> Option<&DecodedRoute> {
        self.route.as_ref()
    }

    pub fn destination(&self) -> Option<Coordinate> {
        self.destination
    }

    pub fn waypoints(&self) -> &[Coordinate] {
        &self.waypoints
    }

    fn check_index(&self, index: usize) -> Result<(), RouteStateError> {
        if index < self.waypoints.len() {
            Ok(())
        } else {
            Err(RouteStateError::IndexOutOfRange {
                index,
                len: self.waypoints.len(),
            })
        }
    }
}
