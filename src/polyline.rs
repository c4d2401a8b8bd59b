//! Polyline representation for route geometries.
//!
//! Routing responses carry geometries in the compact encoded polyline format
//! (5 decimal places, zig-zag varints offset by 63). They are decoded here,
//! at the boundary, and handed to the rendering surface as coordinates.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::geo::Coordinate;

const PRECISION: f64 = 1e5;

/// Largest shift accepted for a single value. Encoded values are 32-bit.
const MAX_SHIFT: u32 = 30;

/// A polyline as a sequence of decoded coordinates.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Coordinate>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PolylineError {
    /// Byte outside the `?`..=`~` range used by the encoding.
    InvalidCharacter { position: usize },
    /// Input ended in the middle of a value or between a latitude and its longitude.
    Truncated { position: usize },
    /// A value kept its continuation bit set for too long.
    Overflow { position: usize },
}

impl fmt::Display for PolylineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PolylineError::InvalidCharacter { position } => {
                write!(f, "invalid polyline character at byte {}", position)
            }
            PolylineError::Truncated { position } => {
                write!(f, "polyline truncated at byte {}", position)
            }
            PolylineError::Overflow { position } => {
                write!(f, "polyline value overflows at byte {}", position)
            }
        }
    }
}

impl std::error::Error for PolylineError {}

impl Polyline {
    /// Creates a new Polyline from decoded coordinate points.
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    /// Decodes an encoded polyline string.
    ///
    /// An empty string decodes to an empty polyline.
    pub fn decode(encoded: &str) -> Result<Self, PolylineError> {
        let bytes = encoded.as_bytes();
        let mut index = 0;
        let mut lat: i64 = 0;
        let mut lng: i64 = 0;
        let mut points = Vec::new();

        while index < bytes.len() {
            lat = accumulate(lat, bytes, &mut index)?;
            lng = accumulate(lng, bytes, &mut index)?;
            points.push(Coordinate::new(lat as f64 / PRECISION, lng as f64 / PRECISION));
        }

        Ok(Self { points })
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Coordinate> {
        self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Decodes the next delta and adds it to `total`.
fn accumulate(total: i64, bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let delta = decode_value(bytes, index)?;
    total
        .checked_add(delta)
        .ok_or(PolylineError::Overflow { position: *index })
}

fn decode_value(bytes: &[u8], index: &mut usize) -> Result<i64, PolylineError> {
    let mut result: i64 = 0;
    let mut shift: u32 = 0;

    loop {
        let position = *index;
        let Some(&byte) = bytes.get(position) else {
            return Err(PolylineError::Truncated { position });
        };
        if !(63..=126).contains(&byte) {
            return Err(PolylineError::InvalidCharacter { position });
        }
        if shift > MAX_SHIFT {
            return Err(PolylineError::Overflow { position });
        }

        let chunk = i64::from(byte - 63);
        *index += 1;
        result |= (chunk & 0x1f) << shift;
        shift += 5;

        if chunk < 0x20 {
            break;
        }
    }

    if result & 1 != 0 {
        Ok(!(result >> 1))
    } else {
        Ok(result >> 1)
    }
}
