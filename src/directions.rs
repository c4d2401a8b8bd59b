//! Decoding of routing-service (directions) responses.
//!
//! The wire schema is parsed leniently: every field is optional, and a field
//! of the wrong JSON type is treated as absent at its own level without
//! taking its siblings down with it. A missing or unusable response decodes
//! to an empty [`DecodedRoute`].

use std::fmt;

use serde::Deserialize;
use serde::de::{DeserializeOwned, Deserializer};
use serde_json::Value;

use crate::geo::Coordinate;

/// One leg of an alternative route.
#[derive(Debug, Clone, PartialEq)]
pub struct Leg {
    pub end_location: Option<Coordinate>,
}

/// One alternative route from the response.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Route {
    /// Encoded overview polyline, if the service sent one.
    pub encoded_path: Option<String>,
    pub legs: Vec<Leg>,
}

/// A routing response reduced to what the map draws.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DecodedRoute {
    routes: Vec<Route>,
}

#[derive(Debug)]
pub enum DecodeError {
    Json(serde_json::Error),
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Json(err) => write!(f, "routing response is not valid JSON: {}", err),
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Json(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for DecodeError {
    fn from(err: serde_json::Error) -> Self {
        DecodeError::Json(err)
    }
}

impl DecodedRoute {
    pub fn new(routes: Vec<Route>) -> Self {
        Self { routes }
    }

    /// Decodes an already-parsed response. `None` and non-object values
    /// yield an empty route.
    pub fn decode(response: Option<&Value>) -> Self {
        let Some(value) = response else {
            return Self::default();
        };

        match RawResponse::deserialize(value) {
            Ok(raw) => raw.into(),
            Err(err) => {
                tracing::debug!(error = %err, "routing response has no usable structure");
                Self::default()
            }
        }
    }

    /// Parses response text, failing only when the text is not JSON at all.
    pub fn try_from_json_str(text: &str) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_str(text)?;
        Ok(Self::decode(Some(&value)))
    }

    /// Parses response text, degrading to an empty route on any failure.
    pub fn from_json_str(text: &str) -> Self {
        Self::try_from_json_str(text).unwrap_or_else(|err| {
            tracing::warn!(error = %err, "discarding unparseable routing response");
            Self::default()
        })
    }

    pub fn routes(&self) -> &[Route] {
        &self.routes
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }

    /// Encoded overview paths, one per alternative route that carries one,
    /// in response order.
    pub fn encoded_paths(&self) -> Vec<&str> {
        self.routes
            .iter()
            .filter_map(|route| route.encoded_path.as_deref())
            .collect()
    }

    /// Leg end locations flattened across routes: route 0's legs in order,
    /// then route 1's, and so on. Legs without an end location are skipped.
    pub fn end_locations(&self) -> Vec<Coordinate> {
        self.routes
            .iter()
            .flat_map(|route| route.legs.iter())
            .filter_map(|leg| leg.end_location)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct RawResponse {
    #[serde(default, deserialize_with = "lenient_seq")]
    routes: Vec<RawRoute>,
}

#[derive(Debug, Deserialize)]
struct RawRoute {
    #[serde(default, deserialize_with = "lenient")]
    overview_polyline: Option<RawOverviewPolyline>,
    #[serde(default, deserialize_with = "lenient_seq")]
    legs: Vec<RawLeg>,
}

#[derive(Debug, Deserialize)]
struct RawOverviewPolyline {
    #[serde(default, deserialize_with = "lenient")]
    points: Option<String>,
}

#[derive(Debug, Deserialize)]
struct RawLeg {
    #[serde(default, deserialize_with = "lenient")]
    end_location: Option<RawLatLng>,
}

#[derive(Debug, Deserialize)]
struct RawLatLng {
    lat: f64,
    lng: f64,
}

impl From<RawResponse> for DecodedRoute {
    fn from(raw: RawResponse) -> Self {
        let routes = raw
            .routes
            .into_iter()
            .map(|route| Route {
                encoded_path: route.overview_polyline.and_then(|polyline| polyline.points),
                legs: route
                    .legs
                    .into_iter()
                    .map(|leg| Leg {
                        end_location: leg
                            .end_location
                            .map(|location| Coordinate::new(location.lat, location.lng)),
                    })
                    .collect(),
            })
            .collect();

        Self { routes }
    }
}

/// Accepts any JSON value; anything that does not fit `T` becomes `None`.
fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(T::deserialize(&value).ok())
}

/// Accepts any JSON value; non-arrays become empty and elements that do not
/// fit `T` are dropped.
fn lenient_seq<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    let items = match value {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .iter()
        .filter_map(|item| T::deserialize(item).ok())
        .collect())
}
