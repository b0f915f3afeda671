//! Per-request risk-zone snapshot and proximity predicate.
//!
//! A `RiskZoneSet` is built fresh for every planning request from the
//! caller's verified-incident coordinates and dropped when the request
//! finishes.  It is never shared or mutated across requests, so concurrent
//! planners cannot observe each other's zones.

use sr_core::GeoPoint;

/// Distance function used by the proximity predicate.
///
/// The planar variant reproduces the reference behavior (Euclidean distance
/// in raw degree-space with a threshold in degrees).  It degrades near the
/// poles and over long distances; `Haversine` is the geodesically honest
/// alternative with the radius interpreted in metres.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProximityMetric {
    /// Euclidean distance in degree-space; radius in degrees.
    #[default]
    PlanarDegrees,
    /// Great-circle distance; radius in metres.
    Haversine,
}

/// Immutable snapshot of risk coordinates plus a fixed proximity radius.
///
/// All zones in a set share one radius and one metric.
#[derive(Clone, Debug)]
pub struct RiskZoneSet {
    zones: Vec<GeoPoint>,
    radius: f32,
    metric: ProximityMetric,
}

impl RiskZoneSet {
    /// Snapshot `zones` with the given radius using the default planar
    /// degree-space metric.
    pub fn new(zones: Vec<GeoPoint>, radius_deg: f32) -> Self {
        Self::with_metric(zones, radius_deg, ProximityMetric::PlanarDegrees)
    }

    /// Snapshot `zones` with an explicit distance metric.  The radius unit
    /// must match the metric (degrees for planar, metres for haversine).
    pub fn with_metric(zones: Vec<GeoPoint>, radius: f32, metric: ProximityMetric) -> Self {
        Self { zones, radius, metric }
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// `true` if `point` lies strictly within the radius of any zone.
    ///
    /// Deterministic and side-effect-free; O(zones) per call.
    pub fn near_any(&self, point: GeoPoint) -> bool {
        self.zones.iter().any(|&zone| match self.metric {
            ProximityMetric::PlanarDegrees => point.planar_deg(zone) < self.radius,
            ProximityMetric::Haversine => point.distance_m(zone) < self.radius,
        })
    }
}
