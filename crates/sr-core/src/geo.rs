//! Geographic coordinate type and spatial utilities.
//!
//! `GeoPoint` uses `f32` (single-precision) latitude/longitude.  At the
//! equator this gives ~1 m precision — more than sufficient for city-scale
//! route planning while halving memory consumption vs. `f64`.

use crate::error::{CoreError, CoreResult};

/// A WGS-84 geographic coordinate stored as single-precision floats.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeoPoint {
    pub lat: f32,
    pub lon: f32,
}

impl GeoPoint {
    #[inline]
    pub fn new(lat: f32, lon: f32) -> Self {
        Self { lat, lon }
    }

    /// Haversine great-circle distance in metres.
    ///
    /// Accuracy: ±0.5 % (f32 rounding); suitable for node snapping and
    /// risk-proximity checks at city scale.
    pub fn distance_m(self, other: GeoPoint) -> f32 {
        const R: f32 = 6_371_000.0; // mean Earth radius, metres

        let d_lat = (other.lat - self.lat).to_radians();
        let d_lon = (other.lon - self.lon).to_radians();

        let lat1 = self.lat.to_radians();
        let lat2 = other.lat.to_radians();

        let a = (d_lat * 0.5).sin().powi(2)
            + lat1.cos() * lat2.cos() * (d_lon * 0.5).sin().powi(2);

        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        R * c
    }

    /// Planar Euclidean distance in raw degree-space.
    ///
    /// Not a geodesic — degrades near the poles and over long distances.
    /// Kept because the risk-proximity threshold is specified in degrees;
    /// see [`crate::config::PlannerConfig::risk_radius_deg`].
    #[inline]
    pub fn planar_deg(self, other: GeoPoint) -> f32 {
        let d_lat = self.lat - other.lat;
        let d_lon = self.lon - other.lon;
        (d_lat * d_lat + d_lon * d_lon).sqrt()
    }

    /// Arithmetic mean of the two coordinates.
    ///
    /// An approximation of the segment midpoint, not a geodesic midpoint —
    /// fine for the short road segments it is applied to.
    #[inline]
    pub fn midpoint(self, other: GeoPoint) -> GeoPoint {
        GeoPoint {
            lat: (self.lat + other.lat) * 0.5,
            lon: (self.lon + other.lon) * 0.5,
        }
    }

    /// Reject NaN/infinite components and out-of-range latitudes/longitudes.
    pub fn check(self) -> CoreResult<()> {
        let in_range = self.lat.is_finite()
            && self.lon.is_finite()
            && (-90.0..=90.0).contains(&self.lat)
            && (-180.0..=180.0).contains(&self.lon);
        if in_range {
            Ok(())
        } else {
            Err(CoreError::InvalidCoordinate { lat: self.lat, lon: self.lon })
        }
    }
}

impl std::fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lon)
    }
}
