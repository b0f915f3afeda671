//! Planning outcome types.

use std::fmt;

use sr_core::GeoPoint;

/// Why (or whether) an alternate path was suggested.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Caution {
    /// The primary path avoids every risk zone; no alternate was searched.
    None,
    /// The primary path crosses a risk zone; an escalated-weight alternate
    /// is included.  Not guaranteed to differ from the primary.
    AlternateSuggested,
    /// The primary path crosses a risk zone and the escalated search found
    /// no route; the risky primary remains the only candidate.
    NoAlternateAvailable,
    /// Origin and destination are not connected at all.
    NoRouteAvailable,
}

impl fmt::Display for Caution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let msg = match self {
            Caution::None => "clear",
            Caution::AlternateSuggested => "high-risk area on route; alternate suggested",
            Caution::NoAlternateAvailable => "no alternate safe route available",
            Caution::NoRouteAvailable => "no route available",
        };
        f.write_str(msg)
    }
}

/// The outcome of one planning request.
///
/// `primary` is absent only when `caution` is
/// [`Caution::NoRouteAvailable`]; `alternate` is present only when
/// `caution` is [`Caution::AlternateSuggested`].  Present paths run from
/// the resolved origin node to the resolved destination node inclusive.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanResult {
    pub primary: Option<Vec<GeoPoint>>,
    pub alternate: Option<Vec<GeoPoint>>,
    pub caution: Caution,
}
