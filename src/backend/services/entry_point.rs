// src/backend/services/entry_point.rs
// Handles the `?point=` parameter of the page the user landed on

use crate::{error::StampError, models::StampId};
use tracing::{debug, warn};
use url::Url;

/// Query parameter carrying the stamp point.
pub const POINT_PARAM: &str = "point";

/// Read and rewrite access to the current page address.
pub trait Navigation {
    /// Full URL of the current page.
    fn current_url(&self) -> Result<String, StampError>;

    /// Replaces the visible address without navigating or adding a history entry.
    fn replace_url(&mut self, url: &str) -> Result<(), StampError>;
}

/// Result of inspecting the landing URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EntryPoint {
    /// No (or an empty) `point` parameter.
    Absent,
    Valid(StampId),
    /// Carries the raw parameter value for the error message.
    Invalid(String),
}

/// Parses a raw `point` value as a base-10 integer in `1..=total`.
///
/// # Errors
/// `StampError::InvalidStampPoint` carrying `raw` unchanged when it is not an integer
/// or falls outside the range.
pub fn parse_point(raw: &str, total: u32) -> Result<StampId, StampError> {
    let value: i64 = raw
        .parse()
        .map_err(|_| StampError::InvalidStampPoint(raw.to_string()))?;
    if value < 1 || value > i64::from(total) {
        return Err(StampError::InvalidStampPoint(raw.to_string()));
    }
    StampId::try_from(value).map_err(|_| StampError::InvalidStampPoint(raw.to_string()))
}

/// First non-empty `point` value of the URL, percent-decoded.
pub fn extract_point(url: &Url) -> Option<String> {
    url.query_pairs()
        .find(|(name, _)| name == POINT_PARAM)
        .map(|(_, value)| value.into_owned())
        .filter(|value| !value.is_empty())
}

/// The same URL with its query string and fragment removed.
pub fn strip_query(url: &Url) -> String {
    let mut cleaned = url.clone();
    cleaned.set_query(None);
    cleaned.set_fragment(None);
    cleaned.to_string()
}

/// Inspects the landing URL once per page load.
#[derive(Clone, Debug)]
pub struct EntryPointResolver {
    total_stamps: u32,
}

impl EntryPointResolver {
    pub fn new(total_stamps: u32) -> Self {
        Self { total_stamps }
    }

    /// Reads `point` from the current address and scrubs it so a reload cannot replay it.
    ///
    /// The address is rewritten whether or not the value was valid. A failed rewrite
    /// is logged; it does not change the result.
    ///
    /// # Errors
    /// Only when the current address cannot be read or parsed.
    pub fn resolve<N: Navigation>(&self, navigation: &mut N) -> Result<EntryPoint, StampError> {
        let href = navigation.current_url()?;
        let url = Url::parse(&href)
            .map_err(|e| StampError::NavigationError(format!("Unparseable URL '{}': {}", href, e)))?;

        let Some(raw) = extract_point(&url) else {
            return Ok(EntryPoint::Absent);
        };

        let entry = match parse_point(&raw, self.total_stamps) {
            Ok(id) => EntryPoint::Valid(id),
            Err(_) => EntryPoint::Invalid(raw),
        };
        debug!(?entry, "Resolved entry point");

        if let Err(e) = navigation.replace_url(&strip_query(&url)) {
            warn!(error = %e, "Failed to scrub the point parameter from the address");
        }
        Ok(entry)
    }
}
