//! Location assist for the delivery address field.
//!
//! The device's one-shot geolocation lookup happens in the browser; the
//! result (a fix or a failure code) is posted back here. This module
//! owns the typed lookup options, the failure classification, and the
//! formatting of the coordinate block appended to the address.
//!
//! Every failure is recoverable: the shopper can always type the
//! address by hand, and the address field is left untouched on error.

use std::time::Duration;

use serde::Deserialize;

/// Options for the one-shot browser geolocation lookup.
///
/// Rendered onto the location button as data attributes and read by
/// the client script, so the timeout is an explicit value here rather
/// than a literal buried in front-end code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GeolocationOptions {
    /// Request the most accurate fix the device can provide.
    pub high_accuracy: bool,
    /// Give up after this long.
    pub timeout: Duration,
    /// Maximum acceptable age of a cached position.
    pub max_age: Duration,
}

impl Default for GeolocationOptions {
    fn default() -> Self {
        Self {
            high_accuracy: true,
            timeout: Duration::from_secs(10),
            max_age: Duration::ZERO,
        }
    }
}

impl GeolocationOptions {
    /// Timeout in milliseconds, for the client script.
    #[must_use]
    pub const fn timeout_ms(&self) -> u128 {
        self.timeout.as_millis()
    }

    /// Maximum cached-position age in milliseconds.
    #[must_use]
    pub const fn max_age_ms(&self) -> u128 {
        self.max_age.as_millis()
    }
}

/// A successful device position fix.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct LocationFix {
    pub latitude: f64,
    pub longitude: f64,
}

/// Classified geolocation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LocationFailure {
    /// The shopper declined the permission prompt.
    PermissionDenied,
    /// The device could not produce a position.
    PositionUnavailable,
    /// No fix arrived within the timeout.
    Timeout,
    /// The browser has no geolocation capability at all.
    Unsupported,
    /// Anything the client could not classify.
    #[serde(other)]
    Unknown,
}

impl LocationFailure {
    /// The user-facing message for this failure.
    #[must_use]
    pub const fn user_message(self) -> &'static str {
        match self {
            Self::PermissionDenied => {
                "Unable to get location. Please allow location access in your browser settings."
            }
            Self::PositionUnavailable => "Unable to get location. Location information unavailable.",
            Self::Timeout => "Unable to get location. Location request timed out.",
            Self::Unsupported => {
                "Geolocation is not supported by your browser. Please enter your address manually."
            }
            Self::Unknown => "Unable to get location. An unknown error occurred.",
        }
    }
}

/// Format the coordinate block for a fix.
///
/// Coordinates are shown to six decimal places; the map link keeps
/// full precision.
#[must_use]
pub fn location_block(fix: &LocationFix) -> String {
    format!(
        "📍 Current Location:\nLat: {:.6}, Long: {:.6}\nMap: https://maps.google.com/?q={},{}",
        fix.latitude, fix.longitude, fix.latitude, fix.longitude
    )
}

/// Append the coordinate block to existing address text.
///
/// Additive, never replacing: whatever the shopper already typed is
/// kept and remains editable.
#[must_use]
pub fn append_to_address(address: &str, fix: &LocationFix) -> String {
    format!("{address}\n\n{}", location_block(fix))
}

#[cfg(test)]
mod tests {
    use super::*;

    const FIX: LocationFix = LocationFix {
        latitude: 12.971_599,
        longitude: 77.594_566,
    };

    #[test]
    fn test_default_options() {
        let options = GeolocationOptions::default();
        assert!(options.high_accuracy);
        assert_eq!(options.timeout_ms(), 10_000);
        assert_eq!(options.max_age_ms(), 0);
    }

    #[test]
    fn test_location_block_format() {
        let block = location_block(&FIX);
        assert!(block.starts_with("📍 Current Location:\n"));
        assert!(block.contains("Lat: 12.971599, Long: 77.594566"));
        assert!(block.contains("Map: https://maps.google.com/?q=12.971599,77.594566"));
    }

    #[test]
    fn test_append_is_additive() {
        let appended = append_to_address("12 MG Road", &FIX);
        assert!(appended.starts_with("12 MG Road\n\n📍 Current Location:"));
    }

    #[test]
    fn test_failure_messages() {
        assert_eq!(
            LocationFailure::PermissionDenied.user_message(),
            "Unable to get location. Please allow location access in your browser settings."
        );
        assert_eq!(
            LocationFailure::Timeout.user_message(),
            "Unable to get location. Location request timed out."
        );
        assert!(
            LocationFailure::Unsupported
                .user_message()
                .contains("enter your address manually")
        );
    }

    #[test]
    fn test_failure_codes_deserialize() {
        let failure: LocationFailure = serde_json::from_str("\"permission-denied\"")
            .expect("known code");
        assert_eq!(failure, LocationFailure::PermissionDenied);

        // Unrecognized codes classify as unknown rather than erroring.
        let failure: LocationFailure =
            serde_json::from_str("\"gps-on-fire\"").expect("unknown code");
        assert_eq!(failure, LocationFailure::Unknown);
    }
}
