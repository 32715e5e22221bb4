use crate::shared::error::MockLocationError;
use serde::Serialize;

const LATITUDE_RANGE: std::ops::RangeInclusive<f64> = -90.0..=90.0;
const LONGITUDE_RANGE: std::ops::RangeInclusive<f64> = -180.0..=180.0;

/// Coordinate value object: a validated (latitude, longitude) pair in decimal degrees
///
/// Immutable once constructed. Both components are finite and inside
/// their geographic range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Coordinate {
    latitude: f64,
    longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Result<Self, MockLocationError> {
        check_component(latitude, &latitude.to_string(), "Latitude", &LATITUDE_RANGE)?;
        check_component(
            longitude,
            &longitude.to_string(),
            "Longitude",
            &LONGITUDE_RANGE,
        )?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    /// Parses user-supplied text for both components
    ///
    /// # Errors
    /// Returns `InvalidCoordinateFormat` if either text is empty, not a
    /// number, not finite, or out of range. Latitude is checked first.
    pub fn parse(latitude_text: &str, longitude_text: &str) -> Result<Self, MockLocationError> {
        let latitude = parse_component(latitude_text, "Latitude", &LATITUDE_RANGE)?;
        let longitude = parse_component(longitude_text, "Longitude", &LONGITUDE_RANGE)?;
        Ok(Self {
            latitude,
            longitude,
        })
    }

    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.longitude
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}", self.latitude, self.longitude)
    }
}

fn parse_component(
    text: &str,
    label: &str,
    range: &std::ops::RangeInclusive<f64>,
) -> Result<f64, MockLocationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid(text, format!("{} is empty", label)));
    }

    let value: f64 = trimmed
        .parse()
        .map_err(|_| invalid(text, format!("{} is not a number", label)))?;

    check_component(value, text, label, range)?;
    Ok(value)
}

fn check_component(
    value: f64,
    input: &str,
    label: &str,
    range: &std::ops::RangeInclusive<f64>,
) -> Result<(), MockLocationError> {
    // "NaN" and "inf" parse successfully as f64
    if !value.is_finite() {
        return Err(invalid(input, format!("{} must be a finite number", label)));
    }
    if !range.contains(&value) {
        return Err(invalid(
            input,
            format!(
                "{} {} is outside [{}, {}]",
                label,
                value,
                range.start(),
                range.end()
            ),
        ));
    }
    Ok(())
}

fn invalid(input: &str, reason: String) -> MockLocationError {
    MockLocationError::InvalidCoordinateFormat {
        input: input.to_string(),
        reason,
    }
}
