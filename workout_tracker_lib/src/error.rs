use thiserror::Error;

use crate::input::FormField;

/// Shown to the user whenever a submitted form is rejected.
pub const INVALID_INPUT_MESSAGE: &str = "Inputs have to be positive numbers!";

/// Shown when the browser refuses or fails to report a position.
pub const LOCATION_UNAVAILABLE_MESSAGE: &str = "Could not get your position";

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{0} is not a finite number")]
    NotANumber(FormField),
    #[error("{0} must be greater than zero")]
    NotPositive(FormField),
    #[error("elevation gain cannot be negative")]
    NegativeElevation,
    #[error("unknown workout type `{0}`")]
    UnknownWorkoutType(String),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TrackerError {
    #[error("invalid workout input: {0}")]
    Validation(#[from] ValidationError),
    #[error("no map location selected")]
    NoPendingClick,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LocationError {
    #[error("permission to read the position was denied")]
    PermissionDenied,
    #[error("position is unavailable")]
    PositionUnavailable,
    #[error("timed out waiting for a position")]
    Timeout,
    #[error("geolocation is not supported")]
    Unsupported,
}

impl LocationError {
    /// Maps a `GeolocationPositionError.code`.
    pub fn from_code(code: u16) -> Self {
        match code {
            1 => LocationError::PermissionDenied,
            3 => LocationError::Timeout,
            _ => LocationError::PositionUnavailable,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("malformed tracker config: {0}")]
    Parse(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_error_from_position_error_code() {
        assert_eq!(LocationError::from_code(1), LocationError::PermissionDenied);
        assert_eq!(LocationError::from_code(2), LocationError::PositionUnavailable);
        assert_eq!(LocationError::from_code(3), LocationError::Timeout);
        assert_eq!(LocationError::from_code(0), LocationError::PositionUnavailable);
    }
}
