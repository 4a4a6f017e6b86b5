use std::fmt;

use crate::{error::ValidationError, workout::WorkoutType};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FormField {
    Type,
    Distance,
    Duration,
    Cadence,
    Elevation,
}

impl FormField {
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Type => "type",
            FormField::Distance => "distance",
            FormField::Duration => "duration",
            FormField::Cadence => "cadence",
            FormField::Elevation => "elevation",
        }
    }
}

impl fmt::Display for FormField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Raw form values, exactly as typed.
#[derive(Debug, Clone, PartialEq)]
pub struct FormFields {
    pub workout_type: String,
    pub distance: String,
    pub duration: String,
    pub cadence: String,
    pub elevation: String,
}

impl Default for FormFields {
    fn default() -> Self {
        Self {
            workout_type: WorkoutType::Running.as_str().to_owned(),
            distance: String::new(),
            duration: String::new(),
            cadence: String::new(),
            elevation: String::new(),
        }
    }
}

impl FormFields {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Type => &self.workout_type,
            FormField::Distance => &self.distance,
            FormField::Duration => &self.duration,
            FormField::Cadence => &self.cadence,
            FormField::Elevation => &self.elevation,
        }
    }

    pub fn set(&mut self, field: FormField, value: String) {
        match field {
            FormField::Type => self.workout_type = value,
            FormField::Distance => self.distance = value,
            FormField::Duration => self.duration = value,
            FormField::Cadence => self.cadence = value,
            FormField::Elevation => self.elevation = value,
        }
    }

    /// Clears every value but keeps the selected type.
    pub fn clear_values(&mut self) {
        self.distance.clear();
        self.duration.clear();
        self.cadence.clear();
        self.elevation.clear();
    }

    /// Only the extra field of the selected type is required; the other one
    /// is ignored.
    pub fn validate(&self) -> Result<ValidatedInput, ValidationError> {
        let workout_type: WorkoutType = self.workout_type.parse()?;
        let distance_km = positive(FormField::Distance, &self.distance)?;
        let duration_min = positive(FormField::Duration, &self.duration)?;

        match workout_type {
            WorkoutType::Running => Ok(ValidatedInput::Running {
                distance_km,
                duration_min,
                cadence_spm: positive(FormField::Cadence, &self.cadence)?,
            }),
            WorkoutType::Cycling => {
                let elevation_gain_m = finite(FormField::Elevation, &self.elevation)?;
                if elevation_gain_m < 0. {
                    return Err(ValidationError::NegativeElevation);
                }
                Ok(ValidatedInput::Cycling {
                    distance_km,
                    duration_min,
                    elevation_gain_m,
                })
            }
        }
    }
}

fn finite(field: FormField, raw: &str) -> Result<f64, ValidationError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber(field)),
    }
}

fn positive(field: FormField, raw: &str) -> Result<f64, ValidationError> {
    let value = finite(field, raw)?;
    if value > 0. {
        Ok(value)
    } else {
        Err(ValidationError::NotPositive(field))
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ValidatedInput {
    Running { distance_km: f64, duration_min: f64, cadence_spm: f64 },
    Cycling { distance_km: f64, duration_min: f64, elevation_gain_m: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    fn running(distance: &str, duration: &str, cadence: &str) -> FormFields {
        FormFields {
            workout_type: "running".into(),
            distance: distance.into(),
            duration: duration.into(),
            cadence: cadence.into(),
            ..Default::default()
        }
    }

    fn cycling(distance: &str, duration: &str, elevation: &str) -> FormFields {
        FormFields {
            workout_type: "cycling".into(),
            distance: distance.into(),
            duration: duration.into(),
            elevation: elevation.into(),
            ..Default::default()
        }
    }

    fn rejection(fields: FormFields) -> ValidationError {
        fields.validate().unwrap_err()
    }

    #[test]
    fn accepts_valid_running() {
        assert_eq!(
            running("5.2", " 24 ", "178").validate(),
            Ok(ValidatedInput::Running {
                distance_km: 5.2,
                duration_min: 24.,
                cadence_spm: 178.
            })
        );
    }

    #[test]
    fn accepts_valid_cycling_with_zero_elevation() {
        assert_eq!(
            cycling("27", "95", "0").validate(),
            Ok(ValidatedInput::Cycling {
                distance_km: 27.,
                duration_min: 95.,
                elevation_gain_m: 0.
            })
        );
    }

    #[test]
    fn rejects_non_numbers() {
        use FormField::*;
        assert_eq!(rejection(running("", "24", "178")), ValidationError::NotANumber(Distance));
        assert_eq!(rejection(running("5", "abc", "178")), ValidationError::NotANumber(Duration));
        assert_eq!(rejection(running("5", "24", "NaN")), ValidationError::NotANumber(Cadence));
        assert_eq!(rejection(cycling("inf", "24", "10")), ValidationError::NotANumber(Distance));
        assert_eq!(rejection(cycling("5", "24", "")), ValidationError::NotANumber(Elevation));
    }

    #[test]
    fn rejects_non_positive() {
        use FormField::*;
        assert_eq!(rejection(running("-1", "24", "178")), ValidationError::NotPositive(Distance));
        assert_eq!(rejection(running("5", "0", "178")), ValidationError::NotPositive(Duration));
        assert_eq!(rejection(running("5", "24", "0")), ValidationError::NotPositive(Cadence));
        assert_eq!(rejection(cycling("5", "-3", "10")), ValidationError::NotPositive(Duration));
    }

    #[test]
    fn rejects_negative_elevation() {
        assert_eq!(rejection(cycling("27", "95", "-5")), ValidationError::NegativeElevation);
    }

    #[test]
    fn ignores_field_of_other_type() {
        let mut fields = running("5", "25", "170");
        fields.elevation = "-100".into();
        assert!(fields.validate().is_ok());

        let mut fields = cycling("5", "25", "12");
        fields.cadence = "garbage".into();
        assert!(fields.validate().is_ok());
    }

    #[test]
    fn rejects_unknown_type() {
        let mut fields = running("5", "25", "170");
        fields.workout_type = "rowing".into();
        assert_eq!(rejection(fields), ValidationError::UnknownWorkoutType("rowing".into()));
    }

    #[test]
    fn clear_values_keeps_type() {
        let mut fields = cycling("27", "95", "522");
        fields.set(FormField::Cadence, "90".into());
        assert_eq!(fields.get(FormField::Cadence), "90");
        fields.clear_values();
        assert_eq!(fields, FormFields { workout_type: "cycling".into(), ..Default::default() });
    }
}
