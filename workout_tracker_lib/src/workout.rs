use std::{
    fmt,
    num::ParseIntError,
    str::FromStr,
    sync::atomic::{AtomicU64, Ordering},
};

use chrono::{DateTime, Local, Utc};

use crate::{error::ValidationError, input::ValidatedInput};

static NEXT_WORKOUT_ID: AtomicU64 = AtomicU64::new(1);

/// Correlates a workout with its list entry and its map marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WorkoutId(u64);

impl WorkoutId {
    fn next() -> Self {
        Self(NEXT_WORKOUT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for WorkoutId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(Self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.lat, self.lng)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutType {
    Running,
    Cycling,
}

impl WorkoutType {
    /// Value used by the type select and as the CSS modifier.
    pub fn as_str(&self) -> &'static str {
        match self {
            WorkoutType::Running => "running",
            WorkoutType::Cycling => "cycling",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            WorkoutType::Running => "Running",
            WorkoutType::Cycling => "Cycling",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            WorkoutType::Running => "🏃‍♂️",
            WorkoutType::Cycling => "🚴‍♀️",
        }
    }
}

impl fmt::Display for WorkoutType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WorkoutType {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "running" => Ok(WorkoutType::Running),
            "cycling" => Ok(WorkoutType::Cycling),
            other => Err(ValidationError::UnknownWorkoutType(other.to_owned())),
        }
    }
}

/// Variant payload, including the derived metric cached at construction.
#[derive(Debug, Clone, PartialEq)]
pub enum WorkoutKind {
    Running { cadence_spm: f64, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_km_per_h: f64 },
}

impl WorkoutKind {
    pub fn workout_type(&self) -> WorkoutType {
        match self {
            WorkoutKind::Running { .. } => WorkoutType::Running,
            WorkoutKind::Cycling { .. } => WorkoutType::Cycling,
        }
    }
}

/// A committed workout. Immutable once built.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coordinates: Coordinates,
    distance_km: f64,
    duration_min: f64,
    kind: WorkoutKind,
}

impl Workout {
    /// Inputs must already be validated: finite, distance, duration and
    /// cadence strictly positive.
    pub fn running(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        Self::running_at(Utc::now(), coordinates, distance_km, duration_min, cadence_spm)
    }

    /// Inputs must already be validated: finite, distance and duration
    /// strictly positive, elevation not negative.
    pub fn cycling(
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        Self::cycling_at(Utc::now(), coordinates, distance_km, duration_min, elevation_gain_m)
    }

    pub fn from_input(coordinates: Coordinates, input: ValidatedInput) -> Self {
        match input {
            ValidatedInput::Running { distance_km, duration_min, cadence_spm } => {
                Self::running(coordinates, distance_km, duration_min, cadence_spm)
            }
            ValidatedInput::Cycling { distance_km, duration_min, elevation_gain_m } => {
                Self::cycling(coordinates, distance_km, duration_min, elevation_gain_m)
            }
        }
    }

    fn running_at(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Self {
        debug_assert!(cadence_spm.is_finite() && cadence_spm > 0.);
        let kind = WorkoutKind::Running {
            cadence_spm,
            pace_min_per_km: duration_min / distance_km,
        };
        Self::build(created_at, coordinates, distance_km, duration_min, kind)
    }

    fn cycling_at(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Self {
        debug_assert!(elevation_gain_m.is_finite() && elevation_gain_m >= 0.);
        let kind = WorkoutKind::Cycling {
            elevation_gain_m,
            speed_km_per_h: distance_km / (duration_min / 60.),
        };
        Self::build(created_at, coordinates, distance_km, duration_min, kind)
    }

    fn build(
        created_at: DateTime<Utc>,
        coordinates: Coordinates,
        distance_km: f64,
        duration_min: f64,
        kind: WorkoutKind,
    ) -> Self {
        debug_assert!(distance_km.is_finite() && distance_km > 0.);
        debug_assert!(duration_min.is_finite() && duration_min > 0.);

        Self {
            id: WorkoutId::next(),
            created_at,
            coordinates,
            distance_km,
            duration_min,
            kind,
        }
    }

    pub fn id(&self) -> WorkoutId {
        self.id
    }

    pub fn coordinates(&self) -> Coordinates {
        self.coordinates
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn kind(&self) -> &WorkoutKind {
        &self.kind
    }

    pub fn workout_type(&self) -> WorkoutType {
        self.kind.workout_type()
    }

    /// "Running on April 14", in the viewer's local time.
    pub fn description(&self) -> String {
        format!(
            "{} on {}",
            self.workout_type().label(),
            self.created_at.with_timezone(&Local).format("%B %-d")
        )
    }

    pub fn pace_min_per_km(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Running { pace_min_per_km, .. } => Some(pace_min_per_km),
            WorkoutKind::Cycling { .. } => None,
        }
    }

    pub fn speed_km_per_h(&self) -> Option<f64> {
        match self.kind {
            WorkoutKind::Cycling { speed_km_per_h, .. } => Some(speed_km_per_h),
            WorkoutKind::Running { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use chrono::TimeZone;

    use super::*;

    fn origin() -> Coordinates {
        Coordinates::new(49., -12.)
    }

    #[test]
    fn running_pace_is_duration_over_distance() {
        let workout = Workout::running(origin(), 5.2, 24., 178.);
        assert_eq!(workout.pace_min_per_km(), Some(24. / 5.2));
        assert!((workout.pace_min_per_km().unwrap() - 4.6154).abs() < 1e-4);
        assert_eq!(workout.speed_km_per_h(), None);
        assert_eq!(workout.workout_type(), WorkoutType::Running);
        assert_eq!(workout.coordinates(), origin());
    }

    #[test]
    fn cycling_speed_is_km_per_hour() {
        let workout = Workout::cycling(origin(), 27., 95., 522.);
        assert_eq!(workout.speed_km_per_h(), Some(27. / (95. / 60.)));
        assert!((workout.speed_km_per_h().unwrap() - 17.0526).abs() < 1e-4);
        assert_eq!(workout.pace_min_per_km(), None);
        assert_eq!(
            workout.kind(),
            &WorkoutKind::Cycling { elevation_gain_m: 522., speed_km_per_h: 27. / (95. / 60.) }
        );
    }

    #[test]
    fn cycling_accepts_flat_route() {
        let workout = Workout::cycling(origin(), 10., 30., 0.);
        assert_eq!(workout.speed_km_per_h(), Some(20.));
    }

    #[test]
    fn ids_are_unique() {
        let ids: HashSet<WorkoutId> = (0..100)
            .map(|i| {
                if i % 2 == 0 {
                    Workout::running(origin(), 1., 5., 160.).id()
                } else {
                    Workout::cycling(origin(), 1., 5., 10.).id()
                }
            })
            .collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn description_uses_local_month_and_day() {
        let created_at = Utc.with_ymd_and_hms(2024, 4, 14, 12, 0, 0).unwrap();
        let workout = Workout::running_at(created_at, origin(), 5., 25., 170.);
        let expected = format!("Running on {}", created_at.with_timezone(&Local).format("%B %-d"));
        assert_eq!(workout.description(), expected);
        assert_eq!(workout.created_at, created_at);

        let workout = Workout::cycling_at(created_at, origin(), 5., 25., 0.);
        assert!(workout.description().starts_with("Cycling on "));
    }

    #[test]
    fn from_input_picks_matching_variant() {
        let input = ValidatedInput::Cycling {
            distance_km: 27.,
            duration_min: 95.,
            elevation_gain_m: 522.,
        };
        let workout = Workout::from_input(origin(), input);
        assert_eq!(workout.workout_type(), WorkoutType::Cycling);
        assert_eq!(workout.distance_km(), 27.);
        assert_eq!(workout.duration_min(), 95.);
    }

    #[test]
    fn workout_id_round_trips_through_dom_attribute() {
        let id = Workout::running(origin(), 1., 5., 160.).id();
        assert_eq!(id.to_string().parse::<WorkoutId>(), Ok(id));
        assert!("workout".parse::<WorkoutId>().is_err());
    }

    #[test]
    fn workout_type_parses_select_values() {
        assert_eq!("running".parse(), Ok(WorkoutType::Running));
        assert_eq!(" cycling ".parse(), Ok(WorkoutType::Cycling));
        assert_eq!(
            "swimming".parse::<WorkoutType>(),
            Err(ValidationError::UnknownWorkoutType("swimming".into()))
        );
    }
}
