//! Contracts for everything the tracker drives but does not own: the map
//! widget, the workout form, the workout list, user notices and the
//! position source. The frontend implements them on top of leaflet and yew;
//! tests implement them with recording fakes.

use crate::{
    config::TrackerConfig,
    error::LocationError,
    input::FormField,
    workout::{Coordinates, Workout, WorkoutId, WorkoutKind, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanOptions {
    pub animate: bool,
    pub duration_secs: f64,
}

/// Marker to place for a committed workout.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub id: WorkoutId,
    pub coordinates: Coordinates,
    pub popup_content: String,
    pub class_name: String,
    pub popup_min_width: f64,
    pub popup_max_width: f64,
}

impl MarkerSpec {
    pub fn from_workout(workout: &Workout, config: &TrackerConfig) -> Self {
        let workout_type = workout.workout_type();
        Self {
            id: workout.id(),
            coordinates: workout.coordinates(),
            popup_content: format!("{} {}", workout_type.icon(), workout.description()),
            class_name: format!("{}-popup", workout_type.as_str()),
            popup_min_width: config.popup_min_width,
            popup_max_width: config.popup_max_width,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct EntryDetail {
    pub icon: &'static str,
    pub value: String,
    pub unit: &'static str,
}

impl EntryDetail {
    fn new(icon: &'static str, value: String, unit: &'static str) -> Self {
        Self { icon, value, unit }
    }
}

/// Display model of one list entry, tagged with the workout id.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEntry {
    pub id: WorkoutId,
    pub workout_type: WorkoutType,
    pub title: String,
    pub details: Vec<EntryDetail>,
}

impl ListEntry {
    /// Distance, duration, the derived metric and the kind-specific field,
    /// in that order. Derived metrics are shown with one decimal.
    pub fn from_workout(workout: &Workout) -> Self {
        let workout_type = workout.workout_type();
        let mut details = vec![
            EntryDetail::new(workout_type.icon(), workout.distance_km().to_string(), "km"),
            EntryDetail::new("⏱", workout.duration_min().to_string(), "min"),
        ];

        match *workout.kind() {
            WorkoutKind::Running { cadence_spm, pace_min_per_km } => {
                details.push(EntryDetail::new("⚡️", format!("{pace_min_per_km:.1}"), "min/km"));
                details.push(EntryDetail::new("🦶🏼", cadence_spm.to_string(), "spm"));
            }
            WorkoutKind::Cycling { elevation_gain_m, speed_km_per_h } => {
                details.push(EntryDetail::new("⚡️", format!("{speed_km_per_h:.1}"), "km/h"));
                details.push(EntryDetail::new("⛰", elevation_gain_m.to_string(), "m"));
            }
        }

        Self {
            id: workout.id(),
            workout_type,
            title: workout.description(),
            details,
        }
    }
}

pub trait MapView {
    fn initialize(&mut self, center: Coordinates, zoom: f64);
    fn add_marker(&mut self, marker: &MarkerSpec);
    fn set_view(&mut self, center: Coordinates, zoom: f64, options: PanOptions);
}

pub trait FormView {
    fn show(&mut self);
    fn hide(&mut self);
    fn focus_field(&mut self, field: FormField);
    fn clear_fields(&mut self);
    /// Shows the extra input belonging to `workout_type` and hides the other.
    fn toggle_extra_field(&mut self, workout_type: WorkoutType);
}

/// Append-only; entries appear in commit order.
pub trait ListView {
    fn append_entry(&mut self, entry: ListEntry);
}

/// Blocking, user-visible notice.
pub trait Notifier {
    fn notify(&mut self, message: &str);
}

/// Receives the outcome of one position request.
pub type PositionCallback = Box<dyn FnOnce(Result<Coordinates, LocationError>)>;

pub trait Geolocation {
    fn request_current_position(&self, on_result: PositionCallback);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn details(entry: &ListEntry) -> Vec<(&str, &str)> {
        entry.details.iter().map(|d| (d.value.as_str(), d.unit)).collect()
    }

    #[test]
    fn running_entry_shows_pace_and_cadence() {
        let workout = Workout::running(Coordinates::new(49., -12.), 5.2, 24., 178.);
        let entry = ListEntry::from_workout(&workout);

        assert_eq!(entry.id, workout.id());
        assert_eq!(entry.workout_type, WorkoutType::Running);
        assert_eq!(entry.title, workout.description());
        assert_eq!(
            details(&entry),
            vec![("5.2", "km"), ("24", "min"), ("4.6", "min/km"), ("178", "spm")]
        );
    }

    #[test]
    fn cycling_entry_shows_speed_and_elevation() {
        let workout = Workout::cycling(Coordinates::new(49., -12.), 27., 95., 522.);
        let entry = ListEntry::from_workout(&workout);

        assert_eq!(entry.workout_type, WorkoutType::Cycling);
        assert_eq!(
            details(&entry),
            vec![("27", "km"), ("95", "min"), ("17.1", "km/h"), ("522", "m")]
        );
    }

    #[test]
    fn marker_popup_identifies_kind() {
        let config = TrackerConfig::default();
        let workout = Workout::cycling(Coordinates::new(49., -12.), 27., 95., 522.);
        let marker = MarkerSpec::from_workout(&workout, &config);

        assert_eq!(marker.id, workout.id());
        assert_eq!(marker.coordinates, Coordinates::new(49., -12.));
        assert_eq!(marker.class_name, "cycling-popup");
        assert!(marker.popup_content.starts_with("🚴‍♀️ Cycling on "));
        assert_eq!(marker.popup_max_width, 250.);
    }
}
