use tracing::{debug, info, warn};

use crate::{
    config::TrackerConfig,
    error::{LocationError, TrackerError, INVALID_INPUT_MESSAGE, LOCATION_UNAVAILABLE_MESSAGE},
    input::{FormField, FormFields},
    view::{FormView, Geolocation, ListEntry, ListView, MapView, MarkerSpec, Notifier, PanOptions},
    workout::{Coordinates, Workout, WorkoutId, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TrackerState {
    Idle,
    /// The form is open for a captured map click.
    AwaitingFormInput { pending_click: Coordinates },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MapStatus {
    /// Waiting for the first position; the map has no view yet.
    Locating,
    Ready,
    /// No position could be obtained. Stays this way for the session; a late
    /// position is ignored.
    Unavailable,
}

/// Session state for one page. Every handler runs to completion and leaves
/// the workout list, markers and entries in step with each other.
pub struct Tracker {
    config: TrackerConfig,
    workouts: Vec<Workout>,
    state: TrackerState,
    map_status: MapStatus,
    location_requested: bool,
}

impl Tracker {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            config,
            workouts: Vec::new(),
            state: TrackerState::Idle,
            map_status: MapStatus::Locating,
            location_requested: false,
        }
    }

    /// Committed workouts, oldest first.
    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    pub fn workout(&self, id: WorkoutId) -> Option<&Workout> {
        self.workouts.iter().find(|w| w.id() == id)
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn pending_click(&self) -> Option<Coordinates> {
        match self.state {
            TrackerState::AwaitingFormInput { pending_click } => Some(pending_click),
            TrackerState::Idle => None,
        }
    }

    pub fn map_status(&self) -> MapStatus {
        self.map_status
    }

    /// Asks for the user's position once per session. Returns false if a
    /// request was already made.
    pub fn request_location<G, F>(&mut self, geolocation: &G, on_result: F) -> bool
    where
        G: Geolocation,
        F: FnOnce(Result<Coordinates, LocationError>) + 'static,
    {
        if self.location_requested {
            warn!("Position already requested for this session");
            return false;
        }

        self.location_requested = true;
        self.map_status = MapStatus::Locating;
        geolocation.request_current_position(Box::new(on_result));
        true
    }

    /// Only a map still locating is initialized; a ready or unavailable map
    /// keeps its status.
    pub fn on_position_found(&mut self, position: Coordinates, map: &mut impl MapView) {
        if self.map_status != MapStatus::Locating {
            debug!("Map is {:?}, ignoring position {position}", self.map_status);
            return;
        }

        info!("Position found at {position}");
        self.map_status = MapStatus::Ready;
        map.initialize(position, self.config.map_zoom_level);
    }

    pub fn on_position_error(&mut self, error: LocationError, notifier: &mut impl Notifier) {
        warn!("Position unavailable: {error}");
        self.map_status = MapStatus::Unavailable;
        notifier.notify(LOCATION_UNAVAILABLE_MESSAGE);
    }

    /// The latest click replaces any pending one.
    pub fn on_map_click(&mut self, location: Coordinates, form: &mut impl FormView) {
        if self.map_status != MapStatus::Ready {
            debug!("Map not ready, ignoring click at {location}");
            return;
        }

        match self.state {
            TrackerState::Idle => info!("Map clicked at {location}, opening form"),
            TrackerState::AwaitingFormInput { pending_click } => {
                debug!("Replacing pending click {pending_click} with {location}")
            }
        }

        self.state = TrackerState::AwaitingFormInput { pending_click: location };
        form.show();
        form.focus_field(FormField::Distance);
    }

    /// Validates and commits a workout at the pending click. A rejected
    /// submission leaves the session and all collaborators untouched except
    /// for the user notice.
    pub fn on_form_submit<U>(
        &mut self,
        fields: &FormFields,
        ui: &mut U,
    ) -> Result<WorkoutId, TrackerError>
    where
        U: MapView + FormView + ListView + Notifier,
    {
        let input = match fields.validate() {
            Ok(input) => input,
            Err(err) => {
                warn!("Rejected workout input: {err}");
                ui.notify(INVALID_INPUT_MESSAGE);
                return Err(err.into());
            }
        };

        let TrackerState::AwaitingFormInput { pending_click } = self.state else {
            warn!("Form submitted without a map location");
            return Err(TrackerError::NoPendingClick);
        };

        let workout = Workout::from_input(pending_click, input);
        let id = workout.id();
        let marker = MarkerSpec::from_workout(&workout, &self.config);
        let entry = ListEntry::from_workout(&workout);

        info!("Committed {} workout {id} at {pending_click}", workout.workout_type());
        self.workouts.push(workout);

        ui.add_marker(&marker);
        ui.append_entry(entry);
        ui.clear_fields();
        ui.hide();
        self.state = TrackerState::Idle;

        Ok(id)
    }

    pub fn on_form_cancel(&mut self, form: &mut impl FormView) {
        if let TrackerState::AwaitingFormInput { pending_click } = self.state {
            debug!("Discarding pending click {pending_click}");
        }

        self.state = TrackerState::Idle;
        form.clear_fields();
        form.hide();
    }

    /// `id` is None when the click was outside any entry. Unknown ids are
    /// ignored. Returns whether the map was moved.
    pub fn on_entry_click(&self, id: Option<WorkoutId>, map: &mut impl MapView) -> bool {
        let Some(id) = id else {
            return false;
        };

        let Some(workout) = self.workout(id) else {
            debug!("No workout with id {id}");
            return false;
        };

        map.set_view(
            workout.coordinates(),
            self.config.map_zoom_level,
            PanOptions {
                animate: true,
                duration_secs: self.config.pan_duration_secs,
            },
        );
        true
    }

    pub fn on_type_change(&self, workout_type: WorkoutType, form: &mut impl FormView) {
        form.toggle_extra_field(workout_type);
    }
}

impl Default for Tracker {
    fn default() -> Self {
        Self::new(TrackerConfig::default())
    }
}
