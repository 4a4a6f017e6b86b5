use gloo_console::{error, info};
use gloo_utils::window;
use workout_tracker_lib::{
    view::{FormView, ListEntry, ListView, MapView, MarkerSpec, Notifier, PanOptions},
    Coordinates, FormField, FormFields, WorkoutType,
};

use crate::components::leaflet_map::LeafletMap;

/// Focus request for the form. `seq` changes on every request so a repeated
/// request for the same field still fires.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FocusRequest {
    pub field: FormField,
    pub seq: u32,
}

pub struct FormState {
    pub visible: bool,
    pub fields: FormFields,
    pub extra_field: WorkoutType,
    pub focus: Option<FocusRequest>,
}

impl Default for FormState {
    fn default() -> Self {
        Self {
            visible: false,
            fields: FormFields::default(),
            extra_field: WorkoutType::Running,
            focus: None,
        }
    }
}

impl FormView for FormState {
    fn show(&mut self) {
        self.visible = true;
    }

    fn hide(&mut self) {
        self.visible = false;
        self.focus = None;
    }

    fn focus_field(&mut self, field: FormField) {
        let seq = self.focus.map_or(0, |f| f.seq.wrapping_add(1));
        self.focus = Some(FocusRequest { field, seq });
    }

    fn clear_fields(&mut self) {
        self.fields.clear_values();
    }

    fn toggle_extra_field(&mut self, workout_type: WorkoutType) {
        self.extra_field = workout_type;
    }
}

#[derive(Default)]
pub struct WorkoutEntries {
    pub entries: Vec<ListEntry>,
}

impl ListView for WorkoutEntries {
    fn append_entry(&mut self, entry: ListEntry) {
        self.entries.push(entry);
    }
}

/// `window.alert`.
pub struct BrowserNotifier;

impl Notifier for BrowserNotifier {
    fn notify(&mut self, message: &str) {
        info!(format!("Notice: {}", message));
        if window().alert_with_message(message).is_err() {
            error!("Failed to show alert");
        }
    }
}

/// Every collaborator of one submit, borrowed from the app for the call.
pub struct SessionUi<'a> {
    pub map: &'a mut LeafletMap,
    pub form: &'a mut FormState,
    pub entries: &'a mut WorkoutEntries,
    pub notifier: BrowserNotifier,
}

impl MapView for SessionUi<'_> {
    fn initialize(&mut self, center: Coordinates, zoom: f64) {
        self.map.initialize(center, zoom);
    }

    fn add_marker(&mut self, marker: &MarkerSpec) {
        self.map.add_marker(marker);
    }

    fn set_view(&mut self, center: Coordinates, zoom: f64, options: PanOptions) {
        self.map.set_view(center, zoom, options);
    }
}

impl FormView for SessionUi<'_> {
    fn show(&mut self) {
        self.form.show();
    }

    fn hide(&mut self) {
        self.form.hide();
    }

    fn focus_field(&mut self, field: FormField) {
        self.form.focus_field(field);
    }

    fn clear_fields(&mut self) {
        self.form.clear_fields();
    }

    fn toggle_extra_field(&mut self, workout_type: WorkoutType) {
        self.form.toggle_extra_field(workout_type);
    }
}

impl ListView for SessionUi<'_> {
    fn append_entry(&mut self, entry: ListEntry) {
        self.entries.append_entry(entry);
    }
}

impl Notifier for SessionUi<'_> {
    fn notify(&mut self, message: &str) {
        self.notifier.notify(message);
    }
}
