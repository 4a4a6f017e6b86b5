use crate::{
    components::{leaflet_map::LeafletMap, workout_form::WorkoutForm, workout_list::WorkoutList},
    geolocation::BrowserGeolocation,
    ui::{BrowserNotifier, FormState, SessionUi, WorkoutEntries},
};
use gloo_console::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_web::MakeWebConsoleWriter;
use workout_tracker_lib::{
    Coordinates, FormField, LocationError, Tracker, TrackerConfig, WorkoutId, WorkoutType,
};
use yew::prelude::*;

mod components;
mod geolocation;
mod ui;

enum Msg {
    PositionResolved(Result<Coordinates, LocationError>),
    MapClicked(Coordinates),
    FieldChanged(FormField, String),
    TypeChanged(WorkoutType),
    Submit,
    Cancel,
    EntryClicked(Option<WorkoutId>),
}

struct App {
    tracker: Tracker,
    map: LeafletMap,
    form: FormState,
    entries: WorkoutEntries,
}

fn load_config() -> TrackerConfig {
    match TrackerConfig::from_json(include_str!("../tracker_config.json")) {
        Ok(config) => config,
        Err(err) => {
            error!(format!("{}, using defaults", err));
            TrackerConfig::default()
        }
    }
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        let config = load_config();

        let map = LeafletMap::new(&config, link.callback(Msg::MapClicked));
        let mut tracker = Tracker::new(config);

        let cb = link.callback(Msg::PositionResolved);
        tracker.request_location(&BrowserGeolocation, move |result| cb.emit(result));

        Self {
            tracker,
            map,
            form: FormState::default(),
            entries: WorkoutEntries::default(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::PositionResolved(Ok(position)) => {
                self.tracker.on_position_found(position, &mut self.map);
                false
            }
            Msg::PositionResolved(Err(err)) => {
                error!(format!("Geolocation failed: {}", err));
                self.tracker.on_position_error(err, &mut BrowserNotifier);
                true
            }
            Msg::MapClicked(location) => {
                self.tracker.on_map_click(location, &mut self.form);
                true
            }
            Msg::FieldChanged(field, value) => {
                self.form.fields.set(field, value);
                true
            }
            Msg::TypeChanged(workout_type) => {
                self.form.fields.set(FormField::Type, workout_type.as_str().to_owned());
                self.tracker.on_type_change(workout_type, &mut self.form);
                true
            }
            Msg::Submit => {
                let fields = self.form.fields.clone();
                let mut ui = SessionUi {
                    map: &mut self.map,
                    form: &mut self.form,
                    entries: &mut self.entries,
                    notifier: BrowserNotifier,
                };
                match self.tracker.on_form_submit(&fields, &mut ui) {
                    Ok(id) => info!(format!("Workout {} added", id)),
                    Err(err) => info!(format!("Workout not added: {}", err)),
                }
                true
            }
            Msg::Cancel => {
                self.tracker.on_form_cancel(&mut self.form);
                true
            }
            Msg::EntryClicked(id) => {
                self.tracker.on_entry_click(id, &mut self.map);
                false
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        html! {
            <>
                <div class="sidebar">
                    <WorkoutForm
                        visible={self.form.visible}
                        fields={self.form.fields.clone()}
                        extra_field={self.form.extra_field}
                        focus={self.form.focus}
                        on_input={link.callback(|(field, value): (FormField, String)| {
                            Msg::FieldChanged(field, value)
                        })}
                        on_type_change={link.callback(Msg::TypeChanged)}
                        on_submit={link.callback(|()| Msg::Submit)}
                        on_cancel={link.callback(|()| Msg::Cancel)}
                    />
                    <WorkoutList
                        entries={self.entries.entries.clone()}
                        on_click={link.callback(Msg::EntryClicked)}
                    />
                </div>
                <div id="map">
                    {self.map.render()}
                </div>
            </>
        }
    }
}

/// Routes the tracker's `tracing` events to the browser console.
fn init_logging() {
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_ansi(false)
        .without_time()
        .with_writer(MakeWebConsoleWriter::new());

    tracing_subscriber::registry()
        .with(EnvFilter::new("info,workout_tracker_lib=debug"))
        .with(fmt_layer)
        .init();
}

fn main() {
    init_logging();
    yew::Renderer::<App>::new().render();
}
