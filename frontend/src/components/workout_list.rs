use wasm_bindgen::JsCast;
use web_sys::Element;
use workout_tracker_lib::{view::ListEntry, WorkoutId};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutListProps {
    pub entries: Vec<ListEntry>,
    pub on_click: Callback<Option<WorkoutId>>,
}

/// Resolves a click anywhere inside an entry to that entry's workout id.
fn entry_id(e: &MouseEvent) -> Option<WorkoutId> {
    let target: Element = e.target()?.dyn_into().ok()?;
    let entry = target.closest(".workout").ok()??;
    entry.get_attribute("data-id")?.parse().ok()
}

#[function_component]
pub fn WorkoutList(props: &WorkoutListProps) -> Html {
    let on_click = props.on_click.clone();
    let onclick = Callback::from(move |e: MouseEvent| on_click.emit(entry_id(&e)));

    html! {
        <ul class="workouts" {onclick}>
            { for props.entries.iter().map(entry) }
        </ul>
    }
}

fn entry(entry: &ListEntry) -> Html {
    html! {
        <li
            key={entry.id.to_string()}
            class={classes!("workout", format!("workout--{}", entry.workout_type))}
            data-id={entry.id.to_string()}
        >
            <h2 class="workout__title">{entry.title.clone()}</h2>
            { for entry.details.iter().map(|detail| html! {
                <div class="workout__details">
                    <span class="workout__icon">{detail.icon}</span>
                    <span class="workout__value">{detail.value.clone()}</span>
                    <span class="workout__unit">{detail.unit}</span>
                </div>
            }) }
        </li>
    }
}
