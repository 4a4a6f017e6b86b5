use web_sys::HtmlInputElement;
use workout_tracker_lib::{FormField, FormFields, WorkoutType};
use yew::prelude::*;

use crate::ui::FocusRequest;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub visible: bool,
    pub fields: FormFields,
    pub extra_field: WorkoutType,
    pub focus: Option<FocusRequest>,
    pub on_input: Callback<(FormField, String)>,
    pub on_type_change: Callback<WorkoutType>,
    pub on_submit: Callback<()>,
    pub on_cancel: Callback<()>,
}

#[function_component]
pub fn WorkoutForm(props: &WorkoutFormProps) -> Html {
    let distance_ref = use_node_ref();
    let duration_ref = use_node_ref();
    let cadence_ref = use_node_ref();
    let elevation_ref = use_node_ref();

    {
        let refs = [
            (FormField::Distance, distance_ref.clone()),
            (FormField::Duration, duration_ref.clone()),
            (FormField::Cadence, cadence_ref.clone()),
            (FormField::Elevation, elevation_ref.clone()),
        ];
        use_effect_with(props.focus, move |focus| {
            if let Some(request) = focus {
                let target = refs.iter().find(|(field, _)| *field == request.field);
                if let Some(input) = target.and_then(|(_, node)| node.cast::<HtmlInputElement>()) {
                    let _ = input.focus();
                }
            }
        });
    }

    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onkeydown = {
        let on_cancel = props.on_cancel.clone();
        Callback::from(move |e: KeyboardEvent| {
            if e.key() == "Escape" {
                on_cancel.emit(());
            }
        })
    };

    let onchange = {
        let on_type_change = props.on_type_change.clone();
        Callback::from(move |e: Event| {
            let select: web_sys::HtmlSelectElement = e.target_unchecked_into();
            if let Ok(workout_type) = select.value().parse::<WorkoutType>() {
                on_type_change.emit(workout_type);
            }
        })
    };

    let input = |field: FormField,
                 label: &'static str,
                 placeholder: &'static str,
                 node_ref: &NodeRef,
                 hidden: bool| {
        let on_input = props.on_input.clone();
        let oninput = Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_input.emit((field, input.value()));
        });

        html! {
            <div class={classes!("form__row", hidden.then_some("form__row--hidden"))}>
                <label class="form__label">{label}</label>
                <input
                    ref={node_ref.clone()}
                    class={classes!("form__input", format!("form__input--{}", field.name()))}
                    placeholder={placeholder}
                    value={props.fields.get(field).to_owned()}
                    {oninput}
                />
            </div>
        }
    };

    let running = props.extra_field == WorkoutType::Running;
    let selected_type = props.fields.workout_type.clone();

    html! {
        <form class={classes!("form", (!props.visible).then_some("hidden"))} {onsubmit} {onkeydown}>
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" {onchange}>
                    <option value="running" selected={selected_type == "running"}>
                        {"Running"}
                    </option>
                    <option value="cycling" selected={selected_type == "cycling"}>
                        {"Cycling"}
                    </option>
                </select>
            </div>
            {input(FormField::Distance, "Distance", "km", &distance_ref, false)}
            {input(FormField::Duration, "Duration", "min", &duration_ref, false)}
            {input(FormField::Cadence, "Cadence", "step/min", &cadence_ref, !running)}
            {input(FormField::Elevation, "Elev Gain", "meters", &elevation_ref, running)}
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}
