use web_sys::{HtmlInputElement, HtmlSelectElement};
use workout_tracker_lib::{
    form::{FormField, WorkoutForm},
    workout::WorkoutType,
};
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutFormProps {
    pub form: WorkoutForm,
    pub visible: bool,
    /// Skips the slide-in right after a submit.
    pub suppressed: bool,
    pub distance_ref: NodeRef,
    pub on_type: Callback<WorkoutType>,
    pub on_field: Callback<(FormField, String)>,
    pub on_submit: Callback<()>,
}

#[function_component]
pub fn WorkoutFormView(props: &WorkoutFormProps) -> Html {
    let onsubmit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            on_submit.emit(());
        })
    };

    let onchange = {
        let on_type = props.on_type.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            if let Ok(workout_type) = select.value().parse() {
                on_type.emit(workout_type);
            }
        })
    };

    let form = &props.form;

    html! {
        <form
            class={classes!("form", (!props.visible).then_some("hidden"))}
            style={props.suppressed.then_some("display: none")}
            {onsubmit}
        >
            <div class="form__row">
                <label class="form__label">{"Type"}</label>
                <select class="form__input form__input--type" {onchange}>
                    <option value="running" selected={form.workout_type == WorkoutType::Running}>{"Running"}</option>
                    <option value="cycling" selected={form.workout_type == WorkoutType::Cycling}>{"Cycling"}</option>
                </select>
            </div>
            {number_row(form, FormField::Distance, "Distance", "km", Some(props.distance_ref.clone()), &props.on_field)}
            {number_row(form, FormField::Duration, "Duration", "min", None, &props.on_field)}
            {number_row(form, FormField::Cadence, "Cadence", "step/min", None, &props.on_field)}
            {number_row(form, FormField::ElevationGain, "Elev Gain", "meters", None, &props.on_field)}
            <button class="form__btn">{"OK"}</button>
        </form>
    }
}

fn number_row(
    form: &WorkoutForm,
    field: FormField,
    label: &'static str,
    placeholder: &'static str,
    node_ref: Option<NodeRef>,
    on_field: &Callback<(FormField, String)>,
) -> Html {
    let oninput = {
        let on_field = on_field.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            on_field.emit((field, input.value()));
        })
    };

    let input_class = match field {
        FormField::Distance => "form__input--distance",
        FormField::Duration => "form__input--duration",
        FormField::Cadence => "form__input--cadence",
        FormField::ElevationGain => "form__input--elevation",
    };

    html! {
        <div class={classes!("form__row", (!form.is_visible(field)).then_some("form__row--hidden"))}>
            <label class="form__label">{label}</label>
            <input
                class={classes!("form__input", input_class)}
                placeholder={placeholder}
                value={form.field(field).to_string()}
                ref={node_ref.unwrap_or_default()}
                {oninput}
            />
        </div>
    }
}
