use workout_tracker_lib::render::WorkoutListEntry;
use yew::prelude::*;

#[derive(PartialEq, Properties, Clone)]
pub struct WorkoutItemProps {
    pub entry: WorkoutListEntry,
}

/// One `<li>` per workout. Clicks are handled by the list, which reads `data-id`.
#[function_component]
pub fn WorkoutItem(props: &WorkoutItemProps) -> Html {
    let entry = &props.entry;

    html! {
        <li class={entry.class_name()} data-id={entry.id.to_string()}>
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
