use browser::{AlertNotifier, BrowserGeolocation, LocalStore};
use components::{
    map_component::LeafletMap,
    workout_form::WorkoutFormView,
    workout_list::WorkoutItem,
};
use gloo_console::{error, info};
use gloo_timers::callback::Timeout;
use gloo_utils::window;
use web_sys::{Element, HtmlElement, HtmlInputElement};
use workout_tracker_lib::{
    config::TrackerConfig, coords::Coords, form::FormField, location::Geolocation, TrackerController,
    WorkoutId, WorkoutType,
};
use yew::prelude::*;

mod browser;
mod components;
mod logging;

type Controller = TrackerController<LocalStore, LeafletMap, AlertNotifier>;

enum MainMsg {
    PositionFound(Coords),
    PositionUnavailable,
    MapClicked(Coords),
    TypeChanged(WorkoutType),
    FieldChanged(FormField, String),
    Submit,
    ShowForm,
    SelectWorkout(WorkoutId),
    DeleteAll,
}

struct Model {
    controller: Controller,
    map_ref: NodeRef,
    distance_ref: NodeRef,
    form_suppressed: bool,
    reshow_timeout: Option<Timeout>,
}

impl Component for Model {
    type Message = MainMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let controller = Controller::new(TrackerConfig::default(), LocalStore, AlertNotifier);

        let found = ctx.link().callback(MainMsg::PositionFound);
        let failed = ctx.link().callback(|()| MainMsg::PositionUnavailable);
        BrowserGeolocation.request_current_position(
            Box::new(move |position| found.emit(position)),
            Box::new(move || failed.emit(())),
        );

        Self {
            controller,
            map_ref: NodeRef::default(),
            distance_ref: NodeRef::default(),
            form_suppressed: false,
            reshow_timeout: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            MainMsg::PositionFound(position) => {
                let Some(container) = self.map_ref.cast::<HtmlElement>() else {
                    error!("Map container is missing");
                    self.controller.on_position_unavailable();
                    return true;
                };
                let map = LeafletMap::new(&container, ctx.link().callback(MainMsg::MapClicked));
                self.controller.on_position_found(position, map);
            }
            MainMsg::PositionUnavailable => {
                self.controller.on_position_unavailable();
            }
            MainMsg::MapClicked(position) => {
                self.controller.on_map_click(position);
            }
            MainMsg::TypeChanged(workout_type) => {
                self.controller.set_workout_type(workout_type);
            }
            MainMsg::FieldChanged(field, value) => {
                self.controller.set_field(field, value);
            }
            MainMsg::Submit => match self.controller.submit() {
                Ok(id) => {
                    info!(format!("Added workout {}", id));
                    self.form_suppressed = true;
                    let link = ctx.link().clone();
                    let delay = self.controller.config().form_reshow_delay_ms;
                    self.reshow_timeout = Some(Timeout::new(delay, move || link.send_message(MainMsg::ShowForm)));
                }
                Err(e) => {
                    info!(format!("Workout not added: {}", e));
                }
            },
            MainMsg::ShowForm => {
                self.form_suppressed = false;
                self.reshow_timeout = None;
            }
            MainMsg::SelectWorkout(id) => {
                self.controller.select_workout(&id);
                return false;
            }
            MainMsg::DeleteAll => {
                if let Err(e) = self.controller.reset() {
                    error!(format!("Could not delete workouts: {}", e));
                }
                if let Err(e) = window().location().reload() {
                    error!(format!("Could not reload: {:?}", e));
                }
                return false;
            }
        }
        true
    }

    fn rendered(&mut self, _ctx: &Context<Self>, _first_render: bool) {
        if self.controller.take_focus_request() {
            if let Some(input) = self.distance_ref.cast::<HtmlInputElement>() {
                if let Err(e) = input.focus() {
                    error!(format!("Could not focus distance input: {:?}", e));
                }
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        // One listener for the whole list, resolved to the nearest entry
        let on_list_click = link.batch_callback(|e: MouseEvent| {
            let target: Element = e.target_dyn_into()?;
            let entry = target.closest(".workout").ok().flatten()?;
            let id = entry.get_attribute("data-id")?;
            Some(MainMsg::SelectWorkout(WorkoutId::from(id.as_str())))
        });

        let on_type = link.callback(MainMsg::TypeChanged);
        let on_field = link.callback(|(field, value): (FormField, String)| MainMsg::FieldChanged(field, value));
        let on_submit = link.callback(|()| MainMsg::Submit);
        let on_delete = link.callback(|_| MainMsg::DeleteAll);

        let show_delete = self.controller.reset_control_visible();

        html! {
            <>
                <div class="sidebar">
                    <ul class="workouts" onclick={on_list_click}>
                        <WorkoutFormView
                            form={self.controller.form().clone()}
                            visible={self.controller.form_visible()}
                            suppressed={self.form_suppressed}
                            distance_ref={self.distance_ref.clone()}
                            {on_type}
                            {on_field}
                            {on_submit}
                        />
                        // Newest entries sit right below the form
                        { for self.controller.list_entries().iter().rev().map(|entry| html! {
                            <WorkoutItem entry={entry.clone()} />
                        }) }
                    </ul>
                    <button class={classes!("delete__workouts", (!show_delete).then_some("hidden"))} onclick={on_delete}>
                        {"Delete all workouts"}
                    </button>
                </div>
                <div id="map" ref={self.map_ref.clone()}></div>
            </>
        }
    }
}

fn main() {
    logging::init_logging();
    yew::Renderer::<Model>::new().render();
}
