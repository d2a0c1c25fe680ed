use chrono::Utc;
use tracing::{debug, error, info, warn};

use crate::{
    config::{TrackerConfig, INVALID_INPUT_NOTICE, POSITION_UNAVAILABLE_NOTICE},
    coords::Coords,
    error::{Result, TrackerError},
    form::{FormField, WorkoutForm},
    map::MapWidget,
    notice::Notifier,
    render::{PopupSpec, WorkoutListEntry},
    storage::{KeyValueStore, WorkoutStore},
    workout::{Workout, WorkoutId, WorkoutType},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackerState {
    AwaitingLocation,
    MapReady,
    FormOpen,
    /// Position lookup failed. There is no map for the rest of the session.
    Degraded,
}

/// Owns the workout collection and drives the map, the form, the list and
/// persistence in response to user events.
pub struct TrackerController<S: KeyValueStore, M: MapWidget, N: Notifier> {
    config: TrackerConfig,
    store: WorkoutStore<S>,
    notifier: N,
    map: Option<M>,
    state: TrackerState,
    workouts: Vec<Workout>,
    entries: Vec<WorkoutListEntry>,
    form: WorkoutForm,
    form_visible: bool,
    pending_location: Option<Coords>,
    focus_requested: bool,
    reset_control_visible: bool,
}

impl<S: KeyValueStore, M: MapWidget, N: Notifier> TrackerController<S, M, N> {
    /// Restores the persisted workouts and renders them as list entries. The
    /// map does not exist yet, so restored workouts get no marker.
    pub fn new(config: TrackerConfig, backend: S, notifier: N) -> Self {
        let store = WorkoutStore::new(backend, config.storage_key.clone());
        let workouts = store.load();
        info!("Restored {} workouts", workouts.len());

        let mut controller = Self {
            config,
            store,
            notifier,
            map: None,
            state: TrackerState::AwaitingLocation,
            workouts: Vec::new(),
            entries: Vec::new(),
            form: WorkoutForm::default(),
            form_visible: false,
            pending_location: None,
            focus_requested: false,
            reset_control_visible: false,
        };

        for workout in &workouts {
            controller.render_list_entry(workout);
        }
        controller.workouts = workouts;

        controller
    }

    pub fn on_position_found(&mut self, position: Coords, map: M) {
        info!("Loading map at {:?}", position);
        map.set_view(position, self.config.map_zoom_level);
        map.add_tile_layer(&self.config.tile_url, &self.config.tile_attribution);

        self.map = Some(map);
        self.state = TrackerState::MapReady;
    }

    pub fn on_position_unavailable(&mut self) {
        warn!("Position unavailable, the map will not load");
        self.notifier.alert(POSITION_UNAVAILABLE_NOTICE);
        self.state = TrackerState::Degraded;
    }

    /// Remembers where the user clicked and opens the form.
    pub fn on_map_click(&mut self, position: Coords) {
        if self.map.is_none() {
            debug!("Ignoring map click without a map");
            return;
        }

        self.pending_location = Some(position);
        self.form_visible = true;
        self.focus_requested = true;
        self.state = TrackerState::FormOpen;
    }

    pub fn set_workout_type(&mut self, workout_type: WorkoutType) {
        self.form.workout_type = workout_type;
    }

    pub fn set_field(&mut self, field: FormField, value: impl Into<String>) {
        self.form.set_field(field, value);
    }

    pub fn cancel_form(&mut self) {
        self.hide_form();
    }

    /// Validates the form and, if it holds, records a workout at the clicked
    /// location. Invalid input leaves everything as it was, form included.
    pub fn submit(&mut self) -> Result<WorkoutId> {
        let position = self.pending_location.ok_or(TrackerError::NoPendingLocation)?;

        let input = match self.form.validate() {
            Ok(input) => input,
            Err(e) => {
                warn!("Rejected workout: {e}");
                self.notifier.alert(INVALID_INPUT_NOTICE);
                return Err(e.into());
            }
        };

        let workout = Workout::create(input.kind, position, input.distance, input.duration, Utc::now());
        let id = workout.id.clone();
        info!("New workout {}: {}", id, workout.description);

        self.render_marker(&workout);
        self.render_list_entry(&workout);
        self.workouts.push(workout);
        self.hide_form();

        // The workout stays in the session even when it could not be saved
        if let Err(e) = self.store.save(&self.workouts) {
            error!("Failed to persist workouts: {e}");
        }

        Ok(id)
    }

    /// Recenters the map on the workout behind a clicked list entry.
    pub fn select_workout(&self, id: &WorkoutId) {
        let Some(map) = &self.map else {
            return;
        };

        let Some(workout) = self.workouts.iter().find(|w| &w.id == id) else {
            debug!("No workout with id {id}");
            return;
        };

        map.pan_to(workout.coords, self.config.map_zoom_level, self.config.pan_duration_secs);
    }

    /// Deletes every stored workout. The page is expected to reload afterwards.
    pub fn reset(&mut self) -> Result<()> {
        self.store.clear()?;
        info!("Cleared all stored workouts");
        Ok(())
    }

    pub fn state(&self) -> TrackerState {
        self.state
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    pub fn workouts(&self) -> &[Workout] {
        &self.workouts
    }

    /// Rendered entries in insertion order. Each entry goes directly below the
    /// form, so on screen they read most recent first.
    pub fn list_entries(&self) -> &[WorkoutListEntry] {
        &self.entries
    }

    pub fn form(&self) -> &WorkoutForm {
        &self.form
    }

    pub fn form_visible(&self) -> bool {
        self.form_visible
    }

    pub fn pending_location(&self) -> Option<Coords> {
        self.pending_location
    }

    pub fn has_map(&self) -> bool {
        self.map.is_some()
    }

    pub fn reset_control_visible(&self) -> bool {
        self.reset_control_visible
    }

    /// True once after each map click, for focusing the distance input.
    pub fn take_focus_request(&mut self) -> bool {
        std::mem::take(&mut self.focus_requested)
    }

    fn render_marker(&self, workout: &Workout) {
        let Some(map) = &self.map else {
            return;
        };
        map.add_marker(workout.coords, &PopupSpec::for_workout(workout, &self.config));
    }

    fn render_list_entry(&mut self, workout: &Workout) {
        self.entries.push(WorkoutListEntry::from(workout));
        self.reset_control_visible = true;
    }

    fn hide_form(&mut self) {
        self.form.clear();
        self.form_visible = false;
        self.pending_location = None;
        self.focus_requested = false;
        if self.map.is_some() {
            self.state = TrackerState::MapReady;
        }
    }
}
