use crate::coords::Coords;

/// One-shot position lookup. Exactly one of the callbacks is invoked.
pub trait Geolocation {
    fn request_current_position(&self, on_success: Box<dyn FnOnce(Coords)>, on_failure: Box<dyn FnOnce()>);
}
