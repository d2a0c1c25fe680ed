/// Blocking message to the user.
pub trait Notifier {
    fn alert(&self, message: &str);
}
