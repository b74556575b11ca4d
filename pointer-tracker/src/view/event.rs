use super::PointerPosition;

/// The parts of an incoming event that the view cares about. Events that can't provide the
/// relevant value are ignored.
pub trait UiEvent {
    /// Pointer coordinates relative to the viewport.
    fn client_position(&self) -> Option<PointerPosition>;

    /// Tag name of the element the listener is registered on (not necessarily the element the
    /// event originated from).
    fn current_target_tag(&self) -> Option<String>;
}
