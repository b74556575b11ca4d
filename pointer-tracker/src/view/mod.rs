mod event;
mod state;

pub use self::event::UiEvent;
pub use self::state::{PointerPosition, ViewState};

use crate::listener::{EventListener, ListenerOptions, ListenerTarget};
use serde::Deserialize;
use std::{cell::RefCell, rc::Rc};

/// Called with the new state every time the state changes.
pub type ChangeFn = dyn Fn(&ViewState);

/// The event names that the view listens for.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ViewEvents {
    /// Event on the global target that reports the pointer position.
    pub pointer: String,

    /// Event on each monitored element that records it as clicked.
    pub click: String,

    pub pointer_options: ListenerOptions,
}

impl Default for ViewEvents {
    fn default() -> Self {
        Self {
            pointer: "mousemove".to_string(),
            click: "click".to_string(),
            pointer_options: ListenerOptions::default(),
        }
    }
}

/// Tracks the pointer position across the whole viewport, and which of two monitored elements was
/// clicked last.
///
/// State lives behind a shared reference so that the handlers passed to each [`EventListener`] can
/// mutate it. Every [`View::bind()`] hands fresh handlers to the binders, which swap them in
/// without touching the native subscriptions unless a target or event name changed.
pub struct View<T>
where
    T: ListenerTarget,
    T::Event: UiEvent,
{
    state: Rc<RefCell<ViewState>>,
    on_change: Rc<ChangeFn>,
    events: ViewEvents,

    pointer: EventListener<T>,
    button_click: EventListener<T>,
    heading_click: EventListener<T>,
}

impl<T> View<T>
where
    T: ListenerTarget,
    T::Event: UiEvent,
{
    pub fn new<F>(events: ViewEvents, on_change: F) -> Self
    where
        F: 'static + Fn(&ViewState),
    {
        Self {
            state: Rc::new(RefCell::new(ViewState::default())),
            on_change: Rc::new(on_change),
            events,

            pointer: EventListener::new(),
            button_click: EventListener::new(),
            heading_click: EventListener::new(),
        }
    }

    /// Bind all listeners. The pointer listener goes on the global target, and the click listeners
    /// on `button` and `heading`. Either element may be absent (eg not mounted yet), in which case
    /// its click listener is skipped until a later bind provides it.
    pub fn bind(&mut self, button: Option<T>, heading: Option<T>) {
        let pointer = self.pointer_handler();
        self.pointer.bind_with(
            &self.events.pointer,
            pointer,
            T::global(),
            self.events.pointer_options,
        );

        let click = self.click_handler();
        self.button_click.bind_to(&self.events.click, click, button);

        let click = self.click_handler();
        self.heading_click.bind_to(&self.events.click, click, heading);
    }

    /// Remove every listener. Events will no longer alter the state until the view is bound again.
    pub fn unbind(&mut self) {
        self.pointer.unbind();
        self.button_click.unbind();
        self.heading_click.unbind();
    }

    /// Replace the event names to listen for. Takes effect on the next [`View::bind()`].
    pub fn set_events(&mut self, events: ViewEvents) {
        self.events = events;
    }

    pub fn events(&self) -> &ViewEvents {
        &self.events
    }

    /// Snapshot of the current state.
    pub fn state(&self) -> ViewState {
        self.state.borrow().clone()
    }

    fn pointer_handler(&self) -> impl Fn(&T::Event) + 'static {
        let state = Rc::clone(&self.state);
        let on_change = Rc::clone(&self.on_change);

        move |event| {
            let Some(position) = event.client_position() else {
                return;
            };

            apply(&state, on_change.as_ref(), |state| state.pointer = position);
        }
    }

    fn click_handler(&self) -> impl Fn(&T::Event) + 'static {
        let state = Rc::clone(&self.state);
        let on_change = Rc::clone(&self.on_change);

        move |event| {
            let Some(tag) = event.current_target_tag() else {
                return;
            };

            apply(&state, on_change.as_ref(), |state| state.last_clicked = Some(tag));
        }
    }
}

/// Mutate the state, then notify the change handler with the result.
fn apply<F>(state: &RefCell<ViewState>, on_change: &ChangeFn, change: F)
where
    F: FnOnce(&mut ViewState),
{
    change(&mut state.borrow_mut());
    on_change(&state.borrow());
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::testing::{FakeEvent, FakeTarget};
    use pretty_assertions::assert_eq;

    struct Fixture {
        view: View<FakeTarget>,
        renders: Rc<RefCell<Vec<(String, String)>>>,
        button: FakeTarget,
        heading: FakeTarget,
    }

    fn fixture() -> Fixture {
        let renders = Rc::new(RefCell::new(Vec::new()));

        let mut view = View::new(ViewEvents::default(), {
            let renders = Rc::clone(&renders);
            move |state: &ViewState| {
                renders
                    .borrow_mut()
                    .push((state.coordinates_text(), state.last_clicked_text()))
            }
        });

        let button = FakeTarget::element("BUTTON");
        let heading = FakeTarget::element("H1");
        view.bind(Some(button.clone()), Some(heading.clone()));

        Fixture {
            view,
            renders,
            button,
            heading,
        }
    }

    #[test]
    fn full_scenario() {
        let mut fixture = fixture();
        let window = FakeTarget::window();

        window.dispatch("mousemove", FakeEvent::pointer(50, 120));
        assert_eq!(
            fixture.renders.borrow().last().map(|(coords, _)| coords.clone()),
            Some("The mouse coordinates (50, 120)".to_string())
        );

        fixture.button.dispatch("click", FakeEvent::click());
        assert_eq!(fixture.view.state().last_clicked.as_deref(), Some("BUTTON"));

        fixture.heading.dispatch("click", FakeEvent::click());
        assert_eq!(fixture.view.state().last_clicked.as_deref(), Some("H1"));

        fixture.view.unbind();
        let before = fixture.view.state();
        let render_count = fixture.renders.borrow().len();

        window.dispatch("mousemove", FakeEvent::pointer(1, 1));
        fixture.button.dispatch("click", FakeEvent::click());

        assert_eq!(fixture.view.state(), before);
        assert_eq!(fixture.renders.borrow().len(), render_count);
    }

    #[test]
    fn coordinates_follow_latest_event() {
        let fixture = fixture();
        let window = FakeTarget::window();

        for (x, y) in [(3, 4), (100, 0), (-2, 9), (640, 480)] {
            window.dispatch("mousemove", FakeEvent::pointer(x, y));
        }

        assert_eq!(fixture.view.state().pointer, PointerPosition { x: 640, y: 480 });
    }

    #[test]
    fn unmonitored_click_is_ignored() {
        let fixture = fixture();
        let paragraph = FakeTarget::element("P");

        fixture.button.dispatch("click", FakeEvent::click());
        paragraph.dispatch("click", FakeEvent::click());

        assert_eq!(fixture.view.state().last_clicked.as_deref(), Some("BUTTON"));
    }

    #[test]
    fn events_without_data_are_ignored() {
        let fixture = fixture();
        let window = FakeTarget::window();

        window.dispatch("mousemove", FakeEvent::pointer(8, 9));
        window.dispatch("mousemove", FakeEvent::click());

        assert_eq!(fixture.view.state().pointer, PointerPosition { x: 8, y: 9 });
        assert_eq!(fixture.renders.borrow().len(), 1);
    }

    #[test]
    fn rebinding_keeps_one_listener_each() {
        let mut fixture = fixture();
        let window = FakeTarget::window();

        fixture.view.bind(Some(fixture.button.clone()), Some(fixture.heading.clone()));
        fixture.view.bind(Some(fixture.button.clone()), Some(fixture.heading.clone()));

        assert_eq!(window.churn(), (1, 0));
        assert_eq!(fixture.button.churn(), (1, 0));
        assert_eq!(fixture.heading.churn(), (1, 0));

        fixture.button.dispatch("click", FakeEvent::click());
        assert_eq!(fixture.renders.borrow().len(), 1);
    }

    #[test]
    fn changing_events_rebinds() {
        let mut fixture = fixture();
        let window = FakeTarget::window();

        fixture.view.set_events(ViewEvents {
            pointer: "pointermove".to_string(),
            ..ViewEvents::default()
        });
        fixture.view.bind(Some(fixture.button.clone()), Some(fixture.heading.clone()));

        assert_eq!(window.listener_count("mousemove"), 0);
        assert_eq!(window.listener_count("pointermove"), 1);

        window.dispatch("mousemove", FakeEvent::pointer(1, 1));
        window.dispatch("pointermove", FakeEvent::pointer(2, 2));
        assert_eq!(fixture.view.state().pointer, PointerPosition { x: 2, y: 2 });
    }

    #[test]
    fn absent_elements_are_bound_later() {
        let mut view = View::<FakeTarget>::new(ViewEvents::default(), |_| {});
        let button = FakeTarget::element("BUTTON");

        view.bind(None, None);
        button.dispatch("click", FakeEvent::click());
        assert_eq!(view.state().last_clicked, None);

        view.bind(Some(button.clone()), None);
        button.dispatch("click", FakeEvent::click());
        assert_eq!(view.state().last_clicked.as_deref(), Some("BUTTON"));
    }

    #[test]
    fn unsupported_element_leaves_state_untouched() {
        let mut fixture = fixture();
        let before = fixture.view.state();

        fixture.view.bind(Some(FakeTarget::unsupported()), Some(fixture.heading.clone()));

        assert_eq!(fixture.view.state(), before);
        assert_eq!(fixture.button.listener_count("click"), 0);
    }

    #[test]
    fn drop_unbinds_everything() {
        let fixture = fixture();
        let window = FakeTarget::window();
        let Fixture {
            view,
            button,
            heading,
            ..
        } = fixture;

        drop(view);

        assert_eq!(window.listener_count("mousemove"), 0);
        assert_eq!(button.listener_count("click"), 0);
        assert_eq!(heading.listener_count("click"), 0);
    }
}
