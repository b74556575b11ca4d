//! In-memory [`ListenerTarget`] used to drive the binder and view without a browser.

use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use crate::{
    listener::{ForwardFn, ListenerOptions, ListenerTarget},
    view::{PointerPosition, UiEvent},
};

/// Event dispatched by a [`FakeTarget`]. `current_target` is filled in by the target that
/// dispatches it.
#[derive(Debug, Clone, Default)]
pub struct FakeEvent {
    pub position: Option<PointerPosition>,
    pub current_target: Option<String>,
}

impl FakeEvent {
    pub fn pointer(x: i32, y: i32) -> Self {
        Self {
            position: Some(PointerPosition { x, y }),
            current_target: None,
        }
    }

    pub fn click() -> Self {
        Self::default()
    }
}

impl UiEvent for FakeEvent {
    fn client_position(&self) -> Option<PointerPosition> {
        self.position
    }

    fn current_target_tag(&self) -> Option<String> {
        self.current_target.clone()
    }
}

struct Registered {
    id: usize,
    event_name: String,
    options: ListenerOptions,
    callback: Rc<dyn Fn(&FakeEvent)>,
}

struct Inner {
    tag: String,
    supported: bool,
    next_id: Cell<usize>,
    listeners: RefCell<Vec<Registered>>,
    added: Cell<usize>,
    removed: Cell<usize>,
}

/// Shared handle to a fake event target. Clones refer to the same target.
#[derive(Clone)]
pub struct FakeTarget(Rc<Inner>);

thread_local! {
    static WINDOW: FakeTarget = FakeTarget::element("WINDOW");
}

impl FakeTarget {
    /// Target that supports subscription, reporting `tag` as its tag name.
    pub fn element(tag: &str) -> Self {
        Self::new(tag, true)
    }

    /// Target that refuses subscription.
    pub fn unsupported() -> Self {
        Self::new("UNSUPPORTED", false)
    }

    /// The target returned from [`ListenerTarget::global()`] on this thread.
    pub fn window() -> Self {
        WINDOW.with(Clone::clone)
    }

    fn new(tag: &str, supported: bool) -> Self {
        Self(Rc::new(Inner {
            tag: tag.to_string(),
            supported,
            next_id: Cell::new(0),
            listeners: RefCell::new(Vec::new()),
            added: Cell::new(0),
            removed: Cell::new(0),
        }))
    }

    /// Deliver `event` to every listener for `event_name`, with this target as the current target.
    pub fn dispatch(&self, event_name: &str, mut event: FakeEvent) {
        event.current_target = Some(self.0.tag.clone());

        // Snapshot, as listeners may rebind during dispatch
        let callbacks = self
            .0
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event_name == event_name)
            .map(|listener| Rc::clone(&listener.callback))
            .collect::<Vec<_>>();

        callbacks.iter().for_each(|callback| callback(&event));
    }

    /// Number of listeners currently registered for `event_name`.
    pub fn listener_count(&self, event_name: &str) -> usize {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event_name == event_name)
            .count()
    }

    /// Options that the listeners for `event_name` were registered with.
    pub fn options_for(&self, event_name: &str) -> Vec<ListenerOptions> {
        self.0
            .listeners
            .borrow()
            .iter()
            .filter(|listener| listener.event_name == event_name)
            .map(|listener| listener.options)
            .collect()
    }

    /// Total `(added, removed)` subscriptions over the lifetime of the target.
    pub fn churn(&self) -> (usize, usize) {
        (self.0.added.get(), self.0.removed.get())
    }
}

impl PartialEq for FakeTarget {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl ListenerTarget for FakeTarget {
    type Event = FakeEvent;
    type Listener = usize;

    fn add_listener(
        &self,
        event_name: &str,
        options: ListenerOptions,
        callback: ForwardFn<FakeEvent>,
    ) -> Option<usize> {
        if !self.0.supported {
            return None;
        }

        let id = self.0.next_id.get() + 1;
        self.0.next_id.set(id);

        self.0.listeners.borrow_mut().push(Registered {
            id,
            event_name: event_name.to_string(),
            options,
            callback: Rc::from(callback),
        });
        self.0.added.set(self.0.added.get() + 1);

        Some(id)
    }

    fn remove_listener(&self, event_name: &str, options: ListenerOptions, listener: usize) {
        let mut listeners = self.0.listeners.borrow_mut();
        let before = listeners.len();

        listeners.retain(|registered| {
            !(registered.id == listener
                && registered.event_name == event_name
                && registered.options.capture == options.capture)
        });

        if listeners.len() != before {
            self.0.removed.set(self.0.removed.get() + 1);
        }
    }

    fn global() -> Option<Self> {
        Some(Self::window())
    }
}
