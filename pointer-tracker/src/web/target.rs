use js_sys::Function;
use tracing::warn;
use wasm_bindgen::{prelude::Closure, JsCast, JsValue};
use web_sys::{AddEventListenerOptions, Element, Event, EventTarget, MouseEvent, Window};

use crate::{
    listener::{ForwardFn, ListenerOptions, ListenerTarget},
    view::{PointerPosition, UiEvent},
};

/// Any JS value that listeners may be bound to. Only values which are actually an [`EventTarget`]
/// accept listeners, everything else is silently skipped.
///
/// Equality is JS identity, so two handles to the same element are the same target.
#[derive(Debug, Clone, PartialEq)]
pub struct WebTarget(JsValue);

impl WebTarget {
    fn event_target(&self) -> Option<&EventTarget> {
        self.0.dyn_ref::<EventTarget>()
    }
}

impl From<JsValue> for WebTarget {
    fn from(value: JsValue) -> Self {
        Self(value)
    }
}

impl From<EventTarget> for WebTarget {
    fn from(target: EventTarget) -> Self {
        Self(target.into())
    }
}

impl From<Element> for WebTarget {
    fn from(element: Element) -> Self {
        Self(element.into())
    }
}

impl From<Window> for WebTarget {
    fn from(window: Window) -> Self {
        Self(window.into())
    }
}

impl ListenerTarget for WebTarget {
    type Event = Event;
    type Listener = Closure<dyn Fn(Event)>;

    fn add_listener(
        &self,
        event_name: &str,
        options: ListenerOptions,
        callback: ForwardFn<Event>,
    ) -> Option<Self::Listener> {
        let target = self.event_target()?;

        let closure = Closure::<dyn Fn(Event)>::new(move |event: Event| callback(&event));

        let mut native_options = AddEventListenerOptions::new();
        native_options
            .capture(options.capture)
            .passive(options.passive);

        target
            .add_event_listener_with_callback_and_add_event_listener_options(
                event_name,
                closure.as_ref().unchecked_ref::<Function>(),
                &native_options,
            )
            .map_err(|error| warn!(event_name, ?error, "failed to add listener"))
            .ok()?;

        Some(closure)
    }

    fn remove_listener(&self, event_name: &str, options: ListenerOptions, listener: Self::Listener) {
        let Some(target) = self.event_target() else {
            return;
        };

        if let Err(error) = target.remove_event_listener_with_callback_and_bool(
            event_name,
            listener.as_ref().unchecked_ref::<Function>(),
            options.capture,
        ) {
            warn!(event_name, ?error, "failed to remove listener");
        }

        // Closure is freed here, now that nothing on the JS side refers to it
    }

    fn global() -> Option<Self> {
        web_sys::window().map(Self::from)
    }
}

impl UiEvent for Event {
    fn client_position(&self) -> Option<PointerPosition> {
        self.dyn_ref::<MouseEvent>().map(|event| PointerPosition {
            x: event.client_x(),
            y: event.client_y(),
        })
    }

    fn current_target_tag(&self) -> Option<String> {
        self.current_target()?
            .dyn_into::<Element>()
            .ok()
            .map(|element| element.tag_name())
    }
}
