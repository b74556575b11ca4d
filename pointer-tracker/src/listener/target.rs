use serde::Deserialize;

/// Callback handed to a [`ListenerTarget`] when subscribing. Forwards every native event into the
/// owning binder's [`super::HandlerSlot`].
pub type ForwardFn<E> = Box<dyn Fn(&E)>;

/// Options passed through to the native subscription. These form part of the subscription key, so
/// changing them results in a rebind.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(default)]
pub struct ListenerOptions {
    /// Listen during the capture phase rather than the bubble phase. Must match between adding and
    /// removing a listener.
    pub capture: bool,

    /// Promise the platform that the listener will never cancel the event.
    pub passive: bool,
}

/// Something that events can be subscribed to, such as the browser window or a DOM element.
///
/// Two targets are considered the same target if they compare equal, which should reflect
/// identity rather than structural equality.
pub trait ListenerTarget: Clone + PartialEq + 'static {
    /// Event type delivered to listeners.
    type Event: 'static;

    /// Native handle for an active subscription. Must be kept alive for as long as the
    /// subscription is active, and is given back in order to remove it.
    type Listener;

    /// Subscribe `callback` to `event_name` on this target. Returns [`None`] if the target does
    /// not support subscription, in which case nothing was registered.
    fn add_listener(
        &self,
        event_name: &str,
        options: ListenerOptions,
        callback: ForwardFn<Self::Event>,
    ) -> Option<Self::Listener>;

    /// Remove a subscription previously returned from [`Self::add_listener()`].
    fn remove_listener(&self, event_name: &str, options: ListenerOptions, listener: Self::Listener);

    /// The target used when none is provided. In the browser, this is `window`.
    fn global() -> Option<Self>;
}
