mod handler;
mod target;

pub use self::handler::{HandlerFn, HandlerSlot};
pub use self::target::{ForwardFn, ListenerOptions, ListenerTarget};

use tracing::debug;

/// The key of an active (or attempted) subscription, along with the native listener if the
/// target accepted it.
struct Binding<T>
where
    T: ListenerTarget,
{
    event_name: String,
    target: Option<T>,
    options: ListenerOptions,

    /// [`None`] when the target was absent or did not support subscription.
    listener: Option<T::Listener>,
}

impl<T> Binding<T>
where
    T: ListenerTarget,
{
    fn matches(&self, event_name: &str, target: Option<&T>, options: ListenerOptions) -> bool {
        self.event_name == event_name && self.target.as_ref() == target && self.options == options
    }
}

/// Binds a handler to an event on a [`ListenerTarget`] for as long as the binder lives.
///
/// The handler is stored separately to the native subscription. Binding again with a new handler
/// only swaps the handler, and the native listener is only re-created when the event name, target,
/// or options change. When that happens the previous native listener is always removed before the
/// new one is added, so there is never more than one native listener per binder.
///
/// Dropping the binder removes the native listener.
pub struct EventListener<T>
where
    T: ListenerTarget,
{
    /// Latest handler, looked up by the forwarding listener on every event.
    handler: HandlerSlot<T::Event>,

    /// Currently bound subscription, if any.
    binding: Option<Binding<T>>,
}

impl<T> EventListener<T>
where
    T: ListenerTarget,
{
    /// Create a binder which isn't subscribed to anything.
    pub fn new() -> Self {
        Self {
            handler: HandlerSlot::new(),
            binding: None,
        }
    }

    /// Bind `handler` to `event_name` on the global target.
    pub fn bind<F>(&mut self, event_name: &str, handler: F)
    where
        F: 'static + Fn(&T::Event),
    {
        self.bind_with(event_name, handler, T::global(), ListenerOptions::default());
    }

    /// Bind `handler` to `event_name` on `target`. An absent target results in no subscription.
    pub fn bind_to<F>(&mut self, event_name: &str, handler: F, target: Option<T>)
    where
        F: 'static + Fn(&T::Event),
    {
        self.bind_with(event_name, handler, target, ListenerOptions::default());
    }

    /// Bind `handler` to `event_name` on `target`, with the provided options.
    pub fn bind_with<F>(
        &mut self,
        event_name: &str,
        handler: F,
        target: Option<T>,
        options: ListenerOptions,
    ) where
        F: 'static + Fn(&T::Event),
    {
        self.handler.replace(handler);

        if self
            .binding
            .as_ref()
            .is_some_and(|binding| binding.matches(event_name, target.as_ref(), options))
        {
            return;
        }

        self.unbind();

        // Unsupported targets are skipped without any output
        let listener = target.as_ref().and_then(|target| {
            target.add_listener(
                event_name,
                options,
                Box::new(self.handler.forwarder()) as ForwardFn<T::Event>,
            )
        });

        if listener.is_some() {
            debug!(event_name, ?options, "listener added");
        }

        self.binding = Some(Binding {
            event_name: event_name.to_string(),
            target,
            options,
            listener,
        });
    }

    /// Remove the native listener (if any), and forget the current binding.
    pub fn unbind(&mut self) {
        let Some(binding) = self.binding.take() else {
            return;
        };

        if let (Some(target), Some(listener)) = (binding.target, binding.listener) {
            target.remove_listener(&binding.event_name, binding.options, listener);
            debug!(event_name = %binding.event_name, "listener removed");
        }
    }

    /// Whether a native listener is currently registered.
    pub fn is_active(&self) -> bool {
        self.binding
            .as_ref()
            .is_some_and(|binding| binding.listener.is_some())
    }
}

impl<T> Default for EventListener<T>
where
    T: ListenerTarget,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Drop for EventListener<T>
where
    T: ListenerTarget,
{
    fn drop(&mut self) {
        self.unbind();
    }
}
