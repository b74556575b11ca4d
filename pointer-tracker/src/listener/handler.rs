use std::{cell::RefCell, rc::Rc};

/// Shared handler that may be swapped out at any time.
pub type HandlerFn<E> = Rc<dyn Fn(&E)>;

/// Mutable slot containing the most recent handler for a binding. The native subscription only
/// ever holds a forwarder into this slot, so replacing the handler never touches the subscription.
pub struct HandlerSlot<E>(Rc<RefCell<HandlerFn<E>>>);

impl<E> HandlerSlot<E>
where
    E: 'static,
{
    /// Create a slot containing a handler that ignores every event.
    pub fn new() -> Self {
        Self(Rc::new(RefCell::new(Rc::new(|_: &E| {}))))
    }

    /// Swap in a new handler. Any forwarder created from this slot will call it from now on.
    pub fn replace<F>(&self, handler: F)
    where
        F: 'static + Fn(&E),
    {
        *self.0.borrow_mut() = Rc::new(handler);
    }

    /// Create a callback which looks up the current handler and invokes it.
    pub fn forwarder(&self) -> impl Fn(&E) + 'static {
        let slot = Rc::clone(&self.0);

        move |event| {
            // Release the borrow before calling, the handler may replace itself
            let handler = Rc::clone(&slot.borrow());
            handler(event);
        }
    }
}

impl<E> Default for HandlerSlot<E>
where
    E: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}
