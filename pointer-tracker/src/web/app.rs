use std::{cell::RefCell, rc::Rc};

use tracing::{info, warn};
use web_sys::Document;

use super::{
    fragment::{Fragment, Location, Node, NodeRef},
    WebTarget,
};
use crate::{
    error::Result,
    view::{View, ViewEvents, ViewState},
};

/// The demo page: live pointer coordinates, a button and a clickable heading, and a line reporting
/// which of the two was clicked last.
pub struct App {
    fragment: Rc<RefCell<Fragment<ViewState>>>,
    view: View<WebTarget>,

    button: NodeRef,
    heading: NodeRef,
}

impl App {
    /// Build the page's nodes. Nothing is added to the DOM until [`App::mount()`].
    pub fn new(document: &Document, events: ViewEvents) -> Result<Self> {
        let button = NodeRef::default();
        let heading = NodeRef::default();

        let fragment = Fragment::build()
            .with_element("div", None)
            .with_element("h1", Some(0))
            .with_updatable(Some(1), ViewState::coordinates_text)
            .with_node(Node::element("button").with_ref(&button), Some(0))
            .with_text("Button", Some(2))
            .with_node(
                Node::element("h1")
                    .with_attribute("style", "cursor: pointer")
                    .with_ref(&heading),
                Some(0),
            )
            .with_text("Heading", Some(4))
            .with_element("h2", Some(0))
            .with_updatable(Some(6), ViewState::last_clicked_text)
            .build(document)?;

        let fragment = Rc::new(RefCell::new(fragment));

        let view = View::new(events, {
            let fragment = Rc::clone(&fragment);
            move |state: &ViewState| fragment.borrow_mut().update(state)
        });

        Ok(Self {
            fragment,
            view,
            button,
            heading,
        })
    }

    /// Mount the page at `location`, render the current state, then attach all listeners.
    pub fn mount(&mut self, location: &Location) -> Result<()> {
        {
            let mut fragment = self.fragment.borrow_mut();
            fragment.mount(location)?;
            fragment.update(&self.view.state());
        }

        self.bind();

        info!(events = ?self.view.events(), "mounted");

        Ok(())
    }

    /// Change the events listened for. Listeners are moved immediately if the page is mounted.
    pub fn set_events(&mut self, events: ViewEvents) {
        self.view.set_events(events);

        if self.fragment.borrow().is_mounted() {
            self.bind();
        }
    }

    /// Remove all listeners, then remove the page from the DOM.
    pub fn unmount(&mut self) -> Result<()> {
        self.view.unbind();
        self.fragment.borrow_mut().detach()?;

        info!("unmounted");

        Ok(())
    }

    pub fn state(&self) -> ViewState {
        self.view.state()
    }

    fn bind(&mut self) {
        self.view.bind(
            self.button.get().map(WebTarget::from),
            self.heading.get().map(WebTarget::from),
        );
    }
}

impl Drop for App {
    fn drop(&mut self) {
        if self.fragment.borrow().is_mounted() {
            if let Err(error) = self.unmount() {
                warn!(%error, "failed to unmount on drop");
            }
        }
    }
}
