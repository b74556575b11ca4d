use super::{detach_node, Location};
use crate::error::Result;
use web_sys::{Document, Text};

/// Helper type for updatable text. The closure will be called with the current context, and must
/// return text to be placed within a text node to be rendered.
pub type GetTextFn<Ctx> = Box<dyn Fn(&Ctx) -> String>;

/// Represents a reactive [`Text`] node within a fragment. Will generate a new value for the
/// provided context, and will update the node appropriately.
pub struct Updatable<Ctx> {
    /// Call back function that generates a new [`String`] for the given state.
    get_text: GetTextFn<Ctx>,

    /// Reference to the [`Text`] node that will be inserted and updated in the DOM.
    text_node: Text,
}

impl<Ctx> Updatable<Ctx> {
    /// Create a new instance with the provided `get_text` callback. Requires a reference to
    /// [`Document`] in order to create the [`Text`] node.
    pub fn new(document: &Document, get_text: GetTextFn<Ctx>) -> Self {
        Self {
            get_text,
            text_node: document.create_text_node(""),
        }
    }

    pub fn mount(&self, location: &Location) -> Result<()> {
        location.mount(&self.text_node)
    }

    pub fn update(&self, context: &Ctx) {
        let text = (self.get_text)(context);

        // Skip the DOM write if nothing changed
        if self.text_node.data() != text {
            self.text_node.set_data(&text);
        }
    }

    /// Remove the text node. Only required when `top_level`, otherwise the parent takes it with it.
    pub fn detach(&self, top_level: bool) -> Result<()> {
        if top_level {
            detach_node(&self.text_node)?;
        }

        Ok(())
    }
}
