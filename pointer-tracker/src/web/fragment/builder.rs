use web_sys::Document;

use super::{Fragment, GetTextFn, Node, Updatable};
use crate::error::{Error, Result};

/// Used to build and represent a [`Fragment`] that does not yet have access to the [`Document`].
///
/// Locations are indexes of previously added nodes (in the order they were added), with
/// [`None`] referring to the root of the fragment.
pub struct FragmentBuilder<Ctx> {
    nodes: Vec<(Node, Option<usize>)>,
    updatables: Vec<(GetTextFn<Ctx>, Option<usize>)>,
}

impl<Ctx> FragmentBuilder<Ctx>
where
    Ctx: 'static,
{
    /// Create a new, empty instance.
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            updatables: Vec::new(),
        }
    }

    /// Add a static [`Node`].
    pub fn with_node(mut self, node: Node, location: Option<usize>) -> Self {
        self.nodes.push((node, location));
        self
    }

    /// Shorthand to add an element without attributes.
    pub fn with_element<S>(self, kind: S, location: Option<usize>) -> Self
    where
        S: AsRef<str>,
    {
        self.with_node(Node::element(kind), location)
    }

    /// Shorthand to add static text.
    pub fn with_text<S>(self, content: S, location: Option<usize>) -> Self
    where
        S: AsRef<str>,
    {
        self.with_node(Node::text(content), location)
    }

    /// Add a text node whose content is produced from the context on every update.
    pub fn with_updatable<F>(mut self, location: Option<usize>, get_text: F) -> Self
    where
        F: 'static + Fn(&Ctx) -> String,
    {
        self.updatables
            .push((Box::new(get_text) as GetTextFn<Ctx>, location));
        self
    }

    /// Use the reference to [`Document`] to create every node within this builder. Fails if a
    /// location refers to a node that doesn't precede it.
    pub fn build(self, document: &Document) -> Result<Fragment<Ctx>> {
        let mut fragment = Fragment::new();
        let node_count = self.nodes.len();

        for (id, (node, location)) in self.nodes.into_iter().enumerate() {
            check_location(location, id)?;

            let node_ref = node.node_ref().cloned();
            fragment.push_static(node.create_node(document)?, location, node_ref);
        }

        for (get_text, location) in self.updatables {
            check_location(location, node_count)?;

            fragment.push_updatable(Updatable::new(document, get_text), location);
        }

        Ok(fragment)
    }
}

impl<Ctx> Default for FragmentBuilder<Ctx>
where
    Ctx: 'static,
{
    fn default() -> Self {
        Self::new()
    }
}

fn check_location(location: Option<usize>, limit: usize) -> Result<()> {
    match location {
        Some(parent_id) if parent_id >= limit => Err(Error::Dom(format!(
            "location {parent_id} does not refer to an earlier node"
        ))),
        _ => Ok(()),
    }
}
