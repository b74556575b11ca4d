mod builder;
mod location;
mod node;
mod updatable;

pub use self::builder::FragmentBuilder;
pub use self::location::Location;
pub use self::node::{Node, NodeRef};
pub use self::updatable::{GetTextFn, Updatable};

use crate::error::Result;
use web_sys::Node as WsNode;

/// A static node within a fragment, alongside the index of the static node that it should be
/// mounted in.
struct StaticNode {
    location: Option<usize>,
    node: WsNode,
    node_ref: Option<NodeRef>,
}

/// A tree of DOM nodes that is mounted, updated and detached as a unit. The structure of the tree
/// never changes, only the content of its [`Updatable`] text nodes.
pub struct Fragment<Ctx> {
    /// Static nodes, in the order they were added. A node's location always refers to an earlier
    /// node, so mounting in order guarantees parents exist first.
    static_nodes: Vec<StaticNode>,

    /// Text nodes that are regenerated from the context on every update.
    updatables: Vec<(Option<usize>, Updatable<Ctx>)>,

    /// Whether the fragment is currently mounted or not.
    mounted: bool,
}

impl<Ctx> Fragment<Ctx>
where
    Ctx: 'static,
{
    /// Create a new [`FragmentBuilder`].
    pub fn build() -> FragmentBuilder<Ctx> {
        FragmentBuilder::new()
    }

    fn new() -> Self {
        Self {
            static_nodes: Vec::new(),
            updatables: Vec::new(),
            mounted: false,
        }
    }

    fn push_static(&mut self, node: WsNode, location: Option<usize>, node_ref: Option<NodeRef>) {
        self.static_nodes.push(StaticNode {
            location,
            node,
            node_ref,
        });
    }

    fn push_updatable(&mut self, updatable: Updatable<Ctx>, location: Option<usize>) {
        self.updatables.push((location, updatable));
    }

    /// Resolve where something with the given `location` should be mounted.
    fn resolve(&self, location: Option<usize>, root: &Location) -> Location {
        location
            .and_then(|parent_id| self.static_nodes.get(parent_id))
            .map(|parent| Location::parent(&parent.node))
            .unwrap_or_else(|| root.clone())
    }

    /// Mount every node at `location`, and fill any [`NodeRef`]s. Does nothing if already mounted.
    pub fn mount(&mut self, location: &Location) -> Result<()> {
        if self.mounted {
            return Ok(());
        }

        for static_node in &self.static_nodes {
            self.resolve(static_node.location, location)
                .mount(&static_node.node)?;

            if let Some(node_ref) = &static_node.node_ref {
                node_ref.set(node::as_element(&static_node.node));
            }
        }

        for (parent_id, updatable) in &self.updatables {
            updatable.mount(&self.resolve(*parent_id, location))?;
        }

        self.mounted = true;

        Ok(())
    }

    /// Regenerate all updatable content from `context`. Ignored whilst detached.
    pub fn update(&mut self, context: &Ctx) {
        if self.mounted {
            self.updatables
                .iter()
                .for_each(|(_, updatable)| updatable.update(context));
        }
    }

    /// Remove the fragment from the DOM, and empty any [`NodeRef`]s. Only top level nodes are
    /// removed directly, children leave with their parent.
    pub fn detach(&mut self) -> Result<()> {
        if !self.mounted {
            return Ok(());
        }

        for static_node in &self.static_nodes {
            if static_node.location.is_none() {
                detach_node(&static_node.node)?;
            }

            if let Some(node_ref) = &static_node.node_ref {
                node_ref.set(None);
            }
        }

        for (parent_id, updatable) in &self.updatables {
            updatable.detach(parent_id.is_none())?;
        }

        self.mounted = false;

        Ok(())
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }
}

/// Remove `node` from its parent, if it has one.
fn detach_node<N>(node: &N) -> Result<()>
where
    N: AsRef<WsNode>,
{
    let node = node.as_ref();

    if let Some(parent) = node.parent_node() {
        parent.remove_child(node)?;
    }

    Ok(())
}
