use web_sys::Node as WsNode;

use crate::error::Result;

/// Expresses a location relative to a [`web_sys::Node`] in the DOM. Used to direct a
/// [`super::Fragment`] when mounting it.
#[derive(Clone)]
pub struct Location {
    /// The parent to mount the [`web_sys::Node`] within. Nodes are appended after any existing
    /// children.
    parent: WsNode,
}

impl Location {
    /// Create a location from a parent.
    pub fn parent<N>(parent: &N) -> Self
    where
        N: AsRef<WsNode>,
    {
        Self {
            parent: parent.as_ref().clone(),
        }
    }

    /// Use the location to mount the provided [`web_sys::Node`].
    pub fn mount<N>(&self, node: &N) -> Result<()>
    where
        N: AsRef<WsNode>,
    {
        self.parent.append_child(node.as_ref())?;

        Ok(())
    }
}
