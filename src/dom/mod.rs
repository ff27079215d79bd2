//! # Document Access
//!
//! Every component renders through the [`Dom`] trait instead of touching a browser document
//! directly. The trait covers the handful of operations the storefront actually needs:
//! creating elements, toggling classes and inline styles, setting text and reading layout.
//!
//! All operations are infallible. Mutating a node that no longer exists is a no-op, the
//! same way a detached element swallows writes in a browser.
//!
//! [`MemoryDom`] is a complete in-memory document used by the tests and the demo binary.

pub mod memory;

pub use memory::{escape_html, MemoryDom};

use std::fmt::Display;

/// Handle to an element in a [`Dom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub u32);

impl Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "node_{}", self.0)
    }
}

/// Layout box of an element, in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// The document operations the storefront components rely on.
pub trait Dom: Send + Sync {
    /// The `<body>` element.
    fn body(&self) -> NodeId;

    /// Creates a detached element.
    fn create_element(&self, tag: &str) -> NodeId;

    fn append_child(&self, parent: NodeId, child: NodeId);

    /// Detaches `node` and discards it with its whole subtree.
    fn remove(&self, node: NodeId);

    fn clear_children(&self, node: NodeId);

    /// Replaces the children of `node` with a single text node. Elements appended later
    /// render after the text.
    ///
    /// The text is never interpreted as markup.
    fn set_text(&self, node: NodeId, text: &str);

    fn add_class(&self, node: NodeId, class: &str);

    fn remove_class(&self, node: NodeId, class: &str);

    fn set_style(&self, node: NodeId, property: &str, value: &str);

    fn remove_style(&self, node: NodeId, property: &str);

    fn set_attribute(&self, node: NodeId, name: &str, value: &str);

    /// First descendant of `root` carrying `class`, in document order.
    fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId>;

    /// Layout of `node`, or `None` when it is not laid out.
    fn bounding_rect(&self, node: NodeId) -> Option<Rect>;

    /// `true` while `node` exists and is attached to the document.
    fn contains(&self, node: NodeId) -> bool;

    /// Creates a detached element carrying the given classes.
    fn element(&self, tag: &str, classes: &[&str]) -> NodeId {
        let node = self.create_element(tag);
        for class in classes {
            self.add_class(node, class);
        }
        node
    }

    /// Creates an element with classes and text, and appends it to `parent`.
    fn append_text_element(
        &self,
        parent: NodeId,
        tag: &str,
        classes: &[&str],
        text: &str,
    ) -> NodeId {
        let node = self.element(tag, classes);
        self.set_text(node, text);
        self.append_child(parent, node);
        node
    }

    /// Restarts a one-shot CSS animation by removing and re-adding its class.
    fn restart_class(&self, node: NodeId, class: &str) {
        self.remove_class(node, class);
        self.add_class(node, class);
    }
}

/// Elements the host page hands to the components at startup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Anchors {
    /// The `a[href="/cart"]` navigation link that hosts the badge.
    pub cart_link: Option<NodeId>,
    /// An existing `div.toast-container`. Created under `<body>` when absent.
    pub toast_container: Option<NodeId>,
}

impl Anchors {
    pub fn with_cart_link(mut self, node: NodeId) -> Self {
        self.cart_link = Some(node);
        self
    }

    pub fn with_toast_container(mut self, node: NodeId) -> Self {
        self.toast_container = Some(node);
        self
    }
}
