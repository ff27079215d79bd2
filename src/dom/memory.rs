//! An in-memory document.
//!
//! `MemoryDom` implements [`Dom`] on a plain tree behind a mutex, and adds the inspection
//! helpers tests need: text content, class and style lookups, and an HTML rendering.

use super::{Dom, NodeId, Rect};
use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

const BODY: NodeId = NodeId(0);

#[derive(Debug, Default)]
struct Node {
    tag: String,
    text: Option<String>,
    classes: Vec<String>,
    styles: Vec<(String, String)>,
    attributes: Vec<(String, String)>,
    children: Vec<NodeId>,
    parent: Option<NodeId>,
    rect: Option<Rect>,
}

#[derive(Debug)]
struct Tree {
    nodes: HashMap<NodeId, Node>,
    next_id: u32,
}

impl Tree {
    fn detach(&mut self, node: NodeId) {
        let parent = self.nodes.get_mut(&node).and_then(|n| n.parent.take());
        if let Some(parent) = parent.and_then(|p| self.nodes.get_mut(&p)) {
            parent.children.retain(|c| *c != node);
        }
    }

    fn drop_subtree(&mut self, node: NodeId) {
        if let Some(removed) = self.nodes.remove(&node) {
            for child in removed.children {
                self.drop_subtree(child);
            }
        }
    }

    fn is_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.nodes.get(&id).and_then(|n| n.parent);
        }
        false
    }

    fn descendants(&self, root: NodeId, out: &mut Vec<NodeId>) {
        if let Some(node) = self.nodes.get(&root) {
            for child in &node.children {
                out.push(*child);
                self.descendants(*child, out);
            }
        }
    }

    fn text_content(&self, node: NodeId, out: &mut String) {
        if let Some(n) = self.nodes.get(&node) {
            if let Some(text) = &n.text {
                out.push_str(text);
            }
            for child in &n.children {
                self.text_content(*child, out);
            }
        }
    }

    fn render(&self, node: NodeId, out: &mut String) {
        let Some(n) = self.nodes.get(&node) else {
            return;
        };
        out.push('<');
        out.push_str(&n.tag);
        if !n.classes.is_empty() {
            out.push_str(&format!(" class=\"{}\"", escape_html(&n.classes.join(" "))));
        }
        for (name, value) in &n.attributes {
            out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
        }
        if !n.styles.is_empty() {
            let style: Vec<String> = n.styles.iter().map(|(k, v)| format!("{k}: {v}")).collect();
            out.push_str(&format!(" style=\"{}\"", escape_html(&style.join("; "))));
        }
        out.push('>');
        if let Some(text) = &n.text {
            out.push_str(&escape_html(text));
        }
        for child in &n.children {
            self.render(*child, out);
        }
        out.push_str(&format!("</{}>", n.tag));
    }
}

/// A document held entirely in memory.
#[derive(Debug)]
pub struct MemoryDom {
    tree: Mutex<Tree>,
}

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryDom {
    /// Creates a document containing only `<body>`.
    pub fn new() -> Self {
        let mut nodes = HashMap::new();
        nodes.insert(
            BODY,
            Node {
                tag: "body".to_string(),
                ..Node::default()
            },
        );
        Self {
            tree: Mutex::new(Tree { nodes, next_id: 1 }),
        }
    }

    fn tree(&self) -> MutexGuard<'_, Tree> {
        self.tree.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn with_node<F: FnOnce(&mut Node)>(&self, node: NodeId, f: F) {
        if let Some(n) = self.tree().nodes.get_mut(&node) {
            f(n);
        }
    }

    /// Gives `node` a layout box, as a browser would after rendering it.
    pub fn set_rect(&self, node: NodeId, rect: Rect) {
        self.with_node(node, |n| n.rect = Some(rect));
    }

    pub fn tag(&self, node: NodeId) -> Option<String> {
        self.tree().nodes.get(&node).map(|n| n.tag.clone())
    }

    /// Concatenated text of `node` and its descendants. Empty for unknown nodes.
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.tree().text_content(node, &mut out);
        out
    }

    pub fn has_class(&self, node: NodeId, class: &str) -> bool {
        self.tree()
            .nodes
            .get(&node)
            .is_some_and(|n| n.classes.iter().any(|c| c == class))
    }

    pub fn classes(&self, node: NodeId) -> Vec<String> {
        self.tree()
            .nodes
            .get(&node)
            .map(|n| n.classes.clone())
            .unwrap_or_default()
    }

    pub fn style(&self, node: NodeId, property: &str) -> Option<String> {
        self.tree().nodes.get(&node).and_then(|n| {
            n.styles
                .iter()
                .find(|(k, _)| k == property)
                .map(|(_, v)| v.clone())
        })
    }

    pub fn attribute(&self, node: NodeId, name: &str) -> Option<String> {
        self.tree().nodes.get(&node).and_then(|n| {
            n.attributes
                .iter()
                .find(|(k, _)| k == name)
                .map(|(_, v)| v.clone())
        })
    }

    pub fn children(&self, node: NodeId) -> Vec<NodeId> {
        self.tree()
            .nodes
            .get(&node)
            .map(|n| n.children.clone())
            .unwrap_or_default()
    }

    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.tree().nodes.get(&node).and_then(|n| n.parent)
    }

    /// Every attached element carrying `class`, in document order.
    pub fn find_all_by_class(&self, class: &str) -> Vec<NodeId> {
        let tree = self.tree();
        let mut all = Vec::new();
        tree.descendants(BODY, &mut all);
        all.into_iter()
            .filter(|id| {
                tree.nodes
                    .get(id)
                    .is_some_and(|n| n.classes.iter().any(|c| c == class))
            })
            .collect()
    }

    /// Number of elements that exist, attached or not, `<body>` included.
    pub fn node_count(&self) -> usize {
        self.tree().nodes.len()
    }

    /// Serialises `node` and its subtree to HTML. Text and attribute values are escaped.
    pub fn to_html(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.tree().render(node, &mut out);
        out
    }
}

impl Dom for MemoryDom {
    fn body(&self) -> NodeId {
        BODY
    }

    fn create_element(&self, tag: &str) -> NodeId {
        let mut tree = self.tree();
        let id = NodeId(tree.next_id);
        tree.next_id += 1;
        tree.nodes.insert(
            id,
            Node {
                tag: tag.to_string(),
                ..Node::default()
            },
        );
        id
    }

    fn append_child(&self, parent: NodeId, child: NodeId) {
        let mut tree = self.tree();
        if parent == child
            || !tree.nodes.contains_key(&parent)
            || !tree.nodes.contains_key(&child)
            || tree.is_ancestor(child, parent)
        {
            return;
        }
        tree.detach(child);
        if let Some(n) = tree.nodes.get_mut(&child) {
            n.parent = Some(parent);
        }
        if let Some(p) = tree.nodes.get_mut(&parent) {
            p.children.push(child);
        }
    }

    fn remove(&self, node: NodeId) {
        if node == BODY {
            return;
        }
        let mut tree = self.tree();
        tree.detach(node);
        tree.drop_subtree(node);
    }

    fn clear_children(&self, node: NodeId) {
        let mut tree = self.tree();
        let children = match tree.nodes.get_mut(&node) {
            Some(n) => {
                n.text = None;
                std::mem::take(&mut n.children)
            }
            None => return,
        };
        for child in children {
            tree.drop_subtree(child);
        }
    }

    fn set_text(&self, node: NodeId, text: &str) {
        self.clear_children(node);
        self.with_node(node, |n| n.text = Some(text.to_string()));
    }

    fn add_class(&self, node: NodeId, class: &str) {
        self.with_node(node, |n| {
            if !n.classes.iter().any(|c| c == class) {
                n.classes.push(class.to_string());
            }
        });
    }

    fn remove_class(&self, node: NodeId, class: &str) {
        self.with_node(node, |n| n.classes.retain(|c| c != class));
    }

    fn set_style(&self, node: NodeId, property: &str, value: &str) {
        self.with_node(node, |n| {
            match n.styles.iter_mut().find(|(k, _)| k == property) {
                Some((_, v)) => *v = value.to_string(),
                None => n.styles.push((property.to_string(), value.to_string())),
            }
        });
    }

    fn remove_style(&self, node: NodeId, property: &str) {
        self.with_node(node, |n| n.styles.retain(|(k, _)| k != property));
    }

    fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.with_node(node, |n| {
            match n.attributes.iter_mut().find(|(k, _)| k == name) {
                Some((_, v)) => *v = value.to_string(),
                None => n.attributes.push((name.to_string(), value.to_string())),
            }
        });
    }

    fn query_class(&self, root: NodeId, class: &str) -> Option<NodeId> {
        let tree = self.tree();
        let mut all = Vec::new();
        tree.descendants(root, &mut all);
        all.into_iter().find(|id| {
            tree.nodes
                .get(id)
                .is_some_and(|n| n.classes.iter().any(|c| c == class))
        })
    }

    fn bounding_rect(&self, node: NodeId) -> Option<Rect> {
        self.tree().nodes.get(&node).and_then(|n| n.rect)
    }

    fn contains(&self, node: NodeId) -> bool {
        let tree = self.tree();
        tree.nodes.contains_key(&node) && tree.is_ancestor(BODY, node)
    }
}

/// Escapes the five HTML-significant characters.
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_is_never_markup() {
        let dom = MemoryDom::new();
        let p = dom.create_element("p");
        dom.append_child(dom.body(), p);
        dom.set_text(p, "<b>bold</b> & co");

        assert_eq!(dom.text_content(p), "<b>bold</b> & co");
        assert_eq!(dom.to_html(p), "<p>&lt;b&gt;bold&lt;/b&gt; &amp; co</p>");
        assert!(dom.children(p).is_empty());
    }

    #[test]
    fn test_remove_discards_subtree() {
        let dom = MemoryDom::new();
        let outer = dom.element("div", &["outer"]);
        dom.append_child(dom.body(), outer);
        let inner = dom.append_text_element(outer, "span", &["inner"], "x");

        dom.remove(outer);

        assert!(!dom.contains(outer));
        assert!(!dom.contains(inner));
        assert_eq!(dom.node_count(), 1);
        assert!(dom.children(dom.body()).is_empty());
    }

    #[test]
    fn test_detached_nodes_are_not_contained() {
        let dom = MemoryDom::new();
        let loose = dom.create_element("div");
        assert!(!dom.contains(loose));

        dom.append_child(dom.body(), loose);
        assert!(dom.contains(loose));
    }

    #[test]
    fn test_query_class_in_document_order() {
        let dom = MemoryDom::new();
        let first = dom.element("div", &["item"]);
        let nested = dom.element("div", &["item"]);
        let second = dom.element("div", &["item"]);
        dom.append_child(dom.body(), first);
        dom.append_child(first, nested);
        dom.append_child(dom.body(), second);

        assert_eq!(dom.query_class(dom.body(), "item"), Some(first));
        assert_eq!(dom.query_class(first, "item"), Some(nested));
        assert_eq!(dom.find_all_by_class("item"), vec![first, nested, second]);
    }

    #[test]
    fn test_mutations_on_missing_nodes_are_ignored() {
        let dom = MemoryDom::new();
        let ghost = NodeId(99);

        dom.add_class(ghost, "x");
        dom.set_style(ghost, "display", "none");
        dom.set_text(ghost, "boo");
        dom.remove(ghost);

        assert!(!dom.has_class(ghost, "x"));
        assert_eq!(dom.style(ghost, "display"), None);
    }

    #[test]
    fn test_classes_and_styles_are_unique() {
        let dom = MemoryDom::new();
        let node = dom.create_element("span");
        dom.add_class(node, "a");
        dom.add_class(node, "a");
        dom.set_style(node, "display", "flex");
        dom.set_style(node, "display", "none");

        assert_eq!(dom.classes(node), vec!["a".to_string()]);
        assert_eq!(dom.style(node, "display").as_deref(), Some("none"));

        dom.restart_class(node, "a");
        assert!(dom.has_class(node, "a"));
    }

    #[test]
    fn test_rect_center() {
        let rect = Rect::new(10.0, 20.0, 100.0, 40.0);
        assert_eq!(rect.center(), (60.0, 40.0));
    }
}
