//! DOM Tree (arena-based allocation)

use crate::{Node, NodeData, NodeId};

/// Arena-based DOM tree
///
/// Node 0 is always the document node; everything else hangs off it.
#[derive(Debug)]
pub struct DomTree {
    nodes: Vec<Node>,
}

impl DomTree {
    /// Create a tree holding only the document node
    pub fn new() -> Self {
        Self { nodes: vec![Node::document()] }
    }

    /// Document node
    #[inline]
    pub fn root(&self) -> NodeId {
        NodeId::ROOT
    }

    /// Get a node by ID
    pub fn get(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id.index())
    }

    /// Get a mutable node by ID
    pub fn get_mut(&mut self, id: NodeId) -> Option<&mut Node> {
        self.nodes.get_mut(id.index())
    }

    /// Number of nodes in the tree
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Check if tree holds nothing but the document node
    pub fn is_empty(&self) -> bool {
        self.nodes.len() <= 1
    }

    fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Create a detached element
    pub fn create_element(&mut self, name: &str) -> NodeId {
        self.push(Node::element(name))
    }

    /// Create a detached text node
    pub fn create_text(&mut self, content: &str) -> NodeId {
        self.push(Node::text(content))
    }

    /// Create a detached comment
    pub fn create_comment(&mut self, content: &str) -> NodeId {
        self.push(Node::comment(content))
    }

    /// Create a detached DOCTYPE
    pub fn create_doctype(&mut self, name: &str, public_id: &str, system_id: &str) -> NodeId {
        self.push(Node::doctype(name, public_id, system_id))
    }

    /// Append `child` as the last child of `parent`.
    ///
    /// The child must be detached; attached nodes are left where they are.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) -> bool {
        if parent == child || self.get(parent).is_none() {
            return false;
        }
        match self.get(child) {
            Some(node) if !node.parent.is_valid() && child != NodeId::ROOT => {}
            _ => return false,
        }

        let last = self.nodes[parent.index()].last_child;
        {
            let node = &mut self.nodes[child.index()];
            node.parent = parent;
            node.prev_sibling = last;
            node.next_sibling = NodeId::NONE;
        }
        if last.is_valid() {
            self.nodes[last.index()].next_sibling = child;
        } else {
            self.nodes[parent.index()].first_child = child;
        }
        self.nodes[parent.index()].last_child = child;
        true
    }

    /// Detach a node from its parent. The subtree stays intact.
    pub fn detach(&mut self, id: NodeId) {
        let Some(node) = self.get(id) else {
            return;
        };
        let (parent, prev, next) = (node.parent, node.prev_sibling, node.next_sibling);
        if !parent.is_valid() {
            return;
        }

        if prev.is_valid() {
            self.nodes[prev.index()].next_sibling = next;
        } else {
            self.nodes[parent.index()].first_child = next;
        }
        if next.is_valid() {
            self.nodes[next.index()].prev_sibling = prev;
        } else {
            self.nodes[parent.index()].last_child = prev;
        }

        let node = &mut self.nodes[id.index()];
        node.parent = NodeId::NONE;
        node.prev_sibling = NodeId::NONE;
        node.next_sibling = NodeId::NONE;
    }

    /// Iterate over direct children
    pub fn children(&self, parent: NodeId) -> Children<'_> {
        let next = self.get(parent).map_or(NodeId::NONE, |n| n.first_child);
        Children { tree: self, next }
    }

    /// Node and its ancestors, nearest first
    pub fn ancestors(&self, id: NodeId) -> Vec<NodeId> {
        let mut path = Vec::new();
        let mut current = id;
        while let Some(node) = self.get(current) {
            path.push(current);
            current = node.parent;
        }
        path
    }

    /// All nodes below `root` in document (pre-)order, excluding `root`
    pub fn descendants(&self, root: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack: Vec<NodeId> = self.children(root).map(|(id, _)| id).collect();
        stack.reverse();
        while let Some(id) = stack.pop() {
            out.push(id);
            let start = stack.len();
            stack.extend(self.children(id).map(|(child, _)| child));
            stack[start..].reverse();
        }
        out
    }

    /// Next sibling that is an element, skipping text and comments
    pub fn next_element_sibling(&self, id: NodeId) -> Option<NodeId> {
        let mut current = self.get(id)?.next_sibling;
        while let Some(node) = self.get(current) {
            if node.is_element() {
                return Some(current);
            }
            current = node.next_sibling;
        }
        None
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self, id: NodeId) -> String {
        self.descendants(id)
            .into_iter()
            .filter_map(|n| self.get(n).and_then(Node::as_text))
            .collect()
    }

    /// Element tag name, if `id` is an element
    pub fn tag_name(&self, id: NodeId) -> Option<&str> {
        match &self.get(id)?.data {
            NodeData::Element(elem) => Some(&elem.name),
            _ => None,
        }
    }
}

impl Default for DomTree {
    fn default() -> Self {
        Self::new()
    }
}

/// Iterator over the children of a node
pub struct Children<'a> {
    tree: &'a DomTree,
    next: NodeId,
}

impl<'a> Iterator for Children<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next;
        let node = self.tree.get(id)?;
        self.next = node.next_sibling;
        Some((id, node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> (DomTree, NodeId, NodeId, NodeId, NodeId) {
        let mut tree = DomTree::new();
        let body = tree.create_element("body");
        let p = tree.create_element("p");
        let text = tree.create_text(" ");
        let div = tree.create_element("div");
        tree.append_child(tree.root(), body);
        tree.append_child(body, p);
        tree.append_child(body, text);
        tree.append_child(body, div);
        (tree, body, p, text, div)
    }

    #[test]
    fn test_new_tree_has_document_node() {
        let tree = DomTree::new();
        assert_eq!(tree.len(), 1);
        assert!(tree.is_empty());
        assert!(matches!(tree.get(NodeId::ROOT).map(|n| &n.data), Some(NodeData::Document)));
    }

    #[test]
    fn test_append_links_siblings() {
        let (tree, body, p, text, div) = sample();
        let kids: Vec<NodeId> = tree.children(body).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![p, text, div]);
        assert_eq!(tree.get(div).map(|n| n.prev_sibling), Some(text));
    }

    #[test]
    fn test_append_rejects_attached_child() {
        let (mut tree, body, p, _, div) = sample();
        assert!(!tree.append_child(div, p));
        assert!(!tree.append_child(body, body));
    }

    #[test]
    fn test_next_element_sibling_skips_text() {
        let (tree, _, p, _, div) = sample();
        assert_eq!(tree.next_element_sibling(p), Some(div));
        assert_eq!(tree.next_element_sibling(div), None);
    }

    #[test]
    fn test_descendants_preorder() {
        let (mut tree, body, p, text, div) = sample();
        let em = tree.create_element("em");
        tree.append_child(p, em);
        assert_eq!(tree.descendants(tree.root()), vec![body, p, em, text, div]);
    }

    #[test]
    fn test_detach() {
        let (mut tree, body, p, text, div) = sample();
        tree.detach(text);
        let kids: Vec<NodeId> = tree.children(body).map(|(id, _)| id).collect();
        assert_eq!(kids, vec![p, div]);
        assert_eq!(tree.next_element_sibling(p), Some(div));
        assert!(tree.append_child(div, text));
    }

    #[test]
    fn test_ancestors() {
        let (tree, body, p, _, _) = sample();
        assert_eq!(tree.ancestors(p), vec![p, body, NodeId::ROOT]);
    }
}
