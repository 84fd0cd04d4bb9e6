//! The polymorphic node.
//!
//! [`Node`] is a tagged union over the variant catalog. Containers own their children as further
//! nodes, so a tree is built strictly bottom-up and can never contain cycles.
//!
//! Notes:
//! - `==` on nodes compares identities, not content. Two text nodes with the same text but
//!   different styles are equal. Renderers use this relation to key list items; use
//!   [`Node::structural_eq`] when full content equality is needed.
//! - `Serialize` and `Deserialize` go through [`crate::encode`] and [`crate::decode_value`], so a
//!   node can be embedded in any serde document.

use crate::components::{Button, Group, Image, Stack, Text, TextStyle};
use crate::decode::{decode_value_with, DecodeOptions};
use crate::encode::encode;
use crate::tag::ComponentTag;
use content_types::ActionIdentifier;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::hash::{Hash, Hasher};

/// Any component of a content tree.
#[derive(Clone, Debug)]
pub enum Node {
    Stack(Stack),
    Group(Group),
    Image(Image),
    Text(Text),
    Button(Button),
}

// ============================================================================
// Convenience constructors
// ============================================================================

impl Node {
    /// A horizontal stack of `components`.
    pub fn hstack(components: Vec<Node>) -> Self {
        Node::Stack(Stack::new(components))
    }

    /// A non-prominent group of `components`.
    pub fn group(components: Vec<Node>) -> Self {
        Node::Group(Group::new(components, false))
    }

    /// A prominent group of `components`.
    pub fn prominent_group(components: Vec<Node>) -> Self {
        Node::Group(Group::new(components, true))
    }

    pub fn image(url: impl Into<String>) -> Self {
        Node::Image(Image::new(url))
    }

    pub fn text(text: impl Into<String>, style: TextStyle) -> Self {
        Node::Text(Text::new(text, style))
    }

    pub fn button(
        title: impl Into<String>,
        subtitle: Option<String>,
        action: impl Into<ActionIdentifier>,
        url: Option<String>,
    ) -> Self {
        Node::Button(Button::new(title, subtitle, action, url))
    }
}

// ============================================================================
// Dispatch
// ============================================================================

impl Node {
    /// The variant's canonical tag.
    pub fn tag(&self) -> ComponentTag {
        match self {
            Node::Stack(_) => Stack::TAG,
            Node::Group(_) => Group::TAG,
            Node::Image(_) => Image::TAG,
            Node::Text(_) => Text::TAG,
            Node::Button(_) => Button::TAG,
        }
    }

    /// The identity used to key this node, per its variant's rule.
    pub fn identity(&self) -> &str {
        match self {
            Node::Stack(stack) => stack.identity(),
            Node::Group(group) => group.identity(),
            Node::Image(image) => image.identity(),
            Node::Text(text) => text.identity(),
            Node::Button(button) => button.identity(),
        }
    }

    /// Direct children of a container, or an empty slice for leaves.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Stack(stack) => &stack.components,
            Node::Group(group) => &group.components,
            Node::Image(_) | Node::Text(_) | Node::Button(_) => &[],
        }
    }

    /// Full field-by-field equality, recursing into children.
    ///
    /// This is the relation a decode of an encoded tree preserves. It is stronger than `==`.
    pub fn structural_eq(&self, other: &Node) -> bool {
        match (self, other) {
            (Node::Stack(a), Node::Stack(b)) => a.structural_eq(b),
            (Node::Group(a), Node::Group(b)) => a.structural_eq(b),
            (Node::Image(a), Node::Image(b)) => a == b,
            (Node::Text(a), Node::Text(b)) => a == b,
            (Node::Button(a), Node::Button(b)) => a == b,
            _ => false,
        }
    }

    /// Visit this node and all descendants in pre-order.
    ///
    /// The callback receives each node and its depth, the root being at depth 1.
    pub fn walk<F>(&self, mut visit: F)
    where
        F: FnMut(&Node, usize),
    {
        fn walk_inner<F: FnMut(&Node, usize)>(node: &Node, depth: usize, visit: &mut F) {
            visit(node, depth);
            for child in node.children() {
                walk_inner(child, depth + 1, visit);
            }
        }

        walk_inner(self, 1, &mut visit);
    }

    /// Number of nodes in this tree, including the root.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        self.walk(|_, _| count += 1);
        count
    }

    /// Nesting depth of this tree; a lone leaf has depth 1.
    pub fn depth(&self) -> usize {
        let mut deepest = 0;
        self.walk(|_, depth| deepest = deepest.max(depth));
        deepest
    }
}

// ============================================================================
// Identity-based equality
// ============================================================================

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.identity() == other.identity()
    }
}

impl Eq for Node {}

impl Hash for Node {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.identity().hash(state);
    }
}

// ============================================================================
// Variant conversions
// ============================================================================

impl From<Stack> for Node {
    fn from(value: Stack) -> Self {
        Node::Stack(value)
    }
}

impl From<Group> for Node {
    fn from(value: Group) -> Self {
        Node::Group(value)
    }
}

impl From<Image> for Node {
    fn from(value: Image) -> Self {
        Node::Image(value)
    }
}

impl From<Text> for Node {
    fn from(value: Text) -> Self {
        Node::Text(value)
    }
}

impl From<Button> for Node {
    fn from(value: Button) -> Self {
        Node::Button(value)
    }
}

// ============================================================================
// serde integration
// ============================================================================

impl Serialize for Node {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        encode(self).serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = serde_json::Value::deserialize(deserializer)?;
        decode_value_with(&value, &DecodeOptions::default()).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn sample_tree() -> Node {
        Node::hstack(vec![
            Node::image("https://example.com/hero.png"),
            Node::group(vec![
                Node::text("Welcome", TextStyle::Title),
                Node::button("Continue", None, ActionIdentifier::open(), None),
            ]),
        ])
    }

    #[test]
    fn identity_is_idempotent() {
        let tree = sample_tree();
        assert_eq!(tree.identity(), tree.identity());
        let empty = Node::group(Vec::new());
        assert_eq!(empty.identity(), empty.identity());
    }

    #[test]
    fn texts_with_equal_payload_but_different_style_are_equal() {
        let title = Node::text("hi", TextStyle::Title);
        let footnote = Node::text("hi", TextStyle::Footnote);
        assert_eq!(title, footnote);
        assert!(!title.structural_eq(&footnote));
    }

    #[test]
    fn equality_can_cross_variants_when_identities_match() {
        let image = Node::image("same");
        let text = Node::text("same", TextStyle::Body);
        assert_eq!(image, text);
        assert!(!image.structural_eq(&text));
    }

    #[test]
    fn container_identity_follows_first_child() {
        let tree = sample_tree();
        assert_eq!(tree.identity(), "https://example.com/hero.png");

        let nested = Node::group(vec![Node::hstack(vec![Node::text("deep", TextStyle::Body)])]);
        assert_eq!(nested.identity(), "deep");
    }

    #[test]
    fn empty_containers_are_distinct_nodes() {
        assert_ne!(Node::hstack(Vec::new()), Node::hstack(Vec::new()));
        assert!(Node::hstack(Vec::new()).structural_eq(&Node::hstack(Vec::new())));
    }

    #[test]
    fn hashing_agrees_with_identity_equality() {
        let mut keys = HashSet::new();
        assert!(keys.insert(Node::text("row", TextStyle::Body)));
        assert!(!keys.insert(Node::text("row", TextStyle::Title)));
        assert!(keys.insert(Node::text("other", TextStyle::Body)));
    }

    #[test]
    fn walk_visits_in_pre_order_with_depth() {
        let mut visited = Vec::new();
        sample_tree().walk(|node, depth| visited.push((node.tag(), depth)));
        assert_eq!(
            visited,
            vec![
                (ComponentTag::HStack, 1),
                (ComponentTag::Image, 2),
                (ComponentTag::Group, 2),
                (ComponentTag::Text, 3),
                (ComponentTag::Button, 3),
            ]
        );
    }

    #[test]
    fn counts_nodes_and_depth() {
        let tree = sample_tree();
        assert_eq!(tree.node_count(), 5);
        assert_eq!(tree.depth(), 3);
        assert_eq!(Node::image("x").depth(), 1);
    }

    #[test]
    fn leaves_have_no_children() {
        assert!(Node::image("x").children().is_empty());
        assert_eq!(sample_tree().children().len(), 2);
    }

    #[test]
    fn prominent_group_constructor_sets_flag() {
        match Node::prominent_group(Vec::new()) {
            Node::Group(group) => assert!(group.is_prominent),
            other => panic!("expected group, got {:?}", other.tag()),
        }
    }
}
