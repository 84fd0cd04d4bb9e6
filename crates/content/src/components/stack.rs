//! Horizontal stack container.

use super::{children_structural_eq, container_identity, fresh_identity};
use crate::node::Node;
use crate::tag::ComponentTag;

/// An ordered sequence of child nodes laid out along a horizontal axis.
#[derive(Clone, Debug)]
pub struct Stack {
    /// Child nodes, in layout order.
    pub components: Vec<Node>,
    fallback_identity: String,
}

impl Stack {
    pub const TAG: ComponentTag = ComponentTag::HStack;

    pub fn new(components: Vec<Node>) -> Self {
        Self {
            components,
            fallback_identity: fresh_identity(),
        }
    }

    /// The identity of the first child, or a value generated for this stack if it is empty.
    pub fn identity(&self) -> &str {
        container_identity(&self.components, &self.fallback_identity)
    }

    /// Field-by-field equality, recursing into children.
    ///
    /// The generated fallback identity is not part of the content and is ignored.
    pub fn structural_eq(&self, other: &Self) -> bool {
        children_structural_eq(&self.components, &other.components)
    }
}
