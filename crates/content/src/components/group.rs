//! Generic grouping container.

use super::{children_structural_eq, container_identity, fresh_identity};
use crate::node::Node;
use crate::tag::ComponentTag;

/// An ordered sequence of child nodes with no implied axis.
///
/// Groups may be marked prominent, which renderers are free to interpret (for example as a
/// card or an emphasised section). Prominence defaults to `false` when absent from a payload.
#[derive(Clone, Debug)]
pub struct Group {
    /// Child nodes, in order.
    pub components: Vec<Node>,
    pub is_prominent: bool,
    fallback_identity: String,
}

impl Group {
    pub const TAG: ComponentTag = ComponentTag::Group;

    pub fn new(components: Vec<Node>, is_prominent: bool) -> Self {
        Self {
            components,
            is_prominent,
            fallback_identity: fresh_identity(),
        }
    }

    /// Same rule as [`Stack::identity`](super::Stack::identity).
    pub fn identity(&self) -> &str {
        container_identity(&self.components, &self.fallback_identity)
    }

    pub fn structural_eq(&self, other: &Self) -> bool {
        self.is_prominent == other.is_prominent
            && children_structural_eq(&self.components, &other.components)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::TextStyle;

    #[test]
    fn prominence_is_part_of_structure_but_not_identity() {
        let plain = Group::new(vec![Node::text("Title", TextStyle::Title)], false);
        let prominent = Group::new(vec![Node::text("Title", TextStyle::Title)], true);
        assert_eq!(plain.identity(), prominent.identity());
        assert!(!plain.structural_eq(&prominent));
    }

    #[test]
    fn nested_children_compare_structurally() {
        let a = Group::new(vec![Node::text("x", TextStyle::Body)], false);
        let b = Group::new(vec![Node::text("x", TextStyle::Footnote)], false);
        assert!(!a.structural_eq(&b));
    }
}
