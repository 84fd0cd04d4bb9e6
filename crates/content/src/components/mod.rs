//! The variant catalog.
//!
//! These are the concrete shapes a content tree is built from, independent of how they are
//! written to the wire. Each variant exposes its defining [`ComponentTag`](crate::ComponentTag)
//! as an associated `TAG` constant and an `identity()` used for keying.

pub mod button;
pub mod group;
pub mod image;
pub mod stack;
pub mod text;

pub use button::Button;
pub use group::Group;
pub use image::Image;
pub use stack::Stack;
pub use text::{Text, TextStyle};

use crate::node::Node;

/// Generate an identity for a container that has no children to borrow one from.
///
/// The value is unique per construction, so two empty containers never share an identity.
fn fresh_identity() -> String {
    uuid::Uuid::new_v4().simple().to_string()
}

/// A container is identified by its first child, falling back to its own generated value.
fn container_identity<'a>(components: &'a [Node], fallback: &'a str) -> &'a str {
    components.first().map(Node::identity).unwrap_or(fallback)
}

fn children_structural_eq(left: &[Node], right: &[Node]) -> bool {
    left.len() == right.len()
        && left
            .iter()
            .zip(right)
            .all(|(l, r)| l.structural_eq(r))
}
