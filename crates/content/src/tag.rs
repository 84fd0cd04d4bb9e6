//! Component tag registry.
//!
//! Every serialised node carries a `type` string naming its variant. The set of variants is
//! closed, so the registry is a pure function from tag string to [`ComponentTag`] rather than a
//! runtime table.
//!
//! Responsibilities:
//! - Map each variant to exactly one canonical tag, used when encoding.
//! - Accept legacy tag strings (aliases) for renamed variants, used only when decoding.
//!
//! Notes:
//! - The group variant was historically tagged `vstack`. Payloads produced before the rename
//!   must still decode, so `vstack` is an alias of `group`.

use crate::decode::DecodeErrorKind;
use std::fmt;
use std::str::FromStr;

/// The closed set of component variants, as named on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ComponentTag {
    /// Horizontal stack container.
    HStack,
    /// Generic container with a prominence flag.
    Group,
    /// Image leaf.
    Image,
    /// Text leaf.
    Text,
    /// Interactive button leaf.
    Button,
}

impl ComponentTag {
    /// All variants, in wire declaration order.
    pub const ALL: [ComponentTag; 5] = [
        ComponentTag::HStack,
        ComponentTag::Group,
        ComponentTag::Image,
        ComponentTag::Text,
        ComponentTag::Button,
    ];

    /// The canonical tag string emitted when encoding.
    pub fn as_str(self) -> &'static str {
        match self {
            ComponentTag::HStack => "hstack",
            ComponentTag::Group => "group",
            ComponentTag::Image => "image",
            ComponentTag::Text => "text",
            ComponentTag::Button => "button",
        }
    }

    /// Legacy tag strings still accepted for this variant when decoding.
    ///
    /// Aliases are never emitted.
    pub fn aliases(self) -> &'static [&'static str] {
        match self {
            ComponentTag::Group => &["vstack"],
            ComponentTag::HStack
            | ComponentTag::Image
            | ComponentTag::Text
            | ComponentTag::Button => &[],
        }
    }

    /// Returns `true` if this variant holds child nodes.
    pub fn is_container(self) -> bool {
        matches!(self, ComponentTag::HStack | ComponentTag::Group)
    }

    /// Resolve a wire tag string to its variant.
    ///
    /// Matching is exact (case-sensitive) against canonical tags first, then against aliases.
    ///
    /// # Arguments
    ///
    /// * `tag` - The `type` string read from a serialised node.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeErrorKind::UnknownVariant`] if the string names no variant.
    pub fn resolve(tag: &str) -> Result<Self, DecodeErrorKind> {
        if let Some(canonical) = Self::ALL.into_iter().find(|t| t.as_str() == tag) {
            return Ok(canonical);
        }

        match Self::ALL.into_iter().find(|t| t.aliases().contains(&tag)) {
            Some(aliased) => {
                tracing::debug!(
                    legacy = tag,
                    canonical = aliased.as_str(),
                    "resolved legacy component tag"
                );
                Ok(aliased)
            }
            None => Err(DecodeErrorKind::UnknownVariant(tag.to_owned())),
        }
    }
}

impl fmt::Display for ComponentTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ComponentTag {
    type Err = DecodeErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s)
    }
}
