//! Shared value types for the content wire format.
//!
//! These types are format-agnostic: they carry no knowledge of component tags or of how a tree
//! is decoded. They are kept in their own crate so that producers which only need to name an
//! action (for example a backend building button payloads) do not pull in the codec.

/// Identifies the semantic action a button triggers.
///
/// An action identifier is an opaque string. A small set of well-known actions is provided as
/// associated constants; any other string is a valid custom action. Equality and hashing are by
/// the identifier string only.
///
/// On the wire an action is a mapping with a single `identifier` key
/// (`{ "identifier": "openUrl" }`); the codec crate reads and writes that mapping.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ActionIdentifier {
    identifier: String,
}

impl ActionIdentifier {
    // Each well-known identifier string is spelled exactly as its constant's name in the wire
    // vocabulary (`OPEN_URL` -> "openUrl"). See `well_known_constants_match_their_names`.

    /// Open the content the button belongs to.
    pub const OPEN: &'static str = "open";

    /// Dismiss the presenting surface.
    pub const DISMISS: &'static str = "dismiss";

    /// Open the button's secondary locator.
    pub const OPEN_URL: &'static str = "openUrl";

    /// Share the button's secondary locator.
    pub const SHARE_URL: &'static str = "shareUrl";

    /// All well-known identifier strings.
    pub const WELL_KNOWN: [&'static str; 4] =
        [Self::OPEN, Self::DISMISS, Self::OPEN_URL, Self::SHARE_URL];

    /// Creates an action identifier from any string.
    ///
    /// Construction never fails: strings outside [`Self::WELL_KNOWN`] are custom actions.
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
        }
    }

    /// The [`Self::OPEN`] action.
    pub fn open() -> Self {
        Self::new(Self::OPEN)
    }

    /// The [`Self::DISMISS`] action.
    pub fn dismiss() -> Self {
        Self::new(Self::DISMISS)
    }

    /// The [`Self::OPEN_URL`] action.
    pub fn open_url() -> Self {
        Self::new(Self::OPEN_URL)
    }

    /// The [`Self::SHARE_URL`] action.
    pub fn share_url() -> Self {
        Self::new(Self::SHARE_URL)
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.identifier
    }

    /// Returns `true` if this identifier is one of the well-known actions.
    pub fn is_well_known(&self) -> bool {
        Self::WELL_KNOWN.contains(&self.identifier.as_str())
    }
}

impl std::fmt::Display for ActionIdentifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.identifier)
    }
}

impl AsRef<str> for ActionIdentifier {
    fn as_ref(&self) -> &str {
        &self.identifier
    }
}

impl From<&str> for ActionIdentifier {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ActionIdentifier {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn well_known_constants_match_their_names() {
        assert_eq!(ActionIdentifier::OPEN, "open");
        assert_eq!(ActionIdentifier::DISMISS, "dismiss");
        assert_eq!(ActionIdentifier::OPEN_URL, "openUrl");
        assert_eq!(ActionIdentifier::SHARE_URL, "shareUrl");

        assert_eq!(ActionIdentifier::open().as_str(), ActionIdentifier::OPEN);
        assert_eq!(ActionIdentifier::dismiss().as_str(), ActionIdentifier::DISMISS);
        assert_eq!(ActionIdentifier::open_url().as_str(), ActionIdentifier::OPEN_URL);
        assert_eq!(ActionIdentifier::share_url().as_str(), ActionIdentifier::SHARE_URL);
    }

    #[test]
    fn custom_identifiers_are_accepted() {
        let action = ActionIdentifier::from("addToBasket");
        assert_eq!(action.as_str(), "addToBasket");
        assert!(!action.is_well_known());
        assert!(ActionIdentifier::from(String::from("open")).is_well_known());
    }

    #[test]
    fn equality_and_hashing_follow_the_identifier() {
        let mut seen = HashSet::new();
        assert!(seen.insert(ActionIdentifier::open()));
        assert!(!seen.insert(ActionIdentifier::from("open")));
        assert_ne!(ActionIdentifier::open(), ActionIdentifier::dismiss());
    }
}
