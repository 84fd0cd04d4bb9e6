use crate::tag::ComponentTag;

/// An image referenced by locator (typically a URL).
///
/// Two images with the same locator are the same node.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Image {
    pub url: String,
}

impl Image {
    pub const TAG: ComponentTag = ComponentTag::Image;

    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    pub fn identity(&self) -> &str {
        &self.url
    }
}
