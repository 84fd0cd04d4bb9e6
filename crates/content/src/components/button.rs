use crate::tag::ComponentTag;
use content_types::ActionIdentifier;

/// An interactive leaf that triggers an action.
///
/// `url` is a secondary locator the action may act on (for example the target of
/// [`ActionIdentifier::OPEN_URL`]). Identity is the title.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Button {
    pub title: String,
    pub subtitle: Option<String>,
    pub action: ActionIdentifier,
    pub url: Option<String>,
}

impl Button {
    pub const TAG: ComponentTag = ComponentTag::Button;

    pub fn new(
        title: impl Into<String>,
        subtitle: Option<String>,
        action: impl Into<ActionIdentifier>,
        url: Option<String>,
    ) -> Self {
        Self {
            title: title.into(),
            subtitle,
            action: action.into(),
            url,
        }
    }

    pub fn identity(&self) -> &str {
        &self.title
    }
}
