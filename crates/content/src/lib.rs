//! Tagged UI-content wire format.
//!
//! This crate encodes and decodes a small declarative content tree (stacks, groups, images,
//! text and buttons) as self-describing structured data, so that a producer can emit a tree and
//! consumers on different release cadences can rebuild the same typed tree.
//!
//! Every node on the wire is an envelope naming its variant:
//!
//! ```json
//! { "type": "text", "component": { "text": "Hello", "style": "title" } }
//! ```
//!
//! Responsibilities:
//! - The variant catalog ([`components`]) and the closed tag registry ([`ComponentTag`]),
//!   including legacy aliases for renamed tags.
//! - Encoding ([`encode`]) and depth-bounded, path-reporting decoding ([`decode_value_with`]).
//! - Identity-based node equality for keying ([`Node`]).
//! - Text boundary helpers for JSON and YAML.
//!
//! Rendering, transport and authoring syntax are left to callers.

pub mod components;
pub mod constants;
pub mod decode;
pub mod encode;
pub mod node;
pub mod tag;

pub use components::{Button, Group, Image, Stack, Text, TextStyle};
pub use content_types::ActionIdentifier;
pub use decode::{
    decode_value, decode_value_with, DecodeError, DecodeErrorKind, DecodeOptions, NodePath,
    PathSegment,
};
pub use encode::encode;
pub use node::Node;
pub use tag::ComponentTag;

/// Errors returned by the content codec.
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid JSON: {0}")]
    InvalidJson(serde_json::Error),

    #[error("invalid YAML: {0}")]
    InvalidYaml(serde_yaml::Error),

    #[error("failed to serialise JSON: {0}")]
    JsonSerialization(serde_json::Error),

    #[error("failed to serialise YAML: {0}")]
    YamlSerialization(serde_yaml::Error),

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Type alias for Results that can fail with a [`ContentError`].
pub type ContentResult<T> = Result<T, ContentError>;

/// Read a content tree from JSON text with default [`DecodeOptions`].
pub fn read_json(json: &str) -> ContentResult<Node> {
    read_json_with(json, &DecodeOptions::default())
}

/// Read a content tree from JSON text.
///
/// # Arguments
///
/// * `json` - JSON text holding a single node envelope.
/// * `options` - Depth limit and strictness for the decoder.
///
/// # Errors
///
/// Returns [`ContentError`] if:
/// - the text is not valid JSON ([`ContentError::InvalidJson`]),
/// - the value does not match the wire format ([`ContentError::Decode`]).
pub fn read_json_with(json: &str, options: &DecodeOptions) -> ContentResult<Node> {
    let value: serde_json::Value = serde_json::from_str(json).map_err(ContentError::InvalidJson)?;
    Ok(decode_value_with(&value, options)?)
}

/// Write a content tree as compact JSON.
pub fn write_json(node: &Node) -> ContentResult<String> {
    serde_json::to_string(&encode(node)).map_err(ContentError::JsonSerialization)
}

/// Write a content tree as indented JSON.
pub fn write_json_pretty(node: &Node) -> ContentResult<String> {
    serde_json::to_string_pretty(&encode(node)).map_err(ContentError::JsonSerialization)
}

/// Read a content tree from YAML text with default [`DecodeOptions`].
pub fn read_yaml(yaml: &str) -> ContentResult<Node> {
    read_yaml_with(yaml, &DecodeOptions::default())
}

/// Read a content tree from YAML text.
///
/// The YAML document is read into the same value model as JSON, so the two formats share one
/// decoder and report identical errors.
///
/// # Errors
///
/// Returns [`ContentError`] if:
/// - the text is not valid YAML, or has non-string mapping keys ([`ContentError::InvalidYaml`]),
/// - the value does not match the wire format ([`ContentError::Decode`]).
pub fn read_yaml_with(yaml: &str, options: &DecodeOptions) -> ContentResult<Node> {
    let value: serde_json::Value = serde_yaml::from_str(yaml).map_err(ContentError::InvalidYaml)?;
    Ok(decode_value_with(&value, options)?)
}

/// Write a content tree as YAML.
pub fn write_yaml(node: &Node) -> ContentResult<String> {
    serde_yaml::to_string(&encode(node)).map_err(ContentError::YamlSerialization)
}
