//! Node decoding.
//!
//! Decoding reads a wire value into a typed tree:
//!
//! 1. Read `type` and resolve it through [`ComponentTag::resolve`].
//! 2. Read `component` using exactly the resolved variant's field layout.
//! 3. For containers, decode every child as a full node, preserving order.
//!
//! Decoding is all-or-nothing. The first failure aborts the whole tree and is reported as a
//! [`DecodeError`] carrying the path to the offending mapping (for example
//! `component.components[1].component`) and the node depth at which it occurred. There is no
//! fallback variant.
//!
//! Notes:
//! - Nesting is bounded by [`DecodeOptions::max_depth`]; deeper input fails with
//!   [`DecodeErrorKind::DepthExceeded`] before any recursion past the limit.
//! - Optional fields that are `null` are treated as absent.
//! - Unknown keys are ignored unless [`DecodeOptions::strict`] is set, so older consumers can
//!   read payloads from newer producers.

use crate::components::{Button, Group, Image, Stack, Text, TextStyle};
use crate::constants::{
    ACTION_KEY, ACTION_NAME, COMPONENTS_KEY, COMPONENT_KEY, DEFAULT_MAX_DEPTH, IDENTIFIER_KEY,
    IS_PROMINENT_KEY, MAX_SUPPORTED_DEPTH, NODE_NAME, STYLE_KEY, SUBTITLE_KEY, TEXT_KEY, TITLE_KEY,
    TYPE_KEY, URL_KEY,
};
use crate::node::Node;
use crate::tag::ComponentTag;
use crate::{ContentError, ContentResult};
use content_types::ActionIdentifier;
use serde_json::{Map, Value};
use std::fmt;

// ============================================================================
// Options
// ============================================================================

/// Decoder configuration, resolved once and passed into decode calls.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DecodeOptions {
    max_depth: usize,
    strict: bool,
}

impl DecodeOptions {
    /// Create a new `DecodeOptions`.
    ///
    /// # Arguments
    ///
    /// * `max_depth` - Maximum node nesting depth; a lone leaf has depth 1.
    /// * `strict` - Reject keys that are not part of a variant's layout.
    ///
    /// # Errors
    ///
    /// Returns [`ContentError::InvalidInput`] if `max_depth` is zero or greater than
    /// [`MAX_SUPPORTED_DEPTH`].
    pub fn new(max_depth: usize, strict: bool) -> ContentResult<Self> {
        if max_depth == 0 {
            return Err(ContentError::InvalidInput(
                "max_depth must be at least 1".into(),
            ));
        }
        if max_depth > MAX_SUPPORTED_DEPTH {
            return Err(ContentError::InvalidInput(format!(
                "max_depth must be at most {MAX_SUPPORTED_DEPTH}, got {max_depth}"
            )));
        }

        Ok(Self { max_depth, strict })
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn strict(&self) -> bool {
        self.strict
    }
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            strict: false,
        }
    }
}

// ============================================================================
// Errors
// ============================================================================

/// What went wrong while decoding a single node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecodeErrorKind {
    #[error("unknown component type '{0}'")]
    UnknownVariant(String),

    #[error("{variant}: missing required field '{field}'")]
    MissingField {
        variant: &'static str,
        field: &'static str,
    },

    #[error("{variant}: field '{field}' has the wrong type (expected {expected})")]
    TypeMismatch {
        variant: &'static str,
        field: &'static str,
        expected: &'static str,
    },

    #[error("{variant}: field '{field}' has invalid value '{value}'")]
    InvalidEnumValue {
        variant: &'static str,
        field: &'static str,
        value: String,
    },

    #[error("nesting exceeds the maximum depth of {max}")]
    DepthExceeded { max: usize },

    #[error("expected {expected} to be a mapping")]
    NotAnObject { expected: &'static str },

    #[error("{variant}: unknown field '{field}'")]
    UnknownField { variant: &'static str, field: String },
}

/// One step in a [`NodePath`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathSegment {
    Field(&'static str),
    Index(usize),
}

/// Location of a mapping inside a serialised tree, relative to the root node.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NodePath(Vec<PathSegment>);

impl NodePath {
    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for NodePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            return f.write_str("<root>");
        }

        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Field(name) if i == 0 => write!(f, "{name}")?,
                PathSegment::Field(name) => write!(f, ".{name}")?,
                PathSegment::Index(index) => write!(f, "[{index}]")?,
            }
        }
        Ok(())
    }
}

/// A decode failure attributed to exactly one node.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("decode failed at {path} (depth {depth}): {kind}")]
pub struct DecodeError {
    /// Path to the mapping being read when decoding failed.
    pub path: NodePath,
    /// Depth of the failing node; the root is at depth 1.
    pub depth: usize,
    pub kind: DecodeErrorKind,
}

// ============================================================================
// Entry point
// ============================================================================

/// Decode a wire value into a typed tree.
///
/// # Arguments
///
/// * `value` - A node envelope: `{ "type": ..., "component": ... }`.
/// * `options` - Depth limit and strictness.
///
/// # Returns
///
/// Returns the decoded root [`Node`].
///
/// # Errors
///
/// Returns [`DecodeError`] for the first node that does not match the format.
pub fn decode_value_with(value: &Value, options: &DecodeOptions) -> Result<Node, DecodeError> {
    let mut decoder = Decoder {
        options,
        path: Vec::new(),
    };

    decoder.node(value, 1).inspect_err(|err| {
        tracing::debug!(path = %err.path, depth = err.depth, "content decode failed: {}", err.kind);
    })
}

/// Decode a wire value with default [`DecodeOptions`].
pub fn decode_value(value: &Value) -> Result<Node, DecodeError> {
    decode_value_with(value, &DecodeOptions::default())
}

// ============================================================================
// Decoder
// ============================================================================

struct Decoder<'o> {
    options: &'o DecodeOptions,
    // Snapshotted into every error, so an early return may leave it unbalanced.
    path: Vec<PathSegment>,
}

impl Decoder<'_> {
    fn fail(&self, depth: usize, kind: DecodeErrorKind) -> DecodeError {
        DecodeError {
            path: NodePath(self.path.clone()),
            depth,
            kind,
        }
    }

    fn node(&mut self, value: &Value, depth: usize) -> Result<Node, DecodeError> {
        if depth > self.options.max_depth() {
            return Err(self.fail(
                depth,
                DecodeErrorKind::DepthExceeded {
                    max: self.options.max_depth(),
                },
            ));
        }

        let envelope = Body::open(NODE_NAME, value).map_err(|kind| self.fail(depth, kind))?;
        self.reject_unknown(&envelope, &[TYPE_KEY, COMPONENT_KEY], depth)?;

        let raw_tag = envelope
            .required_str(TYPE_KEY)
            .map_err(|kind| self.fail(depth, kind))?;
        let tag = ComponentTag::resolve(raw_tag).map_err(|kind| self.fail(depth, kind))?;

        let body_value = envelope
            .required(COMPONENT_KEY)
            .map_err(|kind| self.fail(depth, kind))?;

        self.path.push(PathSegment::Field(COMPONENT_KEY));
        let body = Body::open(tag.as_str(), body_value).map_err(|_| {
            self.fail(
                depth,
                DecodeErrorKind::TypeMismatch {
                    variant: NODE_NAME,
                    field: COMPONENT_KEY,
                    expected: "mapping",
                },
            )
        })?;

        tracing::trace!(tag = tag.as_str(), depth, "decoding content node");

        let node = match tag {
            ComponentTag::HStack => self.stack(&body, depth)?,
            ComponentTag::Group => self.group(&body, depth)?,
            ComponentTag::Image => self.image(&body, depth)?,
            ComponentTag::Text => self.text(&body, depth)?,
            ComponentTag::Button => self.button(&body, depth)?,
        };
        self.path.pop();

        Ok(node)
    }

    fn children(&mut self, body: &Body<'_>, depth: usize) -> Result<Vec<Node>, DecodeError> {
        let items = body
            .required_array(COMPONENTS_KEY)
            .map_err(|kind| self.fail(depth, kind))?;

        self.path.push(PathSegment::Field(COMPONENTS_KEY));
        let mut components = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            self.path.push(PathSegment::Index(index));
            components.push(self.node(item, depth + 1)?);
            self.path.pop();
        }
        self.path.pop();

        Ok(components)
    }

    fn stack(&mut self, body: &Body<'_>, depth: usize) -> Result<Node, DecodeError> {
        self.reject_unknown(body, &[COMPONENTS_KEY], depth)?;

        Ok(Node::Stack(Stack::new(self.children(body, depth)?)))
    }

    fn group(&mut self, body: &Body<'_>, depth: usize) -> Result<Node, DecodeError> {
        self.reject_unknown(body, &[COMPONENTS_KEY, IS_PROMINENT_KEY], depth)?;

        let is_prominent = body
            .optional_bool(IS_PROMINENT_KEY)
            .map_err(|kind| self.fail(depth, kind))?
            .unwrap_or(false);
        let components = self.children(body, depth)?;

        Ok(Node::Group(Group::new(components, is_prominent)))
    }

    fn image(&self, body: &Body<'_>, depth: usize) -> Result<Node, DecodeError> {
        self.reject_unknown(body, &[URL_KEY], depth)?;

        let url = body
            .required_str(URL_KEY)
            .map_err(|kind| self.fail(depth, kind))?;

        Ok(Node::Image(Image::new(url)))
    }

    fn text(&self, body: &Body<'_>, depth: usize) -> Result<Node, DecodeError> {
        self.reject_unknown(body, &[TEXT_KEY, STYLE_KEY], depth)?;

        let text = body
            .required_str(TEXT_KEY)
            .map_err(|kind| self.fail(depth, kind))?;
        let style = match body
            .optional_str(STYLE_KEY)
            .map_err(|kind| self.fail(depth, kind))?
        {
            None => TextStyle::default(),
            Some(raw) => TextStyle::from_wire(raw).ok_or_else(|| {
                self.fail(
                    depth,
                    DecodeErrorKind::InvalidEnumValue {
                        variant: body.variant,
                        field: STYLE_KEY,
                        value: raw.to_owned(),
                    },
                )
            })?,
        };

        Ok(Node::Text(Text::new(text, style)))
    }

    fn button(&mut self, body: &Body<'_>, depth: usize) -> Result<Node, DecodeError> {
        self.reject_unknown(body, &[TITLE_KEY, SUBTITLE_KEY, ACTION_KEY, URL_KEY], depth)?;

        let title = body
            .required_str(TITLE_KEY)
            .map_err(|kind| self.fail(depth, kind))?;
        let subtitle = body
            .optional_str(SUBTITLE_KEY)
            .map_err(|kind| self.fail(depth, kind))?;
        let url = body
            .optional_str(URL_KEY)
            .map_err(|kind| self.fail(depth, kind))?;

        let action_value = body
            .required(ACTION_KEY)
            .map_err(|kind| self.fail(depth, kind))?;
        let action_body = Body::open(ACTION_NAME, action_value).map_err(|_| {
            self.fail(
                depth,
                DecodeErrorKind::TypeMismatch {
                    variant: body.variant,
                    field: ACTION_KEY,
                    expected: "mapping",
                },
            )
        })?;

        self.path.push(PathSegment::Field(ACTION_KEY));
        self.reject_unknown(&action_body, &[IDENTIFIER_KEY], depth)?;
        let identifier = action_body
            .required_str(IDENTIFIER_KEY)
            .map_err(|kind| self.fail(depth, kind))?;
        self.path.pop();

        Ok(Node::Button(Button::new(
            title,
            subtitle.map(str::to_owned),
            ActionIdentifier::new(identifier),
            url.map(str::to_owned),
        )))
    }

    fn reject_unknown(
        &self,
        body: &Body<'_>,
        allowed: &[&str],
        depth: usize,
    ) -> Result<(), DecodeError> {
        if !self.options.strict() {
            return Ok(());
        }

        match body.map.keys().find(|key| !allowed.contains(&key.as_str())) {
            Some(key) => Err(self.fail(
                depth,
                DecodeErrorKind::UnknownField {
                    variant: body.variant,
                    field: key.clone(),
                },
            )),
            None => Ok(()),
        }
    }
}

// ============================================================================
// Field access
// ============================================================================

/// A mapping being read as the layout of one variant.
struct Body<'v> {
    variant: &'static str,
    map: &'v Map<String, Value>,
}

impl<'v> Body<'v> {
    fn open(variant: &'static str, value: &'v Value) -> Result<Self, DecodeErrorKind> {
        match value {
            Value::Object(map) => Ok(Self { variant, map }),
            _ => Err(DecodeErrorKind::NotAnObject { expected: variant }),
        }
    }

    fn required(&self, field: &'static str) -> Result<&'v Value, DecodeErrorKind> {
        self.map.get(field).ok_or(DecodeErrorKind::MissingField {
            variant: self.variant,
            field,
        })
    }

    fn mismatch(&self, field: &'static str, expected: &'static str) -> DecodeErrorKind {
        DecodeErrorKind::TypeMismatch {
            variant: self.variant,
            field,
            expected,
        }
    }

    fn required_str(&self, field: &'static str) -> Result<&'v str, DecodeErrorKind> {
        self.required(field)?
            .as_str()
            .ok_or_else(|| self.mismatch(field, "string"))
    }

    fn required_array(&self, field: &'static str) -> Result<&'v Vec<Value>, DecodeErrorKind> {
        self.required(field)?
            .as_array()
            .ok_or_else(|| self.mismatch(field, "sequence"))
    }

    fn optional_str(&self, field: &'static str) -> Result<Option<&'v str>, DecodeErrorKind> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.as_str())),
            Some(_) => Err(self.mismatch(field, "string")),
        }
    }

    fn optional_bool(&self, field: &'static str) -> Result<Option<bool>, DecodeErrorKind> {
        match self.map.get(field) {
            None | Some(Value::Null) => Ok(None),
            Some(Value::Bool(b)) => Ok(Some(*b)),
            Some(_) => Err(self.mismatch(field, "boolean")),
        }
    }
}
