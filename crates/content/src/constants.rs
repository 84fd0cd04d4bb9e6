//! Constants used throughout the content codec.
//!
//! Wire keys are collected here so the encoder and decoder cannot drift apart.

/// Default maximum node nesting depth accepted by the decoder.
pub const DEFAULT_MAX_DEPTH: usize = 32;

/// Largest `max_depth` the decoder can be configured with.
///
/// Text input is parsed by `serde_json`/`serde_yaml` before decoding, and both stop at 128 levels
/// of nesting. Each node level costs three of those (node, body, child list) and a leaf body can
/// hold one more mapping, so a payload one node past this limit still parses and is rejected by
/// the decoder's own depth guard.
pub const MAX_SUPPORTED_DEPTH: usize = 40;

/// Envelope key holding the component tag.
pub const TYPE_KEY: &str = "type";

/// Envelope key holding the variant body.
pub const COMPONENT_KEY: &str = "component";

/// Name used for the envelope in decode errors, where no variant is known yet.
pub const NODE_NAME: &str = "node";

/// Name used for the button action mapping in decode errors.
pub const ACTION_NAME: &str = "action";

pub const COMPONENTS_KEY: &str = "components";
pub const IS_PROMINENT_KEY: &str = "isProminent";
pub const URL_KEY: &str = "url";
pub const TEXT_KEY: &str = "text";
pub const STYLE_KEY: &str = "style";
pub const TITLE_KEY: &str = "title";
pub const SUBTITLE_KEY: &str = "subtitle";
pub const ACTION_KEY: &str = "action";
pub const IDENTIFIER_KEY: &str = "identifier";
