//! Node encoding.
//!
//! Encoding is a pure mapping from a typed tree to its wire value:
//!
//! ```text
//! { "type": <canonical tag>, "component": <variant body> }
//! ```
//!
//! Containers encode each child through the same procedure. Encoding always emits the canonical
//! tag, never an alias, and always writes defaulted fields (`style`, `isProminent`) explicitly.
//! Absent optional button fields are omitted.

use crate::components::{Button, Group, Image, Stack, Text};
use crate::constants::{
    ACTION_KEY, COMPONENTS_KEY, COMPONENT_KEY, IDENTIFIER_KEY, IS_PROMINENT_KEY, STYLE_KEY,
    SUBTITLE_KEY, TEXT_KEY, TITLE_KEY, TYPE_KEY, URL_KEY,
};
use crate::node::Node;
use serde_json::{Map, Value};

/// Encode a node, and all of its descendants, to a wire value.
pub fn encode(node: &Node) -> Value {
    let mut envelope = Map::new();
    envelope.insert(TYPE_KEY.into(), Value::String(node.tag().as_str().into()));
    envelope.insert(COMPONENT_KEY.into(), encode_body(node));
    Value::Object(envelope)
}

fn encode_body(node: &Node) -> Value {
    let body = match node {
        Node::Stack(stack) => stack_body(stack),
        Node::Group(group) => group_body(group),
        Node::Image(image) => image_body(image),
        Node::Text(text) => text_body(text),
        Node::Button(button) => button_body(button),
    };
    Value::Object(body)
}

fn children(components: &[Node]) -> Value {
    Value::Array(components.iter().map(encode).collect())
}

fn stack_body(stack: &Stack) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(COMPONENTS_KEY.into(), children(&stack.components));
    body
}

fn group_body(group: &Group) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(COMPONENTS_KEY.into(), children(&group.components));
    body.insert(IS_PROMINENT_KEY.into(), Value::Bool(group.is_prominent));
    body
}

fn image_body(image: &Image) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(URL_KEY.into(), Value::String(image.url.clone()));
    body
}

fn text_body(text: &Text) -> Map<String, Value> {
    let mut body = Map::new();
    body.insert(TEXT_KEY.into(), Value::String(text.text.clone()));
    body.insert(STYLE_KEY.into(), Value::String(text.style.to_wire().into()));
    body
}

fn button_body(button: &Button) -> Map<String, Value> {
    let mut action = Map::new();
    action.insert(
        IDENTIFIER_KEY.into(),
        Value::String(button.action.as_str().into()),
    );

    let mut body = Map::new();
    body.insert(TITLE_KEY.into(), Value::String(button.title.clone()));
    if let Some(subtitle) = &button.subtitle {
        body.insert(SUBTITLE_KEY.into(), Value::String(subtitle.clone()));
    }
    body.insert(ACTION_KEY.into(), Value::Object(action));
    if let Some(url) = &button.url {
        body.insert(URL_KEY.into(), Value::String(url.clone()));
    }
    body
}
