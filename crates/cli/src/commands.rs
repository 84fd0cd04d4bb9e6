//! Subcommand implementations.
//!
//! Each command takes the raw input text and returns the text to print, so commands can be
//! tested without a terminal.

use anyhow::Context;
use clap::ValueEnum;
use content_codec::{
    read_json_with, read_yaml_with, write_json, write_json_pretty, write_yaml, ContentResult,
    DecodeOptions, Node,
};
use std::io::Read;
use std::path::Path;

/// Text format of a payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Yaml,
}

impl Format {
    /// Pick a format from an explicit choice, falling back to the file extension.
    ///
    /// Anything that is not `.yaml`/`.yml` (including stdin) is treated as JSON.
    pub fn detect(input: &str, explicit: Option<Format>) -> Format {
        if let Some(format) = explicit {
            return format;
        }

        match Path::new(input).extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                Format::Yaml
            }
            _ => Format::Json,
        }
    }
}

/// Read a payload from a file, or from stdin when `input` is `-`.
pub fn read_input(input: &str) -> anyhow::Result<String> {
    if input == "-" {
        let mut text = String::new();
        std::io::stdin()
            .read_to_string(&mut text)
            .context("failed to read payload from stdin")?;
        return Ok(text);
    }

    std::fs::read_to_string(input).with_context(|| format!("failed to read payload {input}"))
}

fn decode(text: &str, format: Format, options: &DecodeOptions) -> ContentResult<Node> {
    match format {
        Format::Json => read_json_with(text, options),
        Format::Yaml => read_yaml_with(text, options),
    }
}

// ============================================================================
// validate
// ============================================================================

/// Decode a payload and summarise it.
///
/// # Errors
///
/// Returns the decode error, including its path, if the payload does not match the format.
pub fn cmd_validate(text: &str, format: Format, options: &DecodeOptions) -> anyhow::Result<String> {
    let node = decode(text, format, options).context("payload is not valid content")?;

    tracing::info!(
        root = node.tag().as_str(),
        nodes = node.node_count(),
        "payload validated"
    );

    Ok(format!(
        "ok: {} root, {} nodes, depth {}",
        node.tag(),
        node.node_count(),
        node.depth()
    ))
}

// ============================================================================
// normalize
// ============================================================================

/// Decode a payload and re-encode it canonically.
///
/// Legacy tags are replaced by canonical ones and defaulted fields are written explicitly.
pub fn cmd_normalize(
    text: &str,
    from: Format,
    to: Format,
    pretty: bool,
    options: &DecodeOptions,
) -> anyhow::Result<String> {
    let node = decode(text, from, options).context("payload is not valid content")?;

    let output = match (to, pretty) {
        (Format::Json, false) => write_json(&node)?,
        (Format::Json, true) => write_json_pretty(&node)?,
        (Format::Yaml, _) => write_yaml(&node)?,
    };

    tracing::info!(?from, ?to, nodes = node.node_count(), "payload normalised");

    Ok(output)
}

// ============================================================================
// tree
// ============================================================================

/// Render an indented outline of a payload: one line per node with its tag and identity.
pub fn cmd_tree(text: &str, format: Format, options: &DecodeOptions) -> anyhow::Result<String> {
    let node = decode(text, format, options).context("payload is not valid content")?;
    Ok(render_tree(&node))
}

fn render_tree(root: &Node) -> String {
    let mut lines = Vec::new();
    root.walk(|node, depth| {
        let indent = "  ".repeat(depth - 1);
        // Empty containers only have a generated identity, which means nothing to a reader.
        if node.tag().is_container() && node.children().is_empty() {
            lines.push(format!("{indent}{} (empty)", node.tag()));
        } else {
            lines.push(format!("{indent}{} \"{}\"", node.tag(), node.identity()));
        }
    });
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const LEGACY_PAYLOAD: &str = r#"{
        "type": "hstack",
        "component": {
            "components": [
                {
                    "type": "vstack",
                    "component": {
                        "components": [
                            { "type": "text", "component": { "text": "Hello" } },
                            {
                                "type": "button",
                                "component": { "title": "Go", "action": { "identifier": "open" } }
                            }
                        ]
                    }
                },
                { "type": "group", "component": { "components": [] } }
            ]
        }
    }"#;

    #[test]
    fn detects_format_from_extension() {
        assert_eq!(Format::detect("screen.yaml", None), Format::Yaml);
        assert_eq!(Format::detect("screen.YML", None), Format::Yaml);
        assert_eq!(Format::detect("screen.json", None), Format::Json);
        assert_eq!(Format::detect("-", None), Format::Json);
        assert_eq!(Format::detect("screen.json", Some(Format::Yaml)), Format::Yaml);
    }

    #[test]
    fn reads_input_files() {
        let mut file = tempfile::Builder::new()
            .suffix(".json")
            .tempfile()
            .expect("temp file");
        file.write_all(LEGACY_PAYLOAD.as_bytes()).expect("write");

        let path = file.path().to_str().expect("utf-8 path");
        let text = read_input(path).expect("read");
        assert_eq!(Format::detect(path, None), Format::Json);
        assert!(cmd_validate(&text, Format::Json, &DecodeOptions::default()).is_ok());
    }

    #[test]
    fn missing_input_file_is_reported() {
        let err = read_input("/definitely/not/here.json").expect_err("should fail");
        assert!(err.to_string().contains("failed to read payload"));
    }

    #[test]
    fn validate_summarises_the_tree() {
        let summary =
            cmd_validate(LEGACY_PAYLOAD, Format::Json, &DecodeOptions::default()).expect("valid");
        assert_eq!(summary, "ok: hstack root, 5 nodes, depth 3");
    }

    #[test]
    fn validate_reports_decode_path() {
        let payload = r#"{"type":"group","component":{"components":[{"type":"carousel","component":{}}]}}"#;
        let err = cmd_validate(payload, Format::Json, &DecodeOptions::default())
            .expect_err("should fail");
        let chain = format!("{err:#}");
        assert!(chain.contains("component.components[0]"), "{chain}");
        assert!(chain.contains("carousel"), "{chain}");
    }

    #[test]
    fn validate_honours_depth_limit() {
        let options = DecodeOptions::new(2, false).expect("options");
        let err = cmd_validate(LEGACY_PAYLOAD, Format::Json, &options).expect_err("too deep");
        assert!(format!("{err:#}").contains("maximum depth of 2"));
    }

    #[test]
    fn normalize_rewrites_legacy_tags_and_defaults() {
        let output = cmd_normalize(
            LEGACY_PAYLOAD,
            Format::Json,
            Format::Json,
            false,
            &DecodeOptions::default(),
        )
        .expect("normalise");

        assert!(!output.contains("vstack"));
        assert!(output.contains(r#""style":"body""#));
        assert!(output.contains(r#""isProminent":false"#));

        let again = cmd_normalize(&output, Format::Json, Format::Json, false, &DecodeOptions::default())
            .expect("normalise twice");
        assert_eq!(output, again);
    }

    #[test]
    fn normalize_converts_between_formats() {
        let yaml = cmd_normalize(
            LEGACY_PAYLOAD,
            Format::Json,
            Format::Yaml,
            false,
            &DecodeOptions::default(),
        )
        .expect("to yaml");
        assert!(yaml.lines().any(|line| line == "type: hstack"));

        let json = cmd_normalize(&yaml, Format::Yaml, Format::Json, true, &DecodeOptions::default())
            .expect("back to json");
        let direct = cmd_normalize(
            LEGACY_PAYLOAD,
            Format::Json,
            Format::Json,
            true,
            &DecodeOptions::default(),
        )
        .expect("direct");
        assert_eq!(json, direct);
    }

    #[test]
    fn tree_outlines_tags_and_identities() {
        let outline = cmd_tree(LEGACY_PAYLOAD, Format::Json, &DecodeOptions::default())
            .expect("tree");
        assert_eq!(
            outline,
            [
                "hstack \"Hello\"",
                "  group \"Hello\"",
                "    text \"Hello\"",
                "    button \"Go\"",
                "  group (empty)",
            ]
            .join("\n")
        );
    }
}
