//! CLI runtime configuration.
//!
//! Decoder settings are resolved once at startup and passed into commands. Precedence, highest
//! first: command-line flags, environment variables, the optional YAML config file, defaults.
//!
//! Environment variables are read by `main` and handed in as [`EnvOverrides`], so resolution
//! itself never touches process-wide state.

use anyhow::{bail, Context};
use content_codec::{
    constants::{DEFAULT_MAX_DEPTH, MAX_SUPPORTED_DEPTH},
    DecodeOptions,
};
use serde::Deserialize;
use std::path::Path;

/// Environment variable overriding the maximum nesting depth.
pub const MAX_DEPTH_ENV: &str = "CONTENT_MAX_DEPTH";

/// Environment variable enabling strict decoding.
pub const STRICT_ENV: &str = "CONTENT_STRICT";

/// Optional YAML config file.
#[derive(Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    #[serde(default)]
    pub max_depth: Option<usize>,
    #[serde(default)]
    pub strict: Option<bool>,
}

/// Raw environment values, captured once at startup.
#[derive(Debug, Default)]
pub struct EnvOverrides {
    pub max_depth: Option<String>,
    pub strict: Option<String>,
}

impl EnvOverrides {
    pub fn from_env() -> Self {
        Self {
            max_depth: std::env::var(MAX_DEPTH_ENV).ok(),
            strict: std::env::var(STRICT_ENV).ok(),
        }
    }
}

/// Settings given on the command line.
#[derive(Debug, Default)]
pub struct FlagOverrides {
    pub max_depth: Option<usize>,
    pub strict: bool,
}

/// Strictly parse the YAML config file.
///
/// This uses `serde_path_to_error` to surface the path to a failing key (e.g. `max_depth`).
///
/// # Errors
///
/// Returns an error if the file cannot be read, is not YAML, or contains unknown keys.
pub fn read_config_file(path: &Path) -> anyhow::Result<ConfigFile> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read config file {}", path.display()))?;
    let deserializer = serde_yaml::Deserializer::from_str(&text);

    match serde_path_to_error::deserialize(deserializer) {
        Ok(parsed) => Ok(parsed),
        Err(err) => {
            let path = err.path().to_string();
            let source = err.into_inner();
            let path = if path.is_empty() {
                "<root>"
            } else {
                path.as_str()
            };
            bail!("config schema mismatch at {path}: {source}")
        }
    }
}

/// Resolve decoder options from all configuration sources.
///
/// # Errors
///
/// Returns an error if an environment value cannot be parsed or the resolved depth is zero or
/// above [`MAX_SUPPORTED_DEPTH`].
pub fn resolve_decode_options(
    file: Option<&ConfigFile>,
    env: &EnvOverrides,
    flags: &FlagOverrides,
) -> anyhow::Result<DecodeOptions> {
    let env_max_depth = env
        .max_depth
        .as_deref()
        .map(|raw| {
            raw.trim()
                .parse::<usize>()
                .with_context(|| format!("{MAX_DEPTH_ENV} must be a positive integer, got '{raw}'"))
        })
        .transpose()?;
    let env_strict = env
        .strict
        .as_deref()
        .map(|raw| parse_bool(raw).with_context(|| format!("{STRICT_ENV} is not a boolean")))
        .transpose()?;

    let max_depth = flags
        .max_depth
        .or(env_max_depth)
        .or(file.and_then(|f| f.max_depth))
        .unwrap_or(DEFAULT_MAX_DEPTH);
    let strict = flags.strict
        || env_strict
            .or(file.and_then(|f| f.strict))
            .unwrap_or(false);

    tracing::debug!(max_depth, strict, "resolved decode options");

    Ok(DecodeOptions::new(max_depth, strict)?)
}

fn parse_bool(raw: &str) -> anyhow::Result<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => bail!("expected true/false, got '{other}'"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        file.write_all(contents.as_bytes()).expect("write config");
        file
    }

    #[test]
    fn defaults_apply_without_any_source() {
        let options =
            resolve_decode_options(None, &EnvOverrides::default(), &FlagOverrides::default())
                .expect("resolve");
        assert_eq!(options, DecodeOptions::default());
    }

    #[test]
    fn flags_override_env_and_env_overrides_file() {
        let file = ConfigFile {
            max_depth: Some(10),
            strict: Some(false),
        };
        let env = EnvOverrides {
            max_depth: Some("12".into()),
            strict: Some("true".into()),
        };

        let options = resolve_decode_options(Some(&file), &env, &FlagOverrides::default())
            .expect("resolve");
        assert_eq!(options.max_depth(), 12);
        assert!(options.strict());

        let flags = FlagOverrides {
            max_depth: Some(3),
            strict: false,
        };
        let options = resolve_decode_options(Some(&file), &env, &flags).expect("resolve");
        assert_eq!(options.max_depth(), 3);
    }

    #[test]
    fn file_values_apply_when_nothing_else_is_set() {
        let file = ConfigFile {
            max_depth: Some(6),
            strict: Some(true),
        };
        let options =
            resolve_decode_options(Some(&file), &EnvOverrides::default(), &FlagOverrides::default())
                .expect("resolve");
        assert_eq!(options.max_depth(), 6);
        assert!(options.strict());
    }

    #[test]
    fn rejects_unparseable_env_values() {
        let env = EnvOverrides {
            max_depth: Some("deep".into()),
            strict: None,
        };
        let err = resolve_decode_options(None, &env, &FlagOverrides::default())
            .expect_err("should reject");
        assert!(err.to_string().contains(MAX_DEPTH_ENV));

        let env = EnvOverrides {
            max_depth: None,
            strict: Some("maybe".into()),
        };
        assert!(resolve_decode_options(None, &env, &FlagOverrides::default()).is_err());
    }

    #[test]
    fn rejects_zero_depth() {
        let flags = FlagOverrides {
            max_depth: Some(0),
            strict: false,
        };
        assert!(resolve_decode_options(None, &EnvOverrides::default(), &flags).is_err());
    }

    #[test]
    fn rejects_depth_above_the_supported_maximum() {
        let env = EnvOverrides {
            max_depth: Some((MAX_SUPPORTED_DEPTH + 1).to_string()),
            strict: None,
        };
        let err = resolve_decode_options(None, &env, &FlagOverrides::default())
            .expect_err("should reject");
        assert!(err.to_string().contains("at most"), "{err}");

        let file = ConfigFile {
            max_depth: Some(MAX_SUPPORTED_DEPTH),
            strict: None,
        };
        let options =
            resolve_decode_options(Some(&file), &EnvOverrides::default(), &FlagOverrides::default())
                .expect("resolve");
        assert_eq!(options.max_depth(), MAX_SUPPORTED_DEPTH);
    }

    #[test]
    fn reads_config_file() {
        let file = write_config("max_depth: 20\nstrict: true\n");
        let parsed = read_config_file(file.path()).expect("parse config");
        assert_eq!(
            parsed,
            ConfigFile {
                max_depth: Some(20),
                strict: Some(true)
            }
        );
    }

    #[test]
    fn config_file_errors_name_the_offending_key() {
        let file = write_config("max_depth: twenty\n");
        let err = read_config_file(file.path()).expect_err("should reject");
        assert!(err.to_string().contains("at max_depth"), "{err}");

        let file = write_config("strict: true\ncolour: blue\n");
        let err = read_config_file(file.path()).expect_err("should reject unknown key");
        assert!(err.to_string().contains("colour"), "{err}");
    }

    #[test]
    fn parses_common_boolean_spellings() {
        assert!(parse_bool("TRUE").expect("true"));
        assert!(parse_bool(" yes ").expect("yes"));
        assert!(!parse_bool("0").expect("0"));
        assert!(!parse_bool("off").expect("off"));
    }
}
