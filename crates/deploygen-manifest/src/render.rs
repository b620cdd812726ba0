//! Block-style YAML output for the manifest.
//!
//! The document goes through `serde_yaml::Value` (insertion ordered) and is then
//! written by hand so that scalars a YAML 1.1 reader would resolve to something
//! other than a string (`yes`, `on`, `y`, `~`, `0x1f`, `1:20` ...) come out quoted.

use std::{fs, path::Path};

use deploygen_common::{error::DeploygenResult, info};
use serde_yaml::Value;

use crate::k8s::DeploymentManifest;

const PADDING: &str = "  ";

pub fn to_yaml(manifest: &DeploymentManifest) -> DeploygenResult<String> {
    let value = serde_yaml::to_value(manifest)?;
    let mut buf = String::new();
    emit(&value, &mut buf, &mut String::new())?;
    buf.push('\n');
    Ok(buf)
}

/// Renders the manifest fully in memory, then writes it to `path` in one go.
pub fn write_manifest(manifest: &DeploymentManifest, path: &Path) -> DeploygenResult {
    let yaml = to_yaml(manifest)?;
    fs::write(path, yaml)?;
    info!("Wrote deployment manifest to {}", path.display());
    Ok(())
}

fn emit(value: &Value, buf: &mut String, cur_padding: &mut String) -> DeploygenResult {
    match value {
        Value::Null => buf.push_str("null"),
        Value::Bool(b) => buf.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => buf.push_str(&n.to_string()),
        Value::String(s) => emit_str(s, buf),
        Value::Sequence(seq) if seq.is_empty() => buf.push_str("[]"),
        Value::Sequence(seq) => {
            for (i, item) in seq.iter().enumerate() {
                if i != 0 {
                    buf.push('\n');
                    buf.push_str(cur_padding);
                }
                buf.push('-');
                match item {
                    Value::Sequence(inner) if !inner.is_empty() => {
                        buf.push('\n');
                        buf.push_str(cur_padding);
                        buf.push_str(PADDING);
                    }
                    _ => buf.push(' '),
                }
                let prev_len = cur_padding.len();
                if is_nested(item) {
                    cur_padding.push_str(PADDING);
                }
                emit(item, buf, cur_padding)?;
                cur_padding.truncate(prev_len);
            }
        }
        Value::Mapping(map) if map.is_empty() => buf.push_str("{}"),
        Value::Mapping(map) => {
            for (i, (key, item)) in map.iter().enumerate() {
                if i != 0 {
                    buf.push('\n');
                    buf.push_str(cur_padding);
                }
                let key = key.as_str().ok_or_else(|| {
                    anyhow::anyhow!("mapping keys must be strings, found {key:?}")
                })?;
                emit_str(key, buf);
                buf.push(':');

                let prev_len = cur_padding.len();
                match item {
                    // Sequences inside mappings are not indented.
                    Value::Sequence(seq) if !seq.is_empty() => {
                        buf.push('\n');
                        buf.push_str(cur_padding);
                    }
                    Value::Mapping(inner) if !inner.is_empty() => {
                        buf.push('\n');
                        buf.push_str(cur_padding);
                        buf.push_str(PADDING);
                        cur_padding.push_str(PADDING);
                    }
                    _ => buf.push(' '),
                }
                emit(item, buf, cur_padding)?;
                cur_padding.truncate(prev_len);
            }
        }
        Value::Tagged(tagged) => {
            return Err(anyhow::anyhow!("tagged value {} cannot be rendered", tagged.tag).into())
        }
    }
    Ok(())
}

fn is_nested(value: &Value) -> bool {
    match value {
        Value::Sequence(seq) => !seq.is_empty(),
        Value::Mapping(map) => !map.is_empty(),
        _ => false,
    }
}

fn emit_str(s: &str, buf: &mut String) {
    if s.contains(|c: char| c.is_control()) {
        emit_double_quoted(s, buf);
    } else if needs_quotes(s) {
        buf.push('\'');
        buf.push_str(&s.replace('\'', "''"));
        buf.push('\'');
    } else {
        buf.push_str(s);
    }
}

fn emit_double_quoted(s: &str, buf: &mut String) {
    buf.push('"');
    for c in s.chars() {
        match c {
            '"' => buf.push_str("\\\""),
            '\\' => buf.push_str("\\\\"),
            '\n' => buf.push_str("\\n"),
            '\r' => buf.push_str("\\r"),
            '\t' => buf.push_str("\\t"),
            c if c.is_control() => buf.push_str(&format!("\\u{:04x}", c as u32)),
            c => buf.push(c),
        }
    }
    buf.push('"');
}

/// Whether a plain scalar would be read back as anything but this exact
/// string by a YAML 1.1 or 1.2 parser.
fn needs_quotes(s: &str) -> bool {
    s.is_empty()
        || s.starts_with(' ')
        || s.ends_with(' ')
        || s.starts_with(|c: char| {
            matches!(
                c,
                '&' | '*' | '?' | '|' | '-' | '<' | '>' | '=' | '!' | '%' | '@' | '`' | '#'
                    | '\'' | '"' | '{' | '}' | '[' | ']' | ',' | '.' | '+' | ':'
            ) || c.is_ascii_digit()
        })
        || s.ends_with(':')
        || s.contains(": ")
        || s.contains(" #")
        || s.contains(|c: char| matches!(c, '{' | '}' | '[' | ']' | ',' | '\\' | '"' | '\'' | '`'))
        || [
            // https://yaml.org/type/bool.html
            "y", "Y", "yes", "Yes", "YES", "n", "N", "no", "No", "NO", "true", "True", "TRUE",
            "false", "False", "FALSE", "on", "On", "ON", "off", "Off", "OFF",
            // https://yaml.org/type/null.html
            "null", "Null", "NULL", "~",
        ]
        .contains(&s)
        || s.parse::<f64>().is_ok()
}
