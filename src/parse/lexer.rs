//! Physical-line splitting, unfolding, and content-line tokenizing.
//!
//! vCard folds long logical lines across physical lines by prefixing the
//! continuation with whitespace. The lexer reverses that, then splits each
//! logical line into group, name, parameters, and values.

use crate::core::Parameter;
use crate::error::{VCardError, VCardResult};

/// Splits raw file content into physical lines, enforcing CRLF terminators.
///
/// Every line must end with the exact `\r\n` pair; only the final line of
/// the file may lack a terminator.
///
/// ## Errors
/// Returns [`VCardError::InvalidCard`] on a line terminated by a bare `\n`.
pub(crate) fn physical_lines(input: &str) -> VCardResult<Vec<&str>> {
    let mut lines = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let Some(pos) = rest.find('\n') else {
            // Final line without a terminator.
            lines.push(rest);
            break;
        };

        let line = rest[..pos].strip_suffix('\r').ok_or_else(|| {
            VCardError::card_at(lines.len() + 1, "line not terminated with CRLF")
        })?;
        lines.push(line);
        rest = &rest[pos + 1..];
    }

    Ok(lines)
}

/// Returns whether a physical line is one of the envelope markers.
///
/// Matches on the literal marker prefix, so envelope lines are recognized
/// before any tokenization happens.
pub(crate) fn is_envelope_line(line: &str) -> bool {
    line.starts_with("BEGIN") || line.starts_with("VERSION") || line.starts_with("END")
}

/// Reassembles logical lines from physical lines, resolving folding.
///
/// A continuation line starts with a space or tab. The leading whitespace
/// run is stripped; when the run contained more than one space character, a
/// single space is inserted before the remainder (the folding-whitespace
/// preservation heuristic). Envelope markers and empty lines are excluded
/// from the output.
///
/// Each logical line is paired with the one-based physical line number of
/// its first segment, so diagnostics point at the line as it appears in the
/// file.
pub(crate) fn unfold(lines: &[&str]) -> Vec<(String, usize)> {
    let mut logical: Vec<(String, usize)> = Vec::new();

    for (index, line) in lines.iter().enumerate() {
        if line.is_empty() || is_envelope_line(line) {
            continue;
        }

        if line.starts_with([' ', '\t']) {
            let run: &str = &line[..line.len() - line.trim_start_matches([' ', '\t']).len()];
            let space_count = run.matches(' ').count();
            let remainder = line.trim_start_matches([' ', '\t']);

            if let Some((prev, _)) = logical.last_mut() {
                if space_count > 1 {
                    prev.push(' ');
                }
                prev.push_str(remainder);
            } else {
                // Continuation with nothing to continue; treat as a fresh line.
                logical.push((remainder.to_string(), index + 1));
            }
        } else {
            logical.push(((*line).to_string(), index + 1));
        }
    }

    logical
}

/// A tokenized logical line before record assembly.
#[derive(Debug, Clone)]
pub(crate) struct ContentLine {
    /// Group prefix, or empty.
    pub group: String,
    /// Property name.
    pub name: String,
    /// Parameters in order of appearance.
    pub params: Vec<Parameter>,
    /// Values in order of appearance, empty values preserved.
    pub values: Vec<String>,
    /// The raw value segment, before splitting on semicolons.
    pub raw_value: String,
}

impl ContentLine {
    /// Returns whether a `VALUE=text` parameter marks the value as free text.
    pub(crate) fn is_text_value(&self) -> bool {
        self.params.iter().any(Parameter::is_text_marker)
    }

    /// Converts into a generic [`Property`](crate::core::Property).
    pub(crate) fn into_property(self) -> crate::core::Property {
        crate::core::Property {
            name: self.name,
            group: self.group,
            params: self.params,
            values: self.values,
        }
    }
}

/// Tokenizes a logical line into `[group.]name[;param=value]*:value[;value]*`.
///
/// ## Errors
/// Returns [`VCardError::InvalidProperty`] when the colon is missing, the
/// value segment is empty, the name is empty, or a parameter segment is not
/// exactly `name=value` with both sides non-empty.
pub(crate) fn parse_content_line(line: &str, line_num: usize) -> VCardResult<ContentLine> {
    let colon = find_unescaped(line, ':')
        .ok_or_else(|| VCardError::property_at(line_num, "missing colon separator"))?;

    let head = &line[..colon];
    let raw_value = &line[colon + 1..];
    if raw_value.is_empty() {
        return Err(VCardError::property_at(line_num, "empty property value"));
    }

    let mut segments = head.split(';');
    let name_segment = segments.next().unwrap_or("");

    let (group, name) = match name_segment.find('.') {
        Some(dot) => (&name_segment[..dot], &name_segment[dot + 1..]),
        None => ("", name_segment),
    };
    if name.is_empty() {
        return Err(VCardError::property_at(line_num, "empty property name"));
    }

    let mut params = Vec::new();
    for segment in segments {
        if segment.matches('=').count() != 1 {
            return Err(VCardError::property_at(
                line_num,
                format!("parameter must be name=value: {segment}"),
            ));
        }
        let Some((param_name, param_value)) = segment.split_once('=') else {
            return Err(VCardError::property_at(line_num, "malformed parameter"));
        };
        if param_name.is_empty() || param_value.is_empty() {
            return Err(VCardError::property_at(
                line_num,
                format!("parameter with empty name or value: {segment}"),
            ));
        }
        params.push(Parameter::new(param_name, param_value));
    }

    Ok(ContentLine {
        group: group.to_string(),
        name: name.to_string(),
        params,
        values: split_unescaped(raw_value, ';'),
        raw_value: raw_value.to_string(),
    })
}

/// Finds the byte position of the first unescaped occurrence of `target`.
fn find_unescaped(s: &str, target: char) -> Option<usize> {
    let mut escaped = false;
    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == target {
            return Some(i);
        }
    }
    None
}

/// Splits on unescaped occurrences of `sep`, preserving empty segments.
fn split_unescaped(s: &str, sep: char) -> Vec<String> {
    let mut parts = Vec::new();
    let mut start = 0;
    let mut escaped = false;

    for (i, c) in s.char_indices() {
        if escaped {
            escaped = false;
        } else if c == '\\' {
            escaped = true;
        } else if c == sep {
            parts.push(s[start..i].to_string());
            start = i + 1;
        }
    }

    parts.push(s[start..].to_string());
    parts
}
