//! Output line folding.

/// Maximum physical line length in octets, not characters.
const MAX_LINE_OCTETS: usize = 75;

/// Folds a logical line into physical lines of roughly 75 octets.
///
/// Continuations are introduced with CRLF plus a single space, and splits
/// happen only at UTF-8 character boundaries. A break is never placed
/// immediately before a space or tab: a continuation starting with
/// `<fold space><value whitespace>` would be collapsed by the multi-space
/// unfold heuristic and corrupt the value. The break is deferred past the
/// whitespace run instead, so a line may exceed 75 octets by the run
/// length, and folding stays lossless.
#[must_use]
pub(crate) fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + 3 * (line.len() / MAX_LINE_OCTETS));
    let mut segment_len = 0;
    let mut limit = MAX_LINE_OCTETS;

    for c in line.chars() {
        let width = c.len_utf8();
        if segment_len + width > limit && c != ' ' && c != '\t' {
            result.push_str("\r\n ");
            // Continuation lines spend one octet on their leading space.
            limit = MAX_LINE_OCTETS - 1;
            segment_len = 0;
        }
        result.push(c);
        segment_len += width;
    }

    result
}
