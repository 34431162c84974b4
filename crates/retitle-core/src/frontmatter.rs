//! Frontmatter title extraction and in-place replacement.
//!
//! Only the `title` scalar is read. The block must open on the very first
//! line with `---` and close on a later `---` line; anything else means the
//! document has no frontmatter.

use std::ops::Range;

/// Marker line delimiting the frontmatter block.
pub const DELIMITER: &str = "---";

/// Frontmatter key holding the page title.
pub const TITLE_KEY: &str = "title";

/// A title value located inside a document's frontmatter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleField {
    /// Trimmed, unquoted value.
    pub value: String,
    /// Byte span of the `title: ...` line, excluding its line terminator.
    pub line: Range<usize>,
}

/// Locate the frontmatter `title` of `text`.
///
/// Returns `None` when there is no frontmatter block, the block has no
/// `title` line, or the value is empty.
pub fn extract_title(text: &str) -> Option<TitleField> {
    let mut lines = lines_with_offsets(text);

    let (_, first) = lines.next()?;
    if first.trim_start_matches('\u{feff}').trim_end() != DELIMITER {
        return None;
    }

    let mut title: Option<TitleField> = None;
    for (offset, line) in lines {
        if line.trim_end() == DELIMITER {
            return title;
        }
        if title.is_none()
            && let Some(raw) = title_value(line)
        {
            let value = scalar_value(raw.trim());
            if !value.is_empty() {
                title = Some(TitleField {
                    value,
                    line: offset..offset + line.len(),
                });
            }
        }
    }

    // Unterminated block.
    None
}

/// Replace the title line located by [`extract_title`] with `new_title`,
/// always double-quoted. Every other byte of `text` is kept.
pub fn replace_title(text: &str, field: &TitleField, new_title: &str) -> String {
    let escaped = new_title.replace('\\', "\\\\").replace('"', "\\\"");
    let replacement = format!("{TITLE_KEY}: \"{escaped}\"");
    let mut out = String::with_capacity(text.len() + replacement.len());
    out.push_str(&text[..field.line.start]);
    out.push_str(&replacement);
    out.push_str(&text[field.line.end..]);
    out
}

/// Strip one symmetric pair of `"` or `'`. Mismatched quotes are kept.
pub fn unquote(value: &str) -> &str {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            return &value[1..value.len() - 1];
        }
    }
    value
}

/// Unquoted value; a double-quoted one also has `\\` and `\"` unescaped.
fn scalar_value(raw: &str) -> String {
    let value = unquote(raw);
    if value.len() == raw.len() || !raw.starts_with('"') {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        match (c, chars.clone().next()) {
            ('\\', Some(next @ ('"' | '\\'))) => {
                out.push(next);
                chars.next();
            }
            _ => out.push(c),
        }
    }
    out
}

/// `title: value` with the key at the start of the line.
fn title_value(line: &str) -> Option<&str> {
    line.strip_prefix(TITLE_KEY)?.trim_start().strip_prefix(':')
}

/// Lines paired with their starting byte offset, without `\n` or `\r\n`.
fn lines_with_offsets(text: &str) -> impl Iterator<Item = (usize, &str)> {
    text.split_inclusive('\n').scan(0usize, |offset, raw| {
        let start = *offset;
        *offset += raw.len();
        let line = raw.strip_suffix('\n').unwrap_or(raw);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Some((start, line))
    })
}
