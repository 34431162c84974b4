//! Title text normalisation.
//!
//! Cleans up the spacing and separator noise that rule rewriting leaves
//! behind, e.g. `"Foo :  Bar"` → colon substitution → `"Foo  -   Bar"` →
//! `"Foo - Bar"`.
//!
//! # Conventions
//!
//! - The segment separator is ` - ` (space, hyphen, space). A bare hyphen
//!   such as `PHP-FPM` is part of a word and never touched.
//! - Chinese text is written without spaces between ideographs, but keeps a
//!   single space next to Latin words and numbers (`Gomail 完整使用指南`).

/// Separator inserted between title segments.
pub const SEPARATOR: &str = " - ";

/// Maximum number of separators kept in a normalised title.
pub const MAX_SEPARATORS: usize = 2;

/// Normalise a rewritten title.
///
/// # Algorithm
///
/// 1. Split on whitespace; a word that is exactly `-` is a separator
/// 2. Rejoin each segment's words with single spaces, then remove spaces
///    between two CJK characters
/// 3. Drop empty segments and keep the first `MAX_SEPARATORS + 1`
/// 4. Join the segments with ` - `
pub fn normalize_title(s: &str) -> String {
    let mut segments: Vec<String> = Vec::new();
    let mut words: Vec<&str> = Vec::new();

    for word in s.split_whitespace().chain(std::iter::once("-")) {
        if word == "-" {
            if !words.is_empty() {
                segments.push(join_cjk(&words.join(" ")));
                words.clear();
            }
        } else {
            words.push(word);
        }
    }

    segments.truncate(MAX_SEPARATORS + 1);
    segments.join(SEPARATOR)
}

/// Remove single spaces sitting between two CJK characters.
///
/// Expects single-spaced input.
fn join_cjk(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    for (i, &c) in chars.iter().enumerate() {
        if c == ' '
            && i > 0
            && i + 1 < chars.len()
            && is_cjk(chars[i - 1])
            && is_cjk(chars[i + 1])
        {
            continue;
        }
        out.push(c);
    }
    out
}

/// Han ideographs, CJK punctuation, and full-width forms.
pub fn is_cjk(c: char) -> bool {
    matches!(
        c,
        '\u{3000}'..='\u{303F}'
            | '\u{3400}'..='\u{4DBF}'
            | '\u{4E00}'..='\u{9FFF}'
            | '\u{F900}'..='\u{FAFF}'
            | '\u{FF00}'..='\u{FFEF}'
            | '\u{20000}'..='\u{2A6DF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper: assert normalisation output and that a second pass is a no-op.
    fn assert_normalizes(input: &str, expected: &str) {
        let once = normalize_title(input);
        assert_eq!(once, expected, "normalising {input:?}");
        assert_eq!(normalize_title(&once), once, "second pass on {once:?}");
    }

    #[test]
    fn already_clean() {
        assert_normalizes(
            "Gomail 完整使用指南 - 如何快速上手并掌握核心功能",
            "Gomail 完整使用指南 - 如何快速上手并掌握核心功能",
        );
    }

    #[test]
    fn colon_substitution_spacing() {
        assert_normalizes("Foo  -  Bar", "Foo - Bar");
        assert_normalizes("PHP-FPM配置文件详解 - 进程管理", "PHP-FPM配置文件详解 - 进程管理");
    }

    #[test]
    fn word_hyphen_untouched() {
        assert_normalizes("PHP-FPM  配置", "PHP-FPM 配置");
    }

    #[test]
    fn caps_separators_at_two() {
        assert_normalizes("A - B - C - D - E", "A - B - C");
        assert_normalizes("A - B - C", "A - B - C");
    }

    #[test]
    fn empty_segments_dropped() {
        assert_normalizes("A -  - B", "A - B");
        assert_normalizes(" - A - ", "A");
        assert_normalizes("-", "");
    }

    #[test]
    fn cjk_spaces_joined() {
        assert_normalizes("如何在 项目 中集成", "如何在项目中集成");
        assert_normalizes("如何开发和使用 压测工具", "如何开发和使用压测工具");
    }

    #[test]
    fn mixed_script_spaces_kept() {
        assert_normalizes("如何用  Go   实现 缓存", "如何用 Go 实现缓存");
        assert_normalizes("Redis  Cluster 搭建", "Redis Cluster 搭建");
    }

    #[test]
    fn full_width_space_is_whitespace() {
        assert_normalizes("Go\u{3000}并发", "Go 并发");
    }

    #[test]
    fn empty_string() {
        assert_eq!(normalize_title(""), "");
        assert_eq!(normalize_title("   "), "");
    }

    #[test]
    fn is_cjk_ranges() {
        assert!(is_cjk('中'));
        assert!(is_cjk('，'));
        assert!(!is_cjk('a'));
        assert!(!is_cjk('-'));
    }
}
