//! Domain classification for titles that no rewrite rule recognises.
//!
//! Everything here is a deterministic substring/token test over the title
//! and the document path. The result selects a fallback phrasing.

use std::fmt;
use std::path::Path;

/// Language ecosystems recognised from whole ASCII tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ecosystem {
    Go,
    Php,
    Python,
}

impl Ecosystem {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Go => "Go",
            Self::Php => "PHP",
            Self::Python => "Python",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "go" | "golang" => Some(Self::Go),
            "php" => Some(Self::Php),
            "python" => Some(Self::Python),
            _ => None,
        }
    }

    /// First ecosystem named by an ASCII-alphanumeric token of `text`.
    ///
    /// Tokens are maximal runs of ASCII letters and digits, so `Go语言` and
    /// `php-fpm` name an ecosystem while `Gomail` and `algorithm` do not.
    pub fn detect(text: &str) -> Option<Self> {
        text.split(|c: char| !c.is_ascii_alphanumeric())
            .filter(|token| !token.is_empty())
            .find_map(Self::from_token)
    }

    /// Ecosystem named anywhere in a document path.
    pub fn from_path(path: &Path) -> Option<Self> {
        path.to_str().and_then(Self::detect)
    }
}

impl fmt::Display for Ecosystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fallback category for an under-specified title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainHint {
    Library,
    Tool,
    Ecosystem(Ecosystem),
    Generic,
}

/// Domain nouns used by the classifier and by topic extraction.
#[derive(Debug, Clone)]
pub struct Vocabulary {
    /// Library/package markers. ASCII entries match case-insensitively.
    pub library_markers: Vec<&'static str>,
    /// Tool markers. ASCII entries match case-insensitively.
    pub tool_markers: Vec<&'static str>,
    /// CJK library suffixes stripped from a trailing token.
    pub library_suffixes: Vec<&'static str>,
    /// Suffix re-appended after a library suffix is stripped.
    pub library_canonical: &'static str,
    /// CJK tool suffix stripped from a trailing token; the tool phrasing re-appends it.
    pub tool_suffix: &'static str,
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self {
            library_markers: vec!["库", "包", "library", "package", "lib", "sdk"],
            tool_markers: vec!["工具", "tool"],
            library_suffixes: vec!["库", "包"],
            library_canonical: "库",
            tool_suffix: "工具",
        }
    }
}

impl Vocabulary {
    pub fn is_library(&self, text: &str) -> bool {
        contains_any(text, &self.library_markers)
    }

    pub fn is_tool(&self, text: &str) -> bool {
        contains_any(text, &self.tool_markers)
    }

    /// Library- or tool-like noun, as used by the "using Y within X" rule.
    pub fn is_library_or_tool(&self, text: &str) -> bool {
        self.is_library(text) || self.is_tool(text)
    }

    /// Classify a title, consulting the path only for the ecosystem.
    pub fn classify(&self, title: &str, path: &Path) -> DomainHint {
        if self.is_library(title) {
            DomainHint::Library
        } else if self.is_tool(title) {
            DomainHint::Tool
        } else if let Some(eco) = Ecosystem::from_path(path) {
            DomainHint::Ecosystem(eco)
        } else {
            DomainHint::Generic
        }
    }

    /// Topic for the library phrasing.
    ///
    /// `Gomail包` → `Gomail库`; `Foo Library` and `Gomail 库` are kept verbatim
    /// because the domain noun is the whole trailing token.
    pub fn library_topic(&self, title: &str) -> String {
        let title = title.trim();
        if self.trailing_token_is_noun(title) {
            return title.to_string();
        }
        for suffix in &self.library_suffixes {
            if let Some(stem) = non_empty_stem(title, suffix) {
                return format!("{stem}{}", self.library_canonical);
            }
        }
        title.to_string()
    }

    /// Topic for the tool phrasing, which appends `工具` itself.
    ///
    /// Only the single trailing `工具` is stripped: `Go开发工具` → `Go开发`.
    pub fn tool_topic(&self, title: &str) -> String {
        let title = title.trim();
        if self.trailing_token_is_noun(title) {
            return title.to_string();
        }
        non_empty_stem(title, self.tool_suffix)
            .unwrap_or(title)
            .to_string()
    }

    fn trailing_token_is_noun(&self, title: &str) -> bool {
        let Some(last) = title.split_whitespace().next_back() else {
            return false;
        };
        let last = last.to_lowercase();
        self.library_markers
            .iter()
            .chain(self.tool_markers.iter())
            .any(|noun| last == *noun)
    }
}

/// `text` without `suffix`, unless that would leave nothing.
fn non_empty_stem<'a>(text: &'a str, suffix: &str) -> Option<&'a str> {
    let stem = text.strip_suffix(suffix)?.trim_end();
    (!stem.is_empty()).then_some(stem)
}

fn contains_any(text: &str, needles: &[&str]) -> bool {
    let lower = text.to_lowercase();
    needles.iter().any(|needle| lower.contains(needle))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ecosystem_needs_whole_token() {
        assert_eq!(Ecosystem::detect("Go语言并发"), Some(Ecosystem::Go));
        assert_eq!(Ecosystem::detect("golang channels"), Some(Ecosystem::Go));
        assert_eq!(Ecosystem::detect("PHP-FPM"), Some(Ecosystem::Php));
        assert_eq!(Ecosystem::detect("python3"), None);
        assert_eq!(Ecosystem::detect("Gomail"), None);
        assert_eq!(Ecosystem::detect("algorithm"), None);
    }

    #[test]
    fn ecosystem_from_path_components() {
        assert_eq!(
            Ecosystem::from_path(Path::new("docs/golang/gomail.md")),
            Some(Ecosystem::Go)
        );
        assert_eq!(
            Ecosystem::from_path(Path::new("docs/python/asyncio.md")),
            Some(Ecosystem::Python)
        );
        assert_eq!(Ecosystem::from_path(Path::new("docs/google/maps.md")), None);
    }

    #[test]
    fn classify_prefers_title_nouns_over_path() {
        let v = Vocabulary::default();
        let go = Path::new("docs/golang/x.md");
        assert_eq!(v.classify("Gomail库", go), DomainHint::Library);
        assert_eq!(v.classify("Foo Library", go), DomainHint::Library);
        assert_eq!(v.classify("压测工具", go), DomainHint::Tool);
        assert_eq!(v.classify("协程", go), DomainHint::Ecosystem(Ecosystem::Go));
        assert_eq!(
            v.classify("协程", Path::new("docs/misc/x.md")),
            DomainHint::Generic
        );
    }

    #[test]
    fn library_topic_keeps_whole_trailing_noun() {
        let v = Vocabulary::default();
        assert_eq!(v.library_topic("Foo Library"), "Foo Library");
        assert_eq!(v.library_topic("Gomail 库"), "Gomail 库");
        assert_eq!(v.library_topic("库"), "库");
    }

    #[test]
    fn library_topic_canonicalises_suffix() {
        let v = Vocabulary::default();
        assert_eq!(v.library_topic("Gomail包"), "Gomail库");
        assert_eq!(v.library_topic("Gomail库"), "Gomail库");
        assert_eq!(v.library_topic("Guzzle SDK"), "Guzzle SDK");
    }

    #[test]
    fn tool_topic_strips_single_trailing_noun() {
        let v = Vocabulary::default();
        assert_eq!(v.tool_topic("压测工具"), "压测");
        assert_eq!(v.tool_topic("Go开发工具"), "Go开发");
        assert_eq!(v.tool_topic("Foo Tool"), "Foo Tool");
        assert_eq!(v.tool_topic("工具"), "工具");
    }
}
