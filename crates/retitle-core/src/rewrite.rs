//! Title rewriting pipeline: gate → colon substitution → rules → fallback → normalise.

use std::path::Path;

use tracing::debug;

use crate::RetitleError;
use crate::classify::{DomainHint, Vocabulary};
use crate::normalize::{SEPARATOR, normalize_title};
use crate::rules::{RewriteRule, RuleContext, TaskKeywords, default_rules};

/// Titles with fewer characters than this are "short".
pub const SHORT_TITLE_CHARS: usize = 12;

/// Colon characters replaced by the segment separator.
pub const COLONS: &[char] = &[':', '：'];

/// Immutable rewriting configuration, built once per run.
///
/// Holds the ordered rule table, the task keyword set, the domain
/// vocabulary, and the short-title threshold. [`Rulebook::rewrite`] is a
/// total function: every input produces some output.
#[derive(Debug)]
pub struct Rulebook {
    rules: Vec<RewriteRule>,
    keywords: TaskKeywords,
    vocabulary: Vocabulary,
    short_title_chars: usize,
}

impl Rulebook {
    /// Compile the default rule table.
    ///
    /// Fails only if a built-in pattern does not compile.
    pub fn new() -> Result<Self, RetitleError> {
        Ok(Self {
            rules: default_rules()?,
            keywords: TaskKeywords::default(),
            vocabulary: Vocabulary::default(),
            short_title_chars: SHORT_TITLE_CHARS,
        })
    }

    fn context(&self) -> RuleContext<'_> {
        RuleContext {
            keywords: &self.keywords,
            vocabulary: &self.vocabulary,
        }
    }

    pub fn is_short(&self, title: &str) -> bool {
        title.chars().count() < self.short_title_chars
    }

    pub fn is_task_oriented(&self, title: &str) -> bool {
        self.keywords.matches(title)
    }

    /// Whether a title is a diary-style lead-in such as `使用 X` or `关于 X`.
    pub fn is_diary(&self, title: &str) -> bool {
        self.rules
            .iter()
            .any(|rule| rule.diary && rule.matcher.is_match(title))
    }

    /// Whether any rule pattern, lead-in or infix, matches `title`.
    pub fn has_rule_shape(&self, title: &str) -> bool {
        self.rules.iter().any(|rule| rule.matcher.is_match(title))
    }

    /// Gating criterion: colon, diary-style lead-in, or a title without a
    /// task keyword that is short or has the shape of an infix rule
    /// (`X 中使用 Y`, `用 X 实现 Y`, `X 开发 Y`).
    ///
    /// Every rule and fallback phrasing carries a task keyword, so an infix
    /// shape inside a rewritten title does not gate it again.
    pub fn needs_rewrite(&self, title: &str) -> bool {
        title.contains(COLONS)
            || self.is_diary(title)
            || (!self.is_task_oriented(title)
                && (self.is_short(title) || self.has_rule_shape(title)))
    }

    /// Rewrite `title` from the document at `path`.
    ///
    /// Titles that fail [`needs_rewrite`](Self::needs_rewrite) come back unchanged.
    pub fn rewrite(&self, title: &str, path: &Path) -> String {
        if !self.needs_rewrite(title) {
            return title.to_string();
        }

        // Rules and the fallback see the colon-substituted, normalised form,
        // so a title left alone here is already in its final shape.
        let prepared = normalize_title(&substitute_colons(title));
        let ctx = self.context();

        let rewritten = match self
            .rules
            .iter()
            .find_map(|rule| rule.apply(&prepared, &ctx).map(|out| (rule.name, out)))
        {
            Some((name, out)) => {
                debug!(rule = name, title, "rewrite rule matched");
                out
            }
            None if self.is_short(&prepared) && !self.is_task_oriented(&prepared) => {
                self.fallback(&prepared, path)
            }
            None => prepared,
        };

        normalize_title(&rewritten)
    }

    /// Synthesize a title for a short, unrecognised one.
    pub fn fallback(&self, title: &str, path: &Path) -> String {
        let hint = self.vocabulary.classify(title, path);
        debug!(?hint, title, "fallback classification");
        match hint {
            DomainHint::Library => format!(
                "{} 完整使用指南 - 如何集成并掌握核心功能",
                self.vocabulary.library_topic(title)
            ),
            DomainHint::Tool => format!(
                "如何开发和使用 {}工具 - 完整实战指南",
                self.vocabulary.tool_topic(title)
            ),
            DomainHint::Ecosystem(eco) => format!("如何掌握 {title} - {eco} 开发完整指南"),
            DomainHint::Generic => format!("{title} - 完整使用指南"),
        }
    }
}

/// Replace every ASCII or full-width colon with ` - `.
pub fn substitute_colons(title: &str) -> String {
    title.replace(COLONS, SEPARATOR)
}
