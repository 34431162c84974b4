//! The ordered rewrite rule table.
//!
//! Each rule pairs a compiled pattern with a pure rewriter. Patterns capture
//! one (`x`) or two (`x`, `y`) free-text groups; whitespace between the
//! literal tokens is optional. The table is tried top to bottom and the
//! first matching rule wins.

use regex::{Captures, Regex};

use crate::classify::{Ecosystem, Vocabulary};

/// Task-oriented phrases. A title containing any of them (case-insensitive)
/// already reads as a goal rather than a diary entry.
pub const TASK_KEYWORDS: &[&str] = &[
    "how to",
    "guide",
    "complete",
    "in-depth",
    "tutorial",
    "如何",
    "指南",
    "完整",
    "详解",
    "教程",
    "实战",
    "入门",
    "深入",
];

/// Case-insensitive membership test against a fixed phrase list.
#[derive(Debug, Clone)]
pub struct TaskKeywords {
    phrases: Vec<String>,
}

impl Default for TaskKeywords {
    fn default() -> Self {
        Self::new(TASK_KEYWORDS)
    }
}

impl TaskKeywords {
    pub fn new(phrases: &[&str]) -> Self {
        Self {
            phrases: phrases.iter().map(|p| p.to_lowercase()).collect(),
        }
    }

    /// Whether `text` contains any task phrase.
    pub fn matches(&self, text: &str) -> bool {
        let lower = text.to_lowercase();
        self.phrases.iter().any(|p| lower.contains(p.as_str()))
    }
}

/// Captured groups of a matched rule, trimmed. `y` is empty for
/// single-capture rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Groups<'t> {
    pub x: &'t str,
    pub y: &'t str,
}

/// Shared lookups available to every rewriter.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub keywords: &'a TaskKeywords,
    pub vocabulary: &'a Vocabulary,
}

pub type Rewriter = fn(&Groups<'_>, &RuleContext<'_>) -> String;

/// One `(matcher, rewriter)` entry of the table.
pub struct RewriteRule {
    pub name: &'static str,
    pub matcher: Regex,
    pub rewriter: Rewriter,
    /// Diary-style lead-ins make a title eligible for rewriting on their own.
    pub diary: bool,
}

impl std::fmt::Debug for RewriteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RewriteRule")
            .field("name", &self.name)
            .field("matcher", &self.matcher.as_str())
            .field("diary", &self.diary)
            .finish()
    }
}

impl RewriteRule {
    fn new(
        name: &'static str,
        pattern: &str,
        diary: bool,
        rewriter: Rewriter,
    ) -> Result<Self, regex::Error> {
        Ok(Self {
            name,
            matcher: Regex::new(pattern)?,
            rewriter,
            diary,
        })
    }

    /// Apply the rule if it matches `title`.
    pub fn apply(&self, title: &str, ctx: &RuleContext<'_>) -> Option<String> {
        let caps = self.matcher.captures(title)?;
        let groups = Groups {
            x: group(&caps, "x"),
            y: group(&caps, "y"),
        };
        Some((self.rewriter)(&groups, ctx))
    }
}

fn group<'t>(caps: &Captures<'t>, name: &str) -> &'t str {
    caps.name(name).map_or("", |m| m.as_str().trim())
}

/// Build the rule table in priority order.
pub fn default_rules() -> Result<Vec<RewriteRule>, regex::Error> {
    Ok(vec![
        RewriteRule::new(
            "using-within",
            r"^(?:在\s*)?(?P<x>.+?)\s*中\s*使用\s*(?P<y>.+)$",
            false,
            using_within,
        )?,
        RewriteRule::new("using", r"^使用\s*(?P<x>[^\s-].*)$", true, using)?,
        RewriteRule::new("use-of", r"^(?P<x>.+?)\s*的\s*使用$", true, use_of)?,
        RewriteRule::new(
            "introduction",
            r"^(?P<x>.+?)\s*(?:的\s*)?介绍$",
            true,
            introduction,
        )?,
        RewriteRule::new("about", r"^关于\s*(?P<x>[^\s-].*)$", true, about)?,
        RewriteRule::new("tutorial", r"^(?P<x>.+?)\s*教程$", true, tutorial)?,
        RewriteRule::new(
            "implements",
            r"^(?:用\s*)?(?P<x>.+?)\s*实现\s*(?P<y>.+)$",
            false,
            implements,
        )?,
        RewriteRule::new(
            "develops",
            r"^(?P<x>.+?)\s*开发\s*(?P<y>.+)$",
            false,
            develops,
        )?,
    ])
}

// ── Rewriters ──

fn using_within(g: &Groups<'_>, ctx: &RuleContext<'_>) -> String {
    if ctx.vocabulary.is_library_or_tool(g.y) {
        format!("{} 完整使用指南 - 如何在 {} 中集成并掌握核心功能", g.y, g.x)
    } else {
        format!("{} 全指南 - 如何在 {} 中使用并获取完整功能", g.y, g.x)
    }
}

fn using(g: &Groups<'_>, ctx: &RuleContext<'_>) -> String {
    if ctx.keywords.matches(g.x) {
        return g.x.to_string();
    }
    match Ecosystem::detect(g.x) {
        Some(eco) => format!("如何使用 {} - {eco} 开发完整指南", g.x),
        None => format!("{} 完整使用指南 - 如何快速上手并掌握核心功能", g.x),
    }
}

fn use_of(g: &Groups<'_>, _: &RuleContext<'_>) -> String {
    format!("{} 完整使用指南 - 如何快速上手并掌握核心功能", g.x)
}

fn introduction(g: &Groups<'_>, _: &RuleContext<'_>) -> String {
    format!("{} 完整指南 - 从入门到精通", g.x)
}

fn about(g: &Groups<'_>, _: &RuleContext<'_>) -> String {
    format!("{} 完整指南 - 全面了解核心功能与最佳实践", g.x)
}

fn tutorial(g: &Groups<'_>, _: &RuleContext<'_>) -> String {
    format!("{} 完整教程 - 从零开始掌握核心技能", g.x)
}

fn implements(g: &Groups<'_>, _: &RuleContext<'_>) -> String {
    format!("如何用 {} 实现 {} - 完整实战指南", g.x, g.y)
}

fn develops(g: &Groups<'_>, _: &RuleContext<'_>) -> String {
    format!("如何用 {} 开发 {} - 从零到生产完整指南", g.x, g.y)
}
