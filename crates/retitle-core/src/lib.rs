//! Frontmatter title normalisation for markdown content trees.
//!
//! [`locate`] finds candidate documents, [`extract_title`] reads their
//! frontmatter title, [`Rulebook::rewrite`] turns diary-style or terse titles
//! into task-oriented ones, and [`run`] drives a whole batch into a [`Report`].

pub mod classify;
pub mod error;
pub mod frontmatter;
pub mod locator;
pub mod normalize;
pub mod report;
pub mod rewrite;
pub mod rules;

pub use classify::{DomainHint, Ecosystem, Vocabulary};
pub use error::RetitleError;
pub use frontmatter::{TitleField, extract_title, replace_title};
pub use locator::locate;
pub use normalize::normalize_title;
pub use report::{
    ChangeRecord, DocumentStore, FsStore, Mode, Outcome, Report, process_all, process_document, run,
};
pub use rewrite::Rulebook;
pub use rules::{RewriteRule, TaskKeywords};
