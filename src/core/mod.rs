//! Core credits engine.
//!
//! - `history`: commit authors from `git shortlog`
//! - `catalog`: translators from gettext catalog headers
//! - `registry`: exclusion filtering, deduplication and sorting
//! - `writer`: persisting the credits file
//! - `pipeline`: runs the stages in order

pub mod catalog;
pub mod history;
pub mod pipeline;
pub mod registry;
pub mod writer;

pub use history::{GitShortlog, HistorySource};
pub use pipeline::{Credit, CreditsSummary, Pipeline, SourceCount, SourceKind};
pub use registry::ContributorRegistry;
