//! Credits - contributor list generator
//!
//! Collects the people behind a project from two places: commit authors in
//! the git history of the project and its addon repository, and translators
//! named in the headers of gettext catalogs. Names on the exclusion list are
//! dropped, duplicates are merged by exact match, and the result is written
//! case-insensitively sorted, one name per line.
//!
//! The output still wants a human read-through: the same person can appear
//! under several spellings.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer
//! - `config`: `.creditsrc.json` loading and defaults
//! - `core`: Collection, merge and write pipeline
//! - `error`: Error taxonomy

pub mod cli;
pub mod config;
pub mod core;
pub mod error;
