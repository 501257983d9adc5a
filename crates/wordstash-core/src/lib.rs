//! Core library for the wordstash vocabulary tracker.
//!
//! This crate provides the domain and persistence layer shared by the CLI
//! and the web view: word token validation and filtering, the SQLite-backed
//! word store with its add-or-increment upsert, the summary row extraction
//! used by both renderers, and database path resolution. Everything operates
//! on an explicitly passed store handle; there is no process-wide state.

pub mod error;
pub mod report;
pub mod settings;
pub mod store;
pub mod words;

pub use error::{Result, StoreError};
pub use report::{render_plain, summary_rows, SummaryRow};
pub use settings::Settings;
pub use store::{AddOutcome, WordRecord, WordStore};
pub use words::{filter_words, is_valid_word};
