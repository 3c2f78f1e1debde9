//! Core processing logic for tgpack.
//!
//! This module contains:
//! - [`resolver`] - Sender carry-forward and rename table
//! - [`corpus`] - Multi-document merge and chronological sort
//! - [`processor`] - The whole extraction pipeline
//! - [`output`] - JSON and line writers, append-mode destination

pub mod corpus;
pub mod output;
pub mod processor;
pub mod resolver;

// Re-export main types for convenience
pub use corpus::Corpus;
pub use output::{append_to_file, from_json, to_json, to_lines};
pub use processor::{ProcessingStats, process_documents, process_strs};
pub use resolver::{RenameTable, SenderResolver};

pub use crate::Message;
