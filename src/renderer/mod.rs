//! LaTeX renderer for generating Awesome-CV documents from resume records
//!
//! This module takes a `ResumeRecord` and produces a complete LaTeX source
//! string targeting the Awesome-CV document class. The macro names and their
//! fixed arities (`\cventry`, `\cvhonor`, `\cvsection`, `\cventries`,
//! `\cvitems`, `\cvhonors`) are a compatibility contract with that class.

pub mod sections;
pub mod tex;

pub use sections::render_document;
