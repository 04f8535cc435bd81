//! Input data model for the renderer.
//!
//! This is the JSON Resume shape (<https://jsonresume.org/schema/>), reduced to
//! the fields the Awesome-CV template consumes. Every field is optional: an
//! absent top-level key suppresses its whole section, an absent leaf field only
//! omits that field's rendering. Values are treated as opaque strings; the
//! renderer never validates or coerces them.

use serde::Deserialize;

/// A sanitized resume record, the single input to [`crate::render`].
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeRecord {
    pub basics: Option<Basics>,
    pub education: Option<Vec<School>>,
    pub work: Option<Vec<Job>>,
    pub skills: Option<Vec<Skill>>,
    pub projects: Option<Vec<Project>>,
    pub awards: Option<Vec<Award>>,
}

/// Personal details rendered into the centered profile block.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basics {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<Location>,
    pub website: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: Option<String>,
}

/// One education entry. Dates are opaque strings, not validated.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct School {
    pub institution: Option<String>,
    pub location: Option<String>,
    pub area: Option<String>,
    pub study_type: Option<String>,
    pub gpa: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// One work-history entry.
///
/// `highlights` distinguishes "absent" from "present but empty": `None` omits
/// the items block entirely, `Some(vec![])` renders an empty `cvitems`
/// environment.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub company: Option<String>,
    pub position: Option<String>,
    pub location: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub highlights: Option<Vec<String>>,
}

/// One row of the skills table.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Skill {
    pub name: Option<String>,
    pub details: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub name: Option<String>,
    pub description: Option<String>,
    pub technologies: Option<String>,
    pub link: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Award {
    pub name: Option<String>,
    pub details: Option<String>,
    pub date: Option<String>,
    pub location: Option<String>,
}
