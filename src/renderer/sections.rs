//! Section builders and the document renderer.
//!
//! Each builder maps one slice of the [`ResumeRecord`] to a self-contained,
//! left-aligned LaTeX fragment and returns an empty string when its slice is
//! absent. [`render_document`] concatenates the preamble, the document
//! envelope and the six section fragments in a fixed order.

use log::debug;

use crate::resume::{Award, Basics, Job, Project, ResumeRecord, School, Skill};
use crate::theme::Theme;

use super::tex::{banner, cv_items, date_range, macro_call, WHITESPACE};

/// Render a complete Awesome-CV document.
///
/// Pure function: the same record and theme always produce byte-identical
/// output. Never fails; missing sub-objects degrade to empty fragments.
pub fn render_document(record: &ResumeRecord, theme: &Theme) -> String {
    let fragments = [
        header_section(theme),
        "\\begin{document}".to_string(),
        profile_section(record.basics.as_ref()),
        education_section(record.education.as_deref()),
        experience_section(record.work.as_deref()),
        skills_section(record.skills.as_deref()),
        projects_section(record.projects.as_deref()),
        awards_section(record.awards.as_deref()),
        WHITESPACE.to_string(),
        "\\end{document}".to_string(),
    ];

    let rendered = fragments[2..8].iter().filter(|f| !f.is_empty()).count();
    debug!("rendered {rendered} of 6 resume sections");

    fragments.join("\n")
}

/// Centered profile block: styled name line plus a contact line.
pub fn profile_section(basics: Option<&Basics>) -> String {
    let Some(basics) = basics else {
        return String::new();
    };

    let name_line = match basics.name.as_deref() {
        Some(name) => {
            let (first, last) = split_name(name);
            format!("\\headerfirstnamestyle{{{first}}} \\headerlastnamestyle{{{last}}} \\\\")
        }
        None => String::new(),
    };

    let address = basics.location.as_ref().and_then(|l| l.address.as_deref());
    let contacts = [
        ("\\faEnvelope", basics.email.as_deref()),
        ("\\faMobile", basics.phone.as_deref()),
        ("\\faMapMarker", address),
        ("\\faLink", basics.website.as_deref()),
    ];
    // Filter before joining so a missing token never leaves a stray separator
    let info = contacts
        .iter()
        .filter_map(|(icon, value)| value.map(|v| format!("{{{icon}\\ {v}}}")))
        .collect::<Vec<_>>()
        .join(" | ");

    format!(
        "{}\n\\begin{{center}}\n{name_line}\n\\vspace{{2mm}}\n{info}\n\\end{{center}}",
        banner("Profile")
    )
}

/// Split a full name at the first single space.
///
/// The first token is the first name; the remainder, spaces included, is the
/// last name. A single token is a first name with an empty last name.
fn split_name(name: &str) -> (&str, &str) {
    match name.split_once(' ') {
        Some((first, rest)) => (first, rest),
        None => (name, ""),
    }
}

pub fn education_section(education: Option<&[School]>) -> String {
    let Some(education) = education else {
        return String::new();
    };

    let entries = education
        .iter()
        .map(school_entry)
        .collect::<Vec<_>>()
        .join("\n");

    format!(
        "{}\n\\cvsection{{Education}}\n\\begin{{cventries}}\n{entries}\n\\end{{cventries}}\n\n\\vspace{{-2mm}}",
        banner("Education")
    )
}

fn school_entry(school: &School) -> String {
    let degree = match (school.study_type.as_deref(), school.area.as_deref()) {
        (Some(study_type), Some(area)) => format!("{study_type} in {area}"),
        (Some(study_type), None) => study_type.to_string(),
        (None, Some(area)) => area.to_string(),
        (None, None) => String::new(),
    };
    let range = date_range(school.start_date.as_deref(), school.end_date.as_deref());
    let gpa = school
        .gpa
        .as_deref()
        .map(|gpa| format!("GPA: {gpa}"))
        .unwrap_or_default();

    macro_call(
        "cventry",
        &[
            &degree,
            school.institution.as_deref().unwrap_or(""),
            school.location.as_deref().unwrap_or(""),
            &range,
            &gpa,
        ],
    )
}

pub fn experience_section(work: Option<&[Job]>) -> String {
    let Some(work) = work else {
        return String::new();
    };

    let entries = work.iter().map(job_entry).collect::<Vec<_>>().join("\n");

    format!(
        "{}\n\\cvsection{{Experience}}\n\\begin{{cventries}}\n{entries}\n\\end{{cventries}}",
        banner("Experience")
    )
}

fn job_entry(job: &Job) -> String {
    let range = date_range(job.start_date.as_deref(), job.end_date.as_deref());
    // None omits the block; an empty list still renders the cvitems envelope
    let duties = job
        .highlights
        .as_deref()
        .map(cv_items)
        .unwrap_or_default();

    macro_call(
        "cventry",
        &[
            job.position.as_deref().unwrap_or(""),
            job.company.as_deref().unwrap_or(""),
            job.location.as_deref().unwrap_or(""),
            &range,
            &duties,
        ],
    )
}

/// Single entry whose second argument is a two-column skills table.
pub fn skills_section(skills: Option<&[Skill]>) -> String {
    let Some(skills) = skills else {
        return String::new();
    };

    let rows = skills.iter().map(skill_row).collect::<Vec<_>>().join("\n");
    let table = format!(
        "\\def\\arraystretch{{1.15}}{{\\begin{{tabular}}{{ l l }}\n{rows}\n\\end{{tabular}}}}"
    );
    let entry = macro_call("cventry", &["", &table, "", "", ""]);

    format!(
        "\\cvsection{{Skills}}\n\\begin{{cventries}}\n{entry}\n\\end{{cventries}}\n\n\\vspace{{-7mm}}"
    )
}

fn skill_row(skill: &Skill) -> String {
    let name = skill
        .name
        .as_deref()
        .map(|name| format!("{name}: "))
        .unwrap_or_default();
    let details = skill.details.as_deref().unwrap_or("");
    format!("{name} & {{\\skill{{ {details}}}}} \\\\")
}

pub fn projects_section(projects: Option<&[Project]>) -> String {
    let Some(projects) = projects else {
        return String::new();
    };

    let entries = projects
        .iter()
        .map(project_entry)
        .collect::<Vec<_>>()
        .join("\n");

    format!("\\cvsection{{Projects}}\n\\begin{{cventries}}\n{entries}\n\\end{{cventries}}")
}

fn project_entry(project: &Project) -> String {
    let entry = macro_call(
        "cventry",
        &[
            project.description.as_deref().unwrap_or(""),
            project.name.as_deref().unwrap_or(""),
            project.technologies.as_deref().unwrap_or(""),
            project.link.as_deref().unwrap_or(""),
            "",
        ],
    );
    format!("{entry}\n\n\\vspace{{-5mm}}\n")
}

pub fn awards_section(awards: Option<&[Award]>) -> String {
    let Some(awards) = awards else {
        return String::new();
    };

    let entries = awards.iter().map(award_entry).collect::<Vec<_>>().join("\n");

    format!("\\cvsection{{Honors \\& Awards}}\n\\begin{{cvhonors}}\n{entries}\n\\end{{cvhonors}}")
}

fn award_entry(award: &Award) -> String {
    // cvhonor argument order transposes location and date relative to the input keys
    macro_call(
        "cvhonor",
        &[
            award.name.as_deref().unwrap_or(""),
            award.details.as_deref().unwrap_or(""),
            award.location.as_deref().unwrap_or(""),
            award.date.as_deref().unwrap_or(""),
        ],
    )
}

/// Awesome-CV preamble, parameterized by [`Theme`].
///
/// With the default theme this reproduces the stock template configuration.
pub fn header_section(theme: &Theme) -> String {
    format!(
        r"%!TEX TS-program = xelatex
%!TEX encoding = UTF-8 Unicode
% Awesome CV LaTeX Template
%
% This template has been downloaded from:
% https://github.com/posquit0/Awesome-CV
%
% Author:
% Claud D. Park <posquit0.bj@gmail.com>
% http://www.posquit0.com
%
% Template license:
% CC BY-SA 4.0 (https://creativecommons.org/licenses/by-sa/4.0/)
%


{banner}
%%% Themes: Awesome-CV
\documentclass[]{{awesome-cv}}
\usepackage{{textcomp}}
%%% Override a directory location for fonts(default: 'fonts/')
\fontdir[{font_dir}]

%%% Configure a directory location for sections
\newcommand*{{\sectiondir}}{{{section_dir}}}

%%% Override color
% Awesome Colors: awesome-emerald, awesome-skyblue, awesome-red, awesome-pink, awesome-orange
%                 awesome-nephritis, awesome-concrete, awesome-darknight
%% Color for highlight
{color}
%% Colors for text
%\definecolor{{darktext}}{{HTML}}{{414141}}
%\definecolor{{text}}{{HTML}}{{414141}}
%\definecolor{{graytext}}{{HTML}}{{414141}}
%\definecolor{{lighttext}}{{HTML}}{{414141}}

%%% Override a separator for social informations in header(default: ' | ')
%\headersocialsep[\quad\textbar\quad]",
        banner = banner("Configuration"),
        font_dir = theme.font_dir,
        section_dir = theme.section_dir,
        color = theme.color_declaration(),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resume::Location;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_profile_absent_basics() {
        assert_eq!(profile_section(None), "");
    }

    #[test]
    fn test_profile_name_splitting() {
        let basics = Basics {
            name: Some("Jane Doe".to_string()),
            ..Basics::default()
        };
        let section = profile_section(Some(&basics));
        assert!(section.contains("\\headerfirstnamestyle{Jane} \\headerlastnamestyle{Doe} \\\\"));
    }

    #[test]
    fn test_profile_multi_word_last_name() {
        let basics = Basics {
            name: Some("Ada King Lovelace".to_string()),
            ..Basics::default()
        };
        let section = profile_section(Some(&basics));
        assert!(section.contains("\\headerfirstnamestyle{Ada}"));
        assert!(section.contains("\\headerlastnamestyle{King Lovelace}"));
    }

    #[test]
    fn test_profile_single_token_name() {
        let basics = Basics {
            name: Some("Madonna".to_string()),
            ..Basics::default()
        };
        let section = profile_section(Some(&basics));
        assert!(section.contains("\\headerfirstnamestyle{Madonna}"));
        assert!(section.contains("\\headerlastnamestyle{}"));
    }

    #[test]
    fn test_profile_no_name_omits_name_line() {
        let basics = Basics {
            email: Some("jane@example.com".to_string()),
            ..Basics::default()
        };
        let section = profile_section(Some(&basics));
        assert!(!section.contains("\\headerfirstnamestyle"));
        assert!(section.contains("{\\faEnvelope\\ jane@example.com}"));
    }

    #[test]
    fn test_profile_contact_line_filters_before_joining() {
        let basics = Basics {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            website: Some("https://jane.dev".to_string()),
            ..Basics::default()
        };
        let section = profile_section(Some(&basics));
        // Phone and address are absent: exactly one separator, no empty tokens
        assert!(section.contains("{\\faEnvelope\\ jane@example.com} | {\\faLink\\ https://jane.dev}"));
        assert!(!section.contains("| |"));
        assert!(!section.contains("{} |"));
    }

    #[test]
    fn test_profile_all_four_contact_tokens() {
        let basics = Basics {
            name: Some("Jane Doe".to_string()),
            email: Some("jane@example.com".to_string()),
            phone: Some("555-0100".to_string()),
            location: Some(Location {
                address: Some("Austin, TX".to_string()),
            }),
            website: Some("https://jane.dev".to_string()),
        };
        let section = profile_section(Some(&basics));
        assert_eq!(section.matches(" | ").count(), 3);
        assert!(section.contains("{\\faMobile\\ 555-0100}"));
        assert!(section.contains("{\\faMapMarker\\ Austin, TX}"));
    }

    #[test]
    fn test_education_degree_line_variants() {
        let both = School {
            study_type: Some("BSc".to_string()),
            area: Some("Computer Science".to_string()),
            ..School::default()
        };
        assert!(school_entry(&both).contains("{BSc in Computer Science}"));

        let study_only = School {
            study_type: Some("BSc".to_string()),
            ..School::default()
        };
        assert!(school_entry(&study_only).contains("{BSc}"));

        let area_only = School {
            area: Some("Computer Science".to_string()),
            ..School::default()
        };
        assert!(school_entry(&area_only).contains("{Computer Science}"));
    }

    #[test]
    fn test_education_gpa_line() {
        let school = School {
            gpa: Some("3.9".to_string()),
            ..School::default()
        };
        assert!(school_entry(&school).contains("{GPA: 3.9}"));
    }

    #[test]
    fn test_education_empty_entry_keeps_arity() {
        let entry = school_entry(&School::default());
        assert_eq!(entry, "\\cventry\n  {}\n  {}\n  {}\n  {}\n  {}");
    }

    #[test]
    fn test_education_section_envelope() {
        let section = education_section(Some(&[School::default()]));
        assert!(section.contains("\\cvsection{Education}"));
        assert!(section.contains("\\begin{cventries}"));
        assert!(section.contains("\\end{cventries}"));
        assert!(section.ends_with("\\vspace{-2mm}"));
    }

    #[test]
    fn test_experience_highlights_in_order() {
        let job = Job {
            position: Some("Engineer".to_string()),
            highlights: Some(vec!["Did X".to_string(), "Did Y".to_string()]),
            ..Job::default()
        };
        let entry = job_entry(&job);
        let x = entry.find("\\item {Did X}").expect("first item");
        let y = entry.find("\\item {Did Y}").expect("second item");
        assert!(x < y);
    }

    #[test]
    fn test_experience_empty_highlights_renders_empty_block() {
        let job = Job {
            highlights: Some(vec![]),
            ..Job::default()
        };
        let entry = job_entry(&job);
        assert!(entry.contains("\\begin{cvitems}"));
        assert!(entry.contains("\\end{cvitems}"));
        assert!(!entry.contains("\\item"));
    }

    #[test]
    fn test_experience_absent_highlights_omits_block() {
        let entry = job_entry(&Job::default());
        assert!(!entry.contains("cvitems"));
        assert_eq!(entry, "\\cventry\n  {}\n  {}\n  {}\n  {}\n  {}");
    }

    #[test]
    fn test_skills_rows() {
        let skills = vec![
            Skill {
                name: Some("Languages".to_string()),
                details: Some("Rust, Python".to_string()),
            },
            Skill {
                name: None,
                details: Some("Git".to_string()),
            },
        ];
        let section = skills_section(Some(&skills));
        assert!(section.contains("Languages:  & {\\skill{ Rust, Python}} \\\\"));
        // Missing name renders an empty left column
        assert!(section.contains(" & {\\skill{ Git}} \\\\"));
        assert!(section.contains("\\begin{tabular}{ l l }"));
        assert!(section.ends_with("\\vspace{-7mm}"));
    }

    #[test]
    fn test_skills_single_entry_arity() {
        let section = skills_section(Some(&[Skill::default()]));
        // One cventry with five argument slots, three trailing empties
        assert_eq!(section.matches("\\cventry").count(), 1);
        assert!(section.contains("\\end{tabular}}}\n  {}\n  {}\n  {}"));
    }

    #[test]
    fn test_projects_entry_order_and_vspace() {
        let project = Project {
            name: Some("resumetex".to_string()),
            description: Some("LaTeX resume renderer".to_string()),
            technologies: Some("Rust".to_string()),
            link: Some("https://example.com".to_string()),
        };
        let section = projects_section(Some(&[project]));
        assert!(section.contains(
            "\\cventry\n  {LaTeX resume renderer}\n  {resumetex}\n  {Rust}\n  {https://example.com}\n  {}"
        ));
        assert!(section.contains("\\vspace{-5mm}"));
    }

    #[test]
    fn test_awards_field_order() {
        let award = Award {
            name: Some("Best Paper".to_string()),
            details: Some("SIGPLAN".to_string()),
            date: Some("2019".to_string()),
            location: Some("Phoenix, AZ".to_string()),
        };
        let section = awards_section(Some(&[award]));
        assert!(section.contains("\\cvsection{Honors \\& Awards}"));
        // Location precedes date in the macro call
        assert!(section
            .contains("\\cvhonor\n  {Best Paper}\n  {SIGPLAN}\n  {Phoenix, AZ}\n  {2019}"));
    }

    #[test]
    fn test_header_default_theme() {
        let header = header_section(&Theme::default());
        assert!(header.contains("\\documentclass[]{awesome-cv}"));
        assert!(header.contains("\\fontdir[fonts/]"));
        assert!(header.contains("\\newcommand*{\\sectiondir}{resume/}"));
        assert!(header.contains("\\colorlet{awesome}{awesome-red}"));
    }

    #[test]
    fn test_header_custom_theme() {
        let theme = Theme {
            color: "#ca63a8".to_string(),
            font_dir: "assets/fonts/".to_string(),
            ..Theme::default()
        };
        let header = header_section(&theme);
        assert!(header.contains("\\definecolor{awesome}{HTML}{CA63A8}"));
        assert!(header.contains("\\fontdir[assets/fonts/]"));
    }

    #[test]
    fn test_absent_slices_render_empty() {
        assert_eq!(education_section(None), "");
        assert_eq!(experience_section(None), "");
        assert_eq!(skills_section(None), "");
        assert_eq!(projects_section(None), "");
        assert_eq!(awards_section(None), "");
    }

    #[test]
    fn test_document_section_order() {
        let record = ResumeRecord {
            basics: Some(Basics {
                name: Some("Jane Doe".to_string()),
                ..Basics::default()
            }),
            education: Some(vec![School::default()]),
            work: Some(vec![Job::default()]),
            skills: Some(vec![Skill::default()]),
            projects: Some(vec![Project::default()]),
            awards: Some(vec![Award::default()]),
        };
        let doc = render_document(&record, &Theme::default());

        let positions = [
            doc.find("\\begin{document}").expect("open marker"),
            doc.find("%     Profile").expect("profile"),
            doc.find("\\cvsection{Education}").expect("education"),
            doc.find("\\cvsection{Experience}").expect("experience"),
            doc.find("\\cvsection{Skills}").expect("skills"),
            doc.find("\\cvsection{Projects}").expect("projects"),
            doc.find("\\cvsection{Honors \\& Awards}").expect("awards"),
            doc.find("\\end{document}").expect("close marker"),
        ];
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }
}
