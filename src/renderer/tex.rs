//! Low-level LaTeX emission helpers shared by the section builders.
//!
//! Field values are interpolated as opaque text; escaping is the upstream
//! sanitizer's job, and malformed LaTeX is the downstream compiler's to reject.

/// Placeholder token emitted before `\end{document}` so the body is never
/// completely empty.
pub const WHITESPACE: &str = "\\ ";

const BANNER_RULE: &str = "%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%%";

/// Comment banner preceding a section
pub fn banner(title: &str) -> String {
    format!("{BANNER_RULE}\n%     {title}\n{BANNER_RULE}")
}

/// Serialize one fixed-arity macro call.
///
/// Every argument slot is emitted as a brace-delimited group on its own
/// indented line. Absent fields must be passed as empty strings so the
/// argument count never varies; the Awesome-CV macros (`\cventry`,
/// `\cvhonor`) read their arguments positionally.
pub fn macro_call(name: &str, args: &[&str]) -> String {
    let mut out = format!("\\{name}");
    for arg in args {
        out.push_str("\n  {");
        out.push_str(arg);
        out.push('}');
    }
    out
}

/// Itemized `cvitems` block for experience highlights.
///
/// An empty slice still produces the environment envelope with no items;
/// callers that want to omit the block entirely do so before calling.
/// Indentation assumes the block is embedded as a macro argument.
pub fn cv_items(items: &[String]) -> String {
    let mut out = String::from("\\begin{cvitems}");
    for item in items {
        out.push_str("\n    \\item {");
        out.push_str(item);
        out.push('}');
    }
    out.push_str("\n  \\end{cvitems}");
    out
}

/// Date range with a three-way fallback.
///
/// Both dates present joins them with an en dash, a lone start date is
/// open-ended ("Present"), a lone end date passes through raw. Dates are
/// opaque strings, never validated.
pub fn date_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => format!("{start} – {end}"),
        (Some(start), None) => format!("{start} – Present"),
        (None, Some(end)) => end.to_string(),
        (None, None) => String::new(),
    }
}
