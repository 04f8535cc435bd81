//! resumetex - render JSON Resume data as an Awesome-CV LaTeX document
//!
//! This library is a pure data-to-text transformation: it takes a sanitized
//! resume record and returns the source of a complete LaTeX document built on
//! the Awesome-CV document class. It never touches the filesystem, never
//! invokes a LaTeX compiler and never fails; absent fields degrade to omitted
//! text. Compiling the output (e.g. with `xelatex`) is the caller's business.
//!
//! # Example
//!
//! ```rust
//! use resumetex::render;
//! use resumetex::resume::{Basics, ResumeRecord};
//!
//! let record = ResumeRecord {
//!     basics: Some(Basics {
//!         name: Some("Jane Doe".to_string()),
//!         ..Basics::default()
//!     }),
//!     ..ResumeRecord::default()
//! };
//!
//! let tex = render(&record);
//! assert!(tex.contains("\\begin{document}"));
//! assert!(tex.contains("\\headerfirstnamestyle{Jane}"));
//! ```

pub mod renderer;
pub mod resume;
pub mod theme;

pub use renderer::render_document;
pub use resume::ResumeRecord;
pub use theme::{Theme, ThemeError};

/// Configuration for the render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Theme for the document preamble
    pub theme: Theme,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the preamble theme
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }
}

/// Render a resume record with the default configuration
///
/// This is the main entry point for the library. The output preamble matches
/// the stock Awesome-CV template.
pub fn render(record: &ResumeRecord) -> String {
    render_with_config(record, &RenderConfig::default())
}

/// Render a resume record with a custom configuration
///
/// # Example
///
/// ```rust
/// use resumetex::{render_with_config, RenderConfig, ResumeRecord, Theme};
///
/// let theme = Theme {
///     color: "awesome-skyblue".to_string(),
///     ..Theme::default()
/// };
/// let config = RenderConfig::new().with_theme(theme);
///
/// let tex = render_with_config(&ResumeRecord::default(), &config);
/// assert!(tex.contains("\\colorlet{awesome}{awesome-skyblue}"));
/// ```
pub fn render_with_config(record: &ResumeRecord, config: &RenderConfig) -> String {
    render_document(record, &config.theme)
}
