//! anamnesis-export
//!
//! Report rendering (Tera) and DOCX generation for a patient history.

pub mod docx;
pub mod error;
pub mod render;
pub mod styles;

use tracing::info;

use crate::error::ExportError;
use crate::render::ReportContext;
use crate::styles::DocumentStyles;

/// Render the report and pack it as DOCX bytes.
///
/// `template` replaces the built-in report template when given.
pub fn export_docx(
    context: &ReportContext,
    template: Option<&str>,
    styles: &DocumentStyles,
) -> Result<Vec<u8>, ExportError> {
    let rendered = match template {
        Some(content) => render::render_template("custom", content, context)?,
        None => render::render_report(context)?,
    };
    let bytes = docx::generate_docx(&rendered, styles)?;
    info!(
        bytes = bytes.len(),
        complaints = context.complaints.len(),
        diagnoses = context.diagnoses.len(),
        "report exported"
    );
    Ok(bytes)
}
