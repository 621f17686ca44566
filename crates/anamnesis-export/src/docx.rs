use std::io::Cursor;

use docx_rs::{AlignmentType, BreakType, Docx, Paragraph, Run, RunFonts, Style, StyleType};

use crate::error::ExportError;
use crate::styles::DocumentStyles;

/// Generate a DOCX document from rendered report text.
///
/// The text uses a small Markdown subset:
/// - `#`, `##`, `###` headings
/// - `- item` bullet items
/// - `1. item` numbered items (the number is kept as written)
/// - `**bold**` inline runs
/// - `---` page break
///
/// Runs of blank lines collapse into one empty paragraph.
pub fn generate_docx(rendered: &str, styles: &DocumentStyles) -> Result<Vec<u8>, ExportError> {
    let mut docx = Docx::new()
        .add_style(heading_style("Heading1", "heading 1", styles.heading1_size))
        .add_style(heading_style("Heading2", "heading 2", styles.heading2_size))
        .add_style(heading_style("Heading3", "heading 3", styles.heading3_size));

    let mut previous_blank = true;
    for line in rendered.lines() {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            if !previous_blank {
                docx = docx.add_paragraph(Paragraph::new());
            }
            previous_blank = true;
            continue;
        }
        previous_blank = false;

        let paragraph = if let Some(text) = trimmed.strip_prefix("### ") {
            heading_paragraph(text, "Heading3", styles)
        } else if let Some(text) = trimmed.strip_prefix("## ") {
            heading_paragraph(text, "Heading2", styles)
        } else if let Some(text) = trimmed.strip_prefix("# ") {
            heading_paragraph(text, "Heading1", styles)
        } else if let Some(text) = trimmed.strip_prefix("- ") {
            list_paragraph("\u{2022} ", text, styles)
        } else if let Some((number, text)) = split_numbered(trimmed) {
            list_paragraph(&format!("{number}. "), text, styles)
        } else if trimmed == "---" {
            Paragraph::new().add_run(Run::new().add_break(BreakType::Page))
        } else {
            body_paragraph(trimmed, styles)
        };
        docx = docx.add_paragraph(paragraph);
    }

    let mut buf = Cursor::new(Vec::new());
    docx.build()
        .pack(&mut buf)
        .map_err(|e| ExportError::Docx(e.to_string()))?;

    Ok(buf.into_inner())
}

/// `12. Text` -> `("12", "Text")`.
fn split_numbered(line: &str) -> Option<(&str, &str)> {
    let (number, text) = line.split_once(". ")?;
    if !number.is_empty() && number.bytes().all(|b| b.is_ascii_digit()) {
        Some((number, text))
    } else {
        None
    }
}

fn heading_style(style_id: &str, name: &str, size_pt: usize) -> Style {
    Style::new(style_id, StyleType::Paragraph)
        .name(name)
        .size(size_pt * 2) // half-points
}

fn heading_paragraph(text: &str, style_id: &str, styles: &DocumentStyles) -> Paragraph {
    Paragraph::new().style(style_id).add_run(
        Run::new()
            .add_text(text)
            .bold()
            .fonts(RunFonts::new().ascii(&styles.heading_font)),
    )
}

fn list_paragraph(marker: &str, text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new()
        .align(AlignmentType::Left)
        .add_run(body_run(marker, styles));

    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_paragraph(text: &str, styles: &DocumentStyles) -> Paragraph {
    let mut para = Paragraph::new().align(AlignmentType::Left);
    for run in parse_inline(text, styles) {
        para = para.add_run(run);
    }
    para
}

fn body_run(text: &str, styles: &DocumentStyles) -> Run {
    Run::new()
        .add_text(text)
        .size(styles.body_size * 2)
        .fonts(RunFonts::new().ascii(&styles.body_font))
}

/// Split `**bold**` segments into runs. An unclosed `**` is kept as text.
fn parse_inline(text: &str, styles: &DocumentStyles) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut remaining = text;

    while let Some(start) = remaining.find("**") {
        let after_start = &remaining[start + 2..];
        let Some(end) = after_start.find("**") else {
            break;
        };

        let before = &remaining[..start];
        if !before.is_empty() {
            runs.push(body_run(before, styles));
        }
        let bold = &after_start[..end];
        if !bold.is_empty() {
            runs.push(body_run(bold, styles).bold());
        }
        remaining = &after_start[end + 2..];
    }

    if !remaining.is_empty() {
        runs.push(body_run(remaining, styles));
    }
    runs
}
