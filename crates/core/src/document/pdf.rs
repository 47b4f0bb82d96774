//! PDF rendering of a generated report.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};
use tracing::debug;

use super::error::DocumentError;
use super::layout::{Page, PageLayout, paginate};
use super::wrap::{PAGE_LINE_WIDTH, wrap_text};

const HEADER_TEXT: &str = "Currency Report";
const HEADER_SIZE: f32 = 15.0;
const TITLE_SIZE: f32 = 16.0;
const BODY_SIZE: f32 = 12.0;
const FOOTER_SIZE: f32 = 8.0;

/// Millimetres per typographic point.
const PT_TO_MM: f32 = 0.3528;

/// Average Helvetica glyph width as a fraction of the font size.
const AVG_GLYPH_WIDTH: f32 = 0.5;

/// Everything needed to render one report.
#[derive(Debug, Clone, Copy)]
pub struct ReportDocument<'a> {
    /// Currency pair code shown in the title.
    pub currency: &'a str,
    /// First day of the period.
    pub start_date: &'a str,
    /// Last day of the period.
    pub end_date: &'a str,
    /// Report text as returned by the model.
    pub body: &'a str,
}

struct Fonts {
    regular: IndirectFontRef,
    bold: IndirectFontRef,
    oblique: IndirectFontRef,
}

/// Renders the report into an in-memory PDF.
///
/// The body is wrapped to [`PAGE_LINE_WIDTH`] and paginated on A4. Page one
/// carries the title block; every page carries the header and a page number.
///
/// # Errors
///
/// Returns [`DocumentError::EmptyReport`] for a blank body and
/// [`DocumentError::Render`] if the PDF backend fails.
pub fn render_pdf(report: &ReportDocument<'_>) -> Result<Vec<u8>, DocumentError> {
    if report.body.trim().is_empty() {
        return Err(DocumentError::EmptyReport);
    }

    let layout = PageLayout::A4;
    let lines = wrap_text(&to_latin1(report.body), PAGE_LINE_WIDTH);
    let pages = paginate(&lines, &layout);

    let width = Mm(layout.page_width_mm as f32);
    let height = Mm(layout.page_height_mm as f32);
    let (doc, first_page, first_layer) = PdfDocument::new(HEADER_TEXT, width, height, "Page 1");

    let fonts = Fonts {
        regular: doc.add_builtin_font(BuiltinFont::Helvetica).map_err(render_error)?,
        bold: doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(render_error)?,
        oblique: doc.add_builtin_font(BuiltinFont::HelveticaOblique).map_err(render_error)?,
    };

    for page in &pages {
        let (page_idx, layer_idx) = if page.number == 1 {
            (first_page, first_layer)
        } else {
            doc.add_page(width, height, format!("Page {}", page.number))
        };
        let layer = doc.get_page(page_idx).get_layer(layer_idx);
        draw_page(&layer, page, report, &fonts, &layout);
    }

    let bytes = doc.save_to_bytes().map_err(render_error)?;
    debug!(
        currency = report.currency,
        lines = lines.len(),
        pages = pages.len(),
        bytes = bytes.len(),
        "PDF rendered"
    );
    Ok(bytes)
}

fn draw_page(
    layer: &PdfLayerReference,
    page: &Page<'_>,
    report: &ReportDocument<'_>,
    fonts: &Fonts,
    layout: &PageLayout,
) {
    // Header cell is 10mm tall; the baseline sits near its bottom.
    let header = HEADER_TEXT;
    layer.use_text(
        header,
        HEADER_SIZE,
        centered_x(header, HEADER_SIZE, layout),
        from_top(layout, layout.top_margin_mm + 7),
        &fonts.bold,
    );

    if page.has_title {
        let title = to_latin1(&format!("Currency Report: {}", report.currency));
        let period = to_latin1(&format!(
            "Period: {} to {}",
            report.start_date, report.end_date
        ));
        let top = layout.header_bottom();
        for (offset, text) in [(7, title), (17, period)] {
            layer.use_text(
                text.as_str(),
                TITLE_SIZE,
                centered_x(&text, TITLE_SIZE, layout),
                from_top(layout, top + offset),
                &fonts.bold,
            );
        }
    }

    let mut baseline = layout.body_top(page.has_title);
    for line in page.lines {
        baseline += layout.line_height_mm;
        layer.use_text(
            line.as_str(),
            BODY_SIZE,
            Mm(layout.left_margin_mm as f32),
            from_top(layout, baseline - 1),
            &fonts.regular,
        );
    }

    let footer = format!("Page {}", page.number);
    layer.use_text(
        footer.as_str(),
        FOOTER_SIZE,
        centered_x(&footer, FOOTER_SIZE, layout),
        Mm(layout.footer_offset_mm as f32),
        &fonts.oblique,
    );
}

/// Converts a distance from the top edge to a PDF y coordinate.
fn from_top(layout: &PageLayout, mm: u32) -> Mm {
    Mm(layout.page_height_mm.saturating_sub(mm) as f32)
}

/// Approximate x position that centres `text` on the page.
fn centered_x(text: &str, size: f32, layout: &PageLayout) -> Mm {
    let text_width = text.chars().count() as f32 * size * AVG_GLYPH_WIDTH * PT_TO_MM;
    Mm(((layout.page_width_mm as f32 - text_width) / 2.0).max(0.0))
}

fn render_error(err: impl std::fmt::Display) -> DocumentError {
    DocumentError::Render(err.to_string())
}

/// Maps text onto the Latin-1 repertoire of the built-in fonts.
///
/// Typographic punctuation is transliterated; anything else outside
/// Latin-1, and control characters other than newlines, become `?`.
pub fn to_latin1(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\u{2018}' | '\u{2019}' | '\u{201A}' | '\u{2032}' => out.push('\''),
            '\u{201C}' | '\u{201D}' | '\u{201E}' | '\u{2033}' => out.push('"'),
            '\u{2010}'..='\u{2015}' | '\u{2212}' => out.push('-'),
            '\u{2026}' => out.push_str("..."),
            '\u{2022}' | '\u{2023}' | '\u{25CF}' => out.push('*'),
            '\u{00A0}' | '\u{2002}'..='\u{200A}' | '\t' => out.push(' '),
            '\u{200B}' | '\u{FEFF}' => {}
            '\n' | '\r' => out.push(c),
            c if c.is_control() => out.push('?'),
            c if u32::from(c) <= 0xFF => out.push(c),
            _ => out.push('?'),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn document(body: &str) -> ReportDocument<'_> {
        ReportDocument {
            currency: "USDINR",
            start_date: "2025-05-01",
            end_date: "2025-05-31",
            body,
        }
    }

    #[test]
    fn test_renders_pdf_bytes() {
        let bytes = render_pdf(&document("The rupee held steady.\n\nOutlook: stable.")).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_long_report_spans_pages() {
        let body = "Paragraph of analysis text.\n".repeat(120);
        let short = render_pdf(&document("one line")).unwrap();
        let long = render_pdf(&document(&body)).unwrap();
        assert!(long.starts_with(b"%PDF-"));
        assert!(long.len() > short.len());
    }

    #[test]
    fn test_non_latin_text_still_renders() {
        let bytes = render_pdf(&document("“Quoted” — 円 rally… ✓")).unwrap();
        assert!(bytes.starts_with(b"%PDF-"));
    }

    #[rstest]
    #[case("")]
    #[case("   \n\t ")]
    fn test_blank_body_rejected(#[case] body: &str) {
        assert_eq!(render_pdf(&document(body)), Err(DocumentError::EmptyReport));
    }

    #[rstest]
    #[case("plain ascii", "plain ascii")]
    #[case("“a” ‘b’", "\"a\" 'b'")]
    #[case("x – y — z", "x - y - z")]
    #[case("wait…", "wait...")]
    #[case("• item", "* item")]
    #[case("café £5", "café £5")]
    #[case("円", "?")]
    #[case("a\u{7}b", "a?b")]
    #[case("col\tumn", "col umn")]
    #[case("line\nbreak", "line\nbreak")]
    fn test_to_latin1(#[case] input: &str, #[case] expected: &str) {
        assert_eq!(to_latin1(input), expected);
    }

    #[test]
    fn test_centering_stays_on_page() {
        let layout = PageLayout::A4;
        let x = centered_x(HEADER_TEXT, HEADER_SIZE, &layout);
        assert!(x.0 > 0.0 && x.0 < layout.page_width_mm as f32 / 2.0);
        let huge = "W".repeat(500);
        assert!(centered_x(&huge, TITLE_SIZE, &layout).0 >= 0.0);
    }

    #[test]
    fn test_from_top_flips_axis() {
        let layout = PageLayout::A4;
        assert!((from_top(&layout, 10).0 - 287.0).abs() < f32::EPSILON);
        assert!(from_top(&layout, 1_000).0.abs() < f32::EPSILON);
    }
}
