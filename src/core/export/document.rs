//! Paginated PDF export.
//!
//! Layout and rendering are split: [`layout_document`] places every line on a page using a
//! millimetre cursor measured from the top edge, and [`render_pdf`] turns that layout into an
//! A4 document. Text is never wrapped.

use crate::domain::model::{ExportArtifact, Itinerary};
use crate::utils::error::Result;
use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Document, Object, Stream};

pub const PDF_FILE_NAME: &str = "planmate-itinerary.pdf";
pub const PDF_MIME_TYPE: &str = "application/pdf";
pub const DOCUMENT_TITLE: &str = "PlanMate Itinerary";

pub const TOP_MARGIN: u32 = 20;
pub const BOTTOM_THRESHOLD: u32 = 280;
const TITLE_ADVANCE: u32 = 10;
const DAY_HEADING_ADVANCE: u32 = 8;
const ACTIVITY_ADVANCE: u32 = 6;
const DAY_GAP: u32 = 6;

// A4 in points
const PAGE_WIDTH_PT: i64 = 595;
const PAGE_HEIGHT_PT: f64 = 841.89;
const PT_PER_MM: f64 = 72.0 / 25.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Title,
    DayHeading,
    Activity,
}

impl LineStyle {
    pub fn font_size(self) -> i64 {
        match self {
            LineStyle::Title => 18,
            LineStyle::DayHeading => 14,
            LineStyle::Activity => 11,
        }
    }

    /// Left edge in millimetres.
    pub fn x(self) -> u32 {
        match self {
            LineStyle::Title | LineStyle::DayHeading => 14,
            LineStyle::Activity => 18,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    pub style: LineStyle,
    pub text: String,
    /// Baseline in millimetres from the top edge.
    pub y: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentLayout {
    pub pages: Vec<Vec<TextLine>>,
}

impl DocumentLayout {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    pub fn lines(&self) -> impl Iterator<Item = &TextLine> {
        self.pages.iter().flatten()
    }
}

pub fn layout_document(itinerary: &Itinerary) -> DocumentLayout {
    let mut pages: Vec<Vec<TextLine>> = vec![Vec::new()];
    let mut y = TOP_MARGIN;

    place(&mut pages, LineStyle::Title, DOCUMENT_TITLE.to_string(), y);
    y += TITLE_ADVANCE;

    for day in itinerary.days() {
        place(
            &mut pages,
            LineStyle::DayHeading,
            format!("Day {}: {}", day.day_number, day.title),
            y,
        );
        y += DAY_HEADING_ADVANCE;

        for activity in &day.activities {
            place(&mut pages, LineStyle::Activity, format!("• {}", activity), y);
            y += ACTIVITY_ADVANCE;

            // 只在活動行之後檢查換頁，同一天的活動可能被拆到兩頁
            if y > BOTTOM_THRESHOLD {
                pages.push(Vec::new());
                y = TOP_MARGIN;
            }
        }

        y += DAY_GAP;
    }

    // 最後一個活動觸發換頁時，結尾會是一張空白頁
    DocumentLayout { pages }
}

fn place(pages: &mut [Vec<TextLine>], style: LineStyle, text: String, y: u32) {
    if let Some(page) = pages.last_mut() {
        page.push(TextLine { style, text, y });
    }
}

pub fn render_pdf(layout: &DocumentLayout) -> Result<Vec<u8>> {
    let mut doc = Document::with_version("1.5");
    let pages_id = doc.new_object_id();

    let font_id = doc.add_object(dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => "Helvetica",
        "Encoding" => "WinAnsiEncoding",
    });
    let resources_id = doc.add_object(dictionary! {
        "Font" => dictionary! {
            "F1" => font_id,
        },
    });

    let mut kids = Vec::with_capacity(layout.pages.len());
    for lines in &layout.pages {
        let content = Content {
            operations: page_operations(lines),
        };
        let content_id = doc.add_object(Stream::new(dictionary! {}, content.encode()?));
        let page_id = doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "Contents" => content_id,
        });
        kids.push(Object::Reference(page_id));
    }

    let page_count = kids.len() as i64;
    let pages = dictionary! {
        "Type" => "Pages",
        "Kids" => kids,
        "Count" => Object::Integer(page_count),
        "Resources" => resources_id,
        "MediaBox" => vec![
            Object::Integer(0),
            Object::Integer(0),
            Object::Integer(PAGE_WIDTH_PT),
            Object::Integer(PAGE_HEIGHT_PT.round() as i64),
        ],
    };
    doc.objects.insert(pages_id, Object::Dictionary(pages));

    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    let info_id = doc.add_object(dictionary! {
        "Title" => Object::string_literal(DOCUMENT_TITLE),
        "Producer" => Object::string_literal("planmate"),
    });
    doc.trailer.set("Root", catalog_id);
    doc.trailer.set("Info", info_id);

    let mut bytes = Vec::new();
    doc.save_to(&mut bytes)?;
    Ok(bytes)
}

pub fn export_pdf(itinerary: Option<&Itinerary>) -> Result<Option<ExportArtifact>> {
    let Some(itinerary) = itinerary else {
        tracing::warn!("PDF export requested before any itinerary was generated, skipping");
        return Ok(None);
    };

    let layout = layout_document(itinerary);
    let bytes = render_pdf(&layout)?;
    tracing::debug!(
        "Rendered PDF with {} pages ({} bytes)",
        layout.page_count(),
        bytes.len()
    );

    Ok(Some(ExportArtifact {
        file_name: PDF_FILE_NAME,
        mime_type: PDF_MIME_TYPE,
        bytes,
    }))
}

fn page_operations(lines: &[TextLine]) -> Vec<Operation> {
    let mut operations = Vec::with_capacity(lines.len() * 5);

    for line in lines {
        operations.push(Operation::new("BT", vec![]));
        operations.push(Operation::new(
            "Tf",
            vec![
                Object::Name(b"F1".to_vec()),
                Object::Integer(line.style.font_size()),
            ],
        ));
        operations.push(Operation::new(
            "Td",
            vec![
                Object::Integer(mm_to_pt(line.style.x())),
                Object::Integer(baseline_pt(line.y)),
            ],
        ));
        operations.push(Operation::new(
            "Tj",
            vec![Object::string_literal(encode_win_ansi(&line.text))],
        ));
        operations.push(Operation::new("ET", vec![]));
    }

    operations
}

fn mm_to_pt(mm: u32) -> i64 {
    (f64::from(mm) * PT_PER_MM).round() as i64
}

// PDF 座標原點在左下角
fn baseline_pt(y_mm: u32) -> i64 {
    (PAGE_HEIGHT_PT - f64::from(y_mm) * PT_PER_MM).round() as i64
}

/// Maps text onto the WinAnsi code page used by the standard Helvetica font.
pub(crate) fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            ' '..='~' | '\u{a0}'..='\u{ff}' => c as u8,
            '€' => 0x80,
            '…' => 0x85,
            '‘' => 0x91,
            '’' => 0x92,
            '“' => 0x93,
            '”' => 0x94,
            '•' => 0x95,
            '–' => 0x96,
            '—' => 0x97,
            _ => b'?',
        })
        .collect()
}
