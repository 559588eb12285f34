//! Export service
//!
//! Serializes a record set to downloadable CSV or PDF bytes. Callers are
//! expected to have sorted and filtered already; rows are emitted in the
//! order given, id excluded.

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use crate::{
    error::{AppError, AppResult},
    models::equipment::Equipment,
};

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const TOP_MARGIN_MM: f32 = 277.0;
const BOTTOM_MARGIN_MM: f32 = 20.0;
const ROW_HEIGHT_MM: f32 = 7.0;
const FONT_SIZE: f32 = 10.0;

/// Column layout: header label, x position, max characters per cell
const COLUMNS: [(&str, f32, usize); 4] = [
    ("Name", 15.0, 32),
    ("Model", 70.0, 28),
    ("Location", 120.0, 28),
    ("Date", 170.0, 10),
];

#[derive(Clone)]
pub struct ExportService;

impl ExportService {
    pub fn new() -> Self {
        Self
    }

    /// Render records as CSV: header `Name,Model,Location,Date`, one row per
    /// record, RFC-4180 quoting handled by the csv crate.
    pub fn to_csv(&self, records: &[Equipment]) -> AppResult<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        writer
            .write_record(["Name", "Model", "Location", "Date"])
            .map_err(|e| AppError::Export(e.to_string()))?;
        for r in records {
            writer
                .write_record([
                    r.name.as_str(),
                    r.model.as_str(),
                    r.location.as_str(),
                    r.date.as_str(),
                ])
                .map_err(|e| AppError::Export(e.to_string()))?;
        }
        writer
            .into_inner()
            .map_err(|e| AppError::Export(e.to_string()))
    }

    /// Render records as a tabular A4 PDF. The header row repeats on every
    /// page; a page break happens between rows, never inside one.
    pub fn to_pdf(&self, records: &[Equipment]) -> AppResult<Vec<u8>> {
        let (doc, first_page, first_layer) =
            PdfDocument::new("Equipment Log", Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
        let font = doc
            .add_builtin_font(BuiltinFont::Helvetica)
            .map_err(|e| AppError::Export(e.to_string()))?;
        let header_font = doc
            .add_builtin_font(BuiltinFont::HelveticaBold)
            .map_err(|e| AppError::Export(e.to_string()))?;

        let mut layer = doc.get_page(first_page).get_layer(first_layer);
        let mut y = TOP_MARGIN_MM;
        draw_header(&layer, &header_font, y);
        y -= ROW_HEIGHT_MM;

        for r in records {
            if y < BOTTOM_MARGIN_MM {
                let (page, new_layer) =
                    doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "table");
                layer = doc.get_page(page).get_layer(new_layer);
                y = TOP_MARGIN_MM;
                draw_header(&layer, &header_font, y);
                y -= ROW_HEIGHT_MM;
            }
            let cells = [&r.name, &r.model, &r.location, &r.date];
            for ((_, x, max_chars), cell) in COLUMNS.iter().zip(cells) {
                layer.use_text(truncate(cell, *max_chars), FONT_SIZE, Mm(*x), Mm(y), &font);
            }
            y -= ROW_HEIGHT_MM;
        }

        doc.save_to_bytes()
            .map_err(|e| AppError::Export(e.to_string()))
    }
}

impl Default for ExportService {
    fn default() -> Self {
        Self::new()
    }
}

fn draw_header(layer: &PdfLayerReference, font: &IndirectFontRef, y: f32) {
    for (label, x, _) in COLUMNS {
        layer.use_text(label, FONT_SIZE, Mm(x), Mm(y), font);
    }
}

/// Clip a cell to its column so long values cannot bleed into the next one
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let clipped: String = text.chars().take(max_chars.saturating_sub(1)).collect();
        format!("{}…", clipped)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, model: &str, location: &str, date: &str) -> Equipment {
        Equipment {
            id: 1,
            name: name.to_string(),
            model: model.to_string(),
            location: location.to_string(),
            date: date.to_string(),
        }
    }

    #[test]
    fn test_csv_header_and_row() {
        let out = ExportService::new()
            .to_csv(&[record("N1", "M1", "L1", "2024-01-01")])
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name,Model,Location,Date\nN1,M1,L1,2024-01-01\n"
        );
    }

    #[test]
    fn test_csv_quotes_fields_with_commas() {
        let out = ExportService::new()
            .to_csv(&[record("Saw, circular", "M1", "L1", "2024-01-01")])
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Name,Model,Location,Date\n\"Saw, circular\",M1,L1,2024-01-01\n"
        );
    }

    #[test]
    fn test_csv_empty_input_is_header_only() {
        let out = ExportService::new().to_csv(&[]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Name,Model,Location,Date\n");
    }

    #[test]
    fn test_pdf_output_is_nonempty_pdf() {
        let out = ExportService::new()
            .to_pdf(&[record("N1", "M1", "L1", "2024-01-01")])
            .unwrap();
        assert!(out.starts_with(b"%PDF"));
    }

    /// Occurrences of `needle` in `haystack`
    fn count_occurrences(haystack: &[u8], needle: &[u8]) -> usize {
        haystack.windows(needle.len()).filter(|w| *w == needle).count()
    }

    #[test]
    fn test_pdf_paginates_without_losing_rows() {
        let single = ExportService::new()
            .to_pdf(&[record("Item", "M", "L", "2024-01-01")])
            .unwrap();
        assert_eq!(count_occurrences(&single, b"/MediaBox"), 1);

        // 120 rows at ~36 rows per page must spill onto further pages; every
        // page object carries its own /MediaBox entry
        let records: Vec<Equipment> = (0..120)
            .map(|i| record(&format!("Item {}", i), "M", "L", "2024-01-01"))
            .collect();
        let out = ExportService::new().to_pdf(&records).unwrap();
        assert!(out.starts_with(b"%PDF"));
        assert!(count_occurrences(&out, b"/MediaBox") > 1);
    }

    #[test]
    fn test_truncate_clips_long_cells() {
        assert_eq!(truncate("short", 10), "short");
        let clipped = truncate("a very long equipment description", 10);
        assert_eq!(clipped.chars().count(), 10);
        assert!(clipped.ends_with('…'));
    }
}
