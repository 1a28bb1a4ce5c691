use std::path::Path;

use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use tracing::debug;

use roster_model::style_of;

use crate::error::Result;
use crate::project::ExportRecord;

/// Workbook layout knobs for the XLSX writer.
#[derive(Debug, Clone)]
pub struct XlsxOptions {
    pub sheet_name: String,
    /// Width of the per-day columns.
    pub day_column_width: f64,
}

impl Default for XlsxOptions {
    fn default() -> Self {
        Self {
            sheet_name: "Roster".to_string(),
            day_column_width: 9.0,
        }
    }
}

/// Build the workbook and return its bytes. The caller owns the buffer;
/// nothing is cached in ambient state, so a second call over the same
/// records produces the same bytes again.
pub fn xlsx_bytes(
    records: &[ExportRecord],
    labels: &[String],
    options: &XlsxOptions,
) -> Result<Vec<u8>> {
    let mut workbook = build_workbook(records, labels, options)?;
    Ok(workbook.save_to_buffer()?)
}

/// Write the workbook to a file on disk.
pub fn write_xlsx(
    records: &[ExportRecord],
    labels: &[String],
    options: &XlsxOptions,
    path: &Path,
) -> Result<()> {
    let mut workbook = build_workbook(records, labels, options)?;
    workbook.save(path)?;
    debug!(path = %path.display(), rows = records.len(), "xlsx written");
    Ok(())
}

fn build_workbook(
    records: &[ExportRecord],
    labels: &[String],
    options: &XlsxOptions,
) -> Result<Workbook> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(&options.sheet_name)?;

    let header = Format::new()
        .set_bold()
        .set_background_color(0x22263A)
        .set_font_color(0xE0E4F0)
        .set_align(FormatAlign::Center);

    worksheet.write_string_with_format(0, 0, "FullName", &header)?;
    worksheet.write_string_with_format(0, 1, "Position", &header)?;
    for (idx, label) in labels.iter().enumerate() {
        let col = (idx + 2) as u16;
        worksheet.write_string_with_format(0, col, label, &header)?;
        worksheet.set_column_width(col, options.day_column_width)?;
    }
    worksheet.set_column_width(0, 22.0)?;
    worksheet.set_column_width(1, 14.0)?;

    for (row_idx, record) in records.iter().enumerate() {
        let row = (row_idx + 1) as u32;
        worksheet.write_string(row, 0, &record.full_name)?;
        worksheet.write_string(row, 1, &record.position)?;
        for (day_idx, merged) in record.days.iter().enumerate() {
            let col = (day_idx + 2) as u16;
            match shift_format(merged) {
                Some(format) => {
                    worksheet.write_string_with_format(row, col, merged, &format)?;
                }
                None => {
                    worksheet.write_string(row, col, merged)?;
                }
            }
        }
    }
    Ok(workbook)
}

/// Cell format for a merged day value, colored by the leading token's
/// category. A merged cell can hold two tokens of different categories;
/// the first token decides, matching how the grid styled the cell it
/// came from.
fn shift_format(merged: &str) -> Option<Format> {
    let style = style_of(merged);
    let background = hex_to_rgb(style.color.background_hex()?)?;
    let mut format = Format::new()
        .set_background_color(background)
        .set_font_color(0xFFFFFF)
        .set_align(FormatAlign::Center);
    if style.emphasized {
        format = format.set_bold();
    }
    Some(format)
}

fn hex_to_rgb(hex: &str) -> Option<u32> {
    u32::from_str_radix(hex.strip_prefix('#')?, 16).ok()
}
