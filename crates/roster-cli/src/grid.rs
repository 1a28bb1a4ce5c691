//! Terminal rendering of the roster grid and summaries.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use roster_model::{ColorKey, DayHalf, Role, RosterTable, is_editable, legal_codes, style_of};

use crate::commands::ExportOutcome;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .add_attribute(Attribute::Bold)
        .set_alignment(CellAlignment::Center)
}

/// Render the full roster grid: pinned employee columns, then a morning
/// and an afternoon column per day.
pub fn print_roster(table: &RosterTable) {
    let labels = table.range().labels();
    let mut grid = Table::new();
    apply_table_style(&mut grid);
    let mut header = vec![header_cell("FullName"), header_cell("Position")];
    for label in &labels {
        header.push(header_cell(&format!("{label} ☀")));
        header.push(header_cell(&format!("{label} 🌙")));
    }
    grid.set_header(header);
    for row in table.snapshot() {
        let mut cells = vec![
            Cell::new(&row.employee.full_name),
            Cell::new(&row.employee.position).fg(Color::DarkGrey),
        ];
        for day in 0..labels.len() {
            for half in DayHalf::ALL {
                cells.push(slot_cell(row.slot(day, half), row.role, half));
            }
        }
        grid.add_row(cells);
    }
    println!("{grid}");
}

fn slot_cell(code: &str, role: Role, half: DayHalf) -> Cell {
    if !is_editable(role, half) {
        return Cell::new("–")
            .fg(Color::DarkGrey)
            .set_alignment(CellAlignment::Center);
    }
    if code.is_empty() {
        return Cell::new("").set_alignment(CellAlignment::Center);
    }
    let style = style_of(code);
    let mut cell = Cell::new(code)
        .fg(Color::White)
        .set_alignment(CellAlignment::Center);
    if let Some((r, g, b)) = color_rgb(style.color) {
        cell = cell.bg(Color::Rgb { r, g, b });
    }
    if style.emphasized {
        cell = cell.add_attribute(Attribute::Bold);
    }
    cell
}

fn color_rgb(color: ColorKey) -> Option<(u8, u8, u8)> {
    let hex = color.background_hex()?.strip_prefix('#')?;
    let value = u32::from_str_radix(hex, 16).ok()?;
    Some(((value >> 16) as u8, (value >> 8) as u8, value as u8))
}

/// Print the legal-code table per role and day half.
pub fn print_codes() {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Role"),
        header_cell("Morning"),
        header_cell("Afternoon"),
    ]);
    for role in Role::ALL {
        table.add_row(vec![
            Cell::new(role.as_str()).add_attribute(Attribute::Bold),
            Cell::new(codes_label(role, DayHalf::Morning)),
            codes_cell(role, DayHalf::Afternoon),
        ]);
    }
    println!("{table}");
}

fn codes_label(role: Role, half: DayHalf) -> String {
    let non_empty: Vec<&str> = legal_codes(role, half)
        .iter()
        .copied()
        .filter(|code| !code.is_empty())
        .collect();
    if non_empty.is_empty() {
        "(locked)".to_string()
    } else {
        non_empty.join(", ")
    }
}

fn codes_cell(role: Role, half: DayHalf) -> Cell {
    let label = codes_label(role, half);
    if is_editable(role, half) {
        Cell::new(label)
    } else {
        Cell::new(label).fg(Color::DarkGrey)
    }
}

/// Print classification results for the given position strings.
pub fn print_classification(positions: &[String]) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![header_cell("Position"), header_cell("Role")]);
    for position in positions {
        let role = roster_model::classify(position);
        table.add_row(vec![
            Cell::new(position),
            Cell::new(role.as_str()).add_attribute(Attribute::Bold),
        ]);
    }
    println!("{table}");
}

/// Print the export result: files written and batch counts.
pub fn print_export_summary(outcome: &ExportOutcome) {
    for path in &outcome.outputs {
        println!("Written: {}", path.display());
    }
    let mut table = Table::new();
    apply_table_style(&mut table);
    table.set_header(vec![
        header_cell("Employees"),
        header_cell("Days"),
        header_cell("Applied"),
        header_cell("Rejected"),
    ]);
    align_right(&mut table, 0);
    align_right(&mut table, 1);
    align_right(&mut table, 2);
    align_right(&mut table, 3);
    table.add_row(vec![
        Cell::new(outcome.rows),
        Cell::new(outcome.day_count),
        Cell::new(outcome.applied),
        rejected_cell(outcome.rejected),
    ]);
    println!("{table}");
}

fn rejected_cell(rejected: usize) -> Cell {
    if rejected > 0 {
        Cell::new(rejected).fg(Color::Yellow)
    } else {
        Cell::new(rejected)
    }
}

fn align_right(table: &mut Table, index: usize) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}
