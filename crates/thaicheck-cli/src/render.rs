//! Terminal tables for validation results.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use thaicheck_model::{FieldCounts, FieldKind, FieldOutcome, RowValidation, Summary};
use thaicheck_validate::checks::ID_LENGTH;
use thaicheck_validate::{id_check_digit, is_valid_id, matching_headers};

/// One-line pass/fail total.
pub fn summary_line(summary: &Summary) -> String {
    format!("{summary} rows valid ({} invalid)", summary.invalid())
}

/// Per-row table. Each field cell shows a check mark and the trimmed value.
pub fn results_table(results: &[RowValidation<'_>], invalid_only: bool) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Row"),
        header_cell("ID"),
        header_cell("Name"),
        header_cell("Address"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for result in results {
        if invalid_only && result.is_valid() {
            continue;
        }
        table.add_row(vec![
            Cell::new(result.index + 1),
            field_cell(&result.id),
            field_cell(&result.name),
            field_cell(&result.address),
            status_cell(result.is_valid()),
        ]);
    }
    table
}

/// Per-field failure counts with a total row.
pub fn counts_table(summary: &Summary, counts: &FieldCounts) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Invalid"),
        header_cell("No column"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for kind in FieldKind::ALL {
        table.add_row(vec![
            Cell::new(kind.label()).fg(Color::Blue),
            count_cell(counts.invalid(kind), Color::Red),
            count_cell(counts.unresolved(kind), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("ROWS")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        count_cell(summary.invalid(), Color::Red).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

/// Resolved column and all candidates per field kind.
pub fn columns_table(headers: &[String]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Field"),
        header_cell("Column"),
        header_cell("Candidates"),
    ]);
    apply_table_style(&mut table);
    for kind in FieldKind::ALL {
        let candidates = matching_headers(headers.iter().map(String::as_str), kind);
        let column = match candidates.first() {
            Some(header) if candidates.len() > 1 => Cell::new(format!("{header} (ambiguous)"))
                .fg(Color::Yellow)
                .add_attribute(Attribute::Bold),
            Some(header) => Cell::new(*header).fg(Color::Green),
            None => Cell::new("not found").fg(Color::Red),
        };
        let listed = if candidates.is_empty() {
            dim_cell("-")
        } else {
            Cell::new(candidates.join(", "))
        };
        table.add_row(vec![Cell::new(kind.label()).fg(Color::Blue), column, listed]);
    }
    table
}

/// Outcome of checking a single ID given on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdCheck {
    pub input: String,
    pub valid: bool,
    /// Check digit the first twelve digits call for, when they are digits.
    pub expected_digit: Option<u8>,
}

impl IdCheck {
    pub fn new(raw: &str) -> Self {
        let input = raw.trim();
        let expected_digit = if input.len() == ID_LENGTH || input.len() == ID_LENGTH - 1 {
            input.get(..ID_LENGTH - 1).and_then(id_check_digit)
        } else {
            None
        };
        Self {
            input: input.to_string(),
            valid: is_valid_id(input),
            expected_digit,
        }
    }
}

pub fn id_table(checks: &[IdCheck]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("ID"),
        header_cell("Status"),
        header_cell("Check digit"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Center);
    for check in checks {
        let digit = match check.expected_digit {
            Some(digit) => Cell::new(digit),
            None => dim_cell("-"),
        };
        table.add_row(vec![
            Cell::new(&check.input),
            status_cell(check.valid),
            digit,
        ]);
    }
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn field_cell(outcome: &FieldOutcome<'_>) -> Cell {
    if !outcome.is_resolved() {
        return Cell::new("✗ (no column)").fg(Color::DarkGrey);
    }
    let value = if outcome.value.is_empty() {
        "(empty)"
    } else {
        outcome.value
    };
    if outcome.valid {
        Cell::new(format!("✓ {value}")).fg(Color::Green)
    } else {
        Cell::new(format!("✗ {value}")).fg(Color::Red)
    }
}

fn status_cell(valid: bool) -> Cell {
    if valid {
        Cell::new("VALID")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("INVALID")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
