//! Terminal summary for `deid run`.

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

/// Prints the run summary: paths, the per-pass table, and any errors.
pub fn print_summary(result: &RunResult) {
    println!("Input:  {}", result.input_path.display());
    if result.dry_run {
        println!(
            "Output: {} (dry run, not written)",
            result.output_path.display()
        );
    } else {
        println!("Output: {}", result.output_path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }

    if result.outcomes.is_empty() {
        println!("No passes configured; the output equals the input.");
    } else {
        println!("{}", build_summary_table(result));
    }

    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

fn build_summary_table(result: &RunResult) -> Table {
    let mut table = Table::new();
    apply_summary_table_style(&mut table);
    table.set_header(vec![
        header_cell("Column"),
        header_cell("Policy"),
        header_cell("Rows"),
        header_cell("Changed"),
        header_cell("Passthrough"),
        header_cell("Applied"),
    ]);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    align_column(&mut table, 5, CellAlignment::Center);

    let mut total_changed = 0;
    let mut total_passthrough = 0;
    for outcome in &result.outcomes {
        total_changed += outcome.changed;
        total_passthrough += outcome.passthrough;
        table.add_row(vec![
            Cell::new(&outcome.column)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&outcome.policy),
            Cell::new(outcome.rows),
            count_cell(outcome.changed, Color::Green),
            count_cell(outcome.passthrough, Color::Yellow),
            applied_cell(outcome.skipped),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(result.rows).add_attribute(Attribute::Bold),
        count_cell(total_changed, Color::Green).add_attribute(Attribute::Bold),
        count_cell(total_passthrough, Color::Yellow).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    table
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(text: &str) -> Cell {
    Cell::new(text).fg(Color::DarkGrey)
}

fn count_cell(value: usize, color: Color) -> Cell {
    if value == 0 {
        dim_cell("0")
    } else {
        Cell::new(value).fg(color)
    }
}

fn applied_cell(skipped: bool) -> Cell {
    if skipped {
        dim_cell("skip")
    } else {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    }
}
