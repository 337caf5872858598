use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use clinic_ingest::IngestReport;
use clinic_model::{AggregateSummary, AttendanceStatus};

use crate::types::{CheckResult, DayResult, ExportResult, MonthResult};

pub fn print_day(result: &DayResult) {
    println!("Date: {}", result.day);
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patient"),
        header_cell("Name"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    for row in &result.rows {
        table.add_row(vec![
            Cell::new(&row.display_id),
            Cell::new(&row.name),
            status_cell(row.status),
        ]);
    }
    println!("{table}");
    print_counts(&result.summary);
    print_ingest_reports(std::slice::from_ref(&result.report));
}

pub fn print_month(result: &MonthResult) {
    println!("Month: {}", result.window);
    print_counts(&result.summary);
    if let Some(total_cents) = result.summary.financial_total_cents {
        println!("Payments: {:.2}", total_cents as f64 / 100.0);
    }
    print_ingest_reports(&result.reports);
}

pub fn print_export(result: &ExportResult) {
    println!("Export: {}", result.path.display());
    println!("Rows: {} ({} day columns)", result.rows, result.days);
}

pub fn print_check(result: &CheckResult) {
    if let Some(roster) = &result.roster {
        println!(
            "Roster: {} patients ({} active, {} unresolved ids)",
            roster.total, roster.active, roster.unresolved
        );
    }
    if result.reports.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Records"),
        header_cell("Undated"),
        header_cell("Unresolved"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for report in &result.reports {
        table.add_row(vec![
            Cell::new(report.kind).fg(Color::Blue),
            Cell::new(report.total),
            problem_cell(report.undated),
            problem_cell(report.unresolved),
        ]);
    }
    println!("{table}");
}

fn print_counts(summary: &AggregateSummary) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Patients"),
        header_cell("Present"),
        header_cell("Absent"),
        header_cell("Late"),
        header_cell("Not Marked"),
    ]);
    apply_table_style(&mut table);
    for index in 0..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table.add_row(vec![
        Cell::new(summary.total_patients).add_attribute(Attribute::Bold),
        count_cell(summary.count(AttendanceStatus::Present), Color::Green),
        count_cell(summary.count(AttendanceStatus::Absent), Color::Red),
        count_cell(summary.count(AttendanceStatus::Late), Color::Yellow),
        count_cell(summary.not_marked, Color::DarkGrey),
    ]);
    println!("{table}");
}

fn print_ingest_reports(reports: &[IngestReport]) {
    for report in reports {
        if report.undated > 0 {
            eprintln!(
                "warning: {} {} records could not be dated",
                report.undated, report.kind
            );
        }
        if report.unresolved > 0 {
            eprintln!(
                "warning: {} {} records have unresolvable patient ids",
                report.unresolved, report.kind
            );
        }
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn status_cell(status: AttendanceStatus) -> Cell {
    match status {
        AttendanceStatus::Present => Cell::new("Present").fg(Color::Green),
        AttendanceStatus::Absent => Cell::new("Absent").fg(Color::Red),
        AttendanceStatus::Late => Cell::new("Late").fg(Color::Yellow),
        AttendanceStatus::NotMarked => Cell::new("-").fg(Color::DarkGrey),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}

fn problem_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
