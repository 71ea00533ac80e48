use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use cable_model::{Diagnostic, RouterUsage, Severity};

use crate::types::{CheckResult, RouterResult};

pub fn print_check_summary(result: &CheckResult) {
    let outcome = &result.outcome;
    let report = &outcome.report;
    println!("Input: {}", outcome.file_name);
    println!("Records: {}", outcome.record_count);
    if let Some(path) = &result.report_path {
        println!("Report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Section"),
        header_cell("Rule"),
        header_cell("Result"),
        header_cell("Errors"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Center);
    align_column(&mut table, 4, CellAlignment::Right);
    for (index, summary) in report.rules.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&summary.title),
            dim_cell(&summary.rule),
            verdict_cell(summary.passed),
            count_cell(summary.error_count, Color::Red),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        verdict_cell(report.overall_pass),
        count_cell(report.error_count(), Color::Red).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    print_issue_table(&report.diagnostics);
    print_skipped_table(result);
    println!();
    println!("{}", report.verdict_line());
}

fn print_issue_table(diagnostics: &[Diagnostic]) {
    let issues: Vec<&Diagnostic> = diagnostics
        .iter()
        .filter(|d| d.severity != Severity::Info)
        .collect();
    if issues.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Severity"),
        header_cell("Rule"),
        header_cell("Cable"),
        header_cell("Message"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Center);
    align_column(&mut table, 2, CellAlignment::Right);
    for issue in issues {
        table.add_row(vec![
            severity_cell(issue.severity),
            Cell::new(&issue.rule),
            match issue.cable_id {
                Some(id) => Cell::new(id),
                None => dim_cell("-"),
            },
            Cell::new(&issue.message),
        ]);
    }
    println!();
    println!("Issues:");
    println!("{table}");
}

fn print_skipped_table(result: &CheckResult) {
    let skipped = &result.outcome.skipped;
    if skipped.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sheet"),
        header_cell("Row"),
        header_cell("Reason"),
    ]);
    apply_issue_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for row in skipped {
        table.add_row(vec![
            Cell::new(&row.sheet),
            Cell::new(row.row),
            Cell::new(row.reason.to_string()).fg(Color::Yellow),
        ]);
    }
    println!();
    println!("Skipped rows:");
    println!("{table}");
}

pub fn print_router_summary(result: &RouterResult) {
    if let Some(path) = &result.output {
        println!("Output: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Site"),
        header_cell("Usage"),
        header_cell("Ordinal"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for (site, usage) in result.usage.iter() {
        table.add_row(vec![
            Cell::new(site).fg(Color::Blue).add_attribute(Attribute::Bold),
            usage_cell(usage),
            dim_cell(usage.ordinal()),
        ]);
    }
    println!("{table}");
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_issue_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(160);
    if table.column_count() == 4 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Fixed(9)),
            ColumnConstraint::UpperBoundary(Width::Fixed(24)),
            ColumnConstraint::LowerBoundary(Width::Fixed(6)),
            ColumnConstraint::UpperBoundary(Width::Percentage(70)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn verdict_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("OK").fg(Color::Green).add_attribute(Attribute::Bold)
    } else {
        Cell::new("NG").fg(Color::Red).add_attribute(Attribute::Bold)
    }
}

fn usage_cell(usage: RouterUsage) -> Cell {
    let color = match usage {
        RouterUsage::Used => Color::Green,
        RouterUsage::Corrected => Color::Cyan,
        RouterUsage::CheckMe => Color::Yellow,
        RouterUsage::NotModel => Color::Red,
        RouterUsage::Unknown => Color::DarkGrey,
    };
    Cell::new(usage.as_str()).fg(color)
}

fn severity_cell(severity: Severity) -> Cell {
    match severity {
        Severity::Error => Cell::new("ERROR").fg(Color::Red),
        Severity::Warning => Cell::new("WARN").fg(Color::Yellow),
        Severity::Info => dim_cell("INFO"),
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
