use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pfe_cli::types::{BuildResult, SplitSummary};

pub fn print_summary(result: &BuildResult) {
    println!("Input: {}", result.input_dir.display());
    if result.dry_run {
        println!("Output: dry run, nothing written");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    print_reference_table(result);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Split"),
        header_cell("Patients"),
        header_cell("Rows"),
        header_cell("Year stats"),
        header_cell("Medications"),
        header_cell("Transcripts"),
        header_cell("No diagnoses"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_patients = 0usize;
    let mut total_rows = 0usize;
    for summary in &result.splits {
        total_patients += summary.counts.patients;
        total_rows += summary.rows_written;
        table.add_row(split_row(summary));
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_patients).add_attribute(Attribute::Bold),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
        dim_cell("-"),
    ]);
    println!("{table}");
}

fn split_row(summary: &SplitSummary) -> Vec<Cell> {
    let file = match &summary.output {
        Some(path) => Cell::new(path.display()).fg(Color::Green),
        None => dim_cell("-"),
    };
    vec![
        Cell::new(summary.split.name())
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(summary.counts.patients),
        Cell::new(summary.rows_written),
        Cell::new(summary.counts.with_year_stats),
        Cell::new(summary.counts.with_medications),
        Cell::new(summary.counts.with_transcripts),
        warn_cell(summary.counts.defaulted_diagnoses),
        file,
    ]
}

fn print_reference_table(result: &BuildResult) {
    let stats = &result.reference;
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Records"),
        header_cell("Patients"),
        header_cell("Notes"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    table.add_row(vec![
        Cell::new("Diagnoses"),
        Cell::new(stats.diagnosis_records),
        Cell::new(stats.diagnosis_patients),
        Cell::new(format!(
            "{} categories, {} unclassified",
            result.categories, stats.unclassified_diagnoses
        )),
    ]);
    table.add_row(vec![
        Cell::new("Medications"),
        Cell::new(stats.medication_records),
        Cell::new(stats.medication_patients),
        Cell::new(format!("{} distinct names", stats.vocabulary_size)),
    ]);
    table.add_row(vec![
        Cell::new("Transcripts"),
        Cell::new(stats.transcript_records),
        Cell::new(stats.transcript_patients),
        dim_cell("-"),
    ]);
    table.add_row(vec![
        Cell::new("Year stats"),
        dim_cell("-"),
        Cell::new(stats.year_stat_patients),
        dim_cell("-"),
    ]);
    println!("{table}");
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
        .set_content_arrangement(ContentArrangement::DynamicFullWidth)
        .set_width(140);
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

fn warn_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
