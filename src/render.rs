//! Result rendering.
//!
//! The query pipeline produces a structured [`PipelineOutput`]; this module
//! turns it into terminal output in one of three formats:
//!
//! - `table`: comfy-table grid plus colored summary lines (default)
//! - `json`: the whole output serialized as a single JSON document
//! - `csv`: raw rows written back as CSV, no summaries

use std::io;
use std::path::Path;

use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use thiserror::Error;

use crate::cli::OutputFormat;
use crate::console::Console;
use crate::query::{
    AggregateFunc, AggregateOutcome, GroupedAggregate, PipelineOutput, QueryRequest,
};
use crate::rows::RowSet;

/// Errors while writing query output
#[derive(Error, Debug)]
pub enum RenderError {
    /// JSON serialization failed
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV writing failed
    #[error("CSV output failed: {0}")]
    Csv(#[from] csv::Error),

    /// Underlying I/O failure
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Renders pipeline output to stdout.
pub struct Renderer<'a> {
    console: &'a Console,
    precision: usize,
}

impl<'a> Renderer<'a> {
    pub fn new(console: &'a Console, precision: usize) -> Self {
        Renderer { console, precision }
    }

    /// Render a pipeline run in the requested format.
    pub fn render(
        &self,
        path: &Path,
        request: &QueryRequest,
        output: &PipelineOutput,
        format: &OutputFormat,
    ) -> Result<(), RenderError> {
        match format {
            OutputFormat::Table => {
                self.render_table(path, request, output);
                Ok(())
            }
            OutputFormat::Json => self.render_json(output),
            OutputFormat::Csv => self.render_csv(output),
        }
    }

    /// Default format: run banner, full table, then summaries in pipeline order.
    fn render_table(&self, path: &Path, request: &QueryRequest, output: &PipelineOutput) {
        self.console
            .title(&format!("File path: {}", path.display()));
        if let Some(clause) = &request.where_clause {
            println!("Filter: {}", clause);
        }
        if let Some(clause) = &request.aggregate {
            println!("Aggregation: {}", clause);
        }

        self.console.title("\nCSV contents:");
        println!("{}", row_grid(&output.rows));

        if let Some(outcome) = &output.aggregate {
            self.report_aggregate(outcome);
        }

        match (&output.projected, &request.select) {
            (Some(projected), Some(fields)) => {
                self.console
                    .title(&format!("\nSelected fields: {}", fields.join(", ")));
                println!("{}", row_grid(projected));
            }
            _ => {
                self.console.title("\nResult:");
                println!("{}", row_grid(&output.rows));
            }
        }

        if let Some(grouped) = &output.grouped {
            self.report_grouped(grouped);
        }
    }

    fn render_json(&self, output: &PipelineOutput) -> Result<(), RenderError> {
        println!("{}", serde_json::to_string_pretty(output)?);
        Ok(())
    }

    /// Writes the projected rows if a projection ran, else the working set.
    fn render_csv(&self, output: &PipelineOutput) -> Result<(), RenderError> {
        let set = output.projected.as_ref().unwrap_or(&output.rows);
        let mut writer = csv::Writer::from_writer(io::stdout());
        writer.write_record(&set.headers)?;
        for row in &set.rows {
            writer.write_record(
                set.headers
                    .iter()
                    .map(|header| row.get(header).map_or("", String::as_str)),
            )?;
        }
        writer.flush()?;
        Ok(())
    }

    fn report_aggregate(&self, outcome: &AggregateOutcome) {
        match outcome {
            AggregateOutcome::NoData => self.console.subtitle("No data for aggregation"),
            AggregateOutcome::Unsupported { func } => self
                .console
                .subtitle(&format!("Unsupported aggregation function: {}", func)),
            AggregateOutcome::Computed(result) => self.console.subtitle(&format!(
                "\nAggregation result: {}({}) = {}",
                result.func,
                result.field,
                self.format_value(result.func, result.value)
            )),
        }
    }

    fn report_grouped(&self, grouped: &GroupedAggregate) {
        self.console.subtitle(&format!(
            "\nGrouping by '{}', {} over '{}':",
            grouped.group_field,
            grouped.func.name(),
            grouped.field
        ));
        for (key, value) in &grouped.groups {
            self.console
                .subtitle(&format!("{}: {}", key, self.format_value(grouped.func, *value)));
        }
    }

    /// Counts are whole numbers; everything else uses the configured precision.
    fn format_value(&self, func: AggregateFunc, value: f64) -> String {
        match func {
            AggregateFunc::Count => format!("{}", value as i64),
            _ => format!("{:.prec$}", value, prec = self.precision),
        }
    }
}

/// Build a grid for a row set. Fields a row lacks render as empty cells.
fn row_grid(set: &RowSet) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = set
        .headers
        .iter()
        .map(|header| Cell::new(header).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(header_cells);

    for row in &set.rows {
        let cells: Vec<Cell> = set
            .headers
            .iter()
            .map(|header| Cell::new(row.get(header).map_or("", String::as_str)))
            .collect();
        table.add_row(cells);
    }

    table
}
