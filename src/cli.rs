//! csvsift CLI
//!
//! Command-line interface for the query pipeline:
//! - Load a delimited file
//! - Filter, sort, project and aggregate rows
//! - Render the result as a table, JSON or CSV

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "csvsift")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Filter, sort, project and aggregate delimited files from the terminal")]
#[command(
    long_about = "csvsift runs a small query pipeline over a delimited file.\nRows are filtered, sorted, aggregated and projected in a fixed order,\nthen rendered as a table, JSON or CSV."
)]
pub struct Cli {
    /// Path to the delimited file to query
    #[arg(short, long, value_name = "PATH")]
    pub file: PathBuf,

    /// Filter condition, e.g. "price>100" or "rating>=4.5"
    #[arg(long = "where", value_name = "EXPR")]
    pub where_clause: Option<String>,

    /// Aggregation over a field, e.g. "price=avg"
    #[arg(short, long, value_name = "FIELD=FUNC")]
    pub aggregate: Option<String>,

    /// Comma-separated list of fields to keep in the output
    #[arg(short, long, value_name = "FIELDS")]
    pub select: Option<String>,

    /// Field to group rows by before aggregating
    #[arg(short, long, value_name = "FIELD")]
    pub groupby: Option<String>,

    /// Sort order, e.g. "price=asc" or "name=desc"
    #[arg(short, long, value_name = "FIELD=DIR")]
    pub order_by: Option<String>,

    /// Field delimiter of the input file
    #[arg(
        short,
        long,
        default_value = ",",
        value_name = "CHAR",
        value_parser = parse_delimiter
    )]
    pub delimiter: u8,

    /// Output format (table, json, csv)
    #[arg(long, default_value = "table", value_name = "FORMAT")]
    pub format: OutputFormat,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to a config file (overrides the default lookup chain)
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Split the `--select` argument into trimmed field names.
    pub fn selected_fields(&self) -> Option<Vec<String>> {
        self.select.as_ref().map(|raw| {
            raw.split(',')
                .map(|field| field.trim().to_string())
                .filter(|field| !field.is_empty())
                .collect()
        })
    }
}

/// Output format for query results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputFormat {
    /// Formatted table with summary lines (default).
    Table,
    /// JSON document with rows and aggregation results.
    Json,
    /// Raw CSV rows, no summaries.
    Csv,
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Table => write!(f, "table"),
            OutputFormat::Json => write!(f, "json"),
            OutputFormat::Csv => write!(f, "csv"),
        }
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "table" => Ok(OutputFormat::Table),
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            _ => Err(format!("unknown format '{}'. Valid: table, json, csv", s)),
        }
    }
}

/// Accept exactly one ASCII character as the field delimiter.
fn parse_delimiter(s: &str) -> Result<u8, String> {
    let mut bytes = s.bytes();
    match (bytes.next(), bytes.next()) {
        (Some(b), None) if b.is_ascii() => Ok(b),
        _ => Err(format!(
            "delimiter must be a single ASCII character, got '{}'",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_from_str() {
        assert_eq!(
            "table".parse::<OutputFormat>().unwrap(),
            OutputFormat::Table
        );
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("CSV".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("\t"), Ok(b'\t'));
        assert!(parse_delimiter("").is_err());
        assert!(parse_delimiter("ab").is_err());
        assert!(parse_delimiter("€").is_err());
    }

    #[test]
    fn test_parse_minimal_args() {
        let cli = Cli::parse_from(["csvsift", "--file", "data.csv"]);
        assert_eq!(cli.file, PathBuf::from("data.csv"));
        assert_eq!(cli.delimiter, b',');
        assert_eq!(cli.format, OutputFormat::Table);
        assert!(cli.where_clause.is_none());
        assert!(!cli.no_color);
    }

    #[test]
    fn test_parse_full_pipeline_args() {
        let cli = Cli::parse_from([
            "csvsift",
            "--file",
            "data.csv",
            "--where",
            "price>100",
            "--order-by",
            "price=desc",
            "--select",
            "name, price",
            "--groupby",
            "brand",
            "--aggregate",
            "price=avg",
            "--delimiter",
            ";",
            "--format",
            "json",
            "--no-color",
        ]);
        assert_eq!(cli.where_clause.as_deref(), Some("price>100"));
        assert_eq!(cli.order_by.as_deref(), Some("price=desc"));
        assert_eq!(cli.groupby.as_deref(), Some("brand"));
        assert_eq!(cli.aggregate.as_deref(), Some("price=avg"));
        assert_eq!(cli.delimiter, b';');
        assert_eq!(cli.format, OutputFormat::Json);
        assert!(cli.no_color);
        assert_eq!(
            cli.selected_fields(),
            Some(vec!["name".to_string(), "price".to_string()])
        );
    }

    #[test]
    fn test_selected_fields_skips_empty_entries() {
        let cli = Cli::parse_from(["csvsift", "--file", "x.csv", "--select", "a,,b, "]);
        assert_eq!(
            cli.selected_fields(),
            Some(vec!["a".to_string(), "b".to_string()])
        );
    }
}
