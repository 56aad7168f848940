//! csvsift binary
//!
//! Loads a delimited file, runs the query pipeline over it and renders
//! the result to the terminal.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use csvsift::cli::Cli;
use csvsift::config::Config;
use csvsift::console::Console;
use csvsift::query::{run_query, QueryRequest};
use csvsift::render::Renderer;
use csvsift::source::load_rows;

fn main() {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match Config::load_with_env(path) {
            Ok(config) => config,
            Err(e) => {
                Console::new(!cli.no_color).error(&e.to_string());
                std::process::exit(1);
            }
        },
        None => Config::load_default(),
    };

    init_logging(&config);

    // Flags override config
    let console = Console::new(config.output.color && !cli.no_color);

    tracing::debug!(
        "Querying {:?} (delimiter {:?}, format {})",
        cli.file,
        cli.delimiter as char,
        cli.format
    );

    let rows = match load_rows(&cli.file, cli.delimiter) {
        Ok(rows) => rows,
        Err(e) => {
            console.error(&format!("Failed to read {}: {}", cli.file.display(), e));
            std::process::exit(1);
        }
    };

    let request = QueryRequest {
        where_clause: cli.where_clause.clone(),
        order_by: cli.order_by.clone(),
        aggregate: cli.aggregate.clone(),
        select: cli.selected_fields(),
        group_by: cli.groupby.clone(),
    };
    tracing::debug!("Request: {:?}", request);

    let output = match run_query(rows, &request) {
        Ok(output) => output,
        Err(e) => {
            console.error(&e.to_string());
            std::process::exit(1);
        }
    };

    let renderer = Renderer::new(&console, config.output.precision);
    if let Err(e) = renderer.render(&cli.file, &request, &output, &cli.format) {
        console.error(&e.to_string());
        std::process::exit(1);
    }
}

fn init_logging(config: &Config) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| format!("csvsift={}", config.logging.level)),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();
}
