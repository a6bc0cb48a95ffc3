//! impact CLI
//!
//! Reads a `(name, count)` CSV, consolidates counts across affiliation-name
//! variants, and prints the groups sorted by descending count.

use std::error::Error;
use std::path::{Path, PathBuf};

use clap::Parser;
use comfy_table::Table;

use impact_core::aggregation::consolidate;
use impact_core::canonicalization::DEFAULT_THRESHOLD;
use impact_core::ingest::{read_name_counts_limited, NameCount, ROW_LIMIT};

#[derive(Parser, Debug)]
#[command(
    name = "impact",
    version,
    about = "Consolidate publication counts across affiliation-name variants"
)]
struct Cli {
    /// Headerless CSV of (name, count) rows, pre-sorted by descending count
    input: PathBuf,

    /// Similarity threshold (0-100) for merging name variants
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: u32,

    /// Maximum number of rows to ingest
    #[arg(long, default_value_t = ROW_LIMIT)]
    limit: usize,

    /// Show only the top N groups
    #[arg(long)]
    top: Option<usize>,

    /// Emit JSON instead of a table
    #[arg(long)]
    json: bool,

    /// Write the consolidated table to a CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let entries = read_name_counts_limited(&cli.input, cli.limit)?;
    tracing::info!("read {} rows from {}", entries.len(), cli.input.display());

    let mut groups = consolidate(&entries, cli.threshold);
    groups.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.name.cmp(&b.name)));
    if let Some(top) = cli.top {
        groups.truncate(top);
    }

    if let Some(path) = &cli.output {
        write_csv(path, &groups)?;
        tracing::info!("wrote {} groups to {}", groups.len(), path.display());
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&groups)?);
    } else {
        println!("{}", render_table(&groups));
    }
    Ok(())
}

fn render_table(groups: &[NameCount]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Name", "Publications"]);
    for group in groups {
        table.add_row(vec![group.name.clone(), group.count.to_string()]);
    }
    table
}

fn write_csv(path: &Path, groups: &[NameCount]) -> Result<(), Box<dyn Error>> {
    let mut writer = csv::Writer::from_path(path)?;
    for group in groups {
        let count = group.count.to_string();
        writer.write_record([group.name.as_str(), count.as_str()])?;
    }
    writer.flush()?;
    Ok(())
}
