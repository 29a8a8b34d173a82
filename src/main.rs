// Command-line consumer of the scrape pipeline.
//
// Resolves a site/field pair (or takes a raw search URL), runs one scrape,
// prints the records, and optionally filters and exports them. Rendering
// and export live here; the library returns plain records.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Arc;

use jobscrape::{
    DiagnosticSink, ScrapeConfig, export_records, filter_by_date, scrape, search_by_position, sites,
};

#[derive(Parser, Debug)]
#[command(name = "jobscrape", version, about = "Scrape paginated job listings")]
struct Args {
    /// Base search URL to scrape (overrides --site/--field)
    #[arg(long)]
    url: Option<String>,

    /// Site name from the built-in registry
    #[arg(long, default_value = "MyJobMag")]
    site: String,

    /// Field of work within the site
    #[arg(long)]
    field: Option<String>,

    /// List the fields known for --site and exit
    #[arg(long)]
    list_fields: bool,

    /// Keep only records whose date text contains this string
    #[arg(long)]
    date_filter: Option<String>,

    /// Keep only records whose position contains this string (ignores case)
    #[arg(long)]
    position: Option<String>,

    /// Write the (filtered) records to this CSV file
    #[arg(long)]
    export: Option<PathBuf>,

    /// Worker pool width for the page fan-out
    #[arg(long, default_value_t = jobscrape::utils::DEFAULT_MAX_CONCURRENT_PAGES)]
    workers: usize,

    /// Append-only error log
    #[arg(long, default_value = "scraping_errors.log")]
    error_log: PathBuf,

    /// Print records as JSON instead of a table
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_fields {
        for field in sites::fields_for(&args.site) {
            println!("{field}");
        }
        return Ok(());
    }

    let url = match (&args.url, &args.field) {
        (Some(url), _) => url.clone(),
        (None, Some(field)) => sites::base_url(&args.site, field)
            .ok_or_else(|| anyhow!("unknown site/field: {} / {field}", args.site))?
            .to_string(),
        (None, None) => {
            return Err(anyhow!("pass --url, or --field together with --site"));
        }
    };

    let config = ScrapeConfig::builder()
        .search_url(url)
        .max_concurrent_pages(args.workers)
        .build()
        .context("invalid scrape configuration")?;

    let sink = Arc::new(
        DiagnosticSink::open(&args.error_log).with_context(|| {
            format!("failed to open error log {}", args.error_log.display())
        })?,
    );

    let mut records = scrape(config, sink).await;

    if let Some(date) = &args.date_filter {
        records = filter_by_date(&records, date);
    }
    if let Some(term) = &args.position {
        records = search_by_position(&records, term);
    }

    if records.is_empty() {
        println!("No data scraped.");
    } else if args.json {
        let stdout = std::io::stdout();
        let mut out = stdout.lock();
        serde_json::to_writer_pretty(&mut out, &records)?;
        out.write_all(b"\n")?;
    } else {
        for record in &records {
            println!(
                "{} | {} | {} | {}",
                record.company, record.position, record.date_posted, record.link
            );
        }
        println!("{} records", records.len());
    }

    if let Some(path) = &args.export {
        export_records(&records, path)
            .with_context(|| format!("export to {} failed", path.display()))?;
        println!("Exported {} records to {}", records.len(), path.display());
    }

    Ok(())
}
