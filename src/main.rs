use anyhow::Result;
use clap::Parser;
use property_finder::config::ListingConfig;
use property_finder::listings::{BrowseState, Catalog, Facet, FilterSelection, StepSchedule};
use property_finder::sources::{FileSource, HttpSource, PropertySource};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Browse a property list with budget, status, type and location filters
#[derive(Debug, Parser)]
#[command(name = "property-finder", version)]
struct Args {
    /// JSON export to read properties from
    #[arg(long, conflicts_with = "url", required_unless_present = "url")]
    file: Option<PathBuf>,

    /// REST endpoint returning the property list
    #[arg(long)]
    url: Option<String>,

    /// JSON file with listing settings
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    status: Option<String>,

    #[arg(long = "type")]
    property_type: Option<String>,

    #[arg(long)]
    location: Option<String>,

    /// Budget range key, e.g. `50000_100000` or `above_50000`
    #[arg(long)]
    budget: Option<String>,

    #[arg(long, default_value_t = 1)]
    page: usize,

    #[arg(long)]
    page_size: Option<usize>,

    /// Largest step size used when prices spread beyond 500K
    #[arg(long)]
    largest_step: Option<f64>,

    /// Write the page as JSON to this path
    #[arg(long)]
    output: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => ListingConfig::from_file(path).await?,
        None => ListingConfig::default(),
    };
    if let Some(page_size) = args.page_size.filter(|size| *size > 0) {
        config.page_size = page_size;
    }
    if let Some(step) = args.largest_step.filter(|step| step.is_finite() && *step > 0.0) {
        config.step_schedule = StepSchedule {
            largest_step: step,
            ..config.step_schedule
        };
    }
    config.step_schedule.validate()?;

    let source: Box<dyn PropertySource> = match (&args.file, &args.url) {
        (Some(path), _) => Box::new(FileSource::new(path)),
        (None, Some(url)) => Box::new(HttpSource::new(url.as_str())?),
        (None, None) => anyhow::bail!("either --file or --url is required"),
    };

    let properties = source.fetch().await?;
    info!("Fetched {} properties via {}", properties.len(), source.source_name());

    let catalog = Catalog::new(properties, config);

    let mut state = BrowseState::new(FilterSelection {
        status: args.status,
        property_type: args.property_type,
        location: args.location,
        budget: args.budget,
    });
    state.go_to(args.page);

    println!("Budget ranges:");
    if catalog.ranges().is_empty() {
        println!("   (no priced properties)");
    }
    for range in catalog.ranges() {
        println!("   {:<28} {}", range.label, range.value);
    }
    println!("Statuses: {}", catalog.options(Facet::Status).join(", "));
    println!("Types:    {}", catalog.options(Facet::Type).join(", "));
    println!();

    let listing = catalog.browse(&state.selection, state.page);

    info!(
        "{} matching properties, page {} of {}",
        listing.total_items, listing.page, listing.total_pages
    );

    let offset = listing.offset();
    for (i, property) in listing.items.iter().enumerate() {
        println!(
            "{}. {}",
            offset.saturating_add(i + 1),
            property.title.as_deref().unwrap_or("(untitled)")
        );
        if let Some(price) = property.amount() {
            println!("   Price: {}", price);
        }
        if let Some(status) = &property.status {
            println!("   Status: {}", status);
        }
        if let Some(kind) = &property.property_type {
            println!("   Type: {}", kind);
        }
        if let Some(location) = property.location.as_ref().or(property.full_address.as_ref()) {
            println!("   Location: {}", location);
        }
        println!();
    }

    let pager: Vec<String> = listing
        .window
        .iter()
        .map(|n| if *n == listing.page { format!("[{}]", n) } else { n.to_string() })
        .collect();
    println!("Pages: {}", pager.join(" "));

    if let Some(path) = &args.output {
        let json = serde_json::to_string_pretty(&listing)?;
        tokio::fs::write(path, json).await?;
        info!("💾 Saved page to {}", path.display());
    }

    Ok(())
}
