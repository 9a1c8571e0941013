use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use realty_scout::config::Config;
use realty_scout::format::{estimated_monthly_payment, format_number, format_price};
use realty_scout::models::PropertyRecord;
use realty_scout::search::{from_query_string, page_links, PageLink, QueryController, SortKey};
use realty_scout::sources::{load_site, DataSource, DirectorySource, FixtureSource, Site};
use realty_scout::testimonials::{self, TestimonialFilter, TestimonialSort};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "realty-scout",
    about = "Search listings and testimonials for the realty site",
    version
)]
struct Cli {
    /// Path to a JSON configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Directory with properties.json and testimonials.json (overrides config)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Filter, sort and page through listings
    Search(SearchArgs),

    /// Show one listing
    Show {
        /// Listing id
        id: String,
    },

    /// List featured listings
    Featured,

    /// List client testimonials
    Testimonials {
        /// all, featured or recent
        #[arg(long, default_value = "all")]
        filter: String,

        /// newest or oldest
        #[arg(long, default_value = "newest")]
        sort: String,

        /// Reference date for "recent" (defaults to today)
        #[arg(long)]
        today: Option<NaiveDate>,
    },
}

#[derive(Args)]
struct SearchArgs {
    /// Shared query string, e.g. "location=edmond&minBedrooms=4"
    #[arg(short, long)]
    query: Option<String>,

    #[arg(long)]
    location: Option<String>,
    #[arg(long)]
    min_price: Option<String>,
    #[arg(long)]
    max_price: Option<String>,
    /// Minimum bedrooms
    #[arg(long)]
    beds: Option<String>,
    /// Minimum bathrooms
    #[arg(long)]
    baths: Option<String>,
    #[arg(long = "type")]
    property_type: Option<String>,
    #[arg(long)]
    min_sqft: Option<String>,
    #[arg(long)]
    max_sqft: Option<String>,

    /// newest, oldest, price-asc, price-desc, sqft-asc, sqft-desc
    #[arg(short, long)]
    sort: Option<String>,

    #[arg(short, long, default_value_t = 1)]
    page: usize,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr so results can be piped
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = Config::load(cli.config.as_deref()).await?;
    if cli.data_dir.is_some() {
        config.data_dir = cli.data_dir.clone();
    }

    let source: Box<dyn DataSource> = match &config.data_dir {
        Some(dir) => Box::new(DirectorySource::new(dir)),
        None => Box::new(FixtureSource),
    };
    let site = load_site(source.as_ref()).await?;

    match cli.command {
        Commands::Search(args) => run_search(&site, &config, args, cli.json),
        Commands::Show { id } => run_show(&site, &id, cli.json),
        Commands::Featured => run_featured(&site, cli.json),
        Commands::Testimonials {
            filter,
            sort,
            today,
        } => run_testimonials(&site, &config, &filter, &sort, today, cli.json),
    }
}

fn run_search(site: &Site, config: &Config, args: SearchArgs, json: bool) -> Result<()> {
    let mut criteria = from_query_string(args.query.as_deref().unwrap_or_default());
    let overrides = [
        ("location", &args.location),
        ("minPrice", &args.min_price),
        ("maxPrice", &args.max_price),
        ("minBedrooms", &args.beds),
        ("minBathrooms", &args.baths),
        ("propertyType", &args.property_type),
        ("minSquareFeet", &args.min_sqft),
        ("maxSquareFeet", &args.max_sqft),
    ];
    for (key, value) in overrides {
        if let Some(value) = value {
            criteria.set_raw(key, value);
        }
    }

    let sort_key = args
        .sort
        .as_deref()
        .map(SortKey::from)
        .unwrap_or_else(|| config.default_sort.clone());
    if let SortKey::Unrecognized(raw) = &sort_key {
        info!("Unknown sort {:?}, keeping listing order", raw);
    }

    let mut controller = QueryController::new(&site.listings, config.page_size()?, sort_key);
    controller.submit(criteria);
    controller.set_page(args.page);

    let Some(result) = controller.current() else {
        anyhow::bail!("Search produced no result page");
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let page = &result.page;
    let badge = if result.is_filtered { " (Filtered)" } else { "" };
    println!("{} Properties Found{}", page.total_count, badge);

    match page.showing() {
        Some((first, last)) => println!(
            "Showing {}-{} of {} results, sorted by {}\n",
            first, last, page.total_count, result.sort_key
        ),
        None => {
            println!("\nNo properties match your search. Try adjusting your filters.");
            return Ok(());
        }
    }

    for (i, property) in page.items.iter().enumerate() {
        let position = (page.number - 1) * page.page_size + i + 1;
        print_card(position, property);
    }

    if page.total_pages > 1 {
        let links: Vec<String> = page_links(page.number, page.total_pages)
            .into_iter()
            .map(|link| match link {
                PageLink::Number { page, active: true } => format!("[{}]", page),
                PageLink::Number { page, .. } => page.to_string(),
                PageLink::Ellipsis => "...".to_string(),
            })
            .collect();
        println!("Pages: {}", links.join(" "));
    }

    if !result.query_string.is_empty() {
        println!("Share: ?{}", result.query_string);
    }

    Ok(())
}

fn run_show(site: &Site, id: &str, json: bool) -> Result<()> {
    let property = site
        .listings
        .find_by_param(id)
        .with_context(|| format!("No listing with id {:?}", id))?;

    if json {
        println!("{}", serde_json::to_string_pretty(property)?);
        return Ok(());
    }

    println!("{}", property.address);
    println!(
        "{} · {} · MLS #{}",
        format_price(property.price),
        property.status,
        property.mls_number
    );
    println!(
        "{} bd · {} ba · {} sqft · {} acres · built {}",
        property.bedrooms,
        property.bathrooms,
        format_number(u64::from(property.square_feet)),
        property.lot_size,
        property.year_built
    );
    println!(
        "{} · {} · {} days on market",
        property.property_type, property.neighborhood, property.days_on_market
    );
    println!(
        "Estimated payment: {}/month",
        format_price(estimated_monthly_payment(property.price))
    );
    println!();
    println!("{}", property.description);
    println!();
    println!("Features: {}", property.features.join(", "));
    if let Some(schools) = &property.schools {
        println!(
            "Schools: {} / {} / {}",
            schools.elementary, schools.middle, schools.high
        );
    }
    println!("Photos: {}", property.images.len());

    Ok(())
}

fn run_featured(site: &Site, json: bool) -> Result<()> {
    let featured = site.listings.featured();

    if json {
        println!("{}", serde_json::to_string_pretty(&featured)?);
        return Ok(());
    }

    for (i, property) in featured.iter().enumerate() {
        print_card(i + 1, property);
    }
    Ok(())
}

fn run_testimonials(
    site: &Site,
    config: &Config,
    filter: &str,
    sort: &str,
    today: Option<NaiveDate>,
    json: bool,
) -> Result<()> {
    let today = today.unwrap_or_else(|| chrono::Local::now().date_naive());
    let filter = TestimonialFilter::parse(filter, config.recent_testimonial_months);
    let selected = testimonials::query(
        &site.testimonials,
        filter,
        TestimonialSort::from(sort),
        today,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&selected)?);
        return Ok(());
    }

    if selected.is_empty() {
        println!("No testimonials match your current filter.");
        return Ok(());
    }

    if let Some(average) = testimonials::average_rating(&selected) {
        println!("{} testimonials, average rating {:.1}\n", selected.len(), average);
    }
    for testimonial in &selected {
        println!(
            "{} ({}) · {} · {}",
            testimonial.name,
            testimonial.location,
            "★".repeat(usize::from(testimonial.rating)),
            testimonial.date.format("%B %-d, %Y")
        );
        println!("   {}", testimonial.text);
        println!();
    }

    Ok(())
}

fn print_card(position: usize, property: &PropertyRecord) {
    let featured = if property.featured { " ★" } else { "" };
    println!(
        "{}. {} ({}){}",
        position,
        property.address,
        format_price(property.price),
        featured
    );
    println!(
        "   {} bd, {} ba, {} sqft · {} · {} days on market",
        property.bedrooms,
        property.bathrooms,
        format_number(u64::from(property.square_feet)),
        property.status,
        property.days_on_market
    );
    println!("   ID: {}", property.id);
    println!();
}
