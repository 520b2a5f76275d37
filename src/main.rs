use clap::{Parser, Subcommand};
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tonefit::api;
use tonefit::assets::{AssetCategory, AssetLoader};
use tonefit::models::{AppConfig, Product};
use tonefit::server;
use tonefit::services::{AnalysisReport, RankedProduct};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";

#[derive(Parser)]
#[command(name = "tonefit")]
#[command(about = "Tonefit - skin-tone color analysis and product recommendations")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Classify one pixel color against the reference tones
    Classify {
        /// Red channel (0-255)
        #[arg(allow_hyphen_values = true)]
        r: i64,
        /// Green channel (0-255)
        #[arg(allow_hyphen_values = true)]
        g: i64,
        /// Blue channel (0-255)
        #[arg(allow_hyphen_values = true)]
        b: i64,
    },
    /// Print the best-rated products for a tone
    Recommend {
        /// Reference tone name (e.g. "wheatish")
        #[arg(short, long)]
        tone: String,

        /// Number of products (defaults to top_products from config)
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Write the bundled catalog, color names and config to disk
    Init {
        /// Extract the catalog and color-name table
        #[arg(long)]
        data: bool,

        /// Extract config.yaml
        #[arg(long)]
        config: bool,

        /// Extract all assets
        #[arg(long)]
        all: bool,

        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Tonefit API",
        description = "Skin-tone color analysis and palette-matched product recommendations",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_analyze,
        api::handle_classify,
        api::handle_tones,
        api::handle_recommendations,
        api::handle_product,
    ),
    components(schemas(
        api::AnalyzeRequest,
        api::ClassifyRequest,
        api::ClassifyResponse,
        api::ToneInfo,
        api::RecommendationsResponse,
        api::ProductDetail,
        AnalysisReport,
        RankedProduct,
        Product,
    )),
    tags(
        (name = "Analysis", description = "Photo analysis"),
        (name = "Tones", description = "Reference tones and classification"),
        (name = "Products", description = "Catalog and recommendations")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Classify { r, g, b }) => run_classify_command(r, g, b),
        Some(Commands::Recommend { tone, limit }) => run_recommend_command(&tone, limit),
        Some(Commands::Init {
            data,
            config,
            all,
            force,
            list,
        }) => run_init_command(data, config, all, force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Classify a single color from the command line
fn run_classify_command(r: i64, g: i64, b: i64) -> anyhow::Result<()> {
    init_tracing("tonefit=warn");

    let loader = AssetLoader::from_env();
    let config = AppConfig::load_from_assets(&loader);
    let classifier = tone_match::ToneClassifier::new(config.tone_set()?)
        .with_distance_metric(config.metric);

    let result = classifier.classify_channels(&[r, g, b])?;
    println!(
        "{} (reference {}, {} distance {:.3})",
        result.tone.name(),
        result.tone.srgb(),
        classifier.metric(),
        result.distance
    );

    Ok(())
}

/// Print ranked products for a tone
fn run_recommend_command(tone: &str, limit: Option<usize>) -> anyhow::Result<()> {
    init_tracing("tonefit=warn");

    let state = server::create_app_state(Arc::new(AssetLoader::from_env()))?;
    if !state.classifier.tones().contains(tone) {
        let known: Vec<&str> = state
            .classifier
            .tones()
            .tones()
            .iter()
            .map(|t| t.name())
            .collect();
        anyhow::bail!("Unknown tone '{tone}'. Known tones: {}", known.join(", "));
    }

    let limit = limit.unwrap_or(state.config.top_products);
    let ranked = state.ranker.rank(tone, state.catalog.products(), limit)?;

    if ranked.is_empty() {
        println!("No products match the '{tone}' palette.");
        return Ok(());
    }

    println!("{:>3}  {:>6}  {:>10}  {:<20}  NAME", "#", "SCORE", "ID", "COLOUR");
    for (i, item) in ranked.iter().enumerate() {
        println!(
            "{:>3}  {:>6.3}  {:>10}  {:<20}  {}",
            i + 1,
            item.weighted_score,
            item.product.id,
            item.product.colour.as_deref().unwrap_or("-"),
            item.product.name
        );
    }

    Ok(())
}

/// Write bundled assets to disk so they can be edited
fn run_init_command(
    data: bool,
    config: bool,
    all: bool,
    force: bool,
    list: bool,
) -> anyhow::Result<()> {
    let selected: Vec<AssetCategory> = [
        (AssetCategory::Data, data),
        (AssetCategory::Config, config),
    ]
    .into_iter()
    .filter(|&(_, wanted)| all || wanted)
    .map(|(category, _)| category)
    .collect();

    if list {
        let categories = [("data", AssetCategory::Data), ("config", AssetCategory::Config)];
        for (label, category) in categories {
            for name in AssetLoader::list_embedded(category) {
                println!("{label:<7} {name}");
            }
        }
        return Ok(());
    }

    if selected.is_empty() {
        anyhow::bail!(
            "Nothing selected. Pass --data, --config or --all (see 'tonefit init --list')"
        );
    }

    let report = AssetLoader::from_env().init(&selected, force)?;
    for path in &report.written {
        println!("wrote   {path}");
    }
    for path in &report.skipped {
        println!("exists  {path}");
    }
    if !report.skipped.is_empty() {
        println!("Re-run with --force to overwrite existing files.");
    }

    Ok(())
}

/// Print where assets come from and how the server would bind
fn run_status_command() {
    let loader = AssetLoader::from_env();
    let describe = |path: Option<&std::path::Path>| match path {
        Some(p) if p.exists() => p.display().to_string(),
        Some(p) => format!("{} (missing, bundled copy used)", p.display()),
        None => "bundled".to_string(),
    };

    println!(
        "tonefit {} - skin-tone color analysis and product recommendations\n",
        env!("CARGO_PKG_VERSION")
    );
    let bind_addr = std::env::var("BIND_ADDR")
        .unwrap_or_else(|_| format!("{DEFAULT_BIND_ADDR} (BIND_ADDR unset)"));
    println!("  bind address  {bind_addr}");
    println!("  config        {}", describe(loader.config_file()));
    println!("  data          {}", describe(loader.data_dir()));
    println!("  data files    {}", loader.list_data().join(", "));

    let config = AppConfig::load_from_assets(&loader);
    match config.tone_set() {
        Ok(tones) => println!("  tones         {} ({} metric)", tones.len(), config.metric),
        Err(e) => println!("  tones         invalid: {e}"),
    }

    println!("\nRun 'tonefit --help' for the available commands.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    init_tracing("tonefit=debug,tower_http=debug");

    let bind_addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());
    let asset_loader = Arc::new(AssetLoader::from_env());

    tracing::info!(
        data = %asset_loader.data_dir().map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        config = %asset_loader.config_file().map_or_else(|| "embedded".to_string(), |p| p.display().to_string()),
        "Asset sources configured"
    );

    if let Err(e) = asset_loader.seed_if_configured() {
        tracing::warn!(%e, "Could not seed asset locations, continuing with bundled copies");
    }

    let state = server::create_app_state(asset_loader)?;

    // Swagger UI is only mounted on the real server
    let app = server::build_router(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Tonefit server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
