use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tower_http::services::ServeDir;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use hueguard::api;
use hueguard::models::AppConfig;
use hueguard::server;
use hueguard::services::ImageDecoder;

#[derive(Parser)]
#[command(name = "hueguard")]
#[command(about = "Hueguard - color accessibility analysis")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Show the WCAG contrast ratio between two colors
    Contrast {
        /// Foreground color (e.g. "#777777")
        foreground: String,

        /// Background color (e.g. "#FFFFFF")
        background: String,
    },
    /// Suggest a darker color that meets a contrast target
    Suggest {
        /// Color to correct
        color: String,

        /// Contrast ratio to reach
        #[arg(short, long, default_value_t = color_engine::DEFAULT_TARGET_RATIO)]
        target: f64,

        /// Background color
        #[arg(short, long, default_value = color_engine::DEFAULT_BACKGROUND)]
        background: String,
    },
    /// Simulate a color under color-vision deficiencies
    Simulate {
        /// Color to simulate
        color: String,

        /// protanopia, deuteranopia, tritanopia or achromatopsia (default: all)
        #[arg(short = 't', long = "type")]
        kind: Option<String>,
    },
    /// List the dominant colors of a PNG image
    Palette {
        /// PNG file to analyse
        input: PathBuf,

        /// Number of colors to list
        #[arg(short, long, default_value_t = color_engine::DEFAULT_TOP_N)]
        top: usize,
    },
}

/// OpenAPI documentation
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Hueguard API",
        description = "Color accessibility analysis: WCAG contrast, accessible color suggestions, dominant colors and color-vision deficiency simulation",
        version = "0.1.0",
        license(name = "MIT")
    ),
    paths(
        api::handle_contrast,
        api::handle_suggest,
        api::handle_analyze,
        api::handle_website,
        api::handle_simulate,
        api::handle_palette,
        api::handle_rpc,
    ),
    components(schemas(
        api::ContrastRequest,
        api::ContrastResponse,
        api::SuggestRequest,
        api::SuggestResponse,
        api::AnalyzeRequest,
        api::AnalyzeResponse,
        api::WebsiteRequest,
        api::WebsiteResponse,
        api::SimulateRequest,
        api::SimulateResponse,
        api::Simulation,
        api::PaletteResponse,
        api::RpcRequest,
        api::RpcResponse,
        api::RpcError,
        api::ErrorResponse,
    )),
    tags(
        (name = "Contrast", description = "Contrast measurement and correction"),
        (name = "Analysis", description = "Batch and website color analysis"),
        (name = "Simulation", description = "Color-vision deficiency simulation"),
        (name = "Palette", description = "Dominant colors of images"),
        (name = "JSON-RPC", description = "Single-endpoint access to the engine")
    )
)]
struct ApiDoc;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Serve) => run_server().await,
        Some(Commands::Contrast {
            foreground,
            background,
        }) => {
            init_cli_logging();
            run_contrast_command(foreground, background)
        }
        Some(Commands::Suggest {
            color,
            target,
            background,
        }) => {
            init_cli_logging();
            run_suggest_command(color, target, background)
        }
        Some(Commands::Simulate { color, kind }) => {
            init_cli_logging();
            run_simulate_command(color, kind)
        }
        Some(Commands::Palette { input, top }) => {
            init_cli_logging();
            run_palette_command(&input, top)
        }
        None => {
            run_status_command();
            Ok(())
        }
    }
}

/// Minimal logging for CLI commands
fn init_cli_logging() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueguard=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn run_contrast_command(foreground: String, background: String) -> anyhow::Result<()> {
    let report = api::contrast_report(api::ContrastRequest {
        foreground,
        background,
    })?;

    println!(
        "{} on {}: {:.2}:1 ({})",
        report.foreground,
        report.background,
        report.ratio,
        report.level.as_str()
    );
    Ok(())
}

fn run_suggest_command(color: String, target: f64, background: String) -> anyhow::Result<()> {
    let report = api::suggest_report(api::SuggestRequest {
        color,
        target_ratio: target,
        background,
    })?;

    println!(
        "{} ({:.2}:1) -> {} ({:.2}:1) on {}",
        report.original,
        report.original_ratio,
        report.suggested,
        report.suggested_ratio,
        report.background
    );
    if !report.reached {
        println!(
            "Target {:.2}:1 not reachable by darkening; showing the best candidate",
            report.target_ratio
        );
    }
    Ok(())
}

fn run_simulate_command(color: String, kind: Option<String>) -> anyhow::Result<()> {
    let report = api::simulate_report(api::SimulateRequest { color, kind })?;

    println!("{}", report.original);
    for simulation in &report.simulations {
        println!("  {:<14} {}", simulation.kind.as_str(), simulation.hex);
    }
    Ok(())
}

/// Analyse a PNG file with the same settings as the server
fn run_palette_command(input: &Path, top: usize) -> anyhow::Result<()> {
    let config = AppConfig::from_env();
    let bytes = std::fs::read(input)?;

    let decoder = ImageDecoder::new(config.analysis.max_upload_bytes, config.analysis.size)
        .with_max_pixels(config.analysis.max_pixels);
    let (image, grid) = decoder.decode_for_analysis(&bytes)?;
    let colors = color_engine::extract_dominant(&grid, top)?;

    println!(
        "{} ({}x{}, counted on {}x{})",
        input.display(),
        image.width,
        image.height,
        grid.width(),
        grid.height()
    );
    for entry in &colors {
        println!(
            "  {}  count {:>5}  share {:>3}%  luminance {:.3}",
            entry.hex, entry.count, entry.percentage, entry.luminance
        );
    }
    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let bind_addr = std::env::var("BIND_ADDR").ok();
    let config_file = std::env::var("CONFIG_FILE").ok();

    println!("Hueguard v{VERSION}");
    println!("Color accessibility analysis\n");

    println!("Environment Variables:");
    println!(
        "  BIND_ADDR   = {}",
        bind_addr.as_deref().unwrap_or("0.0.0.0:3000 (default)")
    );
    println!(
        "  CONFIG_FILE = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );

    println!("\nCommands:");
    println!("  hueguard serve                 Start the HTTP server");
    println!("  hueguard contrast <FG> <BG>    Show the contrast ratio");
    println!("  hueguard suggest <COLOR>       Suggest an accessible color");
    println!("  hueguard simulate <COLOR>      Simulate color-vision deficiencies");
    println!("  hueguard palette <PNG>         List dominant colors of an image");
    println!("\nRun 'hueguard --help' for more details.");
}

/// Run the HTTP server
async fn run_server() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "hueguard=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env();
    let bind_addr = config.server.bind_addr.clone();

    tracing::info!(
        analysis_size = config.analysis.size,
        top_n = config.analysis.top_n,
        max_upload_bytes = config.analysis.max_upload_bytes,
        max_pixels = config.analysis.max_pixels,
        fetch_timeout_secs = config.fetch.timeout_secs,
        "Configuration loaded"
    );

    // Create application state using shared server module
    let state = server::create_app_state(config)?;

    // Build router: start with shared API routes, add production-only routes
    let app = server::build_router(state)
        // OpenAPI documentation (production only)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        // Static file serving (production only)
        .nest_service("/static", ServeDir::new("./static"));

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Hueguard server listening");

    axum::serve(listener, app).await?;

    Ok(())
}
