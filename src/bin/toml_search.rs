use anyhow::Context;
use clap::Parser;
use fit_search::core::ConfigProvider;
use fit_search::utils::{logger, validation::Validate};
use fit_search::{app, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-search")]
#[command(about = "Package search with TOML configuration support")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "fit-search.toml")]
    config: String,

    /// Run a single query; reads queries from stdin when omitted
    #[arg(short, long)]
    query: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Show the resolved settings without loading the catalog
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // 載入 TOML 配置
    let config = TomlConfig::from_file(&args.config)
        .with_context(|| format!("Failed to load config file '{}'", args.config))?;

    logger::init_logger(args.verbose || config.verbose(), config.json_logs());
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    if args.dry_run {
        display_config_summary(&config);
        return Ok(());
    }

    app::run(&config, args.query.as_deref())
        .await
        .context("Search failed")?;

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    println!("📋 Configuration Summary:");
    println!("  Page: {}", config.page());
    println!("  Anchor: {}", config.anchor());
    println!("  Catalog: {}", config.catalog_file());
    println!("  Debounce: {:?}", config.debounce());
    println!("  Timeout: {:?}", config.request_timeout());
    println!("  Format: {:?}", config.output_format());

    let headers = config.headers();
    if !headers.is_empty() {
        println!("  Headers: {} custom headers", headers.len());
    }
}
