//! Seller Dashboard CLI
//!
//! Developer tooling for the dashboard page:
//! - Generate the default config file
//! - Print the chart configuration handed to Chart.js
//! - Print the theme palettes
//! - Replay toggle clicks against a headless page

use anyhow::Context;
use clap::{Parser, Subcommand};
use seller_dashboard::{
    format_tick, generate_default_config, ChartConfig, ChartPalette, DashboardConfig,
    HeadlessPage, MemoryStore, PageController, PreferenceStore, RecordingRenderer, SalesSeries,
    Theme,
};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "seller-dashboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Developer tooling for the seller dashboard page")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the chart configuration for a theme as JSON
    Chart {
        /// Theme (dark or light)
        #[arg(short, long, default_value = "dark")]
        theme: Theme,
        /// Pretty-print the JSON
        #[arg(long)]
        pretty: bool,
    },

    /// Show the colors of both themes
    Palette,

    /// Replay theme toggle clicks against a headless page
    Simulate {
        /// Number of theme toggle clicks
        #[arg(short = 'n', long, default_value = "3")]
        clicks: usize,
        /// Value already stored under the theme key
        #[arg(long)]
        stored: Option<String>,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => DashboardConfig::load(path)
            .with_context(|| format!("loading config from {:?}", path))?,
        None => DashboardConfig::load_default(),
    };

    let (json_layer, text_layer) = if config.logging.is_json() {
        (
            Some(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr)),
            None,
        )
    } else {
        (
            None,
            Some(tracing_subscriber::fmt::layer().with_writer(std::io::stderr)),
        )
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| format!("seller_dashboard={}", config.logging.level)),
        ))
        .with(json_layer)
        .with(text_layer)
        .init();

    match cli.command {
        Commands::Config { output } => {
            let content = generate_default_config();

            match output {
                Some(path) => {
                    if let Some(parent) = path.parent() {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(&path, &content)?;
                    println!("Config written to {:?}", path);
                }
                None => {
                    print!("{}", content);
                }
            }
        }

        Commands::Chart { theme, pretty } => {
            let chart_config = ChartConfig::sales_line(
                &SalesSeries::demo(),
                &ChartPalette::for_theme(theme),
                &config.chart,
            );

            let json = if pretty {
                serde_json::to_string_pretty(&chart_config)?
            } else {
                chart_config.to_json()?
            };
            println!("{}", json);

            if let Some((_, fill)) = chart_config.fill_gradients().next() {
                let stops: Vec<&str> = fill.stops.iter().map(|s| s.color.as_str()).collect();
                eprintln!("fill gradient (0..{}px): {}", fill.height, stops.join(" -> "));
            }
            if let Some(prefix) = chart_config.y_tick_prefix() {
                eprintln!("y tick labels: {}", format_tick(prefix, 80.0));
            }
        }

        Commands::Palette => {
            println!("{:<8} {:<28} {:<10} {:<10}", "THEME", "GRID", "TEXT", "ACCENT");
            for theme in Theme::ALL {
                let palette = ChartPalette::for_theme(theme);
                println!(
                    "{:<8} {:<28} {:<10} {:<10}",
                    theme, palette.grid, palette.text, palette.accent
                );
            }
        }

        Commands::Simulate { clicks, stored } => {
            let key = config.storage.theme_key.clone();
            let store = match stored.as_deref() {
                Some(value) => MemoryStore::with_value(&key, value),
                None => MemoryStore::new(),
            };

            let mut controller =
                PageController::new(HeadlessPage::new(), RecordingRenderer::new(), store, config);
            controller.initialize();
            println!("start    theme={}", controller.theme());

            for click in 1..=clicks {
                if let Some(theme) = controller.toggle_theme() {
                    println!(
                        "click {:<3} theme={:<5} stored={}",
                        click,
                        theme,
                        controller.store().get(&key).unwrap_or_default()
                    );
                }
            }

            let renderer = controller.chart().renderer();
            println!(
                "charts: constructed={} destroyed={} live={}",
                renderer.constructed(),
                renderer.destroyed(),
                renderer.live()
            );
        }
    }

    Ok(())
}
