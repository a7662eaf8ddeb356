mod config;

use agrofund_api::ApiState;
use anyhow::{Context, Result};
use campaign::CampaignRegistry;
use clap::{Parser, Subcommand};
use economics::{AvailabilityCalculator, CurrencyFormat, ReturnCalculator};
use owo_colors::OwoColorize;
use std::net::SocketAddr;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use config::Config;

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

#[derive(Parser)]
#[command(name = "agrofund")]
#[command(about = "AgroFund agricultural crowdfunding service")]
#[command(version = LONG_VERSION)]
struct Cli {
    /// Path to configuration file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API
    Serve {
        /// Overrides server.listen_addr
        #[arg(long, value_name = "ADDR")]
        listen: Option<SocketAddr>,
    },

    /// Price a reservation of N plants
    Quote {
        #[arg(long, allow_negative_numbers = true)]
        plants: i64,

        /// Cost per plant
        #[arg(long)]
        cost: f64,

        /// Expected market price per plant
        #[arg(long)]
        market: f64,

        /// Investor share of net profit, as a fraction (0.2 = 20%)
        #[arg(long = "return-pct")]
        return_pct: f64,
    },

    /// Show remaining plant capacity for a funding target
    Availability {
        #[arg(long)]
        target: f64,

        #[arg(long)]
        raised: f64,

        /// Cost per plant
        #[arg(long)]
        cost: f64,
    },
}

fn init_logging(level: &str) {
    // RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref())?;
    let currency = config.display.currency_format()?;

    match cli.command {
        Command::Serve { listen } => {
            init_logging(&config.logging.level);
            serve(config, currency, listen).await
        }
        Command::Quote {
            plants,
            cost,
            market,
            return_pct,
        } => {
            print_quote(&currency, plants, cost, market, return_pct);
            Ok(())
        }
        Command::Availability {
            target,
            raised,
            cost,
        } => {
            print_availability(target, raised, cost);
            Ok(())
        }
    }
}

async fn serve(config: Config, currency: CurrencyFormat, listen: Option<SocketAddr>) -> Result<()> {
    let addr = listen.unwrap_or(config.server.listen_addr);

    let registry = match &config.storage.data_file {
        Some(path) => CampaignRegistry::load(path)
            .with_context(|| format!("loading registry from {}", path.display()))?,
        None => {
            tracing::warn!("no storage.data_file configured, campaigns live in memory only");
            CampaignRegistry::new()
        }
    };

    if config.server.admin_token.is_none() {
        tracing::warn!("no admin token configured, admin endpoints are disabled");
    }

    let mut state = ApiState::new(registry, config.server.admin_token).with_currency(currency);
    if let Some(path) = config.storage.data_file {
        state = state.with_data_file(path);
    }

    tracing::info!(version = LONG_VERSION, %addr, "starting agrofund");
    agrofund_api::start_server(addr, state)
        .await
        .with_context(|| format!("serving on {}", addr))
}

fn print_quote(currency: &CurrencyFormat, plants: i64, cost: f64, market: f64, return_pct: f64) {
    let calc = ReturnCalculator::calculate_investment_return(plants, cost, market, return_pct);

    println!("{}", format!("Quote for {} plants", plants).cyan().bold());
    println!("  {:<18} {}", "Investment".yellow(), currency.format(calc.investment_amount));
    println!("  {:<18} {}", "Estimated income".yellow(), currency.format(calc.estimated_income));

    let net = currency.format(calc.net_profit);
    if calc.is_loss() {
        println!("  {:<18} {}", "Net profit".yellow(), net.red());
    } else {
        println!("  {:<18} {}", "Net profit".yellow(), net.green());
    }

    println!("  {:<18} {}", "Projected return".yellow(), currency.format(calc.projected_return));
    println!(
        "  {:<18} {}",
        "Total return".yellow(),
        currency.format(calc.total_return).bold()
    );
    println!("  {:<18} {:.2}%", "ROI".yellow(), calc.return_on_investment());
}

fn print_availability(target: f64, raised: f64, cost: f64) {
    let info = AvailabilityCalculator::calculate_plant_availability(target, raised, cost);

    println!("{}", "Plant availability".cyan().bold());
    println!("  {:<10} {}", "Total".yellow(), info.total_plants);
    println!("  {:<10} {}", "Reserved".yellow(), info.reserved_plants);
    println!(
        "  {:<10} {} ({:.1}%)",
        "Available".yellow(),
        info.available_plants,
        info.availability_percentage
    );

    if info.is_fully_funded {
        println!("  {}", "Fully funded".green().bold());
    }
}
