mod cli;
mod preview;

use clap::Parser;
use color_eyre::Result;
use portfolio_site::{Catalog, SiteConfig};

use cli::CliArgs;

fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    // Load environment variables from .env file, before RUST_LOG is read
    dotenv::dotenv().ok();

    let args = CliArgs::parse();
    init_logging(&args);

    let mut config = SiteConfig::from_env()?;
    args.apply_overrides(&mut config)?;

    let catalog = match &args.catalog {
        Some(path) => {
            log::debug!("loading catalog from {}", path.display());
            Catalog::from_json(&std::fs::read_to_string(path)?)?
        }
        None => Catalog::builtin()?,
    };

    preview::run(&args.action(), &catalog, &config, args.json)
}

fn init_logging(args: &CliArgs) {
    let filter = args.log_filter(std::env::var("RUST_LOG").ok());
    env_logger::Builder::new().parse_filters(&filter).init();
}
