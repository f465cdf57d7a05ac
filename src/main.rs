use barcart::Tab;
use barcart::core::config;
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::str::FromStr;

#[derive(Parser)]
#[command(name = "barcart", about = "Cocktail browser and drink personality wheel")]
struct Args {
    /// Screen to open on start
    #[arg(short, long, value_enum)]
    tab: Option<Tab>,

    /// Log level for barcart.log (error, warn, info, debug, trace)
    #[arg(long)]
    log_level: Option<String>,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // A broken config file is reported after the logger is up
    let loaded = config::load_config();
    let file_config = loaded.as_ref().ok();
    let resolved = config::resolve(
        file_config.unwrap_or(&config::BarcartConfig::default()),
        args.tab,
        args.log_level.as_deref(),
    );

    // Initialize file logger - writes to barcart.log in current directory
    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    let level = LevelFilter::from_str(&resolved.log_level).unwrap_or(LevelFilter::Debug);

    if let Ok(log_file) = File::create("barcart.log") {
        let _ = WriteLogger::init(level, log_config, log_file);
    }

    if let Err(e) = &loaded {
        log::warn!("Ignoring config file: {}", e);
    }
    log::info!("barcart starting up on tab: {:?}", resolved.start_tab);

    barcart::tui::run(resolved)
}
