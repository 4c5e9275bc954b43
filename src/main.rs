use clap::Parser;
use miette::{IntoDiagnostic, Result};
use reward_network::application::network::RewardNetwork;
use reward_network::domain::ports::{AccountStoreBox, RestaurantStoreBox, RewardRecorderBox};
use reward_network::infrastructure::in_memory::InMemoryRewardRecorder;
use reward_network::interfaces::csv::confirmation_writer::ConfirmationWriter;
use reward_network::interfaces::csv::dining_reader::DiningReader;
use reward_network::interfaces::json::network_config::NetworkConfig;
use std::fs::File;
use std::io;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Network config JSON file (accounts and restaurants)
    network: PathBuf,

    /// Input dinings CSV file
    dinings: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config_file = File::open(cli.network).into_diagnostic()?;
    let config = NetworkConfig::from_reader(config_file).into_diagnostic()?;
    let (accounts, restaurants) = config.into_stores().await;

    let recorder = InMemoryRewardRecorder::new();
    let account_store: AccountStoreBox = Box::new(accounts);
    let restaurant_store: RestaurantStoreBox = Box::new(restaurants);
    let reward_recorder: RewardRecorderBox = Box::new(recorder.clone());
    let network = RewardNetwork::new(account_store, restaurant_store, reward_recorder);

    // Process dinings
    let file = File::open(cli.dinings).into_diagnostic()?;
    let reader = DiningReader::new(file);
    for dining_result in reader.dinings() {
        match dining_result {
            Ok(dining) => {
                if let Err(e) = network.reward_account_for(&dining).await {
                    eprintln!("Error rewarding dining: {}", e);
                }
            }
            Err(e) => {
                eprintln!("Error reading dining: {}", e);
            }
        }
    }

    // Output recorded confirmations
    let confirmations = recorder.confirmations().await;
    let stdout = io::stdout();
    let mut writer = ConfirmationWriter::new(stdout.lock());
    writer.write_confirmations(confirmations).into_diagnostic()?;

    Ok(())
}
