pub mod agent;
pub mod cli;
pub mod config;
pub mod error;
pub mod history;
pub mod models;
pub mod server;

use agent::ChatAgent;
use cli::Args;
use config::chronex;
use log::info;
use server::Server;
use std::error::Error;

pub async fn run(args: Args) -> Result<(), Box<dyn Error + Send + Sync>> {
    info!("--- Core Configuration ---");
    info!("Bind Address: {}:{}", args.host, args.port);
    info!("Debug Mode: {}", args.debug);
    info!("Model: {}", chronex().model_name());
    info!("-------------------------");

    let server = Server::new(ChatAgent::default(), args);
    server.run().await
}
