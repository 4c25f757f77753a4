pub mod api;

use crate::agent::ChatAgent;
use crate::cli::Args;
use api::{ app, AppState };
use std::error::Error;
use log::{ error, info };

pub struct Server {
    agent: ChatAgent,
    args: Args,
}

impl Server {
    pub fn new(agent: ChatAgent, args: Args) -> Self {
        Self { agent, args }
    }

    pub async fn run(self) -> Result<(), Box<dyn Error + Send + Sync>> {
        let addr = self.args.bind_addr()?;
        let router = app(AppState::new(self.agent));

        let listener = match tokio::net::TcpListener::bind(addr).await {
            Ok(listener) => listener,
            Err(e) => {
                error!("Failed to bind HTTP server to {}: {}. Try a different port.", addr, e);
                return Err(e.into());
            }
        };
        info!("HTTP API server listening on: http://{}", addr);

        axum::serve(listener, router.into_make_service()).await?;
        Ok(())
    }
}
