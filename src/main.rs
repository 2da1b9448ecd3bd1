//! Mindful Search Server - Binary Entry Point
//!
//! Serves MCP over stdio by default, or the REST API when
//! `MINDFUL_HTTP_ADDR` is set. The corpus loads in the background.

use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use mindful_search::api::{self, AppState};
use mindful_search::config::{ServerConfig, Transport};
use mindful_search::corpus::FileCorpus;
use mindful_search::protocol::ServerInfo;
use mindful_search::search::SearchIndex;
use mindful_search::server::McpServer;
use mindful_search::tools::register_all_tools;
use mindful_search::types::McpResult;

fn main() -> McpResult<()> {
    // stdout carries JSON-RPC, logs go to stderr
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new("mindful_search=info"))?;
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let config = ServerConfig::from_env()?;
    info!(
        version = mindful_search::VERSION,
        corpus = %config.corpus_path.display(),
        "Starting Mindful Search server"
    );

    let index = Arc::new(SearchIndex::new());
    let loader = index.spawn_load(Box::new(FileCorpus::new(config.corpus_path.clone())));

    let result = match config.transport {
        Transport::Stdio => {
            let mut server = McpServer::with_info(ServerInfo::default());
            register_all_tools(&mut server, index);
            server.run()
        }
        Transport::Http(addr) => {
            let runtime = tokio::runtime::Runtime::new()?;
            runtime.block_on(api::serve(addr, Arc::new(AppState::new(index))))
        }
    };

    if loader.is_finished() {
        if let Ok(Err(e)) = loader.join() {
            error!(error = %e, "Corpus was never loaded");
        }
    }

    result
}
