//! Order Gateway Service entry point
//!
//! ```text
//! client -> Gateway -> Cashfree   (create order, synchronous)
//! Cashfree -> Gateway             (webhook, asynchronous)
//! client -> Gateway               (link/status polling, local only)
//! ```

use std::sync::Arc;

use order_gateway::cashfree::CashfreeClient;
use order_gateway::config::AppConfig;
use order_gateway::gateway::state::AppState;
use order_gateway::logging::init_logging;
use order_gateway::store::InMemoryOrderStore;

fn get_env() -> String {
    let args: Vec<String> = std::env::args().collect();
    for i in 0..args.len() {
        if (args[i] == "--env" || args[i] == "-e") && i + 1 < args.len() {
            return args[i + 1].clone();
        }
    }
    "dev".to_string()
}

#[tokio::main]
async fn main() {
    let config = AppConfig::load(&get_env());
    let _log_guard = init_logging(&config);

    if config.cashfree.app_id.is_empty() || config.cashfree.secret.is_empty() {
        tracing::warn!("CASHFREE_APP_ID / CASHFREE_SECRET not set; gateway calls will be rejected upstream");
    }

    let client = match CashfreeClient::new(config.cashfree.clone()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("FATAL: {}", e);
            std::process::exit(1);
        }
    };

    let state = Arc::new(AppState::new(
        Arc::new(InMemoryOrderStore::new()),
        Arc::new(client),
    ));

    tracing::info!("Payment API running on port {}", config.gateway.port);
    order_gateway::gateway::run_server(config.gateway.port, state).await;
}
