use crate::buildium::BuildiumClient;
use crate::config::AppConfig;
use crate::responses::error_to_response;
use crate::router::{handle, App};
use astra::Server;
use std::net::SocketAddr;
use std::sync::Arc;

mod buildium;
mod config;
mod domain;
mod errors;
mod layout;
mod responses;
mod router;
mod templates;

#[cfg(test)]
mod tests;

fn main() {
    let cfg = match AppConfig::from_env() {
        Ok(cfg) => cfg,
        Err(e) => {
            eprintln!("❌ Configuration error: {e}");
            std::process::exit(1);
        }
    };

    let client = match BuildiumClient::new(cfg.buildium.clone()) {
        Ok(client) => client,
        Err(e) => {
            eprintln!("❌ Buildium client init failed: {e}");
            std::process::exit(1);
        }
    };

    let addr: SocketAddr = match cfg.bind_addr.parse() {
        Ok(addr) => addr,
        Err(e) => {
            eprintln!("❌ Invalid bind address {}: {e}", cfg.bind_addr);
            std::process::exit(1);
        }
    };

    let app = Arc::new(App {
        cfg,
        leases: Box::new(client),
    });

    println!("Starting server at http://{addr}");

    let server = Server::bind(&addr).max_workers(8);

    // Serve requests; the pipeline re-runs in full per request.
    let result = server.serve(move |req, _info| match handle(req, &app) {
        Ok(resp) => resp,
        Err(err) => error_to_response(err),
    });

    if let Err(e) = result {
        eprintln!("Server ended with error: {e}");
    }

    println!("Server shut down cleanly.");
}
