mod config;
mod error;
mod handlers;
mod status;

use std::{process::exit, sync::Arc};

use axum::{Router, routing::get};
use clap::Parser;
use migration::{Migrator, MigratorTrait};
use spaceship_admin_service::sea_orm::{Database, DatabaseConnection};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, prelude::*};

pub use config::{Cli, StatusPolicy};

#[derive(Clone, Debug)]
pub struct AppState {
    pub conn: Arc<DatabaseConnection>,
    pub policy: StatusPolicy,
}

impl AppState {
    pub fn new(conn: DatabaseConnection, policy: StatusPolicy) -> Self {
        Self {
            conn: Arc::new(conn),
            policy,
        }
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route(
            "/astronauts",
            get(handlers::list_astronauts).post(handlers::create_astronaut),
        )
        .route(
            "/astronauts/{id}",
            get(handlers::get_astronaut)
                .put(handlers::update_astronaut)
                .patch(handlers::update_astronaut)
                .delete(handlers::delete_astronaut),
        )
        .route("/planets", get(handlers::list_planets))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn init_tracing(verbose: bool) {
    let filter_layer = match verbose {
        true => EnvFilter::new("debug"),
        false => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
    };

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn start() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let conn = Database::connect(&cli.database_url).await?;
    Migrator::up(&conn, None).await?;

    let state = AppState::new(conn, cli.status_policy);

    let listener = tokio::net::TcpListener::bind((cli.host.as_str(), cli.port)).await?;
    tracing::info!(
        addr = %listener.local_addr()?,
        policy = ?state.policy,
        pkg = env!("CARGO_PKG_NAME"),
        "listening"
    );
    axum::serve(listener, router(state)).await?;

    Ok(())
}

pub fn main() {
    let result = start();

    if let Some(err) = result.err() {
        eprintln!("Error: {err}");
        exit(1);
    }
}
