//! Load games from a JSON file into the PostgreSQL catalog.
//!
//! Usage: `ludoteca-seed [PATH]`. The path defaults to `SEED_FILE`, then to
//! `crates/db/seed/games.json`.

use std::path::PathBuf;

use ludoteca_db::repositories::PgGameRepository;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const DEFAULT_SEED_FILE: &str = "crates/db/seed/games.json";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "ludoteca_seed=info,ludoteca_db=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let path: PathBuf = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SEED_FILE").ok())
        .unwrap_or_else(|| DEFAULT_SEED_FILE.into())
        .into();

    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

    let pool = ludoteca_db::create_pool(&database_url, 5)
        .await
        .expect("Failed to connect to database");

    ludoteca_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");

    let repository = PgGameRepository::new(pool);

    match ludoteca_db::seed::seed_from_file(&repository, &path).await {
        Ok(count) => tracing::info!(count, "Database seeding completed"),
        Err(err) => {
            tracing::error!(error = %err, "Database seeding failed");
            std::process::exit(1);
        }
    }
}
