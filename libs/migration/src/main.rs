//! Migration CLI for the `demo` schema.
//!
//! Reads `DATABASE_URL` from the environment:
//!
//! ```text
//! cargo run -p migration -- up       # apply pending migrations
//! cargo run -p migration -- status   # list applied/pending
//! cargo run -p migration -- down     # roll back the last migration
//! ```

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
