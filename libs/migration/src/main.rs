//! Migration CLI for the taskboard schema.
//!
//! `DATABASE_URL=postgres://... cargo run -p migration -- up` applies the users
//! and tasks tables; `down`, `status` and `fresh` behave as in sea-orm-cli.

use migration::Migrator;
use sea_orm_migration::cli;

#[tokio::main]
async fn main() {
    cli::run_cli(Migrator).await;
}
