mod cli;
mod infra;
mod offline;
mod routes;
mod server;

use jee_scorecard::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
