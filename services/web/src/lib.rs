mod cli;
mod commands;
mod infra;
mod routes;
mod server;

use verify_frontend::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
