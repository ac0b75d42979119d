mod board;
mod cli;
mod forms;
mod infra;
mod routes;
mod server;

use focus_recruitment::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
