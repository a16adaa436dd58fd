mod cli;
mod infra;
mod routes;
mod score;
mod server;
mod submit;

use receipt_points::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
