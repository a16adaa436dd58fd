use clap::Args;
use receipt_points::error::AppError;
use receipt_points::receipts::{BreakdownView, ProcessedView};
use reqwest::Client;
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::score::render_breakdown;

pub(crate) const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

#[derive(Args, Debug)]
pub(crate) struct SubmitArgs {
    /// Path to a receipt JSON payload
    pub(crate) path: PathBuf,
    /// Base URL of a running receipt points service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub(crate) url: String,
}

#[derive(Debug, thiserror::Error)]
pub(crate) enum SubmitError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{method} {url} failed with status {status}: {body}")]
    Status {
        method: &'static str,
        url: String,
        status: u16,
        body: String,
    },
}

impl From<SubmitError> for AppError {
    fn from(value: SubmitError) -> Self {
        AppError::Client(Box::new(value))
    }
}

/// Thin client for the receipt endpoints of a running service.
pub(crate) struct ReceiptClient {
    client: Client,
    base_url: String,
}

impl ReceiptClient {
    pub(crate) fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Posts the payload bytes unchanged so the server does all validation.
    pub(crate) async fn process(&self, payload: Vec<u8>) -> Result<ProcessedView, SubmitError> {
        let url = format!("{}/receipts/process", self.base_url);
        info!(%url, "sending receipt");
        let response = self
            .client
            .post(&url)
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .body(payload)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(status_error("POST", url, response).await);
        }
        Ok(response.json::<ProcessedView>().await?)
    }

    pub(crate) async fn breakdown(&self, id: &str) -> Result<BreakdownView, SubmitError> {
        let url = format!("{}/receipts/{id}/breakdown", self.base_url);
        info!(%url, "fetching breakdown");
        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(status_error("GET", url, response).await);
        }
        Ok(response.json::<BreakdownView>().await?)
    }
}

async fn status_error(
    method: &'static str,
    url: String,
    response: reqwest::Response,
) -> SubmitError {
    let status = response.status().as_u16();
    let body = response.text().await.unwrap_or_default();
    SubmitError::Status {
        method,
        url,
        status,
        body: body.trim().to_string(),
    }
}

pub(crate) async fn run_submit(args: SubmitArgs) -> Result<(), AppError> {
    let SubmitArgs { path, url } = args;
    let payload = fs::read(&path)?;
    let client = ReceiptClient::new(url);
    print!("{}", submit(&client, payload).await?);
    Ok(())
}

/// Submits a receipt, then reads its breakdown back.
async fn submit(client: &ReceiptClient, payload: Vec<u8>) -> Result<String, SubmitError> {
    let processed = client.process(payload).await?;
    let id = processed.id.to_string();
    let view = client.breakdown(&id).await?;

    let mut rendered = format!("Receipt Processed. ID: {id}\n\n");
    rendered.push_str(&render_breakdown(&view));
    Ok(rendered)
}
