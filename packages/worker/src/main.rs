//! Worker entry point.
//!
//! Reads one trigger batch (a JSON array of work items) from stdin,
//! runs the discovery pipeline over it, and prints the aggregate
//! summary as JSON. The scheduling trigger, the company fan-out, and
//! the digest sender live outside this binary; its contract is one
//! batch in, one summary out, with the trigger source's redelivery
//! policy covering fatal failures.

mod config;

use anyhow::{Context, Result};
use discovery::{HttpFetcher, OpenAiModel, Pipeline, PipelineConfig, PostgresStore, WorkItem};
use tokio::io::AsyncReadExt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,discovery=debug,sqlx=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    let mut input = String::new();
    tokio::io::stdin()
        .read_to_string(&mut input)
        .await
        .context("Failed to read trigger batch from stdin")?;

    // A malformed trigger batch is fatal for the invocation.
    let items: Vec<WorkItem> = serde_json::from_str(&input).context("Malformed trigger batch")?;
    tracing::info!(items = items.len(), "trigger batch received");

    let store = PostgresStore::new(&config.database_url)
        .await
        .context("Failed to connect to posting store")?;

    let mut model = OpenAiModel::new(&config.openai_api_key);
    if let Some(model_id) = &config.model_id {
        model = model.with_model(model_id);
    }
    if let Some(base_url) = &config.model_base_url {
        model = model.with_base_url(base_url);
    }

    let mut pipeline_config = PipelineConfig::default();
    if let Some(keywords) = config.title_keywords {
        pipeline_config = pipeline_config.with_title_keywords(keywords);
    }
    if let Some(limit) = config.page_char_limit {
        pipeline_config = pipeline_config.with_page_char_limit(limit);
    }

    let pipeline =
        Pipeline::new(HttpFetcher::new(), model, store).with_config(pipeline_config);

    let summary = pipeline
        .process_batch(&items)
        .await
        .context("Pipeline invocation failed")?;

    tracing::info!(
        records_processed = summary.records_processed,
        jobs_written = summary.jobs_written,
        "worker done"
    );
    println!("{}", serde_json::to_string(&summary)?);

    Ok(())
}
