use drawcheck_core::services::EnvConfigProvider;
use drawcheck_core::utils::logging::init_tracing;
use drawcheck_worker::context::build_handler;
use drawcheck_worker::handler;
use lambda_runtime::{Error, run, service_fn};
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<(), Error> {
    // Initialize tracing subscriber for structured logging
    init_tracing();

    info!("Starting Drawcheck Lambda function");

    let config = EnvConfigProvider::new()
        .inspect_err(|e| error!(error = %e, "Failed to load configuration"))?
        .into_config();

    let check = build_handler(&config).await?;
    let check = &check;

    // Run the Lambda runtime
    run(service_fn(move |event| async move { handler(check, event).await })).await
}
