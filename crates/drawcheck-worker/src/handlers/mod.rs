/// Lambda event handlers
pub mod draw_check;

pub use draw_check::{CheckOutcome, DrawCheckHandler};

use drawcheck_core::models::InvocationResponse;
use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::info;

/// Main Lambda handler
///
/// The scheduled trigger carries no meaningful payload; only the request id
/// is kept for log correlation. A notification failure escapes as `Err` and
/// is reported by the runtime as an invocation fault.
#[tracing::instrument(
    name = "lambda.invoke",
    skip(check, event),
    fields(request_id = %event.context.request_id)
)]
pub async fn handler(
    check: &DrawCheckHandler,
    event: LambdaEvent<Value>,
) -> Result<InvocationResponse, Error> {
    info!("Received scheduled trigger");

    let response = check.handle().await?;

    info!(status_code = response.status_code, "Draw check finished");
    Ok(response)
}
