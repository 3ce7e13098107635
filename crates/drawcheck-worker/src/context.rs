/// Builds the draw check handler and its AWS collaborators
use crate::handlers::DrawCheckHandler;
use drawcheck_core::email::PlainTextComposer;
use drawcheck_core::error::DrawCheckError;
use drawcheck_core::models::DrawCheckConfig;
use drawcheck_core::services::lookup::DynamoDbLookupStore;
use drawcheck_core::services::metrics::CloudWatchMetricsService;
use drawcheck_core::services::results::HttpResultsProvider;
use drawcheck_core::services::ses::SesEmailSender;
use std::sync::Arc;
use tracing::info;

/// Creates the handler once per cold start
///
/// DynamoDB and CloudWatch use the Lambda's own region; SES uses the
/// configured region.
pub async fn build_handler(config: &DrawCheckConfig) -> Result<DrawCheckHandler, DrawCheckError> {
    let aws_config = aws_config::load_from_env().await;

    let dynamodb_client = aws_sdk_dynamodb::Client::new(&aws_config);

    let ses_config = aws_sdk_ses::config::Builder::from(&aws_config)
        .region(aws_sdk_ses::config::Region::new(
            config.notification.ses_region.clone(),
        ))
        .build();
    let ses_client = aws_sdk_ses::Client::from_conf(ses_config);

    let composer = PlainTextComposer::new(
        &config.notification.sender,
        &config.notification.recipient,
    )?;

    let mut handler = DrawCheckHandler::new(
        config.results.game_id.clone(),
        Arc::new(HttpResultsProvider::new(&config.results)?),
        Arc::new(DynamoDbLookupStore::new(
            dynamodb_client,
            config.lookup.table_name.clone(),
        )),
        Arc::new(SesEmailSender::new(ses_client, composer)),
    );

    if config.metrics_enabled {
        let cloudwatch_client = aws_sdk_cloudwatch::Client::new(&aws_config);
        handler = handler.with_metrics(Arc::new(CloudWatchMetricsService::new(cloudwatch_client)));
    }

    info!(
        game_id = %config.results.game_id,
        table = %config.lookup.table_name,
        ses_region = %config.notification.ses_region,
        "Draw check handler initialized"
    );

    Ok(handler)
}
