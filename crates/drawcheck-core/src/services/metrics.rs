/// CloudWatch metrics service for monitoring and observability
use crate::constants::{LOG_TARGET_METRICS, METRICS_NAMESPACE};
use async_trait::async_trait;
use aws_sdk_cloudwatch::types::{Dimension, MetricDatum, StandardUnit};
use std::collections::HashMap;
use tracing::{debug, error};

/// Emission never fails from the caller's point of view; a metric that
/// cannot be delivered is logged and dropped.
#[async_trait]
pub trait MetricsService: Send + Sync {
    /// Record a counter metric (count of events)
    async fn record_counter(&self, name: &str, value: f64, dimensions: &[(&str, &str)]);

    /// Record a histogram metric (distribution of values)
    async fn record_histogram(
        &self,
        name: &str,
        value: f64,
        unit: MetricUnit,
        dimensions: &[(&str, &str)],
    );
}

#[derive(Debug, Clone, Copy)]
pub enum MetricUnit {
    Count,
    Milliseconds,
    None,
}

impl From<MetricUnit> for StandardUnit {
    fn from(unit: MetricUnit) -> Self {
        match unit {
            MetricUnit::Count => StandardUnit::Count,
            MetricUnit::Milliseconds => StandardUnit::Milliseconds,
            MetricUnit::None => StandardUnit::None,
        }
    }
}

/// CloudWatch metrics service implementation
pub struct CloudWatchMetricsService {
    client: aws_sdk_cloudwatch::Client,
    namespace: String,
}

impl CloudWatchMetricsService {
    pub fn new(client: aws_sdk_cloudwatch::Client) -> Self {
        Self::with_namespace(client, METRICS_NAMESPACE.to_string())
    }

    pub fn with_namespace(client: aws_sdk_cloudwatch::Client, namespace: String) -> Self {
        Self { client, namespace }
    }

    async fn emit_metric(
        &self,
        name: &str,
        value: f64,
        unit: MetricUnit,
        dimensions: &[(&str, &str)],
    ) {
        let dims: Vec<Dimension> = dimensions
            .iter()
            .map(|(k, v)| Dimension::builder().name(*k).value(*v).build())
            .collect();

        let datum = MetricDatum::builder()
            .metric_name(name)
            .value(value)
            .unit(unit.into())
            .timestamp(aws_smithy_types::DateTime::from(
                std::time::SystemTime::now(),
            ))
            .set_dimensions(if dims.is_empty() { None } else { Some(dims) })
            .build();

        match self
            .client
            .put_metric_data()
            .namespace(&self.namespace)
            .metric_data(datum)
            .send()
            .await
        {
            Ok(_) => {
                debug!(
                    target: LOG_TARGET_METRICS,
                    metric = name,
                    value = value,
                    "Emitted metric to CloudWatch"
                );
            }
            Err(e) => {
                error!(
                    target: LOG_TARGET_METRICS,
                    metric = name,
                    error = %e,
                    "Failed to emit metric to CloudWatch"
                );
            }
        }
    }
}

#[async_trait]
impl MetricsService for CloudWatchMetricsService {
    async fn record_counter(&self, name: &str, value: f64, dimensions: &[(&str, &str)]) {
        self.emit_metric(name, value, MetricUnit::Count, dimensions)
            .await;
    }

    async fn record_histogram(
        &self,
        name: &str,
        value: f64,
        unit: MetricUnit,
        dimensions: &[(&str, &str)],
    ) {
        self.emit_metric(name, value, unit, dimensions).await;
    }
}

/// Helper functions for commonly used metrics
pub struct Metrics;

impl Metrics {
    /// Record an invocation of the draw check
    pub async fn draw_check_started(service: &dyn MetricsService, game_id: &str) {
        service
            .record_counter("DrawChecks", 1.0, &[("Game", game_id)])
            .await;
    }

    /// Record a provider response without results
    pub async fn no_results(service: &dyn MetricsService, game_id: &str) {
        service
            .record_counter("NoResults", 1.0, &[("Game", game_id)])
            .await;
    }

    /// Record the lookup outcome for a drawn number
    pub async fn lookup_outcome(service: &dyn MetricsService, game_id: &str, matched: bool) {
        let name = if matched { "MatchesFound" } else { "NoMatches" };
        service.record_counter(name, 1.0, &[("Game", game_id)]).await;
    }

    /// Record a delivered notification
    pub async fn notification_sent(service: &dyn MetricsService, duration_ms: f64) {
        service.record_counter("NotificationsSent", 1.0, &[]).await;
        service
            .record_histogram(
                "DrawCheckDuration",
                duration_ms,
                MetricUnit::Milliseconds,
                &[],
            )
            .await;
    }

    /// Record error
    pub async fn error_occurred(service: &dyn MetricsService, stage: &str) {
        service
            .record_counter("Errors", 1.0, &[("Stage", stage)])
            .await;
    }
}

/// Mock metrics service for testing
pub struct MockMetricsService {
    metrics: tokio::sync::Mutex<HashMap<String, Vec<f64>>>,
}

impl MockMetricsService {
    pub fn new() -> Self {
        Self {
            metrics: tokio::sync::Mutex::new(HashMap::new()),
        }
    }

    pub async fn get_metric_values(&self, name: &str) -> Vec<f64> {
        self.metrics
            .lock()
            .await
            .get(name)
            .cloned()
            .unwrap_or_default()
    }
}

impl Default for MockMetricsService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MetricsService for MockMetricsService {
    async fn record_counter(&self, name: &str, value: f64, _dimensions: &[(&str, &str)]) {
        let mut metrics = self.metrics.lock().await;
        metrics.entry(name.to_string()).or_default().push(value);
    }

    async fn record_histogram(
        &self,
        name: &str,
        value: f64,
        _unit: MetricUnit,
        _dimensions: &[(&str, &str)],
    ) {
        let mut metrics = self.metrics.lock().await;
        metrics.entry(name.to_string()).or_default().push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_metrics() {
        let service = MockMetricsService::new();

        service.record_counter("TestMetric", 1.0, &[]).await;
        service.record_counter("TestMetric", 2.0, &[]).await;

        let values = service.get_metric_values("TestMetric").await;
        assert_eq!(values, vec![1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_metrics_helpers() {
        let service = MockMetricsService::new();

        Metrics::draw_check_started(&service, "us_pa_pick3_eve").await;
        Metrics::lookup_outcome(&service, "us_pa_pick3_eve", true).await;
        Metrics::lookup_outcome(&service, "us_pa_pick3_eve", false).await;
        Metrics::notification_sent(&service, 125.0).await;
        Metrics::error_occurred(&service, "lookup").await;

        assert_eq!(service.get_metric_values("DrawChecks").await, vec![1.0]);
        assert_eq!(service.get_metric_values("MatchesFound").await, vec![1.0]);
        assert_eq!(service.get_metric_values("NoMatches").await, vec![1.0]);
        assert_eq!(service.get_metric_values("NotificationsSent").await, vec![1.0]);
        assert_eq!(service.get_metric_values("DrawCheckDuration").await, vec![125.0]);
        assert_eq!(service.get_metric_values("Errors").await, vec![1.0]);
        assert!(service.get_metric_values("NoResults").await.is_empty());
    }

    #[test]
    fn test_metric_unit_conversion() {
        assert_eq!(StandardUnit::from(MetricUnit::Count), StandardUnit::Count);
        assert_eq!(
            StandardUnit::from(MetricUnit::Milliseconds),
            StandardUnit::Milliseconds
        );
    }
}
