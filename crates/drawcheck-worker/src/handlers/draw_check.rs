/// Draw check handler - fetches the draw, looks up its owner and notifies
use drawcheck_core::error::DrawCheckError;
use drawcheck_core::models::{InvocationResponse, NotificationMessage};
use drawcheck_core::services::metrics::{Metrics, MetricsService};
use drawcheck_core::services::{EmailSender, LookupStore, ResultsProvider};
use std::sync::Arc;
use std::time::Instant;
use tracing::{error, info};

/// Terminal state of one draw check
#[derive(Debug)]
pub enum CheckOutcome {
    /// The draw was looked up and the notification was sent
    Notified {
        draw_key: String,
        owner: Option<String>,
        message: NotificationMessage,
        message_id: String,
    },
    /// The provider returned no results for the game
    NoResults,
    /// The provider call failed
    FetchFailed(DrawCheckError),
    /// The lookup store call failed
    LookupFailed(DrawCheckError),
}

impl CheckOutcome {
    pub fn into_response(self) -> InvocationResponse {
        match self {
            Self::Notified { message, .. } => InvocationResponse::ok(message.body),
            Self::NoResults => InvocationResponse::no_results(),
            Self::FetchFailed(_) => InvocationResponse::fetch_failed(),
            Self::LookupFailed(_) => InvocationResponse::lookup_failed(),
        }
    }
}

/// Stateless orchestration over the three collaborators
pub struct DrawCheckHandler {
    game_id: String,
    results: Arc<dyn ResultsProvider>,
    lookup: Arc<dyn LookupStore>,
    mailer: Arc<dyn EmailSender>,
    metrics: Option<Arc<dyn MetricsService>>,
}

impl DrawCheckHandler {
    pub fn new(
        game_id: impl Into<String>,
        results: Arc<dyn ResultsProvider>,
        lookup: Arc<dyn LookupStore>,
        mailer: Arc<dyn EmailSender>,
    ) -> Self {
        Self {
            game_id: game_id.into(),
            results,
            lookup,
            mailer,
            metrics: None,
        }
    }

    pub fn with_metrics(mut self, metrics: Arc<dyn MetricsService>) -> Self {
        self.metrics = Some(metrics);
        self
    }

    fn metrics(&self) -> Option<&dyn MetricsService> {
        self.metrics.as_deref()
    }

    /// Runs one check and converts the outcome into the Lambda response
    pub async fn handle(&self) -> Result<InvocationResponse, DrawCheckError> {
        Ok(self.run().await?.into_response())
    }

    /// Runs one check
    ///
    /// Fetch and lookup failures end the check with an outcome. A send
    /// failure is returned as `Err`.
    #[tracing::instrument(name = "draw_check.run", skip(self), fields(game_id = %self.game_id))]
    pub async fn run(&self) -> Result<CheckOutcome, DrawCheckError> {
        let start_time = Instant::now();

        if let Some(metrics) = self.metrics() {
            Metrics::draw_check_started(metrics, &self.game_id).await;
        }

        // 1. Fetch and parse
        let response = match self.results.fetch_results().await {
            Ok(response) => response,
            Err(e) => {
                error!(stage = e.stage(), error = %e, "Error calling results API");
                self.record_error(&e).await;
                return Ok(CheckOutcome::FetchFailed(e));
            }
        };

        let Some(draw) = response.draw() else {
            info!("No results found in API response");
            if let Some(metrics) = self.metrics() {
                Metrics::no_results(metrics, &self.game_id).await;
            }
            return Ok(CheckOutcome::NoResults);
        };

        // 2. Derive key
        let draw_key = draw.key();
        info!(
            drawn_number = %draw_key,
            draw_date = ?draw.draw_date,
            "Drawn number"
        );

        // 3. Lookup
        let entry = match self.lookup.lookup(&draw_key).await {
            Ok(entry) => entry,
            Err(e) => {
                error!(stage = e.stage(), error = %e, "Error accessing lookup store");
                self.record_error(&e).await;
                return Ok(CheckOutcome::LookupFailed(e));
            }
        };

        match &entry {
            Some(entry) => info!(
                drawn_number = %draw_key,
                owner = %entry.owner_name,
                "Match found"
            ),
            None => info!(drawn_number = %draw_key, "No match found"),
        }

        if let Some(metrics) = self.metrics() {
            Metrics::lookup_outcome(metrics, &self.game_id, entry.is_some()).await;
        }

        // 4. Compose and notify
        let message = NotificationMessage::for_draw(&draw_key, entry.as_ref());

        let message_id = match self.mailer.send(&message).await {
            Ok(message_id) => message_id,
            Err(e) => {
                error!(stage = e.stage(), error = %e, "Failed to send notification");
                self.record_error(&e).await;
                return Err(e);
            }
        };

        if let Some(metrics) = self.metrics() {
            Metrics::notification_sent(metrics, start_time.elapsed().as_millis() as f64).await;
        }

        Ok(CheckOutcome::Notified {
            draw_key,
            owner: entry.map(|entry| entry.owner_name),
            message,
            message_id,
        })
    }

    async fn record_error(&self, error: &DrawCheckError) {
        if let Some(metrics) = self.metrics() {
            Metrics::error_occurred(metrics, error.stage()).await;
        }
    }
}
