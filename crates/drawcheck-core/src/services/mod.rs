/// AWS service clients and infrastructure services
pub mod config;
pub mod lookup;
pub mod metrics;
pub mod results;
pub mod ses;

// Re-export service traits
pub use config::EnvConfigProvider;
pub use lookup::LookupStore;
pub use metrics::MetricsService;
pub use results::ResultsProvider;
pub use ses::EmailSender;
