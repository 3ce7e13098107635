/// Application constants
///
/// This module contains all hardcoded values used throughout the application.
/// Constants are organized by category for easy maintenance.
// ============================================================================
// Results Provider
// ============================================================================
/// Default results endpoint
pub const DEFAULT_RESULTS_API_URL: &str = "https://www.magayo.com/api/results.php";

/// Default provider game identifier (PA Evening Pick 3)
pub const DEFAULT_GAME_ID: &str = "us_pa_pick3_eve";

/// Query parameter carrying the provider credential
pub const API_KEY_PARAM: &str = "api_key";

/// Query parameter carrying the game identifier
pub const GAME_PARAM: &str = "game";

/// Default HTTP timeout for the results request in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

// ============================================================================
// Lookup Store
// ============================================================================

/// Default DynamoDB table holding the tracked numbers
pub const DEFAULT_LOOKUP_TABLE_NAME: &str = "LotteryNumbers";

/// Partition key attribute of the lookup table
pub const LOOKUP_KEY_ATTRIBUTE: &str = "lottery_number";

/// Attribute holding the owner name
pub const OWNER_NAME_ATTRIBUTE: &str = "name";

/// Owner reported when a matched item has no name attribute
pub const UNKNOWN_OWNER: &str = "Unknown";

// ============================================================================
// Notification
// ============================================================================

/// Subject line of every notification email
pub const EMAIL_SUBJECT: &str = "PA Lottery Evening Pick 3 Results";

/// Default SES region
pub const DEFAULT_SES_REGION: &str = "us-east-1";

// ============================================================================
// Response Bodies
// ============================================================================

/// Body returned when the provider has no results for the game
pub const NO_RESULTS_BODY: &str = "No results found";

/// Body returned when the provider call fails
pub const RESULTS_FETCH_ERROR_BODY: &str = "Error calling results API";

/// Body returned when the lookup store call fails
pub const LOOKUP_ERROR_BODY: &str = "Error accessing lookup store";

// ============================================================================
// Logging & Monitoring
// ============================================================================

/// Metric namespace for CloudWatch
pub const METRICS_NAMESPACE: &str = "Drawcheck";

/// Log target for metrics
pub const LOG_TARGET_METRICS: &str = "metrics";

/// Default tracing filter when RUST_LOG is unset
pub const DEFAULT_LOG_FILTER: &str = "info";
