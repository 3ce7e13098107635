/// Draw result models
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Date layouts the results provider has been seen to use
const DRAW_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%Y%m%d"];

/// Body returned by the results provider
///
/// Only `results` drives the check. Every other field is optional and
/// unknown fields are ignored. The date fields are informational, so a
/// shape that cannot be read as a date decodes to `None` instead of failing
/// the whole body.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ResultsResponse {
    #[serde(default)]
    pub results: Option<RawResults>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub draw: Option<String>,
    #[serde(default, deserialize_with = "lenient_text")]
    pub draw_date: Option<String>,
}

/// Reads strings and numbers as text, anything else as absent
fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(text) => Some(text),
        Value::Number(number) => Some(number.to_string()),
        _ => None,
    })
}

/// Drawn digits as sent by the provider
///
/// Accepts a JSON array of digit strings (`["7","0","4"]`) as well as a
/// comma-separated string (`"7,0,4"`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum RawResults {
    List(Vec<String>),
    Delimited(String),
}

impl RawResults {
    pub fn digits(&self) -> Vec<String> {
        match self {
            Self::List(items) => items.clone(),
            Self::Delimited(text) => text
                .split(',')
                .map(str::trim)
                .filter(|digit| !digit.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }
}

impl ResultsResponse {
    /// Extracts the draw, or `None` when the provider reported no results
    pub fn draw(&self) -> Option<DrawResult> {
        let digits = self.results.as_ref()?.digits();
        if digits.is_empty() {
            return None;
        }

        Some(DrawResult {
            digits,
            draw_date: self.draw_date(),
        })
    }

    /// First of `draw_date` and `draw` that parses as a date
    pub fn draw_date(&self) -> Option<NaiveDate> {
        [&self.draw_date, &self.draw]
            .into_iter()
            .flatten()
            .find_map(|raw| parse_draw_date(raw))
    }
}

/// One drawn number
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawResult {
    pub digits: Vec<String>,
    pub draw_date: Option<NaiveDate>,
}

impl DrawResult {
    pub fn new(digits: Vec<String>) -> Self {
        Self {
            digits,
            draw_date: None,
        }
    }

    /// Lookup key: the digits concatenated in draw order
    pub fn key(&self) -> String {
        self.digits.concat()
    }
}

/// Parses the provider's draw date, tolerating the known layouts
pub fn parse_draw_date(raw: &str) -> Option<NaiveDate> {
    DRAW_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(raw.trim(), format).ok())
}

/// Record from the lookup store
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LookupEntry {
    pub key: String,
    pub owner_name: String,
}

impl LookupEntry {
    pub fn new(key: impl Into<String>, owner_name: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            owner_name: owner_name.into(),
        }
    }
}
