use ruint::aliases::U256;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use super::WEI_PER_TOKEN;
use crate::error::UpstreamError;

/// Request body shared by both endpoints.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeRequest<'a> {
    pub node_address: &'a str,
}

/// Wei-scaled amount; the API sends these as strings, occasionally as numbers.
/// Numbers keep their JSON text (`arbitrary_precision`), so wide values survive.
#[derive(Debug, Clone, Deserialize)]
#[serde(try_from = "Value")]
pub enum TokenAmount {
    Text(String),
    Number(serde_json::Number),
}

impl TryFrom<Value> for TokenAmount {
    type Error = String;

    fn try_from(value: Value) -> Result<Self, Self::Error> {
        match value {
            Value::String(s) => Ok(TokenAmount::Text(s)),
            Value::Number(n) => Ok(TokenAmount::Number(n)),
            other => Err(format!("expected a token amount, got {other}")),
        }
    }
}

impl fmt::Display for TokenAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenAmount::Text(s) => f.write_str(s),
            TokenAmount::Number(n) => write!(f, "{n}"),
        }
    }
}

/* ---------- live-log ---------- */

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveLogResponse {
    pub success: Option<Value>,
    pub live_info: Option<LiveInfo>,
    pub error: Option<Value>,
    pub message: Option<Value>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveInfo {
    pub mined_tokens: Option<TokenAmount>,
    pub speed_per_sec: Option<TokenAmount>,
}

impl LiveLogResponse {
    /// Truthy `success` and a `liveInfo` payload.
    pub fn is_ok(&self) -> bool {
        self.success.as_ref().is_some_and(is_truthy) && self.live_info.is_some()
    }

    /// One-line summary shown above the activity verdict.
    pub fn status_line(&self) -> String {
        match &self.live_info {
            Some(info) if self.is_ok() => format!(
                "Avail to claim: {} NPT | Speed: {}/s",
                format_amount(info.mined_tokens.as_ref()),
                format_amount(info.speed_per_sec.as_ref()),
            ),
            _ => format!("❌ API Error: {}", self.failure_reason()),
        }
    }

    /// `error` when it carries something, otherwise `message`, otherwise
    /// `unknown error`.
    pub fn failure_reason(&self) -> String {
        let error = self.error.as_ref().filter(|v| is_truthy(v));
        match error.or(self.message.as_ref()) {
            Some(Value::String(s)) => s.clone(),
            Some(Value::Null) | None => "unknown error".to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/* ---------- claim ---------- */

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub claim_data: Option<ClaimData>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimData {
    pub mined_tokens: Option<TokenAmount>,
}

impl ClaimResponse {
    /// Cumulative mined amount as an exact integer. Missing or empty values
    /// count as 0. Bounded by U256: negative values and anything past 2^256
    /// are an `Amount` error.
    pub fn mined_tokens(&self) -> Result<U256, UpstreamError> {
        let raw = self
            .claim_data
            .as_ref()
            .and_then(|d| d.mined_tokens.as_ref())
            .map(ToString::to_string)
            .unwrap_or_default();
        let raw = raw.trim();
        if raw.is_empty() {
            return Ok(U256::ZERO);
        }
        raw.parse::<U256>().map_err(|e| UpstreamError::Amount {
            value: raw.to_string(),
            reason: e.to_string(),
        })
    }
}

/* ---------- formatting ---------- */

/// Wei string to tokens with 6 decimals. Goes through `f64`, so very large
/// values lose precision. Empty input is 0, non-numeric input is `NaN`.
pub fn format_tokens(wei: &str) -> String {
    let wei = wei.trim();
    let value = if wei.is_empty() {
        0.0
    } else {
        wei.parse::<f64>().unwrap_or(f64::NAN)
    };
    format!("{:.6}", value / WEI_PER_TOKEN)
}

fn format_amount(amount: Option<&TokenAmount>) -> String {
    match amount {
        Some(a) => format_tokens(&a.to_string()),
        None => format_tokens("0"),
    }
}

fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::String(s) => !s.is_empty(),
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::Array(_) | Value::Object(_) => true,
    }
}
