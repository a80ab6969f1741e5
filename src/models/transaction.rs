use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A card transaction. Debits carry the `debit_*` fields, credits the
/// `credit_currency`; failed transactions add `error_description`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub transaction_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub debit_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversion_rate: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub credit_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_balance_before: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_balance_after: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub card_id: Option<String>,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub acquiring_institution_code: Option<String>,
}
