use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateDeposit {
    pub amount: f64,
    pub currency: String,
}

/// A float deposit as reported by the deposit lookup endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Deposit {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u54_deposit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// Payment instructions returned when a deposit is initiated.
///
/// Exactly one of the funding blocks is normally populated, matching the
/// deposit currency: bank details for fiat, a wallet address for crypto.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositInstructions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deposit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub u54_deposit_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usd: Option<BankAccount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub btc: Option<WalletAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub eth: Option<WalletAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub busd: Option<WalletAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usdc: Option<WalletAddress>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usdt: Option<WalletAddress>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BankAccount {
    pub account_number: String,
    pub account_name: String,
    pub bank_name: String,
    pub bank_address: String,
    pub branch_code: String,
    pub swift_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletAddress {
    pub address: String,
}
