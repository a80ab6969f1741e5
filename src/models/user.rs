use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// KYC details for a new card user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateUser {
    pub first_name: String,
    pub last_name: String,
    pub kyc_country: String,
    pub uid: String, // integrator-side identifier
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedUser {
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserAddress {
    pub user_id: String,
    pub kyc_country: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressUpdate {
    pub message: String,
}

/// A card user with KYC progress flags.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardUser {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub kyc_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub physical_card_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub virtual_card_count: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie_uploaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_uploaded: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ofac_checked: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ofac_fail: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub active: Option<bool>,
}

/// Pre-signed URLs for uploading KYC documents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentUploadUrls {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selfie_upload_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id_upload_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub uid: Option<String>,
}
