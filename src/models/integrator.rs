use serde::{Deserialize, Serialize};

/// Details an integrator submits when registering with the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterIntegrator {
    pub float_currencies: Vec<String>,
    pub first_name: String,
    pub last_name: String,
    pub country: String, // ISO 3166-1 alpha-3
    pub business_name: String,
    pub registration_number: String,
    pub business_address: String,
    pub domain: String,
    pub email: String,
    pub webhook_url: String,
    pub contact_number: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegratorRegistration {
    pub integrator_id: String,
}
