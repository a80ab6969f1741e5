use serde::Serialize;

use crate::client::Client;
use crate::error::Result;
use crate::models::{Acknowledgement, ApiResponse, IntegratorRegistration, RegisterIntegrator};

#[derive(Debug, Serialize)]
struct WebhookUpdate<'a> {
    webhook: &'a str,
}

impl Client {
    /// Registers an integrator with the platform.
    #[tracing::instrument(skip_all, fields(country = %data.country))]
    pub async fn register_integrator(
        &self,
        data: &RegisterIntegrator,
    ) -> Result<ApiResponse<IntegratorRegistration>> {
        self.post("/integrator/v1/register", data).await
    }

    /// Points the integrator's webhook notifications at a new URL.
    pub async fn update_webhook(&self, webhook: &str) -> Result<Acknowledgement> {
        self.patch("/integrator/v1/webhook", &WebhookUpdate { webhook })
            .await
    }
}
