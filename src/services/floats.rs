use serde::Serialize;

use crate::client::Client;
use crate::error::Result;
use crate::models::{Acknowledgement, ApiResponse, FloatBalance};
use crate::query;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct DefaultFloat<'a> {
    float_id: &'a str,
}

impl Client {
    /// Retrieves the integrator's float balance for one currency.
    pub async fn get_integrator_float(&self, currency: &str) -> Result<ApiResponse<FloatBalance>> {
        let params = query::pairs([("currency", currency)]);
        self.get(&query::with_query("/integrator/v1/float", &params))
            .await
    }

    /// Retrieves float balances for each of `currencies`, in the order given.
    pub async fn get_integrator_floats<S: AsRef<str>>(
        &self,
        currencies: &[S],
    ) -> Result<ApiResponse<Vec<FloatBalance>>> {
        let params = query::repeated("currencies", currencies);
        self.get(&query::with_query("/integrator/v1/floats", &params))
            .await
    }

    pub async fn update_default_float(&self, float_id: &str) -> Result<Acknowledgement> {
        self.patch("/integrator/v1/float/default", &DefaultFloat { float_id })
            .await
    }
}
