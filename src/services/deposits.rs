use crate::client::Client;
use crate::error::Result;
use crate::models::{ApiResponse, CreateDeposit, Deposit, DepositInstructions};
use crate::query;

impl Client {
    pub async fn get_integrator_deposit(&self, deposit_id: &str) -> Result<ApiResponse<Deposit>> {
        let params = query::pairs([("deposit", deposit_id)]);
        self.get(&query::with_query("/integrator/v1/deposit", &params))
            .await
    }

    /// Starts an integrator float deposit and returns the funding instructions.
    pub async fn create_integrator_deposit(
        &self,
        amount: f64,
        currency: &str,
    ) -> Result<ApiResponse<DepositInstructions>> {
        let body = CreateDeposit {
            amount,
            currency: currency.to_string(),
        };
        self.post("/integrator/v1/deposit", &body).await
    }

    /// Looks up a deposit into the card-service float.
    pub async fn get_card_service_deposit(
        &self,
        deposit_id: &str,
    ) -> Result<ApiResponse<Deposit>> {
        let params = query::pairs([("depositId", deposit_id)]);
        self.get(&query::with_query("/card/v1/service/deposit", &params))
            .await
    }

    pub async fn create_card_service_deposit(
        &self,
        amount: f64,
        currency: &str,
    ) -> Result<ApiResponse<DepositInstructions>> {
        let body = CreateDeposit {
            amount,
            currency: currency.to_string(),
        };
        self.post("/card/v1/service/deposit", &body).await
    }
}
