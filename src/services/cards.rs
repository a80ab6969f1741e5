use serde::Serialize;

use crate::client::Client;
use crate::error::Result;
use crate::models::{Acknowledgement, ApiResponse, Card, CreateCard};
use crate::query::{self, ListParams};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BalanceChange<'a> {
    card_id: &'a str,
    amount: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CardRef<'a> {
    card_id: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StopCard<'a> {
    card_id: &'a str,
    reason_id: u32,
}

impl Client {
    /// Issues a virtual card for one of the integrator's users.
    #[tracing::instrument(skip_all, fields(user_id = %data.user_id, single_use = data.single_use))]
    pub async fn create_card(&self, data: &CreateCard) -> Result<ApiResponse<Card>> {
        self.post("/card/v1", data).await
    }

    /// Fetches the full details of one card.
    pub async fn get_card(&self, card: &str, tracking_number: &str) -> Result<ApiResponse<Card>> {
        let params = query::pairs([("card", card), ("trackingNumber", tracking_number)]);
        self.get(&query::with_query("/card/v1", &params)).await
    }

    /// Lists cards; `params.id` filters by user.
    pub async fn list_cards(&self, params: &ListParams) -> Result<ApiResponse<Vec<Card>>> {
        self.get(&query::with_query("/cards/v1", &params.to_query("user")))
            .await
    }

    pub async fn top_up(&self, card_id: &str, amount: f64) -> Result<ApiResponse<Card>> {
        self.patch("/card/v1/credit/balance", &BalanceChange { card_id, amount })
            .await
    }

    pub async fn debit(&self, card_id: &str, amount: f64) -> Result<ApiResponse<Card>> {
        self.patch("/card/v1/debit/balance", &BalanceChange { card_id, amount })
            .await
    }

    pub async fn freeze_card(&self, card_id: &str) -> Result<Acknowledgement> {
        self.patch("/card/v1/freeze", &CardRef { card_id }).await
    }

    pub async fn unfreeze_card(&self, card_id: &str) -> Result<Acknowledgement> {
        self.patch("/card/v1/unfreeze", &CardRef { card_id }).await
    }

    /// Permanently stops a card. `reason_id` is the platform's stop-reason code.
    pub async fn stop_card(&self, card_id: &str, reason_id: u32) -> Result<Acknowledgement> {
        self.patch("/card/v1/stop", &StopCard { card_id, reason_id })
            .await
    }
}
