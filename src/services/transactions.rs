use crate::client::Client;
use crate::error::Result;
use crate::models::{ApiResponse, Transaction};
use crate::query::{self, ListParams};

impl Client {
    /// Returns the details of a single failed transaction.
    pub async fn get_failed_transaction(
        &self,
        transaction_id: &str,
    ) -> Result<ApiResponse<Transaction>> {
        let params = query::pairs([("transaction", transaction_id)]);
        self.get(&query::with_query("/card/v1/transaction/failed", &params))
            .await
    }

    /// Lists failed transactions; `params.id` filters by card.
    pub async fn list_failed_transactions(
        &self,
        params: &ListParams,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        self.get(&query::with_query(
            "/card/v1/transactions/failed",
            &params.to_query("card"),
        ))
        .await
    }

    /// Lists all transactions for `card_id`. Any `id` already set on
    /// `params` is replaced by `card_id`.
    pub async fn list_card_transactions(
        &self,
        card_id: &str,
        params: &ListParams,
    ) -> Result<ApiResponse<Vec<Transaction>>> {
        let params = params.clone().id(card_id);
        self.get(&query::with_query(
            "/card/v1/transactions",
            &params.to_query("card"),
        ))
        .await
    }
}
