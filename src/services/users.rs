use crate::client::Client;
use crate::error::Result;
use crate::models::{
    AddressUpdate, ApiResponse, CardUser, CreateUser, CreatedUser, DocumentUploadUrls,
    UpdateUserAddress,
};
use crate::query;

impl Client {
    /// Creates a KYC card user.
    #[tracing::instrument(skip_all, fields(kyc_country = %data.kyc_country))]
    pub async fn create_user(&self, data: &CreateUser) -> Result<ApiResponse<CreatedUser>> {
        self.post("/card/v1/user", data).await
    }

    pub async fn get_user(&self, user_id: &str) -> Result<ApiResponse<CardUser>> {
        let params = query::pairs([("user", user_id)]);
        self.get(&query::with_query("/card/v1/user", &params)).await
    }

    /// Updates the address, city, postal code and KYC country of a user.
    pub async fn update_user_address(
        &self,
        data: &UpdateUserAddress,
    ) -> Result<ApiResponse<AddressUpdate>> {
        self.patch("/card/v1/user/address", data).await
    }

    /// Returns pre-signed upload URLs for the user's selfie and ID document.
    pub async fn get_user_document_urls(
        &self,
        user_id: &str,
    ) -> Result<ApiResponse<DocumentUploadUrls>> {
        let params = query::pairs([("user", user_id)]);
        self.get(&query::with_query("/card/v1/user/documentation/urls", &params))
            .await
    }
}
