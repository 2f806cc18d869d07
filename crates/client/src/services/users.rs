//! User profile and address service.

use clementine_core::types::{AddressId, ApprovalStatus};

use crate::api::{ApiClient, ApiError};
use crate::models::{Address, AddressRequest, ProfileUpdateRequest, UserProfile};

/// Typed wrappers for the user profile and address endpoints.
#[derive(Clone)]
pub struct UsersService {
    api: ApiClient,
}

impl UsersService {
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /user/profile`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn profile(&self) -> Result<UserProfile, ApiError> {
        self.api.get("/user/profile", &[]).await?.into_result()
    }

    /// `PUT /user/profile`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn update_profile(
        &self,
        request: &ProfileUpdateRequest,
    ) -> Result<UserProfile, ApiError> {
        self.api
            .put("/user/profile", Some(request), &[])
            .await?
            .into_result()
    }

    /// `GET /user/approval-status`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn approval_status(&self) -> Result<ApprovalStatus, ApiError> {
        self.api
            .get("/user/approval-status", &[])
            .await?
            .into_result()
    }

    /// `PUT /user/phone`
    ///
    /// The phone number travels in the query string; no body is sent.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn update_phone(&self, phone: &str) -> Result<String, ApiError> {
        self.api
            .put::<String, ()>("/user/phone", None, &[("phone", phone.to_string())])
            .await?
            .into_result()
    }

    /// `GET /user/addresses`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn addresses(&self) -> Result<Vec<Address>, ApiError> {
        self.api.get("/user/addresses", &[]).await?.into_result()
    }

    /// `PUT /user/addresses/shipping`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn update_shipping_address(
        &self,
        request: &AddressRequest,
    ) -> Result<Address, ApiError> {
        self.api
            .put("/user/addresses/shipping", Some(request), &[])
            .await?
            .into_result()
    }

    /// `PUT /user/addresses/billing`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn update_billing_address(
        &self,
        request: &AddressRequest,
    ) -> Result<Address, ApiError> {
        self.api
            .put("/user/addresses/billing", Some(request), &[])
            .await?
            .into_result()
    }

    /// `DELETE /user/addresses/{id}`
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or envelope rejection.
    pub async fn delete_address(&self, address_id: AddressId) -> Result<String, ApiError> {
        self.api
            .delete(&format!("/user/addresses/{address_id}"))
            .await?
            .into_result()
    }
}
