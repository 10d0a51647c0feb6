//! Operation list and operation command endpoints.

use reqwest::header::{ACCEPT, CONTENT_TYPE};

use homelink_core::appliance::{Operation, PostOperationBody};

use super::ApiClient;
use crate::error::{ApiError, Result};

impl ApiClient {
    /// Fetch the operations one appliance supports.
    pub async fn fetch_operation_list(&self, appliance_id: &str) -> Result<Vec<Operation>> {
        let request = self.operation_list_request(appliance_id)?;
        self.fetch_json(request).await
    }

    /// Ask the gateway to run an operation on an appliance.
    ///
    /// The gateway confirms success with the literal body `OK`; a 200 with
    /// any other body is [`ApiError::BadResponse`]. The confirmation text is
    /// returned so callers can surface it.
    pub async fn post_operation(&self, appliance_id: &str, operation_id: &str) -> Result<String> {
        let request = self.post_operation_request(appliance_id, operation_id)?;
        let (status, body) = self.dispatch(request).await?;
        Self::check_status(status, &body)?;
        if body == "OK" {
            Ok(body)
        } else {
            tracing::warn!(body = %body, "unexpected confirmation from gateway");
            Err(ApiError::BadResponse)
        }
    }

    /// Build the operation list request without sending it.
    pub fn operation_list_request(&self, appliance_id: &str) -> Result<reqwest::Request> {
        let url = self.endpoint_url(&format!("/api/v1/{appliance_id}"))?;
        self.http.get(url).build().map_err(ApiError::from_transport)
    }

    /// Build the operation command request without sending it.
    ///
    /// The passphrase is read from the settings source and serialized here,
    /// before any network activity; a serialization failure short-circuits
    /// as [`ApiError::Decode`].
    pub fn post_operation_request(
        &self,
        appliance_id: &str,
        operation_id: &str,
    ) -> Result<reqwest::Request> {
        let url = self.endpoint_url(&format!("/api/v1/{appliance_id}/{operation_id}"))?;
        let body = PostOperationBody {
            passphrase: self.config.passphrase(),
        };
        let body = serde_json::to_vec(&body).map_err(ApiError::Decode)?;
        self.http
            .post(url)
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .body(body)
            .build()
            .map_err(ApiError::from_transport)
    }
}
