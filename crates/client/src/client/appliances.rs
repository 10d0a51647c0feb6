//! Appliance list endpoint.

use homelink_core::appliance::Appliance;

use super::ApiClient;
use crate::error::{ApiError, Result};

impl ApiClient {
    /// Fetch the list of appliances known to the gateway.
    ///
    /// Order is whatever the gateway sent; no sorting happens client side.
    pub async fn fetch_appliance_list(&self) -> Result<Vec<Appliance>> {
        let request = self.appliance_list_request()?;
        self.fetch_json(request).await
    }

    /// Build the appliance list request without sending it.
    pub fn appliance_list_request(&self) -> Result<reqwest::Request> {
        let url = self.endpoint_url("/api/v1/list")?;
        self.http.get(url).build().map_err(ApiError::from_transport)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use homelink_core::config::StaticConfig;

    use super::*;

    #[test]
    fn test_appliance_list_request_wire_shape() {
        let client = ApiClient::new(Arc::new(StaticConfig::new("http://gateway.local", "secret")));
        let request = client.appliance_list_request().unwrap();
        assert_eq!(request.method(), reqwest::Method::GET);
        assert_eq!(request.url().as_str(), "http://gateway.local/api/v1/list");
        assert!(request.body().is_none());
    }

    #[test]
    fn test_appliance_list_request_requires_configuration() {
        let client = ApiClient::new(Arc::new(StaticConfig::unconfigured()));
        let err = client.appliance_list_request().unwrap_err();
        assert!(matches!(err, ApiError::NotConfigured));
    }
}
