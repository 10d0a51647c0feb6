//! Shared gateway state.

use std::{collections::HashMap, sync::Arc, time::Duration};

use homelink_core::appliance::{sample_appliances, sample_operations, Appliance, Operation};

/// Shared state behind every route.
///
/// Cloned per request handler. The catalog is fixed at construction; the
/// knobs exist so tests can drive the client into its failure paths
/// (mismatched confirmation bodies, slow responses).
#[derive(Clone)]
pub struct GatewayState {
    pub(crate) appliances: Arc<Vec<Appliance>>,
    pub(crate) operations: Arc<HashMap<String, Vec<Operation>>>,
    pub(crate) passphrase: String,
    pub(crate) post_confirmation: String,
    pub(crate) response_delay: Option<Duration>,
}

impl GatewayState {
    /// State seeded with the sample catalog, accepting the given passphrase.
    pub fn new(passphrase: impl Into<String>) -> Self {
        let appliances = sample_appliances();
        let operations = appliances
            .iter()
            .map(|appliance| (appliance.id.clone(), sample_operations(&appliance.id)))
            .collect();
        Self {
            appliances: Arc::new(appliances),
            operations: Arc::new(operations),
            passphrase: passphrase.into(),
            post_confirmation: "OK".to_string(),
            response_delay: None,
        }
    }

    /// Replaces the seeded catalog. Operations are keyed by appliance id;
    /// appliances without an entry have no operations.
    pub fn with_catalog(
        mut self,
        appliances: Vec<Appliance>,
        operations: HashMap<String, Vec<Operation>>,
    ) -> Self {
        self.appliances = Arc::new(appliances);
        self.operations = Arc::new(operations);
        self
    }

    /// Body returned for an accepted POST instead of the default `OK`,
    /// simulating a gateway with a different confirmation convention.
    pub fn with_post_confirmation(mut self, body: impl Into<String>) -> Self {
        self.post_confirmation = body.into();
        self
    }

    /// Artificial delay applied before answering any route, so tests can
    /// provoke client-side timeouts.
    pub fn with_response_delay(mut self, delay: Duration) -> Self {
        self.response_delay = Some(delay);
        self
    }

    pub(crate) async fn apply_delay(&self) {
        if let Some(delay) = self.response_delay {
            tokio::time::sleep(delay).await;
        }
    }
}
