//! Route handlers implementing the gateway wire protocol.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};

use homelink_core::appliance::{Appliance, ErrorEnvelope, Operation, PostOperationBody};

use crate::state::GatewayState;

type ErrorResponse = (StatusCode, Json<ErrorEnvelope>);

/// List all appliances (GET /api/v1/list).
pub(crate) async fn list_appliances(State(state): State<GatewayState>) -> Json<Vec<Appliance>> {
    state.apply_delay().await;
    Json(state.appliances.as_ref().clone())
}

/// List the operations of one appliance (GET /api/v1/{appliance_id}).
pub(crate) async fn list_operations(
    State(state): State<GatewayState>,
    Path(appliance_id): Path<String>,
) -> Result<Json<Vec<Operation>>, ErrorResponse> {
    state.apply_delay().await;
    match state.operations.get(&appliance_id) {
        Some(operations) => Ok(Json(operations.clone())),
        None => Err(not_found(format!("unknown appliance '{appliance_id}'"))),
    }
}

/// Execute an operation (POST /api/v1/{appliance_id}/{operation_id}).
///
/// The passphrase in the body must match the gateway's; the success body is
/// plain text, `OK` unless reconfigured through the state.
pub(crate) async fn post_operation(
    State(state): State<GatewayState>,
    Path((appliance_id, operation_id)): Path<(String, String)>,
    Json(body): Json<PostOperationBody>,
) -> Result<String, ErrorResponse> {
    state.apply_delay().await;

    let Some(operations) = state.operations.get(&appliance_id) else {
        return Err(not_found(format!("unknown appliance '{appliance_id}'")));
    };
    if !operations.iter().any(|operation| operation.id == operation_id) {
        return Err(not_found(format!(
            "unknown operation '{operation_id}' for appliance '{appliance_id}'"
        )));
    }
    if body.passphrase != state.passphrase {
        tracing::warn!(appliance = %appliance_id, operation = %operation_id, "passphrase mismatch");
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(ErrorEnvelope::new("invalid passphrase")),
        ));
    }

    tracing::info!(appliance = %appliance_id, operation = %operation_id, "accepted operation");
    Ok(state.post_confirmation.clone())
}

fn not_found(message: String) -> ErrorResponse {
    (StatusCode::NOT_FOUND, Json(ErrorEnvelope::new(message)))
}
