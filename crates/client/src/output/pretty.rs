//! Pretty output formatting.

use homelink_core::appliance::{Appliance, Operation};

/// Format an appliance for display.
pub fn format_appliance(appliance: &Appliance) -> String {
    format!("{}\n  ID: {}", appliance.name, appliance.id)
}

/// Format appliances for display.
pub fn format_appliances(appliances: &[Appliance]) -> String {
    if appliances.is_empty() {
        return "No appliances found.".to_string();
    }
    let mut output = format!("APPLIANCES ({})\n", appliances.len());
    output.push_str(&"-".repeat(40));
    for appliance in appliances {
        output.push_str(&format!("\n{}", format_appliance(appliance)));
        output.push('\n');
    }
    output
}

/// Format an operation for display.
pub fn format_operation(operation: &Operation) -> String {
    format!("{}\n  ID: {}", operation.name, operation.id)
}

/// Format operations for display.
pub fn format_operations(operations: &[Operation]) -> String {
    if operations.is_empty() {
        return "No operations found.".to_string();
    }
    let mut output = format!("OPERATIONS ({})\n", operations.len());
    output.push_str(&"-".repeat(40));
    for operation in operations {
        output.push_str(&format!("\n{}", format_operation(operation)));
        output.push('\n');
    }
    output
}

/// Format an operation confirmation for display.
pub fn format_confirmation(appliance_id: &str, operation_id: &str, confirmation: &str) -> String {
    format!("Sent '{operation_id}' to '{appliance_id}': {confirmation}")
}
