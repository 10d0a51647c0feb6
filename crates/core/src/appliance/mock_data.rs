//! Sample appliance data for seeding and tests.
//!
//! Pure functions with no side effects, usable from unit tests, the mock
//! gateway's default state, and manual demos.

use super::types::{Appliance, Operation};

/// Sample appliances in a fixed, deterministic order.
pub fn sample_appliances() -> Vec<Appliance> {
    vec![
        Appliance::new("aircon", "Air Conditioner"),
        Appliance::new("light", "Living Room Light"),
        Appliance::new("tv", "Television"),
    ]
}

/// Sample operations for one of the appliances returned by
/// [`sample_appliances`]. Unknown identifiers yield an empty list.
pub fn sample_operations(appliance_id: &str) -> Vec<Operation> {
    match appliance_id {
        "aircon" => vec![
            Operation::new("on", "Power On"),
            Operation::new("off", "Power Off"),
            Operation::new("cool", "Cool Mode"),
            Operation::new("warm", "Warm Mode"),
        ],
        "light" => vec![
            Operation::new("on", "Turn On"),
            Operation::new("off", "Turn Off"),
            Operation::new("dim", "Dim"),
        ],
        "tv" => vec![
            Operation::new("on", "Power On"),
            Operation::new("off", "Power Off"),
            Operation::new("mute", "Mute"),
        ],
        _ => Vec::new(),
    }
}
