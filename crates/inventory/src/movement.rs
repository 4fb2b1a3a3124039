use core::str::FromStr;

use serde::{Deserialize, Serialize};

use stockroom_core::{DomainError, ValueObject};

/// Direction of a stock movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MovementType {
    Inbound,
    Outbound,
}

impl MovementType {
    pub fn label(self) -> &'static str {
        match self {
            MovementType::Inbound => "Inbound",
            MovementType::Outbound => "Outbound",
        }
    }
}

impl core::fmt::Display for MovementType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.pad(self.label())
    }
}

/// Accepts English and Portuguese display labels, case-insensitively.
impl FromStr for MovementType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "in" | "inbound" | "entrada" => Ok(MovementType::Inbound),
            "out" | "outbound" | "saida" | "saída" => Ok(MovementType::Outbound),
            other => Err(DomainError::validation(format!(
                "unknown movement type '{other}' (expected inbound or outbound)"
            ))),
        }
    }
}

/// One entry of the movement log (append-only, never mutated).
///
/// `quantity` is the product's resulting absolute quantity, not a delta.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MovementRecord {
    pub product: String,
    pub movement_type: MovementType,
    pub quantity: u64,
    pub responsible: String,
}

impl ValueObject for MovementRecord {}
