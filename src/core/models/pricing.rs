//! Per-model pricing inputs. Callers compute cost as `tokens * price / unit`.

use serde::{Deserialize, Serialize};

/// Price charged per `unit` tokens.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct UnitPrice {
    pub price: f64,
    pub unit: u32,
}

impl UnitPrice {
    pub const fn per_thousand(price: f64) -> Self {
        Self { price, unit: 1000 }
    }
}

/// Prompt and completion prices for one model.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelCost {
    pub prompt: UnitPrice,
    pub completion: UnitPrice,
}

impl ModelCost {
    pub(super) const fn per_thousand(prompt: f64, completion: f64) -> Self {
        Self {
            prompt: UnitPrice::per_thousand(prompt),
            completion: UnitPrice::per_thousand(completion),
        }
    }
}
