//! Model catalog: supported identifiers, context limits, and pricing.

mod id;
mod pricing;
mod tables;

pub use id::{ModelId, ModelIdError};
pub use pricing::{ModelCost, UnitPrice};
pub use tables::{DEFAULT_MODEL, cost, cost_for, filter_models, max_tokens, max_tokens_for};
