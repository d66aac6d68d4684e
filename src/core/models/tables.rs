//! Context limits and prices, one entry per [`ModelId`].

use super::id::ModelId;
use super::pricing::ModelCost;

/// Model used by the built-in chat config.
pub const DEFAULT_MODEL: ModelId = ModelId::Gpt5;

/// Maximum context size in tokens.
pub const MODEL_MAX_TOKENS: &[(ModelId, u64)] = &[
    (ModelId::Llama70b, 128_000),
    (ModelId::Llama405b, 128_000),
    (ModelId::LlamaMaverick, 1_000_000),
    (ModelId::Llama8b, 128_000),
    (ModelId::LlamaScout, 10_000_000),
    (ModelId::Gpt41, 1_000_000),
    (ModelId::Gpt5Mini, 400_000),
    (ModelId::Gpt5Nano, 400_000),
    (ModelId::Gpt5, 400_000),
    (ModelId::Gpt41Nano, 1_000_000),
    (ModelId::Gpt41Mini, 1_000_000),
    (ModelId::Claude4Opus, 1_000_000),
    (ModelId::Claude35Sonnet, 200_000),
    (ModelId::Claude4Sonnet, 1_000_000),
    (ModelId::Claude37Sonnet, 200_000),
    (ModelId::Claude41Opus, 1_000_000),
    (ModelId::Claude35Haiku, 200_000),
    (ModelId::Claude45Sonnet, 1_000_000),
    (ModelId::Gemini25Flash, 1_000_000),
    (ModelId::Gemini25Pro, 2_000_000),
    (ModelId::Gemini15Flash, 1_000_000),
];

/// Prompt/completion prices per 1000 tokens.
pub const MODEL_COST: &[(ModelId, ModelCost)] = &[
    (ModelId::Llama70b, ModelCost::per_thousand(0.0002, 0.0006)),
    (ModelId::Llama405b, ModelCost::per_thousand(0.00533, 0.016)),
    (ModelId::LlamaMaverick, ModelCost::per_thousand(0.0002, 0.0006)),
    (ModelId::Llama8b, ModelCost::per_thousand(0.00005, 0.00015)),
    (ModelId::LlamaScout, ModelCost::per_thousand(0.00011, 0.00034)),
    (ModelId::Gpt41, ModelCost::per_thousand(0.005, 0.015)),
    (ModelId::Gpt5Mini, ModelCost::per_thousand(0.00025, 0.00075)),
    (ModelId::Gpt5Nano, ModelCost::per_thousand(0.00005, 0.00015)),
    (ModelId::Gpt5, ModelCost::per_thousand(0.00125, 0.00375)),
    (ModelId::Gpt41Nano, ModelCost::per_thousand(0.0001, 0.0004)),
    (ModelId::Gpt41Mini, ModelCost::per_thousand(0.0004, 0.0016)),
    (ModelId::Claude4Opus, ModelCost::per_thousand(0.015, 0.075)),
    (ModelId::Claude35Sonnet, ModelCost::per_thousand(0.003, 0.015)),
    (ModelId::Claude4Sonnet, ModelCost::per_thousand(0.003, 0.015)),
    (ModelId::Claude37Sonnet, ModelCost::per_thousand(0.003, 0.015)),
    (ModelId::Claude41Opus, ModelCost::per_thousand(0.015, 0.075)),
    (ModelId::Claude35Haiku, ModelCost::per_thousand(0.0008, 0.004)),
    (ModelId::Claude45Sonnet, ModelCost::per_thousand(0.0008, 0.004)),
    (ModelId::Gemini25Flash, ModelCost::per_thousand(0.0003, 0.0012)),
    (ModelId::Gemini25Pro, ModelCost::per_thousand(0.0025, 0.015)),
    (ModelId::Gemini15Flash, ModelCost::per_thousand(0.0001, 0.0004)),
];

/// Context size for a model.
pub fn max_tokens(model: ModelId) -> Option<u64> {
    MODEL_MAX_TOKENS
        .iter()
        .find(|(m, _)| *m == model)
        .map(|(_, limit)| *limit)
}

/// Prices for a model.
pub fn cost(model: ModelId) -> Option<&'static ModelCost> {
    MODEL_COST
        .iter()
        .find(|(m, _)| *m == model)
        .map(|(_, cost)| cost)
}

/// Context size by tag. None for tags outside the catalog.
pub fn max_tokens_for(tag: &str) -> Option<u64> {
    tag.parse().ok().and_then(max_tokens)
}

/// Prices by tag. None for tags outside the catalog.
pub fn cost_for(tag: &str) -> Option<&'static ModelCost> {
    tag.parse().ok().and_then(cost)
}

/// Filter models by case-insensitive substring match on the tag.
/// Returns every model when the query is empty.
pub fn filter_models(query: &str) -> Vec<ModelId> {
    let q = query.trim().to_lowercase();
    ModelId::ALL
        .into_iter()
        .filter(|m| q.is_empty() || m.as_str().contains(&q))
        .collect()
}
