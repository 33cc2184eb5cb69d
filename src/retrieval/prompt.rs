// Prompt construction
//
// Two branches only: a data-aware prompt when context was retrieved, the
// raw question otherwise.

use super::ContextItem;

/// Fixed instruction constraining the model to the supplied context.
pub const SYSTEM_INSTRUCTION: &str = "You are an AI assistant knowledgeable about sales data. \
    Answer the user's question based ONLY on the following sales data context if possible. \
    If the question cannot be answered from the data provided, state that you cannot find \
    relevant information in the provided data. \
    Do not use outside knowledge to answer questions about the specific sales data.";

/// Build the prompt sent to the LLM gateway.
///
/// Non-empty context is serialized to pretty-printed JSON and wrapped with
/// [`SYSTEM_INSTRUCTION`]; empty context forwards the question unmodified.
pub fn build_prompt(question: &str, context: &[ContextItem]) -> String {
    if context.is_empty() {
        return question.to_string();
    }

    let context_block = match serde_json::to_string_pretty(context) {
        Ok(json) => json,
        Err(e) => {
            tracing::warn!("Failed to serialize context items: {}", e);
            "[]".to_string()
        }
    };

    format!(
        "{SYSTEM_INSTRUCTION}\n\nSales Data Context:\n{context_block}\n\nUser Question: {question}\n\nAnswer:"
    )
}
