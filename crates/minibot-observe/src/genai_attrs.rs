//! OpenTelemetry GenAI Semantic Convention attribute names.
//!
//! Used as field names on the completion span so provider calls are
//! recorded consistently. The exported span name follows the convention
//! `"{operation} {model}"`, set through the `otel.name` field (see
//! [`span_name`]).

/// The name of the operation being performed.
pub const GEN_AI_OPERATION_NAME: &str = "gen_ai.operation.name";

/// The name of the GenAI provider (e.g., "groq").
pub const GEN_AI_PROVIDER_NAME: &str = "gen_ai.provider.name";

/// The model ID requested.
pub const GEN_AI_REQUEST_MODEL: &str = "gen_ai.request.model";

/// The number of input tokens consumed.
pub const GEN_AI_USAGE_INPUT_TOKENS: &str = "gen_ai.usage.input_tokens";

/// The number of output tokens generated.
pub const GEN_AI_USAGE_OUTPUT_TOKENS: &str = "gen_ai.usage.output_tokens";

/// The finish reason reported for the first choice.
pub const GEN_AI_RESPONSE_FINISH_REASONS: &str = "gen_ai.response.finish_reasons";

/// The unique response ID from the provider.
pub const GEN_AI_RESPONSE_ID: &str = "gen_ai.response.id";

/// Standard chat completion operation.
pub const OP_CHAT: &str = "chat";

/// Field that `tracing-opentelemetry` uses as the exported span name.
pub const OTEL_NAME: &str = "otel.name";

/// Span name for a GenAI operation on `model`, e.g. `"chat llama-3.3-70b-versatile"`.
pub fn span_name(operation: &str, model: &str) -> String {
    format!("{operation} {model}")
}
