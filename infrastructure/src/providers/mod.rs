//! Model providers implementing the application gateways

pub mod gemini;

pub use gemini::GeminiClient;
