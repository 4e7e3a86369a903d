//! Google Gemini provider
//!
//! Talks to the Generative Language REST API (`models/{model}:generateContent`)
//! for both plain completions and Google Search grounded queries.

mod client;
mod types;

pub use client::GeminiClient;
