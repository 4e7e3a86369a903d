//! Post domain
//!
//! Splitting generated text into individual post candidates and the
//! length heuristics used to judge them.

mod entities;
mod parser;

pub use entities::ParsedPost;
pub use parser::{FALLBACK_STYLE, ParseOutcome, PostParser};
