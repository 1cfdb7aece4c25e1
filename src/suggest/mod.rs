//! Question suggestion gateway
//!
//! One-shot request/response boundary to the external text-generation
//! service. Failures never touch the set collection.

mod client;

pub use client::{SuggestionClient, SuggestionError};
