//! HTTP/JSON API server that analyzes YouTube videos with an LLM.
//!
//! Accepts a POST describing a video (title, description, statistics,
//! duration, transcript), renders an analysis prompt, forwards it to an
//! OpenAI-compatible chat completions endpoint, and relays the generated
//! text back to the caller. The service is stateless; each request is an
//! independent linear pipeline with a single outbound HTTP call.

pub mod config;
pub mod error;
pub mod handlers;
pub mod openai;
pub mod prompt;
pub mod router;
pub mod schema;
pub mod state;
