//! HTTP handler modules for the tubelens API.
//!
//! Handlers stay thin: parse the request, delegate to [`crate::prompt`] and
//! [`crate::openai`], and return JSON responses.

pub mod analyze;
