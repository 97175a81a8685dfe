//! Request/response wire types for the tubelens API.

pub mod analyze;
