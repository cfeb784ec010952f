//! HTTP client module
//!
//! Provides a read-only HTTP client with retry and backoff strategies.
//!
//! # Features
//!
//! - **Automatic Retries**: Configurable retry logic with backoff
//! - **Backoff Strategies**: Constant, linear, and exponential backoff
//! - **JSON Responses**: Typed deserialization of response bodies

mod client;

pub use client::{HttpClient, HttpClientConfig, QueryPairs};
