//! HTTP client for the writing-style prediction service

pub mod client;
pub mod http_client;

pub use client::{ClientConfig, StyleClient};
pub use http_client::{HttpClient, HttpClientTrait};
