//! Infrastructure layer - HTTP transport, services and logging

pub mod logging;
pub mod services;
pub mod style;
