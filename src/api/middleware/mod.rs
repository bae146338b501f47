// Middleware Module

pub mod cors;
pub mod logging;

pub use cors::{cors_layer, cors_layer_with_origins};
pub use logging::logging_layer;
