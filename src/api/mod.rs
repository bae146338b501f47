// API Module - HTTP interface for the cipher suite directory

pub mod config;
pub mod middleware;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod server;
pub mod state;

// Re-export commonly used types
pub use config::ApiConfig;
pub use server::ApiServer;
pub use state::AppState;
