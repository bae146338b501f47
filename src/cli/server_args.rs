// HTTP server arguments
// Licensed under GPL-3.0

use clap::Args;

/// HTTP server overrides
///
/// Values given here take precedence over the `[server]` section of the
/// configuration file.
#[derive(Args, Debug, Clone, Default)]
pub struct ServerArgs {
    /// Host address to bind
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Port to bind
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Do not serve the OpenAPI document
    #[arg(long = "no-openapi")]
    pub no_openapi: bool,
}
