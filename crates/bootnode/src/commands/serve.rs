//! `bootnode serve` command implementation.

use bn_config::{CliSettings, expand_setting};
use bn_server::{ServerConfig, run_server};
use clap::Args;

use super::{ConfigArgs, Site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the serve command.
#[derive(Args)]
pub(crate) struct ServeArgs {
    #[command(flatten)]
    config: ConfigArgs,

    /// Host to bind to (overrides config).
    #[arg(long)]
    host: Option<String>,

    /// Port to bind to (overrides config).
    #[arg(short, long)]
    port: Option<u16>,

    /// Enable verbose output (request and session logs).
    #[arg(short, long)]
    pub verbose: bool,
}

impl ServeArgs {
    /// Execute the serve command.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration fails or the server fails to start.
    pub(crate) async fn execute(self, version: &str) -> Result<(), CliError> {
        let output = Output::new();

        let mut host = self.host;
        expand_setting(&mut host, "--host")?;
        let cli_settings = CliSettings {
            host,
            port: self.port,
        };

        let site = Site::load(self.config.path(), Some(&cli_settings))?;
        let contact = site.contact_desk()?;
        let config = &site.config;

        output.info(&format!(
            "Starting server on http://{}:{}",
            config.server.host, config.server.port
        ));
        output.info(&format!("Configuration: {}", site.source()));
        output.info(&format!(
            "Learn menu: {} sections, {} entries",
            site.menu.sections().len(),
            site.menu.entries().count()
        ));
        output.info(&format!(
            "Mobile layout below {}px",
            config.layout.breakpoint
        ));
        if contact.is_configured() {
            output.info("Contact form: enabled");
        } else {
            output.warning("Contact form: disabled (no [contact] section in config)");
        }

        let server_config = ServerConfig::from_config(config, version.to_owned());
        run_server(server_config, site.menu, contact)
            .await
            .map_err(|e| CliError::Server(e.to_string()))?;

        Ok(())
    }
}
