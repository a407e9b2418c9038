//! `bootnode routes` command implementation.

use bn_server::site_routes;
use clap::Args;

use super::{ConfigArgs, Site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the routes command.
#[derive(Args)]
pub(crate) struct RoutesArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl RoutesArgs {
    /// Print every route the server would answer.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or menu is invalid.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();
        let site = Site::load(self.config.path(), None)?;

        let pages = site.pages();

        output.highlight("Routes");
        for route in site_routes(&site.menu, &pages) {
            output.row(
                &format!("{} {}", route.method, route.kind),
                &route.path,
            );
        }
        Ok(())
    }
}
