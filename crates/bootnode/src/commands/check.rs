//! `bootnode check` command implementation.
//!
//! Loads and validates the configuration and learn menu without serving.

use bn_content::LearnChild;
use clap::Args;

use super::{ConfigArgs, Site};
use crate::error::CliError;
use crate::output::Output;

/// Arguments for the check command.
#[derive(Args)]
pub(crate) struct CheckArgs {
    #[command(flatten)]
    config: ConfigArgs,
}

impl CheckArgs {
    /// Execute the check command.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration or menu is invalid.
    pub(crate) fn execute(&self) -> Result<(), CliError> {
        let output = Output::new();

        let site = Site::load(self.config.path(), None)?;
        site.contact_desk()?;

        let pages = site.pages();
        let pending: Vec<&str> = site
            .menu
            .entries()
            .filter(|entry| {
                !matches!(
                    pages.learn_child(&entry.path, &site.menu),
                    LearnChild::Page(_)
                )
            })
            .map(|entry| entry.name.as_str())
            .collect();

        output.info(&format!("Configuration: {}", site.source()));
        output.info(&format!(
            "Learn menu: {} sections, {} entries",
            site.menu.sections().len(),
            site.menu.entries().count()
        ));
        if !pending.is_empty() {
            output.warning(&format!(
                "{} entries render as Coming Soon: {}",
                pending.len(),
                pending.join(", ")
            ));
        }
        if site.config.contact.is_none() {
            output.warning("No [contact] section: contact submissions will fail");
        }
        output.success("Configuration OK");
        Ok(())
    }
}
