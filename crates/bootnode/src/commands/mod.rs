//! CLI command implementations.

pub(crate) mod check;
pub(crate) mod routes;
pub(crate) mod serve;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bn_config::{CliSettings, Config};
use bn_contact::{ContactDesk, EmailJsSender, EmailSender};
use bn_content::PageRegistry;
use bn_nav::MenuModel;
use clap::Args;

pub(crate) use check::CheckArgs;
pub(crate) use routes::RoutesArgs;
pub(crate) use serve::ServeArgs;

use crate::error::CliError;

/// Notice lifetime when no `[contact]` section is configured.
const DEFAULT_NOTICE_TTL: Duration = Duration::from_secs(5);

/// Configuration file option shared by every command.
#[derive(Args, Debug, Default)]
pub(crate) struct ConfigArgs {
    /// Path to configuration file (default: auto-discover bootnode.toml).
    #[arg(short, long, env = "BOOTNODE_CONFIG")]
    pub(crate) config: Option<PathBuf>,
}

impl ConfigArgs {
    pub(crate) fn path(&self) -> Option<&Path> {
        self.config.as_deref()
    }
}

/// Loaded configuration plus the menu it resolves to.
pub(crate) struct Site {
    pub(crate) config: Config,
    pub(crate) menu: Arc<MenuModel>,
}

impl Site {
    /// Load configuration and resolve the learn menu.
    ///
    /// Without `[[learn.sections]]` the built-in menu is used.
    pub(crate) fn load(
        config_path: Option<&Path>,
        cli_settings: Option<&CliSettings>,
    ) -> Result<Self, CliError> {
        let mut config = Config::load(config_path, cli_settings)?;
        let menu = match config.menu.take() {
            Some(menu) => menu,
            None => bn_content::default_menu()?,
        };
        Ok(Self {
            config,
            menu: Arc::new(menu),
        })
    }

    /// Where the configuration was loaded from.
    pub(crate) fn source(&self) -> String {
        self.config.config_path.as_ref().map_or_else(
            || "defaults (no bootnode.toml found)".to_owned(),
            |path| path.display().to_string(),
        )
    }

    /// Render the built-in pages, pointing "Get Started" at the first entry.
    pub(crate) fn pages(&self) -> PageRegistry {
        let start = self
            .menu
            .entries()
            .next()
            .map_or("/learn", |entry| entry.path.as_str());
        PageRegistry::builtin(start)
    }

    /// Build the contact desk from `[contact]`, if configured.
    pub(crate) fn contact_desk(&self) -> Result<ContactDesk, CliError> {
        if self.config.contact.is_none() {
            return Ok(ContactDesk::new(None, DEFAULT_NOTICE_TTL));
        }
        let contact = self.config.require_contact()?;
        let sender: Arc<dyn EmailSender> = Arc::new(EmailJsSender::from_config(contact));
        Ok(ContactDesk::new(
            Some(sender),
            Duration::from_secs(contact.notice_ttl_secs),
        ))
    }
}
