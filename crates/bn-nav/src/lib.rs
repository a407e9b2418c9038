//! Documentation navigation for the Bootnode site.
//!
//! This crate provides:
//! - [`MenuModel`]: the validated, immutable tree of sections and entries
//! - [`match_path`]: exact route matching against the menu
//! - [`ExpansionState`] and [`LayoutState`]: per-session sidebar state
//! - [`NavigationShell`]: event-driven composition of the above, projected
//!   into a [`ShellView`] and rendered to HTML
//!
//! # Quick Start
//!
//! ```
//! use std::sync::Arc;
//! use bn_nav::{MenuEntry, MenuModel, MenuSection, NavigationShell, ShellEvent};
//!
//! let model = Arc::new(MenuModel::new(vec![MenuSection::new(
//!     "getting-started",
//!     "Getting Started",
//!     vec![
//!         MenuEntry::new("Setup Guide", "/learn/setup"),
//!         MenuEntry::new("Installation", "/learn/installation"),
//!     ],
//! )])?);
//!
//! let mut shell = NavigationShell::mount(model, "/learn/setup", 1024.0, 768.0);
//! assert!(shell.expansion().is_expanded("getting-started"));
//!
//! shell.handle(ShellEvent::Navigate("/learn/installation".to_owned()));
//! assert_eq!(shell.active_path(), Some("/learn/installation"));
//! # Ok::<(), bn_nav::MenuError>(())
//! ```

mod expansion;
pub mod html;
mod layout;
mod matcher;
mod menu;
mod shell;
mod view;
mod viewport;

pub use expansion::ExpansionState;
pub use layout::{DEFAULT_BREAKPOINT, LayoutState, ViewportClass};
pub use matcher::{PathMatch, match_path};
pub use menu::{MenuEntry, MenuError, MenuModel, MenuSection};
pub use shell::{NavigationShell, ShellEvent};
pub use view::{EntryView, SectionView, ShellView};
pub use viewport::{ViewportSignal, ViewportSubscription};
