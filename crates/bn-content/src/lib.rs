//! Static content for the Bootnode site.
//!
//! Pages are markdown sources compiled into the binary and rendered once at
//! startup by [`PageRegistry::builtin`]. The learn guides use titled code
//! blocks (see [`render_markdown`]); menu entries without a written guide
//! resolve to a "Coming Soon" placeholder through
//! [`PageRegistry::learn_child`].

mod home;
mod markdown;
mod menu;
mod registry;

pub use home::REPOSITORY_URL;
pub use markdown::{Rendered, render_markdown};
pub use menu::default_menu;
pub use registry::{
    LearnChild, Page, PageKind, PageRegistry, SITE_NAME, coming_soon_html, document_title,
    not_found_html,
};
