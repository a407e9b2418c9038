//! Built-in learn menu.

use bn_nav::{MenuEntry, MenuError, MenuModel, MenuSection};

/// The documentation menu used when `bootnode.toml` does not define one.
///
/// # Errors
///
/// Never fails for the built-in table; the `Result` is kept so callers
/// treat it like a configured menu.
pub fn default_menu() -> Result<MenuModel, MenuError> {
    MenuModel::new(vec![
        MenuSection::new(
            "getting-started",
            "Getting Started",
            vec![
                MenuEntry::new("Setup Guide", "/learn/setup"),
                MenuEntry::new("Installation", "/learn/installation"),
                MenuEntry::new("Configuration", "/learn/configuration"),
            ],
        ),
        MenuSection::new(
            "core-features",
            "Core Features",
            vec![
                MenuEntry::new("Authentication", "/learn/authentication"),
                MenuEntry::new("API Routes", "/learn/api-routes"),
                MenuEntry::new("Database", "/learn/database"),
                MenuEntry::new("Validation", "/learn/validation"),
            ],
        ),
        MenuSection::new(
            "advanced",
            "Advanced",
            vec![
                MenuEntry::new("Middleware", "/learn/middleware"),
                MenuEntry::new("Error Handling", "/learn/error-handling"),
                MenuEntry::new("Testing", "/learn/testing"),
                MenuEntry::new("Deployment", "/learn/deployment"),
            ],
        ),
        MenuSection::new(
            "recipes",
            "Recipes",
            vec![
                MenuEntry::new("User Management", "/learn/recipes/user-management"),
                MenuEntry::new("File Uploads", "/learn/recipes/file-uploads"),
                MenuEntry::new("Email Sending", "/learn/recipes/email-sending"),
                MenuEntry::new("API Documentation", "/learn/recipes/api-docs"),
            ],
        ),
    ])
}
