// Host collaborators - everything the core reads from the CMS per request

use crate::models::{SubmenuTable, TopLevelMenu};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Read-only view of the host state for one admin-page render. The rebuild
/// pipeline never reaches into ambient globals; it only calls through here.
pub trait Host {
    fn menu(&self) -> &TopLevelMenu;
    fn submenu(&self) -> &SubmenuTable;
    fn can_do(&self, capability: &str) -> bool;
    fn comments_open_by_default(&self) -> bool;
    fn pending_moderation_count(&self) -> u64;
    fn pending_update_count(&self) -> u64;
    fn is_multisite(&self) -> bool;
    /// Slug of the admin page currently being rendered, e.g. `plugins.php`.
    fn current_page(&self) -> &str;
    /// Full URL for a registered page slug (the host's `menu_page_url`).
    fn resolve_url(&self, slug: &str) -> String;
    /// Full URL for a path relative to the admin root.
    fn admin_url(&self, relative: &str) -> String;
}

/// Serializable capture of host state, used by the CLI and the tests. A real
/// integration would implement [`Host`] against the live CMS instead.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HostSnapshot {
    pub menu: TopLevelMenu,
    pub submenu: SubmenuTable,
    pub capabilities: BTreeSet<String>,
    pub comments_open: bool,
    pub pending_moderation: u64,
    pub pending_updates: u64,
    pub multisite: bool,
    pub current_page: String,
    pub site_url: String,
}

impl HostSnapshot {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading host state from {}", path.display()))?;
        let snapshot: Self = serde_json::from_str(&raw)
            .with_context(|| format!("parsing host state in {}", path.display()))?;
        Ok(snapshot)
    }
}

impl Host for HostSnapshot {
    fn menu(&self) -> &TopLevelMenu {
        &self.menu
    }

    fn submenu(&self) -> &SubmenuTable {
        &self.submenu
    }

    fn can_do(&self, capability: &str) -> bool {
        self.capabilities.contains(capability)
    }

    fn comments_open_by_default(&self) -> bool {
        self.comments_open
    }

    fn pending_moderation_count(&self) -> u64 {
        self.pending_moderation
    }

    fn pending_update_count(&self) -> u64 {
        self.pending_updates
    }

    fn is_multisite(&self) -> bool {
        self.multisite
    }

    fn current_page(&self) -> &str {
        &self.current_page
    }

    fn resolve_url(&self, slug: &str) -> String {
        self.admin_url(&format!("admin.php?page={slug}"))
    }

    fn admin_url(&self, relative: &str) -> String {
        format!("{}/wp-admin/{relative}", self.site_url.trim_end_matches('/'))
    }
}
