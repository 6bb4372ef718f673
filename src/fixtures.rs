// Test fixtures - synthetic host snapshots with the canonical layout

use crate::host::HostSnapshot;
use crate::models::{MenuEntry, SubmenuEntry, SubmenuTable, TopLevelMenu};
use serde_json::Value;

pub fn entry(label: &str, identifier: &str) -> MenuEntry {
    MenuEntry {
        label: label.to_string(),
        capability: "read".to_string(),
        identifier: identifier.to_string(),
        icon_or_class: String::new(),
        css_classes: "menu-top".to_string(),
        element_id: String::new(),
        icon: String::new(),
    }
}

fn separator(identifier: &str) -> MenuEntry {
    MenuEntry {
        label: String::new(),
        capability: "read".to_string(),
        identifier: identifier.to_string(),
        icon_or_class: String::new(),
        css_classes: "wp-menu-separator".to_string(),
        element_id: String::new(),
        icon: String::new(),
    }
}

pub fn sub(label: &str, identifier: &str) -> SubmenuEntry {
    SubmenuEntry {
        label: Value::String(label.to_string()),
        capability: "manage_options".to_string(),
        identifier: identifier.to_string(),
    }
}

/// Host state with exactly the 15 known core identifiers at their canonical
/// positions and no third-party entries.
pub fn canonical_snapshot() -> HostSnapshot {
    let menu: TopLevelMenu = [
        (2, entry("Dashboard", "index.php")),
        (4, separator("separator1")),
        (5, entry("Posts", "edit.php")),
        (10, entry("Media", "upload.php")),
        (15, entry("Links", "edit-tags.php?taxonomy=link_category")),
        (20, entry("Pages", "edit.php?post_type=page")),
        (25, entry("Comments", "edit-comments.php")),
        (59, separator("separator2")),
        (60, entry("Appearance", "themes.php")),
        (65, entry("Plugins", "plugins.php")),
        (70, entry("Users", "users.php")),
        (75, entry("Tools", "tools.php")),
        (80, entry("Settings", "options-general.php")),
        (81, entry("Options", "options.php")),
        (99, separator("separator-last")),
    ]
    .into();

    let submenu: SubmenuTable = [
        (
            "index.php".to_string(),
            [
                (0, sub("Home", "index.php")),
                (10, sub("Updates", "update-core.php")),
            ]
            .into(),
        ),
        (
            "edit.php".to_string(),
            [
                (5, sub("All Posts", "edit.php")),
                (10, sub("Add New", "post-new.php")),
                (15, sub("Categories", "edit-tags.php?taxonomy=category")),
                (16, sub("Tags", "edit-tags.php?taxonomy=post_tag")),
            ]
            .into(),
        ),
        (
            "edit-comments.php".to_string(),
            [(0, sub("All Comments", "edit-comments.php"))].into(),
        ),
        (
            "edit.php?post_type=page".to_string(),
            [
                (5, sub("All Pages", "edit.php?post_type=page")),
                (10, sub("Add New", "post-new.php?post_type=page")),
            ]
            .into(),
        ),
        (
            "upload.php".to_string(),
            [
                (5, sub("Library", "upload.php")),
                (10, sub("Add New", "media-new.php")),
            ]
            .into(),
        ),
        (
            "themes.php".to_string(),
            [
                (5, sub("Themes", "themes.php")),
                (6, sub("Customize", "customize.php?return=%2Fwp-admin%2F")),
                (10, sub("Theme File Editor", "theme-editor.php")),
            ]
            .into(),
        ),
        (
            "plugins.php".to_string(),
            [
                (5, sub("Installed Plugins", "plugins.php")),
                (10, sub("Add New", "plugin-install.php")),
                (15, sub("Plugin File Editor", "plugin-editor.php")),
            ]
            .into(),
        ),
        (
            "users.php".to_string(),
            [
                (5, sub("All Users", "users.php")),
                (10, sub("Add New", "user-new.php")),
            ]
            .into(),
        ),
        (
            "tools.php".to_string(),
            [
                (5, sub("Available Tools", "tools.php")),
                (15, sub("Export", "export.php")),
                (20, sub("Site Health", "site-health.php")),
                (25, sub("Export Personal Data", "export-personal-data.php")),
                (30, sub("Erase Personal Data", "erase-personal-data.php")),
            ]
            .into(),
        ),
        (
            "options-general.php".to_string(),
            [
                (10, sub("General", "options-general.php")),
                (15, sub("Writing", "options-writing.php")),
                (20, sub("Reading", "options-reading.php")),
                (25, sub("Discussion", "options-discussion.php")),
                (30, sub("Media", "options-media.php")),
                (40, sub("Permalinks", "options-permalink.php")),
                (45, sub("Privacy", "options-privacy.php")),
            ]
            .into(),
        ),
    ]
    .into();

    HostSnapshot {
        menu,
        submenu,
        capabilities: ["read", "edit_posts", "update_plugins", "delete_plugins"]
            .into_iter()
            .map(String::from)
            .collect(),
        comments_open: false,
        pending_moderation: 0,
        pending_updates: 0,
        multisite: false,
        current_page: "index.php".to_string(),
        site_url: "https://example.test".to_string(),
    }
}

/// Canonical state plus one third-party plugin: a top-level entry at
/// position 42 and a one-child submenu group under the same slug.
pub fn with_acme(mut snapshot: HostSnapshot) -> HostSnapshot {
    snapshot.menu.insert(42, entry("Acme Plugin", "acme-plugin"));
    snapshot.submenu.insert(
        "acme-plugin".to_string(),
        [(0, sub("Acme Settings", "acme-settings"))].into(),
    );
    snapshot
}
