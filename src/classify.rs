// Classifier - splits the host navigation into core and third-party partitions
// Membership in the fixed identifier sets is the sole classification oracle.

use crate::models::{Partition, SubmenuGroup, SubmenuTable, TopLevelMenu};
use tracing::debug;

/// Top-level identifiers owned by the host platform itself, including the
/// separator markers and two legacy slugs some plugins piggyback on.
pub const CORE_MENU: [&str; 15] = [
    "index.php",
    "edit.php",
    "upload.php",
    "edit.php?post_type=page",
    "edit-comments.php",
    "themes.php",
    "plugins.php",
    "users.php",
    "tools.php",
    "options-general.php",
    "separator1",
    "separator2",
    "separator-last",
    "edit-tags.php?taxonomy=link_category",
    "options.php",
];

/// Children of the settings parent that belong to the host platform.
pub const CORE_SETTINGS_SUBMENU: [&str; 7] = [
    "options-general.php",
    "options-writing.php",
    "options-reading.php",
    "options-discussion.php",
    "options-media.php",
    "options-permalink.php",
    "options-privacy.php",
];

/// Parent identifier of the built-in settings page. Third-party settings
/// pages often register themselves as its children instead of claiming a
/// top-level entry.
pub const SETTINGS_PARENT: &str = "options-general.php";

pub fn is_core_identifier(identifier: &str) -> bool {
    CORE_MENU.contains(&identifier)
}

pub fn is_core_settings_identifier(identifier: &str) -> bool {
    CORE_SETTINGS_SUBMENU.contains(&identifier)
}

/// Partitions the host menus. Non-destructive: the core side of the output is
/// the unmodified input, and third-party entries are copied out under their
/// original positions/parents. Extracted settings children are keyed by their
/// own identifier, not the settings parent.
pub fn classify(menu: &TopLevelMenu, submenu: &SubmenuTable) -> Partition {
    let mut third_party_menu = TopLevelMenu::new();
    for (&position, entry) in menu {
        if !is_core_identifier(&entry.identifier) {
            third_party_menu.insert(position, entry.clone());
        }
    }

    let mut third_party_submenu = SubmenuTable::new();
    for (parent, group) in submenu {
        if !is_core_identifier(parent) {
            third_party_submenu.insert(parent.clone(), group.clone());
        }

        if parent != SETTINGS_PARENT {
            continue;
        }

        for entry in group.values() {
            if !is_core_settings_identifier(&entry.identifier) {
                let mut single = SubmenuGroup::new();
                single.insert(0, entry.clone());
                third_party_submenu.insert(entry.identifier.clone(), single);
            }
        }
    }

    debug!(
        third_party_menus = third_party_menu.len(),
        third_party_submenus = third_party_submenu.len(),
        "classified host navigation"
    );

    Partition {
        menu: menu.clone(),
        submenu: submenu.clone(),
        third_party_menu,
        third_party_submenu,
    }
}
