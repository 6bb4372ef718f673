// Menu assembler - the curated replacement top-level menu

use crate::host::Host;
use crate::lookup::find_entry;
use crate::models::{MenuEntry, MenuError, Partition, TopLevelMenu};
use tracing::warn;

/// Canonical positions of the host's well-known layout. Every one of them is
/// a hard contract: a missing position fails the whole rebuild rather than
/// producing a partial menu.
pub const REQUIRED_POSITIONS: [(u32, &str); 12] = [
    (2, "dashboard"),
    (4, "separator"),
    (5, "posts"),
    (10, "media"),
    (20, "pages"),
    (59, "separator"),
    (60, "appearance"),
    (65, "plugins"),
    (70, "users"),
    (75, "tools"),
    (80, "settings"),
    (99, "separator"),
];

fn required<'a>(
    menu: &'a TopLevelMenu,
    position: u32,
    what: &'static str,
) -> Result<&'a MenuEntry, MenuError> {
    menu.get(&position)
        .ok_or(MenuError::MissingMenuPosition { position, what })
}

/// Builds the 8-slot replacement menu from the core partition. Slot 6 is left
/// free for the plugin-settings listing entry registered later.
pub fn build_top_level(partition: &Partition, host: &dyn Host) -> Result<TopLevelMenu, MenuError> {
    let m = &partition.menu;
    for (position, what) in REQUIRED_POSITIONS {
        required(m, position, what)?;
    }

    let mut content = required(m, 5, "posts")?.clone();
    content.label = format!("Content{}", moderation_indicator(host));
    content.icon = "dashicons-edit".into();

    let mut design = required(m, 60, "appearance")?.clone();
    design.label = "Design".into();
    design.icon = "dashicons-welcome-widgets-menus".into();
    match partition
        .submenu
        .get("themes.php")
        .and_then(|group| find_entry(group, "customize.php"))
    {
        Some(customizer) => design.identifier = customizer.identifier.clone(),
        // A standard install always has the customizer; keep the original
        // link rather than dropping the slot.
        None => warn!("no customizer entry under themes.php, Design keeps its original link"),
    }

    let mut tools = required(m, 75, "tools")?.clone();
    match partition
        .submenu
        .get("tools.php")
        .and_then(|group| find_entry(group, "site-health.php"))
    {
        Some(site_health) => tools.identifier = site_health.identifier.clone(),
        None => warn!("no site-health entry under tools.php, Tools keeps its original link"),
    }

    let mut setup = required(m, 80, "settings")?.clone();
    setup.label = format!("Setup{}", update_indicator(host));

    let mut new_menu = TopLevelMenu::new();
    new_menu.insert(0, required(m, 2, "dashboard")?.clone());
    new_menu.insert(1, required(m, 4, "separator")?.clone());
    new_menu.insert(2, content);
    new_menu.insert(3, required(m, 59, "separator")?.clone());
    new_menu.insert(4, design);
    new_menu.insert(5, tools);
    new_menu.insert(7, setup);
    new_menu.insert(8, required(m, 99, "separator")?.clone());

    Ok(new_menu)
}

/// Label suffix for comments awaiting moderation. Empty unless the viewer can
/// edit posts and the queue is non-empty.
pub fn moderation_indicator(host: &dyn Host) -> String {
    if !host.can_do("edit_posts") {
        return String::new();
    }

    match host.pending_moderation_count() {
        0 => String::new(),
        1 => " (1 Comment in moderation)".into(),
        count => format!(" ({count} Comments in moderation)"),
    }
}

/// Label suffix for pending updates. Never shown on multisite, to viewers
/// without update rights, or for a total of exactly 1.
pub fn update_indicator(host: &dyn Host) -> String {
    if host.is_multisite() || !host.can_do("update_plugins") {
        return String::new();
    }

    let total = host.pending_update_count();
    if total > 1 {
        format!(" ({total} updates pending)")
    } else {
        String::new()
    }
}
