// Submenu assembler - per-parent groups keyed by the new top-level identifiers

use crate::classify::SETTINGS_PARENT;
use crate::host::Host;
use crate::lookup::find_entry;
use crate::menu::moderation_indicator;
use crate::models::{
    MenuError, SubmenuEntry, SubmenuGroup, SubmenuTable, TopLevelMenu,
};
use tracing::debug;

fn group<'a>(submenu: &'a SubmenuTable, parent: &str) -> Result<&'a SubmenuGroup, MenuError> {
    submenu
        .get(parent)
        .ok_or_else(|| MenuError::MissingSubmenuParent(parent.to_string()))
}

fn required<'a>(
    submenu: &'a SubmenuTable,
    parent: &str,
    position: u32,
    what: &'static str,
) -> Result<&'a SubmenuEntry, MenuError> {
    group(submenu, parent)?
        .get(&position)
        .ok_or_else(|| MenuError::MissingSubmenuPosition {
            parent: parent.to_string(),
            position,
            what,
        })
}

fn slot<'a>(
    new_menu: &'a TopLevelMenu,
    position: u32,
    what: &'static str,
) -> Result<&'a str, MenuError> {
    new_menu
        .get(&position)
        .map(|entry| entry.identifier.as_str())
        .ok_or(MenuError::MissingMenuPosition { position, what })
}

fn renumber(entries: Vec<SubmenuEntry>) -> SubmenuGroup {
    entries
        .into_iter()
        .enumerate()
        .map(|(index, entry)| (index as u32, entry))
        .collect()
}

/// Builds the Content, Design, Tools and Setup groups, keyed by the
/// identifiers the new top-level menu ended up with, then merges every
/// third-party group back in verbatim under its original parent.
pub fn build_submenus(
    partition: &crate::models::Partition,
    new_menu: &TopLevelMenu,
    host: &dyn Host,
) -> Result<SubmenuTable, MenuError> {
    let s = &partition.submenu;

    // Core submenu entries the new groups are built from. All of these are
    // part of the layout contract and fail hard when absent.
    let comments = required(s, "edit-comments.php", 0, "comments")?;
    let pages = required(s, "edit.php?post_type=page", 5, "pages")?;
    let media = required(s, "upload.php", 5, "media")?;
    let customizer = required(s, "themes.php", 6, "customizer")?;
    let plugin_editor = required(s, "plugins.php", 15, "plugin editor")?;
    let plugins = required(s, "plugins.php", 5, "plugins")?;
    let users = required(s, "users.php", 5, "users")?;
    let export = required(s, "tools.php", 15, "export")?;
    let site_health = required(s, "tools.php", 20, "site health")?;
    let export_data = required(s, "tools.php", 25, "export personal data")?;
    let erase_data = required(s, "tools.php", 30, "erase personal data")?;

    // Content: the entire original Posts group, so custom taxonomies a theme
    // or plugin injected there survive. Only "Add New" goes.
    let mut content: Vec<SubmenuEntry> = group(s, "edit.php")?
        .values()
        .filter(|entry| entry.identifier != "post-new.php")
        .cloned()
        .collect();
    if let Some(first) = content.first_mut() {
        *first = first.relabel("Posts");
    }
    if host.comments_open_by_default() {
        content.push(comments.relabel(format!("Comments{}", moderation_indicator(host))));
    }
    content.push(pages.relabel("Pages"));
    content.push(media.relabel("Media"));

    let mut design = vec![customizer.relabel("Customizer")];
    match find_entry(group(s, "themes.php")?, "theme-editor.php") {
        Some(theme_editor) => design.push(theme_editor.clone()),
        None => debug!("host has no theme editor entry, Design group omits it"),
    }
    design.push(plugin_editor.clone());

    let tools = vec![
        site_health.clone(),
        export.relabel("Export Content"),
        export_data.clone(),
        erase_data.clone(),
    ];

    let mut setup = vec![
        required(s, SETTINGS_PARENT, 10, "general")?.clone(),
        required(s, SETTINGS_PARENT, 15, "writing")?.clone(),
        required(s, SETTINGS_PARENT, 20, "reading")?.clone(),
        required(s, SETTINGS_PARENT, 25, "discussion")?.clone(),
        required(s, SETTINGS_PARENT, 30, "media settings")?.clone(),
        required(s, SETTINGS_PARENT, 40, "permalinks")?.clone(),
        required(s, SETTINGS_PARENT, 45, "privacy")?.clone(),
        plugins.relabel("Plugins"),
        users.relabel("Users"),
    ];
    match s.get("index.php").and_then(|dashboard| dashboard.get(&10)) {
        Some(updates) => setup.push(updates.clone()),
        None => debug!("host has no updates entry, Setup group omits it"),
    }

    let mut table = SubmenuTable::new();
    table.insert(slot(new_menu, 2, "content slot")?.to_string(), renumber(content));
    table.insert(slot(new_menu, 4, "design slot")?.to_string(), renumber(design));
    table.insert(slot(new_menu, 5, "tools slot")?.to_string(), renumber(tools));
    table.insert(slot(new_menu, 7, "setup slot")?.to_string(), renumber(setup));

    // Hidden third-party top-level menus still expose their submenu structure
    // internally; merged verbatim under the original parent keys.
    for (parent, entries) in &partition.third_party_submenu {
        table.insert(parent.clone(), entries.clone());
    }

    Ok(table)
}
