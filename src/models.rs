// Data model for the host navigation structures
// Named records replace the host's positional rows

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use thiserror::Error;

/// Ordered top-level menu: sparse position -> entry. Iteration order over
/// positions is on-screen order.
pub type TopLevelMenu = BTreeMap<u32, MenuEntry>;

/// One submenu group: sparse position -> entry.
pub type SubmenuGroup = BTreeMap<u32, SubmenuEntry>;

/// Submenu table keyed by parent identifier. A parent may be orphaned, i.e.
/// absent from the top-level menu.
pub type SubmenuTable = BTreeMap<String, SubmenuGroup>;

#[derive(Error, Debug)]
pub enum MenuError {
    #[error("host menu is missing required position {position} ({what})")]
    MissingMenuPosition { position: u32, what: &'static str },
    #[error("host submenu table has no {0:?} group")]
    MissingSubmenuParent(String),
    #[error("submenu {parent:?} is missing required position {position} ({what})")]
    MissingSubmenuPosition {
        parent: String,
        position: u32,
        what: &'static str,
    },
}

/// A top-level menu row. The host hands these over as 7-element positional
/// arrays; short arrays are padded with empty strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<String>", into = "Vec<String>")]
pub struct MenuEntry {
    pub label: String,
    pub capability: String,
    /// Page slug, possibly with query parameters. Identity of the entry.
    pub identifier: String,
    pub icon_or_class: String,
    pub css_classes: String,
    pub element_id: String,
    pub icon: String,
}

impl MenuEntry {
    pub fn is_separator(&self) -> bool {
        self.identifier.starts_with("separator")
    }

    /// Positional field values, in host order.
    pub fn fields(&self) -> [&str; 7] {
        [
            &self.label,
            &self.capability,
            &self.identifier,
            &self.icon_or_class,
            &self.css_classes,
            &self.element_id,
            &self.icon,
        ]
    }
}

impl From<Vec<String>> for MenuEntry {
    fn from(mut raw: Vec<String>) -> Self {
        raw.resize(7, String::new());
        let mut raw = raw.into_iter();
        let mut next = || raw.next().unwrap_or_default();
        Self {
            label: next(),
            capability: next(),
            identifier: next(),
            icon_or_class: next(),
            css_classes: next(),
            element_id: next(),
            icon: next(),
        }
    }
}

impl From<MenuEntry> for Vec<String> {
    fn from(entry: MenuEntry) -> Self {
        vec![
            entry.label,
            entry.capability,
            entry.identifier,
            entry.icon_or_class,
            entry.css_classes,
            entry.element_id,
            entry.icon,
        ]
    }
}

/// A submenu row: 3-element positional array. The label stays loosely typed
/// because some hosts register non-string placeholder labels purely to drive
/// tab UIs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Vec<Value>", into = "Vec<Value>")]
pub struct SubmenuEntry {
    pub label: Value,
    pub capability: String,
    pub identifier: String,
}

impl SubmenuEntry {
    /// The label as plain text, if it is one.
    pub fn label_text(&self) -> Option<&str> {
        self.label.as_str()
    }

    pub fn relabel(&self, label: impl Into<String>) -> Self {
        let mut entry = self.clone();
        entry.label = Value::String(label.into());
        entry
    }
}

impl From<Vec<Value>> for SubmenuEntry {
    fn from(mut raw: Vec<Value>) -> Self {
        raw.resize(3, Value::String(String::new()));
        let as_string = |v: &Value| v.as_str().unwrap_or_default().to_string();
        Self {
            capability: as_string(&raw[1]),
            identifier: as_string(&raw[2]),
            label: raw.swap_remove(0),
        }
    }
}

impl From<SubmenuEntry> for Vec<Value> {
    fn from(entry: SubmenuEntry) -> Self {
        vec![
            entry.label,
            Value::String(entry.capability),
            Value::String(entry.identifier),
        ]
    }
}

/// Result of one classification pass. The core side is the unmodified input;
/// hiding happens later as a separate step, so classification stays
/// non-destructive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Partition {
    pub menu: TopLevelMenu,
    pub submenu: SubmenuTable,
    pub third_party_menu: TopLevelMenu,
    pub third_party_submenu: SubmenuTable,
}

/// Link text and target for one navigation entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LinkData {
    pub text: String,
    pub url: String,
}

/// One block on the listing page: a third-party top-level link plus its
/// submenu links, or a fixed note when the plugin exposed no children.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingBlock {
    pub link: LinkData,
    pub children: Vec<LinkData>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Content model for the consolidated plugin-settings page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListingPage {
    pub title: String,
    pub description: String,
    pub blocks: Vec<ListingBlock>,
    /// Flat links for third-party settings pages with no top-level entry.
    pub settings_links: Vec<LinkData>,
}

/// Informational notice shown on the host's plugin-management page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerNotice {
    pub text: String,
    pub url: String,
}

/// Request for the host to register the listing page as a settings child.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPageRequest {
    pub parent: String,
    pub page_title: String,
    pub menu_title: String,
    pub capability: String,
    pub slug: String,
    pub position: u32,
}

/// Everything the host swaps in after one rebuild pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RebuildOutput {
    pub menu: TopLevelMenu,
    pub submenu: SubmenuTable,
    /// Identifiers to remove from the visible navigation tree.
    pub hidden: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings_page: Option<SettingsPageRequest>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<BannerNotice>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn menu_entry_pads_short_arrays() {
        let entry: MenuEntry = serde_json::from_value(json!(["Posts", "edit_posts"])).unwrap();
        assert_eq!(entry.label, "Posts");
        assert_eq!(entry.capability, "edit_posts");
        assert_eq!(entry.identifier, "");
        assert_eq!(entry.icon, "");
    }

    #[test]
    fn menu_entry_round_trips_as_positional_array() {
        let raw = json!(["Tools", "edit_posts", "tools.php", "", "menu-top", "menu-tools", "dashicons-admin-tools"]);
        let entry: MenuEntry = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(entry.identifier, "tools.php");
        assert_eq!(serde_json::to_value(&entry).unwrap(), raw);
    }

    #[test]
    fn submenu_entry_keeps_non_string_labels() {
        let entry: SubmenuEntry =
            serde_json::from_value(json!([["fake", "tab"], "manage_options", "acme-tab"])).unwrap();
        assert_eq!(entry.label_text(), None);
        assert_eq!(entry.identifier, "acme-tab");
    }

    #[test]
    fn submenu_entry_relabel_leaves_original_alone() {
        let entry: SubmenuEntry =
            serde_json::from_value(json!(["Export", "export", "export.php"])).unwrap();
        let renamed = entry.relabel("Export Content");
        assert_eq!(renamed.label_text(), Some("Export Content"));
        assert_eq!(entry.label_text(), Some("Export"));
    }
}
