// Third-party navigation - hide-list, link data, and the listing-page model

use crate::host::Host;
use crate::models::{LinkData, ListingBlock, ListingPage, Partition};
use std::collections::BTreeMap;
use tracing::debug;

/// Slug and title of the consolidated settings page this crate adds.
pub const LISTING_SLUG: &str = "plugin-settings";
pub const LISTING_TITLE: &str = "Plugin Settings";

/// Shown instead of an empty submenu list. Some plugins register no children
/// until they have been set up once.
pub const EMPTY_SUBMENU_NOTE: &str = "No entries (yet). Try clicking on the link above, \
     perhaps this plugin needs to be set up properly before menu items appear here.";

const LISTING_DESCRIPTION: &str =
    "Some of the plugins you've activated bring their own settings. That's what these are.";

/// Bare keyword slugs need URL resolution through the host; file-based slugs
/// are used as-is. NOTE: a slug with query parameters but no ".php" marker is
/// still sent through resolution; that behavior is pinned by tests until the
/// product call changes.
pub fn needs_resolution(slug: &str) -> bool {
    !slug.to_ascii_lowercase().contains(".php")
}

/// Fully qualified external addresses must never go through page-URL
/// resolution.
pub fn is_external(slug: &str) -> bool {
    slug.get(..4)
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case("http"))
}

/// Identifiers to remove from the visible navigation tree. Entries with an
/// empty identifier are skipped, not removed.
pub fn hide_list(partition: &Partition) -> Vec<String> {
    partition
        .third_party_menu
        .values()
        .filter(|entry| !entry.identifier.is_empty())
        .map(|entry| entry.identifier.clone())
        .collect()
}

/// Link data for every third-party top-level entry, keyed by identifier.
pub fn menu_link_data(partition: &Partition, host: &dyn Host) -> BTreeMap<String, LinkData> {
    let mut data = BTreeMap::new();
    for entry in partition.third_party_menu.values() {
        if entry.identifier.is_empty() {
            continue;
        }

        let url = if needs_resolution(&entry.identifier) {
            host.resolve_url(&entry.identifier)
        } else {
            entry.identifier.clone()
        };
        data.insert(
            entry.identifier.clone(),
            LinkData {
                text: entry.label.clone(),
                url,
            },
        );
    }
    data
}

/// Link data for third-party submenu groups, keyed by parent identifier.
pub fn submenu_link_data(
    partition: &Partition,
    host: &dyn Host,
) -> BTreeMap<String, Vec<LinkData>> {
    let mut data = BTreeMap::new();
    for (parent, group) in &partition.third_party_submenu {
        let mut links = Vec::new();
        for entry in group.values() {
            if entry.identifier.is_empty() {
                continue;
            }

            let url = if needs_resolution(&entry.identifier) && !is_external(&entry.identifier) {
                host.resolve_url(&entry.identifier)
            } else {
                entry.identifier.clone()
            };
            links.push(LinkData {
                text: entry.label_text().unwrap_or_default().to_string(),
                url,
            });
        }
        data.insert(parent.clone(), links);
    }
    data
}

/// Content model for the consolidated settings page: one block per hidden
/// third-party menu, then flat links for settings-only groups with no
/// top-level entry of their own.
pub fn listing_page(partition: &Partition, host: &dyn Host) -> ListingPage {
    let menu_links = menu_link_data(partition, host);
    let submenu_links = submenu_link_data(partition, host);

    let mut blocks = Vec::new();
    for entry in partition.third_party_menu.values() {
        let Some(link) = menu_links.get(&entry.identifier) else {
            continue;
        };
        let children = submenu_links
            .get(&entry.identifier)
            .cloned()
            .unwrap_or_default();
        let note = children.is_empty().then(|| EMPTY_SUBMENU_NOTE.to_string());
        blocks.push(ListingBlock {
            link: link.clone(),
            children,
            note,
        });
    }

    let mut settings_links = Vec::new();
    for (parent, group) in &partition.third_party_submenu {
        // Exact identifier match: a substring scan would let an unrelated
        // plugin whose slug merely contains the parent key suppress these
        // links.
        if partition
            .third_party_menu
            .values()
            .any(|entry| entry.identifier == *parent)
        {
            continue;
        }

        for entry in group.values() {
            // Some plugins register non-string placeholder labels purely to
            // drive tab UIs; those are not navigable.
            let Some(text) = entry.label_text() else {
                debug!(group = %parent, "skipping placeholder entry with non-string label");
                continue;
            };
            settings_links.push(LinkData {
                text: text.to_string(),
                url: host.resolve_url(parent),
            });
        }
    }

    ListingPage {
        title: LISTING_TITLE.into(),
        description: LISTING_DESCRIPTION.into(),
        blocks,
        settings_links,
    }
}
