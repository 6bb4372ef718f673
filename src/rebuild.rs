// Rebuild pipeline - classify, reassemble, and emit the host swap-in payload

use crate::classify::{classify, SETTINGS_PARENT};
use crate::host::Host;
use crate::listing::{hide_list, listing_page, LISTING_SLUG, LISTING_TITLE};
use crate::menu::build_top_level;
use crate::models::{
    BannerNotice, ListingPage, MenuError, RebuildOutput, SettingsPageRequest,
};
use crate::submenu::build_submenus;
use tracing::info;

/// Offset under which third-party top-level entries stay registered in the
/// replacement menu. The hide-list removes them from display afterwards.
const THIRD_PARTY_OFFSET: u32 = 1000;

/// One full rebuild pass, in strict dependency order: classify, assemble the
/// top level, assemble the submenus keyed by the new identifiers, then derive
/// the hide-list and the optional registration/banner outputs.
pub fn rebuild(host: &dyn Host) -> Result<RebuildOutput, MenuError> {
    let partition = classify(host.menu(), host.submenu());

    let mut menu = build_top_level(&partition, host)?;
    for (&position, entry) in &partition.third_party_menu {
        menu.insert(THIRD_PARTY_OFFSET + position, entry.clone());
    }

    let submenu = build_submenus(&partition, &menu, host)?;
    let hidden = hide_list(&partition);

    let has_third_party = !partition.third_party_menu.is_empty();
    let settings_page = has_third_party.then(|| SettingsPageRequest {
        parent: SETTINGS_PARENT.to_string(),
        page_title: LISTING_TITLE.to_string(),
        menu_title: LISTING_TITLE.to_string(),
        capability: "delete_plugins".to_string(),
        slug: LISTING_SLUG.to_string(),
        position: 8,
    });

    let banner = (has_third_party && host.current_page() == "plugins.php")
        .then(|| plugins_page_banner(host));

    info!(
        entries = menu.len(),
        hidden = hidden.len(),
        "rebuilt host navigation"
    );

    Ok(RebuildOutput {
        menu,
        submenu,
        hidden,
        settings_page,
        banner,
    })
}

/// Listing-page content model for the current request, computed from a fresh
/// classification pass.
pub fn build_listing(host: &dyn Host) -> ListingPage {
    let partition = classify(host.menu(), host.submenu());
    listing_page(&partition, host)
}

fn plugins_page_banner(host: &dyn Host) -> BannerNotice {
    BannerNotice {
        text: "Looking for plugin settings? Go to Plugin Settings".into(),
        url: host.admin_url(&format!("options-general.php?page={LISTING_SLUG}")),
    }
}
