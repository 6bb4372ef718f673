// Positional lookup - which position of a group holds a matching value

use crate::models::{MenuEntry, SubmenuEntry};
use std::collections::BTreeMap;

/// Value scan over one entry's positional fields. The match is substring
/// containment, so `customize.php` finds a customizer slug that carries a
/// return query parameter.
pub trait FieldScan {
    fn holds(&self, needle: &str) -> bool;
}

impl FieldScan for MenuEntry {
    fn holds(&self, needle: &str) -> bool {
        self.fields().iter().any(|value| value.contains(needle))
    }
}

impl FieldScan for SubmenuEntry {
    fn holds(&self, needle: &str) -> bool {
        self.label_text().is_some_and(|label| label.contains(needle))
            || self.capability.contains(needle)
            || self.identifier.contains(needle)
    }
}

/// Position of the first entry containing `needle`, in position order.
/// `None` means "optional feature unavailable"; callers degrade gracefully.
#[allow(dead_code)]
pub fn find_position<E: FieldScan>(group: &BTreeMap<u32, E>, needle: &str) -> Option<u32> {
    group
        .iter()
        .find(|(_, entry)| entry.holds(needle))
        .map(|(&position, _)| position)
}

/// The first entry containing `needle` itself.
pub fn find_entry<'a, E: FieldScan>(group: &'a BTreeMap<u32, E>, needle: &str) -> Option<&'a E> {
    group.values().find(|entry| entry.holds(needle))
}
