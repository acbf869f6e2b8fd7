//! Entity matcher
//!
//! There is no explicit link from an entity to a zone. Membership is guessed
//! from labels: an entity belongs to a zone when its label contains the zone
//! name and the device prefix taken from the zone-list entity's label.
//!
//! The prefix test is a plain substring test, neither anchored nor exact, so
//! devices whose names overlap can claim each other's entities. Everything
//! here is pure so an explicit entity-to-zone registry can replace it.

use std::ops::Range;

use crate::types::{Entity, Snapshot};

/// Device prefix for a zone, derived from the zone-list entity's label
///
/// The label is lowercased. Everything before its last space wins; a label
/// without spaces falls back to the text before the first occurrence of the
/// zone name. `None` (including an empty prefix) means no entity can match.
pub fn zone_prefix(snapshot: &Snapshot, zone_list_entity_id: &str, zone: &str) -> Option<String> {
    let label = snapshot
        .get(zone_list_entity_id)
        .map_or(zone_list_entity_id, Entity::label)
        .to_lowercase();
    let zone = zone.to_lowercase();

    let prefix = if let Some(last_space) = label.rfind(' ') {
        label[..last_space].to_string()
    } else if let Some(start) = label.find(&zone) {
        label[..start].trim_end().to_string()
    } else {
        return None;
    };

    (!prefix.is_empty()).then_some(prefix)
}

/// Entities that belong to `zone`, in snapshot order
pub fn match_entities<'a>(
    snapshot: &'a Snapshot,
    zone: &str,
    zone_list_entity_id: &str,
) -> Vec<&'a Entity> {
    let Some(prefix) = zone_prefix(snapshot, zone_list_entity_id, zone) else {
        log::debug!("No prefix derivable for zone {zone}");
        return Vec::new();
    };
    let zone = zone.to_lowercase();

    snapshot
        .iter()
        .filter(|entity| {
            let label = entity.label().to_lowercase();
            label.contains(&zone) && label.contains(&prefix)
        })
        .collect()
}

/// Label text after the first occurrence of the zone name
///
/// Leading separators (`- _ : . ,` and whitespace) are stripped. Display only.
pub fn label_after_zone(label: &str, zone: &str) -> String {
    let Some(found) = find_ignore_case(label, zone) else {
        return label.to_string();
    };

    label[found.end..]
        .trim()
        .trim_start_matches(|c: char| matches!(c, '-' | '_' | ':' | '.' | ',') || c.is_whitespace())
        .to_string()
}

/// Byte range of the first case-insensitive occurrence of `needle`
///
/// Works on the original text so the range is valid even when lowercasing
/// would change byte lengths.
fn find_ignore_case(haystack: &str, needle: &str) -> Option<Range<usize>> {
    let needle: Vec<char> = needle.chars().flat_map(char::to_lowercase).collect();
    if needle.is_empty() {
        return Some(0..0);
    }

    for (start, _) in haystack.char_indices() {
        let mut pending = needle.iter();
        let mut end = start;
        let mut mismatch = false;

        'chars: for (offset, ch) in haystack[start..].char_indices() {
            for lower in ch.to_lowercase() {
                if pending.next() != Some(&lower) {
                    mismatch = true;
                    break 'chars;
                }
            }
            end = start + offset + ch.len_utf8();
            if pending.len() == 0 {
                break;
            }
        }

        if !mismatch && pending.len() == 0 {
            return Some(start..end);
        }
    }
    None
}
