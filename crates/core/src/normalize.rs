//! Loads raw persisted data into the canonical [`ScheduleDocument`] shape
//! and derives defaults for newly added slots.
//!
//! Normalization is permissive: every missing field is defaulted and the
//! legacy representation that stored slot lists as keyed objects is
//! converted back to ordered sequences. The only hard failure is a root
//! that is not a JSON object.

use serde_json::Value;

use crate::clock::{split_range, ClockTime};
use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::document::{ScheduleDocument, Slot};

pub const DEFAULT_SLOT_TIME: &str = "9:30 AM - 12:30 PM";
pub const FALLBACK_SLOT_TIME: &str = "2:00 PM - 5:00 PM";
const NEW_SLOT_TITLE: &str = "New Stream Session";
const NEW_SLOT_DESC: &str = "Description of this stream session";

const DAY_KEYS: [&str; 2] = ["today", "tomorrow"];
const KIND_KEYS: [&str; 2] = ["normal", "work"];

/// Repairs a raw JSON tree into a [`ScheduleDocument`].
///
/// Fails only when the root is not an object (or a present field has a
/// shape serde cannot coerce); callers recover from that by substituting
/// [`ScheduleDocument::default`].
pub fn normalize(mut raw: Value) -> ScheduleResult<ScheduleDocument> {
    let root = raw.as_object_mut().ok_or_else(|| {
        ScheduleError::MalformedDocument("document root is not a JSON object".to_string())
    })?;

    if let Some(schedule) = root.get_mut("schedule").and_then(Value::as_object_mut) {
        for day in DAY_KEYS {
            let Some(entry) = schedule.get_mut(day).and_then(Value::as_object_mut) else {
                continue;
            };
            for kind in KIND_KEYS {
                if let Some(slots) = entry.get_mut(kind) {
                    if slots.is_object() {
                        *slots = keyed_slots_to_list(slots.take());
                    }
                }
            }
        }
    }

    serde_json::from_value(raw).map_err(|err| ScheduleError::MalformedDocument(err.to_string()))
}

/// Converts a legacy keyed-slot map to an ordered list. Keys sort
/// numerically when they all parse as integers, lexicographically
/// otherwise; pure lexicographic ordering would scramble "10" before "2".
fn keyed_slots_to_list(value: Value) -> Value {
    let Value::Object(map) = value else {
        return value;
    };

    let mut entries: Vec<(String, Value)> = map.into_iter().collect();
    if entries.iter().all(|(key, _)| key.parse::<u64>().is_ok()) {
        entries.sort_by_key(|(key, _)| key.parse::<u64>().unwrap_or(u64::MAX));
    } else {
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
    }

    Value::Array(entries.into_iter().map(|(_, slot)| slot).collect())
}

/// Computes the default slot appended after `existing`.
///
/// The new slot starts 30 minutes after the previous slot's end and runs
/// for 3 hours, all computed in minutes-since-midnight so the range wraps
/// cleanly across noon and midnight. An unparseable previous end time
/// falls back to a fixed literal range.
pub fn derive_next_slot(existing: &[Slot]) -> Slot {
    let Some(last) = existing.last() else {
        return Slot::new(DEFAULT_SLOT_TIME, NEW_SLOT_TITLE, NEW_SLOT_DESC);
    };

    let time = next_time_range(&last.time)
        .unwrap_or_else(|| FALLBACK_SLOT_TIME.to_string());
    Slot::new(&time, NEW_SLOT_TITLE, NEW_SLOT_DESC)
}

fn next_time_range(last_range: &str) -> Option<String> {
    let (_, end) = split_range(last_range)?;
    let end = ClockTime::parse(end)?;
    let start = end.offset_by(30);
    let finish = start.offset_by(3 * 60);
    Some(format!("{start} - {finish}"))
}
