use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use serde_json::json;
use tempfile::TempDir;

use schedcast_core::errors::ScheduleError;
use schedcast_core::models::{
    Day, DayKind, MessageTemplate, Slot, TemplateRef, TimestampFormat,
};
use schedcast_store::{ScheduleManager, ScheduleStore};

fn manager_in(dir: &TempDir) -> ScheduleManager {
    ScheduleManager::open(ScheduleStore::new(dir.path().join("config.json")))
}

#[test]
fn test_add_slot_derives_from_last_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);

    // Default today/work ends at 3:30 PM.
    let slot = manager
        .add_slot(Day::Today, DayKind::Work)
        .expect("add_slot should succeed");
    assert_eq!(slot.time, "4:00 PM - 7:00 PM");
    assert_eq!(slot.title, "New Stream Session");
    assert_eq!(manager.document().schedule.today.work.len(), 3);

    // The add was written through immediately.
    let reloaded = manager_in(&dir);
    assert_eq!(reloaded.document().schedule.today.work.len(), 3);
}

#[test]
fn test_delete_slot_refuses_to_empty_sequence() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);
    manager.document_mut().schedule.today.normal =
        vec![Slot::new("9:30 AM - 12:30 PM", "Only", "")];

    let err = manager
        .delete_slot(Day::Today, DayKind::Normal, 0)
        .expect_err("sole slot must not be deletable");
    assert!(matches!(err, ScheduleError::Validation(_)));
    assert_eq!(manager.document().schedule.today.normal.len(), 1);
}

#[test]
fn test_delete_slot_rejects_out_of_range_index() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);

    let err = manager
        .delete_slot(Day::Tomorrow, DayKind::Work, 9)
        .expect_err("index past the end must fail");
    assert!(matches!(err, ScheduleError::Validation(_)));
}

#[test]
fn test_delete_slot_removes_and_persists() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);

    manager
        .delete_slot(Day::Today, DayKind::Normal, 1)
        .expect("delete should succeed");
    assert_eq!(manager.document().schedule.today.normal.len(), 3);

    let reloaded = manager_in(&dir);
    assert_eq!(reloaded.document().schedule.today.normal.len(), 3);
}

#[test]
fn test_merge_replaces_whole_subtrees() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);

    manager
        .merge(json!({"theme": "forest"}))
        .expect("merge should succeed");
    assert_eq!(manager.document().channel.name, "Audacious Gabe");

    // Shallow merge: a partial channel object drops the omitted link.
    manager
        .merge(json!({"channel": {"name": "Replaced"}}))
        .expect("merge should succeed");
    assert_eq!(manager.document().channel.name, "Replaced");
    assert_eq!(manager.document().channel.link, "");
}

#[test]
fn test_merge_rejects_non_object_body() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);

    let err = manager
        .merge(json!(["not", "an", "object"]))
        .expect_err("array body must fail");
    assert!(matches!(err, ScheduleError::MalformedDocument(_)));
}

#[test]
fn test_merge_persists() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);
    manager.merge(json!({"timezone": "PST"})).unwrap();

    let reloaded = manager_in(&dir);
    assert_eq!(reloaded.document().timezone, "PST");
}

#[test]
fn test_compose_announcement_uses_current_template() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    let message = manager
        .compose_announcement(&TemplateRef::Name("Stream Live".to_string()), now)
        .expect("compose should succeed");
    assert!(message.starts_with("**🔴 WE'RE LIVE! 🔴**"));
    assert!(message.contains("https://www.twitch.tv/audaciousgabe"));
}

#[test]
fn test_compose_announcement_unknown_template_fails() {
    let dir = TempDir::new().unwrap();
    let manager = manager_in(&dir);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    let err = manager
        .compose_announcement(&TemplateRef::Name("Ghost".to_string()), now)
        .expect_err("unknown template must fail");
    assert!(matches!(err, ScheduleError::TemplateNotFound(_)));
}

fn named_template(name: &str) -> MessageTemplate {
    MessageTemplate {
        name: name.to_string(),
        title: "T".to_string(),
        message: "M".to_string(),
        use_timestamp: false,
        timestamp_format: TimestampFormat::ShortTime,
    }
}

#[test]
fn test_template_add_update_delete() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);
    let base_count = manager.document().discord.templates.len();

    manager
        .add_template(named_template("Raid Call"))
        .expect("add should succeed");
    assert_eq!(manager.document().discord.templates.len(), base_count + 1);

    let err = manager
        .add_template(named_template("Raid Call"))
        .expect_err("duplicate name must fail");
    assert!(matches!(err, ScheduleError::Validation(_)));

    let mut updated = named_template("Raid Call");
    updated.message = "Changed".to_string();
    manager.update_template(updated).expect("update should succeed");
    let stored = manager
        .document()
        .discord
        .templates
        .iter()
        .find(|template| template.name == "Raid Call")
        .unwrap();
    assert_eq!(stored.message, "Changed");

    manager
        .delete_template("Raid Call")
        .expect("delete should succeed");
    assert_eq!(manager.document().discord.templates.len(), base_count);

    let err = manager
        .delete_template("Raid Call")
        .expect_err("deleting twice must fail");
    assert!(matches!(err, ScheduleError::TemplateNotFound(_)));
}

#[test]
fn test_last_template_cannot_be_deleted() {
    let dir = TempDir::new().unwrap();
    let mut manager = manager_in(&dir);
    manager.document_mut().discord.templates = vec![named_template("Only")];

    let err = manager
        .delete_template("Only")
        .expect_err("sole template must not be deletable");
    assert!(matches!(err, ScheduleError::Validation(_)));
    assert_eq!(manager.document().discord.templates.len(), 1);
}
