use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use schedcast_core::compose::{compose, resolve_template};
use schedcast_core::errors::ScheduleError;
use schedcast_core::models::{
    MessageTemplate, ScheduleDocument, Slot, TemplateRef, TimestampFormat,
};

fn template(message: &str, use_timestamp: bool) -> MessageTemplate {
    MessageTemplate {
        name: "Test".to_string(),
        title: "Test Title".to_string(),
        message: message.to_string(),
        use_timestamp,
        timestamp_format: TimestampFormat::ShortTime,
    }
}

fn doc_with_today_slots(slots: Vec<Slot>) -> ScheduleDocument {
    let mut doc = ScheduleDocument::default();
    doc.schedule.today.normal = slots;
    doc
}

#[test]
fn test_plain_template_gets_title_prepended_and_nothing_else() {
    let doc = ScheduleDocument::default();
    let template = template("No tokens here.", false);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    assert_eq!(
        compose(&template, &doc, now),
        "**Test Title**\n\nNo tokens here."
    );
}

#[test]
fn test_literal_slot_lines_without_timestamps() {
    let doc = doc_with_today_slots(vec![
        Slot::new("9:30 AM - 12:30 PM", "Warmup", "Admin tasks."),
        Slot::new("1:00 PM - 4:00 PM", "Focus", "Heads down."),
    ]);
    let template = template("{{schedule}}", false);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    assert_eq!(
        compose(&template, &doc, now),
        "**Test Title**\n\n\
         • **9:30 AM - 12:30 PM** - Warmup: Admin tasks.\n\
         • **1:00 PM - 4:00 PM** - Focus: Heads down."
    );
}

#[test]
fn test_channel_link_and_type_tokens() {
    let doc = ScheduleDocument::default();
    let template = template(
        "{{channel}} at {{link}} in {{timezone}} ({{today_type}}/{{tomorrow_type}})",
        false,
    );
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    assert_eq!(
        compose(&template, &doc, now),
        "**Test Title**\n\nAudacious Gabe at https://www.twitch.tv/audaciousgabe in EST (Normal/Work)"
    );
}

#[test]
fn test_bracket_timezone_is_literal_label_without_timestamps() {
    let doc = ScheduleDocument::default();
    let template = template("[timezone]", false);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    assert_eq!(compose(&template, &doc, now), "**Test Title**\n\n``EST``");
}

#[test]
fn test_bracket_timezone_advertises_auto_adjust_with_timestamps() {
    let doc = ScheduleDocument::default();
    let template = template("[timezone]", true);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    let rendered = compose(&template, &doc, now);
    assert!(rendered.ends_with("``Times auto-adjust to your timezone!``"));
}

#[test]
fn test_title_token_suppresses_prepend() {
    let doc = ScheduleDocument::default();
    let template = template("Announcing: [title]!", false);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    assert_eq!(compose(&template, &doc, now), "Announcing: Test Title!");
}

#[test]
fn test_now_marker_prepended_with_timestamps() {
    let doc = ScheduleDocument::default();
    let template = template("hello", true);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 15, 0, 0).unwrap();

    assert_eq!(
        compose(&template, &doc, now),
        format!("**Test Title**\n\n<t:{}:t>\n\nhello", now.timestamp())
    );
}

#[test]
fn test_timestamp_lines_use_reference_date() {
    let doc = doc_with_today_slots(vec![Slot::new("1:00 PM - 4:00 PM", "Focus", "Heads down.")]);
    let template = template("{{schedule}}", true);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    let start = Utc.with_ymd_and_hms(2025, 3, 10, 13, 0, 0).unwrap().timestamp();
    let end = Utc.with_ymd_and_hms(2025, 3, 10, 16, 0, 0).unwrap().timestamp();
    let rendered = compose(&template, &doc, now);

    assert!(rendered.contains(&format!(
        "• <t:{start}:t> to <t:{end}:t> - **Focus**: Heads down."
    )));
}

#[test]
fn test_cross_midnight_slot_ends_on_next_day() {
    let doc = doc_with_today_slots(vec![Slot::new(
        "9:00 PM - 12:00 AM",
        "Late Night Admin",
        "Winding down.",
    )]);
    let template = template("{{schedule}}", true);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    let start = Utc.with_ymd_and_hms(2025, 3, 10, 21, 0, 0).unwrap().timestamp();
    let end = Utc.with_ymd_and_hms(2025, 3, 11, 0, 0, 0).unwrap().timestamp();
    let rendered = compose(&template, &doc, now);

    assert!(rendered.contains(&format!(
        "• <t:{start}:t> to <t:{end}:t> - **Late Night Admin**: Winding down."
    )));
}

#[test]
fn test_tomorrow_section_anchors_to_next_day() {
    let mut doc = ScheduleDocument::default();
    doc.schedule.tomorrow.work = vec![Slot::new("9:30 AM - 12:30 PM", "Warmup", "Tasks.")];
    let template = template("{{tomorrow_schedule}}", true);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    let start = Utc.with_ymd_and_hms(2025, 3, 11, 9, 30, 0).unwrap().timestamp();
    let rendered = compose(&template, &doc, now);

    assert!(rendered.contains(&format!("<t:{start}:t>")));
}

#[test]
fn test_unparseable_slot_time_degrades_to_literal() {
    let doc = doc_with_today_slots(vec![Slot::new("sometime today", "Mystery", "???")]);
    let template = template("{{schedule}}", true);
    let now = Utc.with_ymd_and_hms(2025, 3, 10, 9, 0, 0).unwrap();

    let rendered = compose(&template, &doc, now);
    assert!(rendered.contains("• **sometime today** - Mystery: ???"));
}

#[test]
fn test_resolve_template_by_index_and_name() {
    let doc = ScheduleDocument::default();

    let by_index = resolve_template(&doc, &TemplateRef::Index(1)).expect("index should resolve");
    assert_eq!(by_index.name, "Stream Live");

    let by_name = resolve_template(&doc, &TemplateRef::Name("Schedule Update".to_string()))
        .expect("name should resolve");
    assert_eq!(by_name.name, "Schedule Update");
}

#[test]
fn test_resolve_template_custom_message() {
    let doc = ScheduleDocument::default();
    let count = doc.discord.templates.len();

    let past_end =
        resolve_template(&doc, &TemplateRef::Index(count)).expect("trailing index is custom");
    assert_eq!(past_end, &doc.discord.custom_message);

    let by_name = resolve_template(&doc, &TemplateRef::Name("custom".to_string()))
        .expect("custom name should resolve");
    assert_eq!(by_name, &doc.discord.custom_message);
}

#[test]
fn test_resolve_template_missing_fails_loudly() {
    let doc = ScheduleDocument::default();
    let count = doc.discord.templates.len();

    let err = resolve_template(&doc, &TemplateRef::Index(count + 1))
        .expect_err("dangling index should fail");
    assert!(matches!(err, ScheduleError::TemplateNotFound(_)));

    let err = resolve_template(&doc, &TemplateRef::Name("Nope".to_string()))
        .expect_err("dangling name should fail");
    assert!(matches!(err, ScheduleError::TemplateNotFound(_)));
}
