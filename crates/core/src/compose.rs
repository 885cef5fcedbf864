//! Renders announcement messages from a template and the schedule document.
//!
//! Composition never fails: any slot whose time range cannot be parsed is
//! rendered with its literal time string instead of computed timestamps.

use chrono::{DateTime, Days, NaiveDate, NaiveTime, TimeZone};

use crate::clock::{split_range, ClockTime};
use crate::errors::{ScheduleError, ScheduleResult};
use crate::models::document::{DaySchedule, ScheduleDocument, Slot};
use crate::models::template::{MessageTemplate, TemplateRef};

/// Looks up a template by index or name. Index `templates.len()` and the
/// name `"custom"` address the ad-hoc custom message. A dangling reference
/// is an error rather than an empty message, since it means the editor and
/// the document have drifted apart.
pub fn resolve_template<'a>(
    doc: &'a ScheduleDocument,
    reference: &TemplateRef,
) -> ScheduleResult<&'a MessageTemplate> {
    let templates = &doc.discord.templates;
    match reference {
        TemplateRef::Index(index) if *index < templates.len() => Ok(&templates[*index]),
        TemplateRef::Index(index) if *index == templates.len() => Ok(&doc.discord.custom_message),
        TemplateRef::Index(index) => Err(ScheduleError::TemplateNotFound(format!(
            "template index {index} out of range ({} templates)",
            templates.len()
        ))),
        TemplateRef::Name(name) if name == "custom" => Ok(&doc.discord.custom_message),
        TemplateRef::Name(name) => templates
            .iter()
            .find(|template| template.name == *name)
            .ok_or_else(|| ScheduleError::TemplateNotFound(format!("no template named {name:?}"))),
    }
}

/// Renders the announcement for `template` against `doc`, anchoring slot
/// timestamps to `now`'s calendar date in `now`'s timezone.
pub fn compose<Tz: TimeZone>(
    template: &MessageTemplate,
    doc: &ScheduleDocument,
    now: DateTime<Tz>,
) -> String {
    let tz = now.timezone();
    let today = now.date_naive();
    let tomorrow = today + Days::new(1);

    let today_text = day_lines(&doc.schedule.today, today, template, &tz);
    let tomorrow_text = day_lines(&doc.schedule.tomorrow, tomorrow, template, &tz);

    // Bracket-dialect [timezone] carries the dynamic notice; the brace
    // token always substitutes the literal label.
    let bracket_timezone = if template.use_timestamp {
        "``Times auto-adjust to your timezone!``".to_string()
    } else {
        format!("``{}``", doc.timezone)
    };

    let replacements: [(&str, &str); 14] = [
        ("[today]", today_text.as_str()),
        ("[tomorrow]", tomorrow_text.as_str()),
        ("[timezone]", bracket_timezone.as_str()),
        ("[link]", doc.channel.link.as_str()),
        ("[title]", template.title.as_str()),
        ("{{schedule}}", today_text.as_str()),
        ("{{today_schedule}}", today_text.as_str()),
        ("{{tomorrow_schedule}}", tomorrow_text.as_str()),
        ("{{link}}", doc.channel.link.as_str()),
        ("{{channel}}", doc.channel.name.as_str()),
        ("{{timezone}}", doc.timezone.as_str()),
        ("{{today_type}}", doc.schedule.today.kind.label()),
        ("{{tomorrow_type}}", doc.schedule.tomorrow.kind.label()),
        ("{{title}}", template.title.as_str()),
    ];

    let has_title_token =
        template.message.contains("[title]") || template.message.contains("{{title}}");

    let mut body = template.message.clone();
    for (token, value) in replacements {
        body = body.replace(token, value);
    }

    let mut parts = Vec::new();
    if !has_title_token {
        let mut title = template.title.clone();
        for (token, value) in replacements {
            if token != "[title]" && token != "{{title}}" {
                title = title.replace(token, value);
            }
        }
        parts.push(format!("**{title}**"));
    }
    if template.use_timestamp {
        parts.push(format!(
            "<t:{}:{}>",
            now.timestamp(),
            template.timestamp_format.code()
        ));
    }
    parts.push(body);

    parts.join("\n\n")
}

/// All active slot lines for one day, joined by newline with no trailing
/// separator.
fn day_lines<Tz: TimeZone>(
    day: &DaySchedule,
    date: NaiveDate,
    template: &MessageTemplate,
    tz: &Tz,
) -> String {
    day.active()
        .iter()
        .map(|slot| slot_line(slot, date, template, tz))
        .collect::<Vec<_>>()
        .join("\n")
}

fn slot_line<Tz: TimeZone>(
    slot: &Slot,
    date: NaiveDate,
    template: &MessageTemplate,
    tz: &Tz,
) -> String {
    if template.use_timestamp {
        if let Some(line) = timestamp_line(slot, date, template.timestamp_format.code(), tz) {
            return line;
        }
    }
    format!("• **{}** - {}: {}", slot.time, slot.title, slot.desc)
}

fn timestamp_line<Tz: TimeZone>(
    slot: &Slot,
    date: NaiveDate,
    format: &str,
    tz: &Tz,
) -> Option<String> {
    let (start_text, end_text) = split_range(&slot.time)?;
    let start = ClockTime::parse(start_text)?;
    let end = ClockTime::parse(end_text)?;

    // A slot ending at midnight, or at a wall-clock time earlier than its
    // start, crosses into the next calendar day.
    let end_date = if end.since_midnight() < start.since_midnight() || end.since_midnight() == 0 {
        date + Days::new(1)
    } else {
        date
    };

    let start_ts = unix_seconds(tz, date, start)?;
    let end_ts = unix_seconds(tz, end_date, end)?;
    Some(format!(
        "• <t:{start_ts}:{format}> to <t:{end_ts}:{format}> - **{}**: {}",
        slot.title, slot.desc
    ))
}

fn unix_seconds<Tz: TimeZone>(tz: &Tz, date: NaiveDate, time: ClockTime) -> Option<i64> {
    let naive = date.and_time(NaiveTime::from_hms_opt(time.hour(), time.minute(), 0)?);
    tz.from_local_datetime(&naive)
        .earliest()
        .map(|instant| instant.timestamp())
}
