use serde::{Deserialize, Serialize};

/// Discord announcement settings: the reusable template list, the selected
/// template, and one ad-hoc message that lives outside the list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscordSettings {
    #[serde(default = "default_templates")]
    pub templates: Vec<MessageTemplate>,
    #[serde(default)]
    pub current_template: TemplateRef,
    #[serde(default = "default_custom_message")]
    pub custom_message: MessageTemplate,
}

impl Default for DiscordSettings {
    fn default() -> Self {
        Self {
            templates: default_templates(),
            current_template: TemplateRef::default(),
            custom_message: default_custom_message(),
        }
    }
}

/// Reference to a template: a position in the list or a template name.
/// The ad-hoc custom message is addressed as index `templates.len()` or the
/// name `"custom"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TemplateRef {
    Index(usize),
    Name(String),
}

impl Default for TemplateRef {
    fn default() -> Self {
        TemplateRef::Index(0)
    }
}

/// A reusable announcement skeleton with placeholder tokens.
///
/// Two token dialects are in circulation and both are substituted: brace
/// tokens (`{{schedule}}`, `{{today_schedule}}`, `{{tomorrow_schedule}}`,
/// `{{link}}`, `{{channel}}`, `{{timezone}}`, `{{today_type}}`,
/// `{{tomorrow_type}}`, `{{title}}`) and bracket tokens (`[today]`,
/// `[tomorrow]`, `[title]`, `[link]`, `[timezone]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageTemplate {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub message: String,
    #[serde(default = "default_true")]
    pub use_timestamp: bool,
    #[serde(default)]
    pub timestamp_format: TimestampFormat,
}

fn default_true() -> bool {
    true
}

/// Discord timestamp style codes, `<t:unix:code>`. Unknown codes are kept
/// verbatim so documents written against a newer Discord style set still
/// round-trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    #[serde(rename = "t")]
    ShortTime,
    #[serde(rename = "T")]
    LongTime,
    #[serde(rename = "d")]
    ShortDate,
    #[serde(rename = "D")]
    LongDate,
    #[serde(rename = "f")]
    ShortDateTime,
    #[serde(rename = "F")]
    LongDateTime,
    #[serde(rename = "R")]
    Relative,
    #[serde(untagged)]
    Other(String),
}

impl TimestampFormat {
    /// The style code placed inside `<t:unix:code>` markers.
    pub fn code(&self) -> &str {
        match self {
            TimestampFormat::ShortTime => "t",
            TimestampFormat::LongTime => "T",
            TimestampFormat::ShortDate => "d",
            TimestampFormat::LongDate => "D",
            TimestampFormat::ShortDateTime => "f",
            TimestampFormat::LongDateTime => "F",
            TimestampFormat::Relative => "R",
            TimestampFormat::Other(code) => code,
        }
    }
}

impl Default for TimestampFormat {
    fn default() -> Self {
        TimestampFormat::ShortTime
    }
}

fn default_templates() -> Vec<MessageTemplate> {
    vec![
        MessageTemplate {
            name: "Stream Starting Soon".to_string(),
            title: "🔴 Stream Starting Soon! 🔴".to_string(),
            message: "@everyone Hey folks! Stream is starting soon!\n\n🎮 **Today's Schedule:**\n{{schedule}}\n\n📺 Join us at: {{link}}".to_string(),
            use_timestamp: true,
            timestamp_format: TimestampFormat::Relative,
        },
        MessageTemplate {
            name: "Stream Live".to_string(),
            title: "🔴 WE'RE LIVE! 🔴".to_string(),
            message: "@everyone We're live right now!\n\n🎮 **Today's Schedule:**\n{{schedule}}\n\n📺 Watch at: {{link}}".to_string(),
            use_timestamp: false,
            timestamp_format: TimestampFormat::ShortTime,
        },
        MessageTemplate {
            name: "Schedule Update".to_string(),
            title: "📅 Schedule Update 📅".to_string(),
            message: "Hey everyone! Here's our streaming schedule:\n\n**Today:** {{today_type}}\n{{today_schedule}}\n\n**Tomorrow:** {{tomorrow_type}}\n{{tomorrow_schedule}}\n\n⏰ Times are in {{timezone}}".to_string(),
            use_timestamp: false,
            timestamp_format: TimestampFormat::ShortDateTime,
        },
        MessageTemplate {
            name: "Custom Stream Schedule".to_string(),
            title: "Doubling our Usual Hours! ✨👏".to_string(),
            message: "@Twitch Enjoyers : [title]\n\nI will be streaming on Twitch ``Today`` from:\n\n[today]\n\n``Tomorrow`` I'll be streaming from:\n\n[tomorrow]\n\n[timezone]\n\n[link]".to_string(),
            use_timestamp: true,
            timestamp_format: TimestampFormat::ShortTime,
        },
    ]
}

fn default_custom_message() -> MessageTemplate {
    MessageTemplate {
        name: String::new(),
        title: "Doubling our Usual Hours! ✨👏".to_string(),
        message: String::new(),
        use_timestamp: true,
        timestamp_format: TimestampFormat::ShortTime,
    }
}
