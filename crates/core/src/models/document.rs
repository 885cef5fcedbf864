use serde::{Deserialize, Serialize};

use crate::models::template::DiscordSettings;

/// The whole persisted configuration consumed by the image renderer and the
/// announcement composer. Field names match the on-disk JSON; every field
/// defaults individually so partially written documents still load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleDocument {
    #[serde(default)]
    pub channel: ChannelInfo,
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "default_timezone")]
    pub timezone: String,
    #[serde(default)]
    pub export_scope: ExportScope,
    #[serde(default)]
    pub schedule: WeekSchedule,
    #[serde(default)]
    pub layout: Layout,
    #[serde(default)]
    pub discord: DiscordSettings,
}

impl Default for ScheduleDocument {
    fn default() -> Self {
        Self {
            channel: ChannelInfo::default(),
            theme: Theme::default(),
            timezone: default_timezone(),
            export_scope: ExportScope::default(),
            schedule: WeekSchedule::default(),
            layout: Layout::default(),
            discord: DiscordSettings::default(),
        }
    }
}

fn default_timezone() -> String {
    "EST".to_string()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelInfo {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub link: String,
}

impl Default for ChannelInfo {
    fn default() -> Self {
        Self {
            name: "Audacious Gabe".to_string(),
            link: "https://www.twitch.tv/audaciousgabe".to_string(),
        }
    }
}

/// Renderer color palette. Unknown values are preserved so a document
/// written by a newer renderer still round-trips; the renderer falls back
/// to its default palette for them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Twilight,
    Sunrise,
    Forest,
    Oceanic,
    Cyberpunk,
    Pastel,
    Arctic,
    #[serde(untagged)]
    Other(String),
}

impl Default for Theme {
    fn default() -> Self {
        Theme::Twilight
    }
}

/// Which days the renderer includes in exported artifacts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportScope {
    Today,
    Full,
}

impl Default for ExportScope {
    fn default() -> Self {
        ExportScope::Full
    }
}

/// The two day buckets the schedule tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Day {
    Today,
    Tomorrow,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekSchedule {
    #[serde(default = "WeekSchedule::default_today")]
    pub today: DaySchedule,
    #[serde(default = "WeekSchedule::default_tomorrow")]
    pub tomorrow: DaySchedule,
}

impl WeekSchedule {
    pub fn day(&self, day: Day) -> &DaySchedule {
        match day {
            Day::Today => &self.today,
            Day::Tomorrow => &self.tomorrow,
        }
    }

    pub fn day_mut(&mut self, day: Day) -> &mut DaySchedule {
        match day {
            Day::Today => &mut self.today,
            Day::Tomorrow => &mut self.tomorrow,
        }
    }

    fn default_today() -> DaySchedule {
        DaySchedule {
            kind: DayKind::Normal,
            title: "Today's Stream".to_string(),
            normal: default_normal_slots(),
            work: default_work_slots(),
        }
    }

    fn default_tomorrow() -> DaySchedule {
        DaySchedule {
            kind: DayKind::Work,
            title: "Tomorrow's Stream".to_string(),
            normal: default_normal_slots(),
            work: default_work_slots(),
        }
    }
}

impl Default for WeekSchedule {
    fn default() -> Self {
        Self {
            today: Self::default_today(),
            tomorrow: Self::default_tomorrow(),
        }
    }
}

/// One day bucket: both slot variants plus the selector for which one the
/// renderer and composer treat as active.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DaySchedule {
    #[serde(rename = "type", default)]
    pub kind: DayKind,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub normal: Vec<Slot>,
    #[serde(default)]
    pub work: Vec<Slot>,
}

impl DaySchedule {
    /// The sequence selected by `kind`.
    pub fn active(&self) -> &[Slot] {
        self.slots(self.kind)
    }

    pub fn slots(&self, kind: DayKind) -> &[Slot] {
        match kind {
            DayKind::Normal => &self.normal,
            DayKind::Work => &self.work,
        }
    }

    pub fn slots_mut(&mut self, kind: DayKind) -> &mut Vec<Slot> {
        match kind {
            DayKind::Normal => &mut self.normal,
            DayKind::Work => &mut self.work,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DayKind {
    Normal,
    Work,
}

impl DayKind {
    /// Capitalized label used by the `{{today_type}}`/`{{tomorrow_type}}`
    /// message tokens.
    pub fn label(&self) -> &'static str {
        match self {
            DayKind::Normal => "Normal",
            DayKind::Work => "Work",
        }
    }
}

impl Default for DayKind {
    fn default() -> Self {
        DayKind::Normal
    }
}

/// One scheduled stream segment. `time` holds a `"<start> - <end>"` range
/// in `H:MM AM|PM` notation and stays a plain string in the model; parsing
/// happens at the edges that need it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Slot {
    #[serde(default)]
    pub time: String,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub desc: String,
}

impl Slot {
    pub fn new(time: &str, title: &str, desc: &str) -> Self {
        Self {
            time: time.to_string(),
            title: title.to_string(),
            desc: desc.to_string(),
        }
    }
}

fn default_normal_slots() -> Vec<Slot> {
    vec![
        Slot::new(
            "9:30 AM - 12:30 PM",
            "Morning Warmup",
            "Clearing admin tasks, then jumping into chill development.",
        ),
        Slot::new(
            "1:00 PM - 4:00 PM",
            "Focused Development + Prototype Speedrun",
            "Getting stuff done and making things happen ✨👏",
        ),
        Slot::new(
            "5:00 PM - 8:00 PM",
            "Greenlight Development",
            "You picked it, now we're building it.",
        ),
        Slot::new(
            "9:00 PM - 12:00 AM",
            "Late Night Admin",
            "Winding down with some chill development.",
        ),
    ]
}

fn default_work_slots() -> Vec<Slot> {
    vec![
        Slot::new(
            "9:30 AM - 12:30 PM",
            "Morning Warmup",
            "Clearing admin tasks, then jumping into chill development.",
        ),
        Slot::new(
            "12:30 PM - 3:30 PM",
            "Focused Development + Prototype Speedrun",
            "Getting stuff done and making things happen ✨👏",
        ),
    ]
}

/// Image layout parameters consumed verbatim by the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Layout {
    #[serde(default)]
    pub outer_padding: Padding,
    #[serde(default)]
    pub inner_padding: Padding,
    #[serde(default)]
    pub glow: Glow,
}

/// Four-sided padding in pixels, 0-128 in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Padding {
    #[serde(default = "default_padding")]
    pub top: u32,
    #[serde(default = "default_padding")]
    pub bottom: u32,
    #[serde(default = "default_padding")]
    pub left: u32,
    #[serde(default = "default_padding")]
    pub right: u32,
}

impl Default for Padding {
    fn default() -> Self {
        Self {
            top: 32,
            bottom: 32,
            left: 32,
            right: 32,
        }
    }
}

fn default_padding() -> u32 {
    32
}

/// Glow radii in pixels plus an overall intensity percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Glow {
    #[serde(default = "Glow::default_title")]
    pub title: u32,
    #[serde(default = "Glow::default_link")]
    pub link: u32,
    #[serde(default = "Glow::default_panel")]
    pub panel: u32,
    #[serde(default = "Glow::default_intensity")]
    pub intensity: u32,
}

impl Glow {
    fn default_title() -> u32 {
        20
    }

    fn default_link() -> u32 {
        15
    }

    fn default_panel() -> u32 {
        50
    }

    fn default_intensity() -> u32 {
        50
    }
}

impl Default for Glow {
    fn default() -> Self {
        Self {
            title: Self::default_title(),
            link: Self::default_link(),
            panel: Self::default_panel(),
            intensity: Self::default_intensity(),
        }
    }
}
