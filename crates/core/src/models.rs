pub mod document;
pub mod template;

pub use document::{
    ChannelInfo, Day, DayKind, DaySchedule, ExportScope, Glow, Layout, Padding, ScheduleDocument,
    Slot, Theme, WeekSchedule,
};
pub use template::{DiscordSettings, MessageTemplate, TemplateRef, TimestampFormat};
