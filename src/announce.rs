//! Composes the Discord announcement for the current schedule and prints
//! it to stdout, ready to paste. An optional argument selects the template
//! by list index or by name; `custom` selects the ad-hoc custom message.

use chrono::Local;
use color_eyre::eyre::Result;
use dotenv::dotenv;
use schedcast_core::models::TemplateRef;
use schedcast_store::{ScheduleManager, ScheduleStore};

fn main() -> Result<()> {
    color_eyre::install()?;
    dotenv().ok();

    let manager = ScheduleManager::open(ScheduleStore::from_env());

    let reference = match std::env::args().nth(1) {
        Some(arg) => match arg.parse::<usize>() {
            Ok(index) => TemplateRef::Index(index),
            Err(_) => TemplateRef::Name(arg),
        },
        None => manager.document().discord.current_template.clone(),
    };

    let message = manager.compose_announcement(&reference, Local::now())?;
    println!("{message}");

    Ok(())
}
