use anyhow::{Result, bail};
use owo_colors::OwoColorize;
use sharedcal_core::Clock;
use sharedcal_core::board::{diaries_for, remove_by_id};
use sharedcal_core::iso_date::parse_iso_date;
use sharedcal_core::records::DiaryEntry;
use sharedcal_core::store::KeyValueStore;

use super::Context;
use crate::DiaryCommand;
use crate::render::render_diary;

pub fn output<K: KeyValueStore, C: Clock>(
    ctx: &Context<K, C>,
    command: DiaryCommand,
) -> Result<String> {
    let bucket = ctx.store.diaries();
    let mut diaries = bucket.load();
    let user = ctx.require_user()?;

    match command {
        DiaryCommand::Add { content, date } => {
            let date = match date {
                Some(date) => parse_iso_date(&date)?,
                None => ctx.clock.today(),
            };
            let entry = DiaryEntry::new(date, &content, &user.name, &ctx.clock)?;
            let line = format!("{} {}", "Added".green(), render_diary(&entry));
            diaries.push(entry);
            bucket.save(&diaries);
            Ok(line)
        }
        DiaryCommand::List => {
            let mine = diaries_for(&diaries, &user.name);
            if mine.is_empty() {
                return Ok("No diary entries yet".dimmed().to_string());
            }
            let lines: Vec<_> = mine.into_iter().map(render_diary).collect();
            Ok(lines.join("\n"))
        }
        DiaryCommand::Delete { id } => {
            if diaries.iter().any(|d| d.id == id && d.created_by != user.name) {
                bail!("Diary entry {} belongs to someone else", id);
            }
            remove_by_id(&mut diaries, &id)?;
            bucket.save(&diaries);
            Ok(format!("{} diary entry", "Deleted".red()))
        }
    }
}

pub fn run<K: KeyValueStore, C: Clock>(ctx: &Context<K, C>, command: DiaryCommand) -> Result<()> {
    println!("{}", output(ctx, command)?);
    Ok(())
}
