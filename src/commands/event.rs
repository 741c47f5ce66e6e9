use anyhow::Result;
use owo_colors::OwoColorize;
use sharedcal_core::Clock;
use sharedcal_core::board::{events_on, remove_by_id};
use sharedcal_core::iso_date::{parse_iso_date, to_iso_date};
use sharedcal_core::records::{CalendarEvent, Place};
use sharedcal_core::store::KeyValueStore;

use super::Context;
use crate::EventCommand;
use crate::render::render_event;

pub fn output<K: KeyValueStore, C: Clock>(
    ctx: &Context<K, C>,
    command: EventCommand,
) -> Result<String> {
    let bucket = ctx.store.events();
    let mut events = bucket.load();

    match command {
        EventCommand::Add {
            date,
            title,
            description,
            location,
            lat,
            lon,
        } => {
            let user = ctx.require_user()?;
            let date = parse_iso_date(&date)?;
            let place = location.map(|name| Place { name, lat, lon });

            let event = CalendarEvent::new(date, &title, &description, &user.name, place)?;
            let line = format!("{} {}", "Added".green(), render_event(&event));
            events.push(event);
            bucket.save(&events);
            Ok(line)
        }
        EventCommand::List { date } => {
            let listed: Vec<&CalendarEvent> = match date {
                Some(date) => events_on(&events, &to_iso_date(parse_iso_date(&date)?)),
                None => {
                    let mut all: Vec<_> = events.iter().collect();
                    all.sort_by(|a, b| a.date.cmp(&b.date));
                    all
                }
            };
            if listed.is_empty() {
                return Ok("No events found".dimmed().to_string());
            }
            let lines: Vec<_> = listed.into_iter().map(render_event).collect();
            Ok(lines.join("\n"))
        }
        EventCommand::Delete { id } => {
            let removed = remove_by_id(&mut events, &id)?;
            bucket.save(&events);
            Ok(format!("{} {}", "Deleted".red(), removed.title))
        }
    }
}

pub fn run<K: KeyValueStore, C: Clock>(ctx: &Context<K, C>, command: EventCommand) -> Result<()> {
    println!("{}", output(ctx, command)?);
    Ok(())
}
