use anyhow::{Result, anyhow};
use chrono::Datelike;
use sharedcal_core::board::events_on;
use sharedcal_core::iso_date::{parse_iso_date, to_iso_date};
use sharedcal_core::store::KeyValueStore;
use sharedcal_core::{Clock, MonthCursor, aggregate};

use super::Context;
use crate::render::{render_event, render_month};

/// Pick the month to show: today's unless a year or month is given, then
/// moved by `offset` months.
pub fn resolve_cursor(
    clock: &impl Clock,
    year: Option<i32>,
    month: Option<i32>,
    offset: i32,
) -> Result<MonthCursor> {
    let today = MonthCursor::today(clock);

    let base = if year.is_some() || month.is_some() {
        let year = year.unwrap_or_else(|| today.year());
        let month = month.unwrap_or_else(|| today.first_day().month() as i32);
        MonthCursor::from_year_month(year, month)
            .ok_or_else(|| anyhow!("Month {}/{} is out of range", year, month))?
    } else {
        today
    };

    Ok(base.shift(offset))
}

pub fn output<K: KeyValueStore, C: Clock>(
    ctx: &Context<K, C>,
    year: Option<i32>,
    month: Option<i32>,
    offset: i32,
    select: Option<&str>,
    json: bool,
) -> Result<String> {
    let cursor = resolve_cursor(&ctx.clock, year, month, offset)?;
    let cells = cursor.grid(&ctx.clock);

    if json {
        return Ok(serde_json::to_string_pretty(&cells)?);
    }

    let events = ctx.store.events().load();
    let counts = aggregate(&events);

    let selected = select.map(parse_iso_date).transpose()?.map(to_iso_date);
    let mut out = render_month(&cursor, &cells, &counts, selected.as_deref());

    if let Some(day) = &selected {
        out.push_str("\n\n");
        let on_day = events_on(&events, day);
        if on_day.is_empty() {
            out.push_str(&format!("No events on {}", day));
        } else {
            let lines: Vec<_> = on_day.into_iter().map(render_event).collect();
            out.push_str(&lines.join("\n"));
        }
    }

    Ok(out)
}

pub fn run<K: KeyValueStore, C: Clock>(
    ctx: &Context<K, C>,
    year: Option<i32>,
    month: Option<i32>,
    offset: i32,
    select: Option<&str>,
    json: bool,
) -> Result<()> {
    println!("{}", output(ctx, year, month, offset, select, json)?);
    Ok(())
}
