use anyhow::Result;
use owo_colors::OwoColorize;
use sharedcal_core::Clock;
use sharedcal_core::board::{remove_by_id, sorted_todos, toggle_todo};
use sharedcal_core::records::TodoItem;
use sharedcal_core::store::KeyValueStore;

use super::Context;
use crate::TodoCommand;
use crate::render::render_todo;

pub fn output<K: KeyValueStore, C: Clock>(
    ctx: &Context<K, C>,
    command: TodoCommand,
) -> Result<String> {
    let bucket = ctx.store.todos();
    let mut todos = bucket.load();

    match command {
        TodoCommand::Add { text } => {
            let user = ctx.require_user()?;
            let todo = TodoItem::new(&text, &user.name)?;
            let line = format!("{} {}", "Added".green(), render_todo(&todo));
            todos.push(todo);
            bucket.save(&todos);
            Ok(line)
        }
        TodoCommand::List => {
            if todos.is_empty() {
                return Ok("Nothing to do".dimmed().to_string());
            }
            let lines: Vec<_> = sorted_todos(&todos).into_iter().map(render_todo).collect();
            Ok(lines.join("\n"))
        }
        TodoCommand::Toggle { id } => {
            let done = toggle_todo(&mut todos, &id)?;
            bucket.save(&todos);
            Ok(if done { "Marked done" } else { "Reopened" }.to_string())
        }
        TodoCommand::Delete { id } => {
            let removed = remove_by_id(&mut todos, &id)?;
            bucket.save(&todos);
            Ok(format!("{} {}", "Deleted".red(), removed.text))
        }
    }
}

pub fn run<K: KeyValueStore, C: Clock>(ctx: &Context<K, C>, command: TodoCommand) -> Result<()> {
    println!("{}", output(ctx, command)?);
    Ok(())
}
