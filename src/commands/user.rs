use anyhow::Result;
use owo_colors::OwoColorize;
use sharedcal_core::Clock;
use sharedcal_core::board::{UserTotals, register_user, rename_user};
use sharedcal_core::records::User;
use sharedcal_core::store::KeyValueStore;

use super::Context;
use crate::UserCommand;
use crate::render::render_totals;

pub fn output<K: KeyValueStore, C: Clock>(
    ctx: &Context<K, C>,
    command: UserCommand,
) -> Result<String> {
    let bucket = ctx.store.users();
    let mut users = bucket.load();

    match command {
        UserCommand::Add { name, email } => {
            let user = register_user(&mut users, User::new(&name, &email)?)?.clone();
            bucket.save(&users);
            Ok(format!("{} {} <{}>", "Added".green(), user.name, user.email))
        }
        UserCommand::Rename { name } => {
            let me = ctx.require_user()?;
            let renamed = rename_user(&mut users, &me.id, &name)?.clone();
            bucket.save(&users);
            Ok(format!(
                "{} {} -> {} {}",
                "Renamed".green(),
                me.name,
                renamed.name,
                "(existing records keep the old name)".dimmed()
            ))
        }
        UserCommand::List => {
            if users.is_empty() {
                return Ok("No users yet".dimmed().to_string());
            }
            let events = ctx.store.events().load();
            let todos = ctx.store.todos().load();
            let diaries = ctx.store.diaries().load();

            let lines: Vec<_> = users
                .iter()
                .map(|u| {
                    let totals = UserTotals::for_user(&u.name, &events, &todos, &diaries);
                    format!("{} <{}>", render_totals(&u.name, totals), u.email)
                })
                .collect();
            Ok(lines.join("\n"))
        }
    }
}

pub fn run<K: KeyValueStore, C: Clock>(ctx: &Context<K, C>, command: UserCommand) -> Result<()> {
    println!("{}", output(ctx, command)?);
    Ok(())
}
