pub mod config;
pub mod diary;
pub mod event;
pub mod month;
pub mod todo;
pub mod user;

use anyhow::{Result, anyhow};
use sharedcal_core::Clock;
use sharedcal_core::board::find_user;
use sharedcal_core::records::User;
use sharedcal_core::store::{KeyValueStore, Store};

/// What every command gets: the store, the clock and who is acting.
pub struct Context<K, C> {
    pub store: Store<K>,
    pub clock: C,
    pub user: Option<String>,
}

impl<K: KeyValueStore, C: Clock> Context<K, C> {
    /// The acting user, who must be registered.
    pub fn require_user(&self) -> Result<User> {
        let wanted = self.user.as_deref().ok_or_else(|| {
            anyhow!("No user given. Pass --user or set default_user in the config")
        })?;

        let users = self.store.users().load();
        find_user(&users, wanted)
            .cloned()
            .ok_or_else(|| anyhow!("Unknown user '{}'. Add it with `sharedcal user add`", wanted))
    }
}
