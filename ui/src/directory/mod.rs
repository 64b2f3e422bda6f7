//! User directory: fetch, sort and expose the selectable users.

mod select;
pub use select::UserSelect;

use api::{ApiError, PresenceSource, User};
use dioxus::logger::tracing;

use crate::core::collate::{Collation, CollationKey};

/// One option of the user selection control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryEntry {
    pub id: u32,
    pub display_name: String,
    pub avatar_uri: Option<String>,
}

impl From<User> for DirectoryEntry {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            display_name: user.display_name,
            avatar_uri: user.avatar_uri.filter(|uri| !uri.trim().is_empty()),
        }
    }
}

/// Lifecycle of the directory on a chart page.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum DirectoryState {
    #[default]
    Loading,
    Ready(Vec<DirectoryEntry>),
    /// The control stays hidden; there is no retry.
    Failed(String),
}

/// Sort by display name under `collation`, falling back to id for equal names.
pub fn sort_users(users: Vec<User>, collation: Collation) -> Vec<DirectoryEntry> {
    let mut entries: Vec<DirectoryEntry> = users.into_iter().map(DirectoryEntry::from).collect();
    sort_entries(&mut entries, collation);
    entries
}

/// Re-sort an already loaded directory, e.g. after the language changed.
pub fn sort_entries(entries: &mut [DirectoryEntry], collation: Collation) {
    entries.sort_by_cached_key(|entry| (CollationKey::new(&entry.display_name, collation), entry.id));
}

/// Load the directory with avatars, falling back to the plain user list when
/// the backend does not serve `users_data`.
pub async fn load_directory(
    source: &dyn PresenceSource,
    collation: Collation,
) -> Result<Vec<DirectoryEntry>, ApiError> {
    let users = match source.users_data().await {
        Ok(users) => users,
        Err(ApiError::NotFound) => {
            tracing::info!("users_data unavailable, falling back to plain user list");
            source.users().await?
        }
        Err(err) => return Err(err),
    };

    let entries = sort_users(users, collation);
    tracing::debug!(count = entries.len(), "user directory loaded");
    Ok(entries)
}

/// Resolve the raw value of the selection control. The empty value (and
/// anything that is not a known id) means "no user".
pub fn find_entry<'a>(entries: &'a [DirectoryEntry], value: &str) -> Option<&'a DirectoryEntry> {
    let id: u32 = value.trim().parse().ok()?;
    entries.iter().find(|entry| entry.id == id)
}
