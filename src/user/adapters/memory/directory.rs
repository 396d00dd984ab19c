//! Thread-safe in-memory user directory.

use async_trait::async_trait;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, RwLock};

use crate::user::{
    domain::{NewUser, Role, User, UserId, Username},
    ports::{UserDirectory, UserDirectoryError, UserDirectoryResult},
};

/// Thread-safe in-memory user directory.
#[derive(Debug, Clone, Default)]
pub struct InMemoryUserDirectory {
    state: Arc<RwLock<InMemoryDirectoryState>>,
}

#[derive(Debug, Default)]
struct InMemoryDirectoryState {
    users: HashMap<UserId, User>,
    username_index: HashMap<Username, UserId>,
}

impl InMemoryUserDirectory {
    /// Creates an empty directory.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn poisoned(err: impl ToString) -> UserDirectoryError {
    UserDirectoryError::persistence(std::io::Error::other(err.to_string()))
}

#[async_trait]
impl UserDirectory for InMemoryUserDirectory {
    async fn create(&self, user: NewUser) -> UserDirectoryResult<User> {
        let mut state = self.state.write().map_err(poisoned)?;
        if state.username_index.contains_key(&user.username) {
            return Err(UserDirectoryError::DuplicateUsername(user.username));
        }

        let created = User::new(user.username, user.role);
        state
            .username_index
            .insert(created.username().clone(), created.id());
        state.users.insert(created.id(), created.clone());
        Ok(created)
    }

    async fn update(
        &self,
        id: UserId,
        username: Username,
        role: Role,
    ) -> UserDirectoryResult<User> {
        let mut state = self.state.write().map_err(poisoned)?;
        let existing = state
            .users
            .get(&id)
            .cloned()
            .ok_or(UserDirectoryError::NotFound(id))?;

        if existing.username() != &username {
            if state.username_index.contains_key(&username) {
                return Err(UserDirectoryError::DuplicateUsername(username));
            }
            state.username_index.remove(existing.username());
            state.username_index.insert(username.clone(), id);
        }

        let updated = User::from_parts(id, username, role);
        state.users.insert(id, updated.clone());
        Ok(updated)
    }

    async fn delete(&self, id: UserId) -> UserDirectoryResult<()> {
        let mut state = self.state.write().map_err(poisoned)?;
        let removed = state
            .users
            .remove(&id)
            .ok_or(UserDirectoryError::NotFound(id))?;
        state.username_index.remove(removed.username());
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> UserDirectoryResult<Option<User>> {
        let state = self.state.read().map_err(poisoned)?;
        Ok(state.users.get(&id).cloned())
    }

    async fn find_by_username(&self, username: &Username) -> UserDirectoryResult<Option<User>> {
        let state = self.state.read().map_err(poisoned)?;
        let user = state
            .username_index
            .get(username)
            .and_then(|id| state.users.get(id))
            .cloned();
        Ok(user)
    }

    async fn find_all_by_id(&self, ids: &[UserId]) -> UserDirectoryResult<Vec<User>> {
        let state = self.state.read().map_err(poisoned)?;
        let unique: BTreeSet<UserId> = ids.iter().copied().collect();
        Ok(unique
            .iter()
            .filter_map(|id| state.users.get(id).cloned())
            .collect())
    }

    async fn find_all(&self) -> UserDirectoryResult<Vec<User>> {
        let state = self.state.read().map_err(poisoned)?;
        let mut users: Vec<User> = state.users.values().cloned().collect();
        users.sort_by(|left, right| left.username().cmp(right.username()));
        Ok(users)
    }
}
