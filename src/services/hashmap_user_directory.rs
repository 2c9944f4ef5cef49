use std::collections::HashMap;

use crate::domain::{Email, User, UserDirectory, UserDirectoryError};

#[derive(Default)]
pub struct HashmapUserDirectory {
    users: HashMap<i64, User>,
}

#[async_trait::async_trait]
impl UserDirectory for HashmapUserDirectory {
    async fn add_user(&mut self, user: User) -> Result<(), UserDirectoryError> {
        if self.users.contains_key(&user.id) {
            return Err(UserDirectoryError::UserAlreadyExists);
        }
        self.users.insert(user.id, user);
        Ok(())
    }

    async fn find_by_id(&self, id: i64) -> Result<User, UserDirectoryError> {
        self.users
            .get(&id)
            .cloned()
            .ok_or(UserDirectoryError::UserNotFound)
    }

    async fn find_by_email(&self, email: &Email) -> Result<User, UserDirectoryError> {
        self.users
            .values()
            .find(|user| &user.email == email)
            .cloned()
            .ok_or(UserDirectoryError::UserNotFound)
    }
}
