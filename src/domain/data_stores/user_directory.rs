use crate::domain::{Email, User};

use super::UserDirectoryError;

/// Read-mostly directory of principals. The token subsystem only ever looks
/// users up; insertion exists for seeding and tests.
#[async_trait::async_trait]
pub trait UserDirectory: Send + Sync {
    async fn add_user(&mut self, user: User) -> Result<(), UserDirectoryError>;
    async fn find_by_id(&self, id: i64) -> Result<User, UserDirectoryError>;
    async fn find_by_email(&self, email: &Email) -> Result<User, UserDirectoryError>;
}
