use thiserror::Error;

use crate::validation::is_valid_email;

#[derive(PartialEq, Debug, Clone, Eq, Hash)]
pub struct Email(String);

#[derive(Error, Debug, PartialEq)]
#[error("Email {0} is not valid")]
pub struct InvalidEmail(String);

impl Email {
    pub fn parse(email: String) -> Result<Email, InvalidEmail> {
        match is_valid_email(&email) {
            true => Ok(Email(email)),
            false => Err(InvalidEmail(email)),
        }
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
