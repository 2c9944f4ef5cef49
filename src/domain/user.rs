use super::email::Email;

#[derive(PartialEq, Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: Email,
}

impl User {
    pub fn new(id: i64, email: Email) -> Self {
        User { id, email }
    }
}
