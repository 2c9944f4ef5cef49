/// A persisted refresh token: an opaque token string mapping to the owning
/// user. Created when a principal completes primary authentication.
#[derive(Clone, Debug, PartialEq)]
pub struct RefreshTokenRecord {
    pub token: String,
    pub user_id: i64,
}
