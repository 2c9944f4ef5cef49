/// Authority granted to every authenticated principal.
pub const DEFAULT_AUTHORITY: &str = "ROLE_USER";

/// Authenticated-principal representation handed to downstream authorization
/// logic. Built fresh on every validated request, never cached across
/// requests.
#[derive(Debug, Clone, PartialEq)]
pub struct IdentityContext {
    /// Stable identifier of the principal, taken from the `sub` claim.
    pub principal: String,
    pub authorities: Vec<String>,
    /// The raw token string, retained for audit purposes.
    pub credential: String,
}

impl IdentityContext {
    pub fn new(principal: String, credential: String) -> Self {
        IdentityContext {
            principal,
            authorities: vec![DEFAULT_AUTHORITY.to_owned()],
            credential,
        }
    }
}
