pub(crate) mod create_access_token;
pub(crate) mod me;

// re-export items from sub-modules
pub use create_access_token::*;
pub use me::*;
