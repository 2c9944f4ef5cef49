pub mod access_claims;
pub mod create_access_token_request;
pub mod create_access_token_response;
pub mod data_stores;
pub mod email;
pub mod identity;
pub mod me_response;
mod user;

pub use access_claims::*;
pub use create_access_token_request::*;
pub use create_access_token_response::*;
pub use data_stores::*;
pub use email::*;
pub use identity::*;
pub use me_response::*;
pub use user::*;
