pub mod claims_codec;
pub mod hashmap_refresh_token_store;
pub mod hashmap_user_directory;
pub mod token_exchange;
pub mod token_provider;
pub mod token_signer;

pub use hashmap_refresh_token_store::*;
pub use hashmap_user_directory::*;
pub use token_exchange::*;
pub use token_provider::*;
