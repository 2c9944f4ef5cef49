mod create_access_token;
mod helpers;
mod me;
