use std::collections::HashMap;

use crate::domain::{RefreshTokenRecord, RefreshTokenStore, RefreshTokenStoreError};

#[derive(Default)]
pub struct HashmapRefreshTokenStore {
    // token string -> record
    records: HashMap<String, RefreshTokenRecord>,
}

#[async_trait::async_trait]
impl RefreshTokenStore for HashmapRefreshTokenStore {
    async fn insert(
        &mut self,
        record: RefreshTokenRecord,
    ) -> Result<(), RefreshTokenStoreError> {
        if self.records.contains_key(&record.token) {
            return Err(RefreshTokenStoreError::TokenAlreadyExists);
        }
        self.records.insert(record.token.clone(), record);
        Ok(())
    }

    async fn lookup(&self, token: &str) -> Result<RefreshTokenRecord, RefreshTokenStoreError> {
        self.records
            .get(token)
            .cloned()
            .ok_or(RefreshTokenStoreError::TokenNotFound)
    }
}
