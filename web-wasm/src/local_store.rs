//! localStorageによる履歴の保存先

use clean_sea_vision_common::{KeyValueStore, StorageError};
use web_sys::Storage;

/// ブラウザのlocalStorage
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStore;

fn local_storage() -> Option<Storage> {
    web_sys::window()?.local_storage().ok().flatten()
}

impl KeyValueStore for LocalStore {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let storage = local_storage().ok_or_else(|| StorageError::Read("localStorage is unavailable".into()))?;
        storage
            .get_item(key)
            .map_err(|e| StorageError::Read(format!("{:?}", e)))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or_else(|| StorageError::Write("localStorage is unavailable".into()))?;
        // 容量超過(QuotaExceededError)もここで返る
        storage
            .set_item(key, value)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let storage = local_storage().ok_or_else(|| StorageError::Write("localStorage is unavailable".into()))?;
        storage
            .remove_item(key)
            .map_err(|e| StorageError::Write(format!("{:?}", e)))
    }
}
