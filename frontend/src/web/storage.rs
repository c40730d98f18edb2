/// Browser LocalStorage. Every failure reads as "nothing stored".
pub struct LocalStorage;

impl LocalStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window()?.local_storage().ok()?
    }

    pub fn get(key: &str) -> Option<String> {
        Self::storage()?.get_item(key).ok()?
    }

    /// Returns false when storage is unavailable (private mode, quota).
    pub fn set(key: &str, value: &str) -> bool {
        Self::storage()
            .and_then(|s| s.set_item(key, value).ok())
            .is_some()
    }
}
