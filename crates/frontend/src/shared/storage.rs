use contracts::shared::persisted_filters::FilterStore;

/// `FilterStore` поверх `window.localStorage`
#[derive(Clone, Copy, Default)]
pub struct LocalFilterStore;

fn storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl FilterStore for LocalFilterStore {
    fn read(&self, key: &str) -> Option<String> {
        storage()?.get_item(key).ok().flatten()
    }

    fn write(&self, key: &str, value: &str) -> anyhow::Result<()> {
        let storage = storage().ok_or_else(|| anyhow::anyhow!("localStorage is not available"))?;
        storage
            .set_item(key, value)
            .map_err(|e| anyhow::anyhow!("localStorage write failed: {:?}", e))
    }
}
