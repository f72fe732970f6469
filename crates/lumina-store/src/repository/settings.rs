//! # Settings Repository
//!
//! One settings blob under a single key. Loading merges whatever is
//! stored over compiled-in defaults, so a partial blob written by an
//! older build still yields a complete [`Settings`] value, and keys this
//! build does not know about survive the next save untouched.

use tracing::debug;

use lumina_core::Settings;

use crate::error::StoreResult;
use crate::kv::{KvStore, KEY_SETTINGS};

/// Repository for application settings.
#[derive(Debug, Clone)]
pub struct SettingsRepository {
    kv: KvStore,
}

impl SettingsRepository {
    /// Creates a new SettingsRepository.
    pub fn new(kv: KvStore) -> Self {
        SettingsRepository { kv }
    }

    /// Loads settings, falling back to defaults.
    ///
    /// Missing fields in the stored blob take their default values;
    /// an absent or unreadable blob yields `Settings::default()`.
    pub async fn load(&self) -> Settings {
        self.kv
            .read_scalar(KEY_SETTINGS)
            .await
            .unwrap_or_default()
    }

    /// Persists the full settings value.
    pub async fn save(&self, settings: &Settings) -> StoreResult<()> {
        debug!(currency = %settings.currency, "Saving settings");
        self.kv.write_scalar(KEY_SETTINGS, settings).await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
