use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf, sync::RwLock};

use crate::session::DEFAULT_REFRESH_INTERVAL_SECS;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationSettings {
    /// Base URL of the MAPE-K backend.
    pub base_url: String,
    /// Clinician specialty used for default prioritization.
    pub specialty: Option<String>,
    pub refresh_interval_secs: u64,
}

impl Default for AdaptationSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8000".into(),
            specialty: None,
            refresh_interval_secs: DEFAULT_REFRESH_INTERVAL_SECS,
        }
    }
}

pub struct SettingsStore {
    path: PathBuf,
    data: RwLock<AdaptationSettings>,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Result<Self> {
        let data = if path.exists() {
            let contents = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read settings from {}", path.display()))?;
            serde_json::from_str(&contents).unwrap_or_default()
        } else {
            AdaptationSettings::default()
        };

        Ok(Self {
            path,
            data: RwLock::new(data),
        })
    }

    pub fn adaptation(&self) -> AdaptationSettings {
        self.data.read().unwrap().clone()
    }

    pub fn update_adaptation(&self, settings: AdaptationSettings) -> Result<()> {
        {
            let mut guard = self.data.write().unwrap();
            *guard = settings;
            self.persist(&guard)?;
        }
        Ok(())
    }

    fn persist(&self, data: &AdaptationSettings) -> Result<()> {
        let serialized = serde_json::to_string_pretty(data)?;
        fs::write(&self.path, serialized)
            .with_context(|| format!("Failed to write settings to {}", self.path.display()))
    }
}

impl SettingsStore {
    #[allow(dead_code)]
    pub fn reload(&self) -> Result<()> {
        let contents = fs::read_to_string(&self.path)?;
        let data: AdaptationSettings = serde_json::from_str(&contents)?;
        let mut guard = self.data.write().unwrap();
        *guard = data;
        Ok(())
    }
}
