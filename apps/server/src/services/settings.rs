//! Grading settings: global defaults plus per-topic overrides.

use std::collections::HashMap;

use lexiflow_core::{EffectiveSettings, GlobalSettings, TopicSettings};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct SettingsService {
    global: RwLock<GlobalSettings>,
    topics: RwLock<HashMap<Uuid, TopicSettings>>,
}

impl SettingsService {
    pub fn new(global: GlobalSettings) -> Self {
        Self {
            global: RwLock::new(global),
            topics: RwLock::new(HashMap::new()),
        }
    }

    pub async fn global(&self) -> GlobalSettings {
        self.global.read().await.clone()
    }

    pub async fn set_global(&self, settings: GlobalSettings) {
        *self.global.write().await = settings;
    }

    pub async fn all_topics(&self) -> HashMap<Uuid, TopicSettings> {
        self.topics.read().await.clone()
    }

    pub async fn topic(&self, topic_id: Uuid) -> Option<TopicSettings> {
        self.topics.read().await.get(&topic_id).cloned()
    }

    pub async fn set_topic(&self, settings: TopicSettings) {
        self.topics.write().await.insert(settings.topic_id, settings);
    }

    /// Returns whether overrides existed.
    pub async fn remove_topic(&self, topic_id: Uuid) -> bool {
        self.topics.write().await.remove(&topic_id).is_some()
    }

    /// Topic overrides only apply when exactly one topic is involved.
    pub async fn effective(&self, topic_ids: &[Uuid]) -> EffectiveSettings {
        let global = self.global().await;
        let topic = match topic_ids {
            [single] => self.topic(*single).await,
            _ => None,
        };
        EffectiveSettings::merge(&global, topic.as_ref())
    }
}
