use crate::types::activity::Activity;
use dashmap::DashMap;
use std::sync::Arc;
use uuid::Uuid;

/// In-memory activity collection handed to the presentation layer. Nothing
/// is persisted; an activity lives until it is explicitly removed.
#[derive(Clone, Default)]
pub struct ActivityStore {
    activities: Arc<DashMap<Uuid, Activity>>,
}

impl ActivityStore {
    pub fn new() -> Self {
        Self {
            activities: Arc::new(DashMap::new()),
        }
    }

    pub fn insert(&self, activity: Activity) -> Uuid {
        let id = activity.id;
        self.activities.insert(id, activity);
        id
    }

    pub fn get(&self, id: &Uuid) -> Option<Activity> {
        self.activities.get(id).map(|entry| entry.value().clone())
    }

    pub fn remove(&self, id: &Uuid) -> Option<Activity> {
        self.activities.remove(id).map(|(_, activity)| activity)
    }

    pub fn all(&self) -> Vec<Activity> {
        self.activities
            .iter()
            .map(|entry| entry.value().clone())
            .collect()
    }

    pub fn len(&self) -> usize {
        self.activities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.activities.is_empty()
    }
}
