//! In-memory fixture store.
//!
//! Holds every collection served by the API. Built once from a [`Dataset`]
//! and shared behind a single read/write lock.

use chrono::{DateTime, Duration, Utc};
use domain::models::{
    AnalyticsConfiguration, AuditLogEntry, Bookmark, Counter, DashboardStats, Device,
    DeviceStatus, Event, Group, NewBookmark,
};
use domain::models::dashboard::CRITICAL_EVENTS_CAP;
use domain::services::{
    classify, synthesize_audit_logs, synthesize_events, uuid_from, LayoutGenerator, Query,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::crypto::derive_seed;
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{info, warn};
use uuid::Uuid;

use crate::error::StoreError;
use crate::fixtures::{Dataset, SeedOptions};
use crate::metrics::{record_collection_size, record_mutation, SearchTimer};
use crate::search::{AuditSearch, BookmarkSearch, EventSearch};

const TOTAL_STORAGE: &str = "4 TB";
const USED_STORAGE: &str = "2.8 TB";

/// Store handle shared across request handlers.
pub type SharedStore = Arc<RwLock<FixtureStore>>;

fn device_name(d: &Device) -> Option<&str> {
    Some(d.name.as_str())
}

#[derive(Debug, Clone)]
pub struct FixtureStore {
    dataset_name: String,
    devices: Vec<Device>,
    groups: Vec<Group>,
    events: Vec<Event>,
    audit_logs: Vec<AuditLogEntry>,
    bookmarks: Vec<Bookmark>,
    analytics_configurations: Vec<AnalyticsConfiguration>,
    counters: Vec<Counter>,
    started_at: DateTime<Utc>,
}

impl FixtureStore {
    /// Builds a store from `dataset`, deriving positions and synthetic records.
    ///
    /// The same dataset, options and `now` always produce the same store.
    pub fn from_dataset(dataset: Dataset, options: &SeedOptions, now: DateTime<Utc>) -> Self {
        let layout = LayoutGenerator::new(options.seed);
        let devices: Vec<Device> = dataset
            .devices
            .into_iter()
            .map(|seed| {
                let device = Device::from_seed(seed);
                match classify(&device.name) {
                    Some(classification) => {
                        let position = layout.place(&classification, &device.name);
                        device.with_layout(position, classification.location)
                    }
                    None => device,
                }
            })
            .collect();

        let mut rng = StdRng::seed_from_u64(derive_seed(options.seed, &["records"]));
        let names: Vec<&str> = devices.iter().map(|d| d.name.as_str()).collect();
        let events = synthesize_events(&mut rng, now, &names, options.event_count);
        let audit_logs = synthesize_audit_logs(&mut rng, now, options.audit_log_count);

        let bookmarks: Vec<Bookmark> = dataset
            .bookmarks
            .into_iter()
            .map(|new| Bookmark::from_new(new, uuid_from(&mut rng), now))
            .collect();
        let counters: Vec<Counter> = dataset
            .counters
            .into_iter()
            .map(|seed| Counter {
                id: uuid_from(&mut rng),
                name: seed.name,
                configuration: seed.configuration,
                value: seed.value,
                last_reset: seed.last_reset,
            })
            .collect();

        let store = Self {
            dataset_name: dataset.name,
            devices,
            groups: dataset.groups,
            events,
            audit_logs,
            bookmarks,
            analytics_configurations: dataset.analytics_configurations,
            counters,
            started_at: now,
        };

        info!(
            dataset = %store.dataset_name,
            seed = options.seed,
            devices = store.devices.len(),
            positioned = store.positioned_device_count(),
            events = store.events.len(),
            audit_logs = store.audit_logs.len(),
            "Fixture store initialized"
        );
        store.record_sizes();
        store
    }

    pub fn into_shared(self) -> SharedStore {
        Arc::new(RwLock::new(self))
    }

    fn record_sizes(&self) {
        record_collection_size("devices", self.devices.len());
        record_collection_size("events", self.events.len());
        record_collection_size("audit_logs", self.audit_logs.len());
        record_collection_size("bookmarks", self.bookmarks.len());
        record_collection_size("counters", self.counters.len());
    }

    pub fn dataset_name(&self) -> &str {
        &self.dataset_name
    }

    /// Time elapsed since the store was built, as seen at `now`.
    pub fn uptime(&self, now: DateTime<Utc>) -> Duration {
        (now - self.started_at).max(Duration::zero())
    }

    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn audit_logs(&self) -> &[AuditLogEntry] {
        &self.audit_logs
    }

    pub fn bookmarks(&self) -> &[Bookmark] {
        &self.bookmarks
    }

    pub fn analytics_configurations(&self) -> &[AnalyticsConfiguration] {
        &self.analytics_configurations
    }

    pub fn counters(&self) -> &[Counter] {
        &self.counters
    }

    /// Number of devices carrying a layout position.
    pub fn positioned_device_count(&self) -> usize {
        self.devices.iter().filter(|d| d.has_position()).count()
    }

    /// Devices whose name is in `names`, or all devices when unconstrained.
    pub fn camera_status(&self, names: Option<Vec<String>>) -> Vec<Device> {
        Query::new().member_of(device_name, names).apply(&self.devices)
    }

    /// Activate or deactivate a device by name.
    pub fn set_device_activation(
        &mut self,
        name: &str,
        activate: bool,
    ) -> Result<Device, StoreError> {
        let Some(device) = self.devices.iter_mut().find(|d| d.name == name) else {
            warn!(camera = %name, "Activation requested for unknown camera");
            record_mutation("device_activation", "not_found");
            return Err(StoreError::not_found("Camera", name));
        };
        device.apply_activation(activate);
        info!(
            camera = %device.name,
            active = device.active,
            status = %device.status,
            "Camera activation changed"
        );
        record_mutation("device_activation", "ok");
        Ok(device.clone())
    }

    /// Zero a counter and stamp its reset time.
    pub fn reset_counter(&mut self, id: &str) -> Result<Counter, StoreError> {
        let parsed = Uuid::parse_str(id.trim()).ok();
        let Some(counter) = self
            .counters
            .iter_mut()
            .find(|c| Some(c.id) == parsed)
        else {
            warn!(counter_id = %id, "Reset requested for unknown counter");
            record_mutation("counter_reset", "not_found");
            return Err(StoreError::not_found("Counter", id));
        };
        let previous = counter.value;
        counter.reset(Utc::now());
        info!(
            counter_id = %counter.id,
            counter = %counter.name,
            previous,
            "Counter reset"
        );
        record_mutation("counter_reset", "ok");
        Ok(counter.clone())
    }

    /// Store a new bookmark ahead of all existing ones.
    pub fn insert_bookmark(&mut self, new: NewBookmark) -> Bookmark {
        let bookmark = Bookmark::from_new(new, Uuid::new_v4(), Utc::now());
        self.bookmarks.insert(0, bookmark.clone());
        info!(
            bookmark_id = %bookmark.id,
            title = %bookmark.title,
            color = %bookmark.color,
            "Bookmark created"
        );
        record_mutation("bookmark_insert", "ok");
        record_collection_size("bookmarks", self.bookmarks.len());
        bookmark
    }

    /// Remove a bookmark. Returns `false` if no bookmark has this id.
    pub fn delete_bookmark(&mut self, id: &str) -> bool {
        let before = self.bookmarks.len();
        if let Ok(parsed) = Uuid::parse_str(id.trim()) {
            self.bookmarks.retain(|b| b.id != parsed);
        }
        let deleted = self.bookmarks.len() < before;
        if deleted {
            info!(bookmark_id = %id, "Bookmark deleted");
            record_mutation("bookmark_delete", "ok");
            record_collection_size("bookmarks", self.bookmarks.len());
        } else {
            warn!(bookmark_id = %id, "Delete requested for unknown bookmark");
            record_mutation("bookmark_delete", "not_found");
        }
        deleted
    }

    pub fn search_events(&self, search: &EventSearch) -> Vec<Event> {
        let timer = SearchTimer::new("events");
        let found = search.query().apply(&self.events);
        timer.record();
        found
    }

    pub fn search_audit_logs(&self, search: &AuditSearch) -> Vec<AuditLogEntry> {
        let timer = SearchTimer::new("audit_logs");
        let found = search.query().apply(&self.audit_logs);
        timer.record();
        found
    }

    pub fn search_bookmarks(&self, search: &BookmarkSearch) -> Vec<Bookmark> {
        let timer = SearchTimer::new("bookmarks");
        let found = search.query().apply(&self.bookmarks);
        timer.record();
        found
    }

    /// Newest `limit` events.
    pub fn recent_events(&self, limit: usize) -> Vec<Event> {
        self.events.iter().take(limit).cloned().collect()
    }

    pub fn dashboard_stats(&self) -> DashboardStats {
        let critical = self
            .events
            .iter()
            .filter(|e| e.event_type.is_critical())
            .count();
        DashboardStats {
            total_cameras: self.devices.len(),
            active_cameras: self.devices.iter().filter(|d| d.active).count(),
            recording_cameras: self
                .devices
                .iter()
                .filter(|d| d.status == DeviceStatus::Recording)
                .count(),
            offline_cameras: self.devices.iter().filter(|d| !d.active).count(),
            total_events: self.events.len(),
            critical_events: critical.min(CRITICAL_EVENTS_CAP),
            total_storage: TOTAL_STORAGE.to_string(),
            used_storage: USED_STORAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::DatasetKind;
    use chrono::TimeZone;
    use domain::models::BookmarkColor;
    use domain::services::TagSet;
    use fake::faker::lorem::en::{Sentence, Words};
    use fake::Fake;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 9, 8, 0, 0).unwrap()
    }

    fn store(kind: DatasetKind) -> FixtureStore {
        FixtureStore::from_dataset(kind.load(), &SeedOptions::default(), now())
    }

    fn fake_bookmark() -> NewBookmark {
        let words: Vec<String> = Words(2..4).fake();
        NewBookmark {
            title: words.join(" "),
            color: BookmarkColor::Purple,
            cameras: vec!["Camera 3 - Loading Dock".to_string()],
            remarks: Some(Sentence(3..8).fake()),
            ..Default::default()
        }
    }

    #[test]
    fn test_store_is_reproducible() {
        let a = store(DatasetKind::Campus);
        let b = store(DatasetKind::Campus);
        assert_eq!(a.devices(), b.devices());
        assert_eq!(a.events(), b.events());
        assert_eq!(a.audit_logs(), b.audit_logs());
        assert_eq!(a.counters(), b.counters());
        assert_eq!(a.bookmarks(), b.bookmarks());
    }

    #[test]
    fn test_campus_devices_are_positioned() {
        let store = store(DatasetKind::Campus);
        assert_eq!(store.devices().len(), 81);
        assert_eq!(store.positioned_device_count(), 81);
        assert!(store.devices().iter().all(|d| d.location.is_some()));
    }

    #[test]
    fn test_site_devices_have_no_positions() {
        let store = store(DatasetKind::Site);
        assert_eq!(store.devices().len(), 16);
        assert_eq!(store.positioned_device_count(), 0);
    }

    #[test]
    fn test_synthesized_collection_sizes() {
        let store = store(DatasetKind::Site);
        assert_eq!(store.events().len(), 50);
        assert_eq!(store.audit_logs().len(), 30);
        assert_eq!(store.bookmarks().len(), 5);
        assert_eq!(store.counters().len(), 6);
        assert_eq!(store.analytics_configurations().len(), 6);
        assert!(store
            .events()
            .windows(2)
            .all(|w| w[0].timestamp >= w[1].timestamp));
    }

    #[test]
    fn test_events_reference_known_cameras() {
        let store = store(DatasetKind::Site);
        for event in store.events() {
            assert!(store.devices().iter().any(|d| d.name == event.camera));
        }
    }

    #[test]
    fn test_empty_roster_has_no_events() {
        let dataset = Dataset {
            name: "empty".to_string(),
            ..Default::default()
        };
        let store = FixtureStore::from_dataset(dataset, &SeedOptions::default(), now());
        assert!(store.events().is_empty());
        assert_eq!(store.audit_logs().len(), 30);
        assert_eq!(store.dashboard_stats().total_cameras, 0);
    }

    #[test]
    fn test_deactivate_then_activate() {
        let mut store = store(DatasetKind::Site);
        let device = store
            .set_device_activation("Camera 1 - Main Entrance", false)
            .unwrap();
        assert!(!device.active);
        assert!(!device.working);
        assert_eq!(device.status, DeviceStatus::Offline);

        let device = store
            .set_device_activation("Camera 1 - Main Entrance", true)
            .unwrap();
        assert!(device.active);
        assert!(device.working);
        assert_eq!(device.status, DeviceStatus::Online);
        assert!(store.devices().iter().all(|d| !d.working || d.active));
    }

    #[test]
    fn test_activation_unknown_camera() {
        let mut store = store(DatasetKind::Site);
        let err = store.set_device_activation("Camera 99", true).unwrap_err();
        assert_eq!(err, StoreError::not_found("Camera", "Camera 99"));
    }

    #[test]
    fn test_reset_counter() {
        let mut store = store(DatasetKind::Site);
        let id = store.counters()[0].id.to_string();
        let before = store.counters()[0].last_reset;

        let counter = store.reset_counter(&id).unwrap();
        assert_eq!(counter.value, 0);
        assert!(counter.last_reset > before);
        assert_eq!(store.counters()[0].value, 0);
    }

    #[test]
    fn test_reset_unknown_counter_leaves_counters_unchanged() {
        let mut store = store(DatasetKind::Site);
        let before = store.counters().to_vec();
        assert!(store.reset_counter("not-a-uuid").is_err());
        assert!(store.reset_counter(&Uuid::new_v4().to_string()).is_err());
        assert_eq!(store.counters(), before.as_slice());
    }

    #[test]
    fn test_insert_bookmark_is_prepended() {
        let mut store = store(DatasetKind::Site);
        let new = fake_bookmark();
        let title = new.title.clone();
        let created = store.insert_bookmark(new);
        assert_eq!(store.bookmarks().len(), 6);
        assert_eq!(store.bookmarks()[0].id, created.id);
        assert_eq!(store.bookmarks()[0].title, title);
    }

    #[test]
    fn test_delete_bookmark() {
        let mut store = store(DatasetKind::Site);
        let id = store.bookmarks()[2].id.to_string();
        assert!(store.delete_bookmark(&id));
        assert_eq!(store.bookmarks().len(), 4);
        assert!(!store.delete_bookmark(&id));
        assert!(!store.delete_bookmark("garbage"));
        assert_eq!(store.bookmarks().len(), 4);
    }

    #[test]
    fn test_camera_status_filter() {
        let store = store(DatasetKind::Site);
        assert_eq!(store.camera_status(None).len(), 16);
        let found = store.camera_status(Some(vec![
            "Camera 5 - Server Room".to_string(),
            "Camera 99".to_string(),
        ]));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Camera 5 - Server Room");
    }

    #[test]
    fn test_search_bookmarks_by_color() {
        let store = store(DatasetKind::Site);
        let search = BookmarkSearch {
            colors: TagSet::parse(Some("RED,green")),
            ..Default::default()
        };
        assert_eq!(store.search_bookmarks(&search).len(), 2);
    }

    #[test]
    fn test_recent_events() {
        let store = store(DatasetKind::Site);
        let recent = store.recent_events(10);
        assert_eq!(recent.as_slice(), &store.events()[..10]);
        assert_eq!(store.recent_events(500).len(), 50);
    }

    #[test]
    fn test_dashboard_stats_for_site() {
        let stats = store(DatasetKind::Site).dashboard_stats();
        assert_eq!(stats.total_cameras, 16);
        assert_eq!(stats.active_cameras, 14);
        assert_eq!(stats.offline_cameras, 2);
        assert_eq!(stats.recording_cameras, 8);
        assert_eq!(stats.total_events, 50);
        assert!(stats.critical_events <= CRITICAL_EVENTS_CAP);
        assert_eq!(stats.total_storage, "4 TB");
        assert_eq!(stats.used_storage, "2.8 TB");
    }

    #[test]
    fn test_uptime_never_negative() {
        let store = store(DatasetKind::Site);
        assert_eq!(store.uptime(now() - Duration::hours(1)), Duration::zero());
        assert_eq!(store.uptime(now() + Duration::minutes(90)).num_minutes(), 90);
    }

    #[test]
    fn test_shared_store_mutation_under_write_lock() {
        let shared = store(DatasetKind::Site).into_shared();
        tokio_test::block_on(async {
            let created = shared.write().await.insert_bookmark(fake_bookmark());
            let guard = shared.read().await;
            assert_eq!(guard.bookmarks()[0].id, created.id);
        });
    }
}
