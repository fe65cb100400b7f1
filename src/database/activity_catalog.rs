use std::collections::BTreeMap;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::warn;

use crate::database::seed_data;
use crate::error::SignupError;
use crate::models::Activity;

/// In-memory activity store shared by every request handler.
///
/// Cloning is cheap and yields a handle to the same catalog. All
/// read-modify-write sequences run under one write lock so the capacity and
/// duplicate checks cannot interleave with another request.
#[derive(Debug, Clone, Default)]
pub struct ActivityCatalog {
    activities: Arc<RwLock<BTreeMap<String, Activity>>>,
}

impl ActivityCatalog {
    /// Builds a catalog from the given activities. Names must be unique and
    /// capacities positive; offending entries are dropped.
    pub fn new(activities: impl IntoIterator<Item = Activity>) -> Self {
        let mut map = BTreeMap::new();
        for activity in activities {
            if activity.max_participants() == 0 {
                warn!(activity = %activity.name(), "skipping activity without capacity");
                continue;
            }
            if map.contains_key(activity.name()) {
                warn!(activity = %activity.name(), "skipping duplicate activity name");
                continue;
            }
            map.insert(activity.name().to_string(), activity);
        }
        Self {
            activities: Arc::new(RwLock::new(map)),
        }
    }

    /// The school catalog the service starts with.
    pub fn seeded() -> Self {
        Self::new(seed_data::school_activities())
    }

    pub fn get(&self, name: &str) -> Result<Activity, SignupError> {
        self.read()
            .get(name)
            .cloned()
            .ok_or(SignupError::ActivityNotFound)
    }

    /// Snapshot of every activity, keyed by name.
    pub fn list(&self) -> BTreeMap<String, Activity> {
        self.read().clone()
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Runs `f` against one activity while holding the write lock, so the
    /// roster checks and the change they guard cannot interleave with
    /// another request.
    pub(crate) fn update<R>(
        &self,
        name: &str,
        f: impl FnOnce(&mut Activity) -> Result<R, SignupError>,
    ) -> Result<R, SignupError> {
        let mut activities = self.write();
        let activity = activities
            .get_mut(name)
            .ok_or(SignupError::ActivityNotFound)?;
        f(activity)
    }

    // Each mutation is a single set insert or remove, so a panic elsewhere cannot
    // leave a half-applied roster behind; recovering the guard is safe.
    fn read(&self) -> RwLockReadGuard<'_, BTreeMap<String, Activity>> {
        self.activities.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, BTreeMap<String, Activity>> {
        self.activities
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess_only() -> ActivityCatalog {
        ActivityCatalog::new([Activity::new(
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
        )])
    }

    #[test]
    fn get_returns_known_activity() {
        let catalog = chess_only();
        let activity = catalog.get("Chess Club").unwrap();
        assert_eq!(activity.max_participants(), 12);
        assert_eq!(activity.participant_count(), 0);
    }

    #[test]
    fn get_unknown_activity_is_not_found() {
        let catalog = chess_only();
        assert_eq!(
            catalog.get("Knitting Circle"),
            Err(SignupError::ActivityNotFound)
        );
        assert_eq!(catalog.get("chess club"), Err(SignupError::ActivityNotFound));
    }

    #[test]
    fn update_unknown_activity_never_runs_closure() {
        let catalog = chess_only();
        let result = catalog.update("Knitting Circle", |_| -> Result<(), SignupError> {
            panic!("closure must not run for unknown activities")
        });
        assert_eq!(result, Err(SignupError::ActivityNotFound));
    }

    #[test]
    fn clones_share_the_same_rosters() {
        let catalog = chess_only();
        let handle = catalog.clone();
        handle
            .update("Chess Club", |a| a.register("a@example.com".to_string()))
            .unwrap();
        let roster: Vec<String> = catalog
            .get("Chess Club")
            .unwrap()
            .participants()
            .map(str::to_string)
            .collect();
        assert_eq!(roster, vec!["a@example.com"]);
    }

    #[test]
    fn list_is_a_detached_snapshot() {
        let catalog = chess_only();
        let snapshot = catalog.list();
        catalog
            .update("Chess Club", |a| a.register("late@example.com".to_string()))
            .unwrap();
        assert_eq!(snapshot["Chess Club"].participant_count(), 0);
    }

    #[test]
    fn duplicate_names_and_zero_capacity_are_dropped() {
        let catalog = ActivityCatalog::new([
            Activity::new("Chess Club", "first", "Fridays", 12),
            Activity::new("Chess Club", "second", "Mondays", 4),
            Activity::new("Ghost Club", "nobody fits", "Never", 0),
        ]);
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get("Chess Club").unwrap().description(), "first");
    }

    #[test]
    fn rejected_update_leaves_roster_unchanged() {
        let catalog = ActivityCatalog::new([
            Activity::new("Chess Club", "Chess", "Fridays", 1).with_participants(["a@example.com"]),
        ]);

        let duplicate = catalog.update("Chess Club", |a| a.register("a@example.com".to_string()));
        let overflow = catalog.update("Chess Club", |a| a.register("b@example.com".to_string()));

        assert_eq!(duplicate, Err(SignupError::AlreadyRegistered));
        assert_eq!(overflow, Err(SignupError::CapacityExceeded));
        let activity = catalog.get("Chess Club").unwrap();
        assert_eq!(activity.name(), "Chess Club");
        assert_eq!(activity.max_participants(), 1);
        assert_eq!(activity.participants().collect::<Vec<_>>(), vec!["a@example.com"]);
    }

    #[test]
    fn seeded_catalog_respects_capacity() {
        let catalog = ActivityCatalog::seeded();
        assert!(!catalog.is_empty());
        for activity in catalog.list().values() {
            assert!(activity.participant_count() <= activity.max_participants());
        }
    }
}
