use std::collections::BTreeMap;

use serde::Serialize;

use crate::database::ActivityCatalog;
use crate::models::Activity;

/// Public shape of one activity in the `GET /activities` listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ActivityView {
    pub description: String,
    pub schedule: String,
    pub max_participants: usize,
    pub participants: Vec<String>,
}

impl From<Activity> for ActivityView {
    fn from(activity: Activity) -> Self {
        Self {
            description: activity.description().to_string(),
            schedule: activity.schedule().to_string(),
            max_participants: activity.max_participants(),
            participants: activity.participants().map(str::to_string).collect(),
        }
    }
}

pub type ActivitiesView = BTreeMap<String, ActivityView>;

pub fn list_activities(catalog: &ActivityCatalog) -> ActivitiesView {
    catalog
        .list()
        .into_iter()
        .map(|(name, activity)| (name, ActivityView::from(activity)))
        .collect()
}
