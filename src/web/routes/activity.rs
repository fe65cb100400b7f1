use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use tracing::{debug, info, warn};

use crate::database::ActivityCatalog;
use crate::error::SignupError;
use crate::services::activity_signup_service::{self, MessageView};

#[derive(Debug, Deserialize)]
pub struct ParticipantQuery {
    pub email: Option<String>,
}

impl ParticipantQuery {
    fn email(&self) -> Result<&str, SignupError> {
        self.email.as_deref().ok_or(SignupError::MissingEmail)
    }
}

pub async fn activity_signup_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(catalog): State<ActivityCatalog>,
) -> Result<Json<MessageView>, SignupError> {
    let result = query
        .email()
        .and_then(|email| activity_signup_service::signup(&catalog, &activity_name, email));
    match result {
        Ok(view) => {
            info!(activity = %activity_name, "participant signed up");
            debug!(activity = %activity_name, message = %view.message, "signup confirmed");
            Ok(Json(view))
        }
        Err(e) => {
            warn!(activity = %activity_name, error = %e, "signup rejected");
            Err(e)
        }
    }
}

pub async fn activity_unregister_handler(
    Path(activity_name): Path<String>,
    Query(query): Query<ParticipantQuery>,
    State(catalog): State<ActivityCatalog>,
) -> Result<Json<MessageView>, SignupError> {
    let result = query
        .email()
        .and_then(|email| activity_signup_service::unregister(&catalog, &activity_name, email));
    match result {
        Ok(view) => {
            info!(activity = %activity_name, "participant unregistered");
            debug!(activity = %activity_name, message = %view.message, "unregister confirmed");
            Ok(Json(view))
        }
        Err(e) => {
            warn!(activity = %activity_name, error = %e, "unregister rejected");
            Err(e)
        }
    }
}
