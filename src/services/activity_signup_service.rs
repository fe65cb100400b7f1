use serde::Serialize;

use crate::database::ActivityCatalog;
use crate::error::SignupError;

/// Confirmation returned by a successful signup or unregister.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageView {
    pub message: String,
}

pub fn signup(
    catalog: &ActivityCatalog,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, SignupError> {
    // Validated inside the lookup so an unknown activity is reported first.
    let email = catalog.update(activity_name, |activity| {
        let email = normalize_email(email)?;
        activity.register(email.clone())?;
        Ok(email)
    })?;

    Ok(MessageView {
        message: format!("Signed up {} for {}", email, activity_name),
    })
}

pub fn unregister(
    catalog: &ActivityCatalog,
    activity_name: &str,
    email: &str,
) -> Result<MessageView, SignupError> {
    let email = email.trim();

    catalog.update(activity_name, |activity| activity.unregister(email))?;

    Ok(MessageView {
        message: format!("Unregistered {} from {}", email, activity_name),
    })
}

/// Trims the address and applies a minimal shape check: one `@`, a
/// non-empty local part and a dotted domain, no whitespace.
pub fn normalize_email(raw: &str) -> Result<String, SignupError> {
    let email = raw.trim();
    if email.is_empty() || email.chars().any(char::is_whitespace) {
        return Err(SignupError::InvalidEmail);
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(SignupError::InvalidEmail);
    };
    if local.is_empty() || domain.contains('@') {
        return Err(SignupError::InvalidEmail);
    }
    if !domain.contains('.') || domain.starts_with('.') || domain.ends_with('.') {
        return Err(SignupError::InvalidEmail);
    }

    Ok(email.to_string())
}
