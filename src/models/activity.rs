use indexmap::IndexSet;

use crate::error::SignupError;

/// One entry of the activity catalog.
///
/// Fields are read-only from outside; the roster only changes through
/// [`Activity::register`] and [`Activity::unregister`], which keep it
/// duplicate-free, in signup order and within `max_participants`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activity {
    name: String,
    description: String,
    schedule: String,
    max_participants: usize,
    participants: IndexSet<String>,
}

impl Activity {
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        schedule: impl Into<String>,
        max_participants: usize,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            schedule: schedule.into(),
            max_participants,
            participants: IndexSet::new(),
        }
    }

    /// Seeds the roster; duplicates and entries past capacity are skipped.
    pub fn with_participants<I, S>(mut self, emails: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for email in emails {
            let _ = self.register(email.into());
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn schedule(&self) -> &str {
        &self.schedule
    }

    pub fn max_participants(&self) -> usize {
        self.max_participants
    }

    /// Registered emails in signup order.
    pub fn participants(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.participants.iter().map(String::as_str)
    }

    pub fn participant_count(&self) -> usize {
        self.participants.len()
    }

    pub fn is_registered(&self, email: &str) -> bool {
        self.participants.contains(email)
    }

    pub fn is_full(&self) -> bool {
        self.participants.len() >= self.max_participants
    }

    pub fn spots_left(&self) -> usize {
        self.max_participants.saturating_sub(self.participants.len())
    }

    /// Adds `email` to the roster. The duplicate check runs before the
    /// capacity check; on error the roster is untouched.
    pub fn register(&mut self, email: String) -> Result<(), SignupError> {
        if self.is_registered(&email) {
            return Err(SignupError::AlreadyRegistered);
        }
        if self.is_full() {
            return Err(SignupError::CapacityExceeded);
        }
        self.participants.insert(email);
        Ok(())
    }

    /// Removes `email`, keeping the order of the remaining participants.
    pub fn unregister(&mut self, email: &str) -> Result<(), SignupError> {
        if self.participants.shift_remove(email) {
            Ok(())
        } else {
            Err(SignupError::NotRegistered)
        }
    }
}
