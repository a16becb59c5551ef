use serde::{Deserialize, Serialize};

/// Row inserted into the `rsvps` table
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RsvpRecord {
    pub name1: String,
    /// Companion name; serialized as `null` when absent
    pub name2: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RsvpError {
    #[error("a name is required")]
    MissingName,
}

/// Raw form input, exactly as typed
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RsvpForm {
    pub name1: String,
    pub name2: String,
}

impl RsvpForm {
    /// Validate and normalize into a record. Blank companion becomes `None`.
    pub fn to_record(&self) -> Result<RsvpRecord, RsvpError> {
        let name1 = self.name1.trim();
        if name1.is_empty() {
            return Err(RsvpError::MissingName);
        }
        let name2 = self.name2.trim();
        Ok(RsvpRecord {
            name1: name1.to_string(),
            name2: (!name2.is_empty()).then(|| name2.to_string()),
        })
    }

    pub fn clear(&mut self) {
        self.name1.clear();
        self.name2.clear();
    }
}

/// Outcome of the most recent submission attempt
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Unset,
    Success,
    Error,
}

/// Confirm-dialog state: the form plus the status of the last attempt.
///
/// The insert itself happens elsewhere; callers bracket it with `begin` and
/// `finish`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RsvpSubmission {
    pub form: RsvpForm,
    status: SubmissionStatus,
    in_flight: bool,
    name_missing: bool,
}

impl RsvpSubmission {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn status(&self) -> SubmissionStatus {
        self.status
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    /// Whether the last attempt was refused for a blank primary name
    pub fn is_name_missing(&self) -> bool {
        self.name_missing
    }

    /// Start an attempt. Clears the previous status and returns the record to
    /// insert. Returns `Ok(None)` while another attempt is still in flight.
    pub fn begin(&mut self) -> Result<Option<RsvpRecord>, RsvpError> {
        if self.in_flight {
            return Ok(None);
        }
        let record = self.form.to_record().inspect_err(|_| self.name_missing = true)?;
        self.name_missing = false;
        self.status = SubmissionStatus::Unset;
        self.in_flight = true;
        Ok(Some(record))
    }

    /// Record the insert outcome. Success clears the form; failure keeps it
    /// so the visitor can retry.
    pub fn finish(&mut self, succeeded: bool) {
        self.in_flight = false;
        if succeeded {
            self.form.clear();
            self.status = SubmissionStatus::Success;
        } else {
            self.status = SubmissionStatus::Error;
        }
    }
}
