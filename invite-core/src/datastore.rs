//! RSVP persistence over the hosted database's REST interface
//!
//! The site only ever inserts: one row per "yes" into the `rsvps` table.
//! Nothing is read back.

use std::sync::OnceLock;

use async_trait::async_trait;
use invite_common::RsvpRecord;
use serde::Deserialize;
use tracing::{info, warn};

use crate::config::Config;
use crate::timing::with_timeout;

/// Table the confirm dialog writes to
pub const RSVP_TABLE: &str = "rsvps";

/// Upper bound on a single insert before the attempt is reported as failed
pub const INSERT_TIMEOUT_MS: u64 = 15_000;

static GLOBAL_CLIENT: OnceLock<SupabaseClient> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum DatastoreError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("insert rejected (status {status}): {message}")]
    Rejected { status: u16, message: String },
    #[error("no response after {after_ms} ms")]
    TimedOut { after_ms: u64 },
    #[error("datastore client already installed")]
    AlreadyInstalled,
}

/// Something that can persist an RSVP.
///
/// Futures are not `Send`: in the browser the HTTP client runs on the single
/// UI thread.
#[async_trait(?Send)]
pub trait RsvpStore {
    async fn insert_rsvp(&self, record: &RsvpRecord) -> Result<(), DatastoreError>;
}

/// Error body returned by the REST layer on a failed request
#[derive(Debug, Deserialize)]
struct RestErrorBody {
    message: String,
    #[serde(default)]
    code: Option<String>,
}

/// Client for the hosted database's REST API, authenticated with the public key.
pub struct SupabaseClient {
    base_url: String,
    api_key: String,
    http: reqwest::Client,
}

impl SupabaseClient {
    pub fn new(config: &Config) -> Self {
        Self {
            base_url: config.supabase_url.as_str().trim_end_matches('/').to_string(),
            api_key: config.supabase_anon_key.clone(),
            http: reqwest::Client::new(),
        }
    }

    fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.base_url, table)
    }
}

#[async_trait(?Send)]
impl RsvpStore for SupabaseClient {
    async fn insert_rsvp(&self, record: &RsvpRecord) -> Result<(), DatastoreError> {
        let resp = self
            .http
            .post(self.table_url(RSVP_TABLE))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("Prefer", "return=minimal")
            .json(record)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.text().await.unwrap_or_default();
        let message = match serde_json::from_str::<RestErrorBody>(&body) {
            Ok(RestErrorBody {
                message,
                code: Some(code),
            }) => format!("{message} ({code})"),
            Ok(RestErrorBody { message, code: None }) => message,
            Err(_) if !body.is_empty() => body,
            Err(_) => status.canonical_reason().unwrap_or("unknown error").to_string(),
        };
        Err(DatastoreError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Insert one RSVP, failing with `TimedOut` if the store does not answer in time.
pub async fn insert_with_timeout(
    store: &dyn RsvpStore,
    record: &RsvpRecord,
    timeout_ms: u64,
) -> Result<(), DatastoreError> {
    let result = with_timeout(timeout_ms, store.insert_rsvp(record))
        .await
        .unwrap_or(Err(DatastoreError::TimedOut {
            after_ms: timeout_ms,
        }));

    match &result {
        Ok(()) => info!(
            "RSVP saved ({} guest{})",
            1 + usize::from(record.name2.is_some()),
            if record.name2.is_some() { "s" } else { "" }
        ),
        Err(e) => warn!("Failed to save RSVP: {e}"),
    }
    result
}

/// Build the process-wide client from config. Call once at startup.
pub fn install(config: &Config) -> Result<&'static SupabaseClient, DatastoreError> {
    GLOBAL_CLIENT
        .set(SupabaseClient::new(config))
        .map_err(|_| DatastoreError::AlreadyInstalled)?;
    info!("Datastore client ready for {}", config.supabase_url);
    GLOBAL_CLIENT.get().ok_or(DatastoreError::AlreadyInstalled)
}

/// The client installed by `install`, if any.
pub fn global() -> Option<&'static SupabaseClient> {
    GLOBAL_CLIENT.get()
}

#[cfg(test)]
mod tests {
    use super::*;
    use invite_common::{RsvpForm, RsvpSubmission, SubmissionStatus};
    use std::cell::RefCell;

    /// In-memory store recording every insert
    struct RecordingStore {
        inserts: RefCell<Vec<RsvpRecord>>,
        fail: bool,
    }

    impl RecordingStore {
        fn new(fail: bool) -> Self {
            Self {
                inserts: RefCell::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait(?Send)]
    impl RsvpStore for RecordingStore {
        async fn insert_rsvp(&self, record: &RsvpRecord) -> Result<(), DatastoreError> {
            self.inserts.borrow_mut().push(record.clone());
            if self.fail {
                Err(DatastoreError::Rejected {
                    status: 500,
                    message: "boom".into(),
                })
            } else {
                Ok(())
            }
        }
    }

    /// Never answers
    struct StalledStore;

    #[async_trait(?Send)]
    impl RsvpStore for StalledStore {
        async fn insert_rsvp(&self, _record: &RsvpRecord) -> Result<(), DatastoreError> {
            futures::future::pending().await
        }
    }

    async fn submit(submission: &mut RsvpSubmission, store: &dyn RsvpStore) {
        let Some(record) = submission.begin().unwrap() else {
            return;
        };
        let result = insert_with_timeout(store, &record, INSERT_TIMEOUT_MS).await;
        submission.finish(result.is_ok());
    }

    fn filled(name1: &str, name2: &str) -> RsvpSubmission {
        let mut s = RsvpSubmission::new();
        s.form = RsvpForm {
            name1: name1.into(),
            name2: name2.into(),
        };
        s
    }

    #[test]
    fn test_table_url_trims_trailing_slash() {
        let config = Config {
            supabase_url: "https://abc.supabase.co/".parse().unwrap(),
            supabase_anon_key: "k".into(),
        };
        let client = SupabaseClient::new(&config);
        assert_eq!(
            client.table_url(RSVP_TABLE),
            "https://abc.supabase.co/rest/v1/rsvps"
        );
    }

    #[tokio::test]
    async fn test_blank_companion_inserted_as_none() {
        let store = RecordingStore::new(false);
        let mut submission = filled("Alex", "");
        submit(&mut submission, &store).await;

        assert_eq!(
            *store.inserts.borrow(),
            vec![RsvpRecord {
                name1: "Alex".into(),
                name2: None
            }]
        );
        assert_eq!(submission.status(), SubmissionStatus::Success);
        assert_eq!(submission.form, RsvpForm::default());
    }

    #[tokio::test]
    async fn test_failed_insert_keeps_form() {
        let store = RecordingStore::new(true);
        let mut submission = filled("Alex", "Sam");
        submit(&mut submission, &store).await;

        assert_eq!(store.inserts.borrow().len(), 1);
        assert_eq!(submission.status(), SubmissionStatus::Error);
        assert_eq!(submission.form.name1, "Alex");
        assert_eq!(submission.form.name2, "Sam");
    }

    #[tokio::test]
    async fn test_retry_after_failure_clears_status_first() {
        let failing = RecordingStore::new(true);
        let working = RecordingStore::new(false);
        let mut submission = filled("Alex", "");
        submit(&mut submission, &failing).await;
        assert_eq!(submission.status(), SubmissionStatus::Error);

        submit(&mut submission, &working).await;
        assert_eq!(submission.status(), SubmissionStatus::Success);
        assert_eq!(working.inserts.borrow().len(), 1);
    }

    #[test]
    fn test_missing_name_issues_no_insert() {
        let store = RecordingStore::new(false);
        let mut submission = filled("", "Sam");
        assert!(submission.begin().is_err());
        assert!(store.inserts.borrow().is_empty());
        assert_eq!(submission.status(), SubmissionStatus::Unset);
    }

    #[tokio::test(start_paused = true)]
    async fn test_stalled_insert_times_out() {
        let record = RsvpRecord {
            name1: "Alex".into(),
            name2: None,
        };
        let err = insert_with_timeout(&StalledStore, &record, INSERT_TIMEOUT_MS)
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            DatastoreError::TimedOut {
                after_ms: INSERT_TIMEOUT_MS
            }
        ));
    }

    /// Captures formatted log output for the current thread
    #[derive(Clone, Default)]
    struct LogBuffer(std::sync::Arc<std::sync::Mutex<Vec<u8>>>);

    impl std::io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_outcome_logs_leave_out_guest_names() {
        let logs = LogBuffer::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(move || writer.clone())
            .with_ansi(false)
            .finish();
        let _guard = tracing::subscriber::set_default(subscriber);

        let record = RsvpRecord {
            name1: "Alexandra".into(),
            name2: Some("Samwise".into()),
        };
        insert_with_timeout(&RecordingStore::new(false), &record, INSERT_TIMEOUT_MS)
            .await
            .unwrap();
        insert_with_timeout(&RecordingStore::new(true), &record, INSERT_TIMEOUT_MS)
            .await
            .unwrap_err();

        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("RSVP saved (2 guests)"), "{output}");
        assert!(output.contains("Failed to save RSVP"), "{output}");
        assert!(!output.contains("Alexandra"), "{output}");
        assert!(!output.contains("Samwise"), "{output}");
    }

    #[test]
    fn test_install_once() {
        let config = Config {
            supabase_url: "https://abc.supabase.co".parse().unwrap(),
            supabase_anon_key: "k".into(),
        };
        assert!(install(&config).is_ok());
        assert!(global().is_some());
        assert!(matches!(
            install(&config),
            Err(DatastoreError::AlreadyInstalled)
        ));
    }
}
