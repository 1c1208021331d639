//! Submission of source text to the compile endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use spg_config::PlaygroundConfig;
use spg_requests::ApiClient;
use tokio::sync::watch;
use tracing::{debug, error, info};

use crate::{build_id::BuildId, navigator::Navigator, prelude::*};

/// Endpoint of the compile service, relative to the API base.
const PERSIST_ENDPOINT: &str = "persist";

/// Whether a submission is currently running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitting,
}

#[derive(Debug, Serialize)]
struct PersistRequest<'a> {
    source: &'a str,
}

/// Response body of the compile endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PersistResponse {
    /// Exit status of the compiler; `None` when it was terminated by a signal.
    pub status: Option<i32>,
    /// Storage locator whose final segment is the build identifier.
    pub s3_url: String,
}

/// Outcome of a completed submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
    pub build_id: BuildId,
    pub status: Option<i32>,
    pub storage_url: String,
}

impl Submission {
    /// Whether the compiler succeeded and produced a document.
    pub fn compiled(&self) -> bool {
        self.status == Some(0)
    }
}

impl fmt::Display for Submission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.status {
            Some(status) => write!(f, "Build {} (status {})", self.build_id, status),
            None => write!(f, "Build {} (compiler terminated)", self.build_id),
        }
    }
}

/// Resets the submission state to idle when dropped.
struct BusyGuard<'a>(&'a watch::Sender<SubmissionState>);

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.0.send_replace(SubmissionState::Idle);
    }
}

/// Drives one submission from source text to the share page of the new build.
pub struct SubmissionCoordinator<N> {
    api: ApiClient,
    navigator: N,
    state: watch::Sender<SubmissionState>,
}

impl<N: Navigator> SubmissionCoordinator<N> {
    /// Create a coordinator talking to the configured compile endpoint.
    pub fn new(config: &PlaygroundConfig, navigator: N) -> Result<Self> {
        Ok(Self::with_client(ApiClient::new(config.api_base())?, navigator))
    }

    pub fn with_client(api: ApiClient, navigator: N) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self {
            api,
            navigator,
            state,
        }
    }

    pub fn state(&self) -> SubmissionState {
        *self.state.borrow()
    }

    /// True while a submission is in flight.
    pub fn is_busy(&self) -> bool {
        self.state() == SubmissionState::Submitting
    }

    /// Watch state transitions, e.g. to disable a submit control while busy.
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn navigator(&self) -> &N {
        &self.navigator
    }

    /// Submit `source` for compilation and navigate to the new build.
    ///
    /// Returns `Ok(None)` without any request when no source is available
    /// (`None`) or the source is empty. On success the navigator receives the
    /// share path of the new build exactly once. The state is back to
    /// [`SubmissionState::Idle`] on every return path.
    pub async fn submit(&self, source: Option<&str>) -> Result<Option<Submission>> {
        let Some(source) = source.filter(|source| !source.is_empty()) else {
            debug!("No source available, skipping submission");
            return Ok(None);
        };

        let submission = {
            let _busy = self.enter()?;
            self.persist(source)
                .await
                .inspect_err(|e| error!("Submission failed: {}", e))?
        };

        let location = submission.build_id.share_path();
        info!("{} submitted, navigating to {}", submission, location);
        self.navigator.navigate(&location);
        Ok(Some(submission))
    }

    fn enter(&self) -> Result<BusyGuard<'_>> {
        let entered = self.state.send_if_modified(|state| match *state {
            SubmissionState::Idle => {
                *state = SubmissionState::Submitting;
                true
            }
            SubmissionState::Submitting => false,
        });
        if !entered {
            return Err(Error::SubmissionInFlight);
        }
        Ok(BusyGuard(&self.state))
    }

    async fn persist(&self, source: &str) -> Result<Submission> {
        let response: PersistResponse = self
            .api
            .post_and_deserialize(PERSIST_ENDPOINT, &PersistRequest { source })
            .await?;
        debug!(
            "Compile endpoint answered status {:?} with locator {}",
            response.status, response.s3_url
        );

        let build_id = BuildId::from_locator(&response.s3_url)?;
        Ok(Submission {
            build_id,
            status: response.status,
            storage_url: response.s3_url,
        })
    }
}
