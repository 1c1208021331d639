//! Build sessions for the playground.
//!
//! Two independent components share the [`BuildId`] contract:
//!
//! - [`ArtifactResolver`] turns a build identifier into an [`ArtifactSet`] by
//!   fetching every artifact of the build concurrently. Missing or failing
//!   artifacts degrade to absent fields; resolution itself never fails.
//! - [`SubmissionCoordinator`] sends source text to the compile endpoint,
//!   derives the new build identifier and hands the share location to a
//!   [`Navigator`].
//!
//! ```rust,no_run
//! use spg_config::PlaygroundConfig;
//! use spg_sdk::{ArtifactResolver, BuildId};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = PlaygroundConfig::from_env()?;
//! let resolver = ArtifactResolver::new(&config)?;
//! let artifacts = resolver.resolve(&BuildId::new("abc123")?).await;
//! println!("{artifacts}");
//! # Ok(())
//! # }
//! ```

pub mod artifact;
pub mod build_id;
pub mod error;
pub mod navigator;
pub mod prelude;
pub mod resolver;
pub mod submission;

pub use artifact::{ArtifactKind, ArtifactSet};
pub use build_id::BuildId;
pub use navigator::Navigator;
pub use resolver::ArtifactResolver;
pub use submission::{Submission, SubmissionCoordinator, SubmissionState};
