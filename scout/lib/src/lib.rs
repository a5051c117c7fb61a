//! Scout - LinkedIn lookups through the ScrapingDog API
//!
//! One lookup is one GET to `https://api.scrapingdog.com/linkedin` carrying
//! `api_key`, `type`, `linkId` and `private` as query parameters. The
//! response is classified by status code:
//!
//! - `200` → the body is parsed as JSON ([`QueryOutcome::Success`])
//! - anything else → [`QueryOutcome::Failed`] with the status code; the body
//!   is not read
//!
//! Transport failures and a non-JSON `200` body are errors
//! ([`ScoutError::Http`], [`ScoutError::InvalidJson`]).
//!
//! ## Example
//!
//! ```rust,no_run
//! use scout_lib::{ProfileQuery, RenderStyle, ScoutConfig, ScoutClient};
//!
//! # async fn example() -> scout_lib::Result<()> {
//! let client = ScoutClient::new(ScoutConfig::from_env()?)?;
//! let outcome = client.fetch(&ProfileQuery::new("some-profile-id")).await?;
//! println!("{}", outcome.render(RenderStyle::Pretty));
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;
pub mod outcome;
pub mod query;

pub use client::{ScoutClient, execute};
pub use config::{DEFAULT_ENDPOINT, ScoutConfig};
pub use error::{Result, ScoutError};
pub use outcome::{QueryOutcome, RenderStyle, failure_message};
pub use query::{ProfileQuery, ResourceType};
