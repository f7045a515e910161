/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Loop Client
//!
//! A Rust client for the Loop mobile banking REST API.
//!
//! The client keeps a small session (base URL, timeout, bearer token and the
//! authenticated customer) and exposes one async method per remote endpoint:
//! balance and expenditure queries, account listings, transfer metadata and
//! mobile-money / PesaLink transfers.
//!
//! ```rust,no_run
//! use loop_client::prelude::*;
//!
//! # async fn run() -> Result<(), AppError> {
//! setup_logger();
//! let client = Client::new(None)?;
//! client.login("username", "password").await?;
//!
//! let balance = client.check_balance().await?;
//! println!("return code: {:?}", balance.return_code());
//! # Ok(())
//! # }
//! ```

/// Application layer: configuration, session handling and the client facade
pub mod application;
/// Fixed values of the remote API
pub mod constants;
/// Error types
pub mod error;
/// Request/response models and the HTTP transport
pub mod model;
/// Commonly used types re-exported for convenience
pub mod prelude;
/// Environment and logging helpers
pub mod utils;

/// Configuration re-exported at the crate root
pub use application::config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
