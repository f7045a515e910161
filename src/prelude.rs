/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

//! # Loop Client Prelude
//!
//! Brings the client, its service traits and the common models into scope.
//!
//! ```rust
//! use loop_client::prelude::*;
//!
//! let client = Client::new(None).expect("client");
//! assert_eq!(client.base_url(), DEFAULT_BASE_URL);
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{Config, RestApiConfig};
pub use crate::constants::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT_MS};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::AppError;

// ============================================================================
// CLIENT, SESSION AND SERVICES
// ============================================================================

pub use crate::application::auth::{Auth, Session};
pub use crate::application::client::Client;
pub use crate::application::interfaces::{AccountService, AuthService, TransferService};

// ============================================================================
// MODELS
// ============================================================================

pub use crate::model::auth::AuthenticatedUser;
pub use crate::model::requests::{TransferMethod, TransferRequest};
pub use crate::model::responses::ApiResponse;

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;
