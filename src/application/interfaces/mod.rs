/// Account queries
pub mod account;
/// Login and session setters
pub mod auth;
/// Transfer metadata and transfers
pub mod transfer;

pub use account::AccountService;
pub use auth::AuthService;
pub use transfer::TransferService;
