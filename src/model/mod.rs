/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
/// Authenticated customer record
pub mod auth;
/// HTTP transport
pub mod http;
/// Request models for API calls
pub mod requests;
/// Response wrapper returned by every call
pub mod responses;
