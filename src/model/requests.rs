/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::constants::{MOBILE_TRANSFER_CATEGORY_ID, MOBILE_TRANSFER_SUBCATEGORY_ID};
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Body of the login call
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest<'a> {
    /// Account user name
    pub user_name: &'a str,
    /// Account password
    pub password: &'a str,
}

impl fmt::Debug for LoginRequest<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginRequest")
            .field("user_name", &self.user_name)
            .field("password", &"***")
            .finish()
    }
}

/// Body carrying only the customer identifier
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    /// Customer identifier from the login record
    pub customer_id: Value,
}

/// Body carrying the customer identifier and a phone number
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct MsisdnRequest {
    /// Customer identifier from the login record
    pub customer_id: Value,
    /// Phone number being looked up
    pub msisdn: String,
}

/// Rail used to move money to a phone number
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferMethod {
    /// Interbank instant payment
    PesaLink,
    /// Mobile money wallet
    MobileMoney,
}

impl TransferMethod {
    /// Numeric code expected by the transfer endpoint
    #[must_use]
    pub fn code(self) -> u8 {
        match self {
            TransferMethod::PesaLink => 1,
            TransferMethod::MobileMoney => 4,
        }
    }
}

/// Body of a transfer to a phone number
#[derive(DebugPretty, DisplaySimple, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TransferRequest {
    /// Customer identifier from the login record
    pub customer_id: Value,
    /// Transfer category
    pub category_id: u32,
    /// Transfer subcategory
    pub subcategory_id: u32,
    /// Numeric [`TransferMethod`] code
    pub transfer_method: u8,
    /// Destination phone number
    pub msisdn: String,
    /// Amount to send; not validated locally
    pub amount: f64,
    /// Free text purpose of the transfer
    pub purpose: String,
    /// Destination bank sort code, PesaLink only
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub sort_code: Option<String>,
}

impl TransferRequest {
    /// Transfer to a mobile money wallet
    #[must_use]
    pub fn mobile_money(customer_id: Value, msisdn: &str, amount: f64, purpose: &str) -> Self {
        Self {
            customer_id,
            category_id: MOBILE_TRANSFER_CATEGORY_ID,
            subcategory_id: MOBILE_TRANSFER_SUBCATEGORY_ID,
            transfer_method: TransferMethod::MobileMoney.code(),
            msisdn: msisdn.to_string(),
            amount,
            purpose: purpose.to_string(),
            sort_code: None,
        }
    }

    /// Transfer over PesaLink to the bank identified by `sort_code`
    ///
    /// `sort_code` is one of the channels listed by the PesaLink bank list
    /// lookup for the same phone number.
    #[must_use]
    pub fn pesalink(
        customer_id: Value,
        msisdn: &str,
        amount: f64,
        sort_code: &str,
        purpose: &str,
    ) -> Self {
        Self {
            transfer_method: TransferMethod::PesaLink.code(),
            sort_code: Some(sort_code.to_string()),
            ..Self::mobile_money(customer_id, msisdn, amount, purpose)
        }
    }
}
