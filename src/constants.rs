/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/

/// Production endpoint of the Loop API, used when no base URL is given
pub const DEFAULT_BASE_URL: &str = "https://api.loop.co.ke";
/// Fixed request timeout in milliseconds
pub const DEFAULT_TIMEOUT_MS: u64 = 5000;
/// Scheme prepended to the session token in the `Authorization` header.
/// The deployed API expects it glued to the token, without a space.
pub const DEFAULT_AUTH_SCHEME: &str = "Bearer";
/// User agent string used in HTTP requests to identify this client
pub const USER_AGENT: &str = concat!("loop-client/", env!("CARGO_PKG_VERSION"));

/// Response header carrying the session token after a successful login
pub const AUTH_TOKEN_HEADER: &str = "auth-token";
/// Request header carrying the session token
pub const AUTHORIZATION_HEADER: &str = "Authorization";

/// `returnCode` sent back by the login endpoint when the credentials are rejected
pub const LOGIN_FAILED_RETURN_CODE: i64 = 3509;

/// Start date used by the expenditure analysis when none is given
pub const DEFAULT_EXPENDITURE_FROM_DATE: &str = "1970-01-01";
/// Purpose attached to transfers when none is given
pub const DEFAULT_TRANSFER_PURPOSE: &str = "Cash Transfer";
/// Transfer category for payments to a phone number
pub const MOBILE_TRANSFER_CATEGORY_ID: u32 = 39;
/// Transfer subcategory for payments to a phone number
pub const MOBILE_TRANSFER_SUBCATEGORY_ID: u32 = 43;

/// Remote endpoint paths, relative to the base URL
pub mod paths {
    /// Credentials login
    pub const LOGIN: &str = "/customer/login";
    /// Account balance of the authenticated customer
    pub const ACCOUNT_BALANCE: &str = "/customer/accounts/getAccountBalance";
    /// Income and expense analysis grouped by month
    pub const EXPENDITURE: &str = "/pfm-web/analysis/expensesincomes/get.action";
    /// All accounts of the customer
    pub const ACCOUNTS: &str = "/pfm-web/accounts/get/all.action";
    /// Transaction categories
    pub const CATEGORIES: &str = "/customer/transfers/getCategories";
    /// Supported transfer methods
    pub const TRANSFER_TYPES: &str = "/customer/transfers/getTransferTypes";
    /// Banks and their branches
    pub const BANK_BRANCHES: &str = "/customer/beneficiaries/getBankAndBranches";
    /// PesaLink channels reachable for a phone number
    pub const PESALINK_BANK_LIST: &str = "/customer/pesalink/bankList";
    /// Same-network phone number check
    pub const VALIDATE_LOOP_NUMBER: &str = "/customer/transfers/validateLoopMobileNumber";
    /// Transfers to a phone number (mobile money and PesaLink)
    pub const TRANSFER_TO_MOBILE: &str = "/customer/transfers/transferToMobile";
}

/// Query parameter carrying the start date of the expenditure analysis
pub const EXPENDITURE_FROM_DATE_PARAM: &str = "params.fromDate";
