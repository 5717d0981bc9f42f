//! API middleware.
//!
//! Only request logging lives here. Panic recovery and response headers
//! come from `tower-http` layers applied in the router.

pub mod audit;
