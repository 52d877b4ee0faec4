//! Route tree.
//!
//! ```text
//! GET  /status    health check
//! POST /submit    store a name/email submission
//! ```

pub mod status;
pub mod submission;
