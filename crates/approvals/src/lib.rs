//! # Approvals
//!
//! Approval testing (a.k.a. golden-file testing): the value produced by a test
//! ("received") is compared against a developer-accepted baseline ("approved")
//! stored on disk. Both files are named after the normalized test description:
//!
//! - `<name>.approved.txt` is owned by the developer; only [`Approval::approve`] replaces it
//! - `<name>.received.txt` is rewritten on every run
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use approvals::{Approval, ApprovalsConfig, Description};
//!
//! let context = Description::new("Report renderer").child("renders totals");
//! let approval = Approval::with_config(
//!     ApprovalsConfig::with_root("tests/approvals"),
//!     &context,
//!     Some("as text"),
//!     Some("total: 42\n"),
//! )
//! .expect("approval files");
//!
//! if approval.failed().expect("readable approved file") {
//!     panic!("{}", approval.failure_message());
//! }
//! ```
//!
//! Inside a test returning `Result`, [`Approval::verify`] does the same and
//! removes the received file once the run passes.

mod approval;
mod config;
mod error;
mod namer;
mod reader;

pub use approval::Approval;
pub use config::{ApprovalsConfig, APPROVED_SUFFIX, RECEIVED_SUFFIX};
pub use error::ApprovalError;
pub use namer::{normalize, Description, TestContext};
pub use reader::{ContentReader, FsContentReader};
