//! Client for the Qantani Easy iDEAL payment gateway.
//!
//! The gateway speaks a nested-tag markup dialect over HTTPS POST; the
//! [`markup`] crate handles the wire format while this crate does the
//! plumbing around it:
//!
//! - [`checksum`] — SHA-1 signing of request parameters and verification
//!   of inbound callback signatures
//! - [`transport`] — the form-encoded POST carrying generated markup
//! - [`client`] — the payment operations: listing banks, executing a
//!   payment, checking a transaction's status
//!
//! # Example
//!
//! ```no_run
//! use ideal_client::{Client, Merchant};
//!
//! # async fn demo() -> Result<(), ideal_client::Error> {
//! let client = Client::new(Merchant {
//!     id: "SomeId".to_string(),
//!     key: "MyKey".to_string(),
//!     secret: "12345".to_string(),
//! })?;
//!
//! for bank in client.banks().await? {
//!     println!("{}: {}", bank.id, bank.name);
//! }
//! # Ok(())
//! # }
//! ```

pub mod checksum;
pub mod client;
pub mod error;
pub mod transport;

pub use checksum::{sign, verify};
pub use client::{Bank, Client, Merchant, Payment, Redirect, TransactionStatus};
pub use error::{Error, Result};
pub use transport::{DEFAULT_ENDPOINT, Transport};
