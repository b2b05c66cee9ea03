//! AWS catalog for Data Center deployments.
//!
//! [`catalog`] holds the constant lists of EC2 instance types, RDS instance
//! classes and regions. [`lookup`] and [`config`] are the pieces a CLI needs
//! to validate choices against those lists and remember them.

pub mod catalog;
pub mod config;
pub mod error;
pub mod lookup;

pub use catalog::{DB_INSTANCE_TYPES, INSTANCE_TYPES, REGIONS};
pub use error::CatalogError;
pub use lookup::Category;
