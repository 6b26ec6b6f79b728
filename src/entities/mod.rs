//! CRM record types
//!
//! Each record declares which of its columns are filterable and with which
//! semantic type; the search engine needs nothing else to serve it.

pub mod macros;

pub mod activity;
pub mod contact;
pub mod deal;
pub mod person;

pub use activity::{Activity, ActivityType};
pub use contact::{Contact, Gender};
pub use deal::Deal;
pub use person::Person;
