//! Core modules: domain records, the credential/store manager, and shared
//! primitives.

pub mod account;
pub mod error;
pub mod meal;
pub mod output;
pub mod store;
pub mod time;
pub mod validate;
pub mod workout;
