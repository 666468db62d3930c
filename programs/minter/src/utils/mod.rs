//! Utility Modules
//!
//! - `allocate`: system-program allocation of new program accounts
//! - `assertions`: account checks, state loading and checked arithmetic
//! - `authority`: derived authority and destination address derivation
//! - `unit_of_work`: staged, all-or-nothing record writes

pub mod allocate;
pub mod assertions;
pub mod authority;
pub mod unit_of_work;

pub use allocate::*;
pub use assertions::*;
pub use authority::*;
pub use unit_of_work::UnitOfWork;
