//! Models are the data types of the system. They are immutable once built and
//! carry no behavior beyond what can be derived from their own fields.

pub mod code;
pub mod currency;
pub mod crypto;
