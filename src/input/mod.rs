//! Input adapters.
//!
//! Adapters here receive input from outside the process and translate it
//! into domain requests.

pub mod cli;
