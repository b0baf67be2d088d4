//! `ilx-output` — persists the simulation event log.
//!
//! # Crate layout
//!
//! | Module    | Contents                                          |
//! |-----------|---------------------------------------------------|
//! | [`row`]   | `EventRow` — one persisted log event              |
//! | [`csv`]   | `CsvEventLog` — a [`Logger`][ilx_sim::Logger] writing CSV |
//! | [`error`] | `OutputError`, `OutputResult<T>`                  |
//!
//! # Error model
//!
//! [`Logger::log`][ilx_sim::Logger::log] is fire-and-forget, so write
//! failures cannot propagate at the call site.  `CsvEventLog` stores the
//! first error internally; after the run, retrieve it with
//! [`CsvEventLog::take_error`] and flush with [`CsvEventLog::finish`].

pub mod csv;
pub mod error;
pub mod row;

#[cfg(test)]
mod tests;

pub use self::csv::CsvEventLog;
pub use error::{OutputError, OutputResult};
pub use row::EventRow;
