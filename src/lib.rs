//! # Error Handling Scenarios
//!
//! A console program that walks through eleven error conditions in a fixed
//! order, catching and reporting each one on a single line. Every scenario is
//! independent: a classified failure in one never aborts the rest.
//!
//! ## Scenarios
//!
//! 1. Open a named file for reading - `ValidationFailure` / `ResourceNotFound`
//! 2. Open a named file as a byte stream - `ValidationFailure` / `ResourceNotFound`
//! 3. Decode a record from an empty byte buffer - `UnexpectedEndOfInput`
//! 4. Open a database connection with an invalid connection string - `ConnectionFailure`
//! 5. Resolve a type by name - `ValidationFailure` / `TypeResolutionFailure`
//! 6. Divide two user-supplied integers - `DivisionByZero`
//! 7. Read through a known-absent reference - `NullReferenceAccess`
//! 8. Index a fixed-size buffer - `ValidationFailure` / `OutOfBoundsAccess`
//! 9. Cast a value to an incompatible type - `InvalidTypeCast`
//! 10. Parse a duration and pause that long - `ValidationFailure` / `InterruptedWait`
//! 11. Parse a token as an integer - `ValidationFailure` / `MalformedNumericInput`
//!
//! ## Running
//!
//! ```bash
//! cargo run
//! ```
//!
//! The program prompts on stdout and reads from stdin; scripted input works
//! too (`cargo run < script.txt`).
//!
//! ## Key Dependencies
//!
//! - `thiserror` - the classified error taxonomy
//! - `anyhow` - error context at the binary boundary
//! - `bincode` + `serde` - the record decode that runs out of bytes
//! - `rusqlite` - the connection attempt that fails locally
//! - `colored` - framing around the report stream

pub mod console;
pub mod error;
pub mod pause;
pub mod runner;
pub mod scenarios;
pub mod value;

pub use console::Console;
pub use error::{Report, ScenarioError};
pub use pause::{interrupt_pair, InterruptGate, Interrupter};
