//! dxkit - event envelopes, handler dispatch and small generic helpers
//!
//! # Architecture
//!
//! The centre of the crate is the event envelope:
//! - An [`Event`] is a map of string headers plus an opaque payload
//! - Events are built with ordered [`EventOption`]s and derived from one
//!   another with `duplicate` and `decorate`, never mutated in place
//! - Dispatch goes through [`Handler`]s wrapped in [`Middleware`] by
//!   [`chain`]
//!
//! # Modules
//!
//! - `event`: envelopes, options, handlers and middleware
//! - `util`: identifiers, coalescing, slice helpers, assertions
//! - `config`: configuration for the CLI
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Generate identifiers
//! dxkit id --count 3
//!
//! # Build and print an event
//! dxkit event OrderPlaced -H AggregateID=42 --payload '{"total": 10}'
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod event;
pub mod util;

// Re-export main types at crate root for convenience
pub use error::{Error, Result};
pub use event::{chain, handler_fn, Event, EventOption, Handler, HandlerFn, Middleware, Recorder};
pub use util::Id;
