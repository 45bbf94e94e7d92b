//! Event envelopes and handler dispatch.
//!
//! - `envelope`: the [`Event`] type, reserved header names, construction and
//!   derivation (`new`, `duplicate`, `decorate`)
//! - `options`: ordered transforms applied while building events
//! - `handler`: the [`Handler`] capability, [`Middleware`] and [`chain`]
//! - `middleware`: stock logging, filtering and enrichment layers
//! - `recorder`: an in-memory terminal handler
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//!
//! use dxkit::event::{self, chain, middleware, with_header, Event, Handler, Recorder};
//!
//! let recorder: Arc<Recorder> = Arc::new(Recorder::new());
//! let dispatch = chain(
//!     Arc::clone(&recorder),
//!     vec![event::boxed(middleware::logging())],
//! );
//!
//! let placed: Event = Event::new("OrderPlaced", &[with_header(event::HEADER_AGGREGATE_ID, "42")]);
//! dispatch.handle(placed.decorate(&[with_header("Step", "confirm")]));
//!
//! let seen = &recorder.events()[0];
//! assert_eq!(seen.header(event::HEADER_AGGREGATE_ID), "42");
//! assert_ne!(seen.id(), placed.id());
//! ```

pub mod envelope;
pub mod handler;
pub mod middleware;
pub mod options;
pub mod recorder;

pub use envelope::{
    Event, HEADER_AGGREGATE_ID, HEADER_AGGREGATE_TYPE, HEADER_COMMAND_ID, HEADER_EVENT_ID,
    HEADER_EVENT_NAME, HEADER_ISSUED_AT,
};
pub use handler::{boxed, chain, handler_fn, BoxHandler, BoxMiddleware, Handler, HandlerFn, Middleware};
pub use options::{with_header, with_headers, with_options, with_payload, EventOption, HeaderEntry};
pub use recorder::Recorder;
