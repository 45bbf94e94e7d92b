//! The event envelope: string headers plus an opaque payload.
//!
//! Events are values. Deriving a new event (`duplicate`, `decorate`) only
//! reads the source and always returns a fresh envelope.

use std::collections::HashMap;

use chrono::{DateTime, FixedOffset, SecondsFormat, Utc};
use tracing::trace;

use super::options::EventOption;
use crate::util::Id;

/// Unique identifier, set at construction
pub const HEADER_EVENT_ID: &str = "EventID";

/// Event name, set at construction
pub const HEADER_EVENT_NAME: &str = "EventName";

/// RFC 3339 issue timestamp, set at construction
pub const HEADER_ISSUED_AT: &str = "IssuedAt";

/// Reserved for consumers; never populated automatically
pub const HEADER_AGGREGATE_TYPE: &str = "AggregateType";

/// Reserved for consumers; never populated automatically
pub const HEADER_AGGREGATE_ID: &str = "AggregateID";

/// Reserved for consumers; never populated automatically
pub const HEADER_COMMAND_ID: &str = "CommandID";

/// An event envelope.
///
/// `P` is the payload type. The envelope never looks inside the payload; it
/// is only stored, cloned on derivation and handed back. `None` means the
/// event carries no payload.
#[derive(Debug, Clone, PartialEq)]
pub struct Event<P = serde_json::Value> {
    headers: HashMap<String, String>,
    payload: Option<P>,
}

impl<P> Event<P> {
    /// Envelope with fresh managed headers and no payload
    fn issue(name: String) -> Self {
        let id = Id::new();
        let issued_at = Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true);
        trace!(event_id = %id, event_name = %name, %issued_at, "issuing event");

        let mut headers = HashMap::with_capacity(3);
        headers.insert(HEADER_EVENT_ID.to_string(), id.into());
        headers.insert(HEADER_EVENT_NAME.to_string(), name);
        headers.insert(HEADER_ISSUED_AT.to_string(), issued_at);

        Self {
            headers,
            payload: None,
        }
    }

    pub fn id(&self) -> &str {
        self.header(HEADER_EVENT_ID)
    }

    pub fn name(&self) -> &str {
        self.header(HEADER_EVENT_NAME)
    }

    /// Raw issue timestamp as stored in the headers
    pub fn issued_at(&self) -> &str {
        self.header(HEADER_ISSUED_AT)
    }

    /// Parsed issue timestamp, `None` if the header was overwritten with
    /// something that is not RFC 3339
    pub fn issued_at_time(&self) -> Option<DateTime<FixedOffset>> {
        DateTime::parse_from_rfc3339(self.issued_at()).ok()
    }

    /// Header value, or `""` when the header is absent
    pub fn header(&self, key: &str) -> &str {
        self.headers.get(key).map(String::as_str).unwrap_or("")
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    pub fn into_payload(self) -> Option<P> {
        self.payload
    }

    pub fn into_parts(self) -> (HashMap<String, String>, Option<P>) {
        (self.headers, self.payload)
    }

    pub(crate) fn set_header(&mut self, key: String, value: String) {
        self.headers.insert(key, value);
    }

    pub(crate) fn set_payload(&mut self, payload: Option<P>) {
        self.payload = payload;
    }
}

impl<P: Clone> Event<P> {
    /// Create an event named `name`, then apply `options` in order.
    ///
    /// The name is stored as given, empty or not.
    pub fn new(name: impl Into<String>, options: &[EventOption<P>]) -> Self {
        Self::issue(name.into()).apply(options)
    }

    /// Apply `options` in order, each one seeing the result of the previous
    pub fn apply(self, options: &[EventOption<P>]) -> Self {
        options.iter().fold(self, |event, option| option.apply(event))
    }

    /// Copy this event into a new envelope.
    ///
    /// A fresh envelope with the same name is issued first and all of this
    /// event's headers are then copied over it. Copied headers win, so the
    /// managed `EventID` and `IssuedAt` of the source are carried over
    /// rather than the freshly generated ones.
    pub fn duplicate(&self) -> Self {
        let mut event = Self::issue(self.name().to_string());
        event.headers.extend(
            self.headers
                .iter()
                .map(|(key, value)| (key.clone(), value.clone())),
        );
        event.payload = self.payload.clone();
        event
    }

    /// Derive a related event with a new identity.
    ///
    /// Keeps the payload and every custom header, replaces `EventID`,
    /// `EventName` and `IssuedAt` with freshly issued values for the same
    /// name, then applies `options`.
    pub fn decorate(&self, options: &[EventOption<P>]) -> Self {
        let reissued = Self::issue(self.name().to_string());
        let mut event = self.duplicate();
        event.headers.extend(reissued.headers);
        event.apply(options)
    }
}
