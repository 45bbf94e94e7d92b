//! Stock middleware.

use std::sync::Arc;

use tracing::{debug, debug_span, trace};

use super::envelope::Event;
use super::handler::{handler_fn, BoxHandler, Handler, Middleware};
use super::options::EventOption;

/// Log every dispatch inside a `dispatch` span tagged with the event name
/// and id.
pub fn logging<P: 'static>() -> impl Middleware<P> {
    |next: BoxHandler<P>| -> BoxHandler<P> {
        Box::new(handler_fn(move |event: Event<P>| {
            let span = debug_span!("dispatch", event_name = %event.name(), event_id = %event.id());
            let _enter = span.enter();

            debug!("dispatching event");
            next.handle(event);
            debug!("event handled");
        }))
    }
}

/// Forward only the events for which `predicate` returns true.
pub fn filter<P, F>(predicate: F) -> impl Middleware<P>
where
    P: 'static,
    F: Fn(&Event<P>) -> bool + 'static,
{
    let predicate = Arc::new(predicate);
    move |next: BoxHandler<P>| -> BoxHandler<P> {
        let predicate = Arc::clone(&predicate);
        Box::new(handler_fn(move |event: Event<P>| {
            if predicate(&event) {
                next.handle(event);
            } else {
                trace!(event_name = %event.name(), event_id = %event.id(), "event filtered out");
            }
        }))
    }
}

/// Forward a decorated copy of every event, with `options` applied last.
///
/// The forwarded event gets a fresh id and timestamp. Headers and payload
/// carry over from the incoming event.
pub fn enrich<P>(options: Vec<EventOption<P>>) -> impl Middleware<P>
where
    P: Clone + 'static,
{
    let options: Arc<[EventOption<P>]> = options.into();
    move |next: BoxHandler<P>| -> BoxHandler<P> {
        let options = Arc::clone(&options);
        Box::new(handler_fn(move |event: Event<P>| {
            next.handle(event.decorate(&options));
        }))
    }
}
