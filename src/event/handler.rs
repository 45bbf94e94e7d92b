//! Handlers consume events; middleware wraps handlers.
//!
//! Dispatch is synchronous and returns nothing. A panicking handler unwinds
//! straight through every middleware to whoever called `handle`.

use std::sync::Arc;

use tracing::trace;

use super::envelope::Event;

/// Anything that consumes an event
pub trait Handler<P = serde_json::Value> {
    fn handle(&self, event: Event<P>);
}

pub type BoxHandler<P = serde_json::Value> = Box<dyn Handler<P>>;

impl<P, H: Handler<P> + ?Sized> Handler<P> for Box<H> {
    fn handle(&self, event: Event<P>) {
        (**self).handle(event)
    }
}

impl<P, H: Handler<P> + ?Sized> Handler<P> for Arc<H> {
    fn handle(&self, event: Event<P>) {
        (**self).handle(event)
    }
}

/// Adapts a plain function or closure into a [`Handler`]
#[derive(Clone, Copy)]
pub struct HandlerFn<F>(pub F);

impl<P, F> Handler<P> for HandlerFn<F>
where
    F: Fn(Event<P>),
{
    fn handle(&self, event: Event<P>) {
        (self.0)(event)
    }
}

pub fn handler_fn<F>(f: F) -> HandlerFn<F> {
    HandlerFn(f)
}

/// Turns a handler into another handler that wraps it.
///
/// Implemented for every `Fn(BoxHandler<P>) -> BoxHandler<P>`, so most
/// middleware is just a closure.
pub trait Middleware<P = serde_json::Value> {
    fn wrap(&self, next: BoxHandler<P>) -> BoxHandler<P>;
}

impl<P, F> Middleware<P> for F
where
    F: Fn(BoxHandler<P>) -> BoxHandler<P>,
{
    fn wrap(&self, next: BoxHandler<P>) -> BoxHandler<P> {
        self(next)
    }
}

pub type BoxMiddleware<P = serde_json::Value> = Box<dyn Middleware<P>>;

/// Box a middleware so differently typed middlewares fit in one list
pub fn boxed<P, M>(middleware: M) -> BoxMiddleware<P>
where
    M: Middleware<P> + 'static,
{
    Box::new(middleware)
}

/// Wrap `terminal` in `middlewares`.
///
/// The first middleware is the outermost: `chain(t, [m1, m2])` behaves as
/// `m1(m2(t))`, so pre-logic runs m1 then m2 and post-logic runs m2 then m1.
pub fn chain<P, H>(terminal: H, middlewares: Vec<BoxMiddleware<P>>) -> BoxHandler<P>
where
    P: 'static,
    H: Handler<P> + 'static,
{
    trace!(layers = middlewares.len(), "building dispatch chain");

    let mut handler: BoxHandler<P> = Box::new(terminal);
    for middleware in middlewares.iter().rev() {
        handler = middleware.wrap(handler);
    }
    handler
}
