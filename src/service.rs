//! Connection Service.
use crate::{request::Request, response::Response};

// ===== Service =====

/// Per-connection request handler.
///
/// Called exactly once per connection with the parsed [`Request`] and a
/// fresh zero-valued [`Response`]; the populated response it returns is
/// rendered and written back, and the connection closes.
pub trait Service {
    type Future: Future<Output = Response> + Send;

    fn call(&self, request: Request, response: Response) -> Self::Future;
}

// ===== ServiceFn =====

/// Create a [`Service`] from an async function.
pub fn service_fn<F>(f: F) -> ServiceFn<F> {
    ServiceFn { f }
}

/// A [`Service`] backed by an async function, created by [`service_fn`].
#[derive(Debug, Clone, Copy)]
pub struct ServiceFn<F> {
    f: F,
}

impl<F, Fut> Service for ServiceFn<F>
where
    F: Fn(Request, Response) -> Fut,
    Fut: Future<Output = Response> + Send,
{
    type Future = Fut;

    fn call(&self, request: Request, response: Response) -> Self::Future {
        (self.f)(request, response)
    }
}
