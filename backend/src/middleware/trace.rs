//! Request correlation for the people API.
//!
//! [`Trace`] gives each request a fresh [`TraceId`], echoes it back in the
//! `trace-id` response header and logs one `request completed` event with the
//! method, path, status and latency. Error responses read the same id, so a
//! client-reported header value can be matched to server logs.
//!
//! The id lives in a Tokio task-local. Work moved to another task or a
//! blocking thread must be wrapped in [`TraceId::scope`] to keep it.

use std::future::Future;
use std::task::{Context, Poll};
use std::time::Instant;

use actix_web::Error;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::http::Method;
use actix_web::http::header::{HeaderName, HeaderValue};
use futures_util::future::{LocalBoxFuture, Ready, ready};
use tokio::task_local;
use tracing::{error, info};
use uuid::Uuid;

/// Response header carrying the request's trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";

task_local! {
    static TRACE_ID: TraceId;
}

/// Identifier shared by every log line and error body of one request.
///
/// # Examples
/// ```
/// use actix_web::HttpResponse;
/// use people_service::middleware::trace::TraceId;
///
/// async fn echo_trace() -> HttpResponse {
///     let id = TraceId::current().map(|id| id.to_string()).unwrap_or_default();
///     HttpResponse::Ok().body(id)
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TraceId(pub(crate) Uuid);

impl TraceId {
    #[rustfmt::skip]
    fn generate() -> Self { Self(Uuid::new_v4()) }

    /// The id of the request being served, or `None` outside the middleware.
    #[rustfmt::skip]
    pub fn current() -> Option<Self> { TRACE_ID.try_with(|id| *id).ok() }

    /// Run `fut` with `trace_id` as the current id.
    ///
    /// # Examples
    /// ```
    /// use people_service::middleware::trace::TraceId;
    ///
    /// # tokio::runtime::Runtime::new().expect("runtime").block_on(async {
    /// let id: TraceId = "3f2a9c1e-0000-4000-8000-000000000001".parse().expect("uuid");
    /// let seen = TraceId::scope(id, async { TraceId::current() }).await;
    /// assert_eq!(seen, Some(id));
    /// assert_eq!(TraceId::current(), None);
    /// # });
    /// ```
    pub async fn scope<Fut>(trace_id: TraceId, fut: Fut) -> Fut::Output
    where
        Fut: Future,
    {
        TRACE_ID.scope(trace_id, fut).await
    }
}

impl std::fmt::Display for TraceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TraceId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// What the completion event needs from the request, captured before the
/// request is handed to the inner service.
struct RequestLog {
    trace_id: TraceId,
    method: Method,
    path: String,
    started: Instant,
}

impl RequestLog {
    fn start(trace_id: TraceId, req: &ServiceRequest) -> Self {
        Self {
            trace_id,
            method: req.method().clone(),
            path: req.path().to_owned(),
            started: Instant::now(),
        }
    }

    fn finish<B>(self, res: &mut ServiceResponse<B>) {
        let trace_id = self.trace_id;
        match HeaderValue::from_str(&trace_id.to_string()) {
            Ok(value) => {
                res.headers_mut()
                    .insert(HeaderName::from_static(TRACE_ID_HEADER), value);
            }
            Err(error) => error!(%error, %trace_id, "trace id is not a valid header value"),
        }
        let latency_ms = u64::try_from(self.started.elapsed().as_millis()).unwrap_or(u64::MAX);
        info!(
            %trace_id,
            method = %self.method,
            path = %self.path,
            status = res.status().as_u16(),
            latency_ms,
            "request completed"
        );
    }
}

/// Middleware that assigns a [`TraceId`] per request and logs its outcome.
///
/// # Examples
/// ```
/// use actix_web::App;
/// use people_service::Trace;
/// use people_service::inbound::http::people::people_scope;
///
/// let app = App::new().wrap(Trace).service(people_scope());
/// ```
#[derive(Clone)]
pub struct Trace;

impl<S, B> Transform<S, ServiceRequest> for Trace
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type InitError = ();
    type Transform = TraceMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(TraceMiddleware { service }))
    }
}

/// Inner service built by [`Trace`]; not used directly.
pub struct TraceMiddleware<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for TraceMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<B>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(cx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let trace_id = TraceId::generate();
        let log = RequestLog::start(trace_id, &req);
        let fut = self.service.call(req);
        Box::pin(TraceId::scope(trace_id, async move {
            let mut res = fut.await?;
            log.finish(&mut res);
            Ok(res)
        }))
    }
}
