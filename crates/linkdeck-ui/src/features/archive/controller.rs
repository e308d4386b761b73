//! Archive toggle controller.
//!
//! # Design
//! - One confirmation sends exactly one request; there is no retry.
//! - Both cache invalidations run together and finish before the dialog closes.
//! - Every failure leaves the dialog open and interactive.

use crate::core::cache::{CacheInvalidator, Revalidate};
use crate::core::http::{ApiRequest, HttpTransport};
use crate::core::notifications::Notifier;
use crate::features::archive::logic::{ArchiveDirection, ArchiveRoute, LinkScope};
use crate::features::archive::state::{DialogHandle, InFlightGuard};
use futures_util::future::join;
use linkdeck_api_models::Link;
use log::{debug, info, warn};
use thiserror::Error;

/// Toast text used when no response was received.
pub const NETWORK_ERROR_MESSAGE: &str = "Failed to reach the server. Please try again.";

/// Reasons a link cannot be toggled.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ToggleRequestError {
    /// The link has no identifier to address.
    #[error("link has no identifier")]
    MissingId,
    /// The link has no destination URL.
    #[error("link has no destination url")]
    MissingUrl,
    /// The route table has no row for the direction.
    #[error("no archive route for {0:?}")]
    Unrouted(ArchiveDirection),
}

/// A validated archive or unarchive request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ToggleRequest {
    link_id: String,
    route: ArchiveRoute,
    scope: LinkScope,
}

impl ToggleRequest {
    /// Build a request for `link`; `archived` is the action to perform.
    ///
    /// # Errors
    /// Returns [`ToggleRequestError`] when the link id or url is blank, or
    /// when the direction has no route.
    pub fn new(link: &Link, archived: bool, scope: LinkScope) -> Result<Self, ToggleRequestError> {
        if link.id.trim().is_empty() {
            return Err(ToggleRequestError::MissingId);
        }
        if link.url.trim().is_empty() {
            return Err(ToggleRequestError::MissingUrl);
        }
        let direction = ArchiveDirection::from_archived(archived);
        let route = direction
            .route()
            .ok_or(ToggleRequestError::Unrouted(direction))?;
        Ok(Self {
            link_id: link.id.clone(),
            route: *route,
            scope,
        })
    }

    /// The HTTP request this toggle sends.
    #[must_use]
    pub fn api_request(&self) -> ApiRequest {
        ApiRequest::json(self.route.method, self.scope.archive_path(&self.link_id))
    }
}

/// How a toggle finished.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// The server accepted the change; caches were invalidated and the dialog closed.
    Toggled(ArchiveDirection),
    /// The server answered with a non-200 status.
    Rejected {
        /// Numeric HTTP status.
        status: u16,
        /// Text shown to the user.
        message: String,
    },
    /// No response was received.
    Unreachable {
        /// Transport failure detail (logged at warn level, not shown).
        detail: String,
    },
    /// Another toggle from the same dialog is still outstanding; nothing was sent.
    Busy,
}

/// Sends archive toggles and applies their side effects.
pub struct ToggleController<'a, T: ?Sized, C: ?Sized, N: ?Sized> {
    transport: &'a T,
    cache: &'a C,
    notifier: &'a N,
}

impl<'a, T, C, N> ToggleController<'a, T, C, N>
where
    T: HttpTransport + ?Sized,
    C: CacheInvalidator + ?Sized,
    N: Notifier + ?Sized,
{
    /// Wire a controller to its transport, cache and notification service.
    pub const fn new(transport: &'a T, cache: &'a C, notifier: &'a N) -> Self {
        Self {
            transport,
            cache,
            notifier,
        }
    }

    /// Send `request` on behalf of `dialog` and apply the result.
    #[allow(clippy::future_not_send)]
    pub async fn toggle<D>(&self, request: &ToggleRequest, dialog: &D) -> ToggleOutcome
    where
        D: DialogHandle + ?Sized,
    {
        let direction = request.route.direction;
        let Some(_in_flight) = InFlightGuard::acquire(dialog) else {
            debug!("archive toggle for {} already in flight", request.link_id);
            return ToggleOutcome::Busy;
        };

        let api_request = request.api_request();
        debug!(
            "sending archive toggle: {} {}",
            api_request.method.as_str(),
            api_request.path
        );

        match self.transport.send(api_request).await {
            Ok(response) if response.is_ok() => {
                let links_prefix = request.scope.links_prefix();
                let count_prefix = request.scope.count_prefix();
                let (listed, counted) = join(
                    self.cache.invalidate(&links_prefix, Revalidate::Lazy),
                    self.cache.invalidate(&count_prefix, Revalidate::Immediate),
                )
                .await;
                debug!(
                    "invalidated {} listing and {} count queries",
                    listed.len(),
                    counted.len()
                );
                dialog.close();
                self.notifier.success(&direction.success_message());
                info!("link {} {}d", request.link_id, direction.verb());
                ToggleOutcome::Toggled(direction)
            }
            Ok(response) => {
                let message = response.error_text();
                warn!(
                    "archive toggle for {} rejected: {} {}",
                    request.link_id, response.status, response.status_text
                );
                self.notifier.error(&message);
                ToggleOutcome::Rejected {
                    status: response.status,
                    message,
                }
            }
            Err(err) => {
                warn!("archive toggle for {} failed: {err}", request.link_id);
                self.notifier.error(NETWORK_ERROR_MESSAGE);
                ToggleOutcome::Unreachable {
                    detail: err.to_string(),
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::cache::QueryCache;
    use crate::core::http::{ApiResponse, HttpMethod, TransportError};
    use crate::core::notifications::{NotificationsSlice, ToastKind};
    use crate::features::archive::state::test_support::RecordingDialog;
    use async_trait::async_trait;
    use linkdeck_api_models::LinksQuery;
    use log::{Level, LevelFilter, Metadata, Record};
    use serde_json::json;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;
    use std::sync::{Mutex, Once};

    static LOG_LINES: Mutex<Vec<(Level, String)>> = Mutex::new(Vec::new());
    static LOG_INIT: Once = Once::new();

    struct BufferLogger;

    impl log::Log for BufferLogger {
        fn enabled(&self, _metadata: &Metadata<'_>) -> bool {
            true
        }

        fn log(&self, record: &Record<'_>) {
            if let Ok(mut lines) = LOG_LINES.lock() {
                lines.push((record.level(), record.args().to_string()));
            }
        }

        fn flush(&self) {}
    }

    static LOGGER: BufferLogger = BufferLogger;

    fn capture_logs() {
        LOG_INIT.call_once(|| {
            log::set_logger(&LOGGER).expect("no other logger in unit tests");
            log::set_max_level(LevelFilter::Debug);
        });
    }

    fn logged(level: Level, needle: &str) -> bool {
        LOG_LINES
            .lock()
            .expect("log buffer")
            .iter()
            .any(|(at, line)| *at == level && line.contains(needle))
    }

    struct ScriptedTransport {
        reply: RefCell<Option<Result<ApiResponse, TransportError>>>,
        sent: RefCell<Vec<ApiRequest>>,
        dialog: Option<Rc<RecordingDialog>>,
        saw_in_flight: Cell<Option<bool>>,
    }

    impl ScriptedTransport {
        fn replying(reply: Result<ApiResponse, TransportError>) -> Self {
            Self {
                reply: RefCell::new(Some(reply)),
                sent: RefCell::new(Vec::new()),
                dialog: None,
                saw_in_flight: Cell::new(None),
            }
        }

        fn status(status: u16, status_text: &str) -> Self {
            Self::replying(Ok(ApiResponse {
                status,
                status_text: status_text.to_string(),
            }))
        }

        fn observing(mut self, dialog: Rc<RecordingDialog>) -> Self {
            self.dialog = Some(dialog);
            self
        }
    }

    #[async_trait(?Send)]
    impl HttpTransport for ScriptedTransport {
        async fn send(&self, request: ApiRequest) -> Result<ApiResponse, TransportError> {
            if let Some(dialog) = &self.dialog {
                self.saw_in_flight.set(Some(dialog.in_flight()));
            }
            self.sent.borrow_mut().push(request);
            self.reply
                .borrow_mut()
                .take()
                .unwrap_or_else(|| Err(TransportError::Network("no scripted reply".to_string())))
        }
    }

    fn sample_link() -> Link {
        Link {
            id: "abc123".to_string(),
            key: "promo".to_string(),
            domain: "dub.sh".to_string(),
            url: "https://example.com".to_string(),
            archived: false,
            clicks: 0,
        }
    }

    fn acme() -> LinkScope {
        LinkScope::Project("acme".to_string())
    }

    fn seeded_cache(scope: &LinkScope) -> RefCell<QueryCache> {
        let mut cache = QueryCache::default();
        let query = LinksQuery::default();
        cache.insert(scope.links_key(query), json!([]));
        cache.insert(scope.count_key(query), json!(1));
        cache.insert("/api/domains", json!([]));
        RefCell::new(cache)
    }

    fn open_dialog() -> Rc<RecordingDialog> {
        Rc::new(RecordingDialog::opened())
    }

    #[tokio::test]
    async fn scoped_archive_posts_and_invalidates_on_success() {
        let dialog = open_dialog();
        let transport = ScriptedTransport::status(200, "OK").observing(dialog.clone());
        let cache = seeded_cache(&acme());
        let notes = RefCell::new(NotificationsSlice::default());
        let request = ToggleRequest::new(&sample_link(), true, acme()).expect("valid link");

        let outcome = ToggleController::new(&transport, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert_eq!(outcome, ToggleOutcome::Toggled(ArchiveDirection::Archive));
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Post);
        assert_eq!(sent[0].path, "/api/projects/acme/links/abc123/archive");
        assert_eq!(sent[0].headers, vec![("Content-Type", "application/json")]);
        assert_eq!(transport.saw_in_flight.get(), Some(true));

        assert!(!dialog.is_open());
        assert_eq!(dialog.closed_count(), 1);
        assert!(!dialog.in_flight());

        let toasts = notes.borrow().toasts.clone();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Success);
        assert_eq!(toasts[0].message, "Successfully archived link!");

        let cache = cache.borrow();
        let query = LinksQuery::default();
        assert!(cache.needs_fetch("/api/projects/acme/links?showArchived=false"));
        assert!(cache.needs_fetch(&acme().count_key(query)));
        assert!(!cache.needs_fetch("/api/domains"));
        assert_eq!(
            cache.pending_revalidations().collect::<Vec<_>>(),
            vec![acme().count_key(query)]
        );
    }

    #[tokio::test]
    async fn unscoped_unarchive_deletes_on_the_alternate_route() {
        let dialog = open_dialog();
        let transport = ScriptedTransport::status(200, "OK");
        let cache = seeded_cache(&LinkScope::Unscoped);
        let notes = RefCell::new(NotificationsSlice::default());
        let request =
            ToggleRequest::new(&sample_link(), false, LinkScope::Unscoped).expect("valid link");

        let outcome = ToggleController::new(&transport, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert_eq!(outcome, ToggleOutcome::Toggled(ArchiveDirection::Unarchive));
        let sent = transport.sent.borrow();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].method, HttpMethod::Delete);
        assert_eq!(sent[0].path, "/api/links-app/abc123/archive");
        assert_eq!(
            notes.borrow().toasts[0].message,
            "Successfully unarchived link!"
        );

        let cache = cache.borrow();
        assert!(cache.needs_fetch("/api/links-app?showArchived=false"));
        assert!(cache.needs_fetch("/api/links/count?showArchived=false"));
        assert_eq!(
            cache.pending_revalidations().collect::<Vec<_>>(),
            vec!["/api/links/count?showArchived=false"]
        );
    }

    #[tokio::test]
    async fn rejection_reports_status_text_and_keeps_dialog_open() {
        let dialog = open_dialog();
        let transport = ScriptedTransport::status(403, "Forbidden");
        let cache = seeded_cache(&acme());
        let notes = RefCell::new(NotificationsSlice::default());
        let request = ToggleRequest::new(&sample_link(), true, acme()).expect("valid link");

        let outcome = ToggleController::new(&transport, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert_eq!(
            outcome,
            ToggleOutcome::Rejected {
                status: 403,
                message: "Forbidden".to_string()
            }
        );
        assert!(dialog.is_open());
        assert_eq!(dialog.closed_count(), 0);
        assert!(!dialog.in_flight());
        let toasts = notes.borrow().toasts.clone();
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].kind, ToastKind::Error);
        assert_eq!(toasts[0].message, "Forbidden");

        let cache = cache.borrow();
        assert!(!cache.needs_fetch(&acme().links_key(LinksQuery::default())));
        assert!(!cache.needs_fetch(&acme().count_key(LinksQuery::default())));
        assert_eq!(cache.pending_revalidations().count(), 0);
    }

    #[tokio::test]
    async fn transport_failure_clears_in_flight_and_notifies() {
        let dialog = open_dialog();
        let transport = ScriptedTransport::replying(Err(TransportError::Network(
            "connection refused".to_string(),
        )))
        .observing(dialog.clone());
        let cache = seeded_cache(&acme());
        let notes = RefCell::new(NotificationsSlice::default());
        let request = ToggleRequest::new(&sample_link(), true, acme()).expect("valid link");

        let outcome = ToggleController::new(&transport, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert!(matches!(outcome, ToggleOutcome::Unreachable { .. }));
        assert_eq!(transport.saw_in_flight.get(), Some(true));
        assert!(!dialog.in_flight());
        assert!(dialog.is_open());
        assert_eq!(notes.borrow().toasts[0].message, NETWORK_ERROR_MESSAGE);
        assert!(!cache.borrow().needs_fetch(&acme().links_key(LinksQuery::default())));
    }

    #[tokio::test]
    async fn concurrent_confirm_is_refused_without_a_request() {
        let dialog = open_dialog();
        dialog.set_in_flight(true);
        let transport = ScriptedTransport::status(200, "OK");
        let cache = seeded_cache(&acme());
        let notes = RefCell::new(NotificationsSlice::default());
        let request = ToggleRequest::new(&sample_link(), true, acme()).expect("valid link");

        let outcome = ToggleController::new(&transport, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert_eq!(outcome, ToggleOutcome::Busy);
        assert!(transport.sent.borrow().is_empty());
        assert!(notes.borrow().toasts.is_empty());
        assert!(dialog.in_flight());
    }

    #[tokio::test]
    async fn dialog_can_retry_after_a_failure() {
        let dialog = open_dialog();
        let cache = seeded_cache(&acme());
        let notes = RefCell::new(NotificationsSlice::default());
        let request = ToggleRequest::new(&sample_link(), true, acme()).expect("valid link");

        let failing = ScriptedTransport::status(500, "Internal Server Error");
        ToggleController::new(&failing, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;
        let succeeding = ScriptedTransport::status(200, "OK");
        let outcome = ToggleController::new(&succeeding, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert_eq!(outcome, ToggleOutcome::Toggled(ArchiveDirection::Archive));
        assert_eq!(dialog.closed_count(), 1);
        assert_eq!(notes.borrow().toasts.len(), 2);
    }

    #[test]
    fn blank_links_are_rejected() {
        let mut link = sample_link();
        link.url = String::new();
        assert_eq!(
            ToggleRequest::new(&link, true, acme()),
            Err(ToggleRequestError::MissingUrl)
        );
        link.id = " ".to_string();
        assert_eq!(
            ToggleRequest::new(&link, true, acme()),
            Err(ToggleRequestError::MissingId)
        );
    }

    #[test]
    fn request_resolves_its_route_up_front() {
        let request =
            ToggleRequest::new(&sample_link(), false, LinkScope::Unscoped).expect("valid link");
        let api_request = request.api_request();
        assert_eq!(api_request.method, HttpMethod::Delete);
        assert_eq!(api_request.path, "/api/links-app/abc123/archive");
    }

    #[tokio::test]
    async fn transport_failure_is_logged_as_a_warning() {
        capture_logs();
        let dialog = open_dialog();
        let transport = ScriptedTransport::replying(Err(TransportError::Network(
            "dns lookup failed".to_string(),
        )));
        let cache = seeded_cache(&acme());
        let notes = RefCell::new(NotificationsSlice::default());
        let mut link = sample_link();
        link.id = "offline-7".to_string();
        let request = ToggleRequest::new(&link, true, acme()).expect("valid link");

        let outcome = ToggleController::new(&transport, &cache, &notes)
            .toggle(&request, dialog.as_ref())
            .await;

        assert!(matches!(outcome, ToggleOutcome::Unreachable { .. }));
        assert!(logged(Level::Warn, "offline-7"));
        assert!(logged(Level::Warn, "dns lookup failed"));
        assert!(logged(Level::Debug, "POST /api/projects/acme/links/offline-7/archive"));
    }
}
