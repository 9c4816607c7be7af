//! Short link lifecycle tests through the public API

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use scissors::config::ShortenerConfig;
use scissors::errors::ScissorsError;
use scissors::services::{ShorteningService, TinyUrlService};
use scissors::session::{
    BLANK_URL_MESSAGE, CREATE_FAILED_MESSAGE, Confirmation, FixedGate, LinkLifecycleController,
    SessionStatus, Transition,
};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Counts create calls and fails for URLs containing "broken"
#[derive(Default)]
struct CountingService {
    calls: AtomicUsize,
}

#[async_trait]
impl ShorteningService for CountingService {
    async fn create(&self, long_url: &str) -> Result<String, ScissorsError> {
        let n = self.calls.fetch_add(1, Ordering::SeqCst) + 1;
        if long_url.contains("broken") {
            return Err(ScissorsError::create_failed("HTTP 502"));
        }
        Ok(format!("https://tinyurl.com/s{}", n))
    }

    fn name(&self) -> &'static str {
        "Counting"
    }
}

fn controller() -> (LinkLifecycleController, Arc<CountingService>) {
    let service = Arc::new(CountingService::default());
    (LinkLifecycleController::new(service.clone()), service)
}

#[tokio::test]
async fn test_full_cycle_keeps_session_consistent() {
    let (mut ctl, service) = controller();
    assert!(ctl.session().is_consistent());

    assert_eq!(ctl.submit("https://example.com/a").await, Transition::Applied);
    assert_eq!(ctl.status(), SessionStatus::Ready);
    assert!(ctl.session().is_consistent());

    assert_eq!(ctl.request_removal(), Transition::Applied);
    assert_eq!(ctl.status(), SessionStatus::ConfirmingDelete);
    assert!(ctl.session().is_consistent());

    assert_eq!(ctl.confirm_removal(), Transition::Applied);
    assert_eq!(ctl.status(), SessionStatus::Idle);
    assert!(ctl.session().short_url().is_none());
    assert!(ctl.session().is_consistent());

    // 删除只在本地生效
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_second_submit_is_rejected_while_pending() {
    let (mut ctl, service) = controller();
    let request = ctl.begin_submit("https://example.com/a").unwrap();
    assert_eq!(request.long_url(), "https://example.com/a");

    let again = ctl.begin_submit("https://example.com/b");
    assert!(matches!(
        again,
        Err(Transition::Rejected {
            status: SessionStatus::Pending
        })
    ));

    let result = request.run().await;
    ctl.complete_submit(result);
    assert_eq!(ctl.session().long_url(), "https://example.com/a");
    assert_eq!(service.calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_failure_returns_to_idle_with_generic_message() {
    let (mut ctl, _) = controller();
    ctl.submit("https://broken.example.com").await;
    assert_eq!(ctl.status(), SessionStatus::Idle);
    assert_eq!(ctl.session().last_error(), Some(CREATE_FAILED_MESSAGE));

    // 重新提交会清除错误
    ctl.submit("https://example.com").await;
    assert_eq!(ctl.status(), SessionStatus::Ready);
    assert!(ctl.session().last_error().is_none());
}

#[tokio::test]
async fn test_blank_submit_issues_no_request() {
    let (mut ctl, service) = controller();
    let outcome = ctl.submit("   ").await;
    assert_eq!(outcome, Transition::BlankInput);
    assert_eq!(ctl.session().last_error(), Some(BLANK_URL_MESSAGE));
    assert_eq!(service.calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_removal_requires_ready() {
    let (mut ctl, _) = controller();
    assert!(!ctl.request_removal().is_applied());
    assert!(!ctl.confirm_removal().is_applied());
    assert!(!ctl.cancel_removal().is_applied());
    assert!(ctl.remove_with(&FixedGate(Confirmation::Confirmed)).is_none());
    assert_eq!(ctl.status(), SessionStatus::Idle);
}

#[tokio::test]
async fn test_remove_with_gate_answers() {
    let (mut ctl, _) = controller();
    ctl.submit("https://example.com").await;
    let short = ctl.session().short_url().map(str::to_string);

    let answer = ctl.remove_with(&FixedGate(Confirmation::Cancelled));
    assert_eq!(answer, Some(Confirmation::Cancelled));
    assert_eq!(ctl.status(), SessionStatus::Ready);
    assert_eq!(ctl.session().short_url().map(str::to_string), short);

    let answer = ctl.remove_with(&FixedGate(Confirmation::Confirmed));
    assert_eq!(answer, Some(Confirmation::Confirmed));
    assert_eq!(ctl.status(), SessionStatus::Idle);
}

#[tokio::test(flavor = "multi_thread")]
async fn test_controller_with_tinyurl_backend() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/create"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "data": { "tiny_url": "https://tinyurl.com/e2e" }
        })))
        .mount(&server)
        .await;

    let service = TinyUrlService::new(&ShortenerConfig {
        api_url: format!("{}/create", server.uri()),
        timeout_secs: 5,
        ..ShortenerConfig::default()
    });
    let mut ctl = LinkLifecycleController::new(Arc::new(service));
    ctl.submit("https://example.com/e2e").await;

    assert_eq!(ctl.service_name(), "TinyURL");
    assert_eq!(ctl.session().short_url(), Some("https://tinyurl.com/e2e"));
}
