use futures::future::{AbortHandle, Abortable};
use gloo_console::log;
use gloo_net::http::Request;
use postfeed::{FeedConfig, FetchError, Post};
use wasm_bindgen_futures::spawn_local;
use yew::Callback;

/// Fetch the most recent posts, classifying failures by where they happened.
pub async fn fetch_posts(config: &FeedConfig) -> postfeed::Result<Vec<Post>> {
    let request = Request::get(&config.endpoint())
        .query(config.query().iter().map(|(key, value)| (*key, value.as_str())))
        .build()
        .map_err(|e| FetchError::Request(e.to_string()))?;

    // fetch only rejects when no response arrived at all
    let response = request.send().await.map_err(|_| FetchError::Network)?;

    if !response.ok() {
        return Err(FetchError::status(response.status(), response.status_text()));
    }

    response
        .json::<Vec<Post>>()
        .await
        .map_err(|e| FetchError::Decode(e.to_string()))
}

/// Run [`fetch_posts`] in the background.
///
/// `settled` is never called once the returned handle has been aborted.
pub fn spawn_fetch(
    config: FeedConfig,
    settled: Callback<postfeed::Result<Vec<Post>>>,
) -> AbortHandle {
    let (handle, registration) = AbortHandle::new_pair();

    spawn_local(async move {
        match Abortable::new(fetch_posts(&config), registration).await {
            Ok(result) => settled.emit(result),
            Err(_) => log!("Fetching posts aborted"),
        }
    });

    handle
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use std::{cell::RefCell, rc::Rc, time::Duration};

    use postfeed::{FeedConfig, FetchError};
    use wasm_bindgen_test::{wasm_bindgen_test, wasm_bindgen_test_configure};
    use yew::Callback;

    use super::{fetch_posts, spawn_fetch};

    wasm_bindgen_test_configure!(run_in_browser);

    const UNREACHABLE: &str = "http://127.0.0.1:1";

    fn config(origin: &str) -> FeedConfig {
        FeedConfig {
            origin: origin.to_string(),
            ..FeedConfig::default()
        }
    }

    #[wasm_bindgen_test]
    async fn missing_endpoint_is_a_status_error() {
        // the test server has no WordPress routes
        let origin = gloo_utils::window().location().origin().unwrap();

        let error = fetch_posts(&config(&origin)).await.unwrap_err();

        assert!(matches!(error, FetchError::Status { code: 404, .. }));
        assert_eq!(error.to_string(), "404 Not Found");
    }

    #[wasm_bindgen_test]
    async fn unreachable_origin_is_a_network_error() {
        let error = fetch_posts(&config(UNREACHABLE)).await.unwrap_err();

        assert_eq!(error, FetchError::Network);
        assert_eq!(
            error.to_string(),
            "Network issue. Please try again later."
        );
    }

    #[wasm_bindgen_test]
    async fn malformed_origin_is_a_request_error() {
        let error = fetch_posts(&config("http://[")).await.unwrap_err();

        assert!(matches!(error, FetchError::Request(_)));
    }

    fn recorder() -> (
        Rc<RefCell<Vec<postfeed::Result<Vec<postfeed::Post>>>>>,
        Callback<postfeed::Result<Vec<postfeed::Post>>>,
    ) {
        let settled = Rc::new(RefCell::new(Vec::new()));
        let log = settled.clone();
        (settled, Callback::from(move |r| log.borrow_mut().push(r)))
    }

    #[wasm_bindgen_test]
    async fn spawned_fetch_reports_its_outcome() {
        let (settled, callback) = recorder();

        let _handle = spawn_fetch(config(UNREACHABLE), callback);
        for _ in 0..50 {
            if !settled.borrow().is_empty() {
                break;
            }
            yew::platform::time::sleep(Duration::from_millis(100)).await;
        }

        assert_eq!(*settled.borrow(), vec![Err(FetchError::Network)]);
    }

    #[wasm_bindgen_test]
    async fn aborted_fetch_reports_nothing() {
        let (settled, callback) = recorder();

        spawn_fetch(config(UNREACHABLE), callback).abort();
        yew::platform::time::sleep(Duration::from_millis(1_000)).await;

        assert!(settled.borrow().is_empty());
    }
}
