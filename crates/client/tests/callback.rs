//! Callback adapter tests: delivery through the queue, draining-thread
//! semantics, and error surfacing.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use homelink_client::{ApiClient, ApiError, CallbackClient};
use homelink_core::appliance::Appliance;
use homelink_core::config::StaticConfig;
use homelink_mock_server::{run, GatewayState};
use tokio::runtime::Runtime;

fn runtime() -> Runtime {
    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(2)
        .enable_all()
        .build()
        .unwrap()
}

fn start_gateway(rt: &Runtime, state: GatewayState) -> String {
    rt.block_on(async {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(run(listener, state));
        format!("http://{addr}")
    })
}

fn client_for(base_url: &str, passphrase: &str) -> ApiClient {
    ApiClient::new(Arc::new(StaticConfig::new(base_url, passphrase)))
}

#[test]
fn test_result_is_delivered_only_through_drain() {
    let rt = runtime();
    let base_url = start_gateway(&rt, GatewayState::new("secret"));
    let client = CallbackClient::new(client_for(&base_url, "secret"), rt.handle().clone());
    let completions = client.completions();

    let delivered: Arc<Mutex<Option<Result<Vec<Appliance>, ApiError>>>> =
        Arc::new(Mutex::new(None));
    let slot = Arc::clone(&delivered);
    client.fetch_appliance_list(move |result| {
        *slot.lock().unwrap() = Some(result);
    });

    // The worker may well have finished already; the callback must still
    // wait for a drain.
    std::thread::sleep(Duration::from_millis(100));
    assert!(delivered.lock().unwrap().is_none());

    assert_eq!(completions.drain_timeout(Duration::from_secs(5)), 1);
    let result = delivered.lock().unwrap().take().unwrap();
    assert_eq!(result.unwrap().len(), 3);
}

#[test]
fn test_callbacks_run_on_the_draining_thread() {
    let rt = runtime();
    let base_url = start_gateway(&rt, GatewayState::new("secret"));
    let client = CallbackClient::new(client_for(&base_url, "secret"), rt.handle().clone());
    let completions = client.completions();

    let seen = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&seen);
    client.fetch_operation_list("light", move |result| {
        assert!(result.is_ok());
        *slot.lock().unwrap() = Some(std::thread::current().id());
    });

    assert_eq!(completions.drain_timeout(Duration::from_secs(5)), 1);
    assert_eq!(seen.lock().unwrap().unwrap(), std::thread::current().id());
}

#[test]
fn test_missing_configuration_surfaces_as_error_not_silence() {
    let rt = runtime();
    let client = CallbackClient::new(
        ApiClient::new(Arc::new(StaticConfig::unconfigured())),
        rt.handle().clone(),
    );
    let completions = client.completions();

    let delivered = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&delivered);
    client.fetch_appliance_list(move |result| {
        *slot.lock().unwrap() = Some(result);
    });

    assert_eq!(completions.drain_timeout(Duration::from_secs(5)), 1);
    let result = delivered.lock().unwrap().take().unwrap();
    assert!(matches!(result, Err(ApiError::NotConfigured)));
}

#[test]
fn test_post_operation_confirmation_arrives_via_queue() {
    let rt = runtime();
    let base_url = start_gateway(&rt, GatewayState::new("secret"));
    let client = CallbackClient::new(client_for(&base_url, "secret"), rt.handle().clone());
    let completions = client.completions();

    let delivered = Arc::new(Mutex::new(None));
    let slot = Arc::clone(&delivered);
    client.post_operation("tv", "mute", move |result| {
        *slot.lock().unwrap() = Some(result);
    });

    assert_eq!(completions.drain_timeout(Duration::from_secs(5)), 1);
    let result = delivered.lock().unwrap().take().unwrap();
    assert_eq!(result.unwrap(), "OK");
}

#[test]
fn test_concurrent_operations_all_deliver() {
    let rt = runtime();
    let base_url = start_gateway(&rt, GatewayState::new("secret"));
    let client = CallbackClient::new(client_for(&base_url, "secret"), rt.handle().clone());
    let completions = client.completions();

    let count = Arc::new(Mutex::new(0u32));
    for _ in 0..2 {
        let count = Arc::clone(&count);
        client.fetch_appliance_list(move |result| {
            assert!(result.is_ok());
            *count.lock().unwrap() += 1;
        });
    }

    let deadline = Instant::now() + Duration::from_secs(5);
    let mut drained = 0;
    while drained < 2 && Instant::now() < deadline {
        drained += completions.drain_timeout(Duration::from_millis(200));
    }
    assert_eq!(drained, 2);
    assert_eq!(*count.lock().unwrap(), 2);
}
