use super::*;

#[test]
fn join_url_inserts_single_separator() {
    assert_eq!(join_url("https://api.example", "products"), "https://api.example/products");
    assert_eq!(join_url("https://api.example/", "/products"), "https://api.example/products");
}

#[test]
fn bearer_value_formats_header() {
    assert_eq!(bearer_value("tok123"), "Bearer tok123");
}

#[test]
fn extract_error_message_reads_json_message_field() {
    assert_eq!(
        extract_error_message(r#"{"message": "You have already voted"}"#),
        Some("You have already voted".to_owned())
    );
}

#[test]
fn extract_error_message_ignores_json_without_message() {
    assert_eq!(extract_error_message(r#"{"error": 1}"#), None);
}

#[test]
fn extract_error_message_passes_plain_text_through() {
    assert_eq!(extract_error_message("  bad gateway  "), Some("bad gateway".to_owned()));
}

#[test]
fn extract_error_message_drops_empty_body() {
    assert_eq!(extract_error_message("   "), None);
}

#[cfg(not(feature = "hydrate"))]
mod server_stubs {
    use super::*;
    use crate::net::error::RequestError;

    #[test]
    fn secure_client_without_storage_has_no_credential() {
        let client = SecureClient::from_storage();
        assert!(!client.has_credential());
    }

    #[test]
    fn requests_fail_closed_on_the_server() {
        let client = PublicClient::new();
        let result: Result<serde_json::Value, RequestError> =
            futures_executor_block_on(client.get("/products"));
        assert!(matches!(result, Err(RequestError::Network(_))));
    }

    // Minimal block_on for the inert server stubs, which never actually await.
    fn futures_executor_block_on<F: std::future::Future>(future: F) -> F::Output {
        use std::pin::pin;
        use std::sync::Arc;
        use std::task::{Context, Poll, Wake, Waker};

        struct NoopWake;
        impl Wake for NoopWake {
            fn wake(self: Arc<Self>) {}
        }

        let waker = Waker::from(Arc::new(NoopWake));
        let mut context = Context::from_waker(&waker);
        let mut future = pin!(future);
        match future.as_mut().poll(&mut context) {
            Poll::Ready(output) => output,
            Poll::Pending => unreachable!("server stubs resolve immediately"),
        }
    }
}
