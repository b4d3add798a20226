use super::*;

#[test]
fn delete_user_path_formats_expected_route() {
    assert_eq!(delete_user_path("u123"), "/api/admin/delet/u123");
}

#[test]
fn bearer_prefixes_token() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn status_error_prefers_server_message() {
    let err = status_error(401, Some("Invalid credentials".to_owned()));
    assert_eq!(err, ApiError::Status { status: 401, message: "Invalid credentials".to_owned() });
    assert_eq!(err.user_message(), "Invalid credentials");
}

#[test]
fn status_error_falls_back_to_status_text() {
    let err = status_error(500, None);
    assert_eq!(err.user_message(), "request failed with status 500");
    let blank = status_error(404, Some("  ".to_owned()));
    assert_eq!(blank.user_message(), "request failed with status 404");
}

#[test]
fn non_status_errors_describe_themselves() {
    assert_eq!(ApiError::Request("offline".to_owned()).user_message(), "request failed: offline");
    assert_eq!(ApiError::Decode("eof".to_owned()).to_string(), "unexpected response: eof");
}

#[test]
fn host_build_calls_are_unavailable() {
    let result = block_on_ready(fetch_problems());
    assert_eq!(result, Err(ApiError::Unavailable));
}

/// Drive a future that never awaits a pending resource.
fn block_on_ready<F: std::future::Future>(fut: F) -> F::Output {
    use std::pin::pin;
    use std::task::{Context, Poll, Waker};

    let mut fut = pin!(fut);
    let mut cx = Context::from_waker(Waker::noop());
    match fut.as_mut().poll(&mut cx) {
        Poll::Ready(out) => out,
        Poll::Pending => panic!("future unexpectedly pending"),
    }
}
