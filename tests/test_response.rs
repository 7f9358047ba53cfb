use httpfromtcp::http::response::{Response, StatusCode, default_headers};

#[test]
fn test_status_code_as_u16() {
    assert_eq!(StatusCode::Ok.as_u16(), 200);
    assert_eq!(StatusCode::BadRequest.as_u16(), 400);
    assert_eq!(StatusCode::InternalServerError.as_u16(), 500);
    assert_eq!(StatusCode::Other(302).as_u16(), 302);
}

#[test]
fn test_status_code_reason_phrase() {
    assert_eq!(StatusCode::Ok.reason_phrase(), "OK");
    assert_eq!(StatusCode::BadRequest.reason_phrase(), "Bad Request");
    assert_eq!(
        StatusCode::InternalServerError.reason_phrase(),
        "Internal Server Error"
    );
    assert_eq!(StatusCode::Other(404).reason_phrase(), "");
}

#[test]
fn test_status_code_from_u16() {
    assert_eq!(StatusCode::from(200u16), StatusCode::Ok);
    assert_eq!(StatusCode::from(400u16), StatusCode::BadRequest);
    assert_eq!(StatusCode::from(500u16), StatusCode::InternalServerError);
    assert_eq!(StatusCode::from(201u16), StatusCode::Other(201));
}

#[test]
fn test_unmapped_status_line_has_empty_reason() {
    assert_eq!(StatusCode::Other(418).status_line(), "HTTP/1.1 418 \r\n");
}

#[test]
fn test_default_headers() {
    let headers = default_headers(42);

    assert_eq!(headers.len(), 3);
    assert_eq!(headers.get("Content-Length"), Some("42"));
    assert_eq!(headers.get("Connection"), Some("close"));
    assert_eq!(headers.get("Content-Type"), Some("text/html"));
}

#[test]
fn test_response_new_sizes_content_length() {
    let body = b"This is the body".to_vec();
    let response = Response::new(StatusCode::Ok, body.clone());

    assert_eq!(response.headers.get("content-length"), Some("16"));
    assert_eq!(response.body, body);
}

#[test]
fn test_response_header_replaces() {
    let response = Response::ok("{}").header("Content-Type", "application/json");

    assert_eq!(response.headers.get("content-type"), Some("application/json"));
    assert_eq!(response.headers.len(), 3);
}

#[test]
fn test_response_bad_request_helper() {
    let response = Response::bad_request("invalid method: get");

    assert_eq!(response.status, StatusCode::BadRequest);
    assert_eq!(response.body, b"invalid method: get".to_vec());
    assert_eq!(response.headers.get("content-type"), Some("text/plain"));
}

#[test]
fn test_response_internal_error_helper() {
    let response = Response::internal_error("boom");

    assert_eq!(response.status, StatusCode::InternalServerError);
    assert_eq!(response.body, b"boom".to_vec());
    assert_eq!(response.headers.get("content-length"), Some("4"));
}
