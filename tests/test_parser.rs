use courier::http::parser::{MAX_BODY_SIZE, MAX_HEAD_SIZE, ParseError, parse_http_request};
use courier::http::request::Method;

#[test]
fn test_parse_simple_get_request() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::GET);
    assert_eq!(parsed.path, "/");
    assert_eq!(parsed.version, "HTTP/1.1");
    assert_eq!(parsed.header("Host"), Some("localhost:4221"));
    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_post_request_with_body() {
    let req = b"POST /files/test.txt HTTP/1.1\r\nContent-Length: 3\r\n\r\nabc";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.method, Method::POST);
    assert_eq!(parsed.path, "/files/test.txt");
    assert_eq!(parsed.body, b"abc".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_body_limited_to_content_length() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 2\r\n\r\nabcdef";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"ab".to_vec());
    assert_eq!(consumed, req.len() - 4);
}

#[test]
fn test_parse_without_content_length_takes_remainder_as_body() {
    let req = b"POST /files/x HTTP/1.1\r\nHost: h\r\n\r\nabc";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, b"abc".to_vec());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_without_content_length_or_body() {
    let req = b"GET /echo/x HTTP/1.1\r\nHost: h\r\n\r\n";
    let (parsed, consumed) = parse_http_request(req).unwrap();

    assert!(parsed.body.is_empty());
    assert_eq!(consumed, req.len());
}

#[test]
fn test_parse_headers_keep_order_and_duplicates() {
    let req = b"GET / HTTP/1.1\r\nX-Tag: one\r\nHost: h\r\nx-tag: two\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    let names: Vec<&str> = parsed.headers.iter().map(|(k, _)| k).collect();
    assert_eq!(names, vec!["X-Tag", "Host", "x-tag"]);
    assert_eq!(parsed.header("X-TAG"), Some("one"));
    assert_eq!(
        parsed.headers.get_all("x-tag").collect::<Vec<_>>(),
        vec!["one", "two"]
    );
}

#[test]
fn test_parse_header_lookup_is_case_insensitive() {
    let req = b"GET /echo/abc HTTP/1.1\r\naccept-encoding: gzip\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("Accept-Encoding"), Some("gzip"));
}

#[test]
fn test_parse_header_value_keeps_inner_colons() {
    let req = b"GET / HTTP/1.1\r\nHost: localhost:4221\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("host"), Some("localhost:4221"));
}

#[test]
fn test_parse_header_value_keeps_trailing_whitespace() {
    let req = b"GET /user-agent HTTP/1.1\r\nUser-Agent: foo/1.0  \r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("User-Agent"), Some("foo/1.0  "));
}

#[test]
fn test_parse_header_strips_only_one_leading_space() {
    let req = b"GET / HTTP/1.1\r\nX-A:bare\r\nX-B:  padded\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.header("X-A"), Some("bare"));
    assert_eq!(parsed.header("X-B"), Some(" padded"));
}

#[test]
fn test_parse_path_is_not_decoded() {
    let req = b"GET /echo/a%20b/c HTTP/1.1\r\n\r\n";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.path, "/echo/a%20b/c");
}

#[test]
fn test_parse_incomplete_request_missing_blank_line() {
    let req = b"GET / HTTP/1.1\r\nHost: example.com\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_incomplete_request_partial_body() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: 10\r\n\r\nhello";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::Incomplete);
}

#[test]
fn test_parse_request_line_with_too_few_tokens() {
    let req = b"GET /\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidRequest);
}

#[test]
fn test_parse_request_line_with_too_many_tokens() {
    let req = b"GET / HTTP/1.1 extra\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidRequest);
}

#[test]
fn test_parse_path_must_start_with_slash() {
    let req = b"GET echo/abc HTTP/1.1\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidRequest);
}

#[test]
fn test_parse_unterminated_oversized_head() {
    let mut req = b"GET / HTTP/1.1\r\nX-Fill: ".to_vec();
    req.resize(MAX_HEAD_SIZE, b'a');

    assert_eq!(parse_http_request(&req).unwrap_err(), ParseError::HeadersTooLarge);
}

#[test]
fn test_parse_head_just_under_limit() {
    let mut req = b"GET / HTTP/1.1\r\nX-Fill: ".to_vec();
    req.resize(MAX_HEAD_SIZE - 4, b'a');
    req.extend_from_slice(b"\r\n\r\n");

    let (parsed, _) = parse_http_request(&req).unwrap();
    assert_eq!(parsed.path, "/");
}

#[test]
fn test_parse_oversized_content_length() {
    let req = format!(
        "POST /files/a HTTP/1.1\r\nContent-Length: {}\r\n\r\n",
        MAX_BODY_SIZE + 1
    );

    assert_eq!(
        parse_http_request(req.as_bytes()).unwrap_err(),
        ParseError::BodyTooLarge
    );
}

#[test]
fn test_parse_invalid_http_method() {
    let req = b"INVALID / HTTP/1.1\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidMethod);
}

#[test]
fn test_parse_malformed_header() {
    let req = b"GET / HTTP/1.1\r\nBrokenHeader\r\n\r\n";

    assert_eq!(parse_http_request(req).unwrap_err(), ParseError::InvalidHeader);
}

#[test]
fn test_parse_invalid_content_length() {
    let req = b"POST /files/a HTTP/1.1\r\nContent-Length: lots\r\n\r\n";

    assert_eq!(
        parse_http_request(req).unwrap_err(),
        ParseError::InvalidContentLength
    );
}

#[test]
fn test_parse_various_http_methods() {
    let methods = vec![
        ("GET", Method::GET),
        ("POST", Method::POST),
        ("PUT", Method::PUT),
        ("DELETE", Method::DELETE),
        ("HEAD", Method::HEAD),
        ("OPTIONS", Method::OPTIONS),
        ("PATCH", Method::PATCH),
    ];

    for (method_str, expected_method) in methods {
        let req = format!("{} / HTTP/1.1\r\n\r\n", method_str);
        let (parsed, _) = parse_http_request(req.as_bytes()).unwrap();
        assert_eq!(parsed.method, expected_method);
    }
}

#[test]
fn test_parse_request_with_binary_body() {
    let req = b"POST /files/blob HTTP/1.1\r\nContent-Length: 4\r\n\r\n\x00\xff\x02\r";
    let (parsed, _) = parse_http_request(req).unwrap();

    assert_eq!(parsed.body, vec![0x00, 0xff, 0x02, b'\r']);
}
