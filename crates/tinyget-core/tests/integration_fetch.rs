//! Integration test: fetch over a real TCP socket against a local canned server.

mod common;

use std::time::Duration;

use tinyget_core::fetch::{fetch_with_options, FetchError, FetchOptions, TcpConnector};
use tinyget_core::loader;
use tinyget_core::response::RawResponse;
use tinyget_core::url_model::parse;

fn options_for(port: u16) -> FetchOptions {
    FetchOptions {
        port_override: Some(port),
        ..FetchOptions::default()
    }
}

#[test]
fn fetch_returns_every_byte_the_server_sent() {
    let body: Vec<u8> = b"HTTP/1.0 200 OK\r\nContent-Type: text/plain\r\n\r\n"
        .iter()
        .copied()
        .chain((0u8..100).cycle().take(5000))
        .collect();
    let server = common::canned_server::start(body.clone());

    let url = parse("http://127.0.0.1/files/data.bin").unwrap();
    let got = fetch_with_options(&url, &TcpConnector, &options_for(server.port)).expect("fetch");
    assert_eq!(got.len(), body.len(), "response size must match");
    assert_eq!(got, body, "response content must match");

    let request = server
        .requests
        .recv_timeout(Duration::from_secs(2))
        .expect("server saw a request");
    assert_eq!(
        request,
        b"GET /files/data.bin HTTP/1.0\r\nHost: 127.0.0.1\r\n\r\n"
    );

    let view = RawResponse::new(&got);
    assert_eq!(view.status_code(), Some(200));
    assert_eq!(view.header("content-type").as_deref(), Some("text/plain"));
    assert_eq!(view.body().len(), 5000);
}

#[test]
fn small_read_buffer_still_reassembles() {
    let body = b"HTTP/1.0 200 OK\r\n\r\nhello".to_vec();
    let opts = common::canned_server::CannedServerOptions {
        chunk_size: 3,
        ..Default::default()
    };
    let server = common::canned_server::start_with_options(body.clone(), opts);

    let url = parse("http://127.0.0.1").unwrap();
    let options = FetchOptions {
        read_buffer_bytes: 2,
        port_override: Some(server.port),
    };
    let got = fetch_with_options(&url, &TcpConnector, &options).expect("fetch");
    assert_eq!(got, body);
}

#[test]
fn loader_dispatches_http_to_fetch() {
    let body = b"HTTP/1.0 200 OK\r\n\r\n<p>hi</p>".to_vec();
    let server = common::canned_server::start(body.clone());
    let url = parse("http://127.0.0.1/index.html").unwrap();
    let got = loader::load(&url, &TcpConnector, &options_for(server.port)).expect("load");
    assert_eq!(got, body);
}

#[test]
fn refused_connection_is_transport_error() {
    // Bind then drop to get a port with nothing listening.
    let port = {
        let l = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        l.local_addr().unwrap().port()
    };
    let url = parse("http://127.0.0.1/").unwrap();
    match fetch_with_options(&url, &TcpConnector, &options_for(port)) {
        Err(FetchError::Transport { port: p, .. }) => assert_eq!(p, port),
        other => panic!("expected Transport error, got {other:?}"),
    }
}
