//! Integration tests for the connection lifecycle.
//!
//! Connecting, registering, querying the server and disconnecting.

mod common;

use common::{TestClient, TestServer};
use std::time::Duration;

#[tokio::test]
async fn test_basic_registration() {
    let server = TestServer::spawn(16667)
        .await
        .expect("Failed to spawn test server");

    let mut client = TestClient::connect(&server.address(), "alice")
        .await
        .expect("Failed to connect");

    client.send_raw("NICK alice").await.unwrap();
    client.send_raw("USER alice 0 * :Alice A").await.unwrap();

    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 001 alice :Welcome to the IRC network, alice"
    );
}

#[tokio::test]
async fn test_registration_errors() {
    let server = TestServer::spawn(16668).await.unwrap();
    let mut client = server.connect("bob").await.unwrap();

    client.send_raw("USER bob 0 * :Bob").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 400 * :You must have a nickname before you can register."
    );

    client.send_raw("NICK 9lives").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 400 * :Invalid nickname"
    );

    client.register().await.unwrap();
    client.send_raw("USER bob 0 * :Bob Again").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 400 bob :You are already registered"
    );
}

#[tokio::test]
async fn test_server_queries_before_registration() {
    let server = TestServer::spawn(16669).await.unwrap();
    let mut client = server.connect("anon").await.unwrap();

    client.send_raw("TIME").await.unwrap();
    let time = client.recv().await.unwrap();
    assert!(time.starts_with(":test.server 391 * :"), "{time}");

    client.send_raw("INFO").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 371 * :Test IRC Server"
    );

    client.send_raw("PING abc def").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "PONG abc def");

    client.send_raw("FROB").await.unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 400 * :Invalid command, try again."
    );
}

#[tokio::test]
async fn test_lf_only_and_blank_lines() {
    let server = TestServer::spawn(16670).await.unwrap();
    let mut client = server.connect("anon").await.unwrap();

    client.send_bytes(b"\r\n\nPING lf\n").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "PONG lf");
}

#[tokio::test]
async fn test_quit_closes_connection_and_notifies() {
    let server = TestServer::spawn(16671).await.unwrap();
    let mut alice = server.connect("alice").await.unwrap();
    let mut bob = server.connect("bob").await.unwrap();
    alice.register().await.unwrap();
    bob.register().await.unwrap();

    alice.quit().await.unwrap();

    assert_eq!(alice.recv().await.unwrap(), ":alice QUIT");
    alice.expect_closed().await.unwrap();
    assert_eq!(bob.recv().await.unwrap(), ":alice QUIT");

    // The nickname is free again.
    let mut again = server.connect("alice").await.unwrap();
    again.register().await.unwrap();
}

#[tokio::test]
async fn test_unregistered_quit_is_silent() {
    let server = TestServer::spawn(16672).await.unwrap();
    let mut anon = server.connect("anon").await.unwrap();
    let mut bob = server.connect("bob").await.unwrap();
    bob.register().await.unwrap();

    anon.send_raw("NICK halfway").await.unwrap();
    anon.quit().await.unwrap();
    anon.expect_closed().await.unwrap();

    bob.expect_silence(Duration::from_millis(200)).await.unwrap();
}

#[tokio::test]
async fn test_dropped_connection_is_cleaned_up() {
    let server = TestServer::spawn(16673).await.unwrap();
    let mut alice = server.connect("alice").await.unwrap();
    let mut bob = server.connect("bob").await.unwrap();
    alice.register().await.unwrap();
    bob.register().await.unwrap();
    alice.join("#test").await.unwrap();
    bob.join("#test").await.unwrap();
    alice.recv().await.unwrap(); // bob's JOIN

    drop(alice);

    assert_eq!(bob.recv().await.unwrap(), ":alice QUIT");
    bob.send_raw("NAMES #test").await.unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        ":test.server 353 bob = #test :bob"
    );
    bob.send_raw("PRIVMSG alice :still there?").await.unwrap();
    assert_eq!(
        bob.recv().await.unwrap(),
        ":test.server 400 bob :No user exists with that name"
    );
}

#[tokio::test]
async fn test_line_too_long_keeps_connection() {
    let server = TestServer::spawn_with_limits(16674, 64).await.unwrap();
    let mut client = server.connect("alice").await.unwrap();
    client.register().await.unwrap();

    client
        .send_raw(&format!("PRIVMSG alice :{}", "x".repeat(200)))
        .await
        .unwrap();
    assert_eq!(
        client.recv().await.unwrap(),
        ":test.server 400 alice :Input line too long"
    );

    client.send_raw("PING still-here").await.unwrap();
    assert_eq!(client.recv().await.unwrap(), "PONG still-here");
}
