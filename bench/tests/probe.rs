mod common;

use chat_bench::probe::{ConnectionProbe, ProbeResponse};
use common::{MockBehavior, MockChatServer};
use std::time::Duration;

fn commands(items: &[&str]) -> Vec<String> {
    items.iter().map(|c| c.to_string()).collect()
}

#[tokio::test]
async fn probe_records_welcome_and_every_response() {
    let server = MockChatServer::start_with_welcome(MockBehavior::ReplyOk, Some("Welcome!\n"));
    let probe = ConnectionProbe::new(
        server.address(),
        commands(&["/help", "/join lobby", "/help"]),
        Duration::from_millis(10),
        Duration::from_secs(2),
        true,
    );

    let transcript = probe.run().await.unwrap();

    assert_eq!(
        transcript.welcome,
        Some(ProbeResponse::Data(b"Welcome!\n".to_vec()))
    );
    assert_eq!(transcript.exchanges.len(), 3);
    assert_eq!(transcript.exchanges[1].command, "/join lobby");
    for exchange in &transcript.exchanges {
        assert_eq!(exchange.response.decoded().as_deref(), Some("OK\n"));
    }
}

#[tokio::test]
async fn probe_continues_after_timeouts() {
    let server = MockChatServer::start(MockBehavior::Silent);
    let probe = ConnectionProbe::new(
        server.address(),
        commands(&["/help", "/clear"]),
        Duration::ZERO,
        Duration::from_millis(200),
        true,
    );

    let transcript = probe.run().await.unwrap();

    assert_eq!(transcript.welcome, Some(ProbeResponse::Timeout));
    assert_eq!(transcript.exchanges.len(), 2);
    assert!(transcript
        .exchanges
        .iter()
        .all(|e| e.response == ProbeResponse::Timeout));
}

#[tokio::test]
async fn probe_stops_when_server_closes() {
    let server = MockChatServer::start(MockBehavior::ReplyOk);
    let probe = ConnectionProbe::new(
        server.address(),
        commands(&["/help", "QUIT", "/help"]),
        Duration::from_millis(10),
        Duration::from_secs(2),
        false,
    );

    let transcript = probe.run().await.unwrap();

    assert_eq!(transcript.welcome, None);
    assert_eq!(transcript.exchanges.len(), 2);
    assert_eq!(transcript.exchanges[1].response, ProbeResponse::Closed);
}

#[tokio::test]
async fn probe_requires_commands() {
    let server = MockChatServer::start(MockBehavior::ReplyOk);
    let probe = ConnectionProbe::new(
        server.address(),
        Vec::new(),
        Duration::ZERO,
        Duration::from_secs(1),
        false,
    );
    assert!(probe.run().await.is_err());
}
