//! Integration tests wiring the routing manager and the companion handle
//! against a real loopback pairing, the closest thing to a device test
//! that runs in-process.

use bytes::Bytes;
use core_manager::{CompanionHandle, ConnectionState, WearableManager};
use futures::FutureExt;
use futures::StreamExt;
use platform_loopback::{LoopbackConfig, LoopbackPlatform};
use platform_traits::{ByteSink, ByteSource};
use std::sync::{Arc, Mutex};
use tokio::io::{AsyncReadExt, AsyncWriteExt};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("debug")
        .try_init();
}

/// Phone side drives a manager; watch side drives a companion handle.
fn paired_setup() -> (WearableManager, CompanionHandle, String, String) {
    let (phone_side, watch_side) = LoopbackPlatform::pair(
        LoopbackConfig::new("loopback", "Phone"),
        LoopbackConfig::new("loopback", "Watch"),
    );
    let phone_id = phone_side.node_id().to_string();
    let watch_id = watch_side.node_id().to_string();

    let manager = WearableManager::builder()
        .add_platform(phone_side)
        .build()
        .unwrap();
    let companion = CompanionHandle::new(watch_side);
    (manager, companion, phone_id, watch_id)
}

#[tokio::test]
async fn manager_enumerates_and_reaches_the_watch() {
    init_tracing();
    let (manager, _companion, _phone_id, watch_id) = paired_setup();

    let nodes = manager.nodes().await.unwrap();

    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0].node_id, format!("loopback|{watch_id}"));
    assert_eq!(nodes[0].display_name, "Watch");
    assert_eq!(
        manager.connection_state(&nodes[0].node_id).await.unwrap(),
        ConnectionState::Connected
    );
}

#[tokio::test]
async fn messages_flow_both_ways() {
    init_tracing();
    let (manager, companion, phone_id, watch_id) = paired_setup();

    // Phone -> watch, addressed by tagged id.
    let mut watch_inbox = companion.received_messages();
    let delivered = manager
        .send_message(
            &format!("loopback|{watch_id}"),
            "/ping",
            Some(Bytes::from_static(&[1, 2, 3])),
        )
        .await
        .unwrap();
    assert!(delivered);

    let message = watch_inbox.next().await.unwrap();
    assert_eq!(message.source_node_id, phone_id);
    assert_eq!(message.path, "/ping");
    assert_eq!(message.payload, Some(Bytes::from_static(&[1, 2, 3])));

    // Watch -> phone, no tags on the companion surface; the manager tags
    // the source on the way in.
    let mut phone_inbox = manager.received_messages();
    assert!(companion.send_message("/pong", None).await);

    let message = phone_inbox.next().await.unwrap();
    assert_eq!(message.source_node_id, format!("loopback|{watch_id}"));
    assert_eq!(message.path, "/pong");
    assert_eq!(message.payload, None);
}

#[tokio::test]
async fn byte_channel_spans_manager_and_companion() {
    init_tracing();
    let (manager, companion, _phone_id, watch_id) = paired_setup();
    let received: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));

    let watch_target = format!("loopback|{watch_id}");
    let send = manager.send_data(
        &watch_target,
        "/backup",
        |sink: &mut ByteSink| async move { sink.write_all(b"full-backup-image").await }.boxed(),
    );

    let captured = Arc::clone(&received);
    let receive = companion.receive_data("/backup", move |source: &mut ByteSource| {
        let captured = Arc::clone(&captured);
        async move {
            let mut buf = Vec::new();
            source.read_to_end(&mut buf).await?;
            captured.lock().unwrap().extend_from_slice(&buf);
            Ok(())
        }
        .boxed()
    });

    let (sent, got) = tokio::join!(send, receive);
    sent.unwrap();
    got.unwrap();
    assert_eq!(received.lock().unwrap().as_slice(), b"full-backup-image");
}

#[tokio::test]
async fn dropping_the_watch_side_disconnects_the_phone() {
    init_tracing();
    let (manager, companion, _phone_id, watch_id) = paired_setup();
    let tagged = format!("loopback|{watch_id}");

    assert_eq!(
        manager.connection_state(&tagged).await.unwrap(),
        ConnectionState::Connected
    );

    drop(companion);

    assert_eq!(
        manager.connection_state(&tagged).await.unwrap(),
        ConnectionState::Disconnected
    );
    assert!(manager.nodes().await.unwrap().is_empty());
    assert!(!manager.send_message(&tagged, "/ping", None).await.unwrap());
}
