//! Integration tests for commands bound to their connection.

mod common;

use std::sync::Arc;

use common::{RecordingServer, drain, init_tracing};
use ircd_core::{Bind, Client, Command, Identifier};

#[tokio::test]
async fn test_hook_runs_once_per_bound_command() -> anyhow::Result<()> {
    init_tracing();
    let mut server = RecordingServer::default();
    let (client, _rx) = Client::new("001AAAAAA");

    let bound = Command::parse("NICK alice")?.bind(Arc::clone(&client));
    bound.handle_server(&mut server).await?;

    assert_eq!(server.calls.len(), 1);
    assert_eq!(client.nick(), "alice");
    Ok(())
}

#[tokio::test]
async fn test_part_message_defaults_to_nick() -> anyhow::Result<()> {
    init_tracing();
    let mut server = RecordingServer::default();
    let (client, mut rx) = Client::new("001AAAAAA");
    client.set_nick("alice");

    Command::parse("PART #a,#b")?
        .bind(Arc::clone(&client))
        .handle_server(&mut server)
        .await?;
    Command::parse("PART #c :see you")?
        .bind(Arc::clone(&client))
        .handle_server(&mut server)
        .await?;

    assert_eq!(
        drain(&mut rx),
        vec![
            ":alice PART #a alice\r\n".to_string(),
            ":alice PART #b alice\r\n".to_string(),
            ":alice PART #c :see you\r\n".to_string(),
        ]
    );
    Ok(())
}

#[tokio::test]
async fn test_user_mode_reply() -> anyhow::Result<()> {
    init_tracing();
    let mut server = RecordingServer::default();
    let (client, mut rx) = Client::new("001AAAAAA");
    client.set_nick("alice");

    Command::parse("MODE alice +iw-o")?
        .bind(client)
        .handle_server(&mut server)
        .await?;

    assert_eq!(
        drain(&mut rx),
        vec![":irc.test.local 221 alice +i+w-o\r\n".to_string()]
    );
    Ok(())
}

#[tokio::test]
async fn test_replies_keep_order_across_tasks() -> anyhow::Result<()> {
    init_tracing();
    let (client, mut rx) = Client::new("001AAAAAA");

    let writer = {
        let client = Arc::clone(&client);
        tokio::spawn(async move {
            let mut server = RecordingServer::default();
            for i in 0..50 {
                let line = format!("PING token{}", i);
                Command::parse(&line)?
                    .bind(Arc::clone(&client))
                    .handle_server(&mut server)
                    .await?;
            }
            anyhow::Ok(())
        })
    };
    writer.await??;

    let expected: Vec<String> = (0..50).map(|i| format!("PONG token{}\r\n", i)).collect();
    assert_eq!(drain(&mut rx), expected);
    Ok(())
}

#[tokio::test]
async fn test_concurrent_parsing_shares_registry() {
    init_tracing();
    let handles: Vec<_> = (0..8)
        .map(|i| {
            tokio::spawn(async move {
                let line = format!("JOIN #room{},#other k{}", i, i);
                Command::parse(&line)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let Ok(Command::Join(join)) = handle.await.unwrap() else {
            panic!("expected JOIN");
        };
        let room = format!("#room{}", i);
        let key = format!("k{}", i);
        assert_eq!(join.channels().get(&room), Some(key.as_str()));
        assert_eq!(join.channels().get("#other"), Some(""));
    }
}
