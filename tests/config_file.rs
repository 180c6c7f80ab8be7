//! Integration tests for loading configuration from disk.

use std::io::Write;

use ircd_core::config::{ValidationError, validate};
use ircd_core::{Client, Config, ConfigError, LineDispatcher};

#[test]
fn test_load_from_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(
        file,
        r#"
[server]
name = "irc.file.test"

[limits]
max_line_len = 128

[parser]
reply_unknown = false
"#
    )?;

    let config = Config::load(file.path())?;
    assert_eq!(config.server.name, "irc.file.test");
    assert_eq!(config.limits.max_line_len, 128);
    assert!(!config.parser.reply_unknown);
    assert!(config.parser.notify_errors);
    assert!(validate(&config).is_ok());

    let dispatcher = LineDispatcher::new(&config);
    assert_eq!(dispatcher.server_name(), "irc.file.test");
    let (client, mut rx) = Client::new("001AAAAAA");
    let long = format!("PRIVMSG #a :{}", "x".repeat(200));
    assert!(dispatcher.dispatch(&client, &long).is_err());
    assert!(rx.try_recv().unwrap().to_string().starts_with(":irc.file.test 400 "));
    Ok(())
}

#[test]
fn test_invalid_file() -> anyhow::Result<()> {
    let mut file = tempfile::NamedTempFile::new()?;
    writeln!(file, "[server\nname = ")?;
    assert!(matches!(Config::load(file.path()), Err(ConfigError::Parse(_))));
    Ok(())
}

#[test]
fn test_validation_rejects_tiny_limit() -> anyhow::Result<()> {
    let config = Config::from_toml("[limits]\nmax_line_len = 16")?;
    assert_eq!(
        validate(&config),
        Err(vec![ValidationError::LineLimitTooSmall(16)])
    );
    Ok(())
}
