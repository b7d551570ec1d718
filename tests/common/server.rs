//! Test server management.
//!
//! Spawns and manages minircd instances for integration testing.

use std::process::{Child, Command, Stdio};
use std::time::Duration;
use tempfile::TempDir;
use tokio::time::sleep;

/// Server name every test instance runs under.
pub const SERVER_NAME: &str = "test.server";

/// A test server instance, killed on drop.
pub struct TestServer {
    child: Child,
    port: u16,
    _data_dir: TempDir,
}

impl TestServer {
    /// Spawn a server on `port` with default limits.
    pub async fn spawn(port: u16) -> anyhow::Result<Self> {
        Self::spawn_with_limits(port, 512).await
    }

    /// Spawn a server with a custom maximum line length.
    pub async fn spawn_with_limits(port: u16, max_line_len: usize) -> anyhow::Result<Self> {
        let data_dir = tempfile::tempdir()?;

        let config_path = data_dir.path().join("config.toml");
        let config_content = format!(
            r#"
[server]
info = "Test IRC Server"
metrics_port = 0

[listen]
host = "127.0.0.1"

[limits]
max_line_len = {max_line_len}
sendq = 1024
"#
        );
        std::fs::write(&config_path, config_content)?;

        let child = Command::new(env!("CARGO_BIN_EXE_minircd"))
            .arg(SERVER_NAME)
            .arg(port.to_string())
            .arg("--config")
            .arg(&config_path)
            .env("RUST_LOG", "warn")
            .stdout(Stdio::null())
            .spawn()?;

        let server = Self {
            child,
            port,
            _data_dir: data_dir,
        };

        server.wait_until_ready().await?;
        Ok(server)
    }

    /// Wait until the server is accepting connections.
    async fn wait_until_ready(&self) -> anyhow::Result<()> {
        for _ in 0..50 {
            if tokio::net::TcpStream::connect(("127.0.0.1", self.port))
                .await
                .is_ok()
            {
                return Ok(());
            }
            sleep(Duration::from_millis(100)).await;
        }
        anyhow::bail!("Server failed to start within 5 seconds")
    }

    /// Get the server address.
    pub fn address(&self) -> String {
        format!("127.0.0.1:{}", self.port)
    }

    /// Create a new test client connected to this server.
    pub async fn connect(&self, nick: &str) -> anyhow::Result<super::client::TestClient> {
        super::client::TestClient::connect(&self.address(), nick).await
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        let _ = self.child.kill();
        let _ = self.child.wait();
    }
}
