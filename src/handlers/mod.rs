//! Command handlers.
//!
//! Each inbound line is split into a command token and an argument blob
//! ([`MessageRef`](minirc_proto::MessageRef)); the [`Registry`] routes it to
//! the handler for that token.

mod channel;
mod connection;
mod core;
mod messaging;
mod server_query;

pub use self::core::{Context, Handler, Registry};

#[cfg(test)]
pub(crate) mod test_support {
    //! In-process harness: real registry and state, queues instead of sockets.

    use super::{Context, Registry};
    use crate::config::Config;
    use crate::state::{Matrix, Session};
    use std::sync::Arc;
    use tokio::sync::mpsc;

    pub struct Harness {
        pub matrix: Arc<Matrix>,
        pub registry: Registry,
    }

    pub struct Client {
        pub session: Arc<Session>,
        rx: mpsc::Receiver<Arc<str>>,
    }

    impl Client {
        /// Lines queued for this client since the last call.
        pub fn take(&mut self) -> Vec<String> {
            let mut lines = Vec::new();
            while let Ok(line) = self.rx.try_recv() {
                lines.push(line.to_string());
            }
            lines
        }
    }

    impl Harness {
        pub fn new() -> Self {
            let mut config = Config::default();
            config.server.name = "irc.test".into();
            config.server.info = "test server".into();
            Self {
                matrix: Arc::new(Matrix::new(&config)),
                registry: Registry::new(),
            }
        }

        pub fn client(&self) -> Client {
            let (tx, rx) = mpsc::channel(64);
            let session = self.matrix.connect("127.0.0.1:6000".parse().unwrap(), tx);
            Client { session, rx }
        }

        pub async fn run(&self, client: &Client, line: &str) {
            let mut ctx = Context::new(&self.matrix, &client.session);
            self.registry.interpret(&mut ctx, line).await;
        }

        /// Connect and complete NICK + USER, discarding the welcome.
        pub async fn registered(&self, nick: &str) -> Client {
            let mut client = self.client();
            self.run(&client, &format!("NICK {nick}")).await;
            self.run(&client, &format!("USER {nick} 0 * :{nick} Test"))
                .await;
            let welcome = client.take();
            assert_eq!(welcome.len(), 1, "unexpected registration output: {welcome:?}");
            client
        }
    }
}
