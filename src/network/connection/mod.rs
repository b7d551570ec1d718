//! Connection - Handles an individual client connection.
//!
//! Each connection owns two Tokio tasks:
//!
//! ```text
//!   socket read half ──▶ FramedRead<LineCodec> ──▶ Registry::interpret
//!                                                        │
//!                                       Session::send ───┘  (other sessions too)
//!                                                        │
//!                                                 mpsc (sendq)
//!                                                        │
//!   socket write half ◀── FramedWrite<LineCodec> ◀── writer task
//! ```
//!
//! The reader task alone runs teardown, whether the peer sent QUIT, hung up,
//! overflowed its SendQ, or the writer failed. The writer exits once the session's sender is
//! released and the queue is drained.

mod error_handling;

use error_handling::{ReadErrorAction, classify_read_error};

use crate::config::LimitsConfig;
use crate::handlers::{Context, Registry};
use crate::metrics;
use crate::state::{Matrix, Session};
use futures_util::{SinkExt, StreamExt};
use minirc_proto::{LineCodec, ProtocolError};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpStream;
use tokio::net::tcp::OwnedWriteHalf;
use tokio::sync::mpsc;
use tokio_util::codec::{FramedRead, FramedWrite};
use tracing::{Instrument, debug, info_span, warn};

/// How long teardown waits for queued lines to reach the socket.
const WRITER_DRAIN_TIMEOUT: Duration = Duration::from_secs(5);

/// A client connection handler.
pub struct Connection {
    stream: TcpStream,
    addr: SocketAddr,
    matrix: Arc<Matrix>,
    registry: Arc<Registry>,
    limits: LimitsConfig,
}

impl Connection {
    /// Create a new connection handler for an accepted socket.
    pub fn new(
        stream: TcpStream,
        addr: SocketAddr,
        matrix: Arc<Matrix>,
        registry: Arc<Registry>,
        limits: LimitsConfig,
    ) -> Self {
        Self {
            stream,
            addr,
            matrix,
            registry,
            limits,
        }
    }

    /// Serve the connection until QUIT, EOF, or a transport failure.
    pub async fn run(self) -> anyhow::Result<()> {
        let (tx, rx) = mpsc::channel(self.limits.sendq.max(1));
        let session = self.matrix.connect(self.addr, tx);

        let span = info_span!("connection", uid = %session.uid, addr = %self.addr);
        self.serve(session, rx).instrument(span).await
    }

    async fn serve(
        self,
        session: Arc<Session>,
        rx: mpsc::Receiver<Arc<str>>,
    ) -> anyhow::Result<()> {
        let Self {
            stream,
            matrix,
            registry,
            limits,
            ..
        } = self;

        let (read_half, write_half) = stream.into_split();
        let mut reader = FramedRead::new(read_half, LineCodec::with_max_len(limits.max_line_len));
        let sink = FramedWrite::new(write_half, LineCodec::with_max_len(limits.max_line_len));
        let mut writer = tokio::spawn(write_loop(sink, rx));
        let mut writer_done = false;

        debug!("Connection established");

        loop {
            tokio::select! {
                res = &mut writer => {
                    writer_done = true;
                    match res {
                        Ok(Ok(())) => debug!("Writer finished"),
                        Ok(Err(e)) => debug!(error = %e, "Write failed"),
                        Err(e) => warn!(error = %e, "Writer task aborted"),
                    }
                    break;
                }
                () = session.closing() => {
                    debug!("Closing on server request");
                    break;
                }
                item = reader.next() => match item {
                    Some(Ok(Ok(line))) => {
                        let mut ctx = Context::new(&matrix, &session);
                        registry.interpret(&mut ctx, &line).await;
                        if session.is_closed() {
                            break;
                        }
                    }
                    Some(Ok(Err(e))) | Some(Err(e)) => match classify_read_error(&e) {
                        ReadErrorAction::Reject(err) => {
                            metrics::record_rejected_line();
                            debug!(error = %e, "Rejected inbound line");
                            Context::new(&matrix, &session).reply_error(&err);
                        }
                        ReadErrorAction::Ignore => {}
                        ReadErrorAction::Disconnect => {
                            debug!(error = %e, "Read failed");
                            break;
                        }
                    },
                    None => {
                        debug!("Peer closed connection");
                        break;
                    }
                },
            }
        }

        matrix.disconnect(&session);

        if !writer_done && tokio::time::timeout(WRITER_DRAIN_TIMEOUT, writer).await.is_err() {
            warn!("Outbound queue not drained before timeout");
        }
        Ok(())
    }
}

/// Drain the session's queue into the socket, then shut the write half.
async fn write_loop(
    mut sink: FramedWrite<OwnedWriteHalf, LineCodec>,
    mut rx: mpsc::Receiver<Arc<str>>,
) -> Result<(), ProtocolError> {
    while let Some(line) = rx.recv().await {
        sink.send(line).await?;
    }
    SinkExt::<Arc<str>>::close(&mut sink).await
}
