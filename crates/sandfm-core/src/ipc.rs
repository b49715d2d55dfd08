//! Platform IPC plumbing.
//!
//! Inbound lines are read on a blocking background task and forwarded
//! as parsed commands over an unbounded channel. A single consumer loop
//! drains the channel and is the only code that touches the
//! [`Explorer`], so the model is never mutated concurrently.

use std::io::{BufRead, Write};

use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::dispatch::Explorer;
use crate::error::CoreResult;
use crate::protocol::{parse_line, Command, OutboundMessage};

/// Spawns a blocking task reading newline-delimited JSON from `reader`.
///
/// Each parseable line becomes a [`Command`] on `tx`. Malformed lines
/// and unknown command types are dropped without a reply. The task ends
/// on EOF, on a read error, or when the receiving side is gone.
pub fn spawn_reader<R>(reader: R, tx: UnboundedSender<Command>) -> JoinHandle<()>
where
    R: BufRead + Send + 'static,
{
    tokio::task::spawn_blocking(move || {
        for line in reader.lines() {
            let line = match line {
                Ok(l) => l,
                Err(e) => {
                    warn!(error = %e, "inbound stream read failed");
                    break;
                }
            };
            match parse_line(&line) {
                Some(command) => {
                    if tx.send(command).is_err() {
                        break;
                    }
                }
                None => debug!("dropped unrecognised inbound line"),
            }
        }
        info!("inbound stream closed");
    })
}

/// Writes outbound messages as one JSON object per line.
///
/// Every `send` flushes, so messages reach the platform in emission
/// order even through a pipe.
pub struct MessageWriter<W: Write> {
    inner: W,
}

impl<W: Write> MessageWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    /// Serialises `message` and writes it followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns the underlying I/O error when the stream is broken.
    pub fn send(&mut self, message: &OutboundMessage) -> CoreResult<()> {
        let json = serde_json::to_string(message).map_err(std::io::Error::from)?;
        writeln!(self.inner, "{json}")?;
        self.inner.flush()?;
        Ok(())
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}

/// Drains `rx`, dispatching each command against `explorer`.
///
/// An initial state snapshot is sent before any command is processed so
/// the platform is synchronised from launch. Each command that produces
/// a terminal message is answered with that message followed by a fresh
/// state message; silent commands produce nothing. Returns when the
/// channel closes.
///
/// # Errors
///
/// Only write failures on the outbound stream end the session early.
pub async fn run_session<W: Write>(
    mut explorer: Explorer,
    mut rx: UnboundedReceiver<Command>,
    writer: &mut MessageWriter<W>,
) -> CoreResult<()> {
    writer.send(&explorer.state())?;

    while let Some(command) = rx.recv().await {
        debug!(?command, "dispatching");
        if let Some(reply) = explorer.dispatch(command) {
            writer.send(&reply)?;
            writer.send(&explorer.state())?;
        }
    }
    Ok(())
}
