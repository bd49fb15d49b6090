//! # Terminal Channel
//!
//! [`PromptChannel`] over any tokio reader/writer pair. The interactive tools use
//! stdin/stdout; tests use in-memory buffers.

use crate::domain::error::{ScaffoldError, ScaffoldResult};
use crate::domain::traits::{PromptChannel, Reporter};
use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

pub struct LineChannel<R, W> {
    reader: Option<R>,
    writer: Option<W>,
}

impl<R, W> LineChannel<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self {
            reader: Some(reader),
            writer: Some(writer),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.reader.is_none() && self.writer.is_none()
    }
}

pub type Terminal = LineChannel<BufReader<Stdin>, Stdout>;

/// Channel bound to the process's stdin and stdout.
pub fn terminal() -> Terminal {
    LineChannel::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
}

/// Prints status lines to stdout.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn status(&self, message: &str) {
        println!("{message}");
    }
}

fn closed_error() -> ScaffoldError {
    ScaffoldError::io(
        "prompt channel",
        std::io::Error::new(std::io::ErrorKind::BrokenPipe, "channel already closed"),
    )
}

#[async_trait]
impl<R, W> PromptChannel for LineChannel<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn write_prompt(&mut self, text: &str) -> ScaffoldResult<()> {
        let writer = self.writer.as_mut().ok_or_else(closed_error)?;
        writer
            .write_all(text.as_bytes())
            .await
            .map_err(|e| ScaffoldError::io("failed to write prompt", e))?;
        writer
            .flush()
            .await
            .map_err(|e| ScaffoldError::io("failed to write prompt", e))
    }

    async fn read_line(&mut self) -> ScaffoldResult<Option<String>> {
        let Some(reader) = self.reader.as_mut() else {
            return Ok(None);
        };

        let mut line = String::new();
        let read = reader
            .read_line(&mut line)
            .await
            .map_err(|e| ScaffoldError::io("failed to read input", e))?;
        if read == 0 {
            return Ok(None);
        }

        let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed_len);
        Ok(Some(line))
    }

    async fn close(&mut self) -> ScaffoldResult<()> {
        self.reader = None;
        if let Some(mut writer) = self.writer.take() {
            writer
                .flush()
                .await
                .map_err(|e| ScaffoldError::io("failed to flush output", e))?;
        }
        Ok(())
    }
}
