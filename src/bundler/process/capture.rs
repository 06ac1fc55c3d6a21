//! Incremental capture of child process output.

use tokio::io::{AsyncRead, AsyncReadExt};

/// Byte accumulator fed by the chunks a child writes to one stream.
#[derive(Debug, Default)]
pub struct OutputBuffer {
    bytes: Vec<u8>,
}

impl OutputBuffer {
    /// Appends one chunk.
    pub fn push(&mut self, chunk: &[u8]) {
        self.bytes.extend_from_slice(chunk);
    }

    /// Drains `reader` until EOF, appending every chunk as it arrives.
    pub async fn drain<R>(mut self, mut reader: R) -> std::io::Result<Self>
    where
        R: AsyncRead + Unpin,
    {
        let mut chunk = [0u8; 8192];
        loop {
            let n = reader.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            self.push(&chunk[..n]);
        }
        Ok(self)
    }

    /// Finalizes the buffer into text. Invalid UTF-8 is replaced.
    pub fn into_string(self) -> String {
        match String::from_utf8(self.bytes) {
            Ok(text) => text,
            Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
        }
    }
}
