use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::tcp::{OwnedReadHalf, OwnedWriteHalf};
use tokio::net::TcpStream;
use tracing::{debug, info};

use super::endpoint::RigEndpoint;
use crate::{Error, Result};

/// Upper bound for a single response read. Responses are assumed to arrive
/// in one read; the exchange never loops waiting for a line terminator.
const READ_BUF_SIZE: usize = 1024;

/// One open TCP connection to a rigctld-compatible endpoint
pub struct RigConnection {
    endpoint: RigEndpoint,
    reader: OwnedReadHalf,
    writer: OwnedWriteHalf,
    read_timeout: Duration,
}

impl RigConnection {
    /// Connect to a rig
    pub async fn connect(endpoint: RigEndpoint, read_timeout: Duration) -> Result<Self> {
        let stream = TcpStream::connect((endpoint.host.as_str(), endpoint.port)).await?;
        let (reader, writer) = stream.into_split();

        info!("Connected to rig at {}", endpoint);

        Ok(Self {
            endpoint,
            reader,
            writer,
            read_timeout,
        })
    }

    pub fn endpoint(&self) -> &RigEndpoint {
        &self.endpoint
    }

    /// Send one command and receive one response.
    ///
    /// The command is written with a trailing newline (the wire protocol is
    /// newline-delimited), flushed, and answered by exactly one read of up
    /// to 1024 bytes. On a slow or fragmented link this can return a
    /// truncated or empty string; callers treat an empty response as "no
    /// data" rather than an error.
    pub async fn exchange(&mut self, command: &str) -> Result<String> {
        self.writer.write_all(command.as_bytes()).await?;
        self.writer.write_all(b"\n").await?;
        self.writer.flush().await?;

        let mut buf = [0u8; READ_BUF_SIZE];
        let n = tokio::time::timeout(self.read_timeout, self.reader.read(&mut buf))
            .await
            .map_err(|_| Error::Timeout(self.read_timeout))??;

        if n == 0 {
            return Err(Error::Closed(self.endpoint.clone()));
        }

        let response = String::from_utf8(buf[..n].to_vec())?;
        let response = response.trim().to_string();
        debug!("Received response from {}: {:?}", self.endpoint, response);

        Ok(response)
    }

    /// Close the connection
    pub async fn close(mut self) -> Result<()> {
        self.writer.shutdown().await?;
        info!("Closed connection to rig at {}", self.endpoint);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use tokio::io::{AsyncBufReadExt, BufReader};
    use tokio::net::TcpListener;

    /// Accept one connection and answer each received line with the next
    /// scripted reply. Raw bytes, so tests control framing exactly.
    async fn spawn_rig(replies: Vec<&'static [u8]>) -> RigEndpoint {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (stream, _) = listener.accept().await.unwrap();
            let (reader, mut writer) = stream.into_split();
            let mut lines = BufReader::new(reader).lines();
            let mut replies = replies.into_iter();

            while let Ok(Some(_)) = lines.next_line().await {
                match replies.next() {
                    Some(reply) => writer.write_all(reply).await.unwrap(),
                    None => break,
                }
            }
        });

        RigEndpoint::new("127.0.0.1", addr.port())
    }

    #[tokio::test]
    async fn test_exchange_trims_response() {
        let endpoint = spawn_rig(vec![b"14074000\n".as_slice()]).await;
        let mut conn = RigConnection::connect(endpoint, Duration::from_secs(5))
            .await
            .unwrap();

        let response = conn.exchange("f").await.unwrap();
        assert_eq!(response, "14074000");
    }

    #[tokio::test]
    async fn test_exchange_whitespace_only_response_is_empty() {
        let endpoint = spawn_rig(vec![b"\n".as_slice()]).await;
        let mut conn = RigConnection::connect(endpoint, Duration::from_secs(5))
            .await
            .unwrap();

        let response = conn.exchange("f").await.unwrap();
        assert_eq!(response, "");
    }

    #[tokio::test]
    async fn test_exchange_invalid_utf8_is_decode_error() {
        let endpoint = spawn_rig(vec![b"\xff\xfe\n".as_slice()]).await;
        let mut conn = RigConnection::connect(endpoint, Duration::from_secs(5))
            .await
            .unwrap();

        let err = conn.exchange("f").await.unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[tokio::test]
    async fn test_exchange_peer_close_is_closed_error() {
        // No replies scripted: the rig task drops the socket after the
        // first command arrives.
        let endpoint = spawn_rig(vec![]).await;
        let mut conn = RigConnection::connect(endpoint, Duration::from_secs(5))
            .await
            .unwrap();

        let err = conn.exchange("f").await.unwrap_err();
        assert!(matches!(err, Error::Closed(_) | Error::Connection(_)));
    }

    #[tokio::test]
    async fn test_connect_refused() {
        // Bind then drop so the port is very likely unused
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let port = listener.local_addr().unwrap().port();
        drop(listener);

        let endpoint = RigEndpoint::new("127.0.0.1", port);
        let result = RigConnection::connect(endpoint, Duration::from_secs(5)).await;
        assert!(matches!(result, Err(Error::Connection(_))));
    }
}
