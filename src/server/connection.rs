use std::io;

use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, warn};

use super::config::{Framing, ServerConfig};
use super::response::{respond, Response};

/// Serves one client until it closes its end or an I/O error occurs.
///
/// Each frame is one query; the reply is written back followed by the same
/// delimiter. Returns the number of queries answered.
pub async fn handle_connection<S>(stream: S, config: &ServerConfig) -> io::Result<usize>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let (reader, mut writer) = tokio::io::split(stream);
    let mut reader = BufReader::new(reader);
    let delimiter = config.framing.delimiter();
    let mut frame = Vec::new();
    let mut answered = 0;

    loop {
        frame.clear();
        if reader.read_until(delimiter, &mut frame).await? == 0 {
            break;
        }

        let query = decode_frame(&frame, config.framing);
        if config.framing == Framing::Newline && query.trim().is_empty() {
            continue;
        }

        debug!(query = %query, "received query");
        let response = respond(config.dialect, &query);
        if let Response::Failure { detail, .. } = &response {
            warn!(query = %query, error = %detail, "query rejected");
        }

        writer.write_all(response.payload().as_bytes()).await?;
        writer.write_all(&[delimiter]).await?;
        writer.flush().await?;
        answered += 1;
    }

    writer.shutdown().await?;
    Ok(answered)
}

fn decode_frame(frame: &[u8], framing: Framing) -> String {
    let mut body = frame;
    if body.last() == Some(&framing.delimiter()) {
        body = &body[..body.len() - 1];
    }
    if framing == Framing::Newline && body.last() == Some(&b'\r') {
        body = &body[..body.len() - 1];
    }
    String::from_utf8_lossy(body).into_owned()
}
