use std::io::{BufRead, BufReader, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const REPLY_TIMEOUT: Duration = Duration::from_millis(500);
const MAX_SKIPPED_LINES: usize = 64;

#[derive(Serialize)]
struct Request<'a> {
    command: &'a [Value],
    request_id: u64,
}

#[derive(Debug, Deserialize)]
struct Reply {
    #[serde(default)]
    request_id: Option<u64>,
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    data: Option<Value>,
}

pub fn encode_request(command: &[Value], request_id: u64) -> Result<String> {
    let mut line = serde_json::to_string(&Request {
        command,
        request_id,
    })
    .context("encode mpv command")?;
    line.push('\n');
    Ok(line)
}

/// `None` for lines that are not the reply to `request_id` (events, other replies).
pub fn parse_reply(line: &str, request_id: u64) -> Option<Result<Option<Value>>> {
    let reply: Reply = serde_json::from_str(line.trim()).ok()?;
    if reply.request_id != Some(request_id) {
        return None;
    }
    Some(match reply.error.as_deref() {
        Some("success") | None => Ok(reply.data.filter(|v| !v.is_null())),
        Some(err) => Err(anyhow::anyhow!("mpv: {err}")),
    })
}

struct Connection {
    writer: Box<dyn Write + Send>,
    reader: BufReader<Box<dyn Read + Send>>,
}

/// Client for mpv's `--input-ipc-server` socket. Connects lazily, so commands
/// sent before the player opened its socket fail and the next one retries.
pub struct MpvIpc {
    path: PathBuf,
    conn: Option<Connection>,
    next_request: u64,
}

impl MpvIpc {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            conn: None,
            next_request: 1,
        }
    }

    pub fn socket_path(&self) -> &Path {
        &self.path
    }

    pub fn set_property(&mut self, name: &str, value: Value) -> Result<()> {
        self.request(&[Value::from("set_property"), Value::from(name), value])
            .map(|_| ())
    }

    /// Numeric property, `None` while mpv reports it unavailable.
    pub fn get_number(&mut self, name: &str) -> Result<Option<f64>> {
        match self.request(&[Value::from("get_property"), Value::from(name)]) {
            Ok(value) => Ok(value.and_then(|v| v.as_f64())),
            Err(err) if err.to_string().contains("property unavailable") => Ok(None),
            Err(err) => Err(err),
        }
    }

    pub fn seek_absolute(&mut self, secs: f64) -> Result<()> {
        self.request(&[Value::from("seek"), Value::from(secs), Value::from("absolute")])
            .map(|_| ())
    }

    fn request(&mut self, command: &[Value]) -> Result<Option<Value>> {
        let request_id = self.next_request;
        self.next_request += 1;
        let line = encode_request(command, request_id)?;
        if self.conn.is_none() {
            self.conn = Some(connect(&self.path)?);
        }
        let Some(conn) = self.conn.as_mut() else {
            bail!("mpv control socket is not connected");
        };
        match exchange(conn, &line, request_id) {
            Ok(reply) => reply,
            Err(err) => {
                self.conn = None;
                Err(err)
            }
        }
    }
}

/// Outer error: transport failure (connection dropped). Inner: mpv's answer.
fn exchange(conn: &mut Connection, line: &str, request_id: u64) -> Result<Result<Option<Value>>> {
    conn.writer
        .write_all(line.as_bytes())
        .context("write to mpv socket")?;
    conn.writer.flush().context("flush mpv socket")?;
    let mut buf = String::new();
    for _ in 0..MAX_SKIPPED_LINES {
        buf.clear();
        let read = conn.reader.read_line(&mut buf).context("read from mpv socket")?;
        if read == 0 {
            bail!("mpv closed its control socket");
        }
        if let Some(reply) = parse_reply(&buf, request_id) {
            return Ok(reply);
        }
    }
    bail!("no reply from mpv for request {request_id}")
}

#[cfg(unix)]
fn connect(path: &Path) -> Result<Connection> {
    use std::os::unix::net::UnixStream;

    let stream = UnixStream::connect(path)
        .with_context(|| format!("connect to mpv socket {}", path.display()))?;
    stream
        .set_read_timeout(Some(REPLY_TIMEOUT))
        .context("set mpv socket timeout")?;
    let reader = stream.try_clone().context("clone mpv socket")?;
    Ok(Connection {
        writer: Box::new(stream),
        reader: BufReader::new(Box::new(reader)),
    })
}

#[cfg(not(unix))]
fn connect(path: &Path) -> Result<Connection> {
    let _ = REPLY_TIMEOUT;
    bail!("mpv control needs a unix socket ({})", path.display())
}
