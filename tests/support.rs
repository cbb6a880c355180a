use std::io::{BufRead, BufReader, Read, Write};
use std::net::{TcpListener, TcpStream};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

/// Short token the canned shortener hands out.
pub const SHORT_TOKEN: &str = "ABCDEFGH";
/// The URL the canned shortener redirects back to.
pub const SUBMITTED_URL: &str = "http://example.com/SMOKECHECK";

pub struct ServerHandle {
    shutdown: mpsc::Sender<()>,
    thread: Option<thread::JoinHandle<()>>,
}

impl Drop for ServerHandle {
    fn drop(&mut self) {
        let _send_result = self.shutdown.send(());
        if let Some(handle) = self.thread.take() {
            drop(handle.join());
        }
    }
}

/// Spawns a canned URL-shortener for probe tests. With `empty_ping_body`
/// the root endpoint answers 200 with no body.
///
/// # Errors
///
/// Returns an error if the listener cannot be created or configured.
pub fn spawn_shortener_server(empty_ping_body: bool) -> Result<(String, ServerHandle), String> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .map_err(|err| format!("bind test server failed: {}", err))?;
    let addr = listener
        .local_addr()
        .map_err(|err| format!("server addr failed: {}", err))?;
    listener
        .set_nonblocking(true)
        .map_err(|err| format!("set_nonblocking failed: {}", err))?;

    let (shutdown_tx, shutdown_rx) = mpsc::channel();

    let handle = thread::spawn(move || {
        loop {
            if shutdown_rx.try_recv().is_ok() {
                break;
            }

            match listener.accept() {
                Ok((stream, _)) => {
                    let _blocking = stream.set_nonblocking(false);
                    thread::spawn(move || handle_client(stream, empty_ping_body));
                }
                Err(err) if err.kind() == std::io::ErrorKind::WouldBlock => {
                    thread::sleep(Duration::from_millis(10));
                }
                Err(_) => break,
            }
        }
    });

    Ok((
        format!("http://{}/", addr),
        ServerHandle {
            shutdown: shutdown_tx,
            thread: Some(handle),
        },
    ))
}

fn handle_client(stream: TcpStream, empty_ping_body: bool) {
    let mut reader = BufReader::new(stream);
    let mut request_line = String::new();
    if reader.read_line(&mut request_line).is_err() {
        return;
    }

    let mut content_length = 0usize;
    loop {
        let mut line = String::new();
        match reader.read_line(&mut line) {
            Ok(0) => break,
            Ok(_) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    break;
                }
                let lowered = trimmed.to_ascii_lowercase();
                if let Some(value) = lowered.strip_prefix("content-length:") {
                    content_length = value.trim().parse().unwrap_or(0);
                }
            }
            Err(_) => return,
        }
    }
    if content_length > 0 {
        let mut body = vec![0u8; content_length];
        if reader.read_exact(&mut body).is_err() {
            return;
        }
    }

    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or("");
    let path = parts.next().unwrap_or("");
    let response = match (method, path) {
        ("GET", "/") => {
            if empty_ping_body {
                plain_response(200, "OK", "")
            } else {
                plain_response(200, "OK", "pong")
            }
        }
        ("POST", "/api/add") => plain_response(
            200,
            "OK",
            &format!("{{\"ShortUrl\": \"{}\"}}", SHORT_TOKEN),
        ),
        ("GET", lookup) if lookup.trim_start_matches('/') == SHORT_TOKEN => {
            redirect_response(SUBMITTED_URL)
        }
        _ => plain_response(404, "Not Found", "not found"),
    };

    let mut stream = reader.into_inner();
    let _write_result = stream.write_all(response.as_bytes());
    let _flush_result = stream.flush();
}

fn plain_response(status: u16, reason: &str, body: &str) -> String {
    format!(
        "HTTP/1.1 {} {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
        status,
        reason,
        body.len(),
        body
    )
}

fn redirect_response(location: &str) -> String {
    format!(
        "HTTP/1.1 307 Temporary Redirect\r\nLocation: {}\r\nContent-Length: 0\r\nConnection: close\r\n\r\n",
        location
    )
}
