//! A stand-in for the access point's web interface.
//!
//! Serves `login.cgi` and `StatusClients.htm` over TLS with a freshly generated
//! self-signed certificate and records every request it receives. Each connection
//! carries exactly one request (`Connection: close`), so every request is seen on the
//! wire in the order the client sent it.

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};

use anyhow::Context;
use rcgen::CertifiedKey;
use tokio::io::{AsyncBufReadExt, AsyncReadExt, AsyncWriteExt, BufReader};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;
use tokio_rustls::rustls::pki_types::{PrivateKeyDer, PrivatePkcs8KeyDer};
use tokio_rustls::rustls::{self, ServerConfig};
use tokio_rustls::TlsAcceptor;

const LOGIN_PATH: &str = "/login.cgi";
const STATUS_PATH: &str = "/StatusClients.htm";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: String,
    /// Request target exactly as it appeared on the request line.
    pub path: String,
    pub cookie: Option<String>,
    pub body: String,
}

#[derive(Clone)]
enum Reply {
    Page { status: u16, body: String },
    /// Close the connection without answering.
    HangUp,
}

struct Response {
    status: u16,
    set_cookie: Option<String>,
    body: String,
}

struct State {
    login_status: u16,
    pages: HashMap<u8, Reply>,
    sessions: usize,
    requests: Vec<RecordedRequest>,
}

pub struct MockAccessPoint {
    addr: SocketAddr,
    state: Arc<Mutex<State>>,
    server: JoinHandle<()>,
}

impl MockAccessPoint {
    /// Starts serving on an ephemeral loopback port.
    ///
    /// Logins succeed and every interface lists no clients until configured otherwise.
    pub async fn start() -> anyhow::Result<Self> {
        let acceptor = tls_acceptor()?;
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .context("binding mock access point")?;
        let addr = listener.local_addr()?;

        let state = Arc::new(Mutex::new(State {
            login_status: 200,
            pages: HashMap::new(),
            sessions: 0,
            requests: Vec::new(),
        }));

        let server_state = state.clone();
        let server = tokio::spawn(async move {
            while let Ok((tcp, _)) = listener.accept().await {
                let acceptor = acceptor.clone();
                let state = server_state.clone();
                tokio::spawn(async move {
                    // Handshake failures are expected when the client verifies certificates.
                    let _ = serve_connection(acceptor, tcp, state).await;
                });
            }
        });

        Ok(Self {
            addr,
            state,
            server,
        })
    }

    /// Value for `ScannerConfig::host`.
    pub fn host(&self) -> String {
        self.addr.to_string()
    }

    pub fn set_login_status(&self, status: u16) {
        self.state.lock().unwrap().login_status = status;
    }

    pub fn set_page(&self, unit: u8, status: u16, body: impl Into<String>) {
        self.state.lock().unwrap().pages.insert(
            unit,
            Reply::Page {
                status,
                body: body.into(),
            },
        );
    }

    pub fn hang_up_on(&self, unit: u8) {
        self.state.lock().unwrap().pages.insert(unit, Reply::HangUp);
    }

    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.state.lock().unwrap().requests.clone()
    }

    pub fn paths(&self) -> Vec<String> {
        self.requests().into_iter().map(|request| request.path).collect()
    }

    pub fn clear_requests(&self) {
        self.state.lock().unwrap().requests.clear();
    }
}

impl Drop for MockAccessPoint {
    fn drop(&mut self) {
        self.server.abort();
    }
}

/// Builds a status page listing `ids` the way the firmware does.
pub fn status_page(ids: &[&str]) -> String {
    let rows: String = ids
        .iter()
        .enumerate()
        .map(|(idx, id)| {
            format!(
                r#"<tr class="section-row"><td>{}</td><td>{id}</td><td>-{}</td><td>54 Mb/s</td></tr>"#,
                idx + 1,
                40 + idx
            )
        })
        .collect();

    format!(
        r#"<html><head><title>Status - Clients</title></head><body>
<table class="std"><tr class="section-head"><td>No.</td><td>MAC Address</td><td>RSSI</td><td>Rate</td></tr>
{rows}
</table></body></html>"#
    )
}

fn tls_acceptor() -> anyhow::Result<TlsAcceptor> {
    let CertifiedKey { cert, key_pair } =
        rcgen::generate_simple_self_signed(vec!["localhost".to_string()])
            .context("generating self-signed certificate")?;
    let key = PrivateKeyDer::Pkcs8(PrivatePkcs8KeyDer::from(key_pair.serialize_der()));

    let provider = Arc::new(rustls::crypto::ring::default_provider());
    let config = ServerConfig::builder_with_provider(provider)
        .with_safe_default_protocol_versions()
        .context("selecting TLS versions")?
        .with_no_client_auth()
        .with_single_cert(vec![cert.der().clone()], key)
        .context("loading self-signed certificate")?;

    Ok(TlsAcceptor::from(Arc::new(config)))
}

async fn serve_connection(
    acceptor: TlsAcceptor,
    tcp: TcpStream,
    state: Arc<Mutex<State>>,
) -> anyhow::Result<()> {
    let tls = acceptor.accept(tcp).await?;
    let mut reader = BufReader::new(tls);

    let mut request_line = String::new();
    if reader.read_line(&mut request_line).await? == 0 {
        return Ok(());
    }
    let mut parts = request_line.split_whitespace();
    let method = parts.next().unwrap_or_default().to_string();
    let path = parts.next().unwrap_or_default().to_string();

    let mut content_length: usize = 0;
    let mut cookie: Option<String> = None;
    loop {
        let mut line = String::new();
        reader.read_line(&mut line).await?;
        let line = line.trim_end();
        if line.is_empty() {
            break;
        }
        if let Some((name, value)) = line.split_once(':') {
            match name.trim().to_ascii_lowercase().as_str() {
                "content-length" => content_length = value.trim().parse().unwrap_or(0),
                "cookie" => cookie = Some(value.trim().to_string()),
                _ => {}
            }
        }
    }

    let mut body = vec![0u8; content_length];
    reader.read_exact(&mut body).await?;

    let request = RecordedRequest {
        method,
        path,
        cookie,
        body: String::from_utf8_lossy(&body).into_owned(),
    };

    let Some(response) = route(&state, request) else {
        return Ok(());
    };

    let mut stream = reader.into_inner();
    let mut head = format!(
        "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n",
        response.status,
        reason(response.status),
        response.body.len()
    );
    if let Some(set_cookie) = response.set_cookie {
        head.push_str(&format!("Set-Cookie: {set_cookie}\r\n"));
    }
    head.push_str("\r\n");

    stream.write_all(head.as_bytes()).await?;
    stream.write_all(response.body.as_bytes()).await?;
    stream.flush().await?;
    stream.shutdown().await?;
    Ok(())
}

/// Records `request` and decides the answer; `None` hangs up.
fn route(state: &Mutex<State>, request: RecordedRequest) -> Option<Response> {
    let mut state = state.lock().unwrap();
    let (method, path) = (request.method.clone(), request.path.clone());
    state.requests.push(request);

    match (method.as_str(), path.as_str()) {
        ("POST", LOGIN_PATH) => {
            if state.login_status != 200 {
                return Some(Response {
                    status: state.login_status,
                    set_cookie: None,
                    body: "<html><body>Login failed</body></html>".to_string(),
                });
            }
            state.sessions += 1;
            Some(Response {
                status: 200,
                set_cookie: Some(format!("session_id={}; Path=/", state.sessions)),
                body: status_page(&[]),
            })
        }
        ("GET", path) if path.starts_with(STATUS_PATH) => {
            let reply = unit_of(path)
                .and_then(|unit| state.pages.get(&unit).cloned())
                .unwrap_or(Reply::Page {
                    status: 200,
                    body: status_page(&[]),
                });
            match reply {
                Reply::Page { status, body } => Some(Response {
                    status,
                    set_cookie: None,
                    body,
                }),
                Reply::HangUp => None,
            }
        }
        _ => Some(Response {
            status: 404,
            set_cookie: None,
            body: "<html><body>Not Found</body></html>".to_string(),
        }),
    }
}

fn unit_of(path: &str) -> Option<u8> {
    path.split('&')
        .find_map(|param| param.strip_prefix("unit="))
        .and_then(|unit| unit.parse().ok())
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        401 => "Unauthorized",
        403 => "Forbidden",
        404 => "Not Found",
        500 => "Internal Server Error",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}
