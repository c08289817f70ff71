// src/connect/mod.rs  —  Play-on-phone display (local-IP lookup + QR)
//
// The one asynchronous boundary in the program: a one-shot background
// fetch of the local address endpoint.  Fire-and-forget — no retry,
// and every failure is a diagnostic log that leaves the session and
// language state alone.

use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct IpReply {
    ip: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectInfo {
    /// `http://<ip>:<port>` — what the phone should open.
    pub url: String,
}

/// Black-box QR collaborator.  Production hands the URL to whatever
/// renders the code; tests record the call.
pub trait QrRenderer: Send {
    fn render(&mut self, url: &str);
}

/// Default renderer: acknowledges the URL in the log.  The visible QR
/// slot is filled by the front end from the same [`ConnectInfo`].
#[derive(Debug, Default)]
pub struct LogQr;

impl QrRenderer for LogQr {
    fn render(&mut self, url: &str) {
        log::info!("connect: QR payload ready for {url}");
    }
}

/// GET `<endpoint>/api/ip`, expecting `{"ip": "..."}`.
/// `Ok(None)` when the reply has no usable `ip` field.
pub fn fetch_connect_url(endpoint: &str, port: u16) -> Result<Option<String>> {
    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(3))
        .build()
        .context("building connect client")?;
    let body = client
        .get(format!("{endpoint}/api/ip"))
        .send()
        .context("requesting /api/ip")?
        .error_for_status()
        .context("/api/ip status")?
        .text()
        .context("reading /api/ip reply")?;
    let reply: IpReply = serde_json::from_str(&body).context("decoding /api/ip reply")?;
    Ok(reply.ip.map(|ip| format!("http://{ip}:{port}")))
}

/// One-shot lookup on a background thread; the result (if any) lands
/// on `tx`.  Callers drain the channel from the event loop.
pub fn spawn_ip_lookup(endpoint: String, port: u16, tx: Sender<ConnectInfo>) {
    thread::spawn(move || match fetch_connect_url(&endpoint, port) {
        Ok(Some(url)) => {
            let _ = tx.send(ConnectInfo { url });
        }
        Ok(None) => log::debug!("connect: reply had no ip field"),
        Err(e) => log::debug!("connect: could not fetch ip: {e:#}"),
    });
}
