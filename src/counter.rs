use std::sync::mpsc::Sender;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use rand::Rng;
use reqwest::blocking::Client;
use serde_json::Value;

use crate::state::Delta;

const REQUEST_TIMEOUT_SECS: u64 = 10;
const DEMO_RANGE: std::ops::Range<usize> = 1200..1250;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Presence count from a realtime-database payload: one key per online user.
pub fn count_from_json(body: &str) -> Result<usize> {
    let value: Value = serde_json::from_str(body).context("invalid presence payload")?;
    match value {
        Value::Null => Ok(0),
        Value::Object(map) => Ok(map.len()),
        Value::Array(items) => Ok(items.iter().filter(|v| !v.is_null()).count()),
        other => anyhow::bail!("unexpected presence payload: {other}"),
    }
}

pub fn presence_url(base: &str) -> String {
    format!("{}/online_users.json", base.trim_end_matches('/'))
}

pub fn fetch_online_count(base: &str) -> Result<usize> {
    let url = presence_url(base);
    let body = http_client()?
        .get(&url)
        .send()
        .with_context(|| format!("request failed: {url}"))?
        .error_for_status()
        .with_context(|| format!("bad status: {url}"))?
        .text()
        .context("failed to read presence body")?;
    count_from_json(&body)
}

pub fn synthetic_count<R: Rng>(rng: &mut R) -> usize {
    rng.gen_range(DEMO_RANGE)
}

/// Polls the presence endpoint until the receiving side goes away.
pub fn spawn_counter(tx: Sender<Delta>, base_url: Option<String>, poll: Duration) {
    thread::spawn(move || {
        let mut rng = rand::thread_rng();
        let mut warned = false;
        loop {
            let delta = match base_url.as_deref().map(fetch_online_count) {
                Some(Ok(count)) => {
                    warned = false;
                    Delta::CounterUpdate { count, demo: false }
                }
                Some(Err(err)) => {
                    if !warned {
                        warned = true;
                        if tx
                            .send(Delta::Log(format!("[WARN] Viewer counter offline: {err:#}")))
                            .is_err()
                        {
                            return;
                        }
                    }
                    Delta::CounterUpdate {
                        count: synthetic_count(&mut rng),
                        demo: true,
                    }
                }
                None => Delta::CounterUpdate {
                    count: synthetic_count(&mut rng),
                    demo: true,
                },
            };
            if tx.send(delta).is_err() {
                return;
            }
            thread::sleep(poll);
        }
    });
}
