#![cfg(feature = "server")]
use anyhow::Context;
use dioxus::logger::tracing::{info, warn};
use once_cell::sync::OnceCell;
use reqwest::{Client, Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::error::Error as _;

use crate::backend::config::EquranConfig;
use crate::shared::types::ScheduleTable;

pub static GLOBAL_EQURAN: OnceCell<EquranClient> = OnceCell::new();

#[derive(Debug, thiserror::Error)]
pub enum EquranError {
    #[error("sending {method} {url}: {source}")]
    Request {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{method} {url} failed with status {status}")]
    Status {
        method: Method,
        url: String,
        status: StatusCode,
    },
    #[error("decoding JSON from {method} {url} failed: {source}")]
    Decode {
        method: Method,
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// `{ "data": ... }` wrapper used by every equran.id response.
#[derive(Debug, Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Debug, Serialize)]
struct CitiesRequest<'a> {
    provinsi: &'a str,
}

#[derive(Debug, Serialize)]
struct ScheduleRequest<'a> {
    provinsi: &'a str,
    #[serde(rename = "kabKota")]
    kab_kota: &'a str,
}

/// Client for the three imsakiyah endpoints.
#[derive(Debug, Clone)]
pub struct EquranClient {
    http: Client,
    base_url: String,
}

impl EquranClient {
    pub fn new(config: &EquranConfig) -> anyhow::Result<Self> {
        let http = Client::builder()
            .connect_timeout(config.connect_timeout)
            .timeout(config.timeout)
            .build()
            .context("building equran.id HTTP client")?;
        Ok(Self {
            http,
            base_url: config.base_url.clone(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn provinces(&self) -> Result<Vec<String>, EquranError> {
        let env: DataEnvelope<Vec<String>> = self.fetch::<_, ()>("provinsi", Method::GET, None).await?;
        Ok(env.data)
    }

    pub async fn cities(&self, province: &str) -> Result<Vec<String>, EquranError> {
        let body = CitiesRequest { provinsi: province };
        let env: DataEnvelope<Vec<String>> = self.fetch("kabkota", Method::POST, Some(&body)).await?;
        Ok(env.data)
    }

    /// Whole table for the region, keyed by date.
    pub async fn schedule(&self, province: &str, city: &str) -> Result<ScheduleTable, EquranError> {
        let body = ScheduleRequest {
            provinsi: province,
            kab_kota: city,
        };
        let env: DataEnvelope<DataEnvelope<ScheduleTable>> =
            self.fetch("jadwal", Method::POST, Some(&body)).await?;
        Ok(env.data.data)
    }

    async fn fetch<T: DeserializeOwned, B: Serialize>(
        &self,
        path: &str,
        method: Method,
        body: Option<&B>,
    ) -> Result<T, EquranError> {
        let url = format!("{}{}", self.base_url, path);
        info!("[equran] {} {}", method.as_str(), url);
        let mut req = self.http.request(method.clone(), &url);
        if let Some(b) = body {
            // .json() also sets Content-Type: application/json
            req = req.json(b);
        }
        let res = match req.send().await {
            Ok(r) => r,
            Err(e) => {
                if e.is_timeout() {
                    warn!("[equran] hint: request timed out");
                }
                if e.is_connect() {
                    warn!("[equran] hint: connection failed (DNS/route/refused/TLS). Check EQURAN_BASE_URL");
                }
                let mut chain = Vec::new();
                let mut src: Option<&dyn std::error::Error> = e.source();
                while let Some(s) = src {
                    chain.push(s.to_string());
                    src = s.source();
                }
                if !chain.is_empty() {
                    warn!("[equran] error chain: {}", chain.join(" -> "));
                }
                return Err(EquranError::Request {
                    method,
                    url,
                    source: e,
                });
            }
        };
        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            let snip = text.chars().take(300).collect::<String>();
            warn!("[equran] request failed: status={} body=\n{}", status, snip);
            return Err(EquranError::Status {
                method,
                url,
                status,
            });
        }
        let bytes = res.bytes().await.map_err(|e| EquranError::Request {
            method: method.clone(),
            url: url.clone(),
            source: e,
        })?;
        serde_json::from_slice(&bytes).map_err(|e| {
            let snip = String::from_utf8_lossy(&bytes);
            let snip = snip.chars().take(300).collect::<String>();
            warn!("[equran] undecodable body from {}: {}", url, snip);
            EquranError::Decode {
                method,
                url,
                source: e,
            }
        })
    }
}

/// Shared client, built from the environment on first use if `main` did not.
pub fn client() -> anyhow::Result<&'static EquranClient> {
    GLOBAL_EQURAN.get_or_try_init(|| EquranClient::new(&EquranConfig::from_env()?))
}
