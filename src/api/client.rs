use std::time::Duration;

use log::debug;
use reqwest::StatusCode;

use crate::model::{Order, OrderEnvelope, OrderUid};

/// Клиент к сервису заказов.
pub struct OrderClient {
    client: reqwest::blocking::Client,
    base_url: String,
}

impl OrderClient {
    /// Создаёт новый инстанс клиента.
    pub fn new(base_url: &str, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .connect_timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_owned(),
        })
    }

    /// Запрашивает заказ по идентификатору.
    /// Если заказа нет, то возвращается `Ok(None)`.
    pub fn get_order(&self, uid: &OrderUid) -> FetchResult {
        let url = self.build_url(uid);

        debug!("Запрос в АПИ: GET {}", url);
        let resp = self.client.get(&url).send()?;

        let status = resp.status();
        let body = resp.text()?;

        debug!("Ответ на {}: {} {}", url, status, body);

        parse_response(status, &body)
    }

    fn build_url(&self, uid: &OrderUid) -> String {
        format!("{}/order/{}", self.base_url, uid.as_str())
    }
}

fn parse_response(status: StatusCode, body: &str) -> FetchResult {
    if status == StatusCode::NOT_FOUND {
        return Ok(None);
    }

    if status != StatusCode::OK {
        return Err(FetchError::Status {
            status,
            body: body.trim().to_owned(),
        });
    }

    let envelope: OrderEnvelope = serde_json::from_str(body)?;

    Ok(envelope.order)
}

pub type FetchResult = std::result::Result<Option<Order>, FetchError>;

#[derive(thiserror::Error, Debug)]
pub enum FetchError {
    #[error("request: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("got {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("deserialize: {0}")]
    Deserialize(#[from] serde_json::Error),
}
