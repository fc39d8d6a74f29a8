use std::fmt::Display;

use crate::newtype;
use anyhow::anyhow;
use serde::Deserialize;
use serde_json::{Number, Value};

/// Заказ в том виде, в котором его отдаёт сервис заказов.
///
/// Любое поле может отсутствовать. Значения по-умолчанию подставляются при
/// рендеринге.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Order {
    pub order_uid: Option<Scalar>,
    pub customer_id: Option<Scalar>,
    pub track_number: Option<Scalar>,
    pub delivery_service: Option<Scalar>,

    /// Дата создания заказа. Формат заранее не известен.
    pub date_created: Option<Value>,

    pub delivery: Option<Delivery>,
    pub payment: Option<Payment>,
    pub items: Option<Vec<Item>>,
}

/// Данные о доставке.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Delivery {
    pub name: Option<Scalar>,
    pub phone: Option<Scalar>,
    pub email: Option<Scalar>,
    pub city: Option<Scalar>,
    pub address: Option<Scalar>,
}

/// Данные об оплате.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Payment {
    pub transaction: Option<Scalar>,
    pub provider: Option<Scalar>,
    pub goods_total: Option<Scalar>,
    pub delivery_cost: Option<Scalar>,
    pub custom_fee: Option<Scalar>,
    pub amount: Option<Scalar>,
    pub currency: Option<Scalar>,

    /// Момент оплаты. Обычно unix timestamp в секундах, но не обязательно.
    pub payment_dt: Option<Value>,
}

/// Позиция заказа.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct Item {
    pub name: Option<Scalar>,
    pub chrt_id: Option<Scalar>,
    pub brand: Option<Scalar>,
    pub size: Option<Scalar>,
    pub price: Option<Scalar>,

    /// Скидка в процентах.
    pub sale: Option<Scalar>,
    pub total_price: Option<Scalar>,
}

/// Скалярное значение, которое может прийти как числом, так и строкой.
/// При отображении выводится как есть.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(untagged)]
pub enum Scalar {
    Bool(bool),
    Number(Number),
    Text(String),
}

impl Scalar {
    /// Проверяет что значение "пустое": ноль, пустая строка или false.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Bool(b) => !b,
            Self::Number(n) => n.as_f64() == Some(0.0),
            Self::Text(s) => s.is_empty(),
        }
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Text(value.to_owned())
    }
}

impl Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => write!(f, "{}", s),
        }
    }
}

/// Ответ сервиса на запрос заказа.
#[derive(Deserialize, Default, Debug, Clone, PartialEq)]
pub struct OrderEnvelope {
    pub order: Option<Order>,
}

newtype!(OrderUid, order_uid_validate);

fn order_uid_validate(value: &str) -> anyhow::Result<()> {
    if value.is_empty() {
        return Err(anyhow!("shouldn't be empty"));
    }

    if value.chars().any(|c| c.is_whitespace() || c == '/') {
        return Err(anyhow!("shouldn't contain whitespaces or slashes"));
    }

    Ok(())
}
