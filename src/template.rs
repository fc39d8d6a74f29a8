pub mod compiled;
pub mod date;
pub mod flatten;
pub mod raw;

use std::path::Path;

use anyhow::Context;
use enum_iterator::all;
use log::{debug, warn};

use crate::model::Order;
use compiled::Template;
use flatten::{ItemField, OrderField};

/// Значение для отсутствующих полей.
pub const MISSING: &str = "-";

/// Пара шаблонов, по которым рендерится заказ.
/// Загружается один раз и передаётся в рендеринг по ссылке.
#[derive(Debug, Clone)]
pub struct Templates {
    /// Шаблон всего заказа.
    pub order: Template,

    /// Шаблон одной позиции заказа.
    pub item: Template,
}

impl Templates {
    pub fn new(order: String, item: String) -> anyhow::Result<Self> {
        Ok(Self {
            order: Template::new(order).context("order template")?,
            item: Template::new(item).context("item template")?,
        })
    }

    /// Загружает оба шаблона из файлов.
    pub fn load(order_path: &Path, item_path: &Path) -> anyhow::Result<Self> {
        let templates = Self::new(raw::load(order_path)?, raw::load(item_path)?)?;

        for ph in templates.unknown_order_placeholders() {
            warn!("Неизвестный плейсхолдер {{{{{}}}}} в шаблоне заказа", ph);
        }
        for ph in templates.unknown_item_placeholders() {
            warn!("Неизвестный плейсхолдер {{{{{}}}}} в шаблоне позиции", ph);
        }

        Ok(templates)
    }

    pub fn unknown_order_placeholders(&self) -> Vec<String> {
        self.order.unknown_placeholders(all::<OrderField>())
    }

    pub fn unknown_item_placeholders(&self) -> Vec<String> {
        self.item.unknown_placeholders(all::<ItemField>())
    }

    /// Рендерит заказ в готовую разметку.
    pub fn render(&self, order: &Order) -> String {
        debug!("Рендерим заказ {:?}", order.order_uid);

        let values = flatten::flatten(order, &self.item);

        self.order.render(&values)
    }
}
