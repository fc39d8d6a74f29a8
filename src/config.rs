use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use resolve_path::PathResolveExt;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Адрес сервиса заказов.
    pub base_url: String,

    /// Таймаут запроса к сервису в секундах.
    pub timeout_secs: u64,

    /// Путь до шаблона заказа.
    pub order_template_path: PathBuf,

    /// Путь до шаблона позиции заказа.
    pub item_template_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8081".to_owned(),
            timeout_secs: 5,
            order_template_path: PathBuf::from("./templates/order_template.html"),
            item_template_path: PathBuf::from("./templates/item_template.html"),
        }
    }
}

/// Загружает конфигурацию.
/// Если файла нет, то он будет создан со значениями по-умолчанию.
pub fn load(path: PathBuf) -> anyhow::Result<Config> {
    let mut cfg: Config = confy::load_path(path)?;

    normalize(&mut cfg)?;

    Ok(cfg)
}

pub fn normalize(cfg: &mut Config) -> anyhow::Result<()> {
    // Чтобы правильно обработать относительные пути.
    cfg.order_template_path = cfg.order_template_path.try_resolve()?.into_owned();
    cfg.item_template_path = cfg.item_template_path.try_resolve()?.into_owned();

    if cfg.timeout_secs == 0 {
        anyhow::bail!("timeout_secs should be positive");
    }

    Ok(())
}
