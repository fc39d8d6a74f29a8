use std::fmt::Display;

use crate::{model::Order, template::Templates};

/// Сообщение для отсутствующего заказа.
pub const NOT_FOUND: &str = "<p>Заказ не найден</p>";

/// Превращает результат поиска заказа в разметку для отображения.
///
/// Ошибки поиска не пробрасываются, а показываются пользователю как текст.
pub fn present<E: Display>(lookup: Result<Option<Order>, E>, templates: &Templates) -> String {
    match lookup {
        Ok(Some(order)) => templates.render(&order),
        Ok(None) => NOT_FOUND.to_owned(),
        Err(e) => error(e),
    }
}

/// Разметка с сообщением об ошибке.
pub fn error<E: Display>(e: E) -> String {
    format!("<p>Ошибка: {}</p>", e)
}
