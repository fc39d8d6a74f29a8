use enum_iterator::cardinality;
use log::debug;

use crate::model::{Item, Order, Scalar};

use super::{compiled::Template, compiled::Values, date::format_date, MISSING};

/// Значение по-умолчанию для денежных полей.
pub const ZERO: &str = "0";

/// Значение поля скидки, если скидки нет.
pub const NO_SALE: &str = "без скидки";

const NO_ITEM_NAME: &str = "Без названия";
const NO_ITEM_CHRT_ID: &str = "артикул не указан";
const NO_ITEM_BRAND: &str = "бренд не указан";
const NO_ITEM_SIZE: &str = "размер не указан";

/// Плейсхолдеры шаблона заказа.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    std::hash::Hash,
    derive_more::Display,
    enum_iterator::Sequence,
)]
pub enum OrderField {
    #[display(fmt = "order_uid")]
    OrderUid,
    #[display(fmt = "customer_id")]
    CustomerId,
    #[display(fmt = "track_number")]
    TrackNumber,
    #[display(fmt = "delivery_service")]
    DeliveryService,
    #[display(fmt = "date_created")]
    DateCreated,
    #[display(fmt = "delivery_name")]
    DeliveryName,
    #[display(fmt = "delivery_phone")]
    DeliveryPhone,
    #[display(fmt = "delivery_email")]
    DeliveryEmail,
    #[display(fmt = "delivery_city")]
    DeliveryCity,
    #[display(fmt = "delivery_address")]
    DeliveryAddress,
    #[display(fmt = "payment_transaction")]
    PaymentTransaction,
    #[display(fmt = "payment_provider")]
    PaymentProvider,
    #[display(fmt = "payment_goods_total")]
    PaymentGoodsTotal,
    #[display(fmt = "payment_delivery_cost")]
    PaymentDeliveryCost,
    #[display(fmt = "payment_custom_fee")]
    PaymentCustomFee,
    #[display(fmt = "payment_amount")]
    PaymentAmount,
    #[display(fmt = "payment_currency")]
    PaymentCurrency,
    #[display(fmt = "payment_payment_dt")]
    PaymentPaymentDt,
    #[display(fmt = "items_count")]
    ItemsCount,
    #[display(fmt = "items_html")]
    ItemsHtml,
}

/// Плейсхолдеры шаблона позиции заказа.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    std::hash::Hash,
    derive_more::Display,
    enum_iterator::Sequence,
)]
pub enum ItemField {
    #[display(fmt = "item_name")]
    Name,
    #[display(fmt = "item_chrt_id")]
    ChrtId,
    #[display(fmt = "item_brand")]
    Brand,
    #[display(fmt = "item_size")]
    Size,
    #[display(fmt = "item_price")]
    Price,
    #[display(fmt = "item_sale")]
    Sale,
    #[display(fmt = "item_total_price")]
    TotalPrice,
}

/// Превращает заказ в плоский набор значений для шаблона заказа.
///
/// Позиции заказа рендерятся шаблоном `item_template` и попадают в
/// [`OrderField::ItemsHtml`] уже готовой разметкой.
pub fn flatten(order: &Order, item_template: &Template) -> Values<OrderField> {
    let mut values = Values::with_capacity(cardinality::<OrderField>());

    values.insert(OrderField::OrderUid, verbatim(&order.order_uid));
    values.insert(OrderField::CustomerId, verbatim(&order.customer_id));
    values.insert(OrderField::TrackNumber, verbatim(&order.track_number));
    values.insert(OrderField::DeliveryService, verbatim(&order.delivery_service));
    values.insert(OrderField::DateCreated, format_date(order.date_created.as_ref()));

    let delivery = order.delivery.as_ref();
    values.insert(
        OrderField::DeliveryName,
        scalar_or(delivery.and_then(|d| d.name.as_ref()), MISSING),
    );
    values.insert(
        OrderField::DeliveryPhone,
        scalar_or(delivery.and_then(|d| d.phone.as_ref()), MISSING),
    );
    values.insert(
        OrderField::DeliveryEmail,
        scalar_or(delivery.and_then(|d| d.email.as_ref()), MISSING),
    );
    values.insert(
        OrderField::DeliveryCity,
        scalar_or(delivery.and_then(|d| d.city.as_ref()), MISSING),
    );
    values.insert(
        OrderField::DeliveryAddress,
        scalar_or(delivery.and_then(|d| d.address.as_ref()), MISSING),
    );

    let payment = order.payment.as_ref();
    values.insert(
        OrderField::PaymentTransaction,
        scalar_or(payment.and_then(|p| p.transaction.as_ref()), MISSING),
    );
    values.insert(
        OrderField::PaymentProvider,
        scalar_or(payment.and_then(|p| p.provider.as_ref()), MISSING),
    );
    values.insert(
        OrderField::PaymentGoodsTotal,
        scalar_or(payment.and_then(|p| p.goods_total.as_ref()), ZERO),
    );
    values.insert(
        OrderField::PaymentDeliveryCost,
        scalar_or(payment.and_then(|p| p.delivery_cost.as_ref()), ZERO),
    );
    values.insert(
        OrderField::PaymentCustomFee,
        scalar_or(payment.and_then(|p| p.custom_fee.as_ref()), ZERO),
    );
    values.insert(
        OrderField::PaymentAmount,
        scalar_or(payment.and_then(|p| p.amount.as_ref()), ZERO),
    );
    values.insert(
        OrderField::PaymentCurrency,
        scalar_or(payment.and_then(|p| p.currency.as_ref()), MISSING),
    );
    values.insert(
        OrderField::PaymentPaymentDt,
        format_date(payment.and_then(|p| p.payment_dt.as_ref())),
    );

    let items = order.items.as_deref().unwrap_or_default();
    debug!("Render {} items", items.len());
    values.insert(OrderField::ItemsCount, items.len().to_string());
    values.insert(OrderField::ItemsHtml, render_items(item_template, items));

    values
}

/// Превращает позицию заказа в плоский набор значений для шаблона позиции.
pub fn flatten_item(item: &Item) -> Values<ItemField> {
    let mut values = Values::with_capacity(cardinality::<ItemField>());

    values.insert(ItemField::Name, scalar_or(item.name.as_ref(), NO_ITEM_NAME));
    values.insert(ItemField::ChrtId, scalar_or(item.chrt_id.as_ref(), NO_ITEM_CHRT_ID));
    values.insert(ItemField::Brand, scalar_or(item.brand.as_ref(), NO_ITEM_BRAND));
    values.insert(ItemField::Size, scalar_or(item.size.as_ref(), NO_ITEM_SIZE));
    values.insert(ItemField::Price, scalar_or(item.price.as_ref(), ZERO));
    values.insert(ItemField::Sale, sale(item.sale.as_ref()));
    values.insert(ItemField::TotalPrice, scalar_or(item.total_price.as_ref(), ZERO));

    values
}

/// Рендерит каждую позицию шаблоном и склеивает результаты в исходном порядке.
pub fn render_items(item_template: &Template, items: &[Item]) -> String {
    items
        .iter()
        .map(|item| item_template.render(&flatten_item(item)))
        .collect()
}

fn verbatim(value: &Option<Scalar>) -> String {
    value.as_ref().map(|s| s.to_string()).unwrap_or_default()
}

fn scalar_or(value: Option<&Scalar>, default: &str) -> String {
    match value {
        Some(s) if !s.is_blank() => s.to_string(),
        _ => default.to_owned(),
    }
}

fn sale(value: Option<&Scalar>) -> String {
    match value {
        Some(s) if !s.is_blank() => format!("{}%", s),
        _ => NO_SALE.to_owned(),
    }
}
