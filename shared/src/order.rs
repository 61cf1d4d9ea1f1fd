use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 订单状态流转：Pending -> Processing -> Shipped -> Delivered，
/// 任意阶段可被取消。变体名即线上字符串。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OrderStatus {
    #[default]
    Pending,
    Processing,
    Shipped,
    Delivered,
    Cancelled,
}

impl OrderStatus {
    /// 管理端状态下拉框使用的全量列表
    pub const ALL: [OrderStatus; 5] = [
        OrderStatus::Pending,
        OrderStatus::Processing,
        OrderStatus::Shipped,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Processing => "Processing",
            OrderStatus::Shipped => "Shipped",
            OrderStatus::Delivered => "Delivered",
            OrderStatus::Cancelled => "Cancelled",
        }
    }

    /// 物流进度条：已发货及之后视为"在途"
    pub fn shipped_or_later(&self) -> bool {
        matches!(self, OrderStatus::Shipped | OrderStatus::Delivered)
    }

    pub fn in_progress_or_later(&self) -> bool {
        matches!(
            self,
            OrderStatus::Processing | OrderStatus::Shipped | OrderStatus::Delivered
        )
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 支付方式；线上字符串为人类可读形式（"Credit Card" 等）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum PaymentMethod {
    #[default]
    #[serde(rename = "Credit Card")]
    CreditCard,
    #[serde(rename = "Debit Card")]
    DebitCard,
    #[serde(rename = "PayPal")]
    PayPal,
    #[serde(rename = "Cash on Delivery")]
    CashOnDelivery,
}

impl PaymentMethod {
    pub const ALL: [PaymentMethod; 4] = [
        PaymentMethod::CreditCard,
        PaymentMethod::DebitCard,
        PaymentMethod::PayPal,
        PaymentMethod::CashOnDelivery,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::CreditCard => "Credit Card",
            PaymentMethod::DebitCard => "Debit Card",
            PaymentMethod::PayPal => "PayPal",
            PaymentMethod::CashOnDelivery => "Cash on Delivery",
        }
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 订单行：下单时的商品快照，价格不随商品后续变动
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 商品 id（后端字段名为 product）
    pub product: String,
    pub name: String,
    pub quantity: u32,
    pub image: String,
    pub price: f64,
}

impl OrderItem {
    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ShippingAddress {
    pub street: String,
    pub city: String,
    pub state: String,
    pub zip_code: String,
    pub country: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: String,
    pub order_items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub items_price: f64,
    pub tax_price: f64,
    pub shipping_price: f64,
    pub total_price: f64,
    #[serde(default)]
    pub status: OrderStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Order {
    /// 订单号短格式：取 id 末 8 位展示
    pub fn short_id(&self) -> &str {
        let id = self.id.as_str();
        &id[id.len().saturating_sub(8)..]
    }
}

/// `POST /orders` 请求体；价格字段为客户端计算的参考值，
/// 后端会重新核算并以核算结果为准
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub order_items: Vec<OrderItem>,
    pub shipping_address: ShippingAddress,
    pub payment_method: PaymentMethod,
    pub items_price: f64,
    pub tax_price: f64,
    pub shipping_price: f64,
    pub total_price: f64,
}

/// `PUT /orders/:id/status` 请求体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateOrderStatusRequest {
    pub status: OrderStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn order_status_serializes_as_wire_string() {
        assert_eq!(
            serde_json::to_string(&OrderStatus::Processing).unwrap(),
            "\"Processing\""
        );
        let parsed: OrderStatus = serde_json::from_str("\"Delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Delivered);
    }

    #[test]
    fn payment_method_uses_display_strings() {
        assert_eq!(
            serde_json::to_string(&PaymentMethod::CashOnDelivery).unwrap(),
            "\"Cash on Delivery\""
        );
    }

    #[test]
    fn short_id_takes_last_eight_chars() {
        let order_id = "65f2a1b9c3d4e5f6a7b8c9d0";
        let json = format!(
            r#"{{"_id":"{order_id}","orderItems":[],"shippingAddress":{{"street":"","city":"","state":"","zipCode":"","country":"","phone":""}},"paymentMethod":"PayPal","itemsPrice":0,"taxPrice":0,"shippingPrice":0,"totalPrice":0}}"#
        );
        let order: Order = serde_json::from_str(&json).unwrap();
        assert_eq!(order.short_id(), "a7b8c9d0");
    }
}
