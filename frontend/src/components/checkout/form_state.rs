//! 结算表单状态模块
//!
//! 将零散的 signal 整合为 `FormState` 结构体，负责：
//! - 数据的持有
//! - 数据的重置
//! - 数据到请求对象的转换（配合购物车快照与定价公式）

use eshop_shared::pricing::OrderPricing;
use eshop_shared::{CreateOrderRequest, OrderItem, PaymentMethod, ShippingAddress};
use leptos::prelude::*;

use crate::store::cart::Cart;

/// 结算表单状态结构体
///
/// 使用 `RwSignal` 因为它实现了 `Copy` trait，适合在组件间传递。
#[derive(Clone, Copy)]
pub struct FormState {
    // 收货地址
    pub street: RwSignal<String>,
    pub city: RwSignal<String>,
    pub state: RwSignal<String>,
    pub zip_code: RwSignal<String>,
    pub country: RwSignal<String>,
    pub phone: RwSignal<String>,

    // 支付方式
    pub payment_method: RwSignal<PaymentMethod>,
}

impl FormState {
    /// 创建新的表单状态，所有字段使用默认值
    pub fn new() -> Self {
        Self {
            street: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            state: RwSignal::new(String::new()),
            zip_code: RwSignal::new(String::new()),
            country: RwSignal::new(String::new()),
            phone: RwSignal::new(String::new()),
            payment_method: RwSignal::new(PaymentMethod::CreditCard),
        }
    }

    /// 必填字段是否都已填写
    pub fn is_complete(&self) -> bool {
        !(self.street.get().trim().is_empty()
            || self.city.get().trim().is_empty()
            || self.state.get().trim().is_empty()
            || self.zip_code.get().trim().is_empty()
            || self.country.get().trim().is_empty()
            || self.phone.get().trim().is_empty())
    }

    /// 将表单 + 购物车快照转换为下单请求
    ///
    /// 价格四件套由定价公式统一派生，与购物车页展示完全一致；
    /// 后端会重新核算，这里只是参考值。
    pub fn to_request(&self, cart: &Cart) -> CreateOrderRequest {
        let pricing = OrderPricing::from_subtotal(cart.subtotal());
        CreateOrderRequest {
            order_items: cart
                .lines
                .iter()
                .map(|line| OrderItem {
                    product: line.product_id.clone(),
                    name: line.name.clone(),
                    quantity: line.quantity,
                    image: line.image.clone(),
                    price: line.price,
                })
                .collect(),
            shipping_address: ShippingAddress {
                street: self.street.get_untracked(),
                city: self.city.get_untracked(),
                state: self.state.get_untracked(),
                zip_code: self.zip_code.get_untracked(),
                country: self.country.get_untracked(),
                phone: self.phone.get_untracked(),
            },
            payment_method: self.payment_method.get_untracked(),
            items_price: pricing.subtotal,
            tax_price: pricing.tax,
            shipping_price: pricing.shipping,
            total_price: pricing.total,
        }
    }
}

impl Default for FormState {
    fn default() -> Self {
        Self::new()
    }
}
