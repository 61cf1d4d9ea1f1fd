//! 订单定价公式
//!
//! 购物车展示与下单提交必须使用同一套计算；后端收到订单后
//! 会重新核算，客户端结果仅作展示参考。

use serde::{Deserialize, Serialize};

/// 免运费门槛：小计严格大于该值时免运费
pub const FREE_SHIPPING_THRESHOLD: f64 = 50.0;
/// 未达门槛时的固定运费
pub const FLAT_SHIPPING_PRICE: f64 = 10.0;
/// 税率（10%）
pub const TAX_RATE: f64 = 0.10;

/// 由小计派生出的完整订单价格
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrderPricing {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
}

impl OrderPricing {
    pub fn from_subtotal(subtotal: f64) -> Self {
        let shipping = if subtotal > FREE_SHIPPING_THRESHOLD {
            0.0
        } else {
            FLAT_SHIPPING_PRICE
        };
        let tax = subtotal * TAX_RATE;
        Self {
            subtotal,
            shipping,
            tax,
            total: subtotal + shipping + tax,
        }
    }

    pub fn free_shipping(&self) -> bool {
        self.shipping == 0.0
    }

    /// 距离免运费还差多少；已免运费时为 None
    pub fn amount_to_free_shipping(&self) -> Option<f64> {
        if self.subtotal < FREE_SHIPPING_THRESHOLD {
            Some(FREE_SHIPPING_THRESHOLD - self.subtotal)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subtotal_over_threshold_ships_free() {
        // [{price:20, qty:2}, {price:15, qty:1}] -> 55.00
        let pricing = OrderPricing::from_subtotal(55.0);
        assert_eq!(pricing.shipping, 0.0);
        assert!((pricing.tax - 5.5).abs() < 1e-9);
        assert!((pricing.total - 60.5).abs() < 1e-9);
        assert!(pricing.free_shipping());
    }

    #[test]
    fn subtotal_under_threshold_pays_flat_shipping() {
        let pricing = OrderPricing::from_subtotal(30.0);
        assert_eq!(pricing.shipping, 10.0);
        assert!((pricing.tax - 3.0).abs() < 1e-9);
        assert!((pricing.total - 43.0).abs() < 1e-9);
        assert_eq!(pricing.amount_to_free_shipping(), Some(20.0));
    }

    #[test]
    fn threshold_is_exclusive() {
        // 恰好 50 不免运费（需严格大于）
        let pricing = OrderPricing::from_subtotal(50.0);
        assert_eq!(pricing.shipping, 10.0);
        assert_eq!(pricing.amount_to_free_shipping(), None);
    }

    #[test]
    fn empty_cart_prices_to_flat_shipping_only() {
        let pricing = OrderPricing::from_subtotal(0.0);
        assert_eq!(pricing.total, 10.0);
    }
}
