//! 购物车状态管理模块
//!
//! 购物车是本应用唯一的客户端实体：行项目持有下单所需的商品
//! 快照（名称、单价、缩略图、加购时库存）与数量，聚合值
//! （件数、小计）永远现算、从不存储。
//!
//! 纯状态变更集中在 [`Cart`] 上；[`CartContext`] 负责把变更
//! 套到信号里并执行写穿持久化，二者职责互不越界。

use eshop_shared::{CART_STORAGE_KEY, Product};
use leptos::prelude::*;
use serde::{Deserialize, Serialize};

use super::persist::StateStore;

/// 购物车行项目：商品快照 + 数量
///
/// 快照在加购时拍下，之后不随商品价格/库存变化同步。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: String,
    pub name: String,
    /// 加购时的单价
    pub price: f64,
    /// 缩略图 URL
    pub image: String,
    /// 加购时的可售库存，购物车页用它做超量提示
    pub stock: u32,
    /// 不变式：>= 1，降到 0 的行直接移除
    pub quantity: u32,
}

impl CartLine {
    fn snapshot(product: &Product, quantity: u32) -> Self {
        Self {
            product_id: product.id.clone(),
            name: product.name.clone(),
            price: product.price,
            image: product.primary_image().to_string(),
            stock: product.stock,
            quantity,
        }
    }

    pub fn line_total(&self) -> f64 {
        self.price * f64::from(self.quantity)
    }

    /// 请求数量是否已超出快照库存（仅用于界面提示，不拦截）
    pub fn exceeds_stock(&self) -> bool {
        self.quantity > self.stock
    }
}

/// 购物车：有序的行项目集合，纯状态
///
/// 不变式：每个 product_id 至多一行；所有行 quantity >= 1。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
    pub lines: Vec<CartLine>,
}

impl Cart {
    /// 加购：已有行累加数量，否则按当前商品快照追加新行
    ///
    /// 不校验实时库存——下单时由后端权威校验，
    /// 购物车页另按快照库存给出提示。
    pub fn add(&mut self, product: &Product, quantity: u32) {
        if quantity == 0 {
            return;
        }
        match self.find_mut(&product.id) {
            Some(line) => line.quantity += quantity,
            None => self.lines.push(CartLine::snapshot(product, quantity)),
        }
    }

    /// 移除指定商品的行；不存在则为 no-op
    pub fn remove(&mut self, product_id: &str) {
        self.lines.retain(|line| line.product_id != product_id);
    }

    /// 把行数量设置为给定值（非累加）
    ///
    /// 数量为 0 等价于移除。上界不在这里强制：
    /// 界面层应先夹取到 [1, stock]，这是文档化的宽松约定。
    pub fn set_quantity(&mut self, product_id: &str, quantity: u32) {
        if quantity == 0 {
            self.remove(product_id);
        } else if let Some(line) = self.find_mut(product_id) {
            line.quantity = quantity;
        }
    }

    /// 清空购物车（下单成功后调用）
    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// 小计 = Σ 单价 × 数量；纯函数，每次现算
    pub fn subtotal(&self) -> f64 {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// 件数 = Σ 数量
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn find(&self, product_id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.product_id == product_id)
    }

    fn find_mut(&mut self, product_id: &str) -> Option<&mut CartLine> {
        self.lines
            .iter_mut()
            .find(|line| line.product_id == product_id)
    }
}

/// 购物车上下文
///
/// 唯一的购物车状态持有者；所有读写都经由这里的操作，
/// 每次变更后同步写穿到持久化记录，刷新页面即可还原。
#[derive(Clone)]
pub struct CartContext {
    cart: RwSignal<Cart>,
    storage: StateStore,
}

impl CartContext {
    /// 创建上下文并从持久化记录回灌（hydrate）
    pub fn new(storage: StateStore) -> Self {
        let cart: Cart = storage.load_json(CART_STORAGE_KEY).unwrap_or_default();
        Self {
            cart: RwSignal::new(cart),
            storage,
        }
    }

    /// 响应式读取整个购物车
    pub fn cart(&self) -> ReadSignal<Cart> {
        self.cart.read_only()
    }

    pub fn add_to_cart(&self, product: &Product, quantity: u32) {
        self.apply(|cart| cart.add(product, quantity));
    }

    pub fn remove_from_cart(&self, product_id: &str) {
        self.apply(|cart| cart.remove(product_id));
    }

    pub fn update_quantity(&self, product_id: &str, quantity: u32) {
        self.apply(|cart| cart.set_quantity(product_id, quantity));
    }

    pub fn clear_cart(&self) {
        self.apply(Cart::clear);
    }

    /// 当前小计（响应式）
    pub fn cart_total(&self) -> f64 {
        self.cart.with(Cart::subtotal)
    }

    /// 当前件数（响应式）
    pub fn cart_count(&self) -> u32 {
        self.cart.with(Cart::item_count)
    }

    /// 结算用的非响应式快照
    pub fn snapshot(&self) -> Cart {
        self.cart.get_untracked()
    }

    /// 统一的变更入口：先套用纯变更，再写穿持久化
    fn apply(&self, mutate: impl FnOnce(&mut Cart)) {
        self.cart.update(mutate);
        self.cart
            .with_untracked(|cart| self.storage.store_json(CART_STORAGE_KEY, cart));
    }
}

/// 从 Context 获取购物车上下文
pub fn use_cart() -> CartContext {
    use_context::<CartContext>().expect("CartContext should be provided")
}

#[cfg(test)]
mod tests;
