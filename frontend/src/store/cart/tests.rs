use super::*;
use crate::store::persist::{StateStorage, StateStore};
use eshop_shared::{Product, ProductImage};
use std::cell::{Cell, RefCell};
use std::collections::HashMap;
use std::rc::Rc;

// =========================================================
// Shared test fixtures
// =========================================================

/// In-memory storage backend standing in for LocalStorage.
#[derive(Default)]
struct MemoryStorage {
    records: RefCell<HashMap<String, String>>,
    fail_writes: Cell<bool>,
}

impl StateStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.records.borrow().get(key).cloned()
    }

    fn store(&self, key: &str, value: &str) -> bool {
        if self.fail_writes.get() {
            return false;
        }
        self.records
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn remove(&self, key: &str) -> bool {
        self.records.borrow_mut().remove(key).is_some()
    }
}

fn make_product(id: &str, price: f64, stock: u32) -> Product {
    Product {
        id: id.to_string(),
        name: format!("Product {}", id),
        description: String::new(),
        price,
        original_price: 0.0,
        category: "Test".into(),
        brand: String::new(),
        stock,
        images: vec![ProductImage {
            url: format!("https://cdn.example.com/{}.jpg", id),
        }],
        ratings: 0.0,
        num_reviews: 0,
        reviews: Vec::new(),
        featured: false,
        created_at: None,
    }
}

// =========================================================
// Pure transition tests
// =========================================================

#[test]
fn repeated_adds_merge_into_one_line() {
    let product = make_product("p1", 20.0, 10);
    let mut cart = Cart::default();

    cart.add(&product, 1);
    cart.add(&product, 2);
    cart.add(&product, 1);

    assert_eq!(cart.lines.len(), 1);
    assert_eq!(cart.find("p1").unwrap().quantity, 4);
}

#[test]
fn add_snapshots_display_fields() {
    let product = make_product("p1", 19.99, 5);
    let mut cart = Cart::default();
    cart.add(&product, 2);

    let line = cart.find("p1").unwrap();
    assert_eq!(line.name, "Product p1");
    assert_eq!(line.price, 19.99);
    assert_eq!(line.image, "https://cdn.example.com/p1.jpg");
    assert_eq!(line.stock, 5);
}

#[test]
fn snapshot_is_not_live_synced() {
    let mut product = make_product("p1", 10.0, 5);
    let mut cart = Cart::default();
    cart.add(&product, 1);

    // Price and stock change upstream after the add.
    product.price = 99.0;
    product.stock = 0;
    cart.add(&product, 1);

    // The line keeps the original snapshot; only quantity accumulated.
    let line = cart.find("p1").unwrap();
    assert_eq!(line.price, 10.0);
    assert_eq!(line.stock, 5);
    assert_eq!(line.quantity, 2);
}

#[test]
fn add_preserves_insertion_order() {
    let mut cart = Cart::default();
    cart.add(&make_product("a", 1.0, 9), 1);
    cart.add(&make_product("b", 2.0, 9), 1);
    cart.add(&make_product("c", 3.0, 9), 1);
    // Re-adding an existing product must not move it to the back.
    cart.add(&make_product("a", 1.0, 9), 1);

    let ids: Vec<_> = cart.lines.iter().map(|l| l.product_id.as_str()).collect();
    assert_eq!(ids, ["a", "b", "c"]);
}

#[test]
fn remove_deletes_line_and_ignores_unknown_ids() {
    let mut cart = Cart::default();
    cart.add(&make_product("p1", 5.0, 3), 1);

    cart.remove("p1");
    assert!(cart.is_empty());

    // no-op, must not panic
    cart.remove("p1");
    cart.remove("never-added");
}

#[test]
fn set_quantity_replaces_instead_of_accumulating() {
    let mut cart = Cart::default();
    cart.add(&make_product("p1", 5.0, 10), 2);

    cart.set_quantity("p1", 7);
    assert_eq!(cart.find("p1").unwrap().quantity, 7);
}

#[test]
fn zero_quantity_removes_the_line() {
    let mut cart = Cart::default();
    cart.add(&make_product("p1", 5.0, 10), 2);

    cart.set_quantity("p1", 0);
    assert!(cart.find("p1").is_none());
}

#[test]
fn set_quantity_is_not_clamped_to_stock() {
    // Documented leniency: the store trusts the UI to clamp; the
    // cart view only warns via exceeds_stock().
    let mut cart = Cart::default();
    cart.add(&make_product("p1", 5.0, 3), 1);

    cart.set_quantity("p1", 50);
    let line = cart.find("p1").unwrap();
    assert_eq!(line.quantity, 50);
    assert!(line.exceeds_stock());
}

#[test]
fn subtotal_and_count_are_recomputed_and_pure() {
    let mut cart = Cart::default();
    cart.add(&make_product("p1", 20.0, 9), 2);
    cart.add(&make_product("p2", 15.0, 9), 1);

    let before = cart.clone();
    assert!((cart.subtotal() - 55.0).abs() < 1e-9);
    assert_eq!(cart.item_count(), 3);
    // Idempotent: repeated calls agree and mutate nothing.
    assert_eq!(cart.subtotal(), cart.subtotal());
    assert_eq!(cart, before);
}

#[test]
fn cart_totals_feed_the_pricing_formula() {
    use eshop_shared::pricing::OrderPricing;

    let mut cart = Cart::default();
    cart.add(&make_product("p1", 20.0, 9), 2);
    cart.add(&make_product("p2", 15.0, 9), 1);

    // 55.00 subtotal clears the free-shipping threshold.
    let pricing = OrderPricing::from_subtotal(cart.subtotal());
    assert_eq!(pricing.shipping, 0.0);
    assert!((pricing.tax - 5.5).abs() < 1e-9);
    assert!((pricing.total - 60.5).abs() < 1e-9);
}

#[test]
fn clear_empties_any_cart() {
    let mut cart = Cart::default();
    cart.add(&make_product("p1", 20.0, 9), 2);
    cart.add(&make_product("p2", 15.0, 9), 5);

    cart.clear();
    assert_eq!(cart.item_count(), 0);
    assert_eq!(cart.subtotal(), 0.0);
    assert!(cart.is_empty());
}

// =========================================================
// Persistence round-trip tests
// =========================================================

#[test]
fn persisted_cart_rehydrates_identically() {
    let backend = Rc::new(MemoryStorage::default());
    let store = StateStore::with_backend(backend.clone());

    let mut cart = Cart::default();
    cart.add(&make_product("p1", 20.0, 9), 2);
    cart.add(&make_product("p2", 15.0, 9), 1);
    store.store_json(eshop_shared::CART_STORAGE_KEY, &cart);

    // Simulated reload: a fresh handle over the same backend.
    let reloaded = StateStore::with_backend(backend);
    let restored: Cart = reloaded
        .load_json(eshop_shared::CART_STORAGE_KEY)
        .expect("record should exist");
    assert_eq!(restored, cart);
}

#[test]
fn write_failure_is_non_fatal() {
    let backend = Rc::new(MemoryStorage::default());
    let store = StateStore::with_backend(backend.clone());

    let mut cart = Cart::default();
    cart.add(&make_product("p1", 20.0, 9), 1);
    store.store_json(eshop_shared::CART_STORAGE_KEY, &cart);

    backend.fail_writes.set(true);
    cart.add(&make_product("p2", 5.0, 9), 1);
    // Must not panic; the durable copy simply stays behind.
    store.store_json(eshop_shared::CART_STORAGE_KEY, &cart);

    let restored: Cart = store.load_json(eshop_shared::CART_STORAGE_KEY).unwrap();
    assert_eq!(restored.lines.len(), 1);
}

#[test]
fn corrupt_record_hydrates_as_empty() {
    let backend = Rc::new(MemoryStorage::default());
    backend
        .records
        .borrow_mut()
        .insert(eshop_shared::CART_STORAGE_KEY.to_string(), "{not json".into());

    let store = StateStore::with_backend(backend);
    let restored: Option<Cart> = store.load_json(eshop_shared::CART_STORAGE_KEY);
    assert!(restored.is_none());
}
