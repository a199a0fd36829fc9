use serde::{Deserialize, Serialize};

// ============================================================================
// Order Value Objects
// ============================================================================

/// Product identity. Two products are the same product iff their ids match.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Product {
    pub id: i64,
}

impl Product {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

/// Capability set an order line must expose.
///
/// `Order` is generic over this trait so it never depends on how a line is
/// constructed. Product and price are fixed once the line exists; only the
/// quantity moves, and only when the order merges another line into it.
pub trait Item {
    fn product(&self) -> &Product;
    fn quantity(&self) -> i32;
    fn set_quantity(&mut self, quantity: i32);
    /// Unit price.
    fn price(&self) -> f64;
}

/// Default order line: a product, how many of it, and the unit price.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct LineItem {
    pub product: Product,
    pub quantity: i32,
    pub price: f64,
}

impl LineItem {
    pub fn new(product: Product, quantity: i32, price: f64) -> Self {
        Self {
            product,
            quantity,
            price,
        }
    }
}

impl Item for LineItem {
    fn product(&self) -> &Product {
        &self.product
    }

    fn quantity(&self) -> i32 {
        self.quantity
    }

    fn set_quantity(&mut self, quantity: i32) {
        self.quantity = quantity;
    }

    fn price(&self) -> f64 {
        self.price
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_product_equality_is_by_id() {
        assert_eq!(Product::new(1), Product::new(1));
        assert_ne!(Product::new(1), Product::new(2));
    }

    #[test]
    fn test_line_item_creation() {
        let item = LineItem::new(Product::new(7), 3, 4.5);

        assert_eq!(item.product(), &Product::new(7));
        assert_eq!(item.quantity(), 3);
        assert_eq!(item.price(), 4.5);
    }

    #[test]
    fn test_set_quantity_leaves_product_and_price() {
        let mut item = LineItem::new(Product::new(7), 3, 4.5);
        item.set_quantity(10);

        assert_eq!(item.quantity(), 10);
        assert_eq!(item.price(), 4.5);
        assert_eq!(item.product().id, 7);
    }

    #[test]
    fn test_line_item_serialization() {
        let item = LineItem::new(Product::new(42), 2, 15.0);

        let json = serde_json::to_string(&item).unwrap();
        let deserialized: LineItem = serde_json::from_str(&json).unwrap();

        assert_eq!(item, deserialized);
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(Product::new(5)).unwrap();
        assert_eq!(json, serde_json::json!({ "id": 5 }));
    }
}
