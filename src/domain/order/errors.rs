// ============================================================================
// Order Business Rule Errors
// ============================================================================

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Incorrect item: {0}")]
    IncorrectItem(ItemDefect),

    #[error("Quantity overflow: {existing} + {added} exceeds i32::MAX")]
    QuantityOverflow { existing: i32, added: i32 },

    #[error("Order has no line at index {0}")]
    UnknownLine(usize),
}

/// Which item rule was broken. Callers that only care about "invalid item"
/// match on `OrderError::IncorrectItem(_)`.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum ItemDefect {
    #[error("negative price {0}")]
    NegativePrice(f64),

    #[error("non-positive quantity {0}")]
    NonPositiveQuantity(i32),

    #[error("product {product_id} at price {price} already has a line")]
    DuplicateLine { product_id: i64, price: f64 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_incorrect_item_messages() {
        let err = OrderError::IncorrectItem(ItemDefect::NegativePrice(-10.0));
        assert_eq!(err.to_string(), "Incorrect item: negative price -10");

        let err = OrderError::IncorrectItem(ItemDefect::NonPositiveQuantity(0));
        assert_eq!(err.to_string(), "Incorrect item: non-positive quantity 0");

        let err = OrderError::IncorrectItem(ItemDefect::DuplicateLine { product_id: 3, price: 2.5 });
        assert_eq!(
            err.to_string(),
            "Incorrect item: product 3 at price 2.5 already has a line"
        );
    }
}
