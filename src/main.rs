use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use order_cart::{Aggregate, LineItem, Order, OrderError, Product};

const DEFAULT_LOG_FILTER: &str = "info,order_cart=debug";

fn main() -> anyhow::Result<()> {
    // Initialize structured logging with environment-based filtering
    // Override with RUST_LOG, e.g. RUST_LOG=order_cart=trace
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true))
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
        )
        .init();

    tracing::info!("Building demo order");

    let coffee = Product::new(1);
    let mug = Product::new(2);

    let mut order = Order::new();
    order.add_item(LineItem::new(coffee.clone(), 2, 15.0))?;
    order.add_item(LineItem::new(mug.clone(), 1, 8.5))?;

    // Same product and price: folded into the first line
    order.add_item(LineItem::new(coffee.clone(), 3, 15.0))?;

    // Same product, promotional price: kept as its own line
    order.add_item(LineItem::new(coffee, 1, 12.0))?;

    match order.add_item(LineItem::new(mug, 0, 8.5)) {
        Err(OrderError::IncorrectItem(defect)) => {
            tracing::info!(%defect, "Invalid line refused as expected");
        }
        other => anyhow::bail!("expected an incorrect item error, got {:?}", other),
    }

    tracing::info!(
        lines = order.len(),
        version = order.version(),
        "Order complete"
    );
    println!("{}", serde_json::to_string_pretty(order.items())?);

    Ok(())
}
