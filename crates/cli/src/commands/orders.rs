//! Order history commands.

use clementine_core::types::OrderId;

use clementine_client::models::PageQuery;
use clementine_client::state::Storefront;

/// List one page of orders, newest first.
///
/// # Errors
///
/// Returns an error when not signed in or the backend is unreachable.
pub async fn list(storefront: &Storefront, page: i32) -> Result<(), Box<dyn std::error::Error>> {
    let query = PageQuery {
        page,
        ..PageQuery::default()
    };
    let orders = storefront.orders().orders(&query).await?;
    for order in &orders.content {
        let number = order.order_number.as_deref().unwrap_or("-");
        println!(
            "{:>6}  {:<16} {:<10} {}",
            order.id, number, order.status, order.total_amount
        );
    }
    println!(
        "page {}/{} ({} orders)",
        orders.page_number + 1,
        orders.total_pages,
        orders.total_elements
    );
    Ok(())
}

/// Show one order with its lines.
///
/// # Errors
///
/// Returns an error if the order does not exist or the backend is
/// unreachable.
pub async fn show(storefront: &Storefront, id: OrderId) -> Result<(), Box<dyn std::error::Error>> {
    let order = storefront.orders().order(id).await?;
    let number = order.order_number.as_deref().unwrap_or("-");
    println!("Order {number} (id {})", order.id);
    println!("  status: {}", order.status);
    if let Some(date) = order.order_date {
        println!("  placed: {date}");
    }
    for item in &order.order_items {
        let name = item.product_name.as_deref().unwrap_or("(unknown product)");
        println!(
            "  {:<40} x{:<4} @ {}",
            name, item.quantity, item.unit_price
        );
    }
    println!("  total:  {}", order.total_amount);
    Ok(())
}
