//! Cart commands.
//!
//! Every mutation syncs the store with the backend before printing, so
//! the totals shown are always the server's.

use clementine_core::types::{CartItemId, ProductId};

use clementine_client::state::Storefront;

/// Fetch and print the cart contents and totals.
///
/// # Errors
///
/// Returns an error when not signed in.
pub async fn show(storefront: &Storefront) -> Result<(), Box<dyn std::error::Error>> {
    if !storefront.auth().is_authenticated() {
        return Err("not signed in".into());
    }

    storefront.cart().fetch().await;
    print_cart(storefront);
    Ok(())
}

/// Add a product to the cart and print the updated totals.
///
/// # Errors
///
/// Returns an error when not signed in or the server rejects the add.
pub async fn add(
    storefront: &Storefront,
    product_id: ProductId,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    storefront.cart().add(product_id, quantity).await?;
    print_cart(storefront);
    Ok(())
}

/// Change a cart line's quantity and print the updated totals.
///
/// # Errors
///
/// Returns an error when not signed in or the server rejects the update.
pub async fn update(
    storefront: &Storefront,
    cart_item_id: CartItemId,
    quantity: u32,
) -> Result<(), Box<dyn std::error::Error>> {
    storefront
        .cart()
        .update_quantity(cart_item_id, f64::from(quantity))
        .await?;
    print_cart(storefront);
    Ok(())
}

/// Remove a cart line and print the updated totals.
///
/// # Errors
///
/// Returns an error when not signed in or the server rejects the removal.
pub async fn remove(
    storefront: &Storefront,
    cart_item_id: CartItemId,
) -> Result<(), Box<dyn std::error::Error>> {
    storefront.cart().remove(cart_item_id).await?;
    print_cart(storefront);
    Ok(())
}

fn print_cart(storefront: &Storefront) {
    let cart = storefront.cart().snapshot();
    if cart.items.is_empty() {
        println!("Cart is empty");
        return;
    }

    for item in &cart.items {
        let name = item.product_name.as_deref().unwrap_or("(unknown product)");
        println!(
            "{:>6}  {:<40} x{:<4} @ {}",
            item.id, name, item.quantity, item.unit_price
        );
    }
    println!(
        "{} item(s), total {}",
        cart.item_count,
        storefront.cart().total_display()
    );
}
