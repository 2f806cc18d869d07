//! Catalog commands.

use clementine_core::types::ProductId;

use clementine_client::models::{Page, Product};
use clementine_client::services::ProductsService;
use clementine_client::state::Storefront;

/// List one page of products, sorted by name.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or rejects the request.
pub async fn list(storefront: &Storefront, page: i32) -> Result<(), Box<dyn std::error::Error>> {
    let mut query = ProductsService::default_query();
    query.page = page;
    let products = storefront.products().products(&query).await?;
    print_page(&products);
    Ok(())
}

/// Show one product.
///
/// # Errors
///
/// Returns an error if the product does not exist or the backend is
/// unreachable.
pub async fn show(
    storefront: &Storefront,
    id: ProductId,
) -> Result<(), Box<dyn std::error::Error>> {
    let product = storefront.products().product(id).await?;
    println!("{} (id {})", product.name, product.id);
    println!("  price: {}", product.unit_price);
    if let Some(sku) = &product.sku {
        println!("  sku:   {sku}");
    }
    if let Some(stock) = product.units_in_stock {
        println!("  stock: {stock}");
    }
    if let Some(category) = &product.category_name {
        println!("  category: {category}");
    }
    if let Some(description) = &product.description {
        println!("\n{description}");
    }
    Ok(())
}

/// Search products by keyword.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or rejects the request.
pub async fn search(
    storefront: &Storefront,
    keyword: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let query = ProductsService::default_query();
    let products = storefront.products().search(keyword, &query).await?;
    print_page(&products);
    Ok(())
}

/// List all categories.
///
/// # Errors
///
/// Returns an error if the backend is unreachable or rejects the request.
pub async fn categories(storefront: &Storefront) -> Result<(), Box<dyn std::error::Error>> {
    let categories = storefront.products().categories().await?;
    for category in categories {
        match category.product_count {
            Some(count) => println!("{:>4}  {} ({count})", category.id, category.category_name),
            None => println!("{:>4}  {}", category.id, category.category_name),
        }
    }
    Ok(())
}

fn print_page(page: &Page<Product>) {
    for product in &page.content {
        println!(
            "{:>6}  {:<40} {}",
            product.id, product.name, product.unit_price
        );
    }
    println!(
        "page {}/{} ({} products)",
        page.page_number + 1,
        page.total_pages,
        page.total_elements
    );
}
