//! Clementine CLI - storefront client from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Sign in (token and profile are persisted to the session file)
//! clementine auth login -u alice -p secret
//!
//! # Browse the catalog
//! clementine products list
//! clementine products show 7
//! clementine products search mug
//!
//! # Work with the cart
//! clementine cart show
//! clementine cart add 7 --quantity 2
//! clementine cart update 3 --quantity 1
//! clementine cart remove 3
//!
//! # Order history
//! clementine orders list
//! clementine orders show 10
//! ```
//!
//! # Commands
//!
//! - `auth` - Sign in, sign out, show the current session
//! - `products` - Browse the product catalog
//! - `cart` - Inspect and mutate the shopping cart
//! - `orders` - Order history

#![cfg_attr(not(test), forbid(unsafe_code))]
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

use clementine_client::config::ClientConfig;
use clementine_client::state::Storefront;

mod commands;

#[derive(Parser)]
#[command(name = "clementine")]
#[command(author, version, about = "Clementine storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Sign in, sign out, show the current session
    Auth {
        #[command(subcommand)]
        action: AuthAction,
    },
    /// Browse the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Inspect and mutate the shopping cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Order history
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum AuthAction {
    /// Sign in and persist the session
    Login {
        /// Username
        #[arg(short, long)]
        username: String,

        /// Password
        #[arg(short, long)]
        password: String,
    },
    /// Clear the persisted session
    Logout,
    /// Show the signed-in user
    Whoami,
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products (one page)
    List {
        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: i32,
    },
    /// Show one product
    Show {
        /// Product id
        id: i64,
    },
    /// Search products by keyword
    Search {
        /// Search keyword
        keyword: String,
    },
    /// List categories
    Categories,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart contents and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: i64,

        /// Quantity to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Change the quantity of a cart line
    Update {
        /// Cart item id
        cart_item_id: i64,

        /// New quantity
        #[arg(short, long)]
        quantity: u32,
    },
    /// Remove a cart line
    Remove {
        /// Cart item id
        cart_item_id: i64,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders (one page)
    List {
        /// Page number, starting at 0
        #[arg(long, default_value_t = 0)]
        page: i32,
    },
    /// Show one order with its lines
    Show {
        /// Order id
        id: i64,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let storefront = Storefront::new(ClientConfig::from_env()?);

    match cli.command {
        Commands::Auth { action } => match action {
            AuthAction::Login { username, password } => {
                commands::auth::login(&storefront, &username, &password).await?;
            }
            AuthAction::Logout => commands::auth::logout(&storefront),
            AuthAction::Whoami => commands::auth::whoami(&storefront),
        },
        Commands::Products { action } => match action {
            ProductsAction::List { page } => {
                commands::products::list(&storefront, page).await?;
            }
            ProductsAction::Show { id } => {
                commands::products::show(&storefront, id.into()).await?;
            }
            ProductsAction::Search { keyword } => {
                commands::products::search(&storefront, &keyword).await?;
            }
            ProductsAction::Categories => commands::products::categories(&storefront).await?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&storefront).await?,
            CartAction::Add {
                product_id,
                quantity,
            } => {
                commands::cart::add(&storefront, product_id.into(), quantity).await?;
            }
            CartAction::Update {
                cart_item_id,
                quantity,
            } => {
                commands::cart::update(&storefront, cart_item_id.into(), quantity).await?;
            }
            CartAction::Remove { cart_item_id } => {
                commands::cart::remove(&storefront, cart_item_id.into()).await?;
            }
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { page } => commands::orders::list(&storefront, page).await?,
            OrdersAction::Show { id } => commands::orders::show(&storefront, id.into()).await?,
        },
    }
    Ok(())
}
