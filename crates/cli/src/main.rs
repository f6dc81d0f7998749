//! NowApp CLI - drives the headless front-end pages from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Start a session
//! nowapp login -u ana -p secret
//!
//! # Show the account dashboard
//! nowapp dashboard
//!
//! # Browse the catalog, optionally narrowed to one store
//! nowapp shop
//! nowapp shop --store store_green_market
//!
//! # Cart and checkout
//! nowapp add <product-id>
//! nowapp cart
//! nowapp checkout
//!
//! # Move money
//! nowapp transfer --to 001-2 --amount 150.50
//!
//! # Rate the app (1-10 stars)
//! nowapp review --score 9 --comment "muy buena"
//!
//! # End the session
//! nowapp logout
//! ```
//!
//! Configuration comes from the environment (`NOWAPP_API_BASE_URL`,
//! `NOWAPP_HTTP_TIMEOUT_SECS`, `NOWAPP_CREDENTIAL_FILE`), with `.env`
//! support via `dotenvy`.

#![cfg_attr(not(test), forbid(unsafe_code))]
// Rendered pages are this binary's output.
#![allow(clippy::print_stdout)]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "nowapp")]
#[command(author, version, about = "NowApp banking/shopping demo client")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Log in and store the session credential
    Login {
        /// Account username
        #[arg(short, long)]
        username: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Discard the stored session credential
    Logout,
    /// Show the account dashboard (balance and movements)
    Dashboard,
    /// Browse the product catalog
    Shop {
        /// Narrow the grid to one store id (e.g. `store_green_market`)
        #[arg(short, long)]
        store: Option<String>,
    },
    /// Show the current cart
    Cart,
    /// Add a product to the cart
    Add {
        /// Product id from the catalog
        product_id: String,
    },
    /// Check out the current cart
    Checkout,
    /// Transfer money to another account
    Transfer {
        /// Destination account number
        #[arg(long)]
        to: String,

        /// Amount in PEN, e.g. `150.50`
        #[arg(long)]
        amount: String,
    },
    /// Submit an app review
    Review {
        /// Star score, 1-10
        #[arg(short, long)]
        score: u8,

        /// Free-text comment
        #[arg(short, long, default_value = "")]
        comment: String,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Login { username, password } => commands::auth::login(&username, &password).await,
        Commands::Logout => commands::auth::logout(),
        Commands::Dashboard => commands::bank::dashboard().await,
        Commands::Shop { store } => commands::shop::browse(store.as_deref()).await,
        Commands::Cart => commands::shop::cart().await,
        Commands::Add { product_id } => commands::shop::add(&product_id).await,
        Commands::Checkout => commands::shop::checkout().await,
        Commands::Transfer { to, amount } => commands::bank::transfer(&to, &amount).await,
        Commands::Review { score, comment } => commands::shop::review(score, &comment).await,
    }
}
