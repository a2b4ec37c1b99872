//! Product Catalog CLI - Run catalog operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # List all products
//! catalog list
//!
//! # Show one product
//! catalog get 18a9cc59-c7c7-47e2-ac77-d3127d3b2edf
//!
//! # Create a product
//! catalog create -n "Сметана" -d "густая деревенская сметана" -p 4.50
//!
//! # Update a product
//! catalog update 18a9cc59-c7c7-47e2-ac77-d3127d3b2edf -n "Кефир" -d "это однозначно кефир" -p 2.99
//!
//! # Delete a product
//! catalog delete 18a9cc59-c7c7-47e2-ac77-d3127d3b2edf
//!
//! # Check stored products against the entity rules
//! catalog audit
//! ```
//!
//! The store lives in memory for the duration of one invocation. With
//! `CATALOG_SEED=true` (the default) it starts with the demo products.
//! Results are written to stdout as JSON; logs go to stderr.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use product_catalog_core::ProductId;

mod commands;

#[derive(Parser)]
#[command(name = "catalog")]
#[command(author, version, about = "Product catalog CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List all products
    List,
    /// Show a single product
    Get {
        /// Product ID
        id: ProductId,
    },
    /// Create a product and print its ID
    Create {
        #[command(flatten)]
        fields: ProductArgs,
    },
    /// Replace a product's name, description and price
    Update {
        /// Product ID
        id: ProductId,

        #[command(flatten)]
        fields: ProductArgs,
    },
    /// Delete a product
    Delete {
        /// Product ID
        id: ProductId,
    },
    /// Report stored products that fail entity validation
    Audit,
}

#[derive(clap::Args)]
struct ProductArgs {
    /// Product name
    #[arg(short, long)]
    name: String,

    /// Product description
    #[arg(short, long)]
    description: Option<String>,

    /// Unit price (exact decimal, e.g. 3.99)
    #[arg(short, long)]
    price: Decimal,
}

fn main() {
    // Logs go to stderr so stdout stays machine-readable
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "product_catalog=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let catalog = commands::Catalog::from_env()?;

    match cli.command {
        Commands::List => catalog.list()?,
        Commands::Get { id } => catalog.get(id)?,
        Commands::Create { fields } => catalog.create(fields.into())?,
        Commands::Update { id, fields } => catalog.update(id, fields.into())?,
        Commands::Delete { id } => catalog.delete(id)?,
        Commands::Audit => catalog.audit()?,
    }
    Ok(())
}

impl From<ProductArgs> for product_catalog_core::ProductInput {
    fn from(args: ProductArgs) -> Self {
        Self::new(args.name, args.description, args.price)
    }
}
