use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "menudesk")]
#[command(version, about = "Restaurant menu back office: categories, items and the staff menu")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Config file (default: ./menudesk.yaml if present)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Dataset JSON to load instead of the built-in demo menu
    #[arg(long, global = true, value_name = "FILE")]
    pub data: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the category tree
    Tree {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show the breadcrumb path to a category
    Path {
        /// Category ID
        category_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// List the items shown for a category
    Items {
        /// Category ID
        category_id: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the staff menu as markdown
    Staff,

    /// Move a top-level category onto another one's position
    Reorder {
        /// Category being dragged
        active_id: String,

        /// Category it was dropped on (omit for a cancelled drag)
        over_id: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Edit an item and save it
    Edit {
        /// Item ID
        item_id: String,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New description
        #[arg(long)]
        description: Option<String>,

        /// New base price
        #[arg(long)]
        price: Option<String>,

        /// New status (AVAILABLE, SOLD_OUT, HIDDEN)
        #[arg(long)]
        status: Option<String>,

        /// Toggle a quick tag by ID (can be specified multiple times)
        #[arg(long = "tag", short = 't')]
        tags: Vec<String>,

        /// Toggle an allergen by number (can be specified multiple times)
        #[arg(long = "allergen", short = 'a')]
        allergens: Vec<u32>,

        /// Toggle a side dish by ID (can be specified multiple times)
        #[arg(long = "side-dish")]
        side_dishes: Vec<String>,

        /// Toggle a managed ingredient by ID (can be specified multiple times)
        #[arg(long = "managed-ingredient")]
        managed_ingredients: Vec<String>,

        /// Add an optional ingredient as NAME=PRICE (can be specified multiple times)
        #[arg(long = "ingredient")]
        ingredients: Vec<String>,

        /// Add a variant as NAME=PRICE (can be specified multiple times)
        #[arg(long = "variant")]
        variants: Vec<String>,

        /// Create a side dish NAME=PRICE and assign it (main courses only)
        #[arg(long = "new-side-dish")]
        new_side_dish: Option<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Change the status of several items in a category
    BulkStatus {
        /// Category the items are listed under
        category_id: String,

        /// New status (AVAILABLE, SOLD_OUT, HIDDEN)
        status: String,

        /// Item ID (can be specified multiple times)
        #[arg(long = "item", short = 'i', required = true)]
        items: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete several items from the menu
    Delete {
        /// Item ID (can be specified multiple times)
        #[arg(long = "item", short = 'i', required = true)]
        items: Vec<String>,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Add a side dish to the global list
    AddSideDish {
        /// Side dish name
        name: String,

        /// Price
        price: String,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check the dataset for inconsistencies
    Validate,
}
