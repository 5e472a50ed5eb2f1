use std::env;

use clap::Parser;
use menudesk::cli::{
    handle_add_side_dish, handle_bulk_status, handle_delete, handle_edit, handle_items,
    handle_path, handle_reorder, handle_staff, handle_tree, handle_validate, open_session, Cli,
    Commands,
};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

fn init_tracing() {
    let filter = EnvFilter::try_from_env("MENUDESK_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if env::var("DEBUG").is_ok() {
            "menudesk=debug,info"
        } else {
            "menudesk=warn"
        })
    });

    // stdout carries command output, so logs go to stderr
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = open_session(cli.config, cli.data).and_then(|session| match cli.command {
        Commands::Tree { json } => handle_tree(session, json),
        Commands::Path { category_id, json } => handle_path(session, category_id, json),
        Commands::Items { category_id, json } => handle_items(session, category_id, json),
        Commands::Staff => handle_staff(session),
        Commands::Reorder {
            active_id,
            over_id,
            json,
        } => handle_reorder(session, active_id, over_id, json),
        Commands::Edit {
            item_id,
            name,
            description,
            price,
            status,
            tags,
            allergens,
            side_dishes,
            managed_ingredients,
            ingredients,
            variants,
            new_side_dish,
            json,
        } => handle_edit(
            session,
            item_id,
            name,
            description,
            price,
            status,
            tags,
            allergens,
            side_dishes,
            managed_ingredients,
            ingredients,
            variants,
            new_side_dish,
            json,
        ),
        Commands::BulkStatus {
            category_id,
            status,
            items,
            json,
        } => handle_bulk_status(session, category_id, status, items, json),
        Commands::Delete { items, json } => handle_delete(session, items, json),
        Commands::AddSideDish { name, price, json } => handle_add_side_dish(session, name, price, json),
        Commands::Validate => handle_validate(session),
    });

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
