use std::env;
use std::path::PathBuf;

use serde::Serialize;
use tracing::warn;

use crate::board::MenuBoard;
use crate::config::MenuConfig;
use crate::entity::{Category, ItemStatus};
use crate::error::{MenuError, Result};
use crate::registry::parse_price;
use crate::seed::Dataset;
use crate::tree;
use crate::validate::{check_dataset, format_warning};
use crate::view;

/// Loaded config plus a board over the configured dataset
pub struct Session {
    pub config: MenuConfig,
    pub board: MenuBoard,
}

/// Resolve config and dataset. `--data` wins over the config's dataset.
pub fn open_session(config_path: Option<PathBuf>, data_path: Option<PathBuf>) -> Result<Session> {
    let cwd = env::current_dir()?;
    let config = MenuConfig::discover(config_path.as_deref(), &cwd)?;

    let dataset_path = data_path.or_else(|| config.dataset.clone());
    let dataset = Dataset::load_or_builtin(dataset_path.as_deref())?;

    for warning in check_dataset(&dataset.categories, &dataset.registries)? {
        warn!("{}", format_warning(&warning));
    }

    Ok(Session {
        config,
        board: MenuBoard::from_dataset(dataset),
    })
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

/// Split `NAME=PRICE`, validating the price
fn parse_priced(input: &str) -> Result<(String, f64)> {
    let (name, price) = input
        .rsplit_once('=')
        .ok_or_else(|| MenuError::InvalidPrice(input.to_string()))?;
    let name = name.trim();
    if name.is_empty() {
        return Err(MenuError::EmptyName);
    }
    Ok((name.to_string(), parse_price(price)?))
}

fn root_summary(categories: &[std::sync::Arc<Category>]) -> Vec<(&str, &str)> {
    categories
        .iter()
        .map(|c| (c.id.as_str(), c.name.as_str()))
        .collect()
}

pub fn handle_tree(session: Session, json: bool) -> Result<()> {
    let categories = session.board.categories();
    if json {
        print_json(categories)?;
    } else if categories.is_empty() {
        println!("No categories found.");
    } else {
        print!("{}", view::render_tree(categories)?);
    }
    Ok(())
}

pub fn handle_path(mut session: Session, category_id: String, json: bool) -> Result<()> {
    session.board.select_category(&category_id)?;
    let path = session.board.breadcrumb()?;

    if json {
        let ids: Vec<(&str, &str)> = root_summary(&path);
        print_json(&ids)?;
    } else {
        println!("{}", view::render_breadcrumb(&path));
    }
    Ok(())
}

pub fn handle_items(mut session: Session, category_id: String, json: bool) -> Result<()> {
    let category = session.board.select_category(&category_id)?;
    let listing = view::item_listing(Some(&*category))?;

    if json {
        print_json(&listing)?;
    } else {
        println!(
            "{}\n",
            view::render_breadcrumb(&session.board.breadcrumb()?)
        );
        print!(
            "{}",
            view::render_item_listing(
                &listing,
                session.board.registries(),
                &session.config,
                session.board.selected_items(),
            )
        );
    }
    Ok(())
}

pub fn handle_staff(session: Session) -> Result<()> {
    print!(
        "{}",
        view::render_staff_view(
            session.board.categories(),
            session.board.registries(),
            &session.config,
        )?
    );
    Ok(())
}

pub fn handle_reorder(
    mut session: Session,
    active_id: String,
    over_id: Option<String>,
    json: bool,
) -> Result<()> {
    session.board.drag_end(&active_id, over_id.as_deref());
    let order = root_summary(session.board.categories());

    if json {
        print_json(&order)?;
    } else {
        for (i, (id, name)) in order.iter().enumerate() {
            println!("  {}. {} ({})", i + 1, name, id);
        }
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
pub fn handle_edit(
    mut session: Session,
    item_id: String,
    name: Option<String>,
    description: Option<String>,
    price: Option<String>,
    status: Option<String>,
    tags: Vec<String>,
    allergens: Vec<u32>,
    side_dishes: Vec<String>,
    managed_ingredients: Vec<String>,
    ingredients: Vec<String>,
    variants: Vec<String>,
    new_side_dish: Option<String>,
    json: bool,
) -> Result<()> {
    let board = &mut session.board;

    // Parse everything up front so a bad flag leaves the menu untouched
    let price = price.as_deref().map(parse_price).transpose()?;
    let status: Option<ItemStatus> = status
        .map(|s| s.parse().map_err(|_| MenuError::InvalidStatus(s)))
        .transpose()?;
    let ingredients = ingredients.iter().map(|s| parse_priced(s)).collect::<Result<Vec<_>>>()?;
    let variants = variants.iter().map(|s| parse_priced(s)).collect::<Result<Vec<_>>>()?;

    let owner = tree::find_item_owner(board.categories(), &item_id)
        .ok_or_else(|| MenuError::ItemNotFound(item_id.clone()))?;
    board.select_category(&owner.id)?;

    let draft = board.select_item(&item_id)?;
    if let Some(name) = name {
        draft.set_name(name);
    }
    if let Some(description) = description {
        draft.set_description(description);
    }
    if let Some(price) = price {
        draft.set_base_price(price)?;
    }
    if let Some(status) = status {
        draft.set_status(status);
    }
    for id in allergens {
        draft.toggle_allergen(id);
    }
    for id in &managed_ingredients {
        draft.toggle_managed_ingredient(id);
    }
    for (name, price) in ingredients {
        let index = draft.add_ingredient();
        draft.set_ingredient_name(index, name);
        draft.set_ingredient_price(index, price)?;
    }
    for (name, price) in variants {
        let index = draft.add_variant();
        draft.set_variant_name(index, name);
        draft.set_variant_price(index, price)?;
    }

    for id in &side_dishes {
        board.toggle_draft_side_dish(id)?;
    }
    for tag_id in &tags {
        if !board.toggle_draft_tag(tag_id)? {
            eprintln!("Warning: unknown tag '{}', skipping", tag_id);
        }
    }
    if let Some(input) = new_side_dish {
        let (name, price) = input
            .rsplit_once('=')
            .ok_or_else(|| MenuError::InvalidPrice(input.clone()))?;
        let side_dish = board.quick_add_side_dish(name, price)?;
        if !json {
            println!("Created side dish {} - {}", side_dish.id, side_dish.name);
        }
    }

    let saved = board.save_item()?;

    match saved {
        Some(item) if json => print_json(&item)?,
        Some(item) => {
            println!("Saved item {} - {}", item.id, item.name);
            println!(
                "{}",
                view::render_item_card(&item, board.registries(), &session.config, false)
            );
        }
        None => {
            let item = board.editor().ok_or(MenuError::NoItemSelected)?.item();
            if json {
                print_json(item)?;
            } else {
                println!("No changes to save for {} - {}", item.id, item.name);
            }
        }
    }
    Ok(())
}

pub fn handle_bulk_status(
    mut session: Session,
    category_id: String,
    status: String,
    items: Vec<String>,
    json: bool,
) -> Result<()> {
    let board = &mut session.board;
    board.select_category(&category_id)?;
    for id in &items {
        board.toggle_select_item(id);
    }

    let changed = board.bulk_change_status(&status)?;

    let category = board
        .selected_category()?
        .ok_or_else(|| MenuError::CategoryNotFound(category_id.clone()))?;
    let listing = view::item_listing(Some(&*category))?;
    if json {
        print_json(&listing)?;
    } else {
        println!("Updated {} item(s) to {}\n", changed, status);
        print!(
            "{}",
            view::render_item_listing(&listing, board.registries(), &session.config, &[])
        );
    }
    Ok(())
}

pub fn handle_delete(mut session: Session, items: Vec<String>, json: bool) -> Result<()> {
    let board = &mut session.board;
    for id in &items {
        board.toggle_select_item(id);
    }
    let removed = board.delete_selected();

    if json {
        print_json(board.categories())?;
    } else {
        println!("Deleted {} item(s)\n", removed);
        print!("{}", view::render_tree(board.categories())?);
    }
    Ok(())
}

pub fn handle_add_side_dish(mut session: Session, name: String, price: String, json: bool) -> Result<()> {
    let price = parse_price(&price)?;
    let side_dish = session.board.add_new_side_dish(&name, price)?;

    if json {
        print_json(&side_dish)?;
    } else {
        println!(
            "Created side dish {} - {} ({})",
            side_dish.id,
            side_dish.name,
            session.config.format_price(side_dish.price)
        );
    }
    Ok(())
}

pub fn handle_validate(session: Session) -> Result<()> {
    let board = &session.board;
    let warnings = check_dataset(board.categories(), board.registries())?;

    if warnings.is_empty() {
        println!("No problems found.");
    } else {
        for warning in &warnings {
            println!("{}", format_warning(warning));
        }
    }
    Ok(())
}
