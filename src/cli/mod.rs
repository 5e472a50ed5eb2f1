mod commands;
mod handlers;

pub use commands::{Cli, Commands};
pub use handlers::{
    handle_add_side_dish, handle_bulk_status, handle_delete, handle_edit, handle_items,
    handle_path, handle_reorder, handle_staff, handle_tree, handle_validate, open_session,
    Session,
};
