use crate::app::command_support::{ensure_state_root, open_store_at};

pub fn cmd_setup() -> Result<String, String> {
    let paths = ensure_state_root()?;
    let store = open_store_at(&paths)?;
    Ok(format!(
        "setup complete\nstate_root={}\ndatabase={}",
        paths.root.display(),
        store.database_path().display()
    ))
}
