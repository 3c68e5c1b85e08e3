use crate::app::context::AppContext;
use crate::domain::AppError;
use crate::services::{injected_script_path, placeholders};

pub fn run_scripts(ctx: &AppContext) -> Result<(), AppError> {
    let injector = ctx.injector();
    let scripts = injector.shell_scripts()?;
    if scripts.is_empty() {
        println!("No scripts to inject");
        return Ok(());
    }

    for script in scripts {
        println!("{}  {}", script.name, script.sha256);
        println!("  -> {}", injected_script_path(&script.name));
        for placeholder in placeholders(&script.content) {
            let state = match injector.variables().var(&placeholder.variable) {
                Some(value) if !value.is_empty() => "set",
                _ => "unset",
            };
            println!("  {} <- ${} ({})", placeholder.identifier, placeholder.variable, state);
        }
    }
    Ok(())
}
