use clap::Subcommand;

use crate::app::context::AppContext;
use crate::domain::AppError;

#[derive(Subcommand)]
pub enum MetaCommands {
    /// List meta-template names
    List,
    /// Print a meta-template's source
    Show {
        /// Meta-template name, e.g. template.yaml.j2
        name: String,
    },
}

pub fn run_meta(ctx: &AppContext, command: MetaCommands) -> Result<(), AppError> {
    match command {
        MetaCommands::List => {
            let mut names = ctx.store().list_meta_templates();
            names.sort();
            for name in names {
                println!("{}", name);
            }
        }
        MetaCommands::Show { name } => {
            print!("{}", ctx.store().meta_template_content(&name)?);
        }
    }
    Ok(())
}
