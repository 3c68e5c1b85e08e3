use std::fs;
use std::path::{Path, PathBuf};

use clap::Args;
use serde::Serialize;

use crate::app::context::AppContext;
use crate::domain::{AppError, DeploymentDescription};

#[derive(Args)]
pub struct RenderArgs {
    /// Deployment description (JSON file)
    #[arg(short, long)]
    description: PathBuf,
    /// Runtime parameters as a JSON object
    #[arg(short, long, conflicts_with = "params_file")]
    params: Option<String>,
    /// File containing runtime parameters as a JSON object
    #[arg(long)]
    params_file: Option<PathBuf>,
    /// Print the decoded document instead of the base64 payload
    #[arg(long)]
    decode: bool,
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Deployment description (JSON file)
    #[arg(short, long)]
    description: PathBuf,
    /// Print description and content as one JSON object
    #[arg(long)]
    json: bool,
}

pub fn run_render(ctx: &AppContext, args: RenderArgs) -> Result<(), AppError> {
    let deployment = read_description(&args.description)?;
    let parameters = match (args.params, args.params_file) {
        (Some(inline), _) => inline,
        (None, Some(path)) => fs::read_to_string(path)?,
        (None, None) => "{}".to_string(),
    };

    ctx.store().create(&deployment)?;
    let executor = ctx.executor(&deployment.id, &parameters)?;

    if args.decode {
        let user_data = executor.render_user_data()?;
        print!("{}", String::from_utf8_lossy(&user_data));
    } else {
        println!("{}", executor.execute()?);
    }
    Ok(())
}

pub fn run_generate(ctx: &AppContext, args: GenerateArgs) -> Result<(), AppError> {
    let deployment = read_description(&args.description)?;
    ctx.store().create(&deployment)?;
    let template = ctx.store().get(&deployment.id)?;

    if args.json {
        println!("{}", to_json(&template)?);
    } else {
        print!("{}", template.content);
    }
    Ok(())
}

fn read_description(path: &Path) -> Result<DeploymentDescription, AppError> {
    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| {
        AppError::parse_error(format!("deployment description {}", path.display()), e)
    })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::parse_error("output", e))
}
