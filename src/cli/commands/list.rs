//! List command - Print every configured user

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{load_config, output},
};

#[derive(Parser, Debug)]
#[command(about = "List users from a configuration file")]
pub struct ListArgs {
    /// JSON configuration file (seed users, repository lifetime)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print users as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: ListArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let service = App::with_config(&config).user_service()?;

    let users = service.get_all();
    if users.is_empty() && !args.json {
        println!("No users configured");
        return Ok(());
    }
    output::print_users(&users, args.json)
}
