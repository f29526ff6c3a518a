//! Get command - Look up a single user by email

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;

use crate::{
    app::App,
    cli::{load_config, output},
};

#[derive(Parser, Debug)]
#[command(about = "Look up a user by email")]
pub struct GetArgs {
    /// Email address to look up (first match wins)
    pub email: String,

    /// JSON configuration file (seed users, repository lifetime)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,

    /// Print the user as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn execute(args: GetArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let service = App::with_config(&config).user_service()?;

    let user = service.require(&args.email)?;
    output::print_user(&user, args.json)
}
