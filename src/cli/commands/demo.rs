//! Demo command - Run the reference user scenario

use std::path::PathBuf;

use anyhow::Result;
use clap::Parser;
use tracing::info;

use crate::{
    app::App,
    cli::{load_config, output},
};

#[derive(Parser, Debug)]
#[command(about = "Add two users, look one up, and list everything")]
pub struct DemoArgs {
    /// JSON configuration file (seed users, repository lifetime)
    #[arg(long, short = 'c')]
    pub config: Option<PathBuf>,
}

pub fn execute(args: DemoArgs) -> Result<()> {
    let config = load_config(args.config.as_deref())?;
    let app = App::with_config(&config);
    let service = app.user_service()?;
    info!(seeded = config.users.len(), "resolved user service");

    service.add("user1@email.com", "user1", "secret");
    service.add("user2@email.com", "user2", "secret");

    let user = service.require("user2@email.com")?;
    output::print_user(&user, false)?;
    output::print_separator();
    output::print_users(&service.get_all(), false)?;

    println!("Container is fine!");
    Ok(())
}
