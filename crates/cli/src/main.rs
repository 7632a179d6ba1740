use std::io;

use anyhow::Context;
use clap::Parser;

use shelflife_cli::{AppConfig, AppContext, Cli, Menu};

fn main() -> anyhow::Result<()> {
    let config = AppConfig::from(Cli::parse());
    shelflife_observability::init(&config.log);

    tracing::info!(backend = %config.backend, "starting shelflife");

    let ctx = AppContext::new(config.backend);
    let mut menu = Menu::new(
        ctx,
        io::stdin().lock(),
        io::stdout().lock(),
        io::stderr().lock(),
    );
    menu.run().context("interactive session ended before Exit was chosen")?;

    Ok(())
}
