mod app;
mod config;
mod logger;
mod ui;

use anyhow::Result;

use app::App;
use config::Config;

fn main() -> Result<()> {
    // 1. Environment (.env, logging)
    dotenv::dotenv().ok();
    let config = Config::from_env();
    logger::init(&config);

    tracing::info!(honor_key_repeat = config.honor_key_repeat, "pizzeria client starting");

    // 2. Catalog engine over the embedded seed menu
    let app = App::new(&config)?;

    // 3. Terminal event loop
    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!("client error: {e}");
    }
    result
}
