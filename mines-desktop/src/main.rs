mod config;
mod config_gen;
mod setup;

use mines_skia_renderer::MinesRenderer;

fn main() -> anyhow::Result<()> {
    setup::init();
    log::info!(">>> Minesweeper Launcher Started <<<");

    let app = MinesRenderer::new()?;
    app.run()?;

    log::info!("Bye");
    Ok(())
}
