use mazerun::{app::App, config::GameConfig, logger::init_tracing};

fn main() -> std::io::Result<()> {
    // Flushes buffered log lines when dropped at the end of main
    let _log_guard = init_tracing();

    let app = App::new(GameConfig::from_env());
    let mut stdout = std::io::stdout();
    App::setup_terminal(&mut stdout)?;
    let result = app.run(&mut stdout);
    App::restore_terminal(&mut stdout)?;
    if let Err(e) = &result {
        tracing::error!("App exited with error: {}", e);
    }
    result
}
