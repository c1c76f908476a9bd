use clap::Parser;
use shapes3d::app::{App, MENU_HOTKEYS};
use shapes3d::catalog;
use shapes3d::config::{Args, Config};
use shapes3d::logging::init_logging;

/// Main function
fn main() -> shapes3d::Result<()> {
    let args = Args::parse();

    if args.list {
        for (hotkey, spec) in MENU_HOTKEYS.iter().zip(catalog::entries()) {
            println!(
                "[{}] {:<18} {:<20} {}",
                hotkey,
                spec.key.as_str(),
                spec.title,
                spec.description
            );
        }
        return Ok(());
    }

    let config = Config::from(args);
    init_logging(&config.logging)?;
    log::info!("{} {} starting", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let mut app = App::for_terminal(config)?;
    app.run()
}
