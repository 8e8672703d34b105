use clap::{Parser, Subcommand};
use fancypicker::config;
use fancypicker::gui::app::AppModel;
use relm4::prelude::*;

#[derive(Parser, Debug)]
#[command(name = "fancypicker", version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone)]
enum Commands {
    /// Write the default config file if none exists and print its path
    InitConfig,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::InitConfig) => {
            let path = config::write_default_config()?;
            println!("{}", path.display());
            Ok(())
        }
        None => {
            run_gui();
            Ok(())
        }
    }
}

fn run_gui() {
    let config = config::load_or_default();

    let (tx, rx) = async_channel::bounded(32);

    // dropping the watcher stops reloads
    let _watcher = match config::watch_config(tx) {
        Ok(watcher) => Some(watcher),
        Err(e) => {
            log::error!("Config watcher error: {}", e);
            None
        }
    };

    let app = RelmApp::new("org.fancypicker.FancyPicker").with_args(Vec::new());

    app.run::<AppModel>((config, rx));
}
