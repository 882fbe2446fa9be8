use clap::Parser;
use color_eyre::eyre::Result;
use config::ConfigManager;
use directories::ProjectDirs;
use log::*;
use std::{
    fs,
    sync::{Arc, Mutex},
};

use ui::{
    colors::Theme,
    store::{action::Action, store::Store},
};

mod config;
mod contacts;
mod ui;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Run in debug mode - prints logs to the terminal
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Color theme for this session (Blue, Emerald, Amber, Rose)
    #[arg(short, long)]
    theme: Option<String>,
}

fn initialize_logger(args: &Args) {
    let filter = if args.debug {
        simplelog::LevelFilter::Debug
    } else {
        simplelog::LevelFilter::Off
    };

    simplelog::TermLogger::init(
        filter,
        simplelog::Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )
    .unwrap();
}

fn get_project_config_path() -> String {
    let project_dir = ProjectDirs::from("", "", "contact-list").unwrap();
    let config_dir = project_dir.config_dir();
    fs::create_dir_all(config_dir).unwrap();
    config_dir.join("config.yml").to_str().unwrap().to_string()
}

fn main() -> Result<()> {
    let args = Args::parse();

    initialize_logger(&args);

    let config_path = get_project_config_path();
    let config_manager = Arc::new(Mutex::new(ConfigManager::new(config_path.as_str())));
    let store = Arc::new(Store::new(config_manager));

    if let Some(theme) = args.theme.as_deref() {
        store.dispatch(Action::UpdateTheme(Theme::from_string(theme)));
    }

    info!("starting contact list");

    ui::app::launch(store)
}
