mod catalog;
mod cli;
mod config;
mod logging;
mod model;
mod output;
mod route;
mod tui;
mod utils;

use anyhow::{anyhow, Result};
use catalog::source_from_config;
use cli::{Cli, Commands, ConfigActions, OutputFormat};
use config::Config;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use logging::LogTarget;
use model::Category;
use output::{
    find_category, render_detail_human, render_list_human, CategoryDetailResult,
    CategoryListResult,
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::path::Path;
use std::process::ExitCode;
use tokio::runtime::Runtime;
use tui::service::navigator::navigator_for;
use tui::App;

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    let result = match Config::load() {
        Ok(config) => run(cli, config),
        Err(e) => Err(e),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(1)
        }
    }
}

fn apply_overrides(cli: &Cli, config: &mut Config) {
    if let Some(env) = cli.env {
        config.source.environment = env;
    }
    if let Some(base_url) = &cli.base_url {
        config.source.base_url = base_url.clone();
    }
}

fn run(cli: Cli, mut config: Config) -> Result<ExitCode> {
    let saved = config.clone();
    apply_overrides(&cli, &mut config);

    let target = if cli.command.is_none() {
        LogTarget::File
    } else {
        LogTarget::Stderr
    };
    logging::init(&config.log, target)?;

    let file = cli.file.as_deref();
    match cli.command {
        None => run_tui(config, file)?,
        Some(Commands::List { format }) => run_list(&config, file, format)?,
        Some(Commands::Show { category, format }) => run_show(&config, file, &category, format)?,
        Some(Commands::Route { slug }) => {
            println!("{}", route::script_url(&config.source.site_url(), &slug));
        }
        Some(Commands::Config { action }) => run_config(action, saved)?,
    }

    Ok(ExitCode::SUCCESS)
}

fn new_runtime() -> Result<Runtime> {
    Runtime::new().map_err(|e| anyhow!("Failed to create tokio runtime: {}", e))
}

fn run_tui(config: Config, file: Option<&Path>) -> Result<()> {
    let runtime = new_runtime()?;
    let source = source_from_config(&config.source, file)?;

    let mut app = App::new(config.clone(), navigator_for(config.ui.navigator));
    app.start_loading(runtime.handle(), source);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    runtime.shutdown_background();
    result
}

/// Fetches the catalog for the non-interactive commands. Failures are reported, not absorbed.
fn fetch_categories(config: &Config, file: Option<&Path>) -> Result<(Vec<Category>, String)> {
    let runtime = new_runtime()?;
    let source = source_from_config(&config.source, file)?;
    let categories = runtime.block_on(source.fetch())?;
    log::debug!("Fetched {} categories from {}", categories.len(), source.describe());
    Ok((categories, source.describe()))
}

fn run_list(config: &Config, file: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (categories, source) = fetch_categories(config, file)?;
    let result = CategoryListResult::new(&categories, source);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print!("{}", render_list_human(&result)),
    }
    Ok(())
}

fn run_show(
    config: &Config,
    file: Option<&Path>,
    name: &str,
    format: OutputFormat,
) -> Result<()> {
    let (categories, _) = fetch_categories(config, file)?;
    let category = find_category(&categories, name)
        .ok_or_else(|| anyhow!("Unknown category: {}", name))?;
    let result = CategoryDetailResult::new(category, &config.source.site_url());

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&result)?),
        OutputFormat::Human => print!("{}", render_detail_human(&result)),
    }
    Ok(())
}

fn run_config(action: ConfigActions, mut config: Config) -> Result<()> {
    match action {
        ConfigActions::Show => {
            println!("Current configuration ({}):", Config::config_path().display());
            println!("  Base URL: {}", config.source.base_url);
            println!("  Environment: {:?}", config.source.environment);
            println!("  Production base path: {}", config.source.production_base_path);
            println!("  Categories URL: {}", config.source.categories_url());
            match config.source.request_timeout_secs {
                Some(secs) => println!("  Request timeout: {}s", secs),
                None => println!("  Request timeout: none"),
            }
            println!("  Navigator: {:?}", config.ui.navigator);
            println!("  Color: {}", config.ui.color);
            println!("  Log level: {}", config.log.level);
            println!("  Log file: {}", config.log.file_path().display());
        }
        ConfigActions::Set { key, value } => {
            config.set(&key, &value)?;
            config.save()?;
            println!("Set {} to {}", key, value);
        }
    }

    Ok(())
}
