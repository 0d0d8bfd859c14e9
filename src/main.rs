//! healthquiz - Main CLI Entry Point

use anyhow::{Context, Result};
use clap::Parser;
use colored::Colorize;
use tracing_subscriber::EnvFilter;

use healthquiz::{
    cli::{Args, Commands, Verbosity},
    config::Config,
    offer::SUBSCRIPTION_OFFER,
    quiz::QuizController,
    storage::{FileStore, ProfileStore},
    terminal::{DisplayManager, InputHandler, QuizRunner, RunOutcome},
};

fn init_logging(verbosity: Verbosity) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(verbosity.log_filter()));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn load_config(args: &Args) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };

    if let Some(store) = &args.store {
        config.set_storage_path(store.clone());
    }

    Ok(config)
}

fn open_controller(config: &Config) -> Result<QuizController<FileStore>> {
    let backend = FileStore::new(config.storage.path.clone());
    let store = ProfileStore::with_key(backend, config.storage.key.clone());
    QuizController::open(store)
        .with_context(|| format!("Failed to open quiz storage at {}", config.storage.path.display()))
}

fn run_start(args: &Args, config: &Config) -> Result<()> {
    let verbosity = args.verbosity();
    let controller = open_controller(config)?;
    let display = DisplayManager::new(verbosity.show_progress(), !args.no_clear);
    let input = InputHandler::new()?;
    let mut runner = QuizRunner::new(controller, display, input);

    loop {
        match runner.run()? {
            RunOutcome::Completed => {
                if !runner.offer_retake()? {
                    return Ok(());
                }
            }
            RunOutcome::Abandoned => {
                println!("\n{}", "Quiz interrompido. Nenhuma resposta foi salva.".yellow());
                return Ok(());
            }
        }
    }
}

fn run_results(config: &Config) -> Result<()> {
    let controller = open_controller(config)?;
    let display = DisplayManager::new(false, false);

    if controller.is_complete() {
        display.show_results(&controller.tips(), &SUBSCRIPTION_OFFER, controller.completed_at())?;
    } else {
        display.show_info("Nenhum quiz concluído ainda. Execute `healthquiz start`.");
    }
    Ok(())
}

fn run_reset(config: &Config) -> Result<()> {
    let mut controller = open_controller(config)?;
    controller.reset()?;
    println!("{} Respostas apagadas.", "✓".green());
    Ok(())
}

fn show_config(args: &Args, config: &Config) -> Result<()> {
    let path = match &args.config {
        Some(path) => path.clone(),
        None => Config::config_path()?,
    };

    println!("{}", "Configuration".bold().cyan());
    println!("  {:<14} {}", "file:", path.display());
    println!("  {:<14} {}", "storage path:", config.storage.path.display());
    println!("  {:<14} {}", "storage key:", config.storage.key);
    println!("  {:<14} {}", "verbosity:", args.verbosity().as_str());
    Ok(())
}

fn main() {
    let args = Args::parse();
    init_logging(args.verbosity());

    let result = load_config(&args).and_then(|config| match args.command() {
        Commands::Start => run_start(&args, &config),
        Commands::Results => run_results(&config),
        Commands::Reset => run_reset(&config),
        Commands::Config => show_config(&args, &config),
    });

    if let Err(e) = result {
        eprintln!("{} {:#}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}
