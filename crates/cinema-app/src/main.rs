use anyhow::Context;
use cinema_app::router::MemoryNavigator;
use cinema_app::{App, AppDeps, Stores, creators, logger};
use cinema_client::{HttpCatalogClient, NewReview};
use cinema_config::{AppConfig, Session};
use std::io::{self, BufRead, Write};
use std::sync::Arc;

mod console;

use console::{Command, ConsolePages, HELP};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let log_file = logger::init()?;

    log::info!("Starting cinema-app");
    println!("cinema-app, logging to {}", log_file.display());

    let config = AppConfig::load();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;
    let client = HttpCatalogClient::new(&config.api_base_url, config.request_timeout_secs)
        .with_context(|| format!("Invalid API base URL {}", config.api_base_url))?;
    log::info!("Using backend at {}", client.base_url());

    let stores = Stores::new();
    console::watch_fixtures(&stores);
    let app = App::new(AppDeps {
        client: Arc::new(client),
        runtime: runtime.handle().clone(),
        navigator: Arc::new(MemoryNavigator::new(config.start_path.clone())),
        page_factory: Arc::new(ConsolePages::new(stores.clone())),
        stores,
        session: Session::load(),
        config,
    });

    if let Some(username) = app.cached_username() {
        println!("Welcome back, {}", username);
    }
    app.start();

    let result = run(&app);

    app.shutdown();
    runtime.shutdown_timeout(std::time::Duration::from_secs(1));

    if let Err(err) = &result {
        log::error!("Exiting with error: {:#}", err);
    }
    log::info!("Exiting cinema-app");
    result
}

fn run(app: &App) -> anyhow::Result<()> {
    let stdin = io::stdin();
    prompt()?;
    for line in stdin.lock().lines() {
        let line = line?;
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }
        match Command::parse(&line) {
            Ok(Command::Quit) => break,
            Ok(command) => execute(app, command)?,
            Err(e) => println!("{}", e),
        }
        prompt()?;
    }
    Ok(())
}

fn prompt() -> io::Result<()> {
    print!("> ");
    io::stdout().flush()
}

fn execute(app: &App, command: Command) -> anyhow::Result<()> {
    let dispatcher = app.dispatcher();
    match command {
        Command::Go(path) => app.router().go(&path, None),
        Command::Back => {
            if !app.router().back() {
                println!("no previous page");
            }
        }
        Command::Search(query) => app.router().go("/search", Some(query)),
        Command::Login { username, password } => creators::login(dispatcher, username, password),
        Command::Register {
            username,
            password,
            repeated_password,
        } => creators::register(dispatcher, username, password, repeated_password),
        Command::Logout => creators::logout(dispatcher),
        Command::Review { text, rating } => match app.stores().movie_page.get_state().movie_id {
            Some(movie_id) => {
                creators::post_movie_review(dispatcher, movie_id, NewReview { text, rating })
            }
            None => println!("open a movie first"),
        },
        Command::Avatar(file) => {
            let content = match std::fs::read(&file) {
                Ok(content) => content,
                Err(e) => {
                    println!("cannot read {}: {}", file, e);
                    return Ok(());
                }
            };
            let file_name = std::path::Path::new(&file)
                .file_name()
                .map(|name| name.to_string_lossy().into_owned())
                .unwrap_or(file);
            creators::update_user_avatar(dispatcher, file_name, content);
        }
        Command::Csat(score) => creators::submit_csat(dispatcher, score),
        Command::State => {
            let stores = app.stores();
            println!("path: {}", app.router().current_path());
            println!("auth: {:?}", stores.auth.get_state().status);
            println!("navbar: {:?}", stores.navbar.get_state());
            println!("popup: {:?}", stores.popup.get_state().current);
            println!("notifications: {:?}", stores.notification.get_state().items);
            println!("csat: {:?}", stores.csat.get_state());
        }
        Command::Help => println!("{}", HELP),
        Command::Quit => {}
    }
    Ok(())
}
