use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use rust_qa_chat::config::{self, AppConfig};
use rust_qa_chat::network::{ChatBackend, ChatClient, Dispatcher};
use rust_qa_chat::ui::ChatApp;
use rust_qa_chat::{Result, console};
use tokio::io::BufReader;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(
    name = "rust_qa_chat",
    version,
    about = "Desktop chat client for a Q&A bot backend"
)]
struct Cli {
    /// Path to JSON config file
    #[arg(long, default_value = config::DEFAULT_CONFIG_PATH, value_name = "FILE")]
    config: String,
    /// Override the backend chat endpoint
    #[arg(long, value_name = "URL")]
    endpoint: Option<String>,
    #[command(subcommand)]
    mode: Option<Mode>,
}

#[derive(Subcommand, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Chat on stdin/stdout instead of opening a window
    Console,
    /// Check that the backend answers on its root route
    Ping,
    /// Write the default config file to --config
    InitConfig,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    // Khởi tạo Logger để debug
    env_logger::init();

    let cli = Cli::parse();

    if cli.mode == Some(Mode::InitConfig) {
        config::save_config(&cli.config, &AppConfig::default())?;
        println!("Wrote default config to {}", cli.config);
        return Ok(());
    }

    let mut app_config = config::load_config(&cli.config);
    if let Some(endpoint) = cli.endpoint {
        app_config.endpoint = endpoint;
    }
    let dispatcher = Dispatcher::new(ChatBackend::new(app_config.endpoint_url()?));

    match cli.mode {
        Some(Mode::Console) => run_console(&dispatcher, &app_config).await,
        Some(Mode::Ping) => run_ping(&dispatcher).await,
        _ => run_window(dispatcher, app_config).await,
    }
}

async fn run_console(dispatcher: &Dispatcher, app_config: &AppConfig) -> Result<()> {
    let stdin = BufReader::new(tokio::io::stdin());
    console::run(dispatcher, app_config, stdin, std::io::stdout()).await?;
    Ok(())
}

async fn run_ping(dispatcher: &Dispatcher) -> Result<()> {
    let backend = dispatcher.backend();
    let body = backend.health_check().await?;
    println!("{} is reachable: {}", backend.endpoint(), body.trim());
    Ok(())
}

async fn run_window(dispatcher: Dispatcher, app_config: AppConfig) -> Result<()> {
    // 1. Tạo các kênh giao tiếp (Channels)
    // UI -> Worker
    let (cmd_tx, cmd_rx) = mpsc::channel(100);
    // Worker -> UI
    let (event_tx, event_rx) = mpsc::channel(100);

    // 2. Khởi chạy worker gọi backend (Chạy ngầm)
    let worker = ChatClient::new(dispatcher, event_tx.clone(), cmd_rx);
    tokio::spawn(worker.run());

    // 3. Khởi chạy UI (Chạy trên Main Thread)
    let options = eframe::NativeOptions::default();
    let runtime = tokio::runtime::Handle::current();
    let mut event_rx = Some(event_rx);
    let title = app_config.window_title.clone();

    eframe::run_native(
        &title,
        options,
        Box::new(move |cc| {
            let _guard = runtime.enter();
            let event_receiver = event_rx
                .take()
                .ok_or("ChatApp should only be initialized once")?;

            log::info!("Client started against {}", app_config.endpoint);

            Ok(Box::new(ChatApp::new(
                cc,
                &app_config,
                cmd_tx.clone(),
                event_tx.clone(),
                event_receiver,
            )))
        }),
    )?;

    Ok(())
}
