use clap::{Parser, Subcommand};
use color_eyre::eyre::{Context, Result};
use tracing_subscriber::prelude::*;

use msgcast::config::Config;
use msgcast::i18n::Language;
use msgcast::messages::SystemClock;

#[derive(Parser)]
#[command(
    name = "msgcast",
    about = "Compose messages and simulate sending them through chat channels",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Interface language, overrides the config file
    #[arg(short, long, global = true, value_parser = ["en", "pt"])]
    lang: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Compose and send messages interactively (default)
    Send,
    /// Send a fixed batch of sample messages through every channel
    Demo,
    /// Interactive configuration wizard
    Setup,
    /// Create the default config file
    Init,
    /// Show the current config file
    Config,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    init_tracing()?;

    let cli = Cli::parse();

    match cli.command.unwrap_or(Commands::Send) {
        Commands::Send => run_send(cli.lang)?,
        Commands::Demo => run_demo()?,
        Commands::Setup => msgcast::config::run_setup()?,
        Commands::Init => run_init()?,
        Commands::Config => run_config()?,
    }

    Ok(())
}

fn run_send(lang: Option<String>) -> Result<()> {
    let config = Config::load_or_init().wrap_err("加载配置失败")?;
    let language = lang
        .as_deref()
        .map(Language::from_str)
        .unwrap_or_else(|| config.language());

    tracing::debug!(language = language.code(), "starting interactive session");
    msgcast::cli::run_interactive(language)?;
    Ok(())
}

fn run_demo() -> Result<()> {
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    msgcast::cli::run_demo(&mut out, &SystemClock)?;
    Ok(())
}

fn run_init() -> Result<()> {
    let config_path = Config::config_path()?;

    if Config::init_at(&config_path)? {
        println!("Created config file: {}", config_path.display());
    } else {
        println!("Config file already exists: {}", config_path.display());
        println!("Delete it first to re-initialize.");
    }

    Ok(())
}

fn run_config() -> Result<()> {
    let config_path = Config::config_path()?;

    if !config_path.exists() {
        println!("No config file yet. Run `msgcast init` to create one.");
        return Ok(());
    }

    let content = std::fs::read_to_string(&config_path).wrap_err("读取配置文件失败")?;
    println!("Config file: {}\n", config_path.display());
    println!("{}", content);

    Ok(())
}

/// 初始化 tracing: stderr 只输出 warn+，日志文件输出 debug+
fn init_tracing() -> Result<()> {
    let log_dir = Config::log_dir()?;
    std::fs::create_dir_all(&log_dir)
        .wrap_err_with(|| format!("创建日志目录失败: {}", log_dir.display()))?;

    // 文件日志: 按天滚动，debug 级别
    let file_appender = tracing_appender::rolling::daily(&log_dir, "msgcast.log");
    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false)
        .with_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("msgcast=debug")),
        );

    // stderr: 只输出 warn+（不干扰交互提示）
    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_filter(tracing_subscriber::EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(file_layer)
        .with(stderr_layer)
        .init();

    Ok(())
}
