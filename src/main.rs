use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use vfs_console::console::WELCOME;
use vfs_console::script::{self, DEFAULT_DELAY};
use vfs_console::{Console, ConsoleOptions};

#[derive(Parser)]
#[command(name = "vfs-console")]
#[command(about = "A shell-like console over a flat virtual file system")]
#[command(version)]
struct Cli {
    /// Persisted VFS table (CSV with path,type,content columns)
    #[arg(long = "vfs")]
    vfs: Option<PathBuf>,

    /// Startup script to replay before reading commands
    #[arg(long = "script")]
    script: Option<PathBuf>,

    /// Pause before each replayed script command, in milliseconds
    #[arg(long = "script-delay-ms", default_value_t = DEFAULT_DELAY.as_millis() as u64)]
    script_delay_ms: u64,

    /// Execute a single command and exit
    #[arg(short = 'c')]
    command: Option<String>,

    /// Output the -c result as JSON (stdout, stderr, exitRequested)
    #[arg(long = "json")]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::info!(
        vfs = %cli.vfs.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "not set".to_string()),
        script = %cli.script.as_ref().map(|p| p.display().to_string()).unwrap_or_else(|| "not set".to_string()),
        "starting console"
    );

    let mut console = match Console::new(ConsoleOptions {
        vfs: cli.vfs,
        ..Default::default()
    }) {
        Ok(console) => console,
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    };

    if let Some(command) = cli.command {
        let result = console.exec(&command);
        if cli.json {
            println!("{}", serde_json::json!({
                "stdout": result.stdout,
                "stderr": result.stderr,
                "exitRequested": console.exit_requested(),
            }));
        } else {
            print!("{}", result.stdout);
            eprint!("{}", result.stderr);
        }
        std::process::exit(result.exit_code);
    }

    print!("{}", WELCOME);

    if let Some(path) = cli.script {
        match script::load_script(&path) {
            Ok(commands) => {
                let delay = Duration::from_millis(cli.script_delay_ms);
                script::replay(&mut console, &commands, delay, |entry| {
                    print!("{}", entry);
                    let _ = std::io::stdout().flush();
                })
                .await;
            }
            Err(e) => eprintln!("Error: {}", e),
        }
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while !console.exit_requested() {
        print!("$ ");
        let _ = std::io::stdout().flush();
        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => {
                eprintln!("Error: cannot read input: {}", e);
                std::process::exit(1);
            }
        };
        print!("{}", console.execute(&line));
    }
}
