//! Interactive chat binary: route each turn to the chat or repository agent,
//! resume threads by id, checkpoint on exit.

use std::io::{BufRead, Write};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use routegraph::{build_workflow, FileSaver};
use routegraph_cli::{RunConfig, Session};

#[derive(Parser, Debug)]
#[command(name = "routegraph")]
#[command(about = "Routed chat agent: general conversation plus repository queries")]
struct Args {
    /// Thread id to resume; prompts when omitted.
    #[arg(short, long, value_name = "ID")]
    thread: Option<String>,

    /// Directory for checkpoint files (overrides CHECKPOINT_DIR).
    #[arg(long, value_name = "DIR")]
    checkpoint_dir: Option<String>,

    /// Model name (overrides OPENAI_MODEL).
    #[arg(long, value_name = "NAME")]
    model: Option<String>,

    /// Show debug logs (node transitions, route decisions).
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn prompt_line(prompt: &str) -> std::io::Result<String> {
    print!("{}", prompt);
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().lock().read_line(&mut line)?;
    Ok(line.trim().to_string())
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    dotenv::dotenv().ok();
    init_logging(args.verbose);

    if let Err(e) = run(args).await {
        eprintln!("error: {}", e);
        std::process::exit(1);
    }
}

async fn run(args: Args) -> Result<(), routegraph_cli::Error> {
    let mut config = RunConfig::from_env()?;
    if let Some(dir) = args.checkpoint_dir {
        config.checkpoint_dir = dir;
    }
    if let Some(model) = args.model {
        config.model = model;
    }

    let llm = config.build_llm();
    let host = config.build_host();
    let checkpointer = Arc::new(FileSaver::new(&config.checkpoint_dir));

    // An unroutable graph is a configuration bug: fail startup, loudly.
    let graph = build_workflow(llm.clone(), host, Some(checkpointer.clone()))?;

    let thread_id = match args.thread {
        Some(id) if !id.trim().is_empty() => id.trim().to_string(),
        _ => {
            let entered = prompt_line("Enter chat ID (or press enter to start new): ")?;
            if entered.is_empty() {
                Session::fresh_thread_id()
            } else {
                entered
            }
        }
    };

    let (mut session, resumed) = Session::resume(graph, checkpointer, llm, thread_id).await?;
    if resumed {
        println!("Resuming conversation: {}", session.thread_id());
    } else {
        println!("New conversation started: {}", session.thread_id());
    }

    loop {
        let input = prompt_line("\nYou: ")?;
        if input.is_empty() {
            continue;
        }
        if Session::is_exit_command(&input) {
            let thread_id = session.finish().await?;
            println!("\nSaved. Resume using ID: {}", thread_id);
            return Ok(());
        }
        match session.turn(&input).await {
            Ok(reply) => println!("\nAI: {}", reply),
            Err(e) => eprintln!("error during graph invocation: {}", e),
        }
    }
}
