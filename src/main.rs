use std::io::{BufRead, IsTerminal, Read, Write};
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use termfolio::commands::{CommandResult, Effect};
use termfolio::config::TerminalConfig;
use termfolio::terminal::Terminal;

#[derive(Parser)]
#[command(name = "termfolio")]
#[command(about = "A portfolio terminal over an in-memory filesystem")]
#[command(version)]
struct Cli {
    /// Execute commands from the command line argument
    #[arg(short = 'c')]
    script: Option<String>,

    /// TOML profile (user, hostname, env, extra files)
    #[arg(long = "config")]
    config: Option<PathBuf>,

    /// Starting directory inside the virtual filesystem
    #[arg(long = "cwd")]
    cwd: Option<String>,

    /// Output results as JSON (stdout, stderr, exitCode)
    #[arg(long = "json")]
    json: bool,

    /// Script file to execute, one command per line
    #[arg()]
    script_file: Option<PathBuf>,
}

fn main() {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match TerminalConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => TerminalConfig::default(),
    };

    let mut terminal = match &cli.cwd {
        Some(cwd) => match Terminal::with_cwd(config, cwd) {
            Ok(t) => t,
            Err(e) => {
                eprintln!("Error: --cwd: {}", e);
                std::process::exit(1);
            }
        },
        None => Terminal::new(config),
    };

    // Determine script source: -c, file, stdin, or an interactive session
    let script = if let Some(s) = cli.script {
        s
    } else if let Some(ref file) = cli.script_file {
        match std::fs::read_to_string(file) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error: Cannot read script file: {}: {}", file.display(), e);
                std::process::exit(1);
            }
        }
    } else if std::io::stdin().is_terminal() {
        repl(&mut terminal);
        return;
    } else {
        let mut buf = String::new();
        std::io::stdin().read_to_string(&mut buf).unwrap_or_default();
        buf
    };

    let results = terminal.exec_script(&script);
    let exit_code = results.last().map_or(0, |r| r.exit_code);

    if cli.json {
        let stdout = join_output(results.iter().map(|r| r.stdout.as_str()));
        let stderr = join_output(results.iter().map(|r| r.stderr.as_str()));
        println!(
            "{}",
            serde_json::json!({
                "stdout": stdout,
                "stderr": stderr,
                "exitCode": exit_code,
                "effects": results.iter().filter_map(|r| r.effect.as_ref()).collect::<Vec<_>>(),
            })
        );
    } else {
        for result in &results {
            print_result(result);
        }
    }

    std::process::exit(exit_code);
}

/// Newline-terminate each non-empty block and concatenate.
fn join_output<'a>(blocks: impl Iterator<Item = &'a str>) -> String {
    blocks
        .filter(|b| !b.is_empty())
        .map(|b| format!("{}\n", b))
        .collect()
}

fn print_result(result: &CommandResult) {
    if !result.stdout.is_empty() {
        println!("{}", result.stdout);
    }
    if !result.stderr.is_empty() {
        eprintln!("{}", result.stderr);
    }
}

/// Line-based interactive session.
fn repl(terminal: &mut Terminal) {
    println!("{}\n", terminal.greeting());
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    loop {
        print!("{}", terminal.prompt());
        let _ = std::io::stdout().flush();

        let Some(Ok(line)) = lines.next() else {
            println!();
            break;
        };

        let result = terminal.exec(&line);
        print_result(&result);

        match result.effect {
            Some(Effect::ClearScreen) => print!("\x1b[2J\x1b[H"),
            Some(Effect::Exit) => break,
            Some(Effect::Reboot) => println!("{}\n", terminal.greeting()),
            Some(Effect::OpenEditor { path, content }) => {
                println!("Editing {} (finish with a line containing only '.')", path);
                if !content.is_empty() {
                    println!("{}", content);
                }
                let mut buffer = Vec::new();
                for line in lines.by_ref() {
                    match line {
                        Ok(l) if l == "." => break,
                        Ok(l) => buffer.push(l),
                        Err(_) => break,
                    }
                }
                print_result(&terminal.save_editor(&path, &buffer.join("\n")));
            }
            Some(Effect::OpenLink { .. }) | None => {}
        }
    }
}
