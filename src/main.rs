// punchfold: paper-folding hole-punch simulator with fold-history visualization

mod engine;
mod grid;
mod parser;
mod snapshot;
mod ui;

use std::fs;
use std::io::{self, Read};
use std::path::Path;

use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use engine::engine::{PunchOutcome, Simulator, BLOCKED_MESSAGE};
use parser::parse::parse_scenario;
use ui::App;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Parse command-line arguments
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("punchfold");

    let mut use_tui = false;
    let mut input_path: Option<&str> = None;
    for arg in &args[1..] {
        match arg.as_str() {
            "--tui" => use_tui = true,
            flag if flag.starts_with("--") => {
                eprintln!("Error: Unknown flag '{}'", flag);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            path => input_path = Some(path),
        }
    }

    // Read the scenario, from a file if given, otherwise from stdin
    let source = match input_path {
        Some(path) => {
            if !Path::new(path).exists() {
                eprintln!("Error: File '{}' not found", path);
                eprintln!();
                print_usage(program_name);
                std::process::exit(1);
            }
            fs::read_to_string(path)?
        }
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            buffer
        }
    };

    let scenario = match parse_scenario(&source) {
        Ok(scenario) => scenario,
        Err(e) => {
            eprintln!("Parse error: {}", e);
            std::process::exit(1);
        }
    };

    // Apply every fold up front; history navigation happens afterwards
    let mut simulator = Simulator::new(scenario);
    simulator.run();
    let outcome = simulator.punch();

    if !use_tui {
        match outcome {
            PunchOutcome::Blocked => println!("{}", BLOCKED_MESSAGE),
            PunchOutcome::Holes(result) => {
                for line in result.render_lines() {
                    println!("{}", line);
                }
            }
        }
        return Ok(());
    }

    // Rewind to the unfolded sheet for the TUI
    simulator.rewind_to_start();

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create and run app
    let mut app = App::new(simulator, outcome);
    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} [scenario-file] [--tui]", program_name);
    eprintln!();
    eprintln!("Reads a fold scenario from the file, or from stdin if no file");
    eprintln!("is given, and prints the unfolded hole grid.");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --tui    Step through the fold history in a terminal UI");
}
