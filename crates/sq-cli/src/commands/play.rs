use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;

use sq_engine::Console;

pub fn run(data: Option<&Path>, profile: Option<&str>) -> Result<(), String> {
    let mut console = Console::new(super::load_engine(data)?);

    println!("  {} Saint Quest", "Starting".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let opening = match profile {
        Some(id) => console
            .process(&format!("choose {id}"))
            .map_err(|e| e.to_string())?,
        None => console.screen(),
    };
    println!("{opening}\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        match console.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if Console::is_quit(input) {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
