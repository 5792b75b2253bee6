// pseudo: command-line front end for Romanian exam pseudocode

use std::fs;
use std::path::Path;
use std::process;

use crossterm::style::Stylize;

use pseudo::lint;
use pseudo::parser::lexer::Lexer;
use pseudo::parser::{parse, render::render, tree::dump};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Parse,
    Fmt,
    Lint,
    Tokens,
}

impl Command {
    fn from_name(name: &str) -> Option<Command> {
        match name {
            "parse" => Some(Command::Parse),
            "fmt" => Some(Command::Fmt),
            "lint" => Some(Command::Lint),
            "tokens" => Some(Command::Tokens),
            _ => None,
        }
    }
}

const COMMANDS: &[(&str, &str)] = &[
    ("parse", "Print the syntax tree"),
    ("fmt", "Print the program in canonical layout"),
    ("lint", "Print the source with typeset symbols replaced"),
    ("tokens", "Print one token per line with its position"),
    ("help", "Show this message"),
];

fn print_usage(program_name: &str) {
    eprintln!("Usage: {} <command> <file>", program_name);
    eprintln!();
    eprintln!("Commands:");
    for (name, about) in COMMANDS {
        eprintln!("  {:<8}{}", name, about);
    }
    eprintln!();
    eprintln!("Examples:");
    eprintln!("  {} fmt subiect.txt      # Reformat a program", program_name);
    eprintln!("  {} parse subiect.txt    # Inspect its syntax tree", program_name);
}

fn fail(message: &str) -> ! {
    eprintln!("{} {}", "error:".red().bold(), message);
    process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("pseudo");

    let command = match args.get(1) {
        Some(command) => command.as_str(),
        None => {
            eprintln!("{} No command provided", "error:".red().bold());
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
    };

    if command == "help" || command == "--help" || command == "-h" {
        print_usage(program_name);
        return;
    }

    let command = match Command::from_name(command) {
        Some(command) => command,
        None => {
            eprintln!("{} Unknown command '{}'", "error:".red().bold(), command);
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
    };

    let path = match args.get(2) {
        Some(path) => path,
        None => {
            eprintln!("{} No input file provided", "error:".red().bold());
            eprintln!();
            print_usage(program_name);
            process::exit(1);
        }
    };

    if !Path::new(path).exists() {
        fail(&format!("File '{}' not found", path));
    }

    let raw = match fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) => fail(&format!("Could not read '{}': {}", path, e)),
    };
    let source = lint(&raw);

    match command {
        Command::Lint => print!("{}", source),
        Command::Tokens => {
            let tokens = match Lexer::new(&source).tokenize() {
                Ok(tokens) => tokens,
                Err(e) => report_syntax_error(path, &source, &e.into()),
            };
            for token in tokens {
                println!("{}:{}\t{}", token.location.line, token.location.column, token);
            }
        }
        Command::Parse | Command::Fmt => {
            let program = match parse(&source) {
                Ok(program) => program,
                Err(e) => report_syntax_error(path, &source, &e),
            };
            if command == Command::Parse {
                print!("{}", dump(&program));
            } else {
                print!("{}", render(&program));
            }
        }
    }
}

fn report_syntax_error(path: &str, source: &str, err: &pseudo::SyntaxError) -> ! {
    let location = err.location();
    eprintln!(
        "{} {}:{}:{}",
        "syntax error".red().bold(),
        path,
        location.line,
        location.column
    );
    eprintln!("{}", err.render(source));
    process::exit(1);
}
