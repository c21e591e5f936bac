use std::path::Path;
use std::str::FromStr;

use clap::{Parser, Subcommand};
use jackc_token::{Token, TokenKind};

#[derive(Parser)]
#[command(name = "jackc")]
#[command(about = "Jack language frontend — syntax analyzer")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Parse a token file and print the parse tree
    Parse {
        /// Input token file (one `kind value` pair per line)
        path: String,

        /// Print the tree as JSON instead of markup
        #[arg(long)]
        json: bool,
    },

    /// Check a token file for syntax errors without printing the tree
    Check {
        /// Input token file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Parse { path, json } => cmd_parse(&path, json),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

/// Read a serialized token stream: one token per line, the kind tag
/// followed by the token text (string constants keep the rest of the
/// line). Blank lines are skipped.
fn read_tokens(path: &str) -> Vec<Token> {
    let source = read_source(path);
    let mut tokens = Vec::new();

    for (index, line) in source.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let Some((tag, value)) = line.split_once(char::is_whitespace) else {
            eprintln!(
                "Error: {path}:{}: expected `kind value`, got {line:?}",
                index + 1
            );
            std::process::exit(1);
        };

        match TokenKind::from_str(tag) {
            Ok(kind) => tokens.push(Token::new(kind, value.trim_start())),
            Err(e) => {
                eprintln!("Error: {path}:{}: {e}", index + 1);
                std::process::exit(1);
            }
        }
    }

    tokens
}

fn cmd_parse(path: &str, json: bool) {
    let tokens = read_tokens(path);

    let tree = match jackc_parser::Parser::parse(tokens) {
        Ok(tree) => tree,
        Err(e) => {
            eprintln!("Parse error: {e}");
            std::process::exit(1);
        }
    };

    if json {
        match serde_json::to_string_pretty(&tree) {
            Ok(out) => println!("{out}"),
            Err(e) => {
                eprintln!("Error serializing tree: {e}");
                std::process::exit(1);
            }
        }
    } else {
        print!("{tree}");
    }
}

fn cmd_check(path: &str) {
    let tokens = read_tokens(path);

    if let Err(e) = jackc_parser::Parser::parse(tokens) {
        eprintln!("Parse error: {e}");
        std::process::exit(1);
    }

    eprintln!("OK: {path}");
}
