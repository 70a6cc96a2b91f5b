mod token;
mod scanner;

use scanner::Scanner;
use std::io::{stdin, stdout, Write};
use std::fs;
use std::process::exit;

fn run(source: &str) -> bool {
    let (tokens, errors) = Scanner::new(source).scan_tokens();

    for error in &errors {
        eprintln!("{}", error);
    }

    for token in &tokens {
        println!("{:?}", token);
    }

    errors.is_empty()
}

fn repl() {
    let mut line = String::new();

    loop {
        print!("> ");
        stdout().flush().unwrap();

        line.clear();
        let bytes = stdin().read_line(&mut line).unwrap();
        if bytes == 0 {
            break;
        }

        let input = line.trim();
        if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("exit") {
            break;
        }

        // Errors on one line never carry over to the next.
        run(input);
    }

    println!("Exiting.");
}

fn run_file(filename: &str) {
    let source = fs::read_to_string(filename)
        .expect("Could not read file");

    if !run(&source) {
        exit(65);
    }
}

fn main() {
    let args: Vec<String> = std::env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: loxscan [script]");
        exit(64);
    } else if args.len() == 2 {
        run_file(&args[1]);
    } else {
        repl();
    }
}
