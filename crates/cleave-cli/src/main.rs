use anyhow::{Context, Result};
use cleave_core::{rsplit_str, split_str};
use std::io::Read;
use std::{env, fs, process};

mod config;

use config::Config;

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();

    let mut separator: Option<String> = None;
    let mut reverse = false;
    let mut input: Option<String> = None;

    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_usage(&args[0]);
                return Ok(());
            }
            "-r" | "--reverse" => reverse = true,
            "-s" | "--separator" => match rest.next() {
                Some(value) => separator = Some(unescape(value)),
                None => {
                    eprintln!("Error: {arg} needs a value");
                    print_usage(&args[0]);
                    process::exit(1);
                }
            },
            other if other.starts_with('-') => {
                eprintln!("Error: unknown option {other}");
                print_usage(&args[0]);
                process::exit(1);
            }
            _ => {
                if input.is_some() {
                    eprintln!("Error: more than one input file given");
                    print_usage(&args[0]);
                    process::exit(1);
                }
                input = Some(arg.clone());
            }
        }
    }

    // CLI flags win over the config file; the built-in separator is "\n".
    let defaults = match Config::load() {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    };
    let separator = separator
        .or(defaults.separator)
        .unwrap_or_else(|| "\n".to_string());
    let reverse = reverse || defaults.reverse;

    let content = match &input {
        Some(path) => {
            fs::read_to_string(path).with_context(|| format!("failed to read {path}"))?
        }
        None => {
            let mut buffer = String::new();
            std::io::stdin()
                .read_to_string(&mut buffer)
                .context("failed to read stdin")?;
            buffer
        }
    };

    if reverse {
        for piece in rsplit_str(&content, &separator)? {
            println!("{piece}");
        }
    } else {
        for piece in split_str(&content, &separator)? {
            println!("{piece}");
        }
    }

    Ok(())
}

fn print_usage(program: &str) {
    eprintln!("Usage: {program} [-r] [-s SEP] [FILE]");
    eprintln!();
    eprintln!("Split FILE (or stdin) on SEP and print each piece on its own line.");
    eprintln!();
    eprintln!("  -s, --separator SEP  separator, C-style escapes allowed (default \\n)");
    eprintln!("  -r, --reverse        iterate pieces from the end of the input");
    eprintln!("  -h, --help           show this help");
    eprintln!();
    eprintln!("Defaults can be set in {}", Config::config_path().display());
}

/// Interpret C-style escapes so a CRLF separator can be typed as `\r\n`.
fn unescape(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some('t') => out.push('\t'),
            Some('0') => out.push('\0'),
            Some('\\') => out.push('\\'),
            // Unknown escapes pass through untouched.
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
