use acbs_utils::config::Config;
use acbs_utils::utils::logging::{build_terminated, init_logging};
use acbs_utils::{
    check_empty, detect_arch, group_match, laundry_list, test_program, timed, Logic, Palette,
};
use anyhow::{anyhow, bail, Context, Result};
use crossterm::style::Stylize;
use std::collections::HashMap;
use std::io::IsTerminal;

fn print_help() {
    println!("{}", "ACBS utilities".blue().bold());
    println!();
    println!("{}", "Usage:".yellow());
    println!("  acbs-utils <COMMAND> [ARGS...]");
    println!();
    println!("{}", "Commands:".yellow());
    println!(
        "  {}                              - Print the host architecture",
        "arch".green()
    );
    println!(
        "  {} - Check whether a program runs",
        "probe [--display] <program> [args...]".green()
    );
    println!(
        "  {}                  - Print a Bash snippet echoing variables",
        "laundry-list NAME...".green()
    );
    println!(
        "  {} - Match a subject against patterns",
        "match --logic <or|and> SUBJECT PATTERN...".green()
    );
    println!(
        "  {} - Check values for emptiness",
        "check-empty --logic <or|and> KEY=VALUE... -- KEY...".green()
    );
    println!();
    println!("{}", "Options:".yellow());
    println!(
        "  {} - Print a commented config file",
        "--generate-config".green()
    );
    println!("  {}            - Show this help", "--help".green());
    println!();
}

/// Pull `--logic <mode>` off the front of `args`
fn take_logic(args: &[String]) -> Result<(Logic, &[String])> {
    match args {
        [flag, mode, rest @ ..] if flag == "--logic" => Ok((mode.parse()?, rest)),
        _ => bail!("expected --logic <or|and>"),
    }
}

fn run_arch() -> Result<bool> {
    match detect_arch() {
        Some(arch) => {
            println!("{}", arch);
            Ok(true)
        }
        None => {
            tracing::warn!("Unrecognized host architecture");
            Ok(false)
        }
    }
}

fn run_probe(args: &[String]) -> Result<bool> {
    let (display, command) = match args.split_first() {
        Some((flag, rest)) if flag == "--display" => (true, rest),
        _ => (false, args),
    };
    if command.is_empty() {
        bail!("probe needs a program to run");
    }

    let found = timed(&format!("Probing {}", command[0]), || {
        test_program(command, display)
    });
    println!("{}", if found { "yes" } else { "no" });
    Ok(found)
}

fn run_match(args: &[String]) -> Result<bool> {
    let (logic, rest) = take_logic(args)?;
    let (subject, patterns) = rest
        .split_first()
        .ok_or_else(|| anyhow!("match needs a subject"))?;

    let matched = group_match(patterns, subject, logic)?;
    println!("{}", matched);
    Ok(matched)
}

fn run_check_empty(args: &[String]) -> Result<bool> {
    let (logic, rest) = take_logic(args)?;
    let split = rest
        .iter()
        .position(|a| a == "--")
        .ok_or_else(|| anyhow!("check-empty needs `--` before the keys to inspect"))?;

    let mut values: HashMap<String, String> = HashMap::new();
    for pair in &rest[..split] {
        let (key, value) = pair
            .split_once('=')
            .with_context(|| format!("expected KEY=VALUE, got '{}'", pair))?;
        values.insert(key.to_string(), value.to_string());
    }

    let empty = check_empty(logic, &values, &rest[split + 1..]);
    println!("{}", empty);
    Ok(empty)
}

fn run(args: &[String]) -> Result<bool> {
    let Some((command, rest)) = args.split_first() else {
        print_help();
        return Ok(true);
    };

    match command.as_str() {
        "--help" | "-h" | "help" => {
            print_help();
            Ok(true)
        }
        "--generate-config" => {
            print!("{}", Config::create_default_with_comments());
            Ok(true)
        }
        "arch" => run_arch(),
        "probe" => run_probe(rest),
        "laundry-list" => {
            print!("{}", laundry_list(rest));
            Ok(true)
        }
        "match" => run_match(rest),
        "check-empty" => run_check_empty(rest),
        other => bail!("unknown command '{}', try --help", other),
    }
}

fn main() -> Result<()> {
    let config = Config::load().unwrap_or_else(|e| {
        eprintln!("Failed to load config, using defaults: {}", e);
        Config::default()
    });

    if let Some(log_path) = init_logging(&config.logging)? {
        tracing::debug!("Writing log to {}", log_path.display());
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(true) => Ok(()),
        Ok(false) => std::process::exit(1),
        Err(e) => {
            let colored = config.logging.color.enabled(std::io::stderr().is_terminal());
            build_terminated(Some(&e.to_string()), &Palette::select(colored));
            std::process::exit(2);
        }
    }
}
