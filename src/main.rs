//! Nick Forge - styled nickname generation from the command line
//!
//! Prints one nickname per line (or JSON with `--json`). Exit code 2 means
//! the request itself cannot be served, 1 means a configuration or internal
//! failure.

use anyhow::Context;
use nick_forge::{
    option_keys, EngineConfig, GenerationRequest, NickForgeError, NicknameLocale,
    NicknameTemplate, Result, StyleRegistry, UniqueCandidateEngine,
};
use std::env;
use std::process;

/// Parsed command line
#[derive(Debug, Clone, PartialEq)]
struct CliArgs {
    count: usize,
    locale: NicknameLocale,
    template: NicknameTemplate,
    seed: Option<u64>,
    style: Option<String>,
    word: Option<String>,
    word_position: Option<String>,
    word_style: Option<String>,
    json: bool,
    list: bool,
    verbose: bool,
    help: bool,
}

impl Default for CliArgs {
    fn default() -> Self {
        Self {
            count: 10,
            locale: NicknameLocale::En,
            template: NicknameTemplate::AdjNoun,
            seed: None,
            style: None,
            word: None,
            word_position: None,
            word_style: None,
            json: false,
            list: false,
            verbose: false,
            help: false,
        }
    }
}

fn main() {
    // Initialize the library
    if let Err(e) = nick_forge::init() {
        eprintln!("❌ Failed to initialize: {}", e);
        process::exit(1);
    }

    let args: Vec<String> = env::args().skip(1).collect();
    let cli = match parse_args(&args) {
        Ok(cli) => cli,
        Err(e) => {
            eprintln!("{}", e.user_message());
            process::exit(2);
        }
    };

    if cli.help {
        print_help();
        return;
    }

    if cli.verbose {
        tracing_subscriber::fmt()
            .with_writer(std::io::stderr)
            .with_max_level(tracing::Level::DEBUG)
            .init();
    }

    if let Err(e) = run(&cli) {
        match e.downcast_ref::<NickForgeError>() {
            Some(inner) => eprintln!("{}", inner.user_message()),
            None => eprintln!("❌ Error: {:#}", e),
        }
        process::exit(exit_code(&e));
    }
}

fn exit_code(error: &anyhow::Error) -> i32 {
    match error.downcast_ref::<NickForgeError>() {
        Some(NickForgeError::InvalidRequest { .. }) | Some(NickForgeError::NotEnoughUnique { .. }) => 2,
        _ => 1,
    }
}

fn parse_args(args: &[String]) -> Result<CliArgs> {
    let mut cli = CliArgs::default();
    let mut iter = args.iter();

    while let Some(arg) = iter.next() {
        let mut value = |name: &str| -> Result<String> {
            iter.next().cloned().ok_or_else(|| {
                NickForgeError::invalid_request(format!("Missing value for {}", name))
            })
        };

        match arg.as_str() {
            "-h" | "--help" => cli.help = true,
            "--json" => cli.json = true,
            "--list" => cli.list = true,
            "-v" | "--verbose" => cli.verbose = true,
            "-c" | "--count" => {
                let raw = value(arg)?;
                cli.count = raw.trim().parse().map_err(|_| {
                    NickForgeError::invalid_request(format!("Invalid count: {}", raw))
                })?;
            }
            "-l" | "--locale" => cli.locale = value(arg)?.parse()?,
            "-t" | "--template" => cli.template = value(arg)?.parse()?,
            "--seed" => cli.seed = Some(parse_seed(&value(arg)?)?),
            "-g" | "--style" => cli.style = Some(value(arg)?),
            "-w" | "--word" => cli.word = Some(value(arg)?),
            "--word-position" => cli.word_position = Some(value(arg)?),
            "--word-style" => cli.word_style = Some(value(arg)?),
            other => {
                return Err(NickForgeError::invalid_request(format!(
                    "Unknown argument: {}",
                    other
                )))
            }
        }
    }

    Ok(cli)
}

/// Any 64-bit integer; negative values keep their bit pattern
fn parse_seed(raw: &str) -> Result<u64> {
    let raw = raw.trim();
    raw.parse::<u64>()
        .or_else(|_| raw.parse::<i64>().map(|seed| seed as u64))
        .map_err(|_| NickForgeError::invalid_request(format!("Invalid seed: {}", raw)))
}

fn build_request(cli: &CliArgs) -> GenerationRequest {
    let mut request = GenerationRequest::new(cli.count, cli.locale, cli.template);
    request.seed = cli.seed;
    request.style_id = cli.style.clone();

    let options = [
        (option_keys::USER_WORD, &cli.word),
        (option_keys::USER_WORD_POSITION, &cli.word_position),
        (option_keys::USER_WORD_STYLE, &cli.word_style),
    ];
    for (key, value) in options {
        if let Some(value) = value {
            request = request.with_option(key, value.as_str());
        }
    }
    request
}

fn run(cli: &CliArgs) -> anyhow::Result<()> {
    let registry = StyleRegistry::with_defaults().context("Failed to load built-in styles")?;
    let config = EngineConfig::from_env()?;
    let engine = UniqueCandidateEngine::with_config(registry, config)?;

    if cli.list {
        let styles = engine.available_styles();
        if cli.json {
            println!(
                "{}",
                serde_json::to_string_pretty(&styles).context("Failed to serialize styles")?
            );
        } else {
            for style in styles {
                println!("{:<20} {}", style.id, style.display_name);
                if !style.description.is_empty() {
                    println!("{:<20} {}", "", style.description);
                }
            }
        }
        return Ok(());
    }

    let results = engine.generate(&build_request(cli))?;
    if cli.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&results).context("Failed to serialize nicknames")?
        );
    } else {
        for result in &results {
            println!("{}", result);
        }
    }

    Ok(())
}

/// Print help information
fn print_help() {
    println!("🎮 Nick Forge - styled nickname generation");
    println!("══════════════════════════════════════════");
    println!();
    println!("USAGE:");
    println!("    nick-forge [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -c, --count N             Number of nicknames (default: 10)");
    println!("    -l, --locale LOCALE       en | ru (default: en)");
    println!("    -t, --template TEMPLATE   adj_noun | noun_verb | adj_noun_number");
    println!("        --seed SEED           Reproducible output for a fixed 64-bit seed (signed or unsigned)");
    println!("    -g, --style STYLE         Style id (see --list, default: dictionary)");
    println!("    -w, --word WORD           Splice WORD into every nickname");
    println!("        --word-position POS   start | end | smart (default: smart)");
    println!("        --word-style MODE     plain | match (default: plain)");
    println!("        --json                Print JSON instead of plain lines");
    println!("        --list                List available styles");
    println!("    -v, --verbose             Log generation details to stderr");
    println!("    -h, --help                Show this help");
    println!();
    println!("EXAMPLES:");
    println!("    nick-forge -c 5 -g cs16-classic");
    println!("    nick-forge -l ru -t noun_verb --seed 42");
    println!("    nick-forge -g dota-pro -w Aylin --word-style match");
    println!();
    println!("ENVIRONMENT VARIABLES:");
    println!("    NICKFORGE_MIN_ATTEMPTS           Retry floor per call (default: 100)");
    println!("    NICKFORGE_ATTEMPTS_PER_NICKNAME  Retries per requested nickname (default: 50)");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_defaults() {
        assert_eq!(parse_args(&[]).unwrap(), CliArgs::default());
    }

    #[test]
    fn test_parse_full() {
        let cli = parse_args(&args(&[
            "-c", "3", "-l", "ru", "-t", "noun-verb", "--seed", "42", "-g", "dota-pro", "-w",
            "Aylin", "--word-position", "end", "--word-style", "match", "--json",
        ]))
        .unwrap();

        assert_eq!(cli.count, 3);
        assert_eq!(cli.locale, NicknameLocale::Ru);
        assert_eq!(cli.template, NicknameTemplate::NounVerb);
        assert_eq!(cli.seed, Some(42));
        assert!(cli.json);

        let request = build_request(&cli);
        assert_eq!(request.style_id.as_deref(), Some("dota-pro"));
        assert_eq!(request.options.len(), 3);
        assert_eq!(
            request.options.get(option_keys::USER_WORD_POSITION).map(String::as_str),
            Some("end")
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(parse_args(&args(&["--count"])).unwrap_err().is_invalid_request());
        assert!(parse_args(&args(&["-c", "many"])).unwrap_err().is_invalid_request());
        assert!(parse_args(&args(&["--seed", "1.5"])).unwrap_err().is_invalid_request());
        assert!(parse_args(&args(&["-l", "de"])).unwrap_err().is_invalid_request());
        assert!(parse_args(&args(&["--colour"])).unwrap_err().is_invalid_request());
    }

    #[test]
    fn test_parse_signed_seed() {
        let cli = parse_args(&args(&["--seed", "-1"])).unwrap();
        assert_eq!(cli.seed, Some(u64::MAX));
        let cli = parse_args(&args(&["--seed", &i64::MIN.to_string()])).unwrap();
        assert_eq!(cli.seed, Some(i64::MIN as u64));
        let cli = parse_args(&args(&["--seed", &u64::MAX.to_string()])).unwrap();
        assert_eq!(cli.seed, Some(u64::MAX));
    }

    #[test]
    fn test_exit_codes() {
        let invalid = anyhow::Error::new(NickForgeError::invalid_request("count must be >= 1"));
        assert_eq!(exit_code(&invalid), 2);
        let exhausted = anyhow::Error::new(NickForgeError::not_enough_unique(2, 1, 10));
        assert_eq!(exit_code(&exhausted), 2);
        let config = anyhow::Error::new(NickForgeError::config("broken")).context("loading");
        assert_eq!(exit_code(&config), 1);
    }
}
