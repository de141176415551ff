use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use inflection::Inflections;
use std::{
    fs,
    io::{self, Write},
    path::PathBuf,
};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[clap(name = "inflection")]
#[clap(author = "Dave Rolsky <autarch@urth.org>")]
#[clap(about = "Pluralizes and singularizes English nouns")]
struct Args {
    #[clap(short, long, parse(from_os_str))]
    #[clap(help = "A rules file to load after the built-in rules. Can be given more than once.")]
    rules: Vec<PathBuf>,
    #[clap(long)]
    #[clap(help = "Start with no rules at all instead of the built-in rules.")]
    no_builtins: bool,
    #[clap(short, long)]
    #[clap(help = "Log at the debug level. RUST_LOG takes precedence if it is set.")]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[clap(about = "Prints the plural form of each word, one per line")]
    Plural {
        #[clap(required = true)]
        words: Vec<String>,
    },
    #[clap(about = "Prints the singular form of each word, one per line")]
    Singular {
        #[clap(required = true)]
        words: Vec<String>,
    },
    #[clap(about = "Prints the rules in effect, in the rules file format")]
    Rules,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let inflections = inflections_for(&args)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match &args.command {
        Command::Plural { words } => {
            for word in words {
                writeln!(out, "{}", inflections.plural(word))?;
            }
        }
        Command::Singular { words } => {
            for word in words {
                writeln!(out, "{}", inflections.singular(word))?;
            }
        }
        Command::Rules => {
            let file = inflections
                .rules()
                .to_rules_file()
                .context("Could not write the rules in effect as a rules file")?;
            write!(out, "{}", file)?;
        }
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn inflections_for(args: &Args) -> Result<Inflections> {
    let mut inflections = if args.no_builtins {
        Inflections::empty()
    } else {
        Inflections::new()
    };

    for path in &args.rules {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Could not read rules file `{}`", path.display()))?;
        inflections
            .load_rules(&text)
            .with_context(|| format!("Could not load rules from `{}`", path.display()))?;
        debug!(path = %path.display(), "loaded rules file");
    }

    Ok(inflections)
}

#[cfg(test)]
mod tests {
    use super::{inflections_for, Args, Command};
    use clap::Parser;
    use std::{fs, path::PathBuf};

    #[test]
    fn parse_args() {
        let args = Args::try_parse_from([
            "inflection",
            "--rules",
            "a.rules",
            "-r",
            "b.rules",
            "-v",
            "plural",
            "person",
            "ox",
        ])
        .unwrap();
        assert_eq!(
            args.rules,
            vec![PathBuf::from("a.rules"), PathBuf::from("b.rules")]
        );
        assert!(args.verbose);
        assert!(!args.no_builtins);
        match args.command {
            Command::Plural { words } => assert_eq!(words, vec!["person", "ox"]),
            other => panic!("expected the plural command, got {:?}", other),
        }

        assert!(Args::try_parse_from(["inflection", "singular"]).is_err());
        assert!(Args::try_parse_from(["inflection", "--no-builtins", "rules"]).is_ok());
    }

    #[test]
    fn rules_files_are_loaded_in_order() {
        let dir = std::env::temp_dir().join(format!("inflection-cli-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let first = dir.join("first.rules");
        let second = dir.join("second.rules");
        fs::write(&first, "<plural> ([a-z])$ => ${1}s\n").unwrap();
        fs::write(&second, "<plural> (cact)us$ => ${1}i\n").unwrap();

        let args = Args {
            rules: vec![first, second],
            no_builtins: true,
            verbose: false,
            command: Command::Rules,
        };
        let inflections = inflections_for(&args).unwrap();
        assert_eq!(inflections.plural("cactus"), "cacti");
        assert_eq!(inflections.plural("dog"), "dogs");
        assert_eq!(inflections.plural("person"), "persons");
        assert_eq!(
            inflections.rules().to_rules_file().unwrap(),
            "<plural> ([a-z])$ => ${1}s\n<plural> (cact)us$ => ${1}i\n",
        );

        let missing = Args {
            rules: vec![dir.join("missing.rules")],
            no_builtins: false,
            verbose: false,
            command: Command::Rules,
        };
        let err = inflections_for(&missing).unwrap_err();
        assert!(err.to_string().starts_with("Could not read rules file"));

        fs::remove_dir_all(&dir).unwrap();
    }
}
