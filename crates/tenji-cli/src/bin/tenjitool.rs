use std::io::{self, Read};
use std::path::Path;
use std::process;

use clap::{Parser, Subcommand};

use tenji::Converter;
use tenji_cli::commands::{self, load_options, load_table};
use tenji_cli::corpus::{format_report, run_corpus};
use tenji_cli::read_file;

macro_rules! die {
    ($result:expr, $($arg:tt)*) => {
        $result.unwrap_or_else(|e| {
            eprintln!($($arg)*, e);
            process::exit(1);
        })
    };
}

#[derive(Parser)]
#[command(name = "tenjitool", about = "Japanese braille (tenji) conversion tool")]
struct Cli {
    /// Write JSONL trace events to this directory (requires the `trace` feature)
    #[arg(long, global = true)]
    trace_dir: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Convert text to braille
    Convert {
        /// Text to convert (reads stdin when omitted)
        text: Option<String>,
        /// Mapping table TOML (default: builtin)
        #[arg(long)]
        table: Option<String>,
        /// Settings TOML (default: builtin)
        #[arg(long)]
        settings: Option<String>,
        /// Output the mirrored (oumen) form
        #[arg(long)]
        oumen: bool,
    },
    /// Mirror braille for embossing from the back side
    Mirror {
        /// Braille to mirror (reads stdin when omitted)
        text: Option<String>,
    },
    /// Print the builtin mapping table TOML
    TableExport,
    /// Validate a mapping table TOML file
    TableValidate {
        /// Table TOML file
        file: String,
    },
    /// Print the default settings TOML
    SettingsExport,
    /// Validate a settings TOML file
    SettingsValidate {
        /// Settings TOML file
        file: String,
    },
    /// Run expected conversions from a TOML corpus
    Corpus {
        /// Corpus TOML file
        file: String,
        /// Only run cases in this category
        #[arg(long)]
        category: Option<String>,
        /// Show passing cases too (default: only failures and skips)
        #[arg(long)]
        verbose: bool,
        /// Output as JSON instead of text
        #[arg(long)]
        json: bool,
        /// Mapping table TOML (default: builtin)
        #[arg(long)]
        table: Option<String>,
        /// Settings TOML (default: builtin)
        #[arg(long)]
        settings: Option<String>,
    },
}

fn input_or_stdin(text: Option<String>) -> String {
    match text {
        Some(text) => text,
        None => {
            let mut buf = String::new();
            die!(io::stdin().read_to_string(&mut buf), "Error reading stdin: {}");
            if buf.ends_with('\n') {
                buf.pop();
            }
            buf
        }
    }
}

fn main() {
    let cli = Cli::parse();
    let _trace = cli
        .trace_dir
        .as_deref()
        .map(|dir| tenji::init_tracing(Path::new(dir)));

    match cli.command {
        Command::Convert {
            text,
            table,
            settings,
            oumen,
        } => {
            let text = input_or_stdin(text);
            let out = die!(
                commands::convert(&text, table.as_deref(), settings.as_deref(), oumen),
                "Error: {}"
            );
            println!("{out}");
        }
        Command::Mirror { text } => {
            println!("{}", commands::mirror(&input_or_stdin(text)));
        }
        Command::TableExport => print!("{}", commands::table_export()),
        Command::TableValidate { file } => {
            println!("{}", die!(commands::table_validate(&file), "Error: {}"));
        }
        Command::SettingsExport => print!("{}", commands::settings_export()),
        Command::SettingsValidate { file } => {
            println!("{}", die!(commands::settings_validate(&file), "Error: {}"));
        }
        Command::Corpus {
            file,
            category,
            verbose,
            json,
            table,
            settings,
        } => {
            let content = die!(read_file(&file), "Error: {}");
            let table = die!(load_table(table.as_deref()), "Error: {}");
            let options = die!(load_options(settings.as_deref()), "Error: {}");
            let converter = Converter::new(&table).with_options(options);
            let report = die!(
                run_corpus(&content, &converter, category.as_deref()),
                "Error: {}"
            );

            if json {
                println!(
                    "{}",
                    serde_json::to_string_pretty(&report).expect("JSON serialization failed")
                );
            } else {
                print!("{}", format_report(&report, verbose));
            }

            if report.has_failures() {
                process::exit(1);
            }
        }
    }
}
