use clap::{Arg, ArgAction, ArgMatches, Command, value_parser};
use std::path::PathBuf;

/// Command-line arguments for the bundler
#[derive(Debug)]
pub struct Args {
    /// Source directory containing manifest.json
    pub src: PathBuf,

    /// Output directory for the zip
    pub out: PathBuf,

    /// Explicit zip file name
    pub name: Option<String>,

    /// Enable verbose output
    pub verbose: bool,
}

impl Args {
    /// Parse command-line arguments
    pub fn parse() -> Self {
        Self::from_matches(&command().get_matches())
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        Self {
            // Both carry a clap default, so they are always present.
            src: matches.get_one::<PathBuf>("src").cloned().unwrap_or_default(),
            out: matches.get_one::<PathBuf>("out").cloned().unwrap_or_default(),
            name: matches.get_one::<String>("name").cloned(),
            verbose: matches.get_flag("verbose"),
        }
    }
}

const DEFAULT_SRC: &str = "extension";
const DEFAULT_OUT: &str = "dist";

fn command() -> Command {
    Command::new("ext-bundle")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Bundle a browser extension into a ZIP suitable for drag & drop into the extensions page")
        .arg(
            Arg::new("src")
                .short('s')
                .long("src")
                .value_name("DIR")
                .env("EXT_BUNDLE_SRC")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_SRC)
                .help("Source directory containing manifest.json"),
        )
        .arg(
            Arg::new("out")
                .short('o')
                .long("out")
                .value_name("DIR")
                .env("EXT_BUNDLE_OUT")
                .value_parser(value_parser!(PathBuf))
                .default_value(DEFAULT_OUT)
                .help("Output directory for the zip"),
        )
        .arg(
            Arg::new("name")
                .short('n')
                .long("name")
                .value_name("FILE")
                .env("EXT_BUNDLE_NAME")
                .help("Override the zip file name (e.g., my-ext.zip)"),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .help("Report each archived file on stderr"),
        )
}
