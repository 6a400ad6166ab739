mod archive;
mod args;
mod bundle;
mod context;
mod error;
mod manifest;
mod result;
mod sanitize;
mod utils;

use args::Args;
use context::Context;

fn main() {
    match run() {
        Ok(path) => println!("{}", path.display()),
        Err(e) => {
            eprintln!("Error: {}", e);
            std::process::exit(e.exit_code());
        }
    }
}

fn run() -> result::Result<std::path::PathBuf> {
    let args = Args::parse();
    let ctx = Context::from_args(args)?;
    bundle::bundle(&ctx)
}
