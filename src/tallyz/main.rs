use clap::Parser;
use tallyz::api::TallyzApi;
use tallyz::error::Result;
use tallyz::store::fs::FileStore;

mod args;
mod cli;

use args::Cli;
use cli::app::App;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let api = TallyzApi::new(FileStore::new(cli.file));
    App::standard(api).run()
}
