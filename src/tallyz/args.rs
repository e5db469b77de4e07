use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "tallyz")]
#[command(about = "A tag-aware tally list for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Data file holding the tally list
    #[arg(default_value = "tallyz.json")]
    pub file: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_tallyz_json() {
        let cli = Cli::parse_from(["tallyz"]);
        assert_eq!(cli.file, PathBuf::from("tallyz.json"));
    }

    #[test]
    fn accepts_an_explicit_file() {
        let cli = Cli::parse_from(["tallyz", "lists/words.json"]);
        assert_eq!(cli.file, PathBuf::from("lists/words.json"));
    }
}
