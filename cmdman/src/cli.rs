//! Command-line interface definitions for `cmdman`.

use camino::Utf8PathBuf;
use chrono::NaiveDate;
use clap::Parser;

/// Parsed CLI arguments for `cmdman`.
#[derive(Debug, Parser)]
#[command(name = "cmdman")]
#[command(about = "Generate roff man pages for every command in a command tree")]
#[command(version)]
pub struct Args {
    /// Command tree to document (`.json` or `.toml`).
    #[arg(long, value_name = "path")]
    pub tree: Utf8PathBuf,
    /// Output directory for generated pages.
    #[arg(long, value_name = "path")]
    pub out_dir: Option<Utf8PathBuf>,
    /// Configuration file; `cmdman.toml` is read when present otherwise.
    #[arg(long, value_name = "path")]
    pub config: Option<Utf8PathBuf>,
    /// Manual section of every page.
    #[arg(long)]
    pub section: Option<String>,
    /// Separator replacing spaces in page filenames.
    #[arg(long, value_name = "text")]
    pub separator: Option<String>,
    /// Page date instead of today.
    #[arg(long, value_name = "YYYY-MM-DD")]
    pub date: Option<NaiveDate>,
    /// AUTHOR section text.
    #[arg(long, value_name = "text")]
    pub author: Option<String>,
    /// FILES section text for commands without their own.
    #[arg(long, value_name = "text")]
    pub files: Option<String>,
    /// BUGS section text for commands without their own.
    #[arg(long, value_name = "text")]
    pub bugs: Option<String>,
    /// ENVIRONMENT section text for commands without their own.
    #[arg(long, value_name = "text")]
    pub environment: Option<String>,
    /// Left footer text.
    #[arg(long, value_name = "text")]
    pub left_footer: Option<String>,
    /// Center footer text; defaults to the page month and year.
    #[arg(long, value_name = "text")]
    pub center_footer: Option<String>,
    /// Center header text.
    #[arg(long, value_name = "text")]
    pub center_header: Option<String>,
    /// Template file replacing the bundled man page template.
    #[arg(long, value_name = "path")]
    pub template: Option<Utf8PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn parses_all_flags() {
        let args = Args::try_parse_from([
            "cmdman",
            "--tree",
            "tree.json",
            "--out-dir",
            "man",
            "--section",
            "8",
            "--separator",
            "_",
            "--date",
            "2025-12-01",
            "--author",
            "Jane",
            "--template",
            "page.tera",
        ])
        .expect("parse");
        assert_eq!(args.tree.as_str(), "tree.json");
        assert_eq!(args.out_dir, Some(Utf8PathBuf::from("man")));
        assert_eq!(args.section.as_deref(), Some("8"));
        assert_eq!(args.separator.as_deref(), Some("_"));
        assert_eq!(args.date, NaiveDate::from_ymd_opt(2025, 12, 1));
        assert_eq!(args.author.as_deref(), Some("Jane"));
        assert_eq!(args.template, Some(Utf8PathBuf::from("page.tera")));
    }

    #[rstest]
    fn tree_is_required() {
        assert!(Args::try_parse_from(["cmdman", "--out-dir", "man"]).is_err());
    }

    #[rstest]
    fn rejects_malformed_dates() {
        let result = Args::try_parse_from(["cmdman", "--tree", "t.json", "--date", "01/12/2025"]);
        assert!(result.is_err());
    }
}
