//! CLI parse tests.

use super::Cli;
use clap::Parser;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_url_and_title() {
    let cli = parse(&["mkpage", "p1", "My Page"]);
    assert_eq!(cli.url, "p1");
    assert_eq!(cli.title, "My Page");
}

#[test]
fn cli_parse_keeps_leading_slash() {
    // Normalization happens in the core, not the argument layer.
    let cli = parse(&["mkpage", "/blog/post1", "Post One"]);
    assert_eq!(cli.url, "/blog/post1");
}

#[test]
fn cli_parse_non_ascii_title() {
    let cli = parse(&["mkpage", "p1", "测试页"]);
    assert_eq!(cli.title, "测试页");
}

#[test]
fn cli_missing_title_is_an_error() {
    assert!(Cli::try_parse_from(["mkpage", "p1"]).is_err());
}

#[test]
fn cli_missing_args_is_an_error() {
    assert!(Cli::try_parse_from(["mkpage"]).is_err());
}
