//! Stylesheet generator for the web front end.
//!
//! Resolves every utility and component unit against the theme, then writes
//! the stylesheet plus the class and variant inventories into the build
//! directory.

use anyhow::{Result, anyhow};
use component::heroicons;
use log::info;
use rules::{Config, DEFAULT_VARIANTS, Resolved};
use std::env;
use std::fs::write;
use std::io::{Write as _, stderr};
use std::path::{Path, PathBuf};
use theme::default_theme;

const STYLESHEET_FILE: &str = "stylesheet.css";

/// Command-line options, all optional.
struct Options {
    /// JSON theme overlay; the built-in theme is used when absent.
    theme: Option<PathBuf>,
    /// Icon source tree; icon classes are skipped when absent.
    icons: Option<PathBuf>,
    /// Output directory.
    out: PathBuf,
}

/// Print usage information to stderr.
fn print_usage() {
    drop(writeln!(
        stderr(),
        "Usage:\n  stylegen [--theme <FILE>] [--icons <DIR>] [--out <DIR>]"
    ));
}

/// Parse the flag list.
///
/// # Errors
/// Returns an error on an unknown flag or a flag with no value.
fn parse_args(args: &[String]) -> Result<Options> {
    let mut options = Options {
        theme: None,
        icons: None,
        out: PathBuf::from("build"),
    };
    let mut index = 0;
    while index < args.len() {
        let flag = args[index].as_str();
        if flag == "--help" {
            print_usage();
            return Err(anyhow!("help requested"));
        }
        let value = args
            .get(index + 1)
            .ok_or_else(|| anyhow!("{flag} requires a value"))?;
        match flag {
            "--theme" => options.theme = Some(PathBuf::from(value)),
            "--icons" => options.icons = Some(PathBuf::from(value)),
            "--out" => options.out = PathBuf::from(value),
            _ => {
                print_usage();
                return Err(anyhow!("unknown flag '{flag}'"));
            }
        }
        index += 2;
    }
    Ok(options)
}

/// Assemble the full configuration: every unit, the default variant list
/// and the font stack extensions.
fn configure(icons: Option<&Path>) -> Config {
    let mut config = Config::new()
        .variants(DEFAULT_VARIANTS)
        .extend_theme(
            "font-family.display",
            "'Inter Variable', 'Inter Display', ui-sans-serif, system-ui, \
             sans-serif, 'Apple Color Emoji', 'Segoe UI Emoji', \
             'Segoe UI Symbol', 'Noto Color Emoji'",
        )
        .extend_theme(
            "font-family.sans",
            "'Inter Variable', Inter, ui-sans-serif, system-ui, sans-serif, \
             'Apple Color Emoji', 'Segoe UI Emoji', 'Segoe UI Symbol', \
             'Noto Color Emoji'",
        );
    config = utility::install(config);
    config = component::install(config);
    if let Some(icons) = icons {
        config = config.unit("heroicons", heroicons(icons));
    }
    config
}

/// Resolve the configuration against the theme described by the options.
///
/// # Errors
/// Returns an error if the theme file cannot be read or a unit fails.
fn resolve(options: &Options) -> Result<Resolved> {
    let theme = match &options.theme {
        Some(path) => theme::load(path)?,
        None => default_theme(),
    };
    let config = configure(options.icons.as_deref());
    config.resolve(&theme)
}

/// Main entry point for the stylegen tool.
///
/// # Errors
/// Returns an error if generation or any of the writes fail.
fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let options = parse_args(&args)?;

    let resolved = resolve(&options)?;
    extract::write_artifacts(&resolved, &options.out)?;
    let stylesheet = options.out.join(STYLESHEET_FILE);
    write(&stylesheet, resolved.to_css())?;
    info!(
        target: "stylegen",
        "wrote {} classes to {}",
        resolved.class_count(),
        stylesheet.display()
    );
    Ok(())
}
