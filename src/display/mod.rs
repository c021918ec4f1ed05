//! Terminal display module
//!
//! Prints a report preview, styled with termimad when the terminal supports it.
use std::io::IsTerminal;
use termimad::MadSkin;

/// Print markdown to stdout, styled on colour terminals and plain otherwise
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        report_skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

/// Determine if colors should be used based on environment and TTY status
///
/// `NO_COLOR` wins over `CLICOLOR_FORCE`, which wins over `CLICOLOR=0`.
fn should_use_colors() -> bool {
    colors_enabled(
        std::env::var("NO_COLOR").ok().as_deref(),
        std::env::var("CLICOLOR_FORCE").ok().as_deref(),
        std::env::var("CLICOLOR").ok().as_deref(),
        std::io::stdout().is_terminal(),
    )
}

fn colors_enabled(
    no_color: Option<&str>,
    clicolor_force: Option<&str>,
    clicolor: Option<&str>,
    is_tty: bool,
) -> bool {
    if no_color.is_some() {
        return false;
    }
    if clicolor_force.is_some_and(|v| v != "0") {
        return true;
    }
    if clicolor == Some("0") {
        return false;
    }
    is_tty
}

/// Skin for report previews: bold headings, highlighted list bullets
fn report_skin() -> MadSkin {
    use termimad::crossterm::style::{Attribute, Color::*};

    let mut skin = MadSkin::default();
    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.headers[1].add_attr(Attribute::Bold);
    skin.bullet.set_fg(Cyan);
    skin.inline_code.set_fg(Yellow);
    skin
}
