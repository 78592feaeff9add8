use termimad::crossterm::style::{Attribute, Color::*};
use termimad::MadSkin;

use crate::display::terminal::should_use_colors;

/// Print markdown to stdout, styled on colour terminals and plain otherwise
pub fn print_markdown(markdown: &str) {
    if should_use_colors() {
        journal_skin().print_text(markdown);
    } else {
        println!("{}", markdown);
    }
}

fn journal_skin() -> MadSkin {
    let mut skin = MadSkin::default();

    skin.headers[0].set_fg(Cyan);
    skin.headers[0].add_attr(Attribute::Bold);
    skin.headers[1].set_fg(Blue);
    skin.inline_code.set_fg(Yellow);
    skin.bold.add_attr(Attribute::Bold);
    skin.bullet.set_fg(Cyan);

    skin
}
