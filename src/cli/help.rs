use crate::display;

/// Usage text printed by the `help` word
pub const USAGE: &str = "\
# journal-down

Keeps one markdown file per day under your journal folder, laid out as
`<root>/YYYY/MM/YYYY-MM-DD.md`, and opens it in your editor.

A new file starts with a heading like `# September 10th, 2017 - Sunday`.
Every normal run appends a time subheading like `## 3:07 pm`.

## Usage

- `journal-down` adds a time entry to today's journal and opens it
- `journal-down open` opens today's journal without adding a time entry
- `journal-down open YYYY-MM-DD` opens the journal for that day, like `2017-09-10`
- `journal-down help` displays this information

## Options

- `--config <FILE>` reads settings from FILE (also `JOURNAL_DOWN_CONFIG`)
- `--root <DIR>` stores journals under DIR
- `--timezone <TZ>` uses an IANA timezone like `America/Los_Angeles`
- `--editor <CMD>` opens journals with a GUI editor CMD (otherwise `$VISUAL` or `$EDITOR` in this terminal, then the system opener)
- `--init-config` writes a default configuration file
";

/// Print the usage text
pub fn show() {
    display::print_markdown(USAGE);
}
