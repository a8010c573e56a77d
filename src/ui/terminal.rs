use std::io::{BufRead, Write};

use anyhow::Result;

use super::app::App;
use super::forms::MenuChoice;

/// Drive the menu loop until the user exits or input ends. End of input is
/// treated like the exit selection, so both collections are still saved.
pub fn run_app<R: BufRead, W: Write>(app: &mut App<R, W>) -> Result<()> {
    loop {
        app.draw_menu()?;
        let choice = match app.read_line()? {
            None => MenuChoice::Exit,
            Some(line) => match MenuChoice::parse(&line) {
                Some(choice) => choice,
                None => {
                    app.report_invalid()?;
                    continue;
                }
            },
        };

        if app.handle_choice(choice)? {
            break;
        }
    }

    app.say_goodbye()
}
