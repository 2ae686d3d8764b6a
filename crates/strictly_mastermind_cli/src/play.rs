//! Interactive game loop over any line reader and writer.

use crate::input::{HELP, InputCommand, parse_command};
use crate::render::render_board;
use rand::Rng;
use std::io::{BufRead, Write};
use strictly_mastermind::{GameSession, Phase, SessionError};
use tracing::{debug, info, instrument};

/// Applies one command to the session.
///
/// Returns the new phase when a guess was submitted.
#[instrument(skip(session))]
pub fn apply<R: Rng>(
    session: &mut GameSession<R>,
    command: InputCommand,
) -> Result<Option<Phase>, SessionError> {
    match command {
        InputCommand::Select(color) => session.select_color(color)?,
        InputCommand::Clear => session.clear_cursor_slot(),
        InputCommand::Move(direction) => session.move_cursor(direction),
        InputCommand::Cycle { slot, direction } => session.cycle_buffer_slot(slot, direction),
        InputCommand::Submit => return session.submit_guess().map(Some),
        InputCommand::NewGame => session.new_game()?,
        InputCommand::SetDifficulty(difficulty) => session.reset(difficulty, session.num_colors())?,
        InputCommand::SetColors(num_colors) => session.reset(session.difficulty(), num_colors)?,
        InputCommand::Help | InputCommand::Quit => {}
    }
    Ok(None)
}

/// Runs a game until `quit` or end of input.
#[instrument(skip_all)]
pub fn run_session<R, I, W>(session: &mut GameSession<R>, input: I, output: &mut W) -> anyhow::Result<()>
where
    R: Rng,
    I: BufRead,
    W: Write,
{
    info!("Starting interactive session");
    writeln!(output, "Break the code: four different colors. Type 'help' for commands.")?;

    let mut lines = input.lines();
    loop {
        writeln!(output, "\n{}", render_board(&session.view()))?;
        write!(output, "> ")?;
        output.flush()?;

        let Some(line) = lines.next().transpose()? else {
            debug!("End of input");
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(e) => {
                writeln!(output, "{}", e)?;
                continue;
            }
        };

        match command {
            InputCommand::Quit => break,
            InputCommand::Help => writeln!(output, "{}", HELP)?,
            command => match apply(session, command) {
                Ok(Some(Phase::Won)) => writeln!(output, "*** You broke the code! ***")?,
                Ok(_) => {}
                Err(SessionError::GameOver) => {
                    writeln!(output, "Game over. Type 'new' to play again.")?
                }
                Err(e) => writeln!(output, "{}", e)?,
            },
        }
    }

    info!(phase = %session.phase(), "Session ended");
    Ok(())
}
