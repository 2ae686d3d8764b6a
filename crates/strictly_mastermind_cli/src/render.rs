//! Plain-text board rendering.

use strictly_mastermind::{
    CODE_LENGTH, Code, ColorIndex, Feedback, GuessBuffer, HistoryEntry, Mark, Phase, SessionView,
};

const SLOT_WIDTH: usize = 6;

fn mark_symbol(mark: Mark) -> char {
    match mark {
        Mark::Exact => 'X',
        Mark::Partial => 'o',
        Mark::Absent => '.',
    }
}

fn slot_label(color: Option<ColorIndex>) -> String {
    let name = color.map_or("", |c| c.name());
    format!("{:<width$}", name, width = SLOT_WIDTH)
}

fn code_label(code: &Code) -> String {
    code.colors()
        .iter()
        .map(|c| slot_label(Some(*c)))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Formats feedback: one symbol per slot, or counts.
pub fn render_feedback(feedback: &Feedback) -> String {
    match feedback {
        Feedback::Positional(score) => score
            .marks()
            .iter()
            .map(|m| mark_symbol(*m).to_string())
            .collect::<Vec<_>>()
            .join(" "),
        Feedback::Aggregate(tally) => format!("{} exact, {} partial", tally.exact(), tally.partial()),
    }
}

fn render_row(number: usize, entry: &HistoryEntry) -> String {
    let marker = if *entry.seeded() { '*' } else { ' ' };
    format!(
        "{:>2}{} {}  | {}",
        number,
        marker,
        code_label(entry.guess()),
        render_feedback(entry.feedback())
    )
}

/// Formats the guess under construction, with the cursor slot in brackets.
pub fn render_buffer(buffer: &GuessBuffer) -> String {
    (0..CODE_LENGTH)
        .map(|pos| {
            let label = slot_label(buffer.get(pos));
            if pos == buffer.cursor() {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join("")
}

/// Lists the colors in play with the keys that select them.
pub fn render_legend(num_colors: u8) -> String {
    ColorIndex::all(num_colors)
        .map(|c| format!("{} {}", c.index() + 1, c.name()))
        .collect::<Vec<_>>()
        .join("  ")
}

/// Formats the whole board.
pub fn render_board(view: &SessionView) -> String {
    let mut lines = vec![
        format!(
            "Mastermind | {} | {} colors | {} of {} rows left",
            view.difficulty().label(),
            view.num_colors(),
            view.attempts_remaining(),
            view.max_guesses()
        ),
        render_legend(*view.num_colors()),
    ];

    lines.extend(
        view.history()
            .iter()
            .enumerate()
            .map(|(i, entry)| render_row(i + 1, entry)),
    );
    if view.history().iter().any(|entry| *entry.seeded()) {
        lines.push("  * random guess placed before the game".to_string());
    }

    match view.phase() {
        Phase::AwaitingInput => lines.push(format!("    {}", render_buffer(view.buffer()))),
        Phase::Won => lines.push(format!(
            "Code broken in {} rows!",
            view.attempts_used()
        )),
        Phase::Lost => {
            if let Some(secret) = view.secret() {
                lines.push(format!("Out of rows. The code was {}", secret.display()));
            }
        }
    }
    lines.join("\n")
}
