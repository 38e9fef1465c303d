use crate::core::{Guess, ResultKind, WORD_LEN};

/// Render a feedback pattern as one character per position: `G` for an
/// exact match, `Y` for present-but-misplaced, `-` for wrong.
#[must_use]
pub fn pattern_to_string(pattern: &[ResultKind; WORD_LEN]) -> String {
    pattern
        .iter()
        .map(|kind| match kind {
            ResultKind::ExactMatch => 'G',
            ResultKind::PresentWrongPosition => 'Y',
            ResultKind::Wrong => '-',
        })
        .collect()
}

/// Render a guess as letter cells with their feedback, e.g.
/// `G[c] Y[a] -[t] ...`.
#[must_use]
pub fn render_guess(guess: &Guess) -> String {
    guess
        .tokens()
        .iter()
        .map(|token| {
            let mark = match token.kind {
                ResultKind::ExactMatch => 'G',
                ResultKind::PresentWrongPosition => 'Y',
                ResultKind::Wrong => '-',
            };
            format!("{mark}[{}]", token.letter as char)
        })
        .collect::<Vec<_>>()
        .join(" ")
}
