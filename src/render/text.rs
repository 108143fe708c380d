//! Plain-text rendering of a [`View`] for terminals

use std::fmt;

use super::view::{CellView, View};

impl CellView {
    /// Three-column cell; empty cells show their index so they can be typed
    fn glyph(&self) -> String {
        match (self.mark, self.highlighted) {
            (Some(player), true) => format!("[{player}]"),
            (Some(player), false) => format!(" {player} "),
            (None, _) => format!(" {} ", self.index),
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f)?;

        for (row, cells) in self.cells.chunks(3).enumerate() {
            if row > 0 {
                writeln!(f, "  ---+---+---")?;
            }
            let glyphs: Vec<String> = cells.iter().map(CellView::glyph).collect();
            writeln!(f, "  {}", glyphs.join("|"))?;
        }
        writeln!(f)?;

        writeln!(f, "  {:14} {}", "Status:", self.status)?;
        writeln!(f, "  {:14}", "Protocol:")?;
        for option in &self.selector {
            let marker = if option.selected { '>' } else { ' ' };
            writeln!(f, "    {marker} {:>2}  {}", option.step, option.description)?;
        }
        let range = &self.time_machine;
        writeln!(
            f,
            "  {:14} {}..={} at {}{}",
            "Time Machine:",
            range.min,
            range.max,
            range.value,
            if range.disabled { " (disabled)" } else { "" }
        )?;
        write!(f, "  {:14} {}", "Current Step:", self.current_step)
    }
}

#[cfg(test)]
mod tests {
    use crate::{engine::GameState, render::render};

    #[test]
    fn test_text_view() {
        let state = [0, 3, 1, 4, 2]
            .iter()
            .fold(GameState::new(), |state, &index| state.apply_move(index))
            .jump_to(5);
        let text = render(&state).to_string();

        assert!(text.starts_with("Tic Tac Toe\n"));
        assert!(text.contains("  [X]|[X]|[X]\n"));
        assert!(text.contains("   O | O | 5 \n"));
        assert!(text.contains("Winner is: X"));
        assert!(text.contains(">  5  Go to move #5"));
        assert!(text.contains("0..=5 at 5"));
        assert!(text.ends_with("Step #5"));
    }

    #[test]
    fn test_disabled_range_is_marked() {
        let text = render(&GameState::new()).to_string();
        assert!(text.contains("0..=0 at 0 (disabled)"));
        assert!(text.contains("   0 | 1 | 2 \n"));
    }
}
