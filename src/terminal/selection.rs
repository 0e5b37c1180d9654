use super::buffer::TerminalLine;

pub const WORKSHOP_CHOICES: [&str; 3] = ["Workshop 3", "Workshop 2", "Workshop 1"];

const HIGHLIGHT_MARKER: &str = "▶ ";
const PLAIN_INDENT: &str = "  ";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WorkshopSelector {
    cursor: usize,
}

impl WorkshopSelector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cursor(self) -> usize {
        self.cursor
    }

    pub fn selected_label(self) -> &'static str {
        WORKSHOP_CHOICES[self.cursor]
    }

    pub fn move_next(&mut self) {
        self.cursor = (self.cursor + 1) % WORKSHOP_CHOICES.len();
    }

    pub fn move_prev(&mut self) {
        self.cursor = (self.cursor + WORKSHOP_CHOICES.len() - 1) % WORKSHOP_CHOICES.len();
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    pub fn render(self) -> Vec<TerminalLine> {
        WORKSHOP_CHOICES
            .iter()
            .enumerate()
            .map(|(idx, label)| {
                if idx == self.cursor {
                    TerminalLine::success(format!("{HIGHLIGHT_MARKER}{label}"))
                } else {
                    TerminalLine::system(format!("{PLAIN_INDENT}{label}"))
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::buffer::LineCategory;

    #[test]
    fn move_prev_wraps_from_first_to_last() {
        let mut selector = WorkshopSelector::new();
        selector.move_prev();
        assert_eq!(selector.cursor(), 2);
        assert_eq!(selector.selected_label(), "Workshop 1");
    }

    #[test]
    fn render_highlights_only_the_cursor_row() {
        let mut selector = WorkshopSelector::new();
        selector.move_next();
        let lines = selector.render();
        assert_eq!(lines[0].text, "  Workshop 3");
        assert_eq!(lines[1].text, "▶ Workshop 2");
        assert_eq!(lines[1].category, LineCategory::Success);
        assert_eq!(lines[2].category, LineCategory::System);
    }
}
