#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineCategory {
    System,
    Prompt,
    Input,
    Error,
    Success,
}

impl LineCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Prompt => "prompt",
            Self::Input => "input",
            Self::Error => "error",
            Self::Success => "success",
        }
    }
}

impl std::fmt::Display for LineCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalLine {
    pub text: String,
    pub category: LineCategory,
}

impl TerminalLine {
    pub fn new(text: impl Into<String>, category: LineCategory) -> Self {
        Self {
            text: text.into(),
            category,
        }
    }

    pub fn system(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::System)
    }

    pub fn prompt(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Prompt)
    }

    pub fn input(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Input)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Error)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, LineCategory::Success)
    }

    pub fn blank() -> Self {
        Self::system("")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BufferError {
    #[error("no menu region is open in the terminal buffer")]
    NoMenuRegion,
    #[error("a menu region is already open at line {start}")]
    MenuAlreadyOpen { start: usize },
    #[error("menu region holds {expected} lines but {actual} were supplied")]
    MenuSizeMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuRegion {
    pub start: usize,
    pub len: usize,
}

impl MenuRegion {
    pub fn end(self) -> usize {
        self.start + self.len
    }
}

/// Ordered log of rendered terminal rows.
///
/// Rows are append-only. The single exception is an explicitly opened menu
/// region, whose rows can be replaced wholesale until the menu is closed.
/// `clear` drops everything, including the menu region.
#[derive(Debug, Clone, Default)]
pub struct LineBuffer {
    lines: Vec<TerminalLine>,
    menu: Option<MenuRegion>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, line: TerminalLine) {
        self.lines.push(line);
    }

    pub fn extend<I>(&mut self, lines: I)
    where
        I: IntoIterator<Item = TerminalLine>,
    {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[TerminalLine] {
        &self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn last(&self) -> Option<&TerminalLine> {
        self.lines.last()
    }

    pub fn menu_region(&self) -> Option<MenuRegion> {
        self.menu
    }

    pub fn menu_lines(&self) -> Option<&[TerminalLine]> {
        self.menu
            .map(|region| &self.lines[region.start..region.end()])
    }

    pub fn open_menu(&mut self, lines: Vec<TerminalLine>) -> Result<MenuRegion, BufferError> {
        if let Some(region) = self.menu {
            return Err(BufferError::MenuAlreadyOpen {
                start: region.start,
            });
        }
        let region = MenuRegion {
            start: self.lines.len(),
            len: lines.len(),
        };
        self.lines.extend(lines);
        self.menu = Some(region);
        Ok(region)
    }

    pub fn rewrite_menu(&mut self, lines: Vec<TerminalLine>) -> Result<(), BufferError> {
        let region = self.menu.ok_or(BufferError::NoMenuRegion)?;
        if lines.len() != region.len {
            return Err(BufferError::MenuSizeMismatch {
                expected: region.len,
                actual: lines.len(),
            });
        }
        for (slot, line) in self.lines[region.start..region.end()]
            .iter_mut()
            .zip(lines)
        {
            *slot = line;
        }
        Ok(())
    }

    pub fn close_menu(&mut self) -> Option<MenuRegion> {
        self.menu.take()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.menu = None;
    }
}
