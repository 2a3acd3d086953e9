pub struct DialogSystem {
    lines: Vec<String>,
    index: usize,
    finished: bool,
}

impl DialogSystem {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self { lines: lines.into_iter().map(Into::into).collect(), index: 0, finished: false }
    }

    /// Shows the next line; advancing past the last one finishes the dialog.
    pub fn advance(&mut self) {
        if self.index + 1 < self.lines.len() {
            self.index += 1;
        } else {
            self.finished = true;
        }
    }

    pub fn is_finished(&self) -> bool { self.finished }
    pub fn index(&self) -> usize { self.index }

    pub fn current_line(&self) -> Option<&str> {
        self.lines.get(self.index).map(String::as_str)
    }
}
