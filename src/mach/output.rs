/// ## Output sink
///
/// Receives everything a program prints. Implemented for `String`, which
/// collects the whole output, and by the terminal console.
pub trait Output {
    fn write(&mut self, s: &str);

    fn write_line(&mut self, s: &str) {
        self.write(s);
        self.write("\n");
    }
}

impl Output for String {
    fn write(&mut self, s: &str) {
        self.push_str(s);
    }
}

/// One entry per terminated line. Text written without a line
/// terminator is held back until the line is ended.
#[derive(Debug, Default)]
pub struct Lines {
    lines: Vec<String>,
    partial: String,
}

impl Lines {
    pub fn new() -> Lines {
        Lines::default()
    }

    /// The terminated lines, followed by any unterminated text.
    pub fn into_lines(mut self) -> Vec<String> {
        if !self.partial.is_empty() {
            self.lines.push(self.partial);
        }
        self.lines
    }
}

impl Output for Lines {
    fn write(&mut self, s: &str) {
        let mut pieces = s.split('\n');
        if let Some(first) = pieces.next() {
            self.partial.push_str(first);
        }
        for piece in pieces {
            let line = std::mem::replace(&mut self.partial, piece.to_string());
            self.lines.push(line);
        }
    }
}
