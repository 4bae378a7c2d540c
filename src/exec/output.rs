// Output pane history for code execution

use super::ExecutionOutcome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    /// Status lines written by the app itself
    Info,
    Output,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputLine {
    pub text: String,
    pub kind: LineKind,
}

/// Accumulated output of every run since the last clear
#[derive(Debug, Clone, Default)]
pub struct OutputLog {
    pub lines: Vec<OutputLine>,
    running: bool,
}

impl OutputLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append text, one line per `\n`. A trailing newline adds no empty line.
    pub fn print(&mut self, text: &str, kind: LineKind) {
        let mut lines: Vec<&str> = text.split('\n').collect();
        if lines.len() > 1 && lines.last().is_some_and(|s| s.is_empty()) {
            lines.pop();
        }
        self.lines.extend(lines.into_iter().map(|line| OutputLine {
            text: line.to_string(),
            kind,
        }));
    }

    pub fn start_run(&mut self, title: &str) {
        self.lines.clear();
        self.running = true;
        self.print(&format!("Running {title} reference code..."), LineKind::Info);
    }

    pub fn finish_run(&mut self, outcome: &ExecutionOutcome) {
        self.running = false;
        let kind = if outcome.is_success() {
            LineKind::Output
        } else {
            LineKind::Error
        };
        self.print(outcome.text(), kind);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn clear(&mut self) {
        self.lines.clear();
        self.running = false;
    }

    pub fn get_output(&self) -> Vec<String> {
        self.lines.iter().map(|l| l.text.clone()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_print_splits_lines() {
        let mut log = OutputLog::new();
        log.print("a\nb\n", LineKind::Output);
        assert_eq!(log.get_output(), vec!["a", "b"]);
    }

    #[test]
    fn test_run_lifecycle() {
        let mut log = OutputLog::new();
        log.print("stale", LineKind::Output);
        log.start_run("Linear Search");
        assert!(log.is_running());
        assert_eq!(log.get_output(), vec!["Running Linear Search reference code..."]);

        log.finish_run(&ExecutionOutcome::Failure("Runtime Error: oops".to_string()));
        assert!(!log.is_running());
        assert_eq!(log.lines[1].kind, LineKind::Error);
        assert_eq!(log.lines[1].text, "Runtime Error: oops");
    }
}
