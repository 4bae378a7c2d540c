//! Main TUI application state and logic

use crate::algorithms::{Algorithm, Instance};
use crate::exec::{
    reference_source, spawn_execution, CodeExecutor, ExecutionOutcome, OutputLog, PythonExecutor,
};
use crate::input::InputPanel;
use crate::playback::{AnimationController, PlaybackStatus};
use crate::settings::Settings;
use crate::ui::panes::{self, StatusRenderData};
use crossbeam_channel::{Receiver, TryRecvError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Catalog,
    Input,
    Visual,
    Output,
}

impl FocusedPane {
    /// Move focus to the next pane (clockwise: catalog -> visual -> output -> input)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Visual,
            FocusedPane::Visual => FocusedPane::Output,
            FocusedPane::Output => FocusedPane::Input,
            FocusedPane::Input => FocusedPane::Catalog,
        }
    }

    /// Move focus to the previous pane (counter-clockwise)
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::Catalog => FocusedPane::Input,
            FocusedPane::Visual => FocusedPane::Catalog,
            FocusedPane::Output => FocusedPane::Visual,
            FocusedPane::Input => FocusedPane::Output,
        }
    }
}

/// The main application state
pub struct App {
    pub settings: Settings,

    /// Controller over the open algorithm and its applied input
    pub controller: AnimationController<Instance>,

    /// Editable fields for the open algorithm
    pub panel: InputPanel,

    /// Last rejected input, shown under the fields until the next edit
    pub input_error: Option<String>,

    /// Catalog cursor, an index into [`panes::catalog_order`]
    pub selected: usize,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    pub output: OutputLog,
    pub output_scroll: usize,

    /// Interpreter used for reference code
    executor: Arc<dyn CodeExecutor>,

    /// Pending background execution
    execution: Option<Receiver<ExecutionOutcome>>,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message overriding the step message until the next action
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl App {
    /// Create the app, opening the startup algorithm from the settings if any
    pub fn new(settings: Settings) -> Self {
        let executor = Arc::new(PythonExecutor::new(settings.python.clone()));
        Self::with_executor(settings, executor)
    }

    pub fn with_executor(settings: Settings, executor: Arc<dyn CodeExecutor>) -> Self {
        let order = panes::catalog_order();
        let requested = settings.startup_algorithm.clone();
        let startup = requested.as_deref().and_then(Algorithm::from_route);
        let algorithm = startup.unwrap_or(order[0]);

        let instance = Instance::with_defaults(algorithm, settings.seed);
        let controller = AnimationController::new(
            instance,
            settings.interval_for(algorithm),
            settings.max_steps,
        );
        let panel = InputPanel::new(algorithm, settings.seed);

        let mut app = App {
            selected: order.iter().position(|&a| a == algorithm).unwrap_or(0),
            settings,
            controller,
            panel,
            input_error: None,
            focused_pane: FocusedPane::Visual,
            output: OutputLog::new(),
            output_scroll: 0,
            executor,
            execution: None,
            should_quit: false,
            status_message: None,
            status_is_error: false,
        };

        match (requested, startup) {
            (Some(route), None) if !route.trim().trim_end_matches('/').is_empty() => {
                app.focused_pane = FocusedPane::Catalog;
                app.set_error(format!("Unknown algorithm '{route}', pick one from the catalog"));
            }
            (None, _) => app.focused_pane = FocusedPane::Catalog,
            _ => {}
        }
        app
    }

    pub fn algorithm(&self) -> Algorithm {
        self.controller.input().algorithm
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            self.on_tick(Instant::now());

            // Use poll with timeout to allow auto-play to work
            if event::poll(Duration::from_millis(30))? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Advance playback and collect finished executions
    pub fn on_tick(&mut self, now: Instant) {
        if self.controller.poll(now) {
            self.status_message = None;
        }

        if let Some(rx) = &self.execution {
            match rx.try_recv() {
                Ok(outcome) => {
                    self.output.finish_run(&outcome);
                    self.output_scroll = usize::MAX;
                    self.execution = None;
                }
                Err(TryRecvError::Empty) => {}
                Err(TryRecvError::Disconnected) => {
                    self.output.finish_run(&ExecutionOutcome::Failure(
                        "Failed to initialize Python environment: worker stopped".to_string(),
                    ));
                    self.execution = None;
                }
            }
        }
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        // Left: catalog | input; right: visualization over output
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(30),
                Constraint::Length(34),
                Constraint::Min(40),
            ])
            .split(main_chunks[0]);

        let right_rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
            .split(columns[2]);

        panes::render_catalog_pane(
            frame,
            columns[0],
            self.selected,
            self.algorithm(),
            self.focused_pane == FocusedPane::Catalog,
        );

        panes::render_input_pane(
            frame,
            columns[1],
            &self.panel,
            self.input_error.as_deref(),
            self.focused_pane == FocusedPane::Input,
        );

        panes::render_visual_pane(
            frame,
            right_rows[0],
            self.controller.input(),
            self.controller.current(),
            self.focused_pane == FocusedPane::Visual,
        );

        panes::render_output_pane(
            frame,
            right_rows[1],
            &self.output,
            self.focused_pane == FocusedPane::Output,
            &mut self.output_scroll,
        );

        let message = self.status_text();
        panes::render_status_bar(
            frame,
            main_chunks[1],
            &StatusRenderData {
                message: &message,
                position: self.controller.position(),
                total: self.total_steps(),
                status: self.controller.status(),
                is_error: self.status_is_error,
            },
        );
    }

    /// Message for the status bar: an override, or the current step's message
    pub fn status_text(&self) -> String {
        match &self.status_message {
            Some(message) => message.clone(),
            None => self.controller.message(),
        }
    }

    /// Total step count when known
    pub fn total_steps(&self) -> Option<usize> {
        let exhausted_or_recorded =
            self.controller.status() == PlaybackStatus::Finished || !self.algorithm().is_live();
        exhausted_or_recorded.then(|| self.controller.known_len())
    }

    fn set_error(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    fn set_info(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    fn clear_status(&mut self) {
        self.status_message = None;
        self.status_is_error = false;
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match key.code {
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
                return;
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
                return;
            }
            _ => {}
        }

        if self.focused_pane == FocusedPane::Input && self.handle_input_key(key) {
            return;
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            KeyCode::Char(' ') => {
                self.clear_status();
                self.controller.toggle();
            }
            KeyCode::Right | KeyCode::Char('s') => {
                self.clear_status();
                if self.controller.is_playing() {
                    self.set_info("Pause playback to step manually");
                } else if self.controller.step().is_none() {
                    self.set_info("No more steps");
                }
            }
            KeyCode::Char('r') => {
                self.controller.reset();
                self.clear_status();
            }
            KeyCode::Char('e') => {
                let applied = self.controller.skip_to_end();
                debug!(applied, "skipped to end");
                self.clear_status();
            }
            KeyCode::Char('x') => self.execute_reference(),
            KeyCode::Char('g') => self.regenerate_cities(),
            KeyCode::Up => self.scroll(-1),
            KeyCode::Down => self.scroll(1),
            KeyCode::Enter if self.focused_pane == FocusedPane::Catalog => {
                let order = panes::catalog_order();
                if let Some(&algorithm) = order.get(self.selected) {
                    self.open(algorithm);
                }
            }
            _ => {}
        }
    }

    /// Editing keys of the input pane. Returns whether the key was consumed.
    fn handle_input_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) => {
                self.panel.insert_char(c);
                self.input_error = None;
            }
            KeyCode::Backspace => {
                self.panel.backspace();
                self.input_error = None;
            }
            KeyCode::Up => self.panel.select_prev(),
            KeyCode::Down => self.panel.select_next(),
            KeyCode::Enter => self.apply_input(),
            KeyCode::Esc => {
                self.panel.restore_defaults();
                self.input_error = None;
                self.apply_input();
                self.set_info("Defaults restored");
            }
            _ => return false,
        }
        true
    }

    fn scroll(&mut self, delta: isize) {
        match self.focused_pane {
            FocusedPane::Catalog => {
                let len = panes::catalog_order().len();
                self.selected = self.selected.saturating_add_signed(delta).min(len - 1);
            }
            FocusedPane::Output => {
                self.output_scroll = self.output_scroll.saturating_add_signed(delta);
            }
            FocusedPane::Input | FocusedPane::Visual => {}
        }
    }

    /// Switch to another algorithm. The old controller is dropped, which
    /// cancels any live producer it was pulling from.
    pub fn open(&mut self, algorithm: Algorithm) {
        info!(algorithm = algorithm.slug(), "opening algorithm");
        let instance = Instance::with_defaults(algorithm, self.settings.seed);
        self.controller = AnimationController::new(
            instance,
            self.settings.interval_for(algorithm),
            self.settings.max_steps,
        );
        self.panel = InputPanel::new(algorithm, self.settings.seed);
        self.input_error = None;
        if let Some(index) = panes::catalog_order().iter().position(|&a| a == algorithm) {
            self.selected = index;
        }
        self.clear_status();
    }

    /// Validate the fields and hand the new input to the controller
    pub fn apply_input(&mut self) {
        match self.panel.apply() {
            Ok(input) => {
                let instance = Instance::new(self.algorithm(), input);
                self.controller.apply(instance);
                self.input_error = None;
                self.set_info("Input applied");
            }
            Err(error) => {
                self.input_error = Some(error.to_string());
                self.set_error(format!("Invalid input: {error}"));
            }
        }
    }

    fn regenerate_cities(&mut self) {
        if !matches!(self.algorithm(), Algorithm::TspExact | Algorithm::TspApprox) {
            return;
        }
        self.panel.reseed();
        self.apply_input();
        if !self.status_is_error {
            self.set_info(self.algorithm().idle_message());
        }
    }

    fn execute_reference(&mut self) {
        if self.execution.is_some() {
            self.set_info("Reference code is still running");
            return;
        }
        let instance = self.controller.input();
        let source = reference_source(instance);
        self.output.start_run(instance.algorithm.title());
        self.output_scroll = 0;
        self.execution = Some(spawn_execution(Arc::clone(&self.executor), source));
    }

    /// Whether a reference program is still running
    pub fn is_executing(&self) -> bool {
        self.execution.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithms::AlgorithmInput;
    use crate::exec::LineKind;

    struct Canned(ExecutionOutcome);

    impl CodeExecutor for Canned {
        fn execute(&self, _source: &str) -> ExecutionOutcome {
            self.0.clone()
        }
    }

    fn app(startup: Option<&str>) -> App {
        let settings = Settings {
            startup_algorithm: startup.map(str::to_string),
            ..Settings::default()
        };
        App::with_executor(
            settings,
            Arc::new(Canned(ExecutionOutcome::Success("done".to_string()))),
        )
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_startup_route_opens_algorithm() {
        let app = app(Some("/algorithm/quick-sort"));
        assert_eq!(app.algorithm(), Algorithm::QuickSort);
        assert_eq!(app.focused_pane, FocusedPane::Visual);
        assert_eq!(
            panes::catalog_order()[app.selected],
            Algorithm::QuickSort
        );
    }

    #[test]
    fn test_unknown_route_falls_back_to_catalog() {
        let app = app(Some("/algorithm/bogo-sort"));
        assert_eq!(app.focused_pane, FocusedPane::Catalog);
        assert!(app.status_is_error);
        assert!(app.status_text().contains("bogo-sort"));
    }

    #[test]
    fn test_step_and_reset_keys() {
        let mut app = app(Some("linear-search"));
        assert_eq!(app.status_text(), "Click Play to start Linear Search");
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.position(), 1);
        press(&mut app, KeyCode::Char('e'));
        assert_eq!(app.controller.status(), PlaybackStatus::Finished);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.controller.status(), PlaybackStatus::Idle);
    }

    #[test]
    fn test_space_plays_and_ticks() {
        let mut app = app(Some("fcfs"));
        press(&mut app, KeyCode::Char(' '));
        assert!(app.controller.is_playing());
        app.on_tick(Instant::now());
        assert_eq!(app.controller.position(), 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.controller.position(), 1);
    }

    #[test]
    fn test_catalog_selection_switches_algorithm() {
        let mut app = app(None);
        assert_eq!(app.focused_pane, FocusedPane::Catalog);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.algorithm(), panes::catalog_order()[1]);
        assert_eq!(app.panel.algorithm(), app.algorithm());
    }

    #[test]
    fn test_input_apply_and_rejection() {
        let mut app = app(Some("n-queens"));
        app.focused_pane = FocusedPane::Input;
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.controller.input().input, AlgorithmInput::Board { n: 6 });

        press(&mut app, KeyCode::Char('0'));
        press(&mut app, KeyCode::Enter);
        assert!(app.input_error.is_some());
        assert_eq!(app.controller.input().input, AlgorithmInput::Board { n: 6 });

        press(&mut app, KeyCode::Esc);
        assert_eq!(app.controller.input().input, AlgorithmInput::Board { n: 4 });
    }

    #[test]
    fn test_regenerate_cities_changes_layout() {
        let mut app = app(Some("tsp-approx"));
        let before = app.controller.input().input.clone();
        press(&mut app, KeyCode::Char('g'));
        assert_ne!(app.controller.input().input, before);
        assert_eq!(
            app.status_text(),
            "Cities generated. Click Start to run Nearest Neighbor."
        );
    }

    #[test]
    fn test_execute_collects_outcome() {
        let mut app = app(Some("dfs"));
        press(&mut app, KeyCode::Char('x'));
        assert!(app.output.is_running());
        let deadline = Instant::now() + Duration::from_secs(5);
        while app.is_executing() && Instant::now() < deadline {
            app.on_tick(Instant::now());
            std::thread::sleep(Duration::from_millis(5));
        }
        assert!(!app.output.is_running());
        let last = app.output.lines.last().unwrap();
        assert_eq!(last.text, "done");
        assert_eq!(last.kind, LineKind::Output);
    }

    #[test]
    fn test_quit() {
        let mut app = app(Some("bfs"));
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }
}
