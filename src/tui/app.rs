use std::io;
use std::time::Duration;

use crossterm::event::{
    self, DisableFocusChange, DisableMouseCapture, EnableFocusChange, EnableMouseCapture, Event,
    KeyEventKind,
};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use tracing::info;

use crate::model::{Config, FilterMode, Task, TaskId};
use crate::ops::TaskList;

use super::input;
use super::render;
use super::theme::Theme;

/// Current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Navigate,
    /// Typing into the add-task form
    Add,
}

/// Screen regions from the last draw, used for mouse hit-testing
#[derive(Debug, Clone, Default)]
pub struct HitAreas {
    /// Task rows (one row per task, starting at `scroll_offset`)
    pub list: Option<Rect>,
    pub add_toggle: Option<Rect>,
    pub clear_all: Option<Rect>,
    pub filters_toggle: Option<Rect>,
    pub filters: Vec<(FilterMode, Rect)>,
}

/// Main application state
pub struct App {
    pub list: TaskList,
    pub mode: Mode,
    pub should_quit: bool,
    pub theme: Theme,
    /// Filter panel expanded
    pub show_filters: bool,
    pub show_key_hints: bool,
    /// Cursor index into the visible rows
    pub cursor: usize,
    /// First visible row
    pub scroll_offset: usize,
    /// Add-task form contents
    pub add_buffer: String,
    /// One-shot message for the status row
    pub status_message: Option<String>,
    pub hit_areas: HitAreas,
}

impl App {
    pub fn new(config: &Config) -> Self {
        App {
            list: TaskList::new(config.ui.default_filter),
            mode: Mode::Navigate,
            should_quit: false,
            theme: Theme::from_config(&config.ui),
            show_filters: config.ui.show_filters,
            show_key_hints: config.ui.show_key_hints,
            cursor: 0,
            scroll_offset: 0,
            add_buffer: String::new(),
            status_message: None,
            hit_areas: HitAreas::default(),
        }
    }

    /// The task under the keyboard cursor
    pub fn cursor_task(&self) -> Option<Task> {
        self.list.visible().into_iter().nth(self.cursor)
    }

    /// Keep the cursor on a visible row
    pub fn clamp_cursor(&mut self) {
        let len = self.list.visible().len();
        self.cursor = self.cursor.min(len.saturating_sub(1));
    }

    /// Move the cursor onto `id` if it is visible
    pub fn move_cursor_to(&mut self, id: TaskId) {
        if let Some(pos) = self.list.visible().iter().position(|t| t.id == id) {
            self.cursor = pos;
        }
    }
}

/// Run the TUI application
pub fn run(
    config: Config,
    filter: Option<FilterMode>,
    seed: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let mut app = App::new(&config);
    if let Some(mode) = filter {
        app.list.set_filter(mode);
    }
    for text in seed {
        app.list.add(text);
    }
    info!(tasks = app.list.len(), filter = %app.list.filter(), "starting tui");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        EnableFocusChange
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(
            io::stdout(),
            DisableFocusChange,
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableFocusChange,
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    info!("tui exited");
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                // A gesture cannot survive the terminal losing focus
                Event::FocusLost => input::cancel_drag(app),
                _ => {}
            }
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
