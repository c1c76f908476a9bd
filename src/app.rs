//! Terminal front end: raw-mode setup, key handling and frame presentation.
use crate::catalog::{self, ShapeKey};
use crate::color::Rgb;
use crate::config::Config;
use crate::error::Result;
use crate::render_loop::RenderLoop;
use crate::state::Screen;
use crossterm::{
    cursor,
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute, queue,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor},
    terminal,
};
use log::{info, trace};
use std::io::{self, BufWriter, Write};
use std::time::{Duration, Instant};

const PROJECT_NAME: &str = "3D Shapes";

/// Direct-selection keys for catalog entries, in catalog order
pub const MENU_HOTKEYS: [char; 13] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0', '-', '=', '\\'];

const TEXT: Color = Color::Rgb { r: 0, g: 0, b: 0 };
const PANEL: Color = Color::Rgb { r: 235, g: 235, b: 235 };
const HIGHLIGHT: Color = Color::Rgb { r: 70, g: 130, b: 180 };

/// What a key press asks the application to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    Select(ShapeKey),
    CursorUp,
    CursorDown,
    Confirm,
    Resume,
    Pause,
    TogglePause,
    Reset,
    Back,
    ToggleDebug,
}

/// Maps a key press to an action for the given screen
pub fn action_for(key: &KeyEvent, screen: Screen) -> Option<Action> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(Action::Quit),
            _ => None,
        };
    }

    match (screen, key.code) {
        (_, KeyCode::Char('q')) => Some(Action::Quit),
        (_, KeyCode::Char('d')) => Some(Action::ToggleDebug),
        (Screen::Selection, KeyCode::Up | KeyCode::Char('k')) => Some(Action::CursorUp),
        (Screen::Selection, KeyCode::Down | KeyCode::Char('j')) => Some(Action::CursorDown),
        (Screen::Selection, KeyCode::Enter) => Some(Action::Confirm),
        (Screen::Selection, KeyCode::Char(c)) => MENU_HOTKEYS
            .iter()
            .position(|&hotkey| hotkey == c)
            .map(|index| Action::Select(ShapeKey::ALL[index])),
        (Screen::Detail, KeyCode::Char('s')) => Some(Action::Resume),
        (Screen::Detail, KeyCode::Char('p')) => Some(Action::Pause),
        (Screen::Detail, KeyCode::Char(' ')) => Some(Action::TogglePause),
        (Screen::Detail, KeyCode::Char('r')) => Some(Action::Reset),
        (Screen::Detail, KeyCode::Backspace | KeyCode::Esc | KeyCode::Char('b')) => {
            Some(Action::Back)
        }
        _ => None,
    }
}

/// Current terminal size as (columns, rows)
fn terminal_size() -> io::Result<(u16, u16)> {
    match termsize::get() {
        Some(size) => Ok((size.cols, size.rows)),
        None => terminal::size(),
    }
}

/// Framebuffer dimensions for a terminal grid; each cell shows two pixels
/// stacked vertically.
pub fn pixel_size(cols: u16, rows: u16) -> (usize, usize) {
    (cols as usize, rows as usize * 2)
}

/// Time allotted to one frame. A rate of zero is treated as one frame per
/// second.
pub fn frame_budget(fps: u32) -> Duration {
    Duration::from_secs(1) / fps.max(1)
}

/// Leaves the alternate screen and shows the cursor again
fn leave_screen<W: Write>(out: &mut W) -> io::Result<()> {
    execute!(out, ResetColor, terminal::LeaveAlternateScreen, cursor::Show)
}

/// Raw mode and the alternate screen, left again on drop
struct TerminalGuard {
    active: bool,
}

impl TerminalGuard {
    fn enter() -> io::Result<Self> {
        terminal::enable_raw_mode()?;
        // from here on, drop undoes whatever was entered
        let guard = TerminalGuard { active: true };
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)?;
        info!("terminal initialized");
        Ok(guard)
    }

    /// Restores the terminal, reporting any failure
    fn restore(mut self) -> io::Result<()> {
        self.active = false;
        let restored = leave_screen(&mut io::stdout());
        terminal::disable_raw_mode()?;
        restored?;
        info!("terminal restored");
        Ok(())
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if self.active {
            let _ = leave_screen(&mut io::stdout());
            let _ = terminal::disable_raw_mode();
        }
    }
}

/// Main application struct for the terminal viewer
pub struct App {
    render_loop: RenderLoop,
    config: Config,
    cursor: usize,
    debug: bool,
    running: bool,
    frames_since_last_update: u32,
    last_fps_calculation: Instant,
    fps: f64,
}

impl App {
    pub fn new(config: Config, cols: u16, rows: u16) -> Self {
        let (width, height) = pixel_size(cols, rows);
        let mut render_loop = RenderLoop::new(width, height);
        let mut cursor = 0;
        if let Some(key) = config.initial_shape {
            render_loop.select(key.as_str());
            cursor = key.index();
        }
        if config.start_paused {
            render_loop.pause();
        }

        App {
            render_loop,
            config,
            cursor,
            debug: false,
            running: true,
            frames_since_last_update: 0,
            last_fps_calculation: Instant::now(),
            fps: 0.0,
        }
    }

    /// Creates the app sized to the current terminal
    pub fn for_terminal(config: Config) -> Result<Self> {
        let (cols, rows) = terminal_size()?;
        Ok(App::new(config, cols, rows))
    }

    pub fn render_loop(&self) -> &RenderLoop {
        &self.render_loop
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Takes over the terminal until the user quits. The terminal is
    /// restored when the loop returns, fails or panics.
    pub fn run(&mut self) -> Result<()> {
        let guard = TerminalGuard::enter()?;
        let result = self.main_loop();
        guard.restore()?;
        result
    }

    fn main_loop(&mut self) -> Result<()> {
        let target_frame_time = frame_budget(self.config.fps);

        while self.running {
            let frame_start = Instant::now();

            while event::poll(Duration::ZERO)? {
                self.handle_event(event::read()?);
            }
            if !self.running {
                break;
            }

            self.render_loop.frame();

            let stdout = io::stdout();
            let mut out = BufWriter::new(stdout.lock());
            self.present(&mut out)?;
            out.flush()?;

            self.update_fps();
            let elapsed = frame_start.elapsed();
            if elapsed < target_frame_time {
                std::thread::sleep(target_frame_time - elapsed);
            }
        }

        Ok(())
    }

    fn update_fps(&mut self) {
        self.frames_since_last_update += 1;
        let now = Instant::now();
        let duration = now.duration_since(self.last_fps_calculation);
        if duration.as_secs_f64() >= 1.0 {
            self.fps = self.frames_since_last_update as f64 / duration.as_secs_f64();
            trace!("{:.1} fps", self.fps);
            self.frames_since_last_update = 0;
            self.last_fps_calculation = now;
        }
    }

    pub fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => {
                if let Some(action) = action_for(&key, self.render_loop.screen()) {
                    self.apply(action);
                }
            }
            Event::Resize(cols, rows) => {
                let (width, height) = pixel_size(cols, rows);
                self.render_loop.resize(width, height);
            }
            _ => {}
        }
    }

    pub fn apply(&mut self, action: Action) {
        let entries = ShapeKey::ALL.len();
        match action {
            Action::Quit => self.running = false,
            Action::Select(key) => {
                self.cursor = key.index();
                self.render_loop.select(key.as_str());
            }
            Action::CursorUp => self.cursor = (self.cursor + entries - 1) % entries,
            Action::CursorDown => self.cursor = (self.cursor + 1) % entries,
            Action::Confirm => {
                self.render_loop.select(ShapeKey::ALL[self.cursor].as_str());
            }
            Action::Resume => self.render_loop.resume(),
            Action::Pause => self.render_loop.pause(),
            Action::TogglePause => self.render_loop.toggle_pause(),
            Action::Reset => self.render_loop.reset(),
            Action::Back => self.render_loop.return_to_selection(),
            Action::ToggleDebug => self.debug = !self.debug,
        }
    }

    /// Writes the current framebuffer and the visible panels
    pub fn present<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let frame = self.render_loop.framebuffer();
        let rows = frame.height() / 2;

        queue!(out, cursor::MoveTo(0, 0))?;
        let mut colors: Option<(Rgb, Rgb)> = None;
        for row in 0..rows {
            queue!(out, cursor::MoveTo(0, row as u16))?;
            for x in 0..frame.width() {
                let top = frame.pixel(x, row * 2).unwrap_or(Rgb::WHITE);
                let bottom = frame.pixel(x, row * 2 + 1).unwrap_or(Rgb::WHITE);
                if colors != Some((top, bottom)) {
                    queue!(out, SetForegroundColor(top.into()), SetBackgroundColor(bottom.into()))?;
                    colors = Some((top, bottom));
                }
                queue!(out, Print('▀'))?;
            }
        }
        queue!(out, ResetColor)?;

        self.draw_panels(out, frame.width() as u16, rows as u16)?;
        queue!(out, ResetColor)
    }

    fn draw_panels<W: Write>(&self, out: &mut W, cols: u16, rows: u16) -> io::Result<()> {
        let panels = self.render_loop.panels();

        if panels.project_name {
            let x = cols.saturating_sub(PROJECT_NAME.len() as u16) / 2;
            queue!(
                out,
                cursor::MoveTo(x, 1),
                SetBackgroundColor(PANEL),
                SetForegroundColor(TEXT),
                SetAttribute(Attribute::Bold),
                Print(PROJECT_NAME),
                SetAttribute(Attribute::Reset)
            )?;
        }

        if panels.controls {
            for (index, spec) in catalog::entries().enumerate() {
                let selected = index == self.cursor;
                let line = format!(" [{}] {:<20}", MENU_HOTKEYS[index], spec.title);
                queue!(
                    out,
                    cursor::MoveTo(2, 3 + index as u16),
                    SetBackgroundColor(if selected { HIGHLIGHT } else { PANEL }),
                    SetForegroundColor(if selected { Color::White } else { TEXT }),
                    Print(line)
                )?;
            }
            queue!(
                out,
                cursor::MoveTo(2, 4 + ShapeKey::ALL.len() as u16),
                SetBackgroundColor(PANEL),
                SetForegroundColor(TEXT),
                Print(" ↑/↓ move  Enter select  q quit ")
            )?;
        }

        if panels.shape_details {
            queue!(
                out,
                cursor::MoveTo(2, 1),
                SetBackgroundColor(PANEL),
                SetForegroundColor(TEXT),
                SetAttribute(Attribute::Bold),
                Print(&panels.shape_title),
                SetAttribute(Attribute::Reset),
                cursor::MoveTo(2, 2),
                SetBackgroundColor(PANEL),
                SetForegroundColor(TEXT),
                Print(&panels.shape_description)
            )?;
        }

        let bottom = rows.saturating_sub(2);
        if panels.animation_controls {
            let label = if self.render_loop.rotation().paused {
                " [s] Start  [p] Pause  [r] Reset   Paused "
            } else {
                " [s] Start  [p] Pause  [r] Reset "
            };
            queue!(
                out,
                cursor::MoveTo(2, bottom),
                SetBackgroundColor(PANEL),
                SetForegroundColor(TEXT),
                Print(label)
            )?;
        }
        if panels.return_button {
            queue!(
                out,
                cursor::MoveTo(2, bottom + 1),
                SetBackgroundColor(PANEL),
                SetForegroundColor(TEXT),
                Print(" [Esc] Back to shapes ")
            )?;
        }

        if self.debug {
            let angles = self.render_loop.rotation().angles;
            let lines = [
                format!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION")),
                format!("Angles: ({:.2}, {:.2}, {:.2})", angles[0], angles[1], angles[2]),
                format!("FPS: {:.2}", self.fps),
                format!("Frames: {}", self.render_loop.frames_rendered()),
            ];
            for (i, line) in lines.iter().enumerate() {
                let x = cols.saturating_sub(line.len() as u16 + 2);
                queue!(
                    out,
                    cursor::MoveTo(x, 1 + i as u16),
                    SetBackgroundColor(PANEL),
                    SetForegroundColor(TEXT),
                    Print(line)
                )?;
            }
        }

        Ok(())
    }
}
