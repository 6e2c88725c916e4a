//! Main application logic for the demo form.
//!
//! This module contains the `App` struct which owns the form's inputs, routes
//! terminal events to the focused one, drains their notifications and renders
//! the form next to a report of the last submission.

use std::io;
use std::sync::mpsc::{self, Receiver};
use std::time::Duration;

use chrono::Local;
use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{
    backend::Backend,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::info;

use crate::cli::Cli;
use crate::demo::enums::FormField;
use tui_inputs::fields::conceal;
use tui_inputs::{
    BooleanInput, FieldStyle, Highlighter, InputMessage, InputView, InputWidget, IntegerInput,
    KeyInput, MessageKind, TextInput,
};

/// Words the code field draws in the keyword style.
const KEYWORDS: &[&str] = &[
    "def", "return", "if", "elif", "else", "for", "while", "in", "import", "from", "class",
    "None", "True", "False", "and", "or", "not", "let", "fn", "mut",
];

/// Colors keywords and numbers, leaving everything else unstyled.
struct KeywordHighlighter;

impl Highlighter for KeywordHighlighter {
    fn highlight(&self, text: &str) -> Vec<Span<'static>> {
        let mut spans = Vec::new();
        let mut word = String::new();
        let mut other = String::new();
        for c in text.chars() {
            if c.is_alphanumeric() || c == '_' {
                if !other.is_empty() {
                    spans.push(Span::raw(std::mem::take(&mut other)));
                }
                word.push(c);
            } else {
                if !word.is_empty() {
                    spans.push(style_word(std::mem::take(&mut word)));
                }
                other.push(c);
            }
        }
        if !word.is_empty() {
            spans.push(style_word(word));
        }
        if !other.is_empty() {
            spans.push(Span::raw(other));
        }
        spans
    }
}

fn style_word(word: String) -> Span<'static> {
    if KEYWORDS.contains(&word.as_str()) {
        Span::styled(word, Style::default().fg(Color::Magenta).add_modifier(Modifier::BOLD))
    } else if word.chars().all(|c| c.is_ascii_digit()) {
        Span::styled(word, Style::default().fg(Color::Cyan))
    } else {
        Span::raw(word)
    }
}

/// Demo form state.
pub struct App {
    inputs: Vec<(FormField, Box<dyn InputWidget>)>,
    focused: Option<usize>,
    hovered: Option<usize>,
    field_areas: Vec<Rect>,
    messages: Receiver<InputMessage>,
    report: Vec<String>,
    status_message: String,
}

impl App {
    /// Build the form, wiring every input's notifications into one channel.
    pub fn new(cli: &Cli, style: FieldStyle) -> tui_inputs::Result<Self> {
        let mut username = TextInput::named(FormField::Username.name())
            .placeholder("enter your username...")
            .title(FormField::Username.title())
            .edge_margin(cli.edge_margin)
            .style(style);
        username.set_on_change_handler_name("handle_username_on_change")?;

        let password = TextInput::named(FormField::Password.name())
            .title(FormField::Password.title())
            .password()
            .edge_margin(cli.edge_margin)
            .style(style);

        let mut age = IntegerInput::named(FormField::Age.name())
            .placeholder("enter your age...")
            .title(FormField::Age.title())
            .step(cli.step)
            .style(style);
        age.set_on_change_handler_name("handle_age_on_change")?;

        let subscribe = BooleanInput::named(FormField::Subscribe.name())
            .title(FormField::Subscribe.title())
            .style(style);

        let mut code = TextInput::named(FormField::Code.name())
            .placeholder("enter some code...")
            .title(FormField::Code.title())
            .highlighter(KeywordHighlighter)
            .masking(cli.code_masking)
            .edge_margin(cli.edge_margin)
            .style(style);
        code.set_on_change_handler_name("handle_code_on_change")?;

        let mut inputs: Vec<(FormField, Box<dyn InputWidget>)> = vec![
            (FormField::Username, Box::new(username)),
            (FormField::Password, Box::new(password)),
            (FormField::Age, Box::new(age)),
            (FormField::Subscribe, Box::new(subscribe)),
            (FormField::Code, Box::new(code)),
        ];

        let (tx, rx) = mpsc::channel();
        for (_, input) in &mut inputs {
            let tx = tx.clone();
            input.subscribe(Box::new(move |msg: &InputMessage| {
                // the receiver lives as long as the app
                let _ = tx.send(msg.clone());
            }));
        }

        Ok(App {
            inputs,
            focused: None,
            hovered: None,
            field_areas: Vec::new(),
            messages: rx,
            report: Vec::new(),
            status_message: String::new(),
        })
    }

    /// Move focus to the input at `index`, or clear it.
    fn set_focus(&mut self, index: Option<usize>) {
        if let Some(current) = self.focused {
            if Some(current) != index {
                self.inputs[current].1.blur();
            }
        }
        self.focused = index;
        if let Some(next) = index {
            self.inputs[next].1.focus();
        }
    }

    fn focus_next(&mut self) {
        let next = match self.focused {
            None => 0,
            Some(i) if i + 1 < self.inputs.len() => i + 1,
            Some(i) => i,
        };
        self.set_focus(Some(next));
    }

    fn focus_previous(&mut self) {
        if let Some(i) = self.focused {
            if i > 0 {
                self.set_focus(Some(i - 1));
            }
        }
    }

    /// Build the report shown in the left panel.
    fn submit(&mut self) {
        self.report = self
            .inputs
            .iter()
            .map(|(field, input)| {
                let value = input.input_value().to_string();
                let shown = match field {
                    FormField::Password => conceal(&value),
                    _ => value,
                };
                format!("{:>9}: {}", field.name(), shown)
            })
            .collect();
        self.status_message = format!("Submitted at {}", Local::now().format("%H:%M:%S"));
        info!("form submitted");
    }

    /// Apply every notification emitted since the last frame.
    fn drain_messages(&mut self) {
        while let Ok(message) = self.messages.try_recv() {
            match message.kind {
                MessageKind::Change => {
                    let shown = match FormField::from_name(&message.sender) {
                        Some(FormField::Password) => conceal(&message.value.to_string()),
                        _ => message.value.to_string(),
                    };
                    info!(
                        handler = %message.handler,
                        "{} field contains: {}",
                        message.sender,
                        shown
                    );
                    self.status_message = format!(
                        "[{}] {} -> {}",
                        Local::now().format("%H:%M:%S"),
                        message.handler.message_name(),
                        shown
                    );
                }
                MessageKind::Focus => {
                    // keep the tab position in step with focus changes
                    if let Some(index) = self
                        .inputs
                        .iter()
                        .position(|(field, _)| field.name() == message.sender)
                    {
                        self.focused = Some(index);
                    }
                }
            }
        }
    }

    /// Handle a key press. Returns true if the application should quit.
    fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.kind == KeyEventKind::Release {
            return false;
        }
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => return true,
            KeyCode::Tab => {
                self.focus_next();
                return false;
            }
            KeyCode::BackTab => {
                self.focus_previous();
                return false;
            }
            KeyCode::Esc => {
                self.set_focus(None);
                return false;
            }
            _ => {}
        }

        if let (Some(index), Some(input_key)) = (self.focused, KeyInput::from_key_event(key)) {
            if self.inputs[index].1.handle_key(input_key).is_consumed() {
                return false;
            }
        }

        match key.code {
            KeyCode::Enter => {
                self.submit();
                false
            }
            KeyCode::Char('q') => self.focused.is_none(),
            _ => false,
        }
    }

    /// Track hover and click focus from mouse events.
    fn handle_mouse(&mut self, mouse: MouseEvent) {
        let position = Position::new(mouse.column, mouse.row);
        let under = self.field_areas.iter().position(|area| area.contains(position));
        match mouse.kind {
            MouseEventKind::Moved => {
                if under != self.hovered {
                    if let Some(old) = self.hovered {
                        self.inputs[old].1.pointer_leave();
                    }
                    if let Some(new) = under {
                        self.inputs[new].1.pointer_enter();
                    }
                    self.hovered = under;
                }
            }
            MouseEventKind::Down(MouseButton::Left) => {
                if under.is_some() {
                    self.set_focus(under);
                }
            }
            _ => {}
        }
    }

    /// Poll for and handle terminal events.
    ///
    /// Returns true if the application should quit.
    fn handle_input(&mut self) -> io::Result<bool> {
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => {
                    if self.handle_key(key) {
                        return Ok(true);
                    }
                }
                Event::Mouse(mouse) => self.handle_mouse(mouse),
                _ => {}
            }
        }
        self.drain_messages();
        Ok(false)
    }

    fn render_report(&self, f: &mut Frame, area: Rect) {
        let lines: Vec<Line> = if self.report.is_empty() {
            vec![Line::from(Span::styled(
                "Press Enter to submit",
                Style::default().fg(Color::DarkGray),
            ))]
        } else {
            self.report.iter().map(|l| Line::from(l.as_str())).collect()
        };
        let report = Paragraph::new(lines)
            .block(
                Block::default()
                    .title("Report")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Blue)),
            )
            .wrap(Wrap { trim: false });
        f.render_widget(report, area);
    }

    fn render_fields(&mut self, f: &mut Frame, area: Rect) {
        let mut constraints: Vec<Constraint> = self
            .inputs
            .iter()
            .map(|(_, input)| {
                let (height, _) = input.base().style().dimensions_for(input.state());
                Constraint::Length(height)
            })
            .collect();
        constraints.push(Constraint::Min(0));
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        self.field_areas.clear();
        for (i, (_, input)) in self.inputs.iter_mut().enumerate() {
            let (_, width) = input.base().style().dimensions_for(input.state());
            let mut field_area = rows[i];
            field_area.width = field_area.width.min(width);
            input.resize(field_area.width);
            f.render_widget(InputView(input.as_ref()), field_area);
            self.field_areas.push(field_area);
        }
    }

    fn render_status_bar(&self, f: &mut Frame, area: Rect) {
        let text = if self.status_message.is_empty() {
            "Tab/Shift+Tab move | Enter submit | Esc unfocus | q quit".to_string()
        } else {
            self.status_message.clone()
        };
        let status = Paragraph::new(text)
            .style(Style::default().bg(Color::Rgb(98, 98, 98)).fg(Color::White))
            .alignment(Alignment::Left);
        f.render_widget(status, area);
    }

    fn render(&mut self, f: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(f.area());
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(40), Constraint::Min(0)])
            .split(chunks[0]);

        self.render_report(f, columns[0]);
        self.render_fields(f, columns[1]);
        self.render_status_bar(f, chunks[1]);
    }

    /// Main event loop for the demo.
    ///
    /// Handles rendering and input processing until the user exits.
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.handle_input()? {
                break;
            }
        }
        Ok(())
    }
}
