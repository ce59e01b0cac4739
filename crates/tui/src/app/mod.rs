use std::time::Duration;

use chrono_tz::Tz;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use engine::{Dashboard, ExpenseStore};

use crate::{
    config::AppConfig,
    error::{AppError, Result},
    ui::{
        self,
        keymap::{AppAction, map_key},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    Description,
    Amount,
}

/// The "Add New Expense" form: raw text exactly as typed.
#[derive(Debug)]
pub struct ExpenseForm {
    pub description: String,
    pub amount: String,
    pub focus: FormField,
    pub message: Option<String>,
}

impl Default for ExpenseForm {
    fn default() -> Self {
        Self {
            description: String::new(),
            amount: String::new(),
            focus: FormField::Description,
            message: None,
        }
    }
}

impl ExpenseForm {
    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            FormField::Description => FormField::Amount,
            FormField::Amount => FormField::Description,
        };
    }

    fn push(&mut self, ch: char) {
        match self.focus {
            FormField::Description => self.description.push(ch),
            FormField::Amount => {
                if ch.is_ascii_digit() || matches!(ch, '.' | ',' | '+' | '-') {
                    self.amount.push(ch);
                }
            }
        }
    }

    fn pop(&mut self) {
        match self.focus {
            FormField::Description => self.description.pop(),
            FormField::Amount => self.amount.pop(),
        };
    }

    fn clear(&mut self) {
        *self = Self::default();
    }
}

#[derive(Debug)]
pub struct AppState {
    pub store: ExpenseStore,
    pub form: ExpenseForm,
    /// Highlighted row in the expense list.
    pub selected: usize,
    pub timezone: Tz,
    pub recent_limit: usize,
    pub tips_limit: usize,
}

impl AppState {
    pub fn dashboard(&self) -> Dashboard<'_> {
        Dashboard::new(&self.store)
            .recent_limit(self.recent_limit)
            .tips_limit(self.tips_limit)
    }

    /// Submits the form to the store.
    ///
    /// Success clears the form; a rejected submission keeps what was typed
    /// and reports the reason inline.
    fn submit(&mut self) {
        let Self {
            store,
            form,
            selected,
            ..
        } = self;

        match store.add(&form.description, &form.amount) {
            Ok(expense) => {
                tracing::info!(id = %expense.id, amount = %expense.amount, "expense added");
                form.clear();
                *selected = 0;
            }
            Err(err) => {
                tracing::debug!(error = %err, "expense rejected");
                form.message = Some(err.to_string());
            }
        }
    }

    fn select_next(&mut self) {
        if self.store.is_empty() {
            return;
        }
        self.selected = (self.selected + 1).min(self.store.len() - 1);
    }

    fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }
}

pub struct App {
    pub state: AppState,
    should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Result<Self> {
        let state = AppState {
            store: ExpenseStore::new(),
            form: ExpenseForm::default(),
            selected: 0,
            timezone: config.tz()?,
            recent_limit: config.recent_limit,
            tips_limit: config.tips_limit,
        };

        Ok(Self {
            state,
            should_quit: false,
        })
    }

    pub fn run(&mut self) -> Result<()> {
        let mut terminal = ui::setup_terminal()?;
        let result = self.event_loop(&mut terminal);
        ui::restore_terminal(&mut terminal)?;
        result
    }

    fn event_loop(&mut self, terminal: &mut ui::Terminal) -> Result<()> {
        let tick_rate = Duration::from_millis(200);

        while !self.should_quit {
            terminal
                .draw(|frame| ui::render(frame, &self.state))
                .map_err(|err| AppError::Terminal(err.to_string()))?;

            if event::poll(tick_rate)? {
                match event::read()? {
                    Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key(key),
                    _ => {}
                }
            }
        }

        tracing::info!(expenses = self.state.store.len(), "shutting down");
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent) {
        match map_key(key) {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::NextField | AppAction::PrevField => {
                self.state.form.toggle_focus();
            }
            AppAction::Submit => {
                self.state.submit();
            }
            AppAction::Backspace => {
                self.state.form.pop();
            }
            AppAction::Up => {
                self.state.select_prev();
            }
            AppAction::Down => {
                self.state.select_next();
            }
            AppAction::Input(ch) => {
                self.state.form.push(ch);
            }
            AppAction::None => {}
        }
    }
}
