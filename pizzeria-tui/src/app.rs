//! Application state and key handling
//!
//! Thin host over [`CatalogEngine`]: every key press becomes at most one
//! intent, dispatched in delivery order. The reserved admin chord is
//! Ctrl+Shift+Z, checked before any other handling so it works from any
//! view.

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use pizzeria_core::{AdminGateConfig, CatalogEngine, CatalogIntent, NavigationState};
use ratatui::DefaultTerminal;
use tui_input::Input;
use tui_input::backend::crossterm::EventHandler;

use crate::config::Config;
use crate::ui;

/// Focused element of the admin panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminFocus {
    #[default]
    Category,
    Name,
    Description,
    Image,
    Items,
}

impl AdminFocus {
    fn next(self) -> Self {
        match self {
            AdminFocus::Category => AdminFocus::Name,
            AdminFocus::Name => AdminFocus::Description,
            AdminFocus::Description => AdminFocus::Image,
            AdminFocus::Image => AdminFocus::Items,
            AdminFocus::Items => AdminFocus::Category,
        }
    }

    fn prev(self) -> Self {
        match self {
            AdminFocus::Category => AdminFocus::Items,
            AdminFocus::Name => AdminFocus::Category,
            AdminFocus::Description => AdminFocus::Name,
            AdminFocus::Image => AdminFocus::Description,
            AdminFocus::Items => AdminFocus::Image,
        }
    }
}

/// Admin panel form state: create inputs plus the deletion list cursor
#[derive(Debug, Default)]
pub struct AdminForm {
    pub focus: AdminFocus,
    pub category_index: usize,
    pub name: Input,
    pub description: Input,
    pub image: Input,
    pub item_index: usize,
}

/// Terminal client state
pub struct App {
    pub engine: CatalogEngine,
    /// Cursor in the currently displayed list (categories or items)
    pub selected: usize,
    /// Last intent outcome, shown in the status line
    pub status: String,
    pub form: AdminForm,
    should_quit: bool,
}

impl App {
    pub fn new(config: &Config) -> Result<Self> {
        let engine = CatalogEngine::with_default_menu(AdminGateConfig {
            honor_key_repeat: config.honor_key_repeat,
        })?;
        Ok(Self {
            engine,
            selected: 0,
            status: "Enter opens a category, Esc goes back, q quits".to_string(),
            form: AdminForm::default(),
            should_quit: false,
        })
    }

    /// Event loop: draw, block on the next terminal event, handle it
    pub fn run(mut self, terminal: &mut DefaultTerminal) -> Result<()> {
        while !self.should_quit {
            terminal.draw(|frame| ui::render(frame, &self))?;
            if let Event::Key(key) = event::read()? {
                self.on_key(key);
            }
        }
        Ok(())
    }

    pub fn on_key(&mut self, key: KeyEvent) {
        if key.kind == KeyEventKind::Release {
            return;
        }
        if Self::is_admin_chord(&key) {
            let outcome = self.engine.dispatch(CatalogIntent::ToggleAdmin {
                auto_repeat: key.kind == KeyEventKind::Repeat,
            });
            self.status = outcome.message;
            return;
        }
        if self.engine.is_admin_open() {
            self.on_admin_key(key);
        } else {
            self.on_nav_key(key);
        }
    }

    /// The reserved trigger: two modifiers plus one letter, so it cannot
    /// fire from ordinary typing
    fn is_admin_chord(key: &KeyEvent) -> bool {
        key.modifiers
            .contains(KeyModifiers::CONTROL | KeyModifiers::SHIFT)
            && matches!(key.code, KeyCode::Char('z') | KeyCode::Char('Z'))
    }

    fn on_nav_key(&mut self, key: KeyEvent) {
        match self.engine.current_view() {
            NavigationState::Browsing => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let last = self.engine.categories().len().saturating_sub(1);
                    self.selected = (self.selected + 1).min(last);
                }
                KeyCode::Enter => {
                    let category = self.engine.categories()[self.selected];
                    let outcome = self.engine.dispatch(CatalogIntent::SelectCategory {
                        category: category.to_string(),
                    });
                    self.status = outcome.message;
                    self.selected = 0;
                }
                _ => {}
            },
            NavigationState::Viewing(category) => match key.code {
                KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => {
                    let outcome = self.engine.dispatch(CatalogIntent::GoBack);
                    self.status = outcome.message;
                    // Put the cursor back on the category we just left
                    self.selected = self
                        .engine
                        .categories()
                        .iter()
                        .position(|c| *c == category)
                        .unwrap_or(0);
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.selected = self.selected.saturating_sub(1);
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    let last = self.engine.items_of(category).len().saturating_sub(1);
                    self.selected = (self.selected + 1).min(last);
                }
                _ => {}
            },
        }
    }

    fn on_admin_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                let outcome = self.engine.dispatch(CatalogIntent::CloseAdmin);
                self.status = outcome.message;
            }
            KeyCode::Tab => self.form.focus = self.form.focus.next(),
            KeyCode::BackTab => self.form.focus = self.form.focus.prev(),
            KeyCode::Enter => match self.form.focus {
                AdminFocus::Items => self.delete_selected(),
                _ => self.submit_add(),
            },
            _ => match self.form.focus {
                AdminFocus::Category => match key.code {
                    KeyCode::Left | KeyCode::Up => {
                        let len = self.engine.categories().len();
                        self.form.category_index = (self.form.category_index + len - 1) % len;
                        self.form.item_index = 0;
                    }
                    KeyCode::Right | KeyCode::Down => {
                        let len = self.engine.categories().len();
                        self.form.category_index = (self.form.category_index + 1) % len;
                        self.form.item_index = 0;
                    }
                    _ => {}
                },
                AdminFocus::Items => match key.code {
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.form.item_index = self.form.item_index.saturating_sub(1);
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let category = self.engine.categories()[self.form.category_index];
                        let last = self.engine.items_of(category).len().saturating_sub(1);
                        self.form.item_index = (self.form.item_index + 1).min(last);
                    }
                    KeyCode::Char('d') | KeyCode::Delete => self.delete_selected(),
                    _ => {}
                },
                AdminFocus::Name => {
                    self.form.name.handle_event(&Event::Key(key));
                }
                AdminFocus::Description => {
                    self.form.description.handle_event(&Event::Key(key));
                }
                AdminFocus::Image => {
                    self.form.image.handle_event(&Event::Key(key));
                }
            },
        }
    }

    fn submit_add(&mut self) {
        let category = self.engine.categories()[self.form.category_index];
        let outcome = self.engine.dispatch(CatalogIntent::AddItem {
            category: category.to_string(),
            name: self.form.name.value().to_string(),
            description: self.form.description.value().to_string(),
            image: self.form.image.value().to_string(),
        });
        if outcome.success {
            self.form.name.reset();
            self.form.description.reset();
            self.form.image.reset();
        }
        self.status = outcome.message;
    }

    fn delete_selected(&mut self) {
        let category = self.engine.categories()[self.form.category_index];
        let Some(item) = self.engine.items_of(category).get(self.form.item_index) else {
            self.status = format!("nothing to delete in {category}");
            return;
        };
        let id = item.id;
        let outcome = self.engine.dispatch(CatalogIntent::RemoveItem {
            category: category.to_string(),
            id,
        });
        let last = self.engine.items_of(category).len().saturating_sub(1);
        self.form.item_index = self.form.item_index.min(last);
        self.status = outcome.message;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventState;
    use pizzeria_core::Category;

    fn app() -> App {
        App::new(&Config::default()).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chord() -> KeyEvent {
        KeyEvent::new(
            KeyCode::Char('Z'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
        )
    }

    fn chord_repeat() -> KeyEvent {
        KeyEvent::new_with_kind_and_state(
            KeyCode::Char('Z'),
            KeyModifiers::CONTROL | KeyModifiers::SHIFT,
            KeyEventKind::Repeat,
            KeyEventState::NONE,
        )
    }

    fn type_text(app: &mut App, text: &str) {
        for c in text.chars() {
            app.on_key(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn test_chord_toggles_admin_from_any_view() {
        let mut app = app();
        app.on_key(chord());
        assert!(app.engine.is_admin_open());
        app.on_key(chord());
        assert!(!app.engine.is_admin_open());

        app.on_key(press(KeyCode::Enter)); // enter first category
        app.on_key(chord());
        assert!(app.engine.is_admin_open());
    }

    #[test]
    fn test_held_chord_repeat_does_not_double_toggle() {
        let mut app = app();
        app.on_key(chord());
        app.on_key(chord_repeat());
        app.on_key(chord_repeat());
        assert!(app.engine.is_admin_open());
    }

    #[test]
    fn test_held_chord_repeat_honored_when_configured() {
        let mut app = App::new(&Config {
            honor_key_repeat: true,
            ..Config::default()
        })
        .unwrap();
        app.on_key(chord());
        app.on_key(chord_repeat());
        assert!(!app.engine.is_admin_open());
    }

    #[test]
    fn test_navigation_enter_and_back() {
        let mut app = app();
        app.on_key(press(KeyCode::Down));
        app.on_key(press(KeyCode::Enter));
        assert_eq!(
            app.engine.current_view(),
            NavigationState::Viewing(Category::Vegan)
        );
        app.on_key(press(KeyCode::Esc));
        assert_eq!(app.engine.current_view(), NavigationState::Browsing);
        // Cursor restored to the category we left
        assert_eq!(app.selected, 1);
    }

    #[test]
    fn test_quit_from_browsing() {
        let mut app = app();
        app.on_key(press(KeyCode::Char('q')));
        assert!(app.should_quit());
    }

    #[test]
    fn test_admin_form_adds_item() {
        let mut app = app();
        app.on_key(chord());
        app.on_key(press(KeyCode::Tab)); // Category -> Name
        type_text(&mut app, "Diavola");
        app.on_key(press(KeyCode::Tab)); // Name -> Description
        type_text(&mut app, "spicy salami");
        app.on_key(press(KeyCode::Enter));

        let items = app.engine.items("classic").unwrap();
        assert_eq!(items.last().unwrap().name, "Diavola");
        // Inputs cleared for the next entry
        assert!(app.form.name.value().is_empty());
        assert!(app.form.description.value().is_empty());
    }

    #[test]
    fn test_admin_form_rejection_keeps_input() {
        let mut app = app();
        let before = app.engine.items("classic").unwrap().len();
        app.on_key(chord());
        app.on_key(press(KeyCode::Tab));
        type_text(&mut app, "Diavola");
        // Description left empty: rejected, input preserved for correction
        app.on_key(press(KeyCode::Enter));

        assert_eq!(app.engine.items("classic").unwrap().len(), before);
        assert_eq!(app.form.name.value(), "Diavola");
        assert!(app.status.contains("description"));
    }

    #[test]
    fn test_admin_delete_selected_item() {
        let mut app = app();
        let first_id = app.engine.items("classic").unwrap()[0].id;
        let before = app.engine.items("classic").unwrap().len();

        app.on_key(chord());
        app.on_key(press(KeyCode::BackTab)); // Category -> Items
        app.on_key(press(KeyCode::Char('d')));

        let items = app.engine.items("classic").unwrap();
        assert_eq!(items.len(), before - 1);
        assert!(items.iter().all(|i| i.id != first_id));
    }

    #[test]
    fn test_plain_z_does_not_toggle_admin() {
        let mut app = app();
        app.on_key(press(KeyCode::Char('z')));
        assert!(!app.engine.is_admin_open());
        // A single modifier is not enough either
        app.on_key(KeyEvent::new(KeyCode::Char('z'), KeyModifiers::CONTROL));
        assert!(!app.engine.is_admin_open());
    }
}
