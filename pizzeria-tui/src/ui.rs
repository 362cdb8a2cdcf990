//! Terminal rendering
//!
//! Pure view over [`App`] state: nothing here mutates the engine.

use pizzeria_core::{Category, NavigationState};
use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph};
use tui_input::Input;

use crate::app::{AdminFocus, App};

pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    render_body(frame, app, chunks[1]);
    render_status(frame, app, chunks[2]);

    if app.engine.is_admin_open() {
        render_admin_panel(frame, app);
    }
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let title = match app.engine.current_view() {
        NavigationState::Browsing => "PIZZERIA · menu".to_string(),
        NavigationState::Viewing(category) => format!("PIZZERIA · {category}"),
    };
    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, area);
}

fn render_body(frame: &mut Frame, app: &App, area: Rect) {
    match app.engine.current_view() {
        NavigationState::Browsing => render_categories(frame, app, area),
        NavigationState::Viewing(category) => render_items(frame, app, category, area),
    }
}

fn render_categories(frame: &mut Frame, app: &App, area: Rect) {
    let rows: Vec<ListItem> = app
        .engine
        .categories()
        .iter()
        .map(|category| {
            let count = app.engine.items_of(*category).len();
            ListItem::new(format!("{category}  ({count} items)"))
        })
        .collect();

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title("categories"))
        .highlight_style(Style::default().bg(Color::Red).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_items(frame: &mut Frame, app: &App, category: Category, area: Rect) {
    let rows: Vec<ListItem> = app
        .engine
        .items_of(category)
        .iter()
        .map(|item| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    item.name.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::raw("  "),
                Span::styled(
                    item.description.clone(),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();

    let list = List::new(rows)
        .block(Block::default().borders(Borders::ALL).title(category.as_str()))
        .highlight_style(Style::default().bg(Color::Red).fg(Color::White))
        .highlight_symbol("> ");

    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_status(frame: &mut Frame, app: &App, area: Rect) {
    let hint = if app.engine.is_admin_open() {
        "Tab: next field · Enter: add/delete · Esc: close admin"
    } else {
        "Ctrl+Shift+Z: admin panel"
    };
    let status = Paragraph::new(Line::from(vec![
        Span::raw(app.status.clone()),
        Span::styled(format!("   {hint}"), Style::default().fg(Color::DarkGray)),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, area);
}

fn render_admin_panel(frame: &mut Frame, app: &App) {
    let area = centered_rect(70, 80, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Red))
        .title("ADMIN PANEL (no auth, demo only)");
    frame.render_widget(block, area);

    let inner = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // category selector
            Constraint::Length(3), // name
            Constraint::Length(3), // description
            Constraint::Length(3), // image
            Constraint::Min(3),    // deletion list
        ])
        .split(area);

    let category = app.engine.categories()[app.form.category_index];
    let selector = Paragraph::new(format!("< {category} >"))
        .style(focus_style(app, AdminFocus::Category))
        .block(Block::default().borders(Borders::ALL).title("category"));
    frame.render_widget(selector, inner[0]);

    render_input(frame, app, &app.form.name, "name", AdminFocus::Name, inner[1]);
    render_input(
        frame,
        app,
        &app.form.description,
        "description",
        AdminFocus::Description,
        inner[2],
    );
    render_input(frame, app, &app.form.image, "image url", AdminFocus::Image, inner[3]);

    let rows: Vec<ListItem> = app
        .engine
        .items_of(category)
        .iter()
        .map(|item| ListItem::new(format!("{}  {}", item.id, item.name)))
        .collect();
    let list = List::new(rows)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("items (d deletes)")
                .style(focus_style(app, AdminFocus::Items)),
        )
        .highlight_style(Style::default().bg(Color::Red).fg(Color::White))
        .highlight_symbol("> ");
    let mut state = ListState::default().with_selected(Some(app.form.item_index));
    frame.render_stateful_widget(list, inner[4], &mut state);
}

fn render_input(
    frame: &mut Frame,
    app: &App,
    input: &Input,
    title: &str,
    focus: AdminFocus,
    area: Rect,
) {
    let widget = Paragraph::new(input.value())
        .style(focus_style(app, focus))
        .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(widget, area);

    if app.form.focus == focus {
        // Cursor sits after the typed text, inside the border
        let x = area.x + 1 + input.visual_cursor() as u16;
        frame.set_cursor_position((x.min(area.x + area.width.saturating_sub(2)), area.y + 1));
    }
}

fn focus_style(app: &App, focus: AdminFocus) -> Style {
    if app.form.focus == focus {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default()
    }
}

/// Centered sub-rectangle, sized as a percentage of `area`
fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(vertical[1])[1]
}
