//! Main UI rendering and coordination

use anyhow::{Context, Result};
use crossterm::{
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame, Terminal,
};
use std::time::Duration;

use super::app::App;
use super::core::NodeId;
use super::events::handle_event;
use super::layout::LayoutManager;
use crate::constants::{FOCUS_MARKER, HELP_LINE, NO_FOCUS_MARKER};

/// One line of the widget list
#[derive(Debug, Clone, PartialEq)]
pub struct WidgetRow {
    pub id: NodeId,
    pub depth: usize,
    pub text: String,
    pub focused: bool,
    pub hidden: bool,
    pub enabled: bool,
}

/// Rows for every node below the root, in pre-order.
///
/// Hidden subtrees are skipped unless placeholders are enabled, in which
/// case the hidden node itself is listed but not its children.
pub fn widget_rows(app: &App) -> Vec<WidgetRow> {
    let focused = app.focused();
    let mut rows = Vec::new();

    for id in app.tree.iter_dfs(app.root) {
        if id == app.root {
            continue;
        }
        let Some(widget) = app.tree.get(id) else {
            continue;
        };
        let parent_shown = app.tree.parent(id).is_some_and(|parent| app.is_reachable(parent));
        if !parent_shown {
            continue;
        }
        let hidden = widget.is_hidden();
        if hidden && !app.config.show_hidden_placeholders {
            continue;
        }

        let referral = widget.base().referral();
        let text = if hidden {
            format!("({referral} hidden)")
        } else if referral.is_empty() {
            widget.summary()
        } else {
            format!("{referral}: {}", widget.summary())
        };

        rows.push(WidgetRow {
            id,
            depth: app.tree.depth_below(app.root, id).unwrap_or_default(),
            text,
            focused: focused == Some(id),
            hidden,
            enabled: widget.as_control().map_or(true, |control| control.is_enabled()),
        });
    }

    rows
}

/// Plain text of the widget list as it would be drawn
pub fn render_lines(app: &App) -> Vec<String> {
    widget_rows(app)
        .into_iter()
        .map(|row| {
            let marker = if row.focused { FOCUS_MARKER } else { NO_FOCUS_MARKER };
            format!("{marker}{}{}", " ".repeat(LayoutManager::indent(row.depth)), row.text)
        })
        .collect()
}

/// Run the main TUI application until the user quits
pub fn run_app(app: &mut App) -> Result<()> {
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to enter alternate screen")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_ui(&mut terminal, app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

/// Main UI loop
fn run_ui<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<()> {
    let tick = Duration::from_millis(app.config.tick_rate_ms);

    while !app.should_quit {
        terminal.draw(|f| draw(f, app))?;

        if event::poll(tick)? {
            handle_event(event::read()?, app);
        }
    }

    Ok(())
}

/// Paint the app into a frame
pub fn draw(f: &mut Frame, app: &App) {
    let chunks = LayoutManager::main_layout(f.area());
    let body = LayoutManager::body_layout(chunks[0], app.show_help);

    draw_widgets(f, body[0], app);
    if let Some(help_area) = body.get(1) {
        draw_help(f, *help_area);
    }
    draw_status(f, chunks[1], app);
}

fn draw_widgets(f: &mut Frame, area: Rect, app: &App) {
    let title = app
        .tree
        .get(app.root)
        .map(|root| root.base().referral().to_string())
        .filter(|referral| !referral.is_empty())
        .unwrap_or_else(|| "slamui".to_string());

    let items: Vec<ListItem> = widget_rows(app)
        .into_iter()
        .map(|row| {
            let marker = if row.focused { FOCUS_MARKER } else { NO_FOCUS_MARKER };
            let style = if row.hidden || !row.enabled {
                Style::default().fg(Color::DarkGray)
            } else if row.focused {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(vec![
                Span::styled(marker, Style::default().fg(Color::Cyan)),
                Span::raw(" ".repeat(LayoutManager::indent(row.depth))),
                Span::styled(row.text, style),
            ]))
        })
        .collect();

    let list = List::new(items).block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(list, area);
}

fn draw_help(f: &mut Frame, area: Rect) {
    let help = Paragraph::new(HELP_LINE)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title("Keys"));
    f.render_widget(help, area);
}

fn draw_status(f: &mut Frame, area: Rect, app: &App) {
    let text = app.logger.latest().unwrap_or_else(|| "? toggles help".to_string());
    let status = Paragraph::new(text).style(Style::default().fg(Color::Gray));
    f.render_widget(status, area);
}
