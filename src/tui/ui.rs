use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Position},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, List, ListItem, ListState, Paragraph},
};

use crate::tui::app::App;

const HELP: &str = " Enter search · ↑/↓ select · Ctrl-O open · Esc quit";

pub fn draw(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Query input
            Constraint::Min(1),    // Results container
            Constraint::Length(1), // Footer help
        ])
        .split(f.area());

    // --- QUERY ---
    let query = app.input.value();
    let input = Paragraph::new(query).block(
        Block::bordered()
            .border_type(BorderType::Rounded)
            .title(" query ")
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(input, chunks[0]);

    let cursor_x = u16::try_from(query.chars().count()).unwrap_or(u16::MAX);
    f.set_cursor_position(Position::new(
        chunks[0]
            .x
            .saturating_add(1)
            .saturating_add(cursor_x)
            .min(chunks[0].right().saturating_sub(2)),
        chunks[0].y + 1,
    ));

    // --- RESULTS ---
    let items: Vec<ListItem> = app
        .rows()
        .into_iter()
        .map(|row| {
            let mut spans = vec![Span::styled(row.text, Style::default().white())];
            if let Some(link) = row.link {
                spans.push(Span::raw("  "));
                spans.push(Span::styled(
                    link,
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::UNDERLINED),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .title(" results ")
                .border_style(Style::default().fg(Color::DarkGray)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray).bold())
        .highlight_symbol("┃ ");

    let mut state = ListState::default().with_selected(app.selection());
    f.render_stateful_widget(list, chunks[1], &mut state);

    // --- FOOTER ---
    f.render_widget(Paragraph::new(HELP).dim(), chunks[2]);
}
