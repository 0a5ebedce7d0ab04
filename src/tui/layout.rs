use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, Paragraph, Wrap},
    Frame,
};

use crate::config::ColorConfig;
use crate::domain::REACTION_SYMBOLS;
use crate::tui::app::{InputMode, TuiApp, View};

pub fn render(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // View tabs
            Constraint::Min(5),    // List + detail
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, colors, chunks[0]);

    let panes = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Min(30)])
        .split(chunks[1]);

    render_list_pane(frame, app, colors, panes[0]);
    render_detail_pane(frame, app, colors, panes[1]);
    render_status_bar(frame, app, colors, chunks[2]);
}

fn render_tabs(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig, area: Rect) {
    let mut spans = vec![Span::raw(" ")];
    for view in [View::Home, View::Articles] {
        let style = if view == app.view {
            Style::default()
                .fg(colors.border_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(colors.border_inactive)
        };
        spans.push(Span::styled(view.title(), style));
        spans.push(Span::raw("  "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_list_pane(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig, area: Rect) {
    let items: Vec<ListItem> = app
        .results
        .iter()
        .enumerate()
        .map(|(i, article)| {
            let total = article.reaction_total();
            let counts = if total > 0 {
                format!("  ({})", total)
            } else {
                String::new()
            };
            let content = format!(
                "{}  {}{}",
                article.created_at.format("%m/%d"),
                article.title,
                counts
            );

            let style = if i == app.selected {
                Style::default()
                    .bg(colors.selection_bg)
                    .fg(colors.selection_fg)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };

            ListItem::new(content).style(style)
        })
        .collect();

    let filter = app.filter();
    let mut title = format!(" {} ({}) · {} ", app.view.title(), app.results.len(), filter.sort);
    if !filter.search.is_empty() {
        title.push_str(&format!("· /{} ", filter.search));
    }

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_active));

    frame.render_widget(List::new(items).block(block), area);
}

fn render_detail_pane(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig, area: Rect) {
    let (title, content) = if let Some(article) = app.selected_article() {
        let mut lines = Vec::new();

        lines.push(Line::from(Span::styled(
            article.title.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::from(Span::styled(
            format!("Published: {}", article.created_at.format("%B %e, %Y")),
            Style::default().fg(colors.article_date),
        )));
        if article.has_image() {
            lines.push(Line::from(format!("Image: {}", article.image)));
        }
        lines.push(Line::from(""));

        for line in article.content.lines() {
            lines.push(Line::from(line.to_string()));
        }
        lines.push(Line::from(""));

        // One span per symbol so counts line up with the 1-0 react keys.
        let mut reaction_spans = Vec::new();
        for (i, symbol) in REACTION_SYMBOLS.iter().enumerate() {
            let key = (i + 1) % 10;
            reaction_spans.push(Span::styled(
                format!("{}:{} {}  ", key, symbol, article.count_for(symbol)),
                Style::default().fg(colors.reaction_counts),
            ));
        }
        lines.push(Line::from(reaction_spans));

        (format!(" id {} ", article.id), Text::from(lines))
    } else {
        (" Article ".to_string(), Text::from("No articles found"))
    };

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors.border_inactive));

    let paragraph = Paragraph::new(content)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((app.detail_scroll, 0));

    frame.render_widget(paragraph, area);
}

fn render_status_bar(frame: &mut Frame, app: &TuiApp, colors: &ColorConfig, area: Rect) {
    let status = match app.input_mode {
        InputMode::Search => format!("Search: {}▌  (Enter/Esc to finish)", app.filter().search),
        InputMode::ConfirmDelete(_) => app
            .status_message
            .clone()
            .unwrap_or_else(|| "Confirm delete? y/N".to_string()),
        InputMode::Browse => app.status_message.clone().unwrap_or_else(|| {
            "j/k:Navigate  Tab:View  /:Search  x:Clear  s:Sort  1-0:React  d:Delete  q:Quit"
                .to_string()
        }),
    };

    let paragraph =
        Paragraph::new(status).style(Style::default().fg(colors.status_fg).bg(colors.status_bg));

    frame.render_widget(paragraph, area);
}
