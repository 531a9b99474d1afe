use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Wrap};

use super::layout::AppLayout;
use crate::models::Manual;
use crate::render::ResultRecord;

const HIGHLIGHT_STYLE: Style =
    Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD);

/// Render the entire UI
#[allow(clippy::too_many_arguments)]
pub fn render_ui(
    frame: &mut Frame,
    records: &[ResultRecord],
    selected_idx: usize,
    input: &str,
    part_filter: Option<Manual>,
    placeholder: Option<&str>,
    total_items: usize,
    notification: Option<&str>,
) {
    let layout = AppLayout::new(frame.area());

    render_search_bar(frame, layout.search_area, input, part_filter);
    render_results_list(frame, layout.results_area, records, selected_idx, placeholder);
    render_preview(frame, layout.preview_area, records.get(selected_idx));
    render_status_bar(frame, layout.status_area, records.len(), total_items, notification);
}

fn render_search_bar(frame: &mut Frame, area: Rect, input: &str, part_filter: Option<Manual>) {
    let filter_label = part_filter.map(|m| m.label()).unwrap_or("all");

    let line = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(Color::Rgb(113, 113, 122))),
        Span::raw(input.to_string()),
        Span::styled("▌", Style::default().fg(Color::Rgb(16, 185, 129))),
    ]);

    let paragraph = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(format!(" Keyword | filter: {} (Tab) ", filter_label)),
    );

    frame.render_widget(paragraph, area);
}

fn render_results_list(
    frame: &mut Frame,
    area: Rect,
    records: &[ResultRecord],
    selected_idx: usize,
    placeholder: Option<&str>,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
        .title(" Results ");

    // Placeholder and no-results messages replace the list entirely
    if let Some(message) = placeholder {
        let paragraph = Paragraph::new(message)
            .style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .wrap(Wrap { trim: true })
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = records
        .iter()
        .enumerate()
        .map(|(idx, record)| {
            let header_line = Line::from(vec![
                Span::styled(
                    record.header.clone(),
                    Style::default().add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  p.{}", record.page),
                    Style::default().fg(Color::Rgb(113, 113, 122)),
                ),
            ]);

            let snippet_line = Line::from(
                record
                    .spans
                    .iter()
                    .map(|span| {
                        if span.highlighted {
                            Span::styled(span.text.clone(), HIGHLIGHT_STYLE)
                        } else {
                            Span::raw(span.text.clone())
                        }
                    })
                    .collect::<Vec<_>>(),
            );

            let style = if idx == selected_idx {
                Style::default()
                    .fg(Color::Rgb(250, 250, 250))
                    .bg(Color::Rgb(16, 185, 129))
            } else {
                Style::default()
            };

            ListItem::new(Text::from(vec![header_line, snippet_line])).style(style)
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

fn render_preview(frame: &mut Frame, area: Rect, record: Option<&ResultRecord>) {
    let content = if let Some(record) = record {
        let mut lines = vec![
            Line::from(vec![
                Span::styled("Entry: ", Style::default().fg(Color::Rgb(113, 113, 122))),
                Span::raw(record.header.clone()),
            ]),
            Line::from(vec![
                Span::styled("Page: ", Style::default().fg(Color::Rgb(113, 113, 122))),
                Span::raw(record.page.to_string()),
            ]),
            Line::from(""),
        ];
        for line in record.item.text.lines() {
            lines.push(Line::from(line.to_string()));
        }
        Text::from(lines)
    } else {
        Text::from("Select a result to preview it")
    };

    let paragraph = Paragraph::new(content).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Rgb(113, 113, 122)))
            .title(" Preview "),
    );

    frame.render_widget(paragraph, area);
}

fn render_status_bar(
    frame: &mut Frame,
    area: Rect,
    shown: usize,
    total_items: usize,
    notification: Option<&str>,
) {
    let (text, style) = match notification {
        Some(message) => (
            message.to_string(),
            Style::default().fg(Color::Rgb(250, 250, 250)).bg(Color::Rgb(185, 28, 28)),
        ),
        None => (
            format!(
                " {}/{} entries | F1/F2/F3 open manual | Enter open | ^Y copy URI | ^R reload | ^C quit",
                shown, total_items
            ),
            Style::default().fg(Color::Rgb(113, 113, 122)),
        ),
    };

    frame.render_widget(Paragraph::new(text).style(style), area);
}
