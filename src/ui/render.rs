use crate::api::{format_amount, ConversionEntry};
use crate::ui::app::{App, FormField};
use crate::ui::layout::{centered_rect_by_size, form_cells, screen_regions};
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, FOCUS_BORDER, GLOBAL_BORDER, MUTED_TEXT, STATUS_ERROR, STATUS_OK,
    TEXT,
};
use ratatui::layout::{Alignment, Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, Wrap,
};
use ratatui::Frame;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];
const PICKER_WIDTH: u16 = 44;
const PICKER_MAX_ROWS: u16 = 12;
const ERROR_CARD_WIDTH: u16 = 60;

pub fn draw(frame: &mut Frame<'_>, app: &App) {
    let regions = screen_regions(frame.area());

    draw_header(frame, regions.header);
    draw_form(frame, app, regions.form);
    draw_summary(frame, app, regions.summary);
    draw_history(frame, app, regions.history);
    draw_footer(frame, regions.footer);

    if app.is_picker_open() {
        draw_picker(frame, app);
    }
    if let Some(error) = &app.state().error {
        draw_error_card(frame, &error.message);
    }
}

fn bordered(title: &str, focused: bool) -> Block<'_> {
    let border = if focused { FOCUS_BORDER } else { GLOBAL_BORDER };
    Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border))
        .title(Span::styled(title, Style::default().fg(MUTED_TEXT)))
}

fn draw_header(frame: &mut Frame<'_>, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "Currency Converter",
        Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(bordered("", false));
    frame.render_widget(title, area);
}

fn draw_form(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let [amount_area, origin_area, dest_area, button_area] = form_cells(area);
    let focus = app.focus();

    let amount_text = if state.amount_text.is_empty() {
        Span::styled("insert amount", Style::default().fg(MUTED_TEXT))
    } else if state.amount.is_none() {
        Span::styled(state.amount_text.as_str(), Style::default().fg(STATUS_ERROR))
    } else {
        Span::styled(state.amount_text.as_str(), Style::default().fg(TEXT))
    };
    frame.render_widget(
        Paragraph::new(Line::from(amount_text))
            .block(bordered("Amount", focus == FormField::Amount)),
        amount_area,
    );
    if focus == FormField::Amount && !app.is_picker_open() && amount_area.width > 2 {
        let offset = state.amount_text.chars().count() as u16;
        let x = amount_area.x + 1 + offset.min(amount_area.width.saturating_sub(3));
        frame.set_cursor_position((x, amount_area.y + 1));
    }

    draw_selector(
        frame,
        origin_area,
        "From",
        &state.origin_currency,
        focus == FormField::Origin,
    );
    draw_selector(
        frame,
        dest_area,
        "To",
        &state.dest_currency,
        focus == FormField::Destination,
    );

    let (label, style) = if state.is_submitting {
        let spinner = SPINNER[(app.spinner_tick() as usize) % SPINNER.len()];
        (format!("{} Converting", spinner), Style::default().fg(MUTED_TEXT))
    } else if state.can_submit() {
        ("Convert".to_string(), Style::default().fg(STATUS_OK).add_modifier(Modifier::BOLD))
    } else {
        ("Convert".to_string(), Style::default().fg(MUTED_TEXT).add_modifier(Modifier::DIM))
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(label, style)))
            .alignment(Alignment::Center)
            .block(bordered("", focus == FormField::Convert)),
        button_area,
    );
}

fn draw_selector(frame: &mut Frame<'_>, area: Rect, title: &str, code: &str, focused: bool) {
    let content = if code.is_empty() {
        Span::styled("type/select currency", Style::default().fg(MUTED_TEXT))
    } else {
        Span::styled(code, Style::default().fg(TEXT))
    };
    frame.render_widget(
        Paragraph::new(Line::from(content)).block(bordered(title, focused)),
        area,
    );
}

fn draw_summary(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();
    let mut lines = Vec::new();

    let result = match state.conversion_result {
        Some(value) => Span::styled(value.to_string(), Style::default().fg(STATUS_OK)),
        None => Span::styled("-", Style::default().fg(MUTED_TEXT)),
    };
    lines.push(Line::from(vec![Span::raw("Conversion result: "), result]));

    let popular = state.most_popular_destination.as_deref().unwrap_or("");
    lines.push(Line::from(vec![
        Span::raw("Most popular destination currency: "),
        Span::styled(popular, Style::default().fg(ACCENT)),
    ]));

    if let Some(notice) = app.notice() {
        lines.push(Line::from(Span::styled(notice, Style::default().fg(MUTED_TEXT))));
    }

    frame.render_widget(Paragraph::new(lines).block(bordered("", false)), area);
}

fn draw_history(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let state = app.state();

    if state.is_loading_history || state.conversion_history.is_empty() {
        let text = if state.is_loading_history {
            let spinner = SPINNER[(app.spinner_tick() as usize) % SPINNER.len()];
            format!("{} Loading conversions...", spinner)
        } else {
            "No conversions yet.".to_string()
        };
        frame.render_widget(
            Paragraph::new(Span::styled(text, Style::default().fg(MUTED_TEXT)))
                .block(bordered("History", false)),
            area,
        );
        return;
    }

    let header = Row::new(["Amount", "From", "To", "Result", "Timestamp"])
        .style(Style::default().fg(ACCENT).add_modifier(Modifier::BOLD));

    // Newest first.
    let rows: Vec<Row> = state
        .conversion_history
        .iter()
        .rev()
        .map(history_row)
        .collect();

    let widths = [
        Constraint::Percentage(18),
        Constraint::Percentage(12),
        Constraint::Percentage(12),
        Constraint::Percentage(23),
        Constraint::Percentage(35),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(bordered("History", false));
    frame.render_widget(table, area);
}

fn history_row(entry: &ConversionEntry) -> Row<'static> {
    Row::new(vec![
        Cell::from(format_amount(entry.original_amount)),
        Cell::from(entry.from.clone()),
        Cell::from(entry.to.clone()),
        Cell::from(format_amount(entry.dest_amount)),
        Cell::from(entry.created_at_local()),
    ])
    .style(Style::default().fg(TEXT))
}

fn draw_footer(frame: &mut Frame<'_>, area: Rect) {
    let hints = " Tab: Next field │ Enter: Select/Convert │ Esc: Dismiss │ Ctrl+R: Reload │ Ctrl+Q: Quit";
    let text_style = Style::default().fg(TEXT).add_modifier(Modifier::DIM);
    frame.render_widget(
        Paragraph::new(Span::styled(hints, text_style)).block(bordered("", false)),
        area,
    );
}

fn draw_picker(frame: &mut Frame<'_>, app: &App) {
    let picker = app.picker();
    let Some(target) = picker.target() else {
        return;
    };

    let filtered = picker.filtered();
    let visible_rows = (filtered.len() as u16).clamp(1, PICKER_MAX_ROWS);
    // Query line plus borders.
    let height = visible_rows + 4;
    let area = centered_rect_by_size(frame.area(), PICKER_WIDTH, height);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(FOCUS_BORDER))
        .title(Span::styled(target.title(), Style::default().fg(ACCENT)));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let query_area = Rect { height: 1, ..inner };
    let list_area = Rect {
        y: inner.y + 2,
        height: inner.height.saturating_sub(2),
        ..inner
    };

    let query = Line::from(vec![
        Span::styled("Search: ", Style::default().fg(MUTED_TEXT)),
        Span::styled(picker.query(), Style::default().fg(TEXT)),
    ]);
    frame.render_widget(Paragraph::new(query), query_area);

    if filtered.is_empty() {
        frame.render_widget(
            Paragraph::new(Span::styled("No options", Style::default().fg(MUTED_TEXT))),
            list_area,
        );
        return;
    }

    let items: Vec<ListItem> = filtered
        .iter()
        .map(|option| {
            ListItem::new(Line::from(vec![
                Span::styled(format!("{:<5}", option.value), Style::default().fg(TEXT)),
                Span::styled(option.label.clone(), Style::default().fg(MUTED_TEXT)),
            ]))
        })
        .collect();
    let list = List::new(items).highlight_style(Style::default().bg(ACTIVE_HIGHLIGHT));
    let mut list_state = ListState::default().with_selected(picker.selected_index());
    frame.render_stateful_widget(list, list_area, &mut list_state);
}

fn draw_error_card(frame: &mut Frame<'_>, message: &str) {
    let body = frame.area();
    let width = ERROR_CARD_WIDTH.min(body.width);
    let inner_width = width.saturating_sub(2).max(1) as usize;
    let text_rows = (message.chars().count() / inner_width + 1) as u16;
    let area = centered_rect_by_size(body, width, text_rows + 4);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(Span::styled(message.to_string(), Style::default().fg(TEXT))),
        Line::from(""),
        Line::from(Span::styled("Esc: Dismiss", Style::default().fg(MUTED_TEXT))),
    ];
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(STATUS_ERROR))
        .title(Span::styled("Error", Style::default().fg(STATUS_ERROR)));
    frame.render_widget(
        Paragraph::new(lines).wrap(Wrap { trim: true }).block(block),
        area,
    );
}
