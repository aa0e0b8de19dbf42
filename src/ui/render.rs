use crate::ui::app::App;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACCENT, HEADER_SEPARATOR, HEADER_TEXT, POPUP_BORDER};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const FIELD_WIDTH: u16 = 40;

pub fn draw(frame: &mut Frame<'_>, app: &mut App) {
    let area = frame.area();
    let (header, body, footer) = layout_regions(area);

    let bounds = app.bounds_text();
    frame.render_widget(Header::new().widget(bounds.as_deref()), header);
    frame.render_widget(Clear, body);
    render_field(frame, body, app);
    frame.render_widget(
        Footer::new().widget(footer, app.is_picker_open()),
        footer,
    );

    if let Some(picker) = app.picker_mut() {
        picker.render(frame);
    }
}

/// The read-only range field, top-left of the body.
fn render_field(frame: &mut Frame<'_>, body: Rect, app: &App) {
    let area = Rect {
        x: body.x + 1,
        y: body.y + 1,
        width: FIELD_WIDTH.min(body.width.saturating_sub(2)),
        height: 3.min(body.height.saturating_sub(1)),
    };
    if area.width == 0 || area.height == 0 {
        return;
    }

    let text = app.field_text();
    let line = if text.is_empty() {
        Line::from(Span::styled(
            "No range selected",
            Style::default()
                .fg(HEADER_SEPARATOR)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Line::from(Span::styled(text, Style::default().fg(HEADER_TEXT)))
    };

    let border = if app.is_picker_open() {
        ACCENT
    } else {
        POPUP_BORDER
    };
    let field = Paragraph::new(line).block(
        Block::default()
            .title(Span::styled(" Date Range ", Style::default().fg(ACCENT)))
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border)),
    );
    frame.render_widget(field, area);
}
