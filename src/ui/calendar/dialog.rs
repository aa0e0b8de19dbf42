//! Draws a [`CalendarTree`] into a frame and records where each
//! interactive node landed.

use chrono::{Datelike, NaiveDate};
use ratatui::layout::{Alignment, Position, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::ui::layout::centered_rect_by_size;
use crate::ui::theme::{
    ACCENT, ACTIVE_HIGHLIGHT, DISABLED_TEXT, HEADER_SEPARATOR, HEADER_TEXT, IN_RANGE_BG,
    POPUP_BORDER, RANGE_EDGE_BG, RANGE_EDGE_FG,
};
use crate::ui::year_input::YEAR_DIGITS;

use super::tree::{Button, CalendarTree, DayCell, DayClass, MonthGrid, PickerAction, YearLabel};

const QUICK_WIDTH: u16 = 16;
/// "Su Mo Tu We Th Fr Sa"
const GRID_WIDTH: u16 = 20;
const CELL_STRIDE: u16 = 3;
const GAP: u16 = 3;
const WEEK_ROWS: u16 = 6;
const GRID_HEIGHT: u16 = 2 + WEEK_ROWS;

pub const POPUP_WIDTH: u16 = 2 + 1 + QUICK_WIDTH + GAP + GRID_WIDTH + GAP + GRID_WIDTH + 1;
pub const POPUP_HEIGHT: u16 = 2 + GRID_HEIGHT + 2;

const HINTS: &str = "[ ] { } month  y/Y year  1-6 preset  r reset  Esc close";

/// Screen regions of the last drawn popup.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    popup: Rect,
    targets: Vec<(Rect, PickerAction)>,
}

impl HitMap {
    pub fn popup(&self) -> Rect {
        self.popup
    }

    /// True when the point lies inside the popup's bounding rect.
    pub fn contains(&self, column: u16, row: u16) -> bool {
        self.popup.contains(Position::new(column, row))
    }

    pub fn hit(&self, column: u16, row: u16) -> Option<PickerAction> {
        let point = Position::new(column, row);
        self.targets
            .iter()
            .find(|(area, _)| area.contains(point))
            .map(|(_, action)| *action)
    }

    pub fn targets(&self) -> impl Iterator<Item = &(Rect, PickerAction)> {
        self.targets.iter()
    }

    /// Screen rect of the first node carrying `action`.
    pub fn rect_of(&self, action: PickerAction) -> Option<Rect> {
        self.targets
            .iter()
            .find(|(_, candidate)| *candidate == action)
            .map(|(area, _)| *area)
    }

    fn push(&mut self, area: Rect, action: PickerAction) {
        let visible = area.intersection(self.popup);
        if visible.width > 0 && visible.height > 0 {
            self.targets.push((visible, action));
        }
    }
}

/// Draw the popup centered in `mount` and return its hit map.
pub fn render_calendar(
    frame: &mut Frame,
    mount: Rect,
    tree: &CalendarTree,
    cursor: Option<NaiveDate>,
) -> HitMap {
    let area = centered_rect_by_size(mount, POPUP_WIDTH, POPUP_HEIGHT);
    let mut hits = HitMap {
        popup: area,
        targets: Vec::new(),
    };
    if area.width == 0 || area.height == 0 {
        return hits;
    }

    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(Span::styled(" Date Range ", Style::default().fg(ACCENT)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let quick_x = inner.x + 1;
    let left_x = quick_x + QUICK_WIDTH + GAP;
    let right_x = left_x + GRID_WIDTH + GAP;

    render_quick_select(
        frame,
        Rect::new(quick_x, inner.y, QUICK_WIDTH, GRID_HEIGHT),
        tree,
        &mut hits,
    );
    for (grid, x) in tree.months.iter().zip([left_x, right_x]) {
        render_month(
            frame,
            Rect::new(x, inner.y, GRID_WIDTH, GRID_HEIGHT),
            grid,
            cursor,
            &mut hits,
        );
    }

    let hint_area = Rect::new(
        inner.x,
        inner.y + inner.height.saturating_sub(1),
        inner.width,
        1,
    );
    let hint = Paragraph::new(Line::from(Span::styled(
        HINTS,
        Style::default().fg(HEADER_SEPARATOR),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(hint, hint_area.intersection(area));

    hits
}

fn render_quick_select(frame: &mut Frame, area: Rect, tree: &CalendarTree, hits: &mut HitMap) {
    let mut lines = Vec::with_capacity(tree.quick_select.len() + 2);
    for (index, button) in tree.quick_select.iter().enumerate() {
        lines.push(button_line(&format!("{} ", index + 1), button));
        hits.push(
            Rect::new(area.x, area.y + index as u16, area.width, 1),
            button.action,
        );
    }
    lines.push(Line::from(""));
    let reset_row = lines.len() as u16;
    lines.push(button_line("  ", &tree.reset));
    hits.push(
        Rect::new(area.x, area.y + reset_row, area.width, 1),
        tree.reset.action,
    );

    frame.render_widget(Paragraph::new(lines), area.intersection(hits.popup));
}

fn button_line(prefix: &str, button: &Button) -> Line<'static> {
    Line::from(vec![
        Span::styled(prefix.to_string(), Style::default().fg(HEADER_SEPARATOR)),
        Span::styled(button.label, Style::default().fg(HEADER_TEXT)),
    ])
}

fn render_month(
    frame: &mut Frame,
    area: Rect,
    grid: &MonthGrid,
    cursor: Option<NaiveDate>,
    hits: &mut HitMap,
) {
    let mut lines = Vec::with_capacity(GRID_HEIGHT as usize);
    let (header, edit_cursor) = header_line(area, grid, hits);
    lines.push(header);
    if let Some(position) = edit_cursor {
        if hits.popup.contains(position) {
            frame.set_cursor_position(position);
        }
    }
    lines.push(Line::from(Span::styled(
        grid.weekdays.join(" "),
        Style::default().fg(HEADER_SEPARATOR),
    )));

    for (row, week) in grid.cells.chunks(7).enumerate() {
        let mut spans = Vec::with_capacity(14);
        for (col, cell) in week.iter().enumerate() {
            if col > 0 {
                spans.push(Span::raw(" "));
            }
            match cell {
                DayCell::Empty => spans.push(Span::raw("  ")),
                DayCell::Day {
                    date,
                    class,
                    action,
                } => {
                    let mut style = day_style(*class);
                    if cursor == Some(*date) {
                        style = style.add_modifier(Modifier::UNDERLINED | Modifier::BOLD);
                    }
                    spans.push(Span::styled(format!("{:>2}", date.day()), style));
                    if let Some(action) = action {
                        hits.push(
                            Rect::new(
                                area.x + col as u16 * CELL_STRIDE,
                                area.y + 2 + row as u16,
                                2,
                                1,
                            ),
                            *action,
                        );
                    }
                }
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), area.intersection(hits.popup));
}

/// `<   March 2024   >` with hit regions for both arrows and the year.
///
/// Also returns the text cursor position while the year is being edited.
fn header_line(area: Rect, grid: &MonthGrid, hits: &mut HitMap) -> (Line<'static>, Option<Position>) {
    let header = &grid.header;
    let (year_text, year_style, edit_cursor) = match &header.year {
        YearLabel::Text(text) => (
            text.clone(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            None,
        ),
        YearLabel::Editing { text, cursor } => (
            format!("{:_<width$}", text, width = YEAR_DIGITS),
            Style::default().fg(HEADER_TEXT).bg(ACTIVE_HIGHLIGHT),
            Some(*cursor),
        ),
    };

    let inner_width = GRID_WIDTH.saturating_sub(2) as usize;
    let name_width = header.month_name.len() + 1;
    let title_width = name_width + year_text.chars().count();
    let pad_left = inner_width.saturating_sub(title_width) / 2;
    let pad_right = inner_width.saturating_sub(title_width + pad_left);

    let year_x = area.x + 1 + (pad_left + name_width) as u16;
    let year_rect = Rect::new(year_x, area.y, year_text.chars().count() as u16, 1);

    hits.push(Rect::new(area.x, area.y, 1, 1), header.prev);
    hits.push(year_rect, header.year_action);
    hits.push(Rect::new(area.x + GRID_WIDTH - 1, area.y, 1, 1), header.next);

    let edit_position = edit_cursor.map(|cursor| {
        let offset = cursor.min(YEAR_DIGITS - 1) as u16;
        Position::new(year_x + offset, area.y)
    });

    let nav_style = Style::default().fg(ACCENT);
    let line = Line::from(vec![
        Span::styled("<", nav_style),
        Span::raw(" ".repeat(pad_left)),
        Span::styled(
            format!("{} ", header.month_name),
            Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
        ),
        Span::styled(year_text, year_style),
        Span::raw(" ".repeat(pad_right)),
        Span::styled(">", nav_style),
    ]);
    (line, edit_position)
}

fn day_style(class: DayClass) -> Style {
    match class {
        DayClass::Disabled => Style::default()
            .fg(DISABLED_TEXT)
            .add_modifier(Modifier::DIM | Modifier::CROSSED_OUT),
        DayClass::RangeStart | DayClass::RangeEnd | DayClass::Selected => Style::default()
            .fg(RANGE_EDGE_FG)
            .bg(RANGE_EDGE_BG)
            .add_modifier(Modifier::BOLD),
        DayClass::InRange => Style::default().fg(HEADER_TEXT).bg(IN_RANGE_BG),
        DayClass::Plain => Style::default().fg(HEADER_TEXT),
    }
}
