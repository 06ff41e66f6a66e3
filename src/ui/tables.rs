use crate::report::{DetailRow, SummaryRow};
use crate::ui::theme::Theme;
use crate::util::human::fmt_gb;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Padding, Row, Table, Widget},
};

pub const DETAIL_TITLE:  &str = "ZFS Dataset Information";
pub const SUMMARY_TITLE: &str = "ZFS Dataset Summary";

const COLUMN_SPACING: u16 = 2;
// borders + horizontal padding
const FRAME_WIDTH:    u16 = 4;
// borders + header row
const FRAME_HEIGHT:   u16 = 3;

struct Column {
    header: &'static str,
    right:  bool,
    style:  Style,
}

/// Render the per-dataset table into a buffer sized to fit its content.
pub fn render_detail(rows: &[DetailRow], theme: &Theme) -> Buffer {
    let columns = [
        Column { header: "Name",           right: false, style: theme.name },
        Column { header: "Quota (GB)",     right: true,  style: theme.quota },
        Column { header: "Used (GB)",      right: true,  style: theme.used },
        Column { header: "Available (GB)", right: true,  style: theme.avail },
        Column { header: "Mountpoint",     right: false, style: theme.mountpoint },
        Column { header: "Type",           right: false, style: theme.kind },
    ];
    let cells: Vec<Vec<String>> = rows.iter().map(|r| vec![
        r.name.clone(),
        r.quota_label(),
        fmt_gb(r.used_gb),
        fmt_gb(r.avail_gb),
        r.mountpoint.clone(),
        r.kind.clone(),
    ]).collect();
    render_table(DETAIL_TITLE, &columns, &cells, theme)
}

/// Render the group summary table into a buffer sized to fit its content.
pub fn render_summary(rows: &[SummaryRow], theme: &Theme) -> Buffer {
    let columns = [
        Column { header: "Dataset Group",  right: false, style: theme.name },
        Column { header: "Used (GB)",      right: true,  style: theme.used },
        Column { header: "Available (GB)", right: true,  style: theme.avail },
    ];
    let cells: Vec<Vec<String>> = rows.iter().map(|r| vec![
        r.group.clone(),
        fmt_gb(r.used_gb),
        fmt_gb(r.avail_gb),
    ]).collect();
    render_table(SUMMARY_TITLE, &columns, &cells, theme)
}

fn render_table(title: &str, columns: &[Column], rows: &[Vec<String>], theme: &Theme) -> Buffer {
    let widths: Vec<u16> = columns.iter().enumerate().map(|(i, col)| {
        rows.iter()
            .map(|r| text_width(&r[i]))
            .fold(text_width(col.header), u16::max)
    }).collect();

    let gaps = COLUMN_SPACING.saturating_mul(widths.len().saturating_sub(1) as u16);
    let inner = widths.iter().fold(gaps, |acc, w| acc.saturating_add(*w));
    let width = inner.max(text_width(title)).saturating_add(FRAME_WIDTH);
    let height = (rows.len().min(u16::MAX as usize) as u16).saturating_add(FRAME_HEIGHT);

    let header = Row::new(columns.iter().map(|c| Cell::from(aligned(c.header.to_string(), c.right))))
        .style(theme.header);

    let body: Vec<Row> = rows.iter().map(|r| {
        Row::new(columns.iter().zip(r).map(|(c, text)| {
            Cell::from(aligned(text.clone(), c.right)).style(c.style)
        }))
    }).collect();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border)
        .padding(Padding::horizontal(1))
        .title(Span::styled(title.to_string(), theme.title))
        .title_alignment(Alignment::Center);

    let table = Table::new(body, widths.iter().map(|w| Constraint::Length(*w)))
        .header(header)
        .column_spacing(COLUMN_SPACING)
        .block(block);

    let area = Rect::new(0, 0, width, height);
    let mut buf = Buffer::empty(area);
    table.render(area, &mut buf);
    buf
}

fn aligned(text: String, right: bool) -> Line<'static> {
    let line = Line::from(text);
    if right { line.alignment(Alignment::Right) } else { line }
}

fn text_width(s: &str) -> u16 {
    u16::try_from(Line::from(s).width()).unwrap_or(u16::MAX)
}
