use crate::report::{DetailRow, SummaryRow};
use crate::ui::tables::{render_detail, render_summary};
use crate::ui::theme::Theme;
use crossterm::{
    queue,
    style::{
        Attribute, Color as CColor, Print, ResetColor, SetAttribute, SetBackgroundColor,
        SetForegroundColor,
    },
};
use ratatui::{
    buffer::{Buffer, Cell},
    style::{Color, Modifier, Style},
    text::Span,
};
use std::io::{self, Write};

/// Print the detail table, a blank line, then the summary table.
pub fn print_tables<W: Write>(
    out:     &mut W,
    details: &[DetailRow],
    summary: &[SummaryRow],
    theme:   &Theme,
    color:   bool,
) -> io::Result<()> {
    write_buffer(out, &render_detail(details, theme), color)?;
    writeln!(out)?;
    write_buffer(out, &render_summary(summary, theme), color)?;
    out.flush()
}

/// Write a rendered buffer line by line. Without colour, trailing blanks are trimmed.
pub fn write_buffer<W: Write>(out: &mut W, buf: &Buffer, color: bool) -> io::Result<()> {
    if !color {
        for line in plain_lines(buf) {
            writeln!(out, "{}", line)?;
        }
        return Ok(());
    }

    let area = buf.area;
    for y in area.top()..area.bottom() {
        let mut current: Option<Style> = None;
        for cell in row_cells(buf, y) {
            let style = cell.style();
            if current != Some(style) {
                apply_style(out, style)?;
                current = Some(style);
            }
            queue!(out, Print(cell.symbol()))?;
        }
        queue!(out, SetAttribute(Attribute::Reset), ResetColor, Print("\n"))?;
    }
    Ok(())
}

/// Buffer rows as plain text with trailing blanks trimmed.
pub fn plain_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area;
    (area.top()..area.bottom()).map(|y| {
        let line: String = row_cells(buf, y).into_iter().map(Cell::symbol).collect();
        line.trim_end().to_string()
    }).collect()
}

/// Cells of row `y` that start a glyph. Filler cells behind a wide glyph are skipped.
fn row_cells(buf: &Buffer, y: u16) -> Vec<&Cell> {
    let area = buf.area;
    let mut cells = Vec::new();
    let mut x = area.left();
    while x < area.right() {
        let cell = &buf[(x, y)];
        cells.push(cell);
        let width = Span::raw(cell.symbol()).width().max(1);
        x = x.saturating_add(u16::try_from(width).unwrap_or(u16::MAX));
    }
    cells
}

fn apply_style<W: Write>(out: &mut W, style: Style) -> io::Result<()> {
    queue!(out, SetAttribute(Attribute::Reset), ResetColor)?;
    if let Some(fg) = style.fg {
        queue!(out, SetForegroundColor(to_crossterm(fg)))?;
    }
    if let Some(bg) = style.bg {
        queue!(out, SetBackgroundColor(to_crossterm(bg)))?;
    }
    let m = style.add_modifier;
    if m.contains(Modifier::BOLD)       { queue!(out, SetAttribute(Attribute::Bold))?; }
    if m.contains(Modifier::DIM)        { queue!(out, SetAttribute(Attribute::Dim))?; }
    if m.contains(Modifier::ITALIC)     { queue!(out, SetAttribute(Attribute::Italic))?; }
    if m.contains(Modifier::UNDERLINED) { queue!(out, SetAttribute(Attribute::Underlined))?; }
    Ok(())
}

fn to_crossterm(c: Color) -> CColor {
    match c {
        Color::Reset        => CColor::Reset,
        Color::Black        => CColor::Black,
        Color::Red          => CColor::DarkRed,
        Color::Green        => CColor::DarkGreen,
        Color::Yellow       => CColor::DarkYellow,
        Color::Blue         => CColor::DarkBlue,
        Color::Magenta      => CColor::DarkMagenta,
        Color::Cyan         => CColor::DarkCyan,
        Color::Gray         => CColor::Grey,
        Color::DarkGray     => CColor::DarkGrey,
        Color::LightRed     => CColor::Red,
        Color::LightGreen   => CColor::Green,
        Color::LightYellow  => CColor::Yellow,
        Color::LightBlue    => CColor::Blue,
        Color::LightMagenta => CColor::Magenta,
        Color::LightCyan    => CColor::Cyan,
        Color::White        => CColor::White,
        Color::Rgb(r, g, b) => CColor::Rgb { r, g, b },
        Color::Indexed(i)   => CColor::AnsiValue(i),
    }
}
