//! 通用数据表格
//!
//! 列定义 + 单元格渲染函数。数据尚未加载时显示骨架行，文本列超出宽度时以
//! 省略号截断。

use ratatui::{
    Frame,
    layout::{Constraint, Flex, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Cell, Paragraph, Row, Table, TableState},
};

use crate::util::ellipsis;
use crate::view::theme::{Styles, colors};

/// 加载中显示的骨架行数
pub const PLACEHOLDER_ROWS: usize = 4;

const COLUMN_SPACING: u16 = 1;

type CellRenderer<'a, T> = Box<dyn Fn(&T, usize) -> Line<'static> + 'a>;

/// 表格列
pub struct Column<'a, T> {
    pub title: &'static str,
    pub width: Constraint,
    /// 参数为行数据与该列的实际宽度
    render: CellRenderer<'a, T>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(
        title: &'static str,
        width: Constraint,
        render: impl Fn(&T, usize) -> Line<'static> + 'a,
    ) -> Self {
        Self {
            title,
            width,
            render: Box::new(render),
        }
    }

    /// 纯文本列，超宽时加省略号
    pub fn text(title: &'static str, width: Constraint, text: impl Fn(&T) -> String + 'a) -> Self {
        Self::new(title, width, move |row, w| Line::raw(ellipsis(&text(row), w)))
    }
}

/// 数据表格
pub struct DataTable<'a, T> {
    columns: Vec<Column<'a, T>>,
    rows: Vec<&'a T>,
    selected: Option<usize>,
    /// 显示骨架行而不是数据
    placeholder: bool,
    empty_message: &'static str,
    row_style: Option<Box<dyn Fn(&T) -> Style + 'a>>,
}

impl<'a, T> DataTable<'a, T> {
    pub fn new(columns: Vec<Column<'a, T>>, rows: Vec<&'a T>) -> Self {
        Self {
            columns,
            rows,
            selected: None,
            placeholder: false,
            empty_message: "No data",
            row_style: None,
        }
    }

    #[must_use]
    pub fn selected(mut self, index: usize) -> Self {
        self.selected = Some(index);
        self
    }

    #[must_use]
    pub fn placeholder(mut self, placeholder: bool) -> Self {
        self.placeholder = placeholder;
        self
    }

    #[must_use]
    pub fn empty_message(mut self, message: &'static str) -> Self {
        self.empty_message = message;
        self
    }

    #[must_use]
    pub fn row_style(mut self, style: impl Fn(&T) -> Style + 'a) -> Self {
        self.row_style = Some(Box::new(style));
        self
    }

    pub fn render(self, frame: &mut Frame, area: Rect) {
        let widths = column_widths(&self.columns, area.width);

        let header = Row::new(self.columns.iter().map(|c| Cell::from(c.title)))
            .style(Styles::header())
            .bottom_margin(1);

        let rows: Vec<Row> = if self.placeholder {
            placeholder_rows(&widths)
        } else {
            self.rows
                .iter()
                .map(|row| {
                    let cells = self
                        .columns
                        .iter()
                        .zip(&widths)
                        .map(|(col, &w)| Cell::from((col.render)(row, w)));
                    let style = self.row_style.as_ref().map_or_else(Style::default, |f| f(row));
                    Row::new(cells).style(style)
                })
                .collect()
        };

        let empty = !self.placeholder && self.rows.is_empty();

        let table = Table::new(rows, self.columns.iter().map(|c| c.width))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .flex(Flex::Legacy)
            .row_highlight_style(Styles::selected());

        let mut state = TableState::default();
        if !self.placeholder {
            state.select(self.selected.filter(|&i| i < self.rows.len()));
        }
        frame.render_stateful_widget(table, area, &mut state);

        if empty && area.height > 2 {
            let message_area = Rect::new(area.x, area.y + 2, area.width, 1);
            let message = Paragraph::new(Line::styled(
                format!(" {}", self.empty_message),
                Styles::muted(),
            ));
            frame.render_widget(message, message_area);
        }
    }
}

/// 按约束计算各列的实际宽度，与 Table 的布局一致
pub fn column_widths<T>(columns: &[Column<'_, T>], total: u16) -> Vec<usize> {
    Layout::horizontal(columns.iter().map(|c| c.width))
        .spacing(COLUMN_SPACING)
        .flex(Flex::Legacy)
        .split(Rect::new(0, 0, total, 1))
        .iter()
        .map(|r| usize::from(r.width))
        .collect()
}

fn placeholder_rows(widths: &[usize]) -> Vec<Row<'static>> {
    let style = Style::default().fg(colors().placeholder);
    (0..PLACEHOLDER_ROWS)
        .map(|_| {
            Row::new(
                widths
                    .iter()
                    .map(|&w| Cell::from(Span::styled("░".repeat(w.min(12)), style))),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::{Terminal, backend::TestBackend};

    struct Item {
        name: &'static str,
        kind: &'static str,
    }

    fn columns<'a>() -> Vec<Column<'a, Item>> {
        vec![
            Column::text("Name", Constraint::Length(8), |i: &Item| i.name.to_string()),
            Column::text("Kind", Constraint::Min(4), |i: &Item| i.kind.to_string()),
        ]
    }

    fn draw(table: DataTable<'_, Item>) -> String {
        let mut terminal = Terminal::new(TestBackend::new(30, 8)).unwrap();
        terminal
            .draw(|frame| table.render(frame, frame.area()))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn widths_follow_constraints() {
        let widths = column_widths(&columns(), 30);
        assert_eq!(widths[0], 8);
        assert!(widths[1] >= 4);
        assert!(widths.iter().sum::<usize>() < 30);
    }

    #[test]
    fn long_text_is_truncated_with_ellipsis() {
        let items = [Item {
            name: "a-very-long-name",
            kind: "A",
        }];
        let screen = draw(DataTable::new(columns(), items.iter().collect()));
        assert!(screen.contains("a-very-…"));
        assert!(!screen.contains("long-name"));
    }

    #[test]
    fn placeholder_hides_rows() {
        let items = [Item {
            name: "visible",
            kind: "A",
        }];
        let screen = draw(DataTable::new(columns(), items.iter().collect()).placeholder(true));
        assert!(!screen.contains("visible"));
        assert_eq!(screen.matches("░░░░░░░░").count(), PLACEHOLDER_ROWS * 2);
    }

    #[test]
    fn empty_table_shows_message() {
        let screen = draw(DataTable::new(columns(), Vec::new()).empty_message("Nothing here"));
        assert!(screen.contains("Nothing here"));
    }
}
