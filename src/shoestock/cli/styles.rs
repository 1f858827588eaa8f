use console::Style;
use once_cell::sync::Lazy;

pub struct TableTheme {
    pub header: Style,
    pub border: Style,
    pub code: Style,
}

pub static TABLE_THEME: Lazy<TableTheme> = Lazy::new(|| TableTheme {
    header: Style::new().bold(),
    border: Style::new().dim(),
    code: Style::new().cyan(),
});

impl TableTheme {
    /// Copies of the theme's styles with colour forced on or off.
    pub fn forced(&self, use_color: bool) -> TableTheme {
        TableTheme {
            header: self.header.clone().force_styling(use_color),
            border: self.border.clone().force_styling(use_color),
            code: self.code.clone().force_styling(use_color),
        }
    }
}
