use crate::models::GridView;
use crate::utils::colors::{CYAN, RESET};
use crate::utils::table::Table;
use std::io::IsTerminal;

/// Render a grid as a fixed-width terminal table.
pub fn render_grid(view: &GridView, colored: bool) -> String {
    let rows = view
        .to_table()
        .into_iter()
        .enumerate()
        .map(|(i, mut row)| {
            row.insert(0, format!("{}.", i + 1));
            row
        })
        .collect();

    let mut headers = vec!["#".to_string()];
    headers.extend(view.headers());

    let title = format!("=== {} | {} shift ===", view.date, view.shift);
    let title = if colored {
        format!("{CYAN}{title}{RESET}")
    } else {
        title
    };

    format!("{}\n{}", title, Table::fitted(&headers, rows).render(colored))
}

/// Colour only when stdout is a terminal.
pub fn print_grid(view: &GridView) {
    let colored = std::io::stdout().is_terminal();
    println!("{}", render_grid(view, colored));
}
