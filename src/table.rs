// table.rs

use itertools::Itertools;

/// Renders `rows` under `headers` as a box-drawn grid with a double rule
/// below the header and a single rule between rows. Cells are left aligned.
pub fn fancy_grid(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = (0..headers.len())
        .map(|col| {
            rows.iter()
                .filter_map(|row| row.get(col))
                .map(|cell| cell.chars().count())
                .chain(std::iter::once(headers[col].chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let rule = |left: &str, fill: &str, mid: &str, right: &str| {
        format!(
            "{left}{}{right}",
            widths.iter().map(|w| fill.repeat(w + 2)).join(mid)
        )
    };
    let line = |cells: Vec<&str>| {
        format!(
            "│{}│",
            cells
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!(" {cell}{} ", " ".repeat(w - cell.chars().count())))
                .join("│")
        )
    };

    let mut out = vec![rule("╒", "═", "╤", "╕"), line(headers.to_vec())];
    out.push(rule("╞", "═", "╪", "╡"));
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push(rule("├", "─", "┼", "┤"));
        }
        let cells = (0..headers.len())
            .map(|col| row.get(col).map(String::as_str).unwrap_or(""))
            .collect();
        out.push(line(cells));
    }
    out.push(rule("╘", "═", "╧", "╛"));
    out.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_column_grid() {
        let rows = vec![vec!["add 2 3".to_string()], vec!["mean 1".to_string()]];
        let expected = "\
╒═════════╕
│ Command │
╞═════════╡
│ add 2 3 │
├─────────┤
│ mean 1  │
╘═════════╛";
        assert_eq!(fancy_grid(&["Command"], &rows), expected);
    }

    #[test]
    fn header_wider_than_cells() {
        let rows = vec![vec!["ab".to_string()]];
        let expected = "\
╒═════════╕
│ Command │
╞═════════╡
│ ab      │
╘═════════╛";
        assert_eq!(fancy_grid(&["Command"], &rows), expected);
    }

    #[test]
    fn two_columns() {
        let rows = vec![vec!["1".to_string(), "add 1 1".to_string()]];
        let out = fancy_grid(&["#", "Command"], &rows);
        assert!(out.starts_with("╒═══╤═════════╕"));
        assert!(out.contains("│ 1 │ add 1 1 │"));
    }
}
