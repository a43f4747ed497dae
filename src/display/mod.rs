use crate::core::{Board, Cell, Mark, SIZE};
use crossterm::style::Stylize;

const ROW_RULE: &str = "--------------------------";

/// 盤面を文字列にする。`colored` なら記号に色を付ける。
pub fn format_board(board: &Board, colored: bool) -> String {
    let mut out = String::new();

    for (i, row) in board.rows().iter().enumerate() {
        for (j, cell) in row.iter().enumerate() {
            out.push('\t');
            out.push_str(&cell_text(*cell, colored));
            out.push('\t');
            if j < SIZE - 1 {
                out.push('|');
            }
        }
        out.push('\n');
        if i < SIZE - 1 {
            out.push_str(ROW_RULE);
            out.push('\n');
        }
    }
    out
}

fn cell_text(cell: Cell, colored: bool) -> String {
    match (cell, colored) {
        (None, _) => String::new(),
        (Some(mark), false) => mark.symbol().to_string(),
        (Some(Mark::X), true) => Mark::X.symbol().cyan().to_string(),
        (Some(Mark::O), true) => Mark::O.symbol().magenta().to_string(),
    }
}

pub fn render_board(board: &Board) {
    print!("{}", format_board(board, true));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_board_layout() {
        let board = Board::from_rows(["X..", ".O.", "..X"]).unwrap();
        let expected = "\tX\t|\t\t|\t\t\n\
                        --------------------------\n\
                        \t\t|\tO\t|\t\t\n\
                        --------------------------\n\
                        \t\t|\t\t|\tX\t\n";
        assert_eq!(format_board(&board, false), expected);
    }

    #[test]
    fn test_format_empty_board_has_two_rules() {
        let text = format_board(&Board::new(), false);
        assert_eq!(text.lines().count(), 5);
        assert_eq!(text.matches(ROW_RULE).count(), 2);
    }
}
