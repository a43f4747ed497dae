use super::board::Board;
use super::error::SetupError;
use super::types::{Mark, Position, SIZE};

impl Board {
    /// 文字列3行から盤面を作る (`X`, `O`, 空きは `.` `_` または空白)
    pub fn from_rows(rows: [&str; SIZE]) -> Result<Board, SetupError> {
        let mut board = Board::new();

        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() != SIZE {
                return Err(SetupError::RowLength {
                    row,
                    len: symbols.len(),
                });
            }

            for (col, &c) in symbols.iter().enumerate() {
                if matches!(c, '.' | '_' | ' ') {
                    continue;
                }
                let mark = Mark::from_char(c).ok_or(SetupError::UnknownSymbol(c))?;
                if let Some(pos) = Position::new(row, col) {
                    board.place(pos, mark);
                }
            }
        }

        Ok(board)
    }
}
