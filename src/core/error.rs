use super::types::Position;
use thiserror::Error;

/// 盤面操作のエラー
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    #[error("That spot at {0} is already taken")]
    OccupiedCell(Position),
}

/// 文字列からの盤面構築エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SetupError {
    #[error("Row {row} has {len} cells, expected 3")]
    RowLength { row: usize, len: usize },

    #[error("Unknown cell symbol '{0}'")]
    UnknownSymbol(char),
}
