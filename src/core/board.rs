use super::error::BoardError;
use super::types::{Cell, Mark, Position, SIZE};
use serde::{Deserialize, Serialize};

/// 勝利ライン (行3本, 列3本, 斜め2本の順)
const LINES: [[(usize, usize); SIZE]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// 盤面
///
/// `Copy` なので探索の各分岐は独立した盤面を持つ。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    pub fn new() -> Self {
        Board::default()
    }

    pub fn get(&self, pos: Position) -> Cell {
        self.cells[pos.row()][pos.col()]
    }

    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// 終局判定: (終局したか, 勝者)
    ///
    /// 行 → 列 → 斜めの順に揃ったラインを探し、最初に見つかった記号を勝者とする。
    /// 揃ったラインがなく空きマスもなければ引き分け `(true, None)`。
    pub fn is_finished(&self) -> (bool, Option<Mark>) {
        for line in LINES {
            let [a, b, c] = line.map(|(r, col)| self.cells[r][col]);
            if let Some(mark) = a {
                if b == Some(mark) && c == Some(mark) {
                    return (true, Some(mark));
                }
            }
        }

        if self.cells.iter().flatten().any(|cell| cell.is_none()) {
            (false, None)
        } else {
            (true, None)
        }
    }

    /// `pos` に `mark` を置いた新しい盤面を返す。元の盤面は変更しない。
    pub fn update(&self, pos: Position, mark: Mark) -> Result<Board, BoardError> {
        if self.get(pos).is_some() {
            return Err(BoardError::OccupiedCell(pos));
        }
        let mut next = *self;
        next.cells[pos.row()][pos.col()] = Some(mark);
        Ok(next)
    }

    /// 盤面構築用。空きかどうかは確認しない。
    pub(crate) fn place(&mut self, pos: Position, mark: Mark) {
        self.cells[pos.row()][pos.col()] = Some(mark);
    }

    /// 空きマス (行優先順)
    pub fn empty_cells(&self) -> Vec<Position> {
        Position::ALL
            .iter()
            .copied()
            .filter(|&pos| self.get(pos).is_none())
            .collect()
    }
}
