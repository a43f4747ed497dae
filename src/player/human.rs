use crate::core::{Board, Mark, Position, SIZE};
use crate::player::PlayerController;
use crate::ui::read_line_from;
use std::io::{self, BufRead};
use thiserror::Error;

const MOVE_PROMPT: &str = "Enter the move in the following format: row number, column number";

/// 入力文字列の形式エラー
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InputError {
    #[error("Expected two numbers separated by a comma, got {0} value(s)")]
    WrongArity(usize),

    #[error("'{0}' is not a number")]
    NotANumber(String),

    #[error("{0} is outside the board, use 1 to 3")]
    OutOfRange(usize),
}

/// `"row,col"` (1-indexed) を盤面座標に変換する
pub fn parse_move(text: &str) -> Result<Position, InputError> {
    let parts: Vec<&str> = text.split(',').map(str::trim).collect();
    if parts.len() != 2 {
        return Err(InputError::WrongArity(parts.len()));
    }

    let mut coords = [0usize; 2];
    for (slot, part) in coords.iter_mut().zip(&parts) {
        let value: usize = part
            .parse()
            .map_err(|_| InputError::NotANumber(part.to_string()))?;
        if !(1..=SIZE).contains(&value) {
            return Err(InputError::OutOfRange(value));
        }
        *slot = value - 1;
    }

    Position::new(coords[0], coords[1]).ok_or(InputError::OutOfRange(coords[0] + 1))
}

pub struct HumanController {
    mark: Mark,
    name: String,
}

impl HumanController {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
        }
    }

    /// 正しい形式の入力が来るまで読み続ける
    pub fn read_move<R: BufRead>(&self, input: &mut R) -> anyhow::Result<Position> {
        loop {
            let line = read_line_from(input, MOVE_PROMPT)?;
            match parse_move(&line) {
                Ok(pos) => return Ok(pos),
                Err(e) => println!("{}", e),
            }
        }
    }
}

impl PlayerController for HumanController {
    fn choose_move(&self, _board: &Board) -> anyhow::Result<Position> {
        let stdin = io::stdin();
        self.read_move(&mut stdin.lock())
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn is_ai(&self) -> bool {
        false
    }
}
