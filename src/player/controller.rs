use crate::core::{Board, Mark, Position};

/// プレイヤー操作のtrait
pub trait PlayerController {
    /// 次の手を選ぶ。空きマスかどうかの検証は `Board::update` が行う。
    fn choose_move(&self, board: &Board) -> anyhow::Result<Position>;
    fn name(&self) -> &str;
    fn mark(&self) -> Mark;
    fn is_ai(&self) -> bool;
}
