use crate::core::{Board, BoardError, Mark, Position};
use crate::player::PlayerController;
use anyhow::anyhow;
use std::cell::Cell;
use tracing::debug;

/// 自分視点の評価値 (勝ち 1, 引き分け 0, 負け -1)
pub type Score = i8;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

/// どの実スコアよりも悪い初期値
const SENTINEL: Score = 2;

/// 探索ノードの手番
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// 自分の手を指す局面
    Max,
    /// 相手の手を指す局面
    Min,
}

impl Role {
    pub fn flip(self) -> Role {
        match self {
            Role::Max => Role::Min,
            Role::Min => Role::Max,
        }
    }

    fn worst(self) -> Score {
        match self {
            Role::Max => -SENTINEL,
            Role::Min => SENTINEL,
        }
    }

    /// 同点は後から見つかった手で置き換える
    fn improves(self, candidate: Score, best: Score) -> bool {
        match self {
            Role::Max => candidate >= best,
            Role::Min => candidate <= best,
        }
    }

    fn cuts_off(self, best: Score, parent_best: Score) -> bool {
        match self {
            Role::Max => best >= parent_best,
            Role::Min => best <= parent_best,
        }
    }
}

/// 盤面と手番の組。終局していればスコアを持つ。
#[derive(Debug, Clone)]
pub struct GameNode {
    pub board: Board,
    pub role: Role,
    pub score: Option<Score>,
}

impl GameNode {
    pub fn new(board: Board, role: Role) -> Self {
        Self {
            board,
            role,
            score: None,
        }
    }

    /// 終局していれば `hero` 視点のスコアを設定する。未終局なら `None`。
    pub fn calculate_score(&mut self, hero: Mark) {
        self.score = match self.board.is_finished() {
            (false, _) => None,
            (true, None) => Some(DRAW),
            (true, Some(winner)) if winner == hero => Some(WIN),
            (true, Some(_)) => Some(LOSS),
        };
    }
}

/// 探索結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub best_move: Option<Position>,
    /// 親の基準で打ち切られた。`score` は境界値でしかない。
    pub cutoff: bool,
}

pub struct MinimaxAI {
    mark: Mark,
    name: String,
    nodes_evaluated: Cell<usize>,
}

impl MinimaxAI {
    pub fn new(mark: Mark, name: &str) -> Self {
        Self {
            mark,
            name: name.to_string(),
            nodes_evaluated: Cell::new(0),
        }
    }

    /// 直近の `search` で訪れたノード数
    pub fn nodes_evaluated(&self) -> usize {
        self.nodes_evaluated.get()
    }

    /// Root search: `board` で自分が指す番として最善手を探す。
    pub fn search(&self, board: &Board) -> Result<Evaluation, BoardError> {
        self.nodes_evaluated.set(0);
        let root = GameNode::new(*board, Role::Max);
        self.think(&root, None)
    }

    /// Minimax with pruning against the parent's current best score.
    ///
    /// Candidates are the empty cells in row-major order. A terminal child is
    /// scored directly; a non-terminal one is searched recursively with this
    /// node's best score as its bound. Once a recursive result brings the best
    /// score to the parent's bound, the rest of the candidates are skipped and
    /// the result is flagged as a cutoff. The parent drops a cutoff result
    /// unless it ties its best score, in which case the child is searched
    /// again without a bound so ties resolve to the last equal move.
    pub fn think(
        &self,
        node: &GameNode,
        parent_best: Option<Score>,
    ) -> Result<Evaluation, BoardError> {
        self.nodes_evaluated.set(self.nodes_evaluated.get() + 1);

        let mover = match node.role {
            Role::Max => self.mark,
            Role::Min => self.mark.opponent(),
        };
        let mut best_score = node.role.worst();
        let mut best_move = None;

        for mv in node.board.empty_cells() {
            let next_board = node.board.update(mv, mover)?;
            let mut child = GameNode::new(next_board, node.role.flip());
            child.calculate_score(self.mark);

            if let Some(score) = child.score {
                if node.role.improves(score, best_score) {
                    best_score = score;
                    best_move = Some(mv);
                }
                continue;
            }

            let mut reply = self.think(&child, Some(best_score))?;
            if reply.cutoff {
                if reply.score != best_score {
                    continue;
                }
                // 同点かもしれないので正確な値を求め直す
                reply = self.think(&child, None)?;
            }

            if node.role.improves(reply.score, best_score) {
                best_score = reply.score;
                best_move = Some(mv);
            }

            if let Some(bound) = parent_best {
                if node.role.cuts_off(best_score, bound) {
                    return Ok(Evaluation {
                        score: best_score,
                        best_move,
                        cutoff: true,
                    });
                }
            }
        }

        Ok(Evaluation {
            score: best_score,
            best_move,
            cutoff: false,
        })
    }
}

impl PlayerController for MinimaxAI {
    fn choose_move(&self, board: &Board) -> anyhow::Result<Position> {
        let eval = self.search(board)?;
        debug!(
            player = %self.name,
            mark = %self.mark,
            score = eval.score,
            nodes = self.nodes_evaluated(),
            "search finished"
        );
        eval.best_move
            .ok_or_else(|| anyhow!("{} has no open cell to play", self.name))
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn mark(&self) -> Mark {
        self.mark
    }

    fn is_ai(&self) -> bool {
        true
    }
}
