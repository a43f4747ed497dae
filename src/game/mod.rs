use crate::core::{Board, BoardError, Mark, Position};
use crate::display::render_board;
use crate::player::PlayerController;
use rand::Rng;
use tracing::{info, warn};

/// 対局の状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    Ongoing,
    Won(Mark),
    Drawn,
}

impl MatchState {
    fn of(board: &Board) -> Self {
        match board.is_finished() {
            (false, _) => MatchState::Ongoing,
            (true, Some(mark)) => MatchState::Won(mark),
            (true, None) => MatchState::Drawn,
        }
    }

    pub fn is_over(self) -> bool {
        self != MatchState::Ongoing
    }
}

/// 1手の処理結果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnResult {
    Played(Position),
    /// 埋まっているマスを指定した。手番はそのまま。
    Rejected(BoardError),
}

pub struct Game {
    pub board: Board,
    pub current: Mark,
    pub state: MatchState,
    pub history: Vec<(Mark, Position)>,
    /// false なら盤面や手番の表示をしない (自己対局用)
    pub verbose: bool,
}

impl Game {
    pub fn new(first: Mark) -> Self {
        Game {
            board: Board::new(),
            current: first,
            state: MatchState::Ongoing,
            history: Vec::new(),
            verbose: true,
        }
    }

    /// 先手をランダムに決める
    pub fn with_random_start<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = if rng.gen_bool(0.5) { Mark::X } else { Mark::O };
        Self::new(first)
    }

    /// 現在の手番のプレイヤーに1手指させる
    pub fn play_turn(&mut self, controller: &dyn PlayerController) -> anyhow::Result<TurnResult> {
        let mv = controller.choose_move(&self.board)?;

        match self.board.update(mv, self.current) {
            Ok(next) => {
                info!(player = controller.name(), mark = %self.current, %mv, "move played");
                self.board = next;
                self.history.push((self.current, mv));
                self.state = MatchState::of(&self.board);
                self.current = self.current.opponent();
                Ok(TurnResult::Played(mv))
            }
            Err(e) => {
                warn!(player = controller.name(), %mv, "move rejected: {}", e);
                Ok(TurnResult::Rejected(e))
            }
        }
    }

    /// 終局まで対局する
    pub fn play(
        &mut self,
        x: &dyn PlayerController,
        o: &dyn PlayerController,
    ) -> anyhow::Result<MatchState> {
        anyhow::ensure!(
            x.mark() == Mark::X && o.mark() == Mark::O,
            "players are seated on the wrong marks"
        );

        while !self.state.is_over() {
            let controller = match self.current {
                Mark::X => x,
                Mark::O => o,
            };

            if self.verbose {
                render_board(&self.board);
                println!("It's {}'s turn: ", controller.name());
                if controller.is_ai() {
                    println!("Thinking...");
                }
            }

            if let TurnResult::Rejected(e) = self.play_turn(controller)? {
                if self.verbose {
                    println!("{}", e);
                }
            }
        }

        if self.verbose {
            render_board(&self.board);
            println!("{}", self.result_message(x, o));
        }
        info!(state = ?self.state, moves = self.history.len(), "game finished");
        Ok(self.state)
    }

    pub fn result_message(&self, x: &dyn PlayerController, o: &dyn PlayerController) -> String {
        match self.state {
            MatchState::Won(Mark::X) => format!("{} won the game", x.name()),
            MatchState::Won(Mark::O) => format!("{} won the game", o.name()),
            MatchState::Drawn => "Game finished to a draw".to_string(),
            MatchState::Ongoing => "Game in progress".to_string(),
        }
    }
}
