#[cfg(test)]
mod tests {
    use crate::core::{Board, Mark, Position};
    use crate::game::{Game, MatchState};
    use crate::player::ai::minimax::{Score, DRAW, LOSS, WIN};
    use crate::player::MinimaxAI;
    use std::collections::HashSet;

    /// 枝刈りなしの minimax (`hero` 視点, `to_move` が次に指す)
    fn exact_value(board: &Board, hero: Mark, to_move: Mark) -> Score {
        match board.is_finished() {
            (true, None) => return DRAW,
            (true, Some(winner)) => return if winner == hero { WIN } else { LOSS },
            (false, _) => {}
        }

        let values = board.empty_cells().into_iter().map(|mv| {
            let next = board.update(mv, to_move).unwrap();
            exact_value(&next, hero, to_move.opponent())
        });
        if to_move == hero {
            values.max().unwrap()
        } else {
            values.min().unwrap()
        }
    }

    /// 空盤面から到達できる未終局の (盤面, 手番) をすべて集める
    fn reachable_positions() -> Vec<(Board, Mark)> {
        let mut seen = HashSet::new();
        let mut stack = vec![(Board::new(), Mark::X), (Board::new(), Mark::O)];
        let mut out = Vec::new();

        while let Some((board, to_move)) = stack.pop() {
            if board.is_finished().0 || !seen.insert((board, to_move)) {
                continue;
            }
            out.push((board, to_move));
            for mv in board.empty_cells() {
                let next = board.update(mv, to_move).unwrap();
                stack.push((next, to_move.opponent()));
            }
        }
        out
    }

    #[test]
    fn test_search_move_is_always_open() {
        for (board, to_move) in reachable_positions() {
            let ai = MinimaxAI::new(to_move, "Alex");
            let eval = ai.search(&board).unwrap();
            let mv = eval.best_move.expect("non-terminal board must yield a move");
            assert!(board.empty_cells().contains(&mv), "{:?} not open", mv);
        }
    }

    #[test]
    fn test_search_matches_full_minimax() {
        for (board, to_move) in reachable_positions() {
            let ai = MinimaxAI::new(to_move, "Alex");
            let eval = ai.search(&board).unwrap();
            let expected = exact_value(&board, to_move, to_move);

            assert!(!eval.cutoff);
            assert_eq!(eval.score, expected, "wrong value for {:?}", board);

            // 選んだ手自体も最善でなければならない
            let mv = eval.best_move.unwrap();
            let next = board.update(mv, to_move).unwrap();
            assert_eq!(
                exact_value(&next, to_move, to_move.opponent()),
                expected,
                "suboptimal move {:?} for {:?}",
                mv,
                board
            );
        }
    }

    #[test]
    fn test_ties_resolve_to_last_optimal_move() {
        for (board, to_move) in reachable_positions() {
            let ai = MinimaxAI::new(to_move, "Alex");
            let eval = ai.search(&board).unwrap();

            // 最善値を持つ手のうち行優先で最後のもの
            let values: Vec<(Position, Score)> = board
                .empty_cells()
                .into_iter()
                .map(|mv| {
                    let next = board.update(mv, to_move).unwrap();
                    (mv, exact_value(&next, to_move, to_move.opponent()))
                })
                .collect();
            let best = values.iter().map(|&(_, v)| v).max().unwrap();
            let expected = values.iter().rev().find(|&&(_, v)| v == best).unwrap().0;

            assert_eq!(eval.best_move, Some(expected), "tie-break for {:?}", board);
        }
    }

    #[test]
    fn test_ai_vs_ai_is_always_a_draw() {
        for first in [Mark::X, Mark::O] {
            let x = MinimaxAI::new(Mark::X, "Alex");
            let o = MinimaxAI::new(Mark::O, "Abbey");
            let mut game = Game::new(first);
            game.verbose = false;

            assert_eq!(game.play(&x, &o).unwrap(), MatchState::Drawn);
            assert_eq!(game.history.len(), 9);
        }
    }

    #[test]
    fn test_ai_vs_ai_opening_sequence() {
        let x = MinimaxAI::new(Mark::X, "Alex");
        let o = MinimaxAI::new(Mark::O, "Abbey");
        let mut game = Game::new(Mark::X);
        game.verbose = false;
        game.play(&x, &o).unwrap();

        let opening: Vec<(Mark, Position)> = [(2, 2), (1, 1), (2, 1), (2, 0)]
            .iter()
            .zip([Mark::X, Mark::O, Mark::X, Mark::O])
            .map(|(&(r, c), mark)| (mark, Position::new(r, c).unwrap()))
            .collect();
        assert_eq!(&game.history[..4], &opening[..]);
    }
}
