use tictactoe_ai::core::Mark;
use tictactoe_ai::game::Game;
use tictactoe_ai::player::ai::AIConfig;
use tictactoe_ai::player::{HumanController, MinimaxAI, PlayerController};
use tictactoe_ai::ui::prompt_line;

const AI_KEYWORD: &str = "ai";

fn main() -> anyhow::Result<()> {
    tictactoe_ai::init_logging();

    let config = AIConfig::load_or_default();
    let mut rng = rand::thread_rng();

    loop {
        let o_name = prompt_line(
            "Enter the player name to play O: (type 'ai' if you want it to be Artificial Intelligence)",
        )?;
        let x_name = prompt_line(
            "Enter the player name to play X: (type 'ai' if you want it to be Artificial Intelligence)",
        )?;

        let o_player = make_player(Mark::O, &o_name, &[], &config, &mut rng);
        let taken: Vec<&str> = if o_player.is_ai() {
            vec![o_player.name()]
        } else {
            Vec::new()
        };
        let x_player = make_player(Mark::X, &x_name, &taken, &config, &mut rng);

        let mut game = Game::with_random_start(&mut rng);
        game.play(x_player.as_ref(), o_player.as_ref())?;

        if prompt_line("Wanna play again? (y/n) ")? != "y" {
            break;
        }
    }

    println!("Thanks for playing");
    Ok(())
}

/// 名前が "ai" ならプールから名前を選んで AI を作る
fn make_player(
    mark: Mark,
    input: &str,
    taken: &[&str],
    config: &AIConfig,
    rng: &mut impl rand::Rng,
) -> Box<dyn PlayerController> {
    if input == AI_KEYWORD {
        let name = config.pick_name(taken, rng);
        Box::new(MinimaxAI::new(mark, &name))
    } else {
        Box::new(HumanController::new(mark, input))
    }
}
