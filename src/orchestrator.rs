//! Game orchestration between players.

use crate::game::{GameEngine, GameState, MoveError, Player};
use crate::input::{InputError, InputProvider};
use crate::presenter::Presenter;
use derive_more::{Display, Error, From};
use tracing::{debug, info, instrument};

/// Why a game session stopped before reaching a terminal state.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    /// A player's input stream failed.
    #[display("Input error: {}", _0)]
    Input(InputError),
    /// The presenter could not write.
    #[display("Output error: {}", _0)]
    Output(std::io::Error),
    /// The engine refused a move nobody can retry.
    #[display("Move error: {}", _0)]
    Move(MoveError),
}

/// Where each player's moves come from.
enum Seats<'a> {
    /// One provider per player.
    Separate {
        x: Box<dyn InputProvider + 'a>,
        o: Box<dyn InputProvider + 'a>,
    },
    /// Both players share one provider (hot-seat at a single keyboard).
    Shared(Box<dyn InputProvider + 'a>),
}

impl<'a> Seats<'a> {
    fn for_player(&mut self, player: Player) -> &mut (dyn InputProvider + 'a) {
        match (self, player) {
            (Seats::Separate { x, .. }, Player::X) => x.as_mut(),
            (Seats::Separate { o, .. }, Player::O) => o.as_mut(),
            (Seats::Shared(both), _) => both.as_mut(),
        }
    }

    fn describe(&self) -> String {
        match self {
            Seats::Separate { x, o } => format!("{} vs {}", x.name(), o.name()),
            Seats::Shared(both) => format!("{} (hot-seat)", both.name()),
        }
    }
}

/// Runs one game between two players.
pub struct Orchestrator<'a, P> {
    game: GameEngine,
    seats: Seats<'a>,
    presenter: P,
}

impl<'a, P: Presenter> Orchestrator<'a, P> {
    /// Creates a new orchestrator with a fresh game.
    pub fn new(
        player_x: Box<dyn InputProvider + 'a>,
        player_o: Box<dyn InputProvider + 'a>,
        presenter: P,
    ) -> Self {
        Self {
            game: GameEngine::new(),
            seats: Seats::Separate {
                x: player_x,
                o: player_o,
            },
            presenter,
        }
    }

    /// Creates an orchestrator where one provider moves for both players.
    pub fn hot_seat(players: Box<dyn InputProvider + 'a>, presenter: P) -> Self {
        Self {
            game: GameEngine::new(),
            seats: Seats::Shared(players),
            presenter,
        }
    }

    /// Returns the game being played.
    pub fn game(&self) -> &GameEngine {
        &self.game
    }

    /// Returns the presenter.
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    /// Runs the turn loop until the game is won or drawn.
    ///
    /// A rejected move is reported and the same player is asked again.
    #[instrument(skip(self), fields(players = %self.seats.describe()))]
    pub fn run(&mut self) -> Result<GameState, SessionError> {
        info!("Starting game");

        loop {
            self.presenter.show_board(self.game.board())?;

            let player = self.game.current_player();
            let provider = self.seats.for_player(player);

            debug!(%player, name = %provider.name(), "Waiting for move");
            let at = provider.next_move(player, self.game.board())?;

            match self.game.play(at) {
                Ok(state) if state.is_terminal() => {
                    info!(%state, "Game over");
                    self.presenter.show_outcome(self.game.board(), state)?;
                    return Ok(state);
                }
                Ok(_) => {}
                Err(err) if err.is_recoverable() => {
                    debug!(%player, %err, "Move rejected, asking again");
                    self.presenter.show_rejection(player, &err)?;
                }
                Err(err) => return Err(err.into()),
            }
        }
    }
}
