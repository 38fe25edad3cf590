//! Game loop task and its handle.
//!
//! Bridges player actions and timer ticks into a single task that owns the
//! `Game`, so every operation runs to completion before the next begins.

use anyhow::{anyhow, Context, Result};
use tokio::sync::{mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::core::{Game, GameConfig, GameSnapshot, TimerId};
use crate::TokioScheduler;

/// Result of a guess accepted by the game loop
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessOutcome {
    pub correct: bool,
    /// Target of the round the guess was applied to
    pub target: String,
}

/// Command delivered to the game loop.
#[derive(Debug)]
pub enum QuizCommand {
    Start,
    Stop,
    Guess {
        name: String,
        reply: oneshot::Sender<Option<GuessOutcome>>,
    },
    Subscribe(mpsc::UnboundedSender<GameSnapshot>),
    Snapshot(oneshot::Sender<GameSnapshot>),
    Shutdown,
}

/// Cloneable handle to a running game loop
#[derive(Debug, Clone)]
pub struct QuizHandle {
    cmd_tx: mpsc::Sender<QuizCommand>,
}

impl QuizHandle {
    pub async fn start(&self) -> Result<()> {
        self.send(QuizCommand::Start).await
    }

    pub async fn stop(&self) -> Result<()> {
        self.send(QuizCommand::Stop).await
    }

    /// Submit a guess; `None` means the game had already finished.
    pub async fn guess(&self, name: impl Into<String>) -> Result<Option<GuessOutcome>> {
        let (reply, rx) = oneshot::channel();
        self.send(QuizCommand::Guess {
            name: name.into(),
            reply,
        })
        .await?;
        rx.await.context("game loop dropped guess reply")
    }

    /// Receive every snapshot published from now on.
    pub async fn subscribe(&self) -> Result<mpsc::UnboundedReceiver<GameSnapshot>> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.send(QuizCommand::Subscribe(tx)).await?;
        Ok(rx)
    }

    /// Current state without waiting for a publish.
    pub async fn snapshot(&self) -> Result<GameSnapshot> {
        let (reply, rx) = oneshot::channel();
        self.send(QuizCommand::Snapshot(reply)).await?;
        rx.await.context("game loop dropped snapshot reply")
    }

    pub async fn shutdown(&self) -> Result<()> {
        self.send(QuizCommand::Shutdown).await
    }

    async fn send(&self, cmd: QuizCommand) -> Result<()> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| anyhow!("game loop is not running"))
    }
}

/// Build a game over `pool` and spawn its loop on the current tokio runtime.
pub fn spawn_quiz(
    pool: Vec<String>,
    config: GameConfig,
    max_pending: usize,
) -> Result<(QuizHandle, JoinHandle<()>)> {
    let (scheduler, tick_rx) = TokioScheduler::channel();
    let game = Game::new(pool, scheduler, config).context("invalid quiz setup")?;
    let (cmd_tx, cmd_rx) = mpsc::channel(max_pending.max(1));

    let join = tokio::spawn(run_game(game, cmd_rx, tick_rx));
    Ok((QuizHandle { cmd_tx }, join))
}

async fn run_game(
    mut game: Game<TokioScheduler>,
    mut cmd_rx: mpsc::Receiver<QuizCommand>,
    mut tick_rx: mpsc::UnboundedReceiver<TimerId>,
) {
    loop {
        tokio::select! {
            cmd = cmd_rx.recv() => match cmd {
                None | Some(QuizCommand::Shutdown) => break,
                Some(cmd) => apply(&mut game, cmd),
            },
            Some(id) = tick_rx.recv() => {
                game.on_timer(id);
            }
        }
    }

    game.stop();
    tracing::debug!("game loop exited");
}

fn apply(game: &mut Game<TokioScheduler>, cmd: QuizCommand) {
    match cmd {
        QuizCommand::Start => game.start(),
        QuizCommand::Stop => game.stop(),
        QuizCommand::Guess { name, reply } => {
            let target = game.current_round().map(|r| r.target().to_owned());
            let outcome = game
                .guess_suburb(&name)
                .zip(target)
                .map(|(correct, target)| GuessOutcome { correct, target });
            let _ = reply.send(outcome);
        }
        QuizCommand::Subscribe(tx) => {
            game.subscribe_while(move |snapshot| {
                !tx.is_closed() && tx.send(snapshot.clone()).is_ok()
            });
        }
        QuizCommand::Snapshot(reply) => {
            let _ = reply.send(game.snapshot());
        }
        QuizCommand::Shutdown => {}
    }
}
