//! Terminal quiz runner (default binary).
//!
//! Loads the configured city's suburbs, spawns the game loop and reads
//! commands and guesses from stdin, one per line.

use std::time::Duration;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::task::JoinHandle;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use suburb_quiz::core::GameSnapshot;
use suburb_quiz::geo::{CityData, FileRegionSource, RegionSource};
use suburb_quiz::input::{parse_line, UserAction, HELP_TEXT};
use suburb_quiz::runtime::{spawn_quiz, QuizConfig, QuizHandle};
use suburb_quiz::term::{MapView, TerminalRenderer, TraceMapView};
use suburb_quiz::types::CityKey;

const HIGHLIGHT: Duration = Duration::from_millis(1500);

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let config = QuizConfig::from_env();
    tracing::info!(city = %config.city, data_dir = %config.data_dir.display(), "starting quiz");

    let source = FileRegionSource::new(&config.data_dir);
    let mut map = TraceMapView::new();
    match source.load_country_bounds().await {
        Ok(bounds) => map.set_bounds(bounds),
        Err(err) => tracing::warn!(%err, "no country bounds; starting at the city view"),
    }

    let mut session = Session::open(&source, &config, config.city, map).await?;
    let result = run(&mut session, &source, &config).await;

    session.close().await;
    result
}

/// One loaded city with its map and running game loop
struct Session {
    city: CityData,
    map: TraceMapView,
    handle: QuizHandle,
    join: JoinHandle<()>,
    snapshots: UnboundedReceiver<GameSnapshot>,
    last: GameSnapshot,
}

impl Session {
    async fn open(
        source: &FileRegionSource,
        config: &QuizConfig,
        key: CityKey,
        mut map: TraceMapView,
    ) -> Result<Self> {
        let city = source
            .load(key)
            .await
            .with_context(|| format!("loading {key} suburbs"))?;
        let (handle, join) = spawn_quiz(
            city.candidate_pool(),
            config.game_config(),
            config.max_pending_commands,
        )?;
        let snapshots = handle.subscribe().await?;

        map.set_regions(&city.regions);
        map.set_bounds(city.bounds);

        Ok(Self {
            city,
            map,
            handle,
            join,
            snapshots,
            last: GameSnapshot::default(),
        })
    }

    async fn close(self) {
        let _ = self.handle.shutdown().await;
        let _ = self.join.await;
    }

    fn end_of_game(&mut self) {
        self.map.reset_zoom();
        self.map.set_interactive(false);
    }
}

async fn run(session: &mut Session, source: &FileRegionSource, config: &QuizConfig) -> Result<()> {
    let mut renderer = TerminalRenderer::new();
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    renderer.message(&format!("city: {}", session.city.city))?;
    renderer.message(HELP_TEXT)?;

    loop {
        tokio::select! {
            Some(snapshot) = session.snapshots.recv() => {
                if snapshot.game_finished && !session.last.game_finished {
                    session.end_of_game();
                }
                renderer.draw(&snapshot)?;
                session.last = snapshot;
            }
            line = lines.next_line() => {
                let Some(line) = line? else {
                    return Ok(());
                };
                let Some(action) = parse_line(&line) else {
                    if !line.trim().is_empty() {
                        renderer.message(HELP_TEXT)?;
                    }
                    continue;
                };

                match action {
                    UserAction::Quit => return Ok(()),
                    UserAction::Help => renderer.message(HELP_TEXT)?,
                    UserAction::Start => {
                        session.map.reset_zoom();
                        session.map.set_interactive(true);
                        renderer.invalidate();
                        session.handle.start().await?;
                    }
                    UserAction::Stop => {
                        session.handle.stop().await?;
                        session.end_of_game();
                        renderer.invalidate();
                        renderer.message("game stopped")?;
                    }
                    UserAction::Guess(name) => match session.handle.guess(name.as_str()).await? {
                        Some(outcome) => {
                            session.map.highlight_region(&outcome.target, HIGHLIGHT);
                            tracing::debug!(guess = %name, correct = outcome.correct, "guess submitted");
                        }
                        None => renderer.message("no game running; type :start")?,
                    },
                    UserAction::Find(name) => {
                        if session.city.region(&name).is_some() {
                            session.map.zoom_to_region(&name);
                        } else {
                            renderer.message(&format!("no suburb named {name} in {}", session.city.city))?;
                        }
                    }
                    UserAction::ResetView => session.map.reset_zoom(),
                    UserAction::City(raw) => {
                        let Some(key) = CityKey::from_str(&raw) else {
                            renderer.message(&format!("unknown city {raw}; try melbourne or sydney"))?;
                            continue;
                        };

                        session.handle.stop().await?;
                        session.end_of_game();
                        renderer.invalidate();
                        match Session::open(source, config, key, session.map.clone()).await {
                            Ok(next) => {
                                let previous = std::mem::replace(session, next);
                                previous.close().await;
                                renderer.message(&format!("city: {key}"))?;
                            }
                            Err(err) => {
                                tracing::warn!(%key, err = %format!("{err:#}"), "city switch failed");
                                renderer.message(&format!("could not load {key}: {err:#}"))?;
                            }
                        }
                    }
                }
            }
        }
    }
}
