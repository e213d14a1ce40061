//! Terminal Bombtris runner (default binary).
//!
//! This is the primary gameplay entrypoint.
//! It uses crossterm for input and a custom framebuffer-based renderer
//! (no ratatui widgets/layout). Audio and the high score file are optional
//! collaborators; the game runs fine when either is unavailable.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_bombtris::audio::AudioPlayer;
use tui_bombtris::core::{GameEvent, GameSession};
use tui_bombtris::input::{handle_key_event, should_quit};
use tui_bombtris::store::HighScoreStore;
use tui_bombtris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_bombtris::types::{GamePhase, SoundEffect, STAGE_POPUP_MS, TICK_MS};

fn main() -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer) -> Result<()> {
    let store = HighScoreStore::new();
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u32)
        .unwrap_or(1);
    let mut session = GameSession::new(seed, store.load());

    let audio = AudioPlayer::new();
    if let Some(audio) = &audio {
        audio.play_bgm();
    }

    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let popup_lifetime = Duration::from_millis(STAGE_POPUP_MS as u64);
    let mut stage_popup: Option<(u32, Instant)> = None;

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        if let Some((_, deadline)) = stage_popup {
            if Instant::now() >= deadline {
                stage_popup = None;
            }
        }
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let popup = stage_popup.map(|(stage, _)| stage);
        view.render_into_with_popup(&session, popup, Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Terminal auto-repeat stands in for held-key movement,
                    // so repeats count as presses.
                    if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(command) = handle_key_event(key) {
                            let was_over = session.phase() == GamePhase::GameOver;
                            session.apply_command(command);
                            if was_over && session.phase() == GamePhase::Running {
                                if let Some(audio) = &audio {
                                    audio.play_bgm();
                                }
                                stage_popup = None;
                            }
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.tick(TICK_MS);
        }

        for game_event in session.take_events() {
            match game_event {
                GameEvent::RowCleared { .. } => {
                    if let Some(audio) = &audio {
                        audio.play_sfx(SoundEffect::Clear);
                    }
                }
                GameEvent::BombExploded { .. } => {
                    if let Some(audio) = &audio {
                        audio.play_sfx(SoundEffect::Bomb);
                    }
                }
                GameEvent::StageChanged { stage } => {
                    if let Some(audio) = &audio {
                        audio.play_sfx(SoundEffect::StageUp);
                    }
                    stage_popup = Some((stage, Instant::now() + popup_lifetime));
                }
                GameEvent::HighScore { score } => {
                    store.save(score);
                }
                GameEvent::GameOver => {
                    if let Some(audio) = &audio {
                        audio.play_sfx(SoundEffect::GameOver);
                        audio.stop_bgm();
                    }
                }
            }
        }
    }
}
