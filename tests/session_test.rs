//! Session lifecycle tests via the workspace facade.

use crossterm::event::{KeyCode, KeyEvent};
use tui_bombtris::core::GameSession;
use tui_bombtris::input::handle_key_event;
use tui_bombtris::types::{GameCommand, GamePhase, PieceKind};

#[test]
fn test_new_session_starts_running() {
    let session = GameSession::new(12345, 0);

    assert_eq!(session.phase(), GamePhase::Running);
    assert!(session.active().is_some());
    assert_eq!(session.score(), 0);
    assert_eq!(session.stage(), 1);
    assert_eq!(session.drop_interval_ms(), 1000);
}

#[test]
fn test_gravity_steps_after_the_drop_interval() {
    let mut session = GameSession::new(12345, 0);
    session.spawn_kind(PieceKind::T);
    let y0 = session.active().unwrap().y();

    // One millisecond past the stage-1 interval.
    session.tick(1001);
    assert_eq!(session.active().unwrap().y(), y0 + 1);

    // The accumulator was spent; another short tick does nothing.
    session.tick(16);
    assert_eq!(session.active().unwrap().y(), y0 + 1);
}

#[test]
fn test_commands_move_the_active_piece() {
    let mut session = GameSession::new(12345, 0);
    session.spawn_kind(PieceKind::T);

    let x0 = session.active().unwrap().x();
    let y0 = session.active().unwrap().y();

    session.apply_command(GameCommand::MoveLeft);
    assert_eq!(session.active().unwrap().x(), x0 - 1);

    session.apply_command(GameCommand::MoveRight);
    session.apply_command(GameCommand::MoveRight);
    assert_eq!(session.active().unwrap().x(), x0 + 1);

    session.apply_command(GameCommand::SoftDrop);
    assert_eq!(session.active().unwrap().y(), y0 + 1);
}

#[test]
fn test_pause_gates_movement_and_gravity() {
    let mut session = GameSession::new(12345, 0);
    session.spawn_kind(PieceKind::T);
    let x0 = session.active().unwrap().x();
    let y0 = session.active().unwrap().y();

    session.apply_command(GameCommand::TogglePause);
    assert_eq!(session.phase(), GamePhase::Paused);

    session.apply_command(GameCommand::MoveLeft);
    session.tick(5000);
    assert_eq!(session.active().unwrap().x(), x0);
    assert_eq!(session.active().unwrap().y(), y0);

    session.apply_command(GameCommand::TogglePause);
    assert_eq!(session.phase(), GamePhase::Running);
    session.apply_command(GameCommand::MoveLeft);
    assert_eq!(session.active().unwrap().x(), x0 - 1);
}

#[test]
fn test_hard_drop_settles_and_respawns() {
    let mut session = GameSession::new(12345, 0);
    session.spawn_kind(PieceKind::T);

    session.apply_command(GameCommand::HardDrop);

    // T spawns at x = 4; its bar lands on row 18 with the stem below.
    assert_eq!(session.arena().get(4, 18), Some(1));
    assert_eq!(session.arena().get(5, 18), Some(1));
    assert_eq!(session.arena().get(6, 18), Some(1));
    assert_eq!(session.arena().get(5, 19), Some(1));

    // The next piece spawned immediately; four cells never clear a row.
    assert!(session.active().is_some());
    assert_eq!(session.phase(), GamePhase::Running);
    assert_eq!(session.score(), 0);
}

#[test]
fn test_restart_works_only_after_game_over() {
    let mut session = GameSession::new(12345, 0);
    session.spawn_kind(PieceKind::T);

    // Ignored while running.
    session.apply_command(GameCommand::Restart);
    assert_eq!(session.phase(), GamePhase::Running);

    // Block the spawn area so the next spawn collides.
    for x in 4..=6 {
        session.arena_mut().set(x, 1, 5);
    }
    session.spawn_kind(PieceKind::T);
    assert_eq!(session.phase(), GamePhase::GameOver);

    session.apply_command(GameCommand::Restart);
    assert_eq!(session.phase(), GamePhase::Running);
    assert!(session.active().is_some());
    assert_eq!(session.score(), 0);
    assert_eq!(session.arena().get(4, 1), Some(0));
}

#[test]
fn test_key_mapping_drives_the_session() {
    let mut session = GameSession::new(12345, 0);
    session.spawn_kind(PieceKind::T);
    let x0 = session.active().unwrap().x();

    let command = handle_key_event(KeyEvent::from(KeyCode::Left)).unwrap();
    session.apply_command(command);

    assert_eq!(session.active().unwrap().x(), x0 - 1);
}
