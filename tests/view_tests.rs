//! Rendering tests: the board view is pure, so frames can be asserted
//! character by character.

use tui_connect4::core::GameState;
use tui_connect4::term::{BoardView, FrameBuffer, Viewport};

fn rows(fb: &FrameBuffer) -> Vec<String> {
    (0..fb.height()).map(|y| fb.row_text(y)).collect()
}

fn discs(fb: &FrameBuffer) -> usize {
    rows(fb).iter().map(|row| row.matches('●').count()).sum()
}

#[test]
fn test_frame_shows_title_labels_and_help() {
    let game = GameState::default();
    let fb = BoardView::default().render(&game, 0, None, Viewport::new(80, 24));

    let rows = rows(&fb);
    assert!(rows.iter().any(|r| r.contains("CONNECT FOUR")));
    assert!(rows.iter().any(|r| r.contains("1   2   3   4   5   6   7")));
    assert!(rows.iter().any(|r| r.contains("q: quit")));
}

#[test]
fn test_disc_count_tracks_moves() {
    let mut game = GameState::default();
    let view = BoardView::default();
    let viewport = Viewport::new(80, 24);

    assert_eq!(discs(&view.render(&game, 0, None, viewport)), 0);

    game.drop_disc(3).unwrap();
    game.drop_disc(3).unwrap();
    game.drop_disc(0).unwrap();

    assert_eq!(discs(&view.render(&game, 0, None, viewport)), 3);
}

#[test]
fn test_turn_banner_follows_the_mover() {
    let mut game = GameState::default();
    let view = BoardView::default();
    let viewport = Viewport::new(80, 24);

    let fb = view.render(&game, 0, None, viewport);
    assert!(rows(&fb).iter().any(|r| r.contains("Player 1's turn")));

    game.drop_disc(2).unwrap();
    let fb = view.render(&game, 0, None, viewport);
    assert!(rows(&fb).iter().any(|r| r.contains("Player 2's turn")));
}

#[test]
fn test_end_of_game_banners() {
    let mut game = GameState::default();
    for col in [3, 0, 3, 0, 3, 0, 3] {
        game.drop_disc(col).unwrap();
    }

    let fb = BoardView::default().render(&game, 3, None, Viewport::new(80, 24));
    assert!(rows(&fb)
        .iter()
        .any(|r| r.contains("Player 1 wins!  press r for a new game")));
}

#[test]
fn test_cursor_sits_over_the_selected_column() {
    let game = GameState::default();
    let view = BoardView::default();

    let fb_left = view.render(&game, 0, None, Viewport::new(80, 24));
    let fb_right = view.render(&game, 6, None, Viewport::new(80, 24));

    let x_of = |fb: &FrameBuffer| {
        rows(fb)
            .iter()
            .find_map(|r| r.find('▼'))
            .expect("cursor marker missing")
    };
    assert!(x_of(&fb_left) < x_of(&fb_right));
}
