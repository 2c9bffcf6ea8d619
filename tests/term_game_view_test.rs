use tui_blockfall::core::GameState;
use tui_blockfall::term::{AnchorY, GameView, Viewport};
use tui_blockfall::types::PieceKind;

fn screen_text(fb: &tui_blockfall::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_renders_border_corners() {
    let state = GameState::new(1);
    let snap = state.snapshot();
    let view = GameView::default();

    // With cell_w=2 and cell_h=1:
    // board pixels = 10*2 by 20*1 => 20x20
    // plus border => 22x22
    let vp = Viewport::new(22, 22);
    let fb = view.render(&snap, vp);

    assert_eq!(fb.get(0, 0).unwrap().ch, '┌');
    assert_eq!(fb.get(21, 0).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 21).unwrap().ch, '└');
    assert_eq!(fb.get(21, 21).unwrap().ch, '┘');
}

#[test]
fn term_view_renders_locked_cell_as_two_chars_wide() {
    let mut snap = GameState::new(1).snapshot();
    snap.board[19][0] = PieceKind::I.as_u8();
    snap.active = None;

    let view = GameView::default();
    let fb = view.render(&snap, Viewport::new(22, 22));

    // Inside border: (1,1) origin. Each cell is 2 chars wide.
    let x0 = 1;
    let y0 = 1 + 19;
    assert_eq!(fb.get(x0, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 1, y0).unwrap().ch, '█');
    assert_eq!(fb.get(x0 + 2, y0).unwrap().ch, ' ');
}

#[test]
fn term_view_draws_side_panel_when_wide_enough() {
    let mut snap = GameState::new(1).snapshot();
    snap.score = 1234;
    snap.level = 2;
    snap.lines = 10;

    let view = GameView::default();
    let all = screen_text(&view.render(&snap, Viewport::new(60, 22)));
    assert!(all.contains("NEXT"));
    assert!(all.contains("Score: 1234"));
    assert!(all.contains("Level: 2"));
    assert!(all.contains("Lines: 10"));

    // Too narrow for a panel: playfield only.
    let narrow = screen_text(&view.render(&snap, Viewport::new(30, 22)));
    assert!(!narrow.contains("Score"));
}

#[test]
fn term_view_centers_board_by_default_on_tall_viewports() {
    let snap = GameState::new(1).snapshot();

    // Board frame is 22 rows tall (20 + border).
    let fb = GameView::default().render(&snap, Viewport::new(22, 30));
    // start_y = (30 - 22) / 2 = 4 => top-left corner at (0,4).
    assert_eq!(fb.get(0, 4).unwrap().ch, '┌');

    let top = GameView::default()
        .with_anchor_y(AnchorY::Top)
        .render(&snap, Viewport::new(22, 30));
    assert_eq!(top.get(0, 0).unwrap().ch, '┌');
}

#[test]
fn term_view_shows_game_over_after_blocked_spawn() {
    let mut state = GameState::new(1);
    for x in 0..9 {
        for y in 0..2 {
            state.board_mut().set(x, y, Some(PieceKind::Z));
        }
    }
    state.spawn_next_piece();
    assert!(state.is_game_over());

    let all = screen_text(&GameView::default().render(&state.snapshot(), Viewport::new(22, 22)));
    assert!(all.contains("GAME OVER"));
    assert!(all.contains("Press R to Restart"));
}
