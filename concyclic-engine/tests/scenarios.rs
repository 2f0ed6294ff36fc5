use concyclic_engine::{CurvePath, Engine, GameError, Player, Point, Reason, Settings, Stage};

fn new_engine(divisions: u8, challenge_rule: bool) -> Engine {
    Engine::new(Settings::new(divisions, challenge_rule, "Ada", "Bo")).unwrap()
}

fn place(engine: &mut Engine, point: Point) -> Stage {
    engine.select_cell(point).unwrap();
    engine.confirm_placement().unwrap()
}

#[test]
fn fourth_corner_of_a_square_loses() {
    let mut engine = new_engine(10, false);

    // Ada, Bo, Ada: three corners, nothing yet.
    for p in [(0, 0), (2, 0), (0, 2)] {
        assert_eq!(place(&mut engine, p), Stage::SelectingSpot);
    }
    assert_eq!(engine.current_player(), Player::Two);

    // Bo completes the square.
    assert_eq!(place(&mut engine, (2, 2)), Stage::GameOver);
    assert!(engine.is_game_over());
    assert_eq!(engine.reason(), Some(Reason::AutoConcyclicLose));
    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.winner(), Some(Player::One));
    assert_eq!(engine.loser(), Some(Player::Two));
    assert_eq!(engine.highlight(), Some(&[(0, 0), (2, 0), (0, 2), (2, 2)]));

    let Some(CurvePath::Circle(circle)) = engine.curve() else {
        panic!("expected a circle, got {:?}", engine.curve());
    };
    assert!((circle.center.0 - 1.0).abs() < 1e-9);
    assert!((circle.center.1 - 1.0).abs() < 1e-9);
    assert!((circle.radius - 2f64.sqrt()).abs() < 1e-9);
}

#[test]
fn single_intersection_board_ends_in_a_draw() {
    let mut engine = new_engine(0, false);
    assert_eq!(place(&mut engine, (0, 0)), Stage::GameOver);
    assert_eq!(engine.reason(), Some(Reason::BoardFullDraw));
    assert_eq!(engine.winner(), None);
    assert_eq!(engine.highlight(), None);
    assert_eq!(engine.curve(), None);
}

#[test]
fn two_by_two_board_cannot_be_filled_without_a_loss() {
    // four intersections always form a square
    let mut engine = new_engine(1, false);
    for p in [(0, 0), (1, 0), (0, 1)] {
        assert_eq!(place(&mut engine, p), Stage::SelectingSpot);
    }
    assert_eq!(place(&mut engine, (1, 1)), Stage::GameOver);
    assert_eq!(engine.reason(), Some(Reason::AutoConcyclicLose));
    assert!(engine.board().is_full());
}

#[test]
fn successful_challenge() {
    let mut engine = new_engine(10, true);

    // Nobody challenges the first three stones.
    for p in [(0, 0), (2, 0), (0, 2)] {
        assert_eq!(place(&mut engine, p), Stage::AwaitingChallenge);
    }

    // Bo completes the square; Ada challenges.
    assert_eq!(place(&mut engine, (2, 2)), Stage::AwaitingChallenge);
    assert_eq!(engine.current_player(), Player::One);
    assert_eq!(engine.pending_challenge(), Some((2, 2)));

    assert_eq!(engine.issue_challenge(), Ok(Stage::GameOver));
    assert_eq!(engine.reason(), Some(Reason::ChallengeWon));
    assert_eq!(engine.winner(), Some(Player::One));
    assert_eq!(engine.highlight(), Some(&[(0, 0), (2, 0), (0, 2), (2, 2)]));
    assert!(engine.curve().is_some_and(CurvePath::is_circle));
    assert_eq!(engine.pending_challenge(), None);
}

#[test]
fn declining_closes_the_challenge_window() {
    let mut engine = new_engine(10, true);
    for p in [(0, 0), (2, 0), (0, 2), (2, 2)] {
        place(&mut engine, p);
    }

    // Ada lets Bo's square stand and plays elsewhere.
    engine.select_cell((7, 3)).unwrap();
    assert_eq!(engine.pending_challenge(), None);
    assert_eq!(engine.confirm_placement(), Ok(Stage::AwaitingChallenge));

    // Bo can only challenge Ada's stone, which completes nothing.
    assert_eq!(engine.pending_challenge(), Some((7, 3)));
    assert_eq!(engine.issue_challenge(), Ok(Stage::GameOver));
    assert_eq!(engine.reason(), Some(Reason::ChallengeFailed));
    assert_eq!(engine.winner(), Some(Player::One));
    assert_eq!(engine.highlight(), None);
}

#[test]
fn collinear_challenge_draws_a_line() {
    let mut engine = new_engine(10, true);
    for p in [(1, 4), (2, 4), (3, 4), (6, 4)] {
        place(&mut engine, p);
    }
    engine.issue_challenge().unwrap();
    assert_eq!(engine.reason(), Some(Reason::ChallengeWon));

    let curve = engine.curve().copied().unwrap();
    assert_eq!(
        curve,
        CurvePath::Line {
            start: (1, 4),
            end: (6, 4)
        }
    );
    assert_eq!(curve.board_segment(10), Some(((0.0, 4.0), (10.0, 4.0))));
}

#[test]
fn cancel_any_number_of_times() {
    let mut engine = new_engine(10, false);
    place(&mut engine, (5, 5));

    engine.select_cell((1, 1)).unwrap();
    for _ in 0..5 {
        assert_eq!(engine.cancel_placement(), Ok(Stage::SelectingSpot));
        assert_eq!(engine.preview(), None);
    }
    assert_eq!(engine.stones(), &[(5, 5)]);
    assert_eq!(engine.current_player(), Player::Two);
}

#[test]
fn settings_freeze_for_the_match() {
    let mut engine = new_engine(10, false);
    assert_eq!(engine.set_board_size(8), Ok(Stage::SelectingSpot));
    place(&mut engine, (4, 4));

    assert_eq!(engine.set_board_size(12), Err(GameError::SettingsLocked));
    assert_eq!(engine.set_challenge_rule(true), Err(GameError::SettingsLocked));
    assert_eq!(engine.divisions(), 8);

    // an explicit reset is always honored
    engine.reset(Settings::new(12, true, "Ada", "Bo")).unwrap();
    assert_eq!(engine.divisions(), 12);
    assert!(engine.stones().is_empty());
}

#[test]
fn snapshot_tracks_the_game() {
    let mut engine = new_engine(10, true);
    place(&mut engine, (3, 3));

    let json = serde_json::to_value(engine.snapshot()).unwrap();
    assert_eq!(json["stage"], "awaiting_challenge");
    assert_eq!(json["stones"], serde_json::json!([[3, 3]]));
    assert_eq!(json["pending_challenge"], serde_json::json!([3, 3]));
    assert_eq!(json["current_player"], 2);
    assert_eq!(json["challenge_rule"], true);
}
