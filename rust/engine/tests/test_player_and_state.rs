use gofish_engine::cards::{Card, Rank, Suit};
use gofish_engine::engine::Engine;
use gofish_engine::events::GameEvent;
use gofish_engine::game::{GameConfig, Phase};
use gofish_engine::player::Player;

#[test]
fn give_cards_moves_every_copy() {
    let mut giver = Player::new("Bob");
    let mut taker = Player::new("Ann");
    for card in [
        Card::new(Rank::Queen, Suit::Diamonds),
        Card::new(Rank::Six, Suit::Clubs),
        Card::new(Rank::Queen, Suit::Clubs),
    ] {
        giver.add_card(card);
    }

    for card in giver.give_cards(Rank::Queen) {
        taker.add_card(card);
    }
    assert_eq!(taker.count_of(Rank::Queen), 2);
    assert!(!giver.has_card(Rank::Queen));
    assert_eq!(giver.hand(), vec![Card::new(Rank::Six, Suit::Clubs)]);
}

#[test]
fn player_views_are_snapshots() {
    let mut eng = Engine::new_game(&["You", "AI-Bob"], &[true, false], false).unwrap();
    eng.run_until_input();
    let mut views = eng.players();
    views[0].hand.clear();
    views[0].score = 99;

    let fresh = eng.players();
    assert_eq!(fresh[0].hand.len() + 4 * fresh[0].score as usize, 5);
    assert!(fresh[0].is_human);
    assert!(!fresh[1].is_human);
}

#[test]
fn subscriber_sees_start_banner_then_state() {
    let config = GameConfig::new(&["You", "AI-Bob"], &[true, false], false)
        .unwrap()
        .with_seed(3);
    let mut eng = Engine::with_config(config).unwrap();
    let rx = eng.subscribe();
    eng.run_until_input();

    let got: Vec<GameEvent> = rx.try_iter().collect();
    assert!(matches!(
        got.first(),
        Some(GameEvent::Log { message }) if message.starts_with("Game has started!")
    ));
    match got.last() {
        Some(GameEvent::StateChanged {
            current_player,
            is_human_turn,
            players,
        }) => {
            assert_eq!(*current_player, 0);
            assert!(*is_human_turn);
            assert_eq!(players.len(), 2);
        }
        other => panic!("expected state change, got {:?}", other),
    }
}

#[test]
fn game_over_is_the_final_event() {
    let config = GameConfig::new(&["A", "B", "C"], &[false; 3], true)
        .unwrap()
        .with_seed(21);
    let mut eng = Engine::with_config(config).unwrap();
    let rx = eng.subscribe();
    assert_eq!(eng.run_until_input(), Phase::GameOver);
    assert!(eng.is_terminated());

    let got: Vec<GameEvent> = rx.try_iter().collect();
    match got.last() {
        Some(GameEvent::GameOver { summary }) => {
            assert!(summary.starts_with("Game Over (Demo Mode)"));
            assert!(summary.contains("Winner:"));
        }
        other => panic!("expected game over, got {:?}", other),
    }
    assert!(got.iter().any(|e| matches!(
        e,
        GameEvent::Log { message } if message == "Demo mode: 3 rounds completed"
    )));
}

#[test]
fn dropping_a_subscriber_does_not_stop_the_game() {
    let config = GameConfig::new(&["A", "B"], &[false, false], true)
        .unwrap()
        .with_seed(4);
    let mut eng = Engine::with_config(config).unwrap();
    let rx = eng.subscribe();
    drop(rx);
    let kept = eng.subscribe();
    assert_eq!(eng.run_until_input(), Phase::GameOver);
    assert!(kept.try_iter().count() > 0);
}
