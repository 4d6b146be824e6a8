use gofish_engine::engine::Engine;
use gofish_engine::game::GameConfig;
use gofish_engine::logger::{GameLogger, GameRecord};
use std::fs;

fn finished_game(seed: u64) -> Engine {
    let config = GameConfig::new(&["Ann", "Bob", "Cy"], &[false; 3], false)
        .unwrap()
        .with_seed(seed);
    let mut eng = Engine::with_config(config).unwrap();
    eng.run_until_input();
    eng
}

#[test]
fn records_are_written_one_per_line() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("games.jsonl");
    let mut logger = GameLogger::create(&path).unwrap();

    for seed in [1u64, 2] {
        let eng = finished_game(seed);
        let id = logger.next_id();
        logger.write(&eng.record(id)).unwrap();
    }

    let content = fs::read_to_string(&path).unwrap();
    assert!(!content.contains('\r'));
    let lines: Vec<&str> = content.lines().collect();
    assert_eq!(lines.len(), 2);

    let first: GameRecord = serde_json::from_str(lines[0]).unwrap();
    assert!(first.game_id.ends_with("-000001"));
    assert_eq!(first.seed, Some(1));
    assert_eq!(first.players, vec!["Ann", "Bob", "Cy"]);
    assert!(first.ts.is_some());
    assert_eq!(first.final_scores.iter().sum::<u32>(), 13);
    assert!(first.winner.is_some());
}

#[test]
fn record_turns_match_history() {
    let eng = finished_game(9);
    let record = eng.record("x".into());
    assert_eq!(record.turns.as_slice(), eng.history());
    assert_eq!(record.turns.len() as u32, eng.turns_played());
    let winner = eng.winner().map(|w| eng.player(w).unwrap().name().to_string());
    assert_eq!(record.winner, winner);
}
