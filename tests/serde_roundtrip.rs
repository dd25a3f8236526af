//! Serialization of configuration and results.
#![cfg(feature = "serde")]

use queens_engine::search::{Engine, EngineConfig, Partition, SearchStatus};
use queens_engine::{BoardSize, Placement, Solver};

#[test]
fn config_roundtrip() {
    let config = EngineConfig::for_size(12)
        .unwrap()
        .engine(Engine::Parallel)
        .threads(6)
        .partition(Partition::FirstTwoRanks);
    let json = serde_json::to_string(&config).unwrap();
    let back: EngineConfig = serde_json::from_str(&json).unwrap();
    assert_eq!(back, config);
}

#[test]
fn invalid_board_size_rejected_on_deserialize() {
    assert!(serde_json::from_str::<BoardSize>("0").is_err());
    assert!(serde_json::from_str::<BoardSize>("40").is_err());
    assert_eq!(
        serde_json::from_str::<BoardSize>("9").unwrap(),
        BoardSize::new(9).unwrap()
    );
}

#[test]
fn placement_roundtrip() {
    let size = BoardSize::new(4).unwrap();
    let placement = Placement::from_columns(size, &[1, 3, 0, 2]).unwrap();
    let json = serde_json::to_string(&placement).unwrap();
    let back: Placement = serde_json::from_str(&json).unwrap();
    assert_eq!(back, placement);
}

#[test]
fn report_serializes() {
    let mut solver = EngineConfig::for_size(6).unwrap().build().unwrap();
    let report = solver.run(None).unwrap();
    assert_eq!(report.status, SearchStatus::Completed);
    let value = serde_json::to_value(&report).unwrap();
    assert_eq!(value["solutions"], 4);
    assert_eq!(value["engine"], "iterative");
}
