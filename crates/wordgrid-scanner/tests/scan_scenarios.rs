//! End-to-end scans against in-memory oracles.

use wordgrid_core::Direction;
use wordgrid_oracle::{LocalOracle, OracleError, WordList};
use wordgrid_scanner::{ScanConfig, ScanError, WordScanner};

use self::common::{MemoryOracle, RateLimitedOracle, grid, scan, words};

mod common;

#[test]
fn test_rows_of_a_three_by_three_grid() {
    let oracle = MemoryOracle::new(["CAT", "DOG", "ARC"]);
    let results = scan(
        &oracle,
        &grid(&["CAT", "DOG", "ARC"]),
        &[Direction::Right],
        ScanConfig::default(),
    )
    .unwrap();

    let right = results.get(Direction::Right).unwrap();
    assert_eq!(right.len(), 3);
    assert_eq!(right.line(0), Some(&words(&["CAT"])[..]));
    assert_eq!(right.line(1), Some(&words(&["DOG"])[..]));
    assert_eq!(right.line(2), Some(&words(&["ARC"])[..]));
    assert_eq!(oracle.calls(), 3);
}

#[test]
fn test_equal_length_words_in_one_row() {
    let oracle = MemoryOracle::new(["BCD", "CDE"]);
    let results = scan(
        &oracle,
        &grid(&["ABCDE"]),
        &[Direction::Right],
        ScanConfig::default(),
    )
    .unwrap();

    assert_eq!(
        results.line(Direction::Right, 0),
        Some(&words(&["BCD", "CDE"])[..])
    );
    assert_eq!(oracle.calls(), 6);
}

#[test]
fn test_invalid_grid_makes_no_oracle_calls() {
    let oracle = MemoryOracle::new(["CAT"]);
    let scanner = WordScanner::new(&oracle, ScanConfig::default()).unwrap();

    let err = scanner.scan_rows(vec![], &[Direction::Right]).unwrap_err();
    assert!(err.is_invalid_grid());

    let ragged = vec!["CAT".chars().collect(), "DO".chars().collect()];
    let err = scanner
        .scan_rows(ragged, &[Direction::Right, Direction::Down])
        .unwrap_err();
    assert!(err.is_invalid_grid());

    assert_eq!(oracle.calls(), 0);
}

#[test]
fn test_rate_limit_terminates_scan() {
    let oracle = RateLimitedOracle::default();
    let err = scan(
        &oracle,
        &grid(&["CAT", "DOG", "ARC"]),
        &Direction::ALL,
        ScanConfig::default(),
    )
    .unwrap_err();

    let ScanError::Oracle(err) = err else {
        panic!("expected an oracle error, got {err:?}");
    };
    assert_eq!(err, OracleError::RateLimited { status: 403 });
    // The first offset group of the first line is the most that can be in flight.
    assert!(oracle.calls() <= 1);
}

#[test]
fn test_local_word_list_finds_words_in_every_direction() {
    let list = WordList::parse_from_str("arc\ncat\ndog\ntac\ngod\ncda\n");
    let oracle = LocalOracle::new(list);
    let results = scan(
        oracle,
        &grid(&["CAT", "DOG", "ARC"]),
        &Direction::ALL,
        ScanConfig::default().with_workers(2),
    )
    .unwrap();

    assert_eq!(results.line(Direction::Right, 1), Some(&words(&["DOG"])[..]));
    assert_eq!(results.line(Direction::Left, 0), Some(&words(&["TAC"])[..]));
    assert_eq!(results.line(Direction::Left, 1), Some(&words(&["GOD"])[..]));
    assert_eq!(results.line(Direction::Down, 0), Some(&words(&["CDA"])[..]));
    // "ARC" sorts first in the word list.
    assert_eq!(results.line(Direction::Right, 2), Some(&words(&["ARC"])[..]));
    assert_eq!(results.total_matches(), 6);
}

#[test]
fn test_shorter_minimum_ranks_longest_first() {
    let oracle = MemoryOracle::new(["AT", "CAT", "CATS", "TS"]);
    let results = scan(
        &oracle,
        &grid(&["CATS"]),
        &[Direction::Right],
        ScanConfig::default().with_min_word_length(2),
    )
    .unwrap();

    let right = results.get(Direction::Right).unwrap();
    assert_eq!(right.line(0), Some(&words(&["CATS", "CAT", "AT", "TS"])[..]));
    assert_eq!(right.longest_in_line(0), Some(&words(&["CATS"])[..]));
}
