//! Property-based tests for the best-score gate.

use proptest::prelude::*;
use tempfile::TempDir;

use keepbest_core::Solution;
use keepbest_store::ScoreStore;

/// Candidate tagged with the position it was submitted at.
struct Attempt {
    score: i64,
    seq: usize,
}

impl Solution for Attempt {
    type Score = i64;

    fn score(&self) -> i64 {
        self.score
    }

    fn to_text(&self) -> String {
        format!("{}@{}", self.score, self.seq)
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(40))]

    /// After any unforced sequence the record holds max(0, s1..sn) and the
    /// output belongs to the first attempt that reached it.
    #[test]
    fn record_is_running_maximum(scores in prop::collection::vec(-50i64..200, 1..30)) {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::open(dir.path().join("s"), dir.path().join("o")).unwrap();

        for (seq, &score) in scores.iter().enumerate() {
            store.save_if_better("p", &Attempt { score, seq }, false).unwrap();
        }

        let best = scores.iter().copied().max().unwrap_or(0).max(0);
        let persisted = store.read_score::<i64>("p").unwrap();
        if best > 0 {
            prop_assert_eq!(persisted, Some(best));
            let winner = scores.iter().position(|&s| s == best).unwrap();
            let text = std::fs::read_to_string(store.output_path("p")).unwrap();
            prop_assert_eq!(text, format!("{best}@{winner}"));
        } else {
            prop_assert_eq!(persisted, None);
            prop_assert!(!store.output_path("p").exists());
        }
    }

    /// A forced save always writes; "Improved" is reported iff strictly better.
    #[test]
    fn forced_save_always_writes(old in 1i64..100, new in -100i64..200) {
        let dir = TempDir::new().unwrap();
        let store = ScoreStore::open(dir.path().join("s"), dir.path().join("o")).unwrap();
        store.save_if_better("p", &Attempt { score: old, seq: 0 }, false).unwrap();

        let outcome = store.save_if_better("p", &Attempt { score: new, seq: 1 }, true).unwrap();
        prop_assert!(outcome.written);
        prop_assert_eq!(store.read_score::<i64>("p").unwrap(), Some(new));

        let improved_line = outcome.messages().iter().any(|l| l.starts_with("Improved"));
        prop_assert_eq!(improved_line, new > old);
    }
}
