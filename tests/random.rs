mod common;

use std::sync::Arc;
use std::thread;

use common::ConstantRandom;
use pwforge::{Error, ErrorKind, OsRandom, RandomSource};

#[test]
fn random_int_stays_in_range() {
    let rng = OsRandom::open().unwrap();
    for (min, max) in [(0, 1), (0, 2), (0, 89), (-50, 50), (100, 103), (i32::MIN, i32::MAX)] {
        for _ in 0..500 {
            let v = rng.random_int(min, max).unwrap();
            assert!(min <= v && v < max, "{v} outside {min}..{max}");
        }
    }
}

#[test]
fn random_int_reaches_every_residue() {
    let rng = OsRandom::open().unwrap();
    let mut seen = [false; 10];
    for _ in 0..2000 {
        seen[rng.random_int(0, 10).unwrap() as usize] = true;
    }
    assert!(seen.iter().all(|&s| s));
}

#[test]
fn random_int_rejects_empty_or_inverted_range() {
    let rng = OsRandom::open().unwrap();
    let err = rng.random_int(5, 5).unwrap_err();
    assert!(matches!(err, Error::EmptyRange { min: 5, max: 5 }));
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert!(rng.random_int(10, -10).unwrap_err().is_invalid_argument());
}

#[test]
fn random_int_reduction_is_pinned() {
    // 0x80808080 read little-endian is negative; its magnitude mod 3 is 2
    assert_eq!(ConstantRandom(0x80).random_int(0, 3).unwrap(), 2);
    // -1 folds to 1
    assert_eq!(ConstantRandom(0xff).random_int(0, 7).unwrap(), 1);
    assert_eq!(ConstantRandom(0xff).random_int(40, 47).unwrap(), 41);
    assert_eq!(ConstantRandom(0x00).random_int(-3, 3).unwrap(), -3);
}

#[test]
fn random_bytes_rejects_zero() {
    let rng = OsRandom::open().unwrap();
    let err = rng.random_bytes(0).unwrap_err();
    assert!(matches!(err, Error::ZeroByteCount));
    assert!(err.is_invalid_argument());
}

#[test]
fn random_bytes_returns_exact_length() {
    let rng = OsRandom::open().unwrap();
    for n in [1, 7, 32, 4096, 10_000] {
        assert_eq!(rng.random_bytes(n).unwrap().len(), n);
    }
}

#[test]
fn source_is_shared_across_threads() {
    let rng = Arc::new(OsRandom::open().unwrap());
    let handles: Vec<_> = (0..8)
        .map(|_| {
            let rng = Arc::clone(&rng);
            thread::spawn(move || {
                for _ in 0..200 {
                    let v = rng.random_int(0, 89).unwrap();
                    assert!((0..89).contains(&v));
                }
                rng.random_bytes(5000).unwrap().len()
            })
        })
        .collect();

    for h in handles {
        assert_eq!(h.join().unwrap(), 5000);
    }
}

#[test]
fn reopening_does_not_leak_handles() {
    for _ in 0..2000 {
        let rng = OsRandom::open().unwrap();
        rng.random_bytes(16).unwrap();
    }
}
