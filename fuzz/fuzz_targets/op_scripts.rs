// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the sequence's operation set.
//!
//! Interprets an arbitrary script of operations against the synchronized
//! sequence and a plain `Vec` oracle side by side. Any divergence in state
//! or outcome — or a panic on the container side where the oracle accepts
//! the op — is a bug in the bounds/hook layer.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use syncseq::SynchronizedSequence;

/// One scripted operation. Indexes are raw u8 so the fuzzer reaches both
/// sides of every bound without help.
#[derive(Debug, Arbitrary)]
enum Op {
    Push(i32),
    Insert(u8, i32),
    Set(u8, i32),
    Get(u8),
    RemoveAt(u8),
    Remove(i32),
    Contains(i32),
    IndexOf(i32),
    Clear,
    Snapshot,
}

fuzz_target!(|script: Vec<Op>| {
    // Cap script length to avoid timeouts on degenerate inputs
    let script = &script[..script.len().min(256)];

    let seq = SynchronizedSequence::new();
    let mut oracle: Vec<i32> = Vec::new();

    for op in script {
        match *op {
            Op::Push(v) => {
                let index = seq.push(v);
                oracle.push(v);
                assert_eq!(index, oracle.len() - 1);
            }
            Op::Insert(i, v) => {
                let i = i as usize;
                let ok = seq.insert(i, v).is_ok();
                assert_eq!(ok, i <= oracle.len());
                if ok {
                    oracle.insert(i, v);
                }
            }
            Op::Set(i, v) => {
                let i = i as usize;
                let ok = seq.set(i, v).is_ok();
                assert_eq!(ok, i < oracle.len());
                if ok {
                    oracle[i] = v;
                }
            }
            Op::Get(i) => {
                let i = i as usize;
                assert_eq!(seq.get(i).ok(), oracle.get(i).copied());
            }
            Op::RemoveAt(i) => {
                let i = i as usize;
                if i < oracle.len() {
                    assert_eq!(seq.remove_at(i).unwrap(), oracle.remove(i));
                } else {
                    assert!(seq.remove_at(i).is_err());
                }
            }
            Op::Remove(v) => {
                let expected = match oracle.iter().position(|x| *x == v) {
                    Some(i) => {
                        oracle.remove(i);
                        true
                    }
                    None => false,
                };
                assert_eq!(seq.remove(&v), expected);
            }
            Op::Contains(v) => {
                assert_eq!(seq.contains(&v), oracle.contains(&v));
            }
            Op::IndexOf(v) => {
                assert_eq!(seq.index_of(&v), oracle.iter().position(|x| *x == v));
            }
            Op::Clear => {
                seq.clear();
                oracle.clear();
            }
            Op::Snapshot => {
                assert_eq!(seq.to_vec(), oracle);
            }
        }
        assert_eq!(seq.len(), oracle.len());
    }

    assert_eq!(seq.to_vec(), oracle);
});
