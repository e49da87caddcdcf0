#![no_main]

use libfuzzer_sys::fuzz_target;
use zumic_quicklist::QuickList;

#[derive(Debug, arbitrary::Arbitrary)]
enum Op {
    PushFront(Vec<u8>),
    PushBack(Vec<u8>),
    PopFront,
    PopBack,
    Remove(u16),
    Set(u16, Vec<u8>),
}

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    ops: Vec<Op>,
    raw: Vec<u8>,
}

// Two independent properties:
//
// 1. Unmarshaling arbitrary bytes must never panic; it either succeeds or
//    returns `OutOfRange`.
// 2. A `QuickList` built from an arbitrary operation trace must survive a
//    marshal/unmarshal round trip with its logical sequence unchanged.
fuzz_target!(|input: Input| {
    let _ = zumic_quicklist::database::quicklist::serialize::unmarshal(&input.raw);

    let mut list = QuickList::new();
    for op in input.ops {
        match op {
            Op::PushFront(v) => list.push_front(&v),
            Op::PushBack(v) => list.push_back(&v),
            Op::PopFront => {
                list.pop_front();
            }
            Op::PopBack => {
                list.pop_back();
            }
            Op::Remove(i) => {
                list.remove(i as usize);
            }
            Op::Set(i, v) => {
                list.set(i as usize, &v);
            }
        }
    }

    let bytes = zumic_quicklist::database::quicklist::serialize::marshal(&list);
    let rebuilt =
        zumic_quicklist::database::quicklist::serialize::unmarshal(&bytes).expect("marshal output must unmarshal cleanly");
    assert_eq!(rebuilt.size(), list.size());
    for i in 0..list.size() {
        assert_eq!(rebuilt.index(i), list.index(i));
    }
});
