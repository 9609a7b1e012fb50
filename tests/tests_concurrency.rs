#![allow(clippy::unwrap_used)]
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use adplat::{Index, Lookup, NodeBuilder, ingest};

/// Readers racing a writer must observe one whole dataset per lookup,
/// never a half-built tree or a mix of old and new.
#[test]
fn test_searches_during_reload_see_whole_trees() {
    let index = Arc::new(Index::new());
    index.reload(&["One:/a/b"]);

    let stop = Arc::new(AtomicBool::new(false));
    let readers: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            let stop = Arc::clone(&stop);
            thread::spawn(move || {
                while !stop.load(Ordering::Relaxed) {
                    match index.search("/a/b").unwrap() {
                        Lookup::Found(platforms) => {
                            assert_eq!(platforms.len(), 1);
                            let name = platforms[0].as_str();
                            assert!(name == "One" || name == "Two", "unexpected: {name}");
                        }
                        Lookup::NotFound => panic!("/a/b exists in both datasets"),
                    }
                }
            })
        })
        .collect();

    for i in 0..200 {
        let dataset = if i % 2 == 0 { "Two:/a/b" } else { "One:/a/b" };
        index.reload(&[dataset]);
    }

    stop.store(true, Ordering::Relaxed);
    for reader in readers {
        reader.join().unwrap();
    }
}

/// Parallel ingestion of many lines sharing a prefix must not create
/// duplicate children for the same segment.
#[test]
fn test_parallel_ingestion_keeps_segments_unique() {
    let lines: Vec<String> = (0..500).map(|i| format!("P{i}:/ru/msk/d{i}")).collect();

    let root = NodeBuilder::root();
    let stats = ingest::ingest(&root, &lines);
    assert_eq!(stats.lines_skipped, 0);

    let tree = root.freeze();
    assert_eq!(tree.child_count(), 1, "all lines share the /ru prefix");
    let ru = tree.child("ru").unwrap();
    assert_eq!(ru.child_count(), 1);
    let msk = ru.child("msk").unwrap();
    assert_eq!(msk.child_count(), 500);

    for i in [0, 123, 499] {
        let platforms = tree.find(&format!("/ru/msk/d{i}")).unwrap();
        assert_eq!(platforms.len(), 1);
        assert_eq!(platforms[0], format!("P{i}"));
    }
}

/// Ten threads racing get_or_create_child on one node converge on a single
/// child instance.
#[test]
fn test_get_or_create_child_races_to_one_child() {
    let root = NodeBuilder::root();

    thread::scope(|scope| {
        for _ in 0..10 {
            let root = &root;
            scope.spawn(move || {
                for _ in 0..1000 {
                    root.get_or_create_child("ru");
                }
            });
        }
    });

    assert_eq!(root.freeze().child_count(), 1);
}

/// Serialized reloads: after a batch of overlapping reloads settles, the
/// index reflects exactly one complete dataset.
#[test]
fn test_concurrent_reloads_leave_one_complete_dataset() {
    let index = Arc::new(Index::new());

    thread::scope(|scope| {
        for i in 0..8 {
            let index = Arc::clone(&index);
            scope.spawn(move || {
                let lines = [format!("Writer{i}:/ru"), format!("Writer{i}:/ru/msk")];
                index.reload(&lines);
            });
        }
    });

    // Whichever writer published last, its dataset must be internally
    // consistent: the same name at /ru and inherited at /ru/msk.
    let at_ru = index.search("/ru").unwrap();
    let at_msk = index.search("/ru/msk").unwrap();
    assert_eq!(at_ru.platforms().unwrap().len(), 1);
    assert_eq!(at_ru.platforms().unwrap(), at_msk.platforms().unwrap());
}
