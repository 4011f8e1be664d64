//! Benchmarks for mnemonic allocation.
//!
//! Run with: cargo bench -p icy_mnemonics_allocator
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use icy_mnemonics_allocator::core::measure::Heuristic;
use icy_mnemonics_allocator::core::{AppMenu, MenuNode};
use icy_mnemonics_allocator::{Allocator, Settings};
use std::hint::black_box;

fn menu_bar() -> AppMenu {
    let items = |labels: &[&str]| -> Vec<MenuNode> {
        labels.iter().map(|label| MenuNode::item(*label)).collect()
    };

    AppMenu::new(vec![
        MenuNode::submenu(
            "File",
            vec![
                MenuNode::item("New"),
                MenuNode::item("Open…"),
                MenuNode::submenu(
                    "Open Recent",
                    items(&[
                        "sketchbook → sketch_240101a",
                        "sketchbook → sketch_240102b",
                        "sketchbook → Particles",
                        "sketchbook → Flocking",
                    ]),
                ),
                MenuNode::separator(),
                MenuNode::item("Save"),
                MenuNode::item("Save As…"),
                MenuNode::item("Export Application…"),
                MenuNode::item("Page Setup"),
                MenuNode::item("Print"),
                MenuNode::separator(),
                MenuNode::item("Preferences…"),
                MenuNode::item("Quit"),
            ],
        ),
        MenuNode::submenu(
            "Edit",
            items(&[
                "Undo",
                "Redo",
                "Cut",
                "Copy",
                "Copy as HTML",
                "Paste",
                "Select All",
                "Auto Format",
                "Comment/Uncomment",
                "Increase Indent",
                "Decrease Indent",
                "Find…",
                "Find Next",
                "Find Previous",
                "Use Selection for Find",
            ]),
        ),
        MenuNode::submenu(
            "Sketch",
            items(&[
                "Run",
                "Present",
                "Tweak",
                "Stop",
                "Import Library",
                "Show Sketch Folder",
                "Add File…",
            ]),
        ),
        MenuNode::submenu(
            "Debug",
            items(&[
                "Enable Debugger",
                "Continue",
                "Step",
                "Step Into",
                "Step Out",
            ]),
        ),
        MenuNode::submenu(
            "Tools",
            items(&[
                "Create Font…",
                "Color Selector…",
                "Archive Sketch",
                "Movie Maker",
            ]),
        ),
        MenuNode::submenu(
            "Help",
            items(&[
                "Getting Started",
                "Environment",
                "Reference",
                "Find in Reference",
                "About Processing",
            ]),
        ),
    ])
}

fn bench_allocate(c: &mut Criterion) {
    let mut group = c.benchmark_group("allocator");
    let allocator = Allocator::with_settings(Heuristic, Settings::default().enabled(true));

    let _ = group.bench_function(BenchmarkId::new("apply_menu", "menu_bar"), |b| {
        let mut menu = menu_bar();

        b.iter(|| {
            allocator.apply_menu(&mut menu);
            black_box(menu.roots.len())
        });
    });

    for count in [8, 32, 128] {
        let labels: Vec<MenuNode> = (0..count)
            .map(|i| MenuNode::item(format!("Recent Sketch {i}")))
            .collect();

        let _ = group.bench_with_input(
            BenchmarkId::new("allocate", count),
            &labels,
            |b, labels| {
                let mut entries = labels.clone();

                b.iter(|| {
                    allocator.allocate(&mut entries);
                    black_box(entries.len())
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_allocate);
criterion_main!(benches);
