//! End-to-end session example.
//!
//! Demonstrates: load levels → cut → reveal over ticks → reach the quota
//! → full reveal → advance to the next level.
//!
//! Run with `RUST_LOG=debug` to see every cut decision, or `trace` for a
//! grid dump after each cut.

use cleave_bench::{cut_script, reference_profile, scatter_occupants};
use cleave_core::{CellState, GridCoord, RevealEvent};
use cleave_engine::{ChannelSink, LevelSet, Territory};
use cleave_grid::{GridTransform, Layout};

fn main() {
    env_logger::init();
    println!("=== Cleave demo session ===\n");

    let config = reference_profile(42);
    let intro = Layout::default();
    let pillars = Layout::default()
        .with_rect(GridCoord::new(6, 12), GridCoord::new(8, 14), CellState::Bounds)
        .with_rect(GridCoord::new(16, 32), GridCoord::new(18, 34), CellState::Bounds);
    let mut levels = LevelSet::new(vec![intro, pillars]).unwrap();
    let mut territory = Territory::new(config.clone()).unwrap();

    // Reveal events go to a separate consumer thread, as a renderer would.
    let (mut sink, rx) = ChannelSink::bounded(4096);
    let consumer = std::thread::spawn(move || {
        let (mut cells, mut fills) = (0usize, Vec::new());
        for event in rx.iter() {
            match event {
                RevealEvent::Cell(_) => cells += 1,
                RevealEvent::Fill(f) => fills.push(f),
            }
        }
        (cells, fills)
    });

    for round in 0..2 {
        territory.load_level(levels.current()).unwrap();
        println!(
            "Level {}: {} fillable cells, {} boundary segments",
            levels.index(),
            territory.grid().initial_fillable(),
            territory.boundaries().len()
        );

        let occupants = scatter_occupants(&config, 3, round);
        let script = cut_script(&config, 60, round);
        let mut ticks = 0;
        for &(a, b) in &script {
            let outcome = match territory.cut(a, b, &occupants) {
                Ok(outcome) => outcome,
                Err(e) => {
                    println!("  rejected cut: {e}");
                    continue;
                }
            };
            while territory.pending() > 0 {
                territory.tick(&mut sink);
                ticks += 1;
            }
            println!(
                "  cut {:<18} {:>4}/{:<4} -> {:<22} fill {:>5.1}%",
                outcome.line.to_string(),
                outcome.sizes.0,
                outcome.sizes.1,
                outcome.decision.to_string(),
                territory.settled_fill() * 100.0
            );
            if territory.quota_reached() {
                break;
            }
        }

        let finished = territory.reveal_all(&mut sink);
        println!(
            "  level finished after {ticks} ticks; {finished} cells revealed at once\n"
        );

        if round == 0 {
            let transform = GridTransform::for_grid(territory.grid());
            let first = territory.boundaries()[0];
            let ((ax, ay), (bx, by)) = transform.segment_to_units(&first);
            println!("  first boundary in world units: ({ax}, {ay}) -> ({bx}, {by})\n");
        }
        levels.advance();
    }

    println!("Dropped events: {}", sink.dropped());
    drop(sink);
    let (cells, fills) = consumer.join().unwrap();
    println!("Consumer saw {cells} cell events and {} fill events", fills.len());
    println!("\n=== Done ===");
}
