//! Gallery Tour
//!
//! This example simulates a visitor walking up to a painting.
//!
//! Key concepts:
//! - Trigger zones that fire on proximity alone
//! - Focus dwell combined with a gesture
//! - Non-focus dwell to end an interaction
//! - A host loop feeding one attention tick per frame
//!
//! Run with: RUST_LOG=gazeflow=debug cargo run --example gallery_tour

use gazeflow::builder::{InteractionBuilder, TransitionBuilder};
use gazeflow::core::{Gesture, Vector3};
use tracing_subscriber::EnvFilter;

const FRAME: f32 = 1.0 / 30.0;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Gallery Tour ===\n");

    let painting = Vector3::new(0.0, 1.6, 6.0);
    let mut interaction = InteractionBuilder::new()
        .state("Wandering", || println!("[audio] ambient music"))
        .state("Approached", || println!("[audio] \"Wave if you'd like to hear more.\""))
        .state("Describing", || println!("[audio] \"Painted in 1889, this landscape...\""))
        .state("Farewell", || println!("[audio] \"Enjoy the rest of the gallery.\""))
        .transition(
            "Wandering",
            "Approached",
            TransitionBuilder::new()
                .point_of_interest(painting)
                .min_distance(1.0)
                .max_distance(3.5)
                .as_trigger_zone(),
        )
        .expect("approach transition is valid")
        .transition(
            "Approached",
            "Describing",
            TransitionBuilder::new()
                .point_of_interest(painting)
                .max_distance(3.5)
                .focus_time(0.5)
                .gesture(Gesture::Wave),
        )
        .expect("describe transition is valid")
        .transition(
            "Describing",
            "Farewell",
            TransitionBuilder::new()
                .point_of_interest(painting)
                .non_focus_time(1.5),
        )
        .expect("farewell transition is valid")
        .initial("Wandering")
        .build()
        .expect("gallery graph is valid");

    interaction.start().expect("initial state exists");

    let forward = Vector3::new(0.0, 0.0, 1.0);
    let aside = Vector3::new(1.0, 0.0, 0.2);

    // Walk toward the painting.
    for step in 0..90 {
        let origin = Vector3::new(0.0, 1.6, step as f32 * 0.05);
        interaction.notify_attention(origin, forward, FRAME);
    }

    // Look at it for a moment, then wave.
    let spot = Vector3::new(0.0, 1.6, 4.5);
    for _ in 0..20 {
        interaction.notify_attention(spot, forward, FRAME);
    }
    interaction.notify_gesture(Gesture::Wave, spot, forward);

    // Turn away and wander off.
    for _ in 0..60 {
        interaction.notify_attention(spot, aside, FRAME);
    }

    println!("\nStates visited: {}", interaction.history().path().join(" -> "));
    println!("\n=== Example Complete ===");
}
