//! Wave to Start
//!
//! This example shows a kiosk that wakes on a wave and then walks
//! through its intro on its own.
//!
//! Key concepts:
//! - Gesture-only transitions
//! - Entry actions that queue notifications for the machine
//! - Standing still as a trigger, replayed from an entry action
//!
//! Run with: RUST_LOG=gazeflow=debug cargo run --example wave_to_start

use gazeflow::builder::TransitionBuilder;
use gazeflow::core::{Gesture, Vector3};
use gazeflow::interaction::{Interaction, InteractionError};
use tracing_subscriber::EnvFilter;

const KIOSK_SPOT: Vector3 = Vector3::new(0.0, 1.7, 1.0);
const SCREEN: Vector3 = Vector3::new(0.0, 0.0, -1.0);

fn build_kiosk() -> Result<Interaction, InteractionError> {
    let mut kiosk = Interaction::new();
    kiosk
        .add_state("Sleeping", || println!("[screen] off"))?
        .add_state_with_context("Waking", |ctx| {
            println!("[screen] fading in ({})", ctx.state_name());
            // The intro plays for one second while the user watches.
            ctx.notify_attention(KIOSK_SPOT, SCREEN, 0.0);
            ctx.notify_attention(KIOSK_SPOT, SCREEN, 1.0);
        })?
        .add_state("Menu", || println!("[screen] menu shown"))?
        .add_state("Selected", || println!("[screen] item selected"))?;

    let wave = TransitionBuilder::new()
        .gesture(Gesture::Wave)
        .build()
        .expect("wave transition is valid");
    let intro_done = TransitionBuilder::new()
        .static_time(1.0)
        .build()
        .expect("intro transition is valid");
    let tap = TransitionBuilder::new()
        .gesture(Gesture::Tap)
        .build()
        .expect("tap transition is valid");
    let linger = TransitionBuilder::new()
        .static_time(3.0)
        .build()
        .expect("linger transition is valid");

    kiosk
        .add_transition("Sleeping", "Waking", wave)?
        .add_transition("Waking", "Menu", intro_done)?
        .add_transition("Menu", "Selected", tap)?
        .add_transition("Menu", "Sleeping", linger)?
        .set_initial_state("Sleeping");
    Ok(kiosk)
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("=== Wave to Start ===\n");

    let mut kiosk = build_kiosk().expect("kiosk graph is valid");
    kiosk.start().expect("initial state exists");

    kiosk.notify_gesture(Gesture::Wave, KIOSK_SPOT, SCREEN);
    println!("After wave: {:?}", kiosk.current_state());

    kiosk.notify_gesture(Gesture::Tap, KIOSK_SPOT, SCREEN);
    println!("After tap: {:?}", kiosk.current_state());

    println!("\n=== Example Complete ===");
}
