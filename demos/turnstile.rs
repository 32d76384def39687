//! Coin-Operated Turnstile
//!
//! This example drives a turnstile through its states by firing triggers.
//!
//! Key concepts:
//! - Permits registered per state through `configure`
//! - Guards that veto a transition
//! - Enter/exit hooks and entered/exited observers
//! - Any-origin permits for a maintenance reset
//!
//! Run with: cargo run --example turnstile

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;
use switchyard::{state_enum, StateMachineBuilder};

state_enum! {
    enum Turnstile {
        Locked,
        Unlocked,
        Broken,
    }
}

state_enum! {
    enum Event {
        Coin,
        Push,
        Kick,
        Repair,
    }
}

fn main() {
    println!("=== Turnstile State Machine ===\n");

    let coins = Arc::new(AtomicU32::new(0));
    let kicks_left = Arc::new(AtomicU32::new(2));

    let coin_counter = Arc::clone(&coins);
    let kick_counter = Arc::clone(&kicks_left);
    let mut machine = StateMachineBuilder::new()
        .initial(Turnstile::Locked)
        .configure(Turnstile::Locked, |cfg| {
            cfg.permit_with(Event::Coin, Turnstile::Unlocked, move || {
                coin_counter.fetch_add(1, Ordering::SeqCst);
            })
            .permit_if(Event::Kick, Turnstile::Broken, move || {
                // survives a couple of kicks before breaking
                kick_counter.fetch_sub(1, Ordering::SeqCst) == 1
            })
            .on_enter(|| println!("  [hook] arms locked"))
        })
        .configure(Turnstile::Unlocked, |cfg| {
            cfg.permit(Event::Push, Turnstile::Locked)
                .on_exit(|| println!("  [hook] arm rotated"))
        })
        .permit_from_any(Event::Repair, Turnstile::Locked)
        .build()
        .unwrap();

    machine.on_exited(|state: &Turnstile| println!("  [event] left {state}"));
    machine.on_entered(|state: &Turnstile| println!("  [event] entered {state}"));

    let script = [
        Event::Push,
        Event::Coin,
        Event::Push,
        Event::Kick,
        Event::Kick,
        Event::Coin,
        Event::Repair,
    ];

    for event in script {
        println!("fire {event} (from {})", machine.current_state());
        if let Err(reason) = machine.try_fire(event) {
            println!("  ignored: {reason}");
        }
    }

    println!("\nFinal state: {}", machine.current_state());
    println!("Coins collected: {}", coins.load(Ordering::SeqCst));

    println!("\n=== Example Complete ===");
}
