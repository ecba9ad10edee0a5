//! Job Lifecycle Machine
//!
//! This example demonstrates a typed machine with edge listeners.
//!
//! Key concepts:
//! - Declaring states and signals with the enum macros
//! - Routing signals to paths with the builder
//! - Concurrent edge listeners with commit-after-all-succeed
//! - Sequencing several inputs as one chained operation
//!
//! Run with: cargo run --example job_lifecycle

use std::time::Duration;

use switchyard::builder::MachineBuilder;
use switchyard::{signal_enum, state_enum};

state_enum! {
    enum Job {
        Idle,
        Working,
        Done,
    }
}

signal_enum! {
    enum Op {
        Start,
        Complete,
        Reset,
    }
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Job Lifecycle Machine ===\n");

    let definition = MachineBuilder::new()
        .initial(Job::Idle)
        .route(Job::Idle, Op::Start, [Job::Working])
        .route(Job::Working, Op::Complete, [Job::Done])
        .route(Job::Done, Op::Reset, [Job::Idle])
        .build()
        .unwrap();

    let machine = definition.machine();
    println!("Initial state: {:?}", machine.current());

    machine.on_fn(Job::Idle, Job::Working, |was: Job, now: Job| async move {
        println!("  listener: spinning up ({:?} -> {:?})", was, now);
        Ok(())
    });
    machine.on_fn(Job::Working, Job::Done, |_, _| async {
        println!("  listener: archiving results (takes a moment)...");
        tokio::time::sleep(Duration::from_millis(100)).await;
        println!("  listener: archive finished");
        Ok(())
    });
    machine.on_fn(Job::Done, Job::Idle, |_, _| async {
        println!("  listener: clearing workspace");
        Ok(())
    });

    println!("\nRunning input sequence: Start, Complete, Reset");
    let payload = machine
        .input_sequence(vec![Op::Start, Op::Complete, Op::Reset], "job-42")
        .await
        .unwrap();

    println!("\nSequence resolved with payload: {payload}");
    println!("Final state: {:?}", machine.current());
}
