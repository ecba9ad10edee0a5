//! Table-Driven Machine
//!
//! This example demonstrates compiling a machine from a declarative table of
//! state and input names, the shape a YAML or JSON front-end would produce.
//!
//! Key concepts:
//! - The `MachineTable` configuration structure
//! - Compilation with name validation
//! - One definition instantiating independent machines
//! - Synchronous rejection of invalid inputs
//!
//! Run with: cargo run --example table_driven

use std::collections::HashMap;

use switchyard::table::{MachineTable, SignalName, StateName};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    println!("=== Table-Driven Machine ===\n");

    let mut rows: HashMap<String, HashMap<String, Vec<String>>> = HashMap::new();
    rows.insert(
        "locked".to_owned(),
        HashMap::from([("coin".to_owned(), vec!["unlocked".to_owned()])]),
    );
    rows.insert(
        "unlocked".to_owned(),
        HashMap::from([("push".to_owned(), vec!["locked".to_owned()])]),
    );
    let table = MachineTable {
        states: vec!["locked".to_owned(), "unlocked".to_owned()],
        inputs: vec!["coin".to_owned(), "push".to_owned()],
        table: rows,
    };

    let definition = table.compile().unwrap();
    let turnstile = definition.machine();
    println!("Initial state: {}", turnstile.current());

    turnstile.on_fn(
        StateName::from("locked"),
        StateName::from("unlocked"),
        |_, _| async {
            println!("  listener: unlocking the arm");
            Ok(())
        },
    );

    println!("\nInserting a coin...");
    turnstile
        .input(SignalName::from("coin"), ())
        .unwrap()
        .await
        .unwrap();
    println!("State: {}", turnstile.current());

    println!("\nInserting another coin (invalid while unlocked):");
    match turnstile.input(SignalName::from("coin"), ()) {
        Ok(_) => unreachable!("coin is not routed from unlocked"),
        Err(err) => println!("  rejected synchronously: {err}"),
    }
    println!("State unchanged: {}", turnstile.current());

    println!("\nPushing through...");
    turnstile
        .input(SignalName::from("push"), ())
        .unwrap()
        .await
        .unwrap();
    println!("Final state: {}", turnstile.current());
}
