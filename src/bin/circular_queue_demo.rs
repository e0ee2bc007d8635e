//==============================================================================
// Circular Queue Walkthrough
//==============================================================================

use circular_queue::CircularQueue;

fn main() {
    println!("=== Fixed-Capacity Circular Queue ===\n");

    // Example 1: Construction guard
    println!("Example 1: Capacity validation");
    match CircularQueue::<&str>::new(0) {
        Ok(_) => println!("  unexpected success"),
        Err(err) => println!("  new(0) rejected: {}", err),
    }
    let mut queue = CircularQueue::new(3).unwrap();
    println!("  new(3) ok, capacity = {}\n", queue.capacity());

    // Example 2: Fill to capacity, overflow is rejected
    println!("Example 2: Overflow rejection");
    for label in ["A", "B", "C"] {
        match queue.enqueue(label) {
            Ok(()) => println!("  enqueue({}) -> accepted", label),
            Err(rejected) => println!("  enqueue({}) -> rejected (full)", rejected),
        }
    }
    match queue.enqueue("D") {
        Ok(()) => println!("  enqueue(D) -> accepted"),
        Err(rejected) => println!("  enqueue({}) -> rejected (full)", rejected),
    }
    println!("  len = {}, is_full = {}\n", queue.len(), queue.is_full());

    // Example 3: Wraparound reuses freed slots
    println!("Example 3: Wraparound");
    println!("  dequeue() -> {:?}", queue.dequeue());
    match queue.enqueue("D") {
        Ok(()) => println!("  enqueue(D) -> accepted (write cursor wrapped)"),
        Err(_) => println!("  enqueue(D) -> rejected"),
    }
    let snapshot: Vec<&&str> = queue.iter().collect();
    println!("  contents oldest->newest: {:?}\n", snapshot);

    // Example 4: FIFO drain and underflow
    println!("Example 4: Drain and underflow");
    while let Some(item) = queue.dequeue() {
        println!("  dequeue() -> {}", item);
    }
    println!("  dequeue() -> None (empty)");
    println!("  len = {}, is_empty = {}", queue.len(), queue.is_empty());
}
