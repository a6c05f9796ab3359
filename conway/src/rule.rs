//! Transition rule for B3/S23.

/// Live neighbor counts that keep a live cell alive.
pub const SURVIVAL: [u8; 2] = [2, 3];
/// Live neighbor count that brings a dead cell to life.
pub const BIRTH: u8 = 3;

/// Next state of a cell given its current state and live neighbor count.
#[inline]
pub const fn next_state(alive: bool, live_neighbors: u8) -> bool {
    match (alive, live_neighbors) {
        (true, 2) | (true, 3) => true, // Survival
        (false, BIRTH) => true,        // Birth
        _ => false,                    // Death or stays dead
    }
}
