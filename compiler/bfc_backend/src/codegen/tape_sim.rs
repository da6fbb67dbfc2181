// SPDX-License-Identifier: MIT
// Copyright (c) 2023 Kagati Foundation

use bfc_target::TapeConfig;

/// Emission strategy for one pointer-move run, decided entirely at
/// translation time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerMove {
    /// Add the run's count to the pointer register; no wraparound.
    Advance(u64),

    /// Subtract the run's count from the pointer register; no
    /// wraparound.
    Retreat(u64),

    /// The run crosses a tape boundary: load the exact wrapped offset,
    /// already computed here.
    Reload(u64),
}

/// Compile-time model of the data pointer. The pointer always stays in
/// `[0, size)`; movement is data-independent, so the tracked value is
/// the runtime value.
#[derive(Debug, Clone, Copy)]
pub struct TapeState {
    size: u64,
    ptr: u64,
}

impl TapeState {
    pub fn new(config: TapeConfig) -> Self {
        Self { size: config.size, ptr: 0 }
    }

    pub fn pointer(&self) -> u64 {
        self.ptr
    }

    pub fn move_right(&mut self, count: usize) -> PointerMove {
        let size = self.size as u128;
        let reach = self.ptr as u128 + count as u128;
        let target = (reach % size) as u64;

        let mv = if reach >= size {
            PointerMove::Reload(target)
        } else {
            PointerMove::Advance(count as u64)
        };
        self.ptr = target;
        mv
    }

    pub fn move_left(&mut self, count: usize) -> PointerMove {
        let effective = (count as u128 % self.size as u128) as u64;
        let target = if effective > self.ptr {
            // size <= 2^32, so this sum cannot overflow
            self.ptr + self.size - effective
        } else {
            self.ptr - effective
        };

        let mv = if count as u128 > self.ptr as u128 {
            PointerMove::Reload(target)
        } else {
            PointerMove::Retreat(count as u64)
        };
        self.ptr = target;
        mv
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tape(size: u64) -> TapeState {
        TapeState::new(TapeConfig { size })
    }

    #[test]
    fn test_plain_moves_do_not_wrap() {
        let mut t = tape(30720);
        assert_eq!(t.move_right(5), PointerMove::Advance(5));
        assert_eq!(t.pointer(), 5);
        assert_eq!(t.move_left(3), PointerMove::Retreat(3));
        assert_eq!(t.pointer(), 2);
    }

    #[test]
    fn test_multi_step_run_crossing_the_boundary() {
        // tape of 4, pointer at 3, ">>>": wrapped to (3+3) mod 4 = 2,
        // not reset to zero
        let mut t = tape(4);
        t.move_right(3);
        assert_eq!(t.move_right(3), PointerMove::Reload(2));
        assert_eq!(t.pointer(), 2);
    }

    #[test]
    fn test_reaching_the_upper_boundary_wraps_to_zero() {
        let mut t = tape(4);
        assert_eq!(t.move_right(4), PointerMove::Reload(0));
        assert_eq!(t.pointer(), 0);
    }

    #[test]
    fn test_single_step_left_from_zero() {
        let mut t = tape(4);
        assert_eq!(t.move_left(1), PointerMove::Reload(3));
        assert_eq!(t.pointer(), 3);
    }

    #[test]
    fn test_left_to_exactly_zero_is_not_a_wrap() {
        let mut t = tape(8);
        t.move_right(5);
        assert_eq!(t.move_left(5), PointerMove::Retreat(5));
        assert_eq!(t.pointer(), 0);
    }

    #[test]
    fn test_count_larger_than_tape_size() {
        let mut t = tape(4);
        // 11 mod 4 = 3
        assert_eq!(t.move_right(11), PointerMove::Reload(3));
        assert_eq!(t.pointer(), 3);
        // 3 - 10 = -7, mod 4 = 1
        assert_eq!(t.move_left(10), PointerMove::Reload(1));
        assert_eq!(t.pointer(), 1);
    }

    #[test]
    fn test_net_movement_matches_modular_arithmetic() {
        let mut t = tape(7);
        let moves: [(bool, usize); 6] = [
            (true, 3),
            (false, 5),
            (true, 20),
            (true, 1),
            (false, 2),
            (true, 9),
        ];
        let mut net: i64 = 0;
        for (right, count) in moves {
            if right {
                t.move_right(count);
                net += count as i64;
            } else {
                t.move_left(count);
                net -= count as i64;
            }
        }
        assert_eq!(t.pointer(), net.rem_euclid(7) as u64);
    }

    #[test]
    fn test_single_cell_tape_always_reloads_zero() {
        let mut t = tape(1);
        assert_eq!(t.move_right(3), PointerMove::Reload(0));
        assert_eq!(t.move_left(1), PointerMove::Reload(0));
        assert_eq!(t.pointer(), 0);
    }
}
