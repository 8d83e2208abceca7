//! Prizes and the ordered prize board consumed by a draw.

use alloc::string::String;
use alloc::vec::Vec;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Prize {
    /// 1-based rank; prize 1 is drawn first.
    pub position: u32,
    pub name: String,
}

impl Prize {
    pub fn new(position: u32, name: &str) -> Self {
        Self {
            position,
            name: String::from(name),
        }
    }
}

/// Prizes of one raffle ordered by position.
///
/// The draw only needs the count; names are kept for the winner banner when
/// the collaborator supplied them.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PrizeBoard {
    count: u32,
    prizes: Vec<Prize>,
}

impl PrizeBoard {
    /// A board that only knows how many prizes there are.
    pub const fn with_count(count: u32) -> Self {
        Self {
            count,
            prizes: Vec::new(),
        }
    }

    /// Build from an unordered prize list. Duplicate positions keep the
    /// first entry seen.
    pub fn from_prizes(mut prizes: Vec<Prize>) -> Self {
        prizes.sort_by_key(|p| p.position);
        prizes.dedup_by_key(|p| p.position);
        Self {
            count: prizes.len() as u32,
            prizes,
        }
    }

    #[inline]
    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn at_position(&self, position: u32) -> Option<&Prize> {
        self.prizes
            .binary_search_by_key(&position, |p| p.position)
            .ok()
            .map(|idx| &self.prizes[idx])
    }

    pub fn prizes(&self) -> &[Prize] {
        &self.prizes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    #[test]
    fn test_board_orders_by_position() {
        let board = PrizeBoard::from_prizes(vec![
            Prize::new(2, "Bicycle"),
            Prize::new(1, "Car"),
            Prize::new(3, "Blender"),
        ]);
        assert_eq!(board.count(), 3);
        assert_eq!(board.at_position(1).map(|p| p.name.as_str()), Some("Car"));
        assert_eq!(board.at_position(3).map(|p| p.name.as_str()), Some("Blender"));
        assert!(board.at_position(4).is_none());
    }

    #[test]
    fn test_count_only_board_has_no_names() {
        let board = PrizeBoard::with_count(5);
        assert_eq!(board.count(), 5);
        assert!(board.at_position(1).is_none());
    }
}
