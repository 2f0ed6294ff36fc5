use serde_repr::{Deserialize_repr, Serialize_repr};
use std::fmt;
use std::ops::Neg;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize_repr, Deserialize_repr)]
#[repr(u8)]
pub enum Player {
    One = 1,
    Two = 2,
}

impl Player {
    pub fn from_int(v: u8) -> Option<Self> {
        match v {
            1 => Some(Player::One),
            2 => Some(Player::Two),
            _ => None,
        }
    }

    pub fn to_int(self) -> u8 {
        self as u8
    }

    pub fn opp(self) -> Self {
        match self {
            Player::One => Player::Two,
            Player::Two => Player::One,
        }
    }

    /// Display name used when none was entered.
    pub fn default_name(self) -> &'static str {
        match self {
            Player::One => "Player 1",
            Player::Two => "Player 2",
        }
    }
}

impl Neg for Player {
    type Output = Self;

    fn neg(self) -> Self {
        self.opp()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.default_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_int() {
        assert_eq!(Player::from_int(1), Some(Player::One));
        assert_eq!(Player::from_int(2), Some(Player::Two));
        assert_eq!(Player::from_int(0), None);
        assert_eq!(Player::from_int(3), None);
    }

    #[test]
    fn opponent() {
        assert_eq!(Player::One.opp(), Player::Two);
        assert_eq!(Player::Two.opp(), Player::One);
        assert_eq!(-Player::One, Player::Two);
    }

    #[test]
    fn serializes_as_id() {
        assert_eq!(serde_json::to_value(Player::Two).unwrap(), 2);
        let p: Player = serde_json::from_str("1").unwrap();
        assert_eq!(p, Player::One);
    }
}
