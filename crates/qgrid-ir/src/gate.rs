//! Gate vocabulary.
//!
//! The editor works with a closed set of ten gates: eight single-qubit gates
//! and two controlled gates. Gates are named on the wire by their upper-case
//! symbol (`"H"`, `"R8"`, `"CX"`, ...).

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::IrError;

/// Single-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum UnaryGate {
    /// Hadamard gate.
    H,
    /// Pauli-X gate.
    X,
    /// Pauli-Y gate.
    Y,
    /// Pauli-Z gate.
    Z,
    /// S gate (sqrt(Z)).
    S,
    /// T gate (fourth root of Z).
    T,
    /// Eighth root of Z.
    R8,
    /// X followed by H, registered as a composite gate in the simulator.
    XH,
}

impl UnaryGate {
    /// All unary gates in palette order.
    pub const ALL: [UnaryGate; 8] = [
        UnaryGate::H,
        UnaryGate::X,
        UnaryGate::Y,
        UnaryGate::Z,
        UnaryGate::S,
        UnaryGate::T,
        UnaryGate::R8,
        UnaryGate::XH,
    ];

    /// Get the symbol of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            UnaryGate::H => "H",
            UnaryGate::X => "X",
            UnaryGate::Y => "Y",
            UnaryGate::Z => "Z",
            UnaryGate::S => "S",
            UnaryGate::T => "T",
            UnaryGate::R8 => "R8",
            UnaryGate::XH => "XH",
        }
    }
}

/// Controlled two-qubit gates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BinaryGate {
    /// Controlled-X (CNOT) gate.
    CX,
    /// Controlled-Z gate.
    CZ,
}

impl BinaryGate {
    /// All binary gates in palette order.
    pub const ALL: [BinaryGate; 2] = [BinaryGate::CX, BinaryGate::CZ];

    /// Get the symbol of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            BinaryGate::CX => "CX",
            BinaryGate::CZ => "CZ",
        }
    }
}

/// Any gate in the vocabulary.
///
/// This is the type used for palettes and allow-lists, where unary and binary
/// gates are listed side by side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    /// A single-qubit gate.
    Unary(UnaryGate),
    /// A controlled gate.
    Binary(BinaryGate),
}

impl GateKind {
    /// The palette: every gate a user can drag onto the grid.
    pub const PALETTE: [GateKind; 10] = [
        GateKind::Unary(UnaryGate::H),
        GateKind::Unary(UnaryGate::X),
        GateKind::Unary(UnaryGate::Y),
        GateKind::Unary(UnaryGate::Z),
        GateKind::Unary(UnaryGate::S),
        GateKind::Unary(UnaryGate::T),
        GateKind::Unary(UnaryGate::R8),
        GateKind::Unary(UnaryGate::XH),
        GateKind::Binary(BinaryGate::CX),
        GateKind::Binary(BinaryGate::CZ),
    ];

    /// Get the symbol of this gate.
    #[inline]
    pub fn name(self) -> &'static str {
        match self {
            GateKind::Unary(g) => g.name(),
            GateKind::Binary(g) => g.name(),
        }
    }

    /// Check if this gate needs a control row and an action row.
    #[inline]
    pub fn is_binary(self) -> bool {
        matches!(self, GateKind::Binary(_))
    }

    /// Name used for this gate by the state simulator.
    pub fn simulator_name(self) -> &'static str {
        match self {
            GateKind::Unary(UnaryGate::H) => "h",
            GateKind::Unary(UnaryGate::X) => "x",
            GateKind::Unary(UnaryGate::XH) => "xh",
            GateKind::Unary(UnaryGate::Y) => "y",
            GateKind::Unary(UnaryGate::Z) => "z",
            GateKind::Unary(UnaryGate::S) => "s",
            GateKind::Unary(UnaryGate::T) => "t",
            GateKind::Unary(UnaryGate::R8) => "r8",
            GateKind::Binary(BinaryGate::CX) => "cx",
            GateKind::Binary(BinaryGate::CZ) => "cz",
        }
    }
}

impl From<UnaryGate> for GateKind {
    fn from(gate: UnaryGate) -> Self {
        GateKind::Unary(gate)
    }
}

impl From<BinaryGate> for GateKind {
    fn from(gate: BinaryGate) -> Self {
        GateKind::Binary(gate)
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for GateKind {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        GateKind::PALETTE
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| IrError::UnknownGate(s.to_string()))
    }
}

impl FromStr for UnaryGate {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<GateKind>()? {
            GateKind::Unary(g) => Ok(g),
            GateKind::Binary(_) => Err(IrError::UnknownGate(s.to_string())),
        }
    }
}

impl FromStr for BinaryGate {
    type Err = IrError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<GateKind>()? {
            GateKind::Binary(g) => Ok(g),
            GateKind::Unary(_) => Err(IrError::UnknownGate(s.to_string())),
        }
    }
}

impl Serialize for GateKind {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for GateKind {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        name.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gate_names_round_trip() {
        for kind in GateKind::PALETTE {
            assert_eq!(kind.name().parse::<GateKind>().unwrap(), kind);
        }
        assert!("CCX".parse::<GateKind>().is_err());
        assert!("h".parse::<GateKind>().is_err());
    }

    #[test]
    fn test_binary_classification() {
        assert!(GateKind::Binary(BinaryGate::CX).is_binary());
        assert!(!GateKind::Unary(UnaryGate::XH).is_binary());
        assert!("CX".parse::<UnaryGate>().is_err());
        assert_eq!("CZ".parse::<BinaryGate>().unwrap(), BinaryGate::CZ);
    }

    #[test]
    fn test_simulator_names() {
        assert_eq!(GateKind::from(UnaryGate::R8).simulator_name(), "r8");
        assert_eq!(GateKind::from(BinaryGate::CZ).simulator_name(), "cz");
    }

    #[test]
    fn test_gate_kind_serde() {
        let json = serde_json::to_string(&GateKind::PALETTE).unwrap();
        assert_eq!(json, r#"["H","X","Y","Z","S","T","R8","XH","CX","CZ"]"#);
        let back: Vec<GateKind> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GateKind::PALETTE);
        assert!(serde_json::from_str::<GateKind>(r#""SWAP""#).is_err());
    }
}
