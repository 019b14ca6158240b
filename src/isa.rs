//! Instruction-class helpers for RV32/RV64 encodings.
//!
//! Vector loads and stores share their major opcodes with scalar FP loads
//! and stores; telling those apart takes more of the encoding than this
//! module looks at. What is decided here is only whether a word carries the
//! bit pattern of a vector instruction at all.

use crate::bits::extract;

/// Major opcode and width-field constants for vector classification.
pub mod opcodes {
    /// LOAD-FP major opcode. Vector loads live in this opcode space.
    pub const LOAD_FP: u64 = 0b0000111;
    /// STORE-FP major opcode. Vector stores live in this opcode space.
    pub const STORE_FP: u64 = 0b0100111;
    /// OP-V major opcode: vector arithmetic and configuration.
    pub const OP_V: u64 = 0b1010111;
    /// Width/funct3 value reserved for non-vector use under OP-V.
    pub const WIDTH_RESERVED: u64 = 0b111;
}

/// Which part of the vector opcode space an encoding falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VectorClass {
    /// Load-type (LOAD-FP opcode space).
    Load,
    /// Store-type (STORE-FP opcode space).
    Store,
    /// Arithmetic/configuration (OP-V).
    Arith,
}

/// Classify `encoding` into a vector instruction class, if it has one.
///
/// Inspects the major opcode (bits [0,6]) and the width field (bits
/// [12,14]) only. Any 64-bit input is accepted; a `Some` result says the
/// word has a vector bit pattern, not that the encoding is otherwise legal.
pub fn classify_vector(encoding: u64) -> Option<VectorClass> {
    let opcode = extract(encoding, 0, 6);
    let width = extract(encoding, 12, 14);

    match opcode {
        opcodes::LOAD_FP => Some(VectorClass::Load),
        opcodes::STORE_FP => Some(VectorClass::Store),
        opcodes::OP_V if width != opcodes::WIDTH_RESERVED => Some(VectorClass::Arith),
        _ => None,
    }
}

/// True when `encoding` carries a vector instruction bit pattern.
#[inline]
pub fn is_vector_instr(encoding: u64) -> bool {
    classify_vector(encoding).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Build a word with the given opcode and width fields, junk elsewhere.
    fn word(opcode: u64, width: u64) -> u64 {
        0xFFFF_0F80 | opcode | (width << 12)
    }

    #[test]
    fn test_load_opcode_is_vector() {
        assert!(is_vector_instr(word(0b0000111, 0b000)));
        // Width does not matter for the load space.
        assert!(is_vector_instr(word(0b0000111, 0b111)));
        assert_eq!(
            classify_vector(word(0b0000111, 0b110)),
            Some(VectorClass::Load)
        );
    }

    #[test]
    fn test_store_opcode_is_vector() {
        assert!(is_vector_instr(word(0b0100111, 0b000)));
        assert_eq!(
            classify_vector(word(0b0100111, 0b101)),
            Some(VectorClass::Store)
        );
    }

    #[test]
    fn test_op_v_depends_on_width() {
        assert!(is_vector_instr(word(0b1010111, 0b000)));
        assert_eq!(
            classify_vector(word(0b1010111, 0b010)),
            Some(VectorClass::Arith)
        );
        // Reserved width under OP-V is not a vector instruction.
        assert!(!is_vector_instr(word(0b1010111, 0b111)));
    }

    #[test]
    fn test_other_opcodes_are_not_vector() {
        assert!(!is_vector_instr(word(0b0000000, 0b000)));
        // ADDI x1, x0, 1
        assert!(!is_vector_instr(0x0010_0093));
        assert_eq!(classify_vector(0x0010_0093), None);
    }

    #[test]
    fn test_real_encodings() {
        // vle32.v v1, (a0): opcode LOAD-FP, width 110
        assert_eq!(classify_vector(0x0205_6087), Some(VectorClass::Load));
        // vse32.v v1, (a0): opcode STORE-FP, width 110
        assert_eq!(classify_vector(0x0205_60A7), Some(VectorClass::Store));
        // vadd.vv v1, v2, v3: opcode OP-V, width 000
        assert_eq!(classify_vector(0x0221_80D7), Some(VectorClass::Arith));
        // vsetvli a0, a1, e32: opcode OP-V, width 111
        assert_eq!(classify_vector(0x0105_F557), None);
    }

    #[test]
    fn test_classification_is_pure() {
        let enc = word(0b1010111, 0b001);
        assert_eq!(is_vector_instr(enc), is_vector_instr(enc));
    }
}
