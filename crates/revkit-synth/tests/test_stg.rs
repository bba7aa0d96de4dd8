//! Tests for single-target gate synthesis.

mod common;

use common::assert_basis_map;
use proptest::prelude::*;
use revkit_ir::{Netlist, QubitId};
use revkit_logic::TruthTable;
use revkit_synth::{PPRM_MAX_VARS, StgKind, StgSynthesis, SynthError, synthesize_oracle};

/// Every basis input `|x⟩|y⟩` must go to `|x⟩|y ⊕ f(x)⟩` with no phase.
fn assert_oracle(netlist: &Netlist, function: &TruthTable) {
    let n = function.num_vars();
    assert_eq!(netlist.num_qubits(), n as usize + 1);
    for x in 0..function.num_bits() {
        for y in 0..2u64 {
            let input = (x | y << n) as usize;
            let out_y = y ^ u64::from(function.get_bit(x));
            let output = (x | out_y << n) as usize;
            assert_basis_map(netlist, input, output, 0.0);
        }
    }
}

// ---------------------------------------------------------------------------
// Fixed functions
// ---------------------------------------------------------------------------

#[test]
fn and_oracle_for_every_kind() {
    let and = TruthTable::from_binary("1000").unwrap();
    for kind in StgKind::ALL {
        let netlist = synthesize_oracle(&and, kind).unwrap();
        assert_oracle(&netlist, &and);
    }
}

#[test]
fn majority_oracle_for_every_kind() {
    let maj = TruthTable::from_hex(3, "e8").unwrap();
    for kind in StgKind::ALL {
        let netlist = synthesize_oracle(&maj, kind).unwrap();
        assert_oracle(&netlist, &maj);
    }
}

#[test]
fn constant_functions() {
    let zero = TruthTable::new(2).unwrap();
    let one = !&zero;
    for kind in StgKind::ALL {
        let netlist = synthesize_oracle(&zero, kind).unwrap();
        assert_oracle(&netlist, &zero);
        let netlist = synthesize_oracle(&one, kind).unwrap();
        assert_oracle(&netlist, &one);
    }
}

#[test]
fn zero_variable_function() {
    let one = TruthTable::from_binary("1").unwrap();
    for kind in StgKind::ALL {
        let netlist = synthesize_oracle(&one, kind).unwrap();
        assert_eq!(netlist.num_qubits(), 1);
        assert_oracle(&netlist, &one);
    }
}

#[test]
fn reed_muller_kinds_are_classical() {
    let f = TruthTable::from_hex(4, "6a3c").unwrap();
    assert!(synthesize_oracle(&f, StgKind::Pkrm).unwrap().is_classical());
    assert!(synthesize_oracle(&f, StgKind::Pprm).unwrap().is_classical());
}

#[test]
fn pprm_never_uses_more_monomials_than_pkrm() {
    let f = TruthTable::from_hex(4, "fffe").unwrap();
    let count_mcx = |kind| {
        synthesize_oracle(&f, kind)
            .unwrap()
            .gates()
            .iter()
            .filter(|g| g.target == QubitId(4))
            .count()
    };
    assert!(count_mcx(StgKind::Pprm) <= count_mcx(StgKind::Pkrm));
}

#[test]
fn embedding_on_custom_qubits() {
    // f = a ∧ ¬b placed on qubits (3, 0) with target 1
    let f = TruthTable::from_binary("0010").unwrap();
    let qubits = [QubitId(3), QubitId(0), QubitId(1)];
    for kind in StgKind::ALL {
        let mut netlist = Netlist::with_qubits("custom", 4);
        kind.synthesize(&mut netlist, &qubits, &f).unwrap();
        for input in 0..16usize {
            let a = input >> 3 & 1 == 1;
            let b = input & 1 == 1;
            let flip = usize::from(a && !b) << 1;
            assert_basis_map(&netlist, input, input ^ flip, 0.0);
        }
    }
}

#[test]
fn pprm_rejects_functions_above_the_polarity_bound() {
    let wide = TruthTable::new(PPRM_MAX_VARS + 1).unwrap();
    assert!(matches!(
        synthesize_oracle(&wide, StgKind::Pprm),
        Err(SynthError::PolaritySearchTooLarge { .. })
    ));
    // Kinds without a polarity search accept the same function.
    let netlist = synthesize_oracle(&wide, StgKind::Pkrm).unwrap();
    assert_eq!(netlist.num_gates(), 0);
}

#[test]
fn unknown_kind_is_rejected() {
    assert!(matches!(
        "spectral".parse::<StgKind>(),
        Err(SynthError::UnknownStgKind(_))
    ));
    assert!(matches!("".parse::<StgKind>(), Err(SynthError::UnknownStgKind(_))));
}

// ---------------------------------------------------------------------------
// Equivalence across strategies
// ---------------------------------------------------------------------------

fn arb_truth_table() -> impl Strategy<Value = TruthTable> {
    (1u32..=4).prop_flat_map(|n| {
        prop::collection::vec(any::<bool>(), 1usize << n)
            .prop_map(move |bits| TruthTable::from_bits(n, bits).unwrap())
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(48))]

    #[test]
    fn all_kinds_realize_the_function(function in arb_truth_table()) {
        for kind in StgKind::ALL {
            let netlist = synthesize_oracle(&function, kind).unwrap();
            assert_oracle(&netlist, &function);
        }
    }
}
