//! Tests for logic-network compilation.

mod common;

use std::path::{Path, PathBuf};

use common::run_classical;
use revkit_ir::Netlist;
use revkit_logic::LogicNetwork;
use revkit_synth::{
    BennettSynthesizer, LhrsStats, NetworkReader, SynthError, SynthResult, VerilogReader, lhrs,
    synthesize_network, synthesize_network_with,
};

const FULL_ADDER: &str = r"
// one-bit full adder
module full_adder(a, b, cin, sum, cout);
  input a, b, cin;
  output sum, cout;
  wire p, g;
  assign p = a ^ b;
  assign g = a & b;
  assign sum = p ^ cin;
  assign cout = g | (p & cin);
endmodule
";

fn write_source(dir: &tempfile::TempDir, name: &str, source: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, source).unwrap();
    path
}

/// Check every input assignment against the network's own simulation.
fn assert_computes(network: &LogicNetwork, netlist: &Netlist, stats: &LhrsStats) {
    let expected = network.simulate().unwrap();
    let num_pis = network.num_pis();
    let io_qubits: Vec<u32> = stats
        .input_indexes
        .iter()
        .chain(&stats.output_indexes)
        .copied()
        .collect();

    for x in 0..1u64 << num_pis {
        let mut input = 0u64;
        for (i, &q) in stats.input_indexes.iter().enumerate() {
            input |= (x >> i & 1) << q;
        }
        let output = run_classical(netlist, input);

        for (i, &q) in stats.input_indexes.iter().enumerate() {
            assert_eq!(output >> q & 1, x >> i & 1, "input {i} changed on {x:b}");
        }
        for (tt, &q) in expected.iter().zip(&stats.output_indexes) {
            assert_eq!(output >> q & 1 == 1, tt.get_bit(x), "output q{q} on {x:b}");
        }
        for q in 0..netlist.num_qubits() as u32 {
            if !io_qubits.contains(&q) {
                assert_eq!(output >> q & 1, 0, "ancilla q{q} dirty on {x:b}");
            }
        }
    }
}

#[test]
fn full_adder_from_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "full_adder.v", FULL_ADDER);

    let (netlist, stats) = synthesize_network(&path).unwrap();
    assert_eq!(stats.input_indexes, vec![0, 1, 2]);
    assert_eq!(stats.output_indexes.len(), 2);
    assert!(netlist.is_classical());

    let network = VerilogReader.read(&path).unwrap();
    assert_eq!(stats.num_ancillae, network.num_gates());
    assert_computes(&network, &netlist, &stats);
}

#[test]
fn complemented_outputs_and_constants() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(
        &dir,
        "mixed.v",
        "module mixed(a, b, nand_ab, one, zero, pass);
           input a, b;
           output nand_ab, one, zero, pass;
           assign nand_ab = ~(a & ~b);
           assign one = 1'b1;
           assign zero = 0;
           assign pass = a;
         endmodule",
    );

    let (netlist, stats) = synthesize_network(&path).unwrap();
    let network = VerilogReader.read(&path).unwrap();
    assert_computes(&network, &netlist, &stats);
}

#[test]
fn majority_network() {
    let mut network = LogicNetwork::new();
    let a = network.create_pi("a");
    let b = network.create_pi("b");
    let c = network.create_pi("c");
    let m = network.create_maj(a, !b, c).unwrap();
    network.create_po(m, "m").unwrap();
    network.create_po(!m, "not_m").unwrap();

    let (netlist, stats) = lhrs(&network, &BennettSynthesizer).unwrap();
    assert_eq!(stats.num_ancillae, 1);
    assert_computes(&network, &netlist, &stats);
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = synthesize_network(dir.path().join("missing.v")).unwrap_err();
    match err {
        SynthError::Io { path, .. } => assert!(path.ends_with("missing.v")),
        other => panic!("expected Io error, got {other:?}"),
    }
}

#[test]
fn parse_failure_is_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_source(&dir, "broken.v", "module m(a, y); input a; output y; endmodule");
    assert!(matches!(
        synthesize_network(&path),
        Err(SynthError::Parse(_))
    ));
}

/// A reader that ignores the path and returns a fixed network.
struct FixedReader;

impl NetworkReader for FixedReader {
    fn read(&self, _path: &Path) -> SynthResult<LogicNetwork> {
        let mut network = LogicNetwork::new();
        let a = network.create_pi("a");
        let b = network.create_pi("b");
        let g = network.create_xor(a, b)?;
        network.create_po(g, "y")?;
        Ok(network)
    }
}

#[test]
fn custom_reader_collaborator() {
    let (netlist, stats) =
        synthesize_network_with("unused.v", &FixedReader, &BennettSynthesizer).unwrap();
    assert_eq!(stats.input_indexes, vec![0, 1]);
    assert_eq!(stats.output_indexes, vec![3]);
    let network = FixedReader.read(Path::new("unused.v")).unwrap();
    assert_computes(&network, &netlist, &stats);
}
