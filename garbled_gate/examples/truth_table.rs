use std::error::Error;

use circuit::{row_bits, NROWS};
use garbled_gate::{evaluate, garble, new_wire, GateType};
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "truth_table",
    about = "Garble single gates, evaluate every input combination and print the truth table."
)]
pub struct CommandLineOpt {
    /// Gate to garble: and, or, xor. All of them when omitted.
    #[structopt(short, long)]
    pub gate: Option<GateType>,
}

fn truth_table(gate_type: GateType) -> Result<(), Box<dyn Error>> {
    println!("\nTesting {} gate:", gate_type);
    println!("in1 in2 out");
    println!("--- --- ---");

    let in1 = new_wire()?;
    let in2 = new_wire()?;
    let out = new_wire()?;

    let gate = garble(gate_type, &in1, &in2, &out)?;

    for i in 0..NROWS {
        let (b1, b2) = row_bits(i);
        let res = evaluate(&gate, in1.label(b1), in2.label(b2))?;

        if res != out.label(gate_type.truth(b1, b2)) {
            return Err(format!(
                "failed to evaluate {} gate for input combination {}",
                gate_type, i
            )
            .into());
        }
        let value = out
            .decode(&res)
            .ok_or("evaluated label does not belong to the output wire")?;

        println!(" {}   {}   {}", b1 as u8, b2 as u8, value as u8);
    }
    Ok(())
}

// cargo run -p garbled_gate --example truth_table
// cargo run -p garbled_gate --example truth_table -- --gate xor
pub fn main() -> Result<(), Box<dyn Error>> {
    let opt = CommandLineOpt::from_args();
    let gate_types = match opt.gate {
        Some(gate_type) => vec![gate_type],
        None => GateType::ALL.to_vec(),
    };

    for gate_type in gate_types {
        truth_table(gate_type)?;
    }
    Ok(())
}
