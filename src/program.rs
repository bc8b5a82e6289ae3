use std::io::{BufRead, Write};

use crate::{
    error::{Error, Result},
    input::{read_sets, SET_COUNT},
    BitSet,
};

/// `((s0 ∪ s1) ∩ s2) \ s3`
pub fn evaluate(s0: &BitSet, s1: &BitSet, s2: &BitSet, s3: &BitSet) -> BitSet {
    s0.union(s1).intersection(s2).difference(s3)
}

/// Read four sets from `reader`, evaluate them and write the members of the
/// result to `writer` on a single line.
pub fn run(reader: impl BufRead, mut writer: impl Write) -> Result<()> {
    let [s0, s1, s2, s3] = read_sets::<SET_COUNT>(reader)?;

    let result = evaluate(&s0, &s1, &s2, &s3);
    tracing::debug!(members = result.len(), "evaluated");

    writeln!(writer, "{result}").map_err(Error::Output)?;
    writer.flush().map_err(Error::Output)
}
