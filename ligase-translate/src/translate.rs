use crate::{standard_table, CodonTable, TranslateError};

/// Translate a DNA sequence into single-letter amino acid codes.
///
/// Codons are read from `frame` (0, 1 or 2) onward, using the standard
/// table when `table` is `None`. The second element holds the last
/// `(len - frame) mod 3` bases of the input (floor modulo), or `None` when
/// that count is zero. A frame past the end of the sequence yields no
/// codons and a remainder that may be empty.
pub fn translate_dna(
    seq: &str,
    table: Option<&CodonTable>,
    frame: usize,
) -> Result<(String, Option<String>), TranslateError> {
    if frame > 2 {
        return Err(TranslateError::InvalidFrame(frame));
    }
    let table = table.unwrap_or(standard_table());

    let bases: Vec<char> = seq.chars().collect();
    let len = bases.len();
    let rem = (len as isize - frame as isize).rem_euclid(3) as usize;
    let codon_end = len.saturating_sub(rem);
    let codons = if frame < codon_end {
        &bases[frame..codon_end]
    } else {
        &[][..]
    };

    let mut protein = String::with_capacity(codons.len() / 3);
    for (i, codon) in codons.chunks(3).enumerate() {
        let codon: String = codon.iter().collect();
        match table.get(&codon) {
            Some(aa) => protein.push(aa),
            None => {
                return Err(TranslateError::CodonNotFound {
                    codon,
                    position: frame + i * 3 + 1,
                })
            }
        }
    }

    let remainder = match rem {
        0 => None,
        _ => Some(bases[codon_end..].iter().collect()),
    };
    Ok((protein, remainder))
}
