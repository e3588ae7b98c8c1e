use lazy_static::lazy_static;

use crate::DNA_COMPLEMENTS;

lazy_static! {
    static ref COMPLEMENT: [char; 128] = {
        let mut comp = ['\0'; 128];
        for (v, c) in comp.iter_mut().enumerate() {
            *c = v as u8 as char;
        }
        for (a, b) in DNA_COMPLEMENTS {
            comp[a as usize] = b;
        }
        comp
    };
}

/// Complement a single base. Characters without a complement are returned
/// unchanged.
#[inline]
pub fn complement(c: char) -> char {
    if c.is_ascii() {
        COMPLEMENT[c as usize]
    } else {
        c
    }
}

/// Reverse-complement a DNA string, keeping any character that has no
/// complement.
pub fn reverse_complement(seq: &str) -> String {
    seq.chars().rev().map(complement).collect()
}

pub fn convert_rna_to_dna(seq: &str) -> String {
    seq.replace('U', "T")
}

pub fn convert_dna_to_rna(seq: &str) -> String {
    seq.replace('T', "U")
}

// --- BEGIN TESTS --- //

#[cfg(test)]
mod tests {
    use crate::util;

    #[test]
    fn complement_bases() {
        assert_eq!(util::complement('A'), 'T');
        assert_eq!(util::complement('M'), 'K');
        assert_eq!(util::complement('N'), 'N');
        // lowercase and foreign characters pass through
        assert_eq!(util::complement('a'), 'a');
        assert_eq!(util::complement('.'), '.');
        assert_eq!(util::complement('µ'), 'µ');
    }

    #[test]
    fn reverse_complement() {
        assert_eq!(util::reverse_complement("AAGNCT"), "AGNCTT");
        assert_eq!(util::reverse_complement("ACGTWSMKRYBDHVN"), "NBDHVRYMKSWACGT");
        assert_eq!(util::reverse_complement("A-C"), "G-T");
        assert_eq!(util::reverse_complement(""), "");
    }

    #[test]
    fn reverse_complement_is_an_involution() {
        let s = "GATTACAWSMKRYBDHVN";
        assert_eq!(util::reverse_complement(&util::reverse_complement(s)), s);
    }

    #[test]
    fn rna_dna_conversion() {
        assert_eq!(util::convert_rna_to_dna("ACGUU"), "ACGTT");
        assert_eq!(util::convert_dna_to_rna("ACGTT"), "ACGUU");
    }
}

// --- END TESTS --- //
