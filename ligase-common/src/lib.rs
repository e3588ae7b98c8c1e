//! Alphabets, validators and small sequence helpers shared by the
//! `ligase-*` crates.

pub mod infer;
pub mod util;
pub mod validator;

pub use validator::{AlphabetError, Validator};

/// The four DNA bases.
pub static DNA_BASES: [char; 4] = ['A', 'C', 'G', 'T'];

/// IUPAC ambiguity characters for DNA.
/// W=AT S=GC M=AC K=GT R=AG Y=CT B=CGT D=AGT H=ACT V=ACG N=ACGT
pub static DNA_AMBIGUITY: [char; 11] = ['W', 'S', 'M', 'K', 'R', 'Y', 'B', 'D', 'H', 'V', 'N'];

/// DNA bases followed by the ambiguity characters.
pub static DNA_CHARACTERS: [char; 15] = [
    'A', 'C', 'G', 'T', 'W', 'S', 'M', 'K', 'R', 'Y', 'B', 'D', 'H', 'V', 'N',
];

/// Complement pairs, ambiguity characters included.
pub static DNA_COMPLEMENTS: [(char, char); 15] = [
    ('A', 'T'),
    ('C', 'G'),
    ('G', 'C'),
    ('T', 'A'),
    ('W', 'W'),
    ('S', 'S'),
    ('M', 'K'),
    ('K', 'M'),
    ('R', 'Y'),
    ('Y', 'R'),
    ('B', 'V'),
    ('D', 'H'),
    ('H', 'D'),
    ('V', 'B'),
    ('N', 'N'),
];

/// The four RNA bases.
pub static RNA_BASES: [char; 4] = ['A', 'C', 'G', 'U'];

/// Single-letter amino acid codes with their three-letter names.
/// `*` is the termination codon.
pub static AA_CODES: [(char, &str); 21] = [
    ('A', "Ala"),
    ('R', "Arg"),
    ('N', "Asn"),
    ('D', "Asp"),
    ('C', "Cys"),
    ('Q', "Gln"),
    ('E', "Glu"),
    ('G', "Gly"),
    ('H', "His"),
    ('I', "Ile"),
    ('L', "Leu"),
    ('K', "Lys"),
    ('M', "Met"),
    ('F', "Phe"),
    ('P', "Pro"),
    ('S', "Ser"),
    ('T', "Thr"),
    ('W', "Trp"),
    ('Y', "Tyr"),
    ('V', "Val"),
    ('*', "Ter"),
];

/// Ambiguous amino acid codes: Asx (D or N), Glx (E or Q), and any.
pub static AA_AMBIGUITY: [(char, &str); 3] = [('B', "Asx"), ('Z', "Glx"), ('X', "Xaa")];

/// Look up the three-letter code for a single-letter amino acid,
/// ambiguity codes included.
pub fn three_letter_code(aa: char) -> Option<&'static str> {
    AA_CODES
        .iter()
        .chain(AA_AMBIGUITY.iter())
        .find(|(c, _)| *c == aa)
        .map(|(_, code)| *code)
}

// --- BEGIN TESTS --- //


// --- END TESTS --- //
