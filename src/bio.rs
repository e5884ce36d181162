use phf::phf_ordered_map;
use thiserror::Error;

/// Descriptive attributes of one of the 20 standard amino acids.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AminoAcid {
    pub one_letter: char,
    pub three_letter: &'static str,
    pub full_name: &'static str,
    pub essential: bool,
    pub conditionally_essential: bool,
    /// Adult daily requirement in grams.
    pub daily_requirement_g: Option<f64>,
    /// Share of the body's total amino acid mass, in percent.
    pub human_body_percentage: Option<f64>,
}

impl AminoAcid {
    const fn new(one_letter: char, three_letter: &'static str, full_name: &'static str) -> Self {
        Self {
            one_letter,
            three_letter,
            full_name,
            essential: false,
            conditionally_essential: false,
            daily_requirement_g: None,
            human_body_percentage: None,
        }
    }

    const fn essential(self) -> Self {
        Self { essential: true, ..self }
    }

    const fn conditionally_essential(self) -> Self {
        Self { conditionally_essential: true, ..self }
    }

    const fn daily(self, grams: f64) -> Self {
        Self { daily_requirement_g: Some(grams), ..self }
    }

    const fn body(self, percent: f64) -> Self {
        Self { human_body_percentage: Some(percent), ..self }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Unknown amino acid code: {code}")]
pub struct UnknownCodeError {
    pub code: String,
}

// Built at compile time, so there is nothing to initialize or fail at startup.
pub static AMINO_ACIDS: phf::OrderedMap<char, AminoAcid> = phf_ordered_map! {
    'A' => AminoAcid::new('A', "Ala", "Alanine").daily(1.0).body(8.5),
    'R' => AminoAcid::new('R', "Arg", "Arginine").conditionally_essential().daily(2.5).body(5.1),
    'N' => AminoAcid::new('N', "Asn", "Asparagine").body(4.4),
    'D' => AminoAcid::new('D', "Asp", "Aspartic Acid").body(5.3),
    'C' => AminoAcid::new('C', "Cys", "Cysteine").daily(1.0).body(1.6),
    'E' => AminoAcid::new('E', "Glu", "Glutamic Acid").body(12.3),
    'Q' => AminoAcid::new('Q', "Gln", "Glutamine").body(4.0),
    'G' => AminoAcid::new('G', "Gly", "Glycine").daily(1.5).body(7.2),
    'H' => AminoAcid::new('H', "His", "Histidine").essential().daily(0.7).body(2.1),
    'I' => AminoAcid::new('I', "Ile", "Isoleucine").essential().daily(1.4).body(5.0),
    'L' => AminoAcid::new('L', "Leu", "Leucine").essential().daily(2.7).body(9.0),
    'K' => AminoAcid::new('K', "Lys", "Lysine").essential().daily(2.1).body(6.9),
    'M' => AminoAcid::new('M', "Met", "Methionine").essential().daily(1.1).body(2.3),
    'F' => AminoAcid::new('F', "Phe", "Phenylalanine").essential().daily(1.8).body(3.9),
    'P' => AminoAcid::new('P', "Pro", "Proline").body(5.1),
    'S' => AminoAcid::new('S', "Ser", "Serine").body(6.9),
    'T' => AminoAcid::new('T', "Thr", "Threonine").essential().daily(1.1).body(4.5),
    'W' => AminoAcid::new('W', "Trp", "Tryptophan").essential().daily(0.28).body(1.2),
    'Y' => AminoAcid::new('Y', "Tyr", "Tyrosine").body(3.2),
    'V' => AminoAcid::new('V', "Val", "Valine").essential().daily(1.8).body(7.0),
};

/// Look up an amino acid by its one-letter code, ignoring case.
pub fn lookup(code: &str) -> Result<&'static AminoAcid, UnknownCodeError> {
    let upper = code.to_uppercase();
    let mut chars = upper.chars();
    let found = match (chars.next(), chars.next()) {
        (Some(c), None) => AMINO_ACIDS.get(&c),
        _ => None,
    };
    found.ok_or_else(|| UnknownCodeError { code: code.to_string() })
}

/// All records in table order.
pub fn all() -> impl Iterator<Item = &'static AminoAcid> {
    AMINO_ACIDS.values()
}

/// Sum an optional numeric attribute over the entries that define it.
pub fn total_of(field: fn(&AminoAcid) -> Option<f64>) -> f64 {
    all().filter_map(field).sum()
}

pub fn total_human_body_percentage() -> f64 {
    total_of(|aa| aa.human_body_percentage)
}
