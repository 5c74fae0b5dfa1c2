use core::fmt;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::errors::{InvalidArgument, InvalidNucleotide};

/// A DNA nucleotide base.
///
/// `Nucleotide` is a Copyable representation of the four DNA bases backed by
/// a single byte. The alphabet is closed: there is no way to construct any
/// other value, and conversions from bytes/chars reject unknown symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nucleotide {
    A = 0,
    T = 1,
    C = 2,
    G = 3,
}

impl Nucleotide {
    /// Every base, in the order the random generator indexes them.
    pub const ALL: [Self; 4] = [Self::A, Self::T, Self::C, Self::G];

    /// Draw one base uniformly at random (probability 1/4 each).
    ///
    /// Every call is an independent draw from `rng`.
    #[inline]
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Convert from an ASCII byte (`b'A'`, `b'C'`, `b'G'`, `b'T'`) and also
    /// accepts lowercase bytes. Returns `None` for non-standard characters.
    #[inline]
    pub const fn from_ascii(byte: u8) -> Option<Self> {
        match byte {
            b'A' | b'a' => Some(Self::A),
            b'C' | b'c' => Some(Self::C),
            b'G' | b'g' => Some(Self::G),
            b'T' | b't' => Some(Self::T),
            _ => None,
        }
    }

    /// Convert to an uppercase ASCII byte representing this nucleotide.
    #[inline(always)]
    pub const fn to_ascii(self) -> u8 {
        match self {
            Self::A => b'A',
            Self::C => b'C',
            Self::G => b'G',
            Self::T => b'T',
        }
    }

    /// Convert to an uppercase `char` representing this nucleotide.
    #[inline(always)]
    pub const fn to_char(self) -> char {
        self.to_ascii() as char
    }

    /// Return the base-pairing partner (A <-> T, C <-> G).
    #[inline(always)]
    pub const fn complement(self) -> Self {
        match self {
            Self::A => Self::T,
            Self::T => Self::A,
            Self::C => Self::G,
            Self::G => Self::C,
        }
    }

    /// Return true for the strong (G or C) bases counted by GC content.
    #[inline(always)]
    pub const fn is_gc(self) -> bool {
        matches!(self, Self::G | Self::C)
    }
}

impl TryFrom<u8> for Nucleotide {
    type Error = InvalidNucleotide;

    fn try_from(byte: u8) -> Result<Self, Self::Error> {
        Self::from_ascii(byte).ok_or(InvalidNucleotide(byte))
    }
}

impl TryFrom<char> for Nucleotide {
    type Error = InvalidArgument;

    fn try_from(c: char) -> Result<Self, Self::Error> {
        let byte = u8::try_from(c).map_err(|_| InvalidArgument::InvalidChar(c))?;
        Ok(Self::try_from(byte)?)
    }
}

impl From<Nucleotide> for char {
    #[inline(always)]
    fn from(nuc: Nucleotide) -> char {
        nuc.to_char()
    }
}

impl fmt::Display for Nucleotide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_xoshiro::Xoshiro256PlusPlus;

    #[test]
    fn test_nucleotide_from_ascii() {
        // Uppercase
        assert_eq!(Nucleotide::from_ascii(b'A'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b'C'), Some(Nucleotide::C));
        assert_eq!(Nucleotide::from_ascii(b'G'), Some(Nucleotide::G));
        assert_eq!(Nucleotide::from_ascii(b'T'), Some(Nucleotide::T));

        // Lowercase
        assert_eq!(Nucleotide::from_ascii(b'a'), Some(Nucleotide::A));
        assert_eq!(Nucleotide::from_ascii(b't'), Some(Nucleotide::T));

        // Invalid
        assert_eq!(Nucleotide::from_ascii(b'N'), None);
        assert_eq!(Nucleotide::from_ascii(b'U'), None);
        assert_eq!(Nucleotide::from_ascii(b' '), None);
    }

    #[test]
    fn test_nucleotide_to_char() {
        assert_eq!(Nucleotide::A.to_char(), 'A');
        assert_eq!(Nucleotide::C.to_char(), 'C');
        assert_eq!(Nucleotide::G.to_char(), 'G');
        assert_eq!(Nucleotide::T.to_char(), 'T');
    }

    #[test]
    fn test_nucleotide_complement() {
        assert_eq!(Nucleotide::A.complement(), Nucleotide::T);
        assert_eq!(Nucleotide::T.complement(), Nucleotide::A);
        assert_eq!(Nucleotide::C.complement(), Nucleotide::G);
        assert_eq!(Nucleotide::G.complement(), Nucleotide::C);

        for base in Nucleotide::ALL {
            assert_eq!(base.complement().complement(), base);
        }
    }

    #[test]
    fn test_nucleotide_is_gc() {
        assert!(!Nucleotide::A.is_gc());
        assert!(Nucleotide::C.is_gc());
        assert!(Nucleotide::G.is_gc());
        assert!(!Nucleotide::T.is_gc());
    }

    #[test]
    fn test_nucleotide_try_from() {
        assert_eq!(Nucleotide::try_from(b'A'), Ok(Nucleotide::A));
        assert_eq!(Nucleotide::try_from('g'), Ok(Nucleotide::G));
        assert_eq!(Nucleotide::try_from(b'X').unwrap_err().0, b'X');
        assert_eq!(Nucleotide::try_from('n'), Err(InvalidArgument::InvalidChar('n')));
    }

    #[test]
    fn test_nucleotide_try_from_non_ascii_char() {
        // Latin-1 and wider code points keep the offending character
        assert_eq!(Nucleotide::try_from('é'), Err(InvalidArgument::InvalidChar('é')));
        assert_eq!(Nucleotide::try_from('Ā'), Err(InvalidArgument::InvalidChar('Ā')));
        assert_eq!(
            Nucleotide::try_from('→').unwrap_err().to_string(),
            "Invalid character in strand: '→'"
        );
    }

    #[test]
    fn test_random_covers_alphabet_uniformly() {
        let mut rng = Xoshiro256PlusPlus::seed_from_u64(42);
        let mut counts = [0usize; 4];
        for _ in 0..40_000 {
            let base = Nucleotide::random(&mut rng);
            let idx = Nucleotide::ALL.iter().position(|&b| b == base).unwrap();
            counts[idx] += 1;
        }
        // Each base expects 10_000 draws; allow generous slack.
        for count in counts {
            assert!((9_000..11_000).contains(&count), "skewed count {count}");
        }
    }

    #[test]
    fn test_nucleotide_size() {
        assert_eq!(std::mem::size_of::<Nucleotide>(), 1);
    }
}
