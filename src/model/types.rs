use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid or unsupported element symbol: '{0}'")]
pub struct ParseElementError(String);

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid {kind} label: '{label}'")]
pub struct ParseLabelError {
    kind: &'static str,
    label: String,
}

/// Symbol and standard atomic weight, indexed by `atomic number - 1`.
#[rustfmt::skip]
const ELEMENTS: [(&str, f64); 118] = [
    ("H", 1.008), ("He", 4.0026), ("Li", 6.94), ("Be", 9.0122), ("B", 10.81),
    ("C", 12.011), ("N", 14.007), ("O", 15.999), ("F", 18.998), ("Ne", 20.18),
    ("Na", 22.99), ("Mg", 24.305), ("Al", 26.982), ("Si", 28.085), ("P", 30.974),
    ("S", 32.06), ("Cl", 35.45), ("Ar", 39.948), ("K", 39.098), ("Ca", 40.078),
    ("Sc", 44.956), ("Ti", 47.867), ("V", 50.942), ("Cr", 51.996), ("Mn", 54.938),
    ("Fe", 55.845), ("Co", 58.933), ("Ni", 58.693), ("Cu", 63.546), ("Zn", 65.38),
    ("Ga", 69.723), ("Ge", 72.63), ("As", 74.922), ("Se", 78.971), ("Br", 79.904),
    ("Kr", 83.798), ("Rb", 85.468), ("Sr", 87.62), ("Y", 88.906), ("Zr", 91.224),
    ("Nb", 92.906), ("Mo", 95.96), ("Tc", 98.0), ("Ru", 101.07), ("Rh", 102.91),
    ("Pd", 106.42), ("Ag", 107.87), ("Cd", 112.41), ("In", 114.82), ("Sn", 118.71),
    ("Sb", 121.76), ("Te", 127.6), ("I", 126.9), ("Xe", 131.29), ("Cs", 132.91),
    ("Ba", 137.33), ("La", 138.91), ("Ce", 140.12), ("Pr", 140.91), ("Nd", 144.24),
    ("Pm", 145.0), ("Sm", 150.36), ("Eu", 151.96), ("Gd", 157.25), ("Tb", 158.93),
    ("Dy", 162.5), ("Ho", 164.93), ("Er", 167.26), ("Tm", 168.93), ("Yb", 173.05),
    ("Lu", 174.97), ("Hf", 178.49), ("Ta", 180.95), ("W", 183.84), ("Re", 186.21),
    ("Os", 190.23), ("Ir", 192.22), ("Pt", 195.08), ("Au", 196.97), ("Hg", 200.59),
    ("Tl", 204.38), ("Pb", 207.2), ("Bi", 208.98), ("Po", 209.0), ("At", 210.0),
    ("Rn", 222.0), ("Fr", 223.0), ("Ra", 226.0), ("Ac", 227.0), ("Th", 232.04),
    ("Pa", 231.04), ("U", 238.03), ("Np", 237.0), ("Pu", 244.0), ("Am", 243.0),
    ("Cm", 247.0), ("Bk", 247.0), ("Cf", 251.0), ("Es", 252.0), ("Fm", 257.0),
    ("Md", 258.0), ("No", 259.0), ("Lr", 262.0), ("Rf", 267.0), ("Db", 270.0),
    ("Sg", 271.0), ("Bh", 270.0), ("Hs", 277.0), ("Mt", 276.0), ("Ds", 281.0),
    ("Rg", 280.0), ("Cn", 285.0), ("Nh", 284.0), ("Fl", 289.0), ("Mc", 288.0),
    ("Lv", 293.0), ("Ts", 294.0), ("Og", 294.0),
];

/// A chemical element, H through Og.
///
/// Stored as its atomic number; the associated constants cover the
/// elements that show up in organic chemistry. Anything else is reachable
/// through [`Element::from_atomic_number`] or by parsing the symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Element(u8);

#[allow(non_upper_case_globals)]
impl Element {
    pub const H: Element = Element(1);
    pub const B: Element = Element(5);
    pub const C: Element = Element(6);
    pub const N: Element = Element(7);
    pub const O: Element = Element(8);
    pub const F: Element = Element(9);
    pub const Na: Element = Element(11);
    pub const Mg: Element = Element(12);
    pub const Si: Element = Element(14);
    pub const P: Element = Element(15);
    pub const S: Element = Element(16);
    pub const Cl: Element = Element(17);
    pub const K: Element = Element(19);
    pub const Ca: Element = Element(20);
    pub const Fe: Element = Element(26);
    pub const Zn: Element = Element(30);
    pub const Se: Element = Element(34);
    pub const Br: Element = Element(35);
    pub const I: Element = Element(53);

    pub fn from_atomic_number(z: u8) -> Option<Self> {
        let known = (1..=ELEMENTS.len()).contains(&usize::from(z));
        known.then_some(Element(z))
    }

    #[inline]
    pub fn atomic_number(&self) -> u8 {
        self.0
    }

    pub fn symbol(&self) -> &'static str {
        ELEMENTS[self.index()].0
    }

    pub fn atomic_mass(&self) -> f64 {
        ELEMENTS[self.index()].1
    }

    #[inline]
    fn index(&self) -> usize {
        usize::from(self.0) - 1
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Element {
    type Err = ParseElementError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ELEMENTS
            .iter()
            .position(|(symbol, _)| *symbol == s)
            .map(|i| Element(i as u8 + 1))
            .ok_or_else(|| ParseElementError(s.to_string()))
    }
}

/// Declares a closed chemistry enumeration whose variant order is the
/// canonical categorical encoding order.
macro_rules! labeled_enum {
    (
        $(#[$meta:meta])*
        pub enum $name:ident as $kind:literal {
            $( $(#[$vmeta:meta])* $variant:ident => $label:literal ),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
        pub enum $name {
            $( $(#[$vmeta])* $variant ),+
        }

        impl $name {
            /// Every variant, in canonical encoding order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }

            /// Labels of [`Self::ALL`], in the same order.
            pub fn labels() -> impl Iterator<Item = &'static str> {
                Self::ALL.iter().map(|v| v.label())
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = ParseLabelError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| v.label().eq_ignore_ascii_case(s))
                    .ok_or_else(|| ParseLabelError {
                        kind: $kind,
                        label: s.to_string(),
                    })
            }
        }
    };
}

labeled_enum! {
    /// Tetrahedral chirality tag of an atom.
    pub enum ChiralTag as "chiral tag" {
        #[default]
        Unspecified => "CHI_UNSPECIFIED",
        TetrahedralCw => "CHI_TETRAHEDRAL_CW",
        TetrahedralCcw => "CHI_TETRAHEDRAL_CCW",
        Other => "CHI_OTHER",
    }
}

labeled_enum! {
    /// Orbital hybridization state of an atom.
    pub enum Hybridization as "hybridization" {
        #[default]
        Unspecified => "UNSPECIFIED",
        S => "S",
        Sp => "SP",
        Sp2 => "SP2",
        Sp3 => "SP3",
        Sp3d => "SP3D",
        Sp3d2 => "SP3D2",
        Other => "OTHER",
    }
}

labeled_enum! {
    /// Bond classification, including fractional and dative bond kinds.
    pub enum BondType as "bond type" {
        #[default]
        Unspecified => "UNSPECIFIED",
        Single => "SINGLE",
        Double => "DOUBLE",
        Triple => "TRIPLE",
        Quadruple => "QUADRUPLE",
        Quintuple => "QUINTUPLE",
        Hextuple => "HEXTUPLE",
        OneAndAHalf => "ONEANDAHALF",
        TwoAndAHalf => "TWOANDAHALF",
        ThreeAndAHalf => "THREEANDAHALF",
        FourAndAHalf => "FOURANDAHALF",
        FiveAndAHalf => "FIVEANDAHALF",
        Aromatic => "AROMATIC",
        Ionic => "IONIC",
        Hydrogen => "HYDROGEN",
        ThreeCenter => "THREECENTER",
        DativeOne => "DATIVEONE",
        Dative => "DATIVE",
        DativeL => "DATIVEL",
        DativeR => "DATIVER",
        Other => "OTHER",
        Zero => "ZERO",
    }
}

impl BondType {
    /// Numeric bond order; aromatic bonds count as 1.5.
    pub fn as_f64(&self) -> f64 {
        match self {
            BondType::Single | BondType::DativeOne | BondType::Dative => 1.0,
            BondType::Double => 2.0,
            BondType::Triple => 3.0,
            BondType::Quadruple => 4.0,
            BondType::Quintuple => 5.0,
            BondType::Hextuple => 6.0,
            BondType::OneAndAHalf | BondType::Aromatic => 1.5,
            BondType::TwoAndAHalf => 2.5,
            BondType::ThreeAndAHalf => 3.5,
            BondType::FourAndAHalf => 4.5,
            BondType::FiveAndAHalf => 5.5,
            BondType::Unspecified
            | BondType::Ionic
            | BondType::Hydrogen
            | BondType::ThreeCenter
            | BondType::DativeL
            | BondType::DativeR
            | BondType::Other
            | BondType::Zero => 0.0,
        }
    }

    #[inline]
    pub fn is_dative(&self) -> bool {
        matches!(
            self,
            BondType::DativeOne | BondType::Dative | BondType::DativeL | BondType::DativeR
        )
    }
}

labeled_enum! {
    /// Stereo direction annotation of a bond in a 2D depiction.
    pub enum BondDir as "bond direction" {
        #[default]
        None => "NONE",
        BeginWedge => "BEGINWEDGE",
        BeginDash => "BEGINDASH",
        EndDownRight => "ENDDOWNRIGHT",
        EndUpRight => "ENDUPRIGHT",
        EitherDouble => "EITHERDOUBLE",
        Unknown => "UNKNOWN",
    }
}

labeled_enum! {
    /// Double-bond stereochemistry.
    pub enum BondStereo as "bond stereo" {
        #[default]
        StereoNone => "STEREONONE",
        StereoAny => "STEREOANY",
        StereoZ => "STEREOZ",
        StereoE => "STEREOE",
        StereoCis => "STEREOCIS",
        StereoTrans => "STEREOTRANS",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use std::str::FromStr;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn element_from_str_valid() {
        assert_eq!(Element::from_str("H").unwrap(), Element::H);
        assert_eq!(Element::from_str("Cl").unwrap(), Element::Cl);
        assert_eq!(Element::from_str("Og").unwrap().atomic_number(), 118);
    }

    #[test]
    fn element_from_str_invalid_case() {
        let err = Element::from_str("cl").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid or unsupported element symbol: 'cl'"
        );
    }

    #[test]
    fn element_symbol_mass_and_number_agree() {
        assert_eq!(Element::Na.symbol(), "Na");
        assert_eq!(Element::Na.to_string(), "Na");
        assert_eq!(Element::Na.atomic_number(), 11);
        assert!(approx_eq(Element::C.atomic_mass(), 12.011, 1e-9));
        assert!(approx_eq(Element::Fe.atomic_mass(), 55.845, 1e-9));
    }

    #[test]
    fn element_from_atomic_number_bounds() {
        assert_eq!(Element::from_atomic_number(8), Some(Element::O));
        assert_eq!(Element::from_atomic_number(0), None);
        assert_eq!(Element::from_atomic_number(119), None);
        assert_eq!(Element::from_atomic_number(118).unwrap().symbol(), "Og");
    }

    #[test]
    fn element_table_symbols_are_unique() {
        let symbols: HashSet<_> = ELEMENTS.iter().map(|(s, _)| *s).collect();
        assert_eq!(symbols.len(), ELEMENTS.len());
    }

    #[test]
    fn labeled_enums_have_distinct_labels() {
        assert_eq!(ChiralTag::labels().collect::<HashSet<_>>().len(), 4);
        assert_eq!(Hybridization::labels().collect::<HashSet<_>>().len(), 8);
        assert_eq!(BondType::labels().collect::<HashSet<_>>().len(), 22);
        assert_eq!(BondDir::labels().collect::<HashSet<_>>().len(), 7);
        assert_eq!(BondStereo::labels().collect::<HashSet<_>>().len(), 6);
    }

    #[test]
    fn labeled_enum_order_is_declaration_order() {
        assert_eq!(Hybridization::ALL[3], Hybridization::Sp2);
        assert_eq!(BondType::ALL[12], BondType::Aromatic);
        assert_eq!(BondType::ALL.last(), Some(&BondType::Zero));
    }

    #[test]
    fn labeled_enum_parse_is_case_insensitive() {
        assert_eq!(Hybridization::from_str("sp3").unwrap(), Hybridization::Sp3);
        assert_eq!(BondType::from_str("AROMATIC").unwrap(), BondType::Aromatic);
        let err = BondType::from_str("quad").unwrap_err();
        assert_eq!(err.to_string(), "invalid bond type label: 'quad'");
    }

    #[test]
    fn bond_type_numeric_order() {
        assert!(approx_eq(BondType::Single.as_f64(), 1.0, 1e-12));
        assert!(approx_eq(BondType::Aromatic.as_f64(), 1.5, 1e-12));
        assert!(approx_eq(BondType::Triple.as_f64(), 3.0, 1e-12));
        assert!(approx_eq(BondType::Ionic.as_f64(), 0.0, 1e-12));
        assert!(BondType::Dative.is_dative());
        assert!(!BondType::Double.is_dative());
    }

    #[test]
    fn defaults_are_unspecified() {
        assert_eq!(Hybridization::default(), Hybridization::Unspecified);
        assert_eq!(ChiralTag::default(), ChiralTag::Unspecified);
        assert_eq!(BondDir::default(), BondDir::None);
        assert_eq!(BondStereo::default(), BondStereo::StereoNone);
    }
}
