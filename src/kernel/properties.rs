//! Property vocabulary: user phrasings -> canonical PubChem property names,
//! and canonical names -> user-facing labels.
//!
//! Lookups are exact after normalization (trim, lower-case, collapse runs of
//! whitespace). Nothing is guessed.

pub const FLASH_CARD: &str = "FlashCard";
pub const SYNONYMS: &str = "synonyms";
pub const MASS_UNITS: &str = "g/mol";

/// Properties fetched for a flash card, in display request order.
pub const FLASH_CARD_PROPERTIES: &[&str] = &[
    "MolecularFormula",
    "MolecularWeight",
    "IUPACName",
    "CanonicalSMILES",
    "IsomericSMILES",
    "InChI",
    "ExactMass",
    "XLogP",
    "MonoisotopicMass",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PropertyInfo {
    pub canonical: &'static str,
    pub label: &'static str,
    pub unit: Option<&'static str>,
}

const fn prop(canonical: &'static str, label: &'static str) -> PropertyInfo {
    PropertyInfo { canonical, label, unit: None }
}

const fn mass(canonical: &'static str, label: &'static str) -> PropertyInfo {
    PropertyInfo { canonical, label, unit: Some(MASS_UNITS) }
}

pub const PROPERTY_CATALOG: &[PropertyInfo] = &[
    prop("MolecularFormula", "Molecular Formula"),
    mass("MolecularWeight", "Molecular Weight"),
    prop("CanonicalSMILES", "Canonical Smiles"),
    prop("IsomericSMILES", "Isomeric Smiles"),
    prop("InChI", "International Chemical Identifier"),
    prop("InChIKey", "International Chemical Identifier Key"),
    prop("IUPACName", "IUPAC Name"),
    prop("XLogP", "XLogP3-AA"),
    mass("ExactMass", "Exact Mass"),
    mass("MonoisotopicMass", "Monoisotopic Mass"),
    prop("TPSA", "Topological Polar Surface Area"),
    prop("Complexity", "Complexity"),
    prop("Charge", "Charge"),
    prop("HBondDonorCount", "Hydrogen Bond Donor Count"),
    prop("HBondAcceptorCount", "Hydrogen Bond Acceptor Count"),
    prop("RotatableBondCount", "Rotatable Bond Count"),
    prop("HeavyAtomCount", "Heavy Atom Count"),
    prop("IsotopeAtomCount", "Isotope Atom Count"),
    prop("AtomStereoCount", "Atom Stereo Count"),
    prop("DefinedAtomStereoCount", "Defined Atom Stereocenter Count"),
    prop("UndefinedAtomStereoCount", "Undefined Atom Stereocenter Count"),
    prop("BondStereoCount", "Bond Stereo Count"),
    prop("DefinedBondStereoCount", "Defined Bond Stereocenter Count"),
    prop("UndefinedBondStereoCount", "Undefined Bond Stereocenter Count"),
    prop("CovalentUnitCount", "Covalently-Bonded Unit Count"),
    prop("Volume3D", "Conformer analytic volume"),
    prop("XStericQuadrupole3D", "Steric quadrupole length"),
    prop("YStericQuadrupole3D", "Steric quadrupole width"),
    prop("ZStericQuadrupole3D", "Steric quadrupole height"),
    prop("FeatureCount3D", "Features per compound count"),
];

/// Normalized phrase -> canonical target. Targets are catalog names,
/// `FLASH_CARD` or `SYNONYMS`.
const ALIASES: &[(&str, &str)] = &[
    ("flash card", FLASH_CARD),
    ("compound card", FLASH_CARD),
    ("chemical card", FLASH_CARD),
    ("card", FLASH_CARD),
    ("synonyms", SYNONYMS),
    ("synonym", SYNONYMS),
    ("mf", "MolecularFormula"),
    ("molecular formula", "MolecularFormula"),
    ("mol formula", "MolecularFormula"),
    ("formula", "MolecularFormula"),
    ("mw", "MolecularWeight"),
    ("mol weight", "MolecularWeight"),
    ("weight", "MolecularWeight"),
    ("molecular weight", "MolecularWeight"),
    ("cs", "CanonicalSMILES"),
    ("canonical smiles", "CanonicalSMILES"),
    ("csmiles", "CanonicalSMILES"),
    ("smiles", "CanonicalSMILES"),
    ("iso smiles", "IsomericSMILES"),
    ("isomeric smiles", "IsomericSMILES"),
    ("ismiles", "IsomericSMILES"),
    ("inchi", "InChI"),
    ("inchikey", "InChIKey"),
    ("ikey", "InChIKey"),
    ("name", "IUPACName"),
    ("iupac name", "IUPACName"),
    ("iupac", "IUPACName"),
    ("iname", "IUPACName"),
    ("xlogp", "XLogP"),
    ("log p", "XLogP"),
    ("exact mass", "ExactMass"),
    ("mass", "ExactMass"),
    ("mono iso mass", "MonoisotopicMass"),
    ("mono isotopic mass", "MonoisotopicMass"),
    ("isotopic mass", "MonoisotopicMass"),
    ("iso mass", "MonoisotopicMass"),
    ("monoisotopic mass", "MonoisotopicMass"),
    ("tpsa", "TPSA"),
    ("complexity", "Complexity"),
    ("charge", "Charge"),
    ("h bond donor count", "HBondDonorCount"),
    ("h bond donor", "HBondDonorCount"),
    ("bond donor", "HBondDonorCount"),
    ("hydrogen bond donor", "HBondDonorCount"),
    ("h bond acceptor count", "HBondAcceptorCount"),
    // Kept as shipped: these two acceptor phrasings resolve to the donor count.
    ("h bond acceptor", "HBondDonorCount"),
    ("bond acceptor", "HBondDonorCount"),
    ("rotatable bond count", "RotatableBondCount"),
    ("rotatable bond", "RotatableBondCount"),
    ("heavy atom count", "HeavyAtomCount"),
    ("heavy atoms", "HeavyAtomCount"),
    ("isotope atom count", "IsotopeAtomCount"),
    ("isotope atoms", "IsotopeAtomCount"),
    ("atom stereo count", "AtomStereoCount"),
    ("atom stereo", "AtomStereoCount"),
    ("defined atom stereo count", "DefinedAtomStereoCount"),
    ("defined atom stereo", "DefinedAtomStereoCount"),
    ("defined atom", "DefinedAtomStereoCount"),
    ("undefined atom stereo count", "UndefinedAtomStereoCount"),
    ("undefined atom stereo", "UndefinedAtomStereoCount"),
    ("undefined atom", "UndefinedAtomStereoCount"),
    ("bond stereo count", "BondStereoCount"),
    ("bond stereo", "BondStereoCount"),
    ("defined bond stereo count", "DefinedBondStereoCount"),
    ("defined bond stereo", "DefinedBondStereoCount"),
    ("undefined bond stereo count", "UndefinedBondStereoCount"),
    ("undefined bond stereo", "UndefinedBondStereoCount"),
    ("covalent unit count", "CovalentUnitCount"),
    ("covalent unit", "CovalentUnitCount"),
    ("covalent units", "CovalentUnitCount"),
    ("covalent bonded units", "CovalentUnitCount"),
    ("volume 3d", "Volume3D"),
    ("conformer analytic volume", "Volume3D"),
    ("steric quadrupole length", "XStericQuadrupole3D"),
    ("steric quadrupole width", "YStericQuadrupole3D"),
    ("steric quadrupole height", "ZStericQuadrupole3D"),
    ("features per compound count", "FeatureCount3D"),
    ("features per compound", "FeatureCount3D"),
];

/// What a property phrase asks the service for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedProperty {
    Single(&'static str),
    /// Synonym listing; served by a different endpoint than the property table.
    Synonyms,
    /// Fixed ordered set of properties plus structure and SDF attachments.
    Bundle(&'static [&'static str]),
}

impl ResolvedProperty {
    pub fn is_bundle(&self) -> bool {
        matches!(self, ResolvedProperty::Bundle(_))
    }

    /// Canonical names to put in a property-table request. Empty for synonyms.
    pub fn canonical_names(&self) -> Vec<&'static str> {
        match self {
            ResolvedProperty::Single(name) => vec![*name],
            ResolvedProperty::Synonyms => Vec::new(),
            ResolvedProperty::Bundle(names) => names.to_vec(),
        }
    }
}

/// Trim, lower-case and collapse inner whitespace to single spaces.
pub fn normalize_phrase(phrase: &str) -> String {
    phrase
        .split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join(" ")
}

pub struct PropertyAliasResolver;

impl PropertyAliasResolver {
    pub fn new() -> Self {
        Self
    }

    /// `None` means the phrase is not in the alias table. Callers decide how to react.
    pub fn resolve(&self, phrase: &str) -> Option<ResolvedProperty> {
        let key = normalize_phrase(phrase);
        if key.is_empty() {
            return None;
        }

        let (_, target) = ALIASES.iter().find(|(alias, _)| *alias == key)?;
        match *target {
            FLASH_CARD => Some(ResolvedProperty::Bundle(FLASH_CARD_PROPERTIES)),
            SYNONYMS => Some(ResolvedProperty::Synonyms),
            canonical => Some(ResolvedProperty::Single(canonical)),
        }
    }
}

impl Default for PropertyAliasResolver {
    fn default() -> Self {
        Self::new()
    }
}

/// Catalog entry for a canonical name, case-sensitive like the service's own keys.
pub fn property_info(canonical: &str) -> Option<&'static PropertyInfo> {
    PROPERTY_CATALOG.iter().find(|p| p.canonical == canonical)
}
