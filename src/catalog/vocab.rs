//! Fixed vocabularies of the catalog layout
//!
//! Everything here is document-specific knowledge: words that look like
//! codes but are not, brand watermarks that leak into the text as stray
//! lines, and the keyword sets the line classifiers match against.

/// Brand logos that appear in the scan as free-floating text and must be
/// stripped from titles (`TORNILLO PARA ESSVE` -> `TORNILLO PARA`).
pub const LOGO_DENYLIST: &[&str] = &["ESSVE", "KNAPP"];

/// Tokens that pass the SKU shape test but are known not to be codes:
/// units, colors, finish names, header words, AWS weld-rod designators
/// (`E6010`) and Torx bit sizes (`T10`).
pub const SKU_DENYLIST: &[&str] = &[
    "BALDE",
    "NUEVO",
    "CODIGO",
    "CÓDIGO",
    "NOMINAL",
    "LARGO",
    "ENVASE",
    "PHILLIPS",
    "POZI",
    "TORX",
    "ENTRE",
    "CARAS",
    "COLOR",
    "DESCRIPCIÓN",
    "DIÁMETRO",
    "ESPESOR",
    "ANCHO",
    "ALTO",
    "INOX",
    "ACERO",
    "BRONCE",
    "NYLON",
    "ZINC",
    "ZINCADO",
    "FOSFATIZADO",
    "RUSPERT",
    "DACROMET",
    "IRIDISCENTE",
    "BRILLANTE",
    "ESPECIAL",
    "CONTINUACIÓN",
    "CONTINUACION",
    "PTA",
    "U",
    "TORNILLO",
    "PERNO",
    "TUERCA",
    "GOLILLA",
    "AUTOPERFORANTE",
    "AUTOP",
    "HEX",
    "HEXAGONAL",
    "CAB",
    "CABEZA",
    "E6010",
    "E6011",
    "E7018",
    "E6010/6011/7018",
    "T10",
    "T15",
    "T20",
    "T25",
    "T30",
    "T40",
    "T50",
    "T55",
    "T60",
];

/// Shorter denylist used by the legacy SKU rule (older cached artifacts).
pub const LEGACY_SKU_DENYLIST: &[&str] = &[
    "BALDE", "NUEVO", "CODIGO", "CÓDIGO", "NOMINAL", "LARGO", "ENVASE", "PHILLIPS", "POZI", "TORX",
];

/// Lowercase prefixes that open a finish (acabado) line.
pub const FINISH_PREFIXES: &[&str] = &[
    "zincado",
    "fosfatizado",
    "ruspert",
    "dacromet",
    "iridiscente",
    "balde",
    "envase pequeño",
    "acero inoxidable",
    "inox",
    "acabado especial",
    "revestimiento",
    "bronce",
    "pavonado",
];

/// Product nouns that mark a title line.
pub const TITLE_NOUNS: &[&str] = &[
    "TORNILLO",
    "PERNO",
    "TUERCA",
    "GOLILLA",
    "AUTOPERFORANTE",
    "REMACHE",
    "ANCLAJE",
    "TARUGO",
    "CLAVO",
    "BROCA",
    "DISCO",
    "CADENA",
    "CABLE",
    "FRAMER",
    "CONECTOR",
];

/// Descriptors that mark a subtype line (`ROSCA METAL`, `PUNTA FINA`, ...).
pub const SUBTYPE_KEYWORDS: &[&str] = &[
    "ROSCA",
    "PUNTA",
    "CABEZA",
    "C/GOLILLA",
    "SIN GOLILLA",
    "HEXAGONAL",
    "PHILLIPS",
    "CONTINUACIÓN",
    "CONTINUACION",
    "INOX",
    "PARA",
    "DOS CAPAS",
    "DENSIDAD",
    "MADERA",
    "METAL",
];

/// Function words that leave a title dangling (`TORNILLO PARA` + ...).
pub const INCOMPLETE_TITLE_ENDINGS: &[&str] = &["PARA", "DE", "CON", "EN", "A", "Y"];

/// Words that typically complete a dangling title on the next line.
pub const TITLE_CONTINUATIONS: &[&str] = &[
    "TERRAZAS",
    "DECK",
    "MADERA",
    "METALCON",
    "VOLCANITA",
    "FACHADAS",
    "MOLDURAS",
    "AGLOMERADA",
    "DRYWALL",
];

/// Top-level category prefixes of `CATEGORY - Subcategory` section lines.
pub const SECTION_PREFIXES: &[&str] = &["FIJACIONES", "ANCLAJES", "HERRAMIENTAS", "CADENAS"];

/// Main sections from the catalog's index page. After a page-break marker a
/// short line matching one of these is a subcategory change, not a title.
pub const KNOWN_MAIN_SECTIONS: &[&str] = &[
    "TORNILLOS PARA VOLCANITA",
    "TORNILLOS PARA METALCON",
    "TORNILLOS PARA FIBROCEMENTO",
    "TORNILLOS PARA DECK",
    "TORNILLOS PARA VENTANAS DE PVC",
    "TORNILLOS PARA MADERA",
    "TORNILLOS PARA MADERAS",
    "TORNILLOS WINGER",
    "TORNILLOS PARA FACHADAS",
    "TORNILLOS AUTOPERFORANTES",
    "ROSCALATAS Y ATERRAJADORES",
    "PUNTAS E INSERTOS",
    "PUNTAS, INSERTOS Y DADOS",
    "PERNOS HEXAGONALES",
    "PRODUCTOS PARA TECHO",
    "ANCLAJES",
    "TARUGOS",
    "CLAVOS",
    "CABLES, CADENAS Y ACCESORIOS",
    "BROCAS, DISCOS Y SOLDADURAS",
    "HERRAMIENTAS",
    "CONECTORES PARA MADERA",
    "PERNOS MÁQUINA",
    "COMPLEMENTOS DE LINEA",
];
