//! 007 physical description layouts, one per category of material.

use super::layout::{CodeTable, Layout, Position};

const CATEGORY: CodeTable = &[
    ("a", "Map"),
    ("c", "Electronic resource"),
    ("d", "Globe"),
    ("f", "Tactile material"),
    ("g", "Projected graphic"),
    ("h", "Microform"),
    ("k", "Nonprojected graphic"),
    ("m", "Motion picture"),
    ("o", "Kit"),
    ("q", "Notated music"),
    ("r", "Remote-sensing image"),
    ("s", "Sound recording"),
    ("t", "Text"),
    ("v", "Videorecording"),
    ("z", "Unspecified"),
];

const fn category() -> Position {
    Position::lookup("Category of material", 0, 1, CATEGORY)
}

const fn designation(codes: CodeTable) -> Position {
    Position::lookup("Specific material designation", 1, 1, codes)
}

pub(crate) const MAP: Layout = &[
    category(),
    designation(&[
        ("d", "Atlas"),
        ("g", "Diagram"),
        ("j", "Map"),
        ("k", "Profile"),
        ("q", "Model"),
        ("r", "Remote-sensing image"),
        ("s", "Section"),
        ("u", "Unspecified"),
        ("y", "View"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup("Color", 3, 1, MAP_COLOR),
    Position::lookup("Physical medium", 4, 1, MAP_MEDIUM),
    Position::lookup("Type of reproduction", 5, 1, REPRODUCTION_TYPE),
    Position::lookup("Production/reproduction details", 6, 1, PRODUCTION_DETAILS),
    Position::lookup("Positive/negative aspect", 7, 1, POLARITY_WITH_MIXED),
];

pub(crate) const ELECTRONIC_RESOURCE: Layout = &[
    category(),
    designation(&[
        ("a", "Tape cartridge"),
        ("b", "Chip cartridge"),
        ("c", "Computer optical disc cartridge"),
        ("d", "Computer disc, type unspecified"),
        ("e", "Computer disc cartridge, type unspecified"),
        ("f", "Tape cassette"),
        ("h", "Tape reel"),
        ("j", "Magnetic disk"),
        ("k", "Computer card"),
        ("m", "Magneto-optical disc"),
        ("o", "Optical disc"),
        ("r", "Remote"),
        ("s", "Standalone device"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup(
        "Color",
        3,
        1,
        &[
            ("a", "One color"),
            ("b", "Black-and-white"),
            ("c", "Multicolored"),
            ("g", "Gray scale"),
            ("m", "Mixed"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Dimensions",
        4,
        1,
        &[
            ("a", "3 1/2 in."),
            ("e", "12 in."),
            ("g", "4 3/4 in. or 12 cm."),
            ("i", "1 1/8 x 2 3/8 in."),
            ("j", "3 7/8 x 2 1/2 in."),
            ("n", "Not applicable"),
            ("o", "5 1/4 in."),
            ("u", "Unknown"),
            ("v", "8 in."),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Sound",
        5,
        1,
        &[
            (" ", "No sound (silent)"),
            ("a", "Sound"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::hybrid(
        "Image bit depth",
        6,
        3,
        "Exact bit depth",
        &[
            ("mmm", "Multiple"),
            ("nnn", "Not applicable"),
            ("---", "Unknown"),
            ("|||", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "File formats",
        9,
        1,
        &[
            ("a", "One file format"),
            ("m", "Multiple file formats"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Quality assurance targets",
        10,
        1,
        &[
            ("a", "Absent"),
            ("n", "Not applicable"),
            ("p", "Present"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Antecedent/source",
        11,
        1,
        &[
            ("a", "File reproduced from original"),
            ("b", "File reproduced from microform"),
            ("c", "File reproduced from an electronic resource"),
            ("d", "File reproduced from an intermediate (not microform)"),
            ("m", "Mixed"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Level of compression",
        12,
        1,
        &[
            ("a", "Uncompressed"),
            ("b", "Lossless"),
            ("d", "Lossy"),
            ("m", "Mixed"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Reformatting quality",
        13,
        1,
        &[
            ("a", "Access"),
            ("n", "Not applicable"),
            ("p", "Preservation"),
            ("r", "Replacement"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
];

pub(crate) const GLOBE: Layout = &[
    category(),
    designation(&[
        ("a", "Celestial globe"),
        ("b", "Planetary or lunar globe"),
        ("c", "Terrestrial globe"),
        ("e", "Earth moon globe"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup("Color", 3, 1, MAP_COLOR),
    Position::lookup("Physical medium", 4, 1, MAP_MEDIUM),
    Position::lookup("Type of reproduction", 5, 1, REPRODUCTION_TYPE),
];

pub(crate) const TACTILE_MATERIAL: Layout = &[
    category(),
    designation(&[
        ("a", "Moon"),
        ("b", "Braille"),
        ("c", "Combination"),
        ("d", "Tactile, with no writing system"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::multi(
        "Class of braille writing",
        3,
        2,
        &[
            (" ", "No specified class of braille writing"),
            ("a", "Literary braille"),
            ("b", "Format code braille"),
            ("c", "Mathematics and scientific braille"),
            ("d", "Computer braille"),
            ("e", "Music braille"),
            ("m", "Multiple braille types"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Level of contraction",
        5,
        1,
        &[
            ("a", "Uncontracted"),
            ("b", "Contracted"),
            ("m", "Combination"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::multi(
        "Braille music format",
        6,
        3,
        &[
            (" ", "No specified braille music format"),
            ("a", "Bar over bar"),
            ("b", "Bar by bar"),
            ("c", "Line over line"),
            ("d", "Paragraph"),
            ("e", "Single line"),
            ("f", "Section by section"),
            ("g", "Line by line"),
            ("h", "Open score"),
            ("i", "Spanner short form scoring"),
            ("j", "Short form scoring"),
            ("k", "Outline"),
            ("l", "Vertical score"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Special physical characteristics",
        9,
        1,
        &[
            ("a", "Print/braille"),
            ("b", "Jumbo or enlarged braille"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
];

pub(crate) const PROJECTED_GRAPHIC: Layout = &[
    category(),
    designation(&[
        ("c", "Filmstrip cartridge"),
        ("d", "Filmslip"),
        ("f", "Filmstrip, type unspecified"),
        ("o", "Filmstrip roll"),
        ("s", "Slide"),
        ("t", "Transparency"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup("Color", 3, 1, IMAGE_COLOR),
    Position::lookup(
        "Base of emulsion",
        4,
        1,
        &[
            ("d", "Glass"),
            ("e", "Synthetic"),
            ("j", "Safety film"),
            ("k", "Film base, other than safety film"),
            ("m", "Mixed collection"),
            ("o", "Paper"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Sound on medium or separate", 5, 1, SOUND_ON_MEDIUM),
    Position::lookup("Medium for sound", 6, 1, MEDIUM_FOR_SOUND),
    Position::lookup(
        "Dimensions",
        7,
        1,
        &[
            ("a", "Standard 8 mm. film width"),
            ("b", "Super 8 mm./single 8 mm. film width"),
            ("c", "9.5 mm. film width"),
            ("d", "16 mm. film width"),
            ("e", "28 mm. film width"),
            ("f", "35 mm. film width"),
            ("g", "70 mm. film width"),
            ("j", "2x2 in. or 5x5 cm."),
            ("k", "2 1/4 x 2 1/4 in. or 6x6 cm."),
            ("s", "4x5 in. or 10x13 cm."),
            ("t", "5x7 in. or 13x18 cm."),
            ("u", "Unknown"),
            ("v", "8x10 in. or 21x26 cm."),
            ("w", "9x9 in. or 23x23 cm."),
            ("x", "10x10 in. or 26x26 cm."),
            ("y", "7x7 in. or 18x18 cm."),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Secondary support material",
        8,
        1,
        &[
            (" ", "No secondary support"),
            ("c", "Cardboard"),
            ("d", "Glass"),
            ("e", "Synthetic"),
            ("h", "Metal"),
            ("j", "Metal and glass"),
            ("k", "Synthetic and glass"),
            ("m", "Mixed collection"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
];

pub(crate) const MICROFORM: Layout = &[
    category(),
    designation(&[
        ("a", "Aperture card"),
        ("b", "Microfilm cartridge"),
        ("c", "Microfilm cassette"),
        ("d", "Microfilm reel"),
        ("e", "Microfiche"),
        ("f", "Microfiche cassette"),
        ("g", "Microopaque"),
        ("h", "Microfilm slip"),
        ("j", "Microfilm roll"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup("Positive/negative aspect", 3, 1, POLARITY_WITH_MIXED),
    Position::lookup(
        "Dimensions",
        4,
        1,
        &[
            ("a", "8 mm."),
            ("d", "16 mm."),
            ("f", "35 mm."),
            ("g", "70 mm."),
            ("h", "105 mm."),
            ("l", "3x5 in. or 8x13 cm."),
            ("m", "4x6 in. or 11x15 cm."),
            ("o", "6x9 in. or 16x23 cm."),
            ("p", "3 1/4 x 7 3/8 in. or 9x19 cm."),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Reduction ratio range",
        5,
        1,
        &[
            ("a", "Low reduction ratio"),
            ("b", "Normal reduction"),
            ("c", "High reduction"),
            ("d", "Very high reduction"),
            ("e", "Ultra high reduction"),
            ("u", "Unknown"),
            ("v", "Reduction rate varies"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::hybrid(
        "Reduction ratio",
        6,
        3,
        "Exact reduction ratio",
        &[("---", "Unknown"), ("|||", "No attempt to code")],
    ),
    Position::lookup(
        "Color",
        9,
        1,
        &[
            ("b", "Black-and-white"),
            ("c", "Multicolored"),
            ("m", "Mixed"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Emulsion on film",
        10,
        1,
        &[
            ("a", "Silver halide"),
            ("b", "Diazo"),
            ("c", "Vesicular"),
            ("m", "Mixed emulsion"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Generation",
        11,
        1,
        &[
            ("a", "First generation (master)"),
            ("b", "Printing master"),
            ("c", "Service copy"),
            ("m", "Mixed generation"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Base of film", 12, 1, FILM_BASE),
];

pub(crate) const NONPROJECTED_GRAPHIC: Layout = &[
    category(),
    designation(&[
        ("a", "Activity card"),
        ("c", "Collage"),
        ("d", "Drawing"),
        ("e", "Painting"),
        ("f", "Photomechanical print"),
        ("g", "Photonegative"),
        ("h", "Photoprint"),
        ("i", "Picture"),
        ("j", "Print"),
        ("k", "Poster"),
        ("l", "Technical drawing"),
        ("n", "Chart"),
        ("o", "Flash card"),
        ("p", "Postcard"),
        ("q", "Icon"),
        ("r", "Radiograph"),
        ("s", "Study print"),
        ("u", "Unspecified"),
        ("v", "Photograph, type unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup(
        "Color",
        3,
        1,
        &[
            ("a", "One color"),
            ("b", "Black-and-white"),
            ("c", "Multicolored"),
            ("h", "Hand colored"),
            ("m", "Mixed"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Primary support material", 4, 1, GRAPHIC_SUPPORT),
    Position::lookup(
        "Secondary support material",
        5,
        1,
        &[
            (" ", "No secondary support"),
            ("a", "Canvas"),
            ("b", "Bristol board"),
            ("c", "Cardboard/illustration board"),
            ("d", "Glass"),
            ("e", "Synthetic"),
            ("f", "Skin"),
            ("g", "Textile"),
            ("h", "Metal"),
            ("i", "Plastic"),
            ("l", "Vinyl"),
            ("m", "Mixed collection"),
            ("n", "Vellum"),
            ("o", "Paper"),
            ("p", "Plaster"),
            ("q", "Hardboard"),
            ("r", "Porcelain"),
            ("s", "Stone"),
            ("t", "Wood"),
            ("u", "Unknown"),
            ("v", "Leather"),
            ("w", "Parchment"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
];

pub(crate) const MOTION_PICTURE: Layout = &[
    category(),
    designation(&[
        ("c", "Film cartridge"),
        ("f", "Film cassette"),
        ("o", "Film roll"),
        ("r", "Film reel"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup("Color", 3, 1, IMAGE_COLOR),
    Position::lookup(
        "Motion picture presentation format",
        4,
        1,
        &[
            ("a", "Standard sound aperture (reduced frame)"),
            ("b", "Nonanamorphic (wide-screen)"),
            ("c", "3D"),
            ("d", "Anamorphic (wide-screen)"),
            ("e", "Other wide-screen format"),
            ("f", "Standard silent aperture (full frame)"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Sound on medium or separate", 5, 1, SOUND_ON_MEDIUM),
    Position::lookup("Medium for sound", 6, 1, MEDIUM_FOR_SOUND),
    Position::lookup(
        "Dimensions",
        7,
        1,
        &[
            ("a", "Standard 8 mm."),
            ("b", "Super 8 mm./single 8 mm."),
            ("c", "9.5 mm."),
            ("d", "16 mm."),
            ("e", "28 mm."),
            ("f", "35 mm."),
            ("g", "70 mm."),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Configuration of playback channels",
        8,
        1,
        &[
            ("k", "Mixed"),
            ("m", "Monaural"),
            ("n", "Not applicable"),
            ("q", "Quadraphonic, multichannel, or surround"),
            ("s", "Stereophonic"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Production elements",
        9,
        1,
        &[
            ("a", "Workprint"),
            ("b", "Trims"),
            ("c", "Outtakes"),
            ("d", "Rushes"),
            ("e", "Mixing tracks"),
            ("f", "Title bands/inter-title rolls"),
            ("g", "Production rolls"),
            ("n", "Not applicable"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Positive/negative aspect", 10, 1, POLARITY_WITH_MIXED),
    Position::lookup(
        "Generation",
        11,
        1,
        &[
            ("d", "Duplicate"),
            ("e", "Master"),
            ("o", "Original"),
            ("r", "Reference print/viewing copy"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Base of film", 12, 1, FILM_BASE),
    Position::lookup(
        "Refined categories of color",
        13,
        1,
        &[
            ("a", "3 layer color"),
            ("b", "2 color, single strip"),
            ("c", "Undetermined 2 color"),
            ("d", "Undetermined 3 color"),
            ("e", "3 strip color"),
            ("f", "2 strip color"),
            ("g", "Red strip"),
            ("h", "Blue or green strip"),
            ("i", "Cyan strip"),
            ("j", "Magenta strip"),
            ("k", "Yellow strip"),
            ("l", "S E N 2"),
            ("m", "S E N 3"),
            ("n", "Not applicable"),
            ("p", "Sepia tone"),
            ("q", "Other tone"),
            ("r", "Tint"),
            ("s", "Tinted and toned"),
            ("t", "Stencil color"),
            ("u", "Unknown"),
            ("v", "Hand colored"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Kind of color stock or print",
        14,
        1,
        &[
            ("a", "Imbibition dye transfer prints"),
            ("b", "Three layer stock"),
            ("c", "Three layer stock, low fade"),
            ("d", "Duplitized stock"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Deterioration stage",
        15,
        1,
        &[
            ("a", "None apparent"),
            ("b", "Nitrate: suspicious odor"),
            ("c", "Nitrate: pungent odor"),
            ("d", "Nitrate: brownish, discoloration, fading, dusty"),
            ("e", "Nitrate: sticky"),
            ("f", "Nitrate: frothy, bubbles, blisters"),
            ("g", "Nitrate: congealed"),
            ("h", "Nitrate: powder"),
            ("k", "Non-nitrate: detectable deterioration"),
            ("l", "Non-nitrate: advanced deterioration"),
            ("m", "Non-nitrate: disaster"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Completeness",
        16,
        1,
        &[
            ("c", "Complete"),
            ("i", "Incomplete"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::hybrid_date(
        "Film inspection date",
        17,
        6,
        &[("|", "No attempt to code")],
    ),
];

pub(crate) const KIT: Layout = &[
    category(),
    designation(&[("u", "Unspecified"), ("|", "No attempt to code")]),
];

pub(crate) const NOTATED_MUSIC: Layout = &[
    category(),
    designation(&[("u", "Unspecified"), ("|", "No attempt to code")]),
];

pub(crate) const REMOTE_SENSING_IMAGE: Layout = &[
    category(),
    designation(&[("u", "Unspecified"), ("|", "No attempt to code")]),
    Position::lookup(
        "Altitude of sensor",
        3,
        1,
        &[
            ("a", "Surface"),
            ("b", "Airborne"),
            ("c", "Spaceborne"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Attitude of sensor",
        4,
        1,
        &[
            ("a", "Low oblique"),
            ("b", "High oblique"),
            ("c", "Vertical"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Cloud cover",
        5,
        1,
        &[
            ("0", "0-9%"),
            ("1", "10-19%"),
            ("2", "20-29%"),
            ("3", "30-39%"),
            ("4", "40-49%"),
            ("5", "50-59%"),
            ("6", "60-69%"),
            ("7", "70-79%"),
            ("8", "80-89%"),
            ("9", "90-100%"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Platform construction type",
        6,
        1,
        &[
            ("a", "Balloon"),
            ("b", "Aircraft, low altitude"),
            ("c", "Aircraft, medium altitude"),
            ("d", "Aircraft, high altitude"),
            ("e", "Manned spacecraft"),
            ("f", "Unmanned spacecraft"),
            ("g", "Land-based remote-sensing device"),
            ("h", "Water surface-based remote-sensing device"),
            ("i", "Submersible remote-sensing device"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Platform use category",
        7,
        1,
        &[
            ("a", "Meteorological"),
            ("b", "Surface observing"),
            ("c", "Space observing"),
            ("m", "Mixed uses"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Sensor type",
        8,
        1,
        &[
            ("a", "Active"),
            ("b", "Passive"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Data type",
        9,
        2,
        &[
            ("aa", "Visible light"),
            ("da", "Near infrared"),
            ("db", "Middle infrared"),
            ("dc", "Far infrared"),
            ("dd", "Thermal infrared"),
            ("de", "Shortwave infrared (SWIR)"),
            ("df", "Reflective infrared"),
            ("dv", "Combinations"),
            ("dz", "Other infrared data"),
            ("ga", "Sidelooking airborne radar (SLAR)"),
            ("gb", "Synthetic aperture radar (SAR)-Single frequency"),
            ("gc", "SAR-multi-frequency (multichannel)"),
            ("gd", "SAR-like polarization"),
            ("ge", "SAR-cross polarization"),
            ("gf", "Infometric SAR"),
            ("gg", "Polarmetric SAR"),
            ("gu", "Passive microwave mapping"),
            ("gz", "Other microwave data"),
            ("ja", "Far ultraviolet"),
            ("jb", "Middle ultraviolet"),
            ("jc", "Near ultraviolet"),
            ("jv", "Ultraviolet combinations"),
            ("jz", "Other ultraviolet data"),
            ("ma", "Multi-spectral, multidata"),
            ("mb", "Multi-temporal"),
            ("mm", "Combination of various data types"),
            ("nn", "Not applicable"),
            ("pa", "Sonar-water depth"),
            ("pb", "Sonar-bottom topography images, sidescan"),
            ("pc", "Sonar-bottom topography, near-surface"),
            ("pd", "Sonar-bottom topography, near-bottom"),
            ("pe", "Seismic surveys"),
            ("pz", "Other acoustical data"),
            ("ra", "Gravity anomalies (general)"),
            ("rb", "Free-air"),
            ("rc", "Bouger"),
            ("rd", "Isostatic"),
            ("sa", "Magnetic field"),
            ("ta", "Radiometric surveys"),
            ("uu", "Unknown"),
            ("zz", "Other"),
            ("||", "No attempt to code"),
        ],
    ),
];

pub(crate) const SOUND_RECORDING: Layout = &[
    category(),
    designation(&[
        ("d", "Sound disc"),
        ("e", "Cylinder"),
        ("g", "Sound cartridge"),
        ("i", "Sound-track film"),
        ("q", "Roll"),
        ("r", "Remote"),
        ("s", "Sound cassette"),
        ("t", "Sound-tape reel"),
        ("u", "Unspecified"),
        ("w", "Wire recording"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup(
        "Speed",
        3,
        1,
        &[
            ("a", "16 rpm"),
            ("b", "33 1/3 rpm"),
            ("c", "45 rpm"),
            ("d", "78 rpm"),
            ("e", "8 rpm"),
            ("f", "1.4 m. per second"),
            ("h", "120 rpm"),
            ("i", "160 rpm"),
            ("k", "15/16 ips"),
            ("l", "1 7/8 ips"),
            ("m", "3 3/4 ips"),
            ("n", "Not applicable"),
            ("o", "7 1/2 ips"),
            ("p", "15 ips"),
            ("r", "30 ips"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Configuration of playback channels",
        4,
        1,
        &[
            ("m", "Monaural"),
            ("q", "Quadraphonic, multichannel, or surround"),
            ("s", "Stereophonic"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Groove width/groove pitch",
        5,
        1,
        &[
            ("m", "Microgroove/fine"),
            ("n", "Not applicable"),
            ("s", "Coarse/standard"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Dimensions",
        6,
        1,
        &[
            ("a", "3 in."),
            ("b", "5 in."),
            ("c", "7 in."),
            ("d", "10 in."),
            ("e", "12 in."),
            ("f", "16 in."),
            ("g", "4 3/4 in. or 12 cm."),
            ("j", "3 7/8 x 2 1/2 in."),
            ("o", "5 1/4 x 3 7/8 in."),
            ("n", "Not applicable"),
            ("s", "2 3/4 x 4 in."),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Tape width",
        7,
        1,
        &[
            ("l", "1/8 in."),
            ("m", "1/4 in."),
            ("n", "Not applicable"),
            ("o", "1/2 in."),
            ("p", "1 in."),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Tape configuration",
        8,
        1,
        &[
            ("a", "Full (1) track"),
            ("b", "Half (2) track"),
            ("c", "Quarter (4) track"),
            ("d", "Eight track"),
            ("e", "Twelve track"),
            ("f", "Sixteen track"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Kind of disc, cylinder, or tape",
        9,
        1,
        &[
            ("a", "Master tape"),
            ("b", "Tape duplication master"),
            ("d", "Disc master (negative)"),
            ("i", "Instantaneous (recorded on the spot)"),
            ("m", "Mass-produced"),
            ("n", "Not applicable"),
            ("r", "Mother (positive)"),
            ("s", "Stamper (negative)"),
            ("t", "Test pressing"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Kind of material",
        10,
        1,
        &[
            ("a", "Lacquer coating"),
            ("b", "Cellulose nitrate"),
            ("c", "Acetate tape with ferrous oxide"),
            ("g", "Glass with lacquer"),
            ("i", "Aluminum with lacquer"),
            ("l", "Metal"),
            ("m", "Plastic with metal"),
            ("n", "Not applicable"),
            ("p", "Plastic"),
            ("r", "Paper with lacquer or ferrous oxide"),
            ("s", "Shellac"),
            ("w", "Wax"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Kind of cutting",
        11,
        1,
        &[
            ("h", "Hill-and-dale cutting"),
            ("l", "Lateral or combined cutting"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Special playback characteristics",
        12,
        1,
        &[
            ("a", "NAB standard"),
            ("b", "CCIR standard"),
            ("c", "Dolby-B encoded"),
            ("d", "dbx encoded"),
            ("e", "Digital recording"),
            ("f", "Dolby-A encoded"),
            ("g", "Dolby-C encoded"),
            ("h", "CX encoded"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Capture and storage technique",
        13,
        1,
        &[
            ("a", "Acoustical capture, direct storage"),
            ("b", "Direct storage, not acoustical"),
            ("d", "Digital storage"),
            ("e", "Analog electrical storage"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
];

pub(crate) const TEXT: Layout = &[
    category(),
    designation(&[
        ("a", "Regular print"),
        ("b", "Large print"),
        ("c", "Braille"),
        ("d", "Loose-leaf"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
];

pub(crate) const VIDEORECORDING: Layout = &[
    category(),
    designation(&[
        ("c", "Videocartridge"),
        ("d", "Videodisc"),
        ("f", "Videocassette"),
        ("r", "Videoreel"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
    Position::lookup(
        "Color",
        3,
        1,
        &[
            ("a", "One color"),
            ("b", "Black-and-white"),
            ("c", "Multicolored"),
            ("m", "Mixed"),
            ("n", "Not applicable"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Videorecording format",
        4,
        1,
        &[
            ("a", "Beta (1/2 in., videocassette)"),
            ("b", "VHS (1/2 in., videocassette)"),
            ("c", "U-matic (3/4 in., videocassette)"),
            ("d", "EIAJ (1/2 in., reel)"),
            ("e", "Type C (1 in., reel)"),
            ("f", "Quadruplex (1 in. or 2 in., reel)"),
            ("g", "Laserdisc"),
            ("h", "CED (Capacitance Electronic Disc) videodisc"),
            ("i", "Betacam (1/2 in., videocassette)"),
            ("j", "Betacam SP (1/2 in., videocassette)"),
            ("k", "Super-VHS (1/2 in., videocassette)"),
            ("m", "M-II (1/2 in., videocassette)"),
            ("o", "D-2 (3/4 in., videocassette)"),
            ("p", "8 mm."),
            ("q", "Hi-8 mm."),
            ("s", "Blu-ray disc"),
            ("u", "Unknown"),
            ("v", "DVD"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Sound on medium or separate", 5, 1, SOUND_ON_MEDIUM),
    Position::lookup("Medium for sound", 6, 1, MEDIUM_FOR_SOUND),
    Position::lookup(
        "Dimensions",
        7,
        1,
        &[
            ("a", "8 mm."),
            ("m", "1/4 in."),
            ("o", "1/2 in."),
            ("p", "1 in."),
            ("q", "2 in."),
            ("r", "3/4 in."),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Configuration of playback channels",
        8,
        1,
        &[
            ("k", "Mixed"),
            ("m", "Monaural"),
            ("n", "Not applicable"),
            ("q", "Quadraphonic, multichannel, or surround"),
            ("s", "Stereophonic"),
            ("u", "Unknown"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
];

pub(crate) const UNSPECIFIED: Layout = &[
    category(),
    designation(&[
        ("m", "Multiple physical forms"),
        ("u", "Unspecified"),
        ("z", "Other"),
        ("|", "No attempt to code"),
    ]),
];

const MAP_COLOR: CodeTable = &[
    ("a", "One color"),
    ("c", "Multicolored"),
    ("|", "No attempt to code"),
];

const MAP_MEDIUM: CodeTable = &[
    ("a", "Paper"),
    ("b", "Wood"),
    ("c", "Stone"),
    ("d", "Metal"),
    ("e", "Synthetic"),
    ("f", "Skin"),
    ("g", "Textiles"),
    ("i", "Plastic"),
    ("j", "Glass"),
    ("l", "Vinyl"),
    ("n", "Vellum"),
    ("p", "Plaster"),
    ("q", "Flexible base photographic, positive"),
    ("r", "Flexible base photographic, negative"),
    ("s", "Non-flexible base photographic, positive"),
    ("t", "Non-flexible base photographic, negative"),
    ("u", "Unknown"),
    ("v", "Leather"),
    ("w", "Parchment"),
    ("y", "Other photographic medium"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const REPRODUCTION_TYPE: CodeTable = &[
    ("f", "Facsimile"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PRODUCTION_DETAILS: CodeTable = &[
    ("a", "Photocopy, blueline print"),
    ("b", "Photocopy"),
    ("c", "Photographic pre-production"),
    ("d", "Film"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const POLARITY_WITH_MIXED: CodeTable = &[
    ("a", "Positive"),
    ("b", "Negative"),
    ("m", "Mixed polarity"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const IMAGE_COLOR: CodeTable = &[
    ("a", "One color"),
    ("b", "Black-and-white"),
    ("c", "Multicolored"),
    ("h", "Hand colored"),
    ("m", "Mixed"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const SOUND_ON_MEDIUM: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Sound on medium"),
    ("b", "Sound separate from medium"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const MEDIUM_FOR_SOUND: CodeTable = &[
    (" ", "No sound (silent)"),
    ("a", "Optical sound track on motion picture film"),
    ("b", "Magnetic sound track on motion picture film"),
    ("c", "Magnetic audio tape in cartridge"),
    ("d", "Sound disc"),
    ("e", "Magnetic audio tape on reel"),
    ("f", "Magnetic audio tape in cassette"),
    ("g", "Optical and magnetic sound track on motion picture film"),
    ("h", "Videotape"),
    ("i", "Videodisc"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const FILM_BASE: CodeTable = &[
    ("a", "Safety base, undetermined"),
    ("c", "Safety base, acetate undetermined"),
    ("d", "Safety base, diacetate"),
    ("i", "Nitrate base"),
    ("m", "Mixed base (nitrate and safety)"),
    ("n", "Not applicable"),
    ("p", "Safety base, polyester"),
    ("r", "Safety base, mixed"),
    ("t", "Safety base, triacetate"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const GRAPHIC_SUPPORT: CodeTable = &[
    ("a", "Canvas"),
    ("b", "Bristol board"),
    ("c", "Cardboard/illustration board"),
    ("d", "Glass"),
    ("e", "Synthetic"),
    ("f", "Skin"),
    ("g", "Textile"),
    ("h", "Metal"),
    ("i", "Plastic"),
    ("l", "Vinyl"),
    ("m", "Mixed collection"),
    ("n", "Vellum"),
    ("o", "Paper"),
    ("p", "Plaster"),
    ("q", "Hardboard"),
    ("r", "Porcelain"),
    ("s", "Stone"),
    ("t", "Wood"),
    ("u", "Unknown"),
    ("v", "Leather"),
    ("w", "Parchment"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];
