//! Community information 008 layout.

use super::bibliographic::CATALOGING_SOURCE;
use super::layout::{Layout, Position};

pub(crate) const COMMUNITY: Layout = &[
    Position::read("Date entered on file", 0, 6),
    Position::read("Place of agency", 15, 3),
    Position::lookup(
        "Target audience",
        22,
        1,
        &[
            (" ", "Unknown or not specified"),
            ("a", "Preschool"),
            ("b", "Primary"),
            ("c", "Pre-adolescent"),
            ("d", "Adolescent"),
            ("e", "Adult"),
            ("f", "Specialized"),
            ("g", "General"),
            ("j", "Juvenile"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::read("Language", 35, 3),
    Position::lookup(
        "Modified record",
        38,
        1,
        &[(" ", "Not modified"), ("|", "No attempt to code")],
    ),
    Position::lookup("Cataloging source", 39, 1, CATALOGING_SOURCE),
];
