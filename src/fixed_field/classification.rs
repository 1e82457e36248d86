//! Classification 008 layout.

use super::layout::{Layout, Position};

pub(crate) const CLASSIFICATION: Layout = &[
    Position::read("Date entered on file", 0, 6),
    Position::lookup(
        "Kind of record",
        6,
        1,
        &[
            ("a", "Schedule record"),
            ("b", "Table record"),
            ("c", "Index term record"),
        ],
    ),
    Position::lookup(
        "Type of number",
        7,
        1,
        &[
            ("a", "Single number"),
            ("b", "Defined number span"),
            ("c", "Summary number span"),
            ("n", "Not applicable"),
        ],
    ),
    Position::lookup(
        "Classification validity",
        8,
        1,
        &[
            ("a", "Valid"),
            ("b", "First number of span invalid"),
            ("c", "Last number of span invalid"),
            ("d", "Completely invalid"),
            ("e", "Obsolete"),
            ("n", "Not applicable"),
        ],
    ),
    Position::lookup(
        "Standard or optional designation",
        9,
        1,
        &[
            ("a", "Standard"),
            ("b", "Optional"),
            ("n", "Not applicable"),
        ],
    ),
    Position::lookup(
        "Record update in process",
        10,
        1,
        &[
            ("a", "Record can be used"),
            ("b", "Record is being updated"),
        ],
    ),
    Position::lookup(
        "Level of establishment",
        11,
        1,
        &[
            ("a", "Fully established"),
            ("c", "Provisional"),
        ],
    ),
    Position::lookup(
        "Synthesized number indication",
        12,
        1,
        &[
            ("a", "Number not synthesized"),
            ("b", "Number synthesized"),
            ("n", "Not applicable"),
        ],
    ),
    Position::lookup(
        "Display controller",
        13,
        1,
        &[
            ("a", "Displayed in standard schedules or tables"),
            ("b", "Extended display"),
        ],
    ),
];
