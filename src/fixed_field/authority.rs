//! Authority 008 layout.

use super::bibliographic::CATALOGING_SOURCE;
use super::layout::{CodeTable, Layout, Position};

pub(crate) const AUTHORITY: Layout = &[
    Position::read("Date entered on file", 0, 6),
    Position::lookup(
        "Direct or indirect geographic subdivision",
        6,
        1,
        &[
            (" ", "Not subdivided geographically"),
            ("d", "Subdivided geographically-direct"),
            ("i", "Subdivided geographically-indirect"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Romanization scheme",
        7,
        1,
        &[
            ("a", "International standard"),
            ("b", "National standard"),
            ("c", "National library association standard"),
            ("d", "National library or bibliographic agency standard"),
            ("e", "Local standard"),
            ("f", "Standard of unknown origin"),
            ("g", "Conventional romanization or conventional form of name in language of cataloging agency"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Language of catalog",
        8,
        1,
        &[
            (" ", "No information provided"),
            ("b", "English and French"),
            ("e", "English only"),
            ("f", "French only"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Kind of record",
        9,
        1,
        &[
            ("a", "Established heading"),
            ("b", "Untraced reference"),
            ("c", "Traced reference"),
            ("d", "Subdivision"),
            ("e", "Node label"),
            ("f", "Established heading and subdivision"),
            ("g", "Reference and subdivision"),
        ],
    ),
    Position::lookup(
        "Descriptive cataloging rules",
        10,
        1,
        &[
            ("a", "Earlier rules"),
            ("b", "AACR 1"),
            ("c", "AACR 2"),
            ("d", "AACR 2 compatible heading"),
            ("n", "Not applicable"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Subject heading system/thesaurus",
        11,
        1,
        &[
            ("a", "Library of Congress Subject Headings"),
            ("b", "LC subject headings for children's literature"),
            ("c", "Medical Subject Headings"),
            ("d", "National Agricultural Library subject authority file"),
            ("k", "Canadian Subject Headings"),
            ("n", "Not applicable"),
            ("r", "Art and Architecture Thesaurus"),
            ("s", "Sears List of Subject Heading"),
            ("v", "Repertoire de vedettes-matiere"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Type of series",
        12,
        1,
        &[
            ("a", "Monographic series"),
            ("b", "Multipart item"),
            ("c", "Series-like phrase"),
            ("n", "Not applicable"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Numbered or unnumbered series",
        13,
        1,
        &[
            ("a", "Numbered"),
            ("b", "Unnumbered"),
            ("c", "Numbering varies"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Heading use-main or added entry", 14, 1, HEADING_USE),
    Position::lookup("Heading use-subject added entry", 15, 1, HEADING_USE),
    Position::lookup("Heading use-series added entry", 16, 1, HEADING_USE),
    Position::lookup(
        "Type of subject subdivision",
        17,
        1,
        &[
            ("a", "Topical"),
            ("b", "Form"),
            ("c", "Chronological"),
            ("d", "Geographic"),
            ("e", "Language"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Type of government agency",
        28,
        1,
        &[
            (" ", "Not a government agency"),
            ("a", "Autonomous or semi-autonomous component"),
            ("c", "Multilocal"),
            ("f", "Federal/national"),
            ("i", "International intergovernmental"),
            ("l", "Local"),
            ("m", "Multistate"),
            ("o", "Government agency-type undetermined"),
            ("s", "State, provincial, territorial, dependent, etc."),
            ("u", "Unknown if heading is government agency"),
            ("z", "Other"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Reference evaluation",
        29,
        1,
        &[
            ("a", "Tracings are consistent with the heading"),
            ("b", "Tracings are not necessarily consistent with the heading"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Record update in process",
        31,
        1,
        &[
            ("a", "Record can be used"),
            ("b", "Record is being updated"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Undifferentiated personal name",
        32,
        1,
        &[
            ("a", "Differentiated personal name"),
            ("b", "Undifferentiated personal name"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Level of establishment",
        33,
        1,
        &[
            ("a", "Fully established"),
            ("b", "Memorandum"),
            ("c", "Provisional"),
            ("d", "Preliminary"),
            ("n", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Modified record",
        38,
        1,
        &[
            (" ", "Not modified"),
            ("s", "Shortened"),
            ("x", "Missing characters"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup("Cataloging source", 39, 1, CATALOGING_SOURCE),
];

const HEADING_USE: CodeTable = &[
    ("a", "Appropriate"),
    ("b", "Not appropriate"),
    ("|", "No attempt to code"),
];
