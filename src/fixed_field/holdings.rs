//! Holdings 008 layout.

use super::layout::{CodeTable, Layout, Position};

pub(crate) const HOLDINGS: Layout = &[
    Position::read("Date entered on file", 0, 6),
    Position::lookup(
        "Receipt or acquisition status",
        6,
        1,
        &[
            ("0", "Unknown"),
            ("1", "Other receipt or acquisition status"),
            ("2", "Received and complete or ceased"),
            ("3", "On order"),
            ("4", "Currently received"),
            ("5", "Not currently received"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Method of acquisition",
        7,
        1,
        &[
            ("c", "Cooperative or consortial purchase"),
            ("d", "Deposit"),
            ("e", "Exchange"),
            ("f", "Free"),
            ("g", "Gift"),
            ("l", "Legal deposit"),
            ("m", "Membership"),
            ("n", "Non-library purchase"),
            ("p", "Purchase"),
            ("q", "Lease"),
            ("u", "Unknown"),
            ("z", "Other method of acquisition"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::hybrid_date(
        "Expected acquisition end date",
        8,
        4,
        &[(" ", "Not applicable"), ("u", "Unknown"), ("|", "No attempt to code")],
    ),
    Position::lookup(
        "General retention policy",
        12,
        1,
        &[
            ("0", "Unknown"),
            ("1", "Other general retention policy"),
            ("2", "Retained except as replaced by updates"),
            ("3", "Sample issue retained"),
            ("4", "Retained until replaced by microform"),
            ("5", "Retained until replaced by cumulation, replacement volume, or revision"),
            ("6", "Retained for a limited period"),
            ("7", "Not retained"),
            ("8", "Permanently retained"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Specific retention policy: policy type",
        13,
        1,
        &[
            (" ", "No specific retention policy"),
            ("l", "Latest"),
            ("p", "Previous"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::range(
        "Specific retention policy: number of units",
        14,
        1,
        "Number of units",
        &[(" ", "Not specified"), ("|", "No attempt to code")],
    ),
    Position::lookup(
        "Specific retention policy: unit type",
        15,
        1,
        &[
            (" ", "Unit type not specified"),
            ("m", "Month(s)"),
            ("w", "Week(s)"),
            ("y", "Year(s)"),
            ("e", "Edition(s)"),
            ("i", "Issue(s)"),
            ("s", "Supplement(s)"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::lookup(
        "Completeness",
        16,
        1,
        &[
            ("0", "Other"),
            ("1", "Complete"),
            ("2", "Incomplete"),
            ("3", "Scattered"),
            ("4", "Not applicable"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::range(
        "Number of copies reported",
        17,
        3,
        "Number of copies",
        &[("   ", "Not applicable"), ("|||", "No attempt to code")],
    ),
    Position::lookup("Lending policy", 20, 1, LENDING_POLICY),
    Position::lookup(
        "Reproduction policy",
        21,
        1,
        &[
            ("a", "Will reproduce"),
            ("b", "Will not reproduce"),
            ("u", "Unknown"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::read("Language", 22, 3),
    Position::lookup(
        "Separate or composite copy report",
        25,
        1,
        &[
            ("0", "Separate copy report"),
            ("1", "Composite copy report"),
            ("|", "No attempt to code"),
        ],
    ),
    Position::hybrid_date(
        "Date of report",
        26,
        6,
        &[("0", "Not known"), ("|", "No attempt to code")],
    ),
];

const LENDING_POLICY: CodeTable = &[
    ("a", "Will lend"),
    ("b", "Will not lend"),
    ("c", "Will lend hard copy only"),
    ("l", "Limited lending policy"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];
