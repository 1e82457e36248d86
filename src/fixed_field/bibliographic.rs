//! Bibliographic 008 and 006 layouts.
//!
//! Offsets are 008 offsets. The material-specific layouts cover 008/18-34,
//! which is the same data that 006/01-17 carries; see
//! [`MATERIAL_REGION_START`](super::MATERIAL_REGION_START).

use super::layout::{CodeTable, Layout, Position};

/// 008/00-17, common to every material type.
pub(crate) const COMMON_HEAD: Layout = &[
    Position::read("Date entered on file", 0, 6),
    Position::lookup("Type of date/Publication status", 6, 1, TYPE_OF_DATE),
    Position::read("Date 1", 7, 4),
    Position::read("Date 2", 11, 4),
    Position::read("Place of publication, production, or execution", 15, 3),
];

/// 008/35-39, common to every material type.
pub(crate) const COMMON_TAIL: Layout = &[
    Position::read("Language", 35, 3),
    Position::lookup("Modified record", 38, 1, MODIFIED_RECORD),
    Position::lookup("Cataloging source", 39, 1, CATALOGING_SOURCE),
];

pub(crate) const BOOKS: Layout = &[
    Position::multi("Illustrations", 18, 4, ILLUSTRATIONS),
    Position::lookup("Target audience", 22, 1, TARGET_AUDIENCE),
    Position::lookup("Form of item", 23, 1, FORM_OF_ITEM),
    Position::multi("Nature of contents", 24, 4, BOOK_CONTENTS),
    Position::lookup("Government publication", 28, 1, GOVERNMENT_PUBLICATION),
    Position::lookup("Conference publication", 29, 1, CONFERENCE_PUBLICATION),
    Position::lookup("Festschrift", 30, 1, FESTSCHRIFT),
    Position::lookup("Index", 31, 1, INDEX),
    Position::lookup("Literary form", 33, 1, LITERARY_FORM),
    Position::lookup("Biography", 34, 1, BIOGRAPHY),
];

pub(crate) const COMPUTER_FILES: Layout = &[
    Position::lookup("Target audience", 22, 1, TARGET_AUDIENCE),
    Position::lookup("Form of item", 23, 1, ONLINE_FORM_OF_ITEM),
    Position::lookup("Type of computer file", 26, 1, COMPUTER_FILE_TYPE),
    Position::lookup("Government publication", 28, 1, GOVERNMENT_PUBLICATION),
];

pub(crate) const MAPS: Layout = &[
    Position::multi("Relief", 18, 4, RELIEF),
    Position::lookup("Projection", 22, 2, PROJECTION),
    Position::lookup("Type of cartographic material", 25, 1, CARTOGRAPHIC_TYPE),
    Position::lookup("Government publication", 28, 1, GOVERNMENT_PUBLICATION),
    Position::lookup("Form of item", 29, 1, FORM_OF_ITEM),
    Position::lookup("Index", 31, 1, INDEX),
    Position::multi("Special format characteristics", 33, 2, MAP_SPECIAL_FORMAT),
];

pub(crate) const MUSIC: Layout = &[
    Position::lookup("Form of composition", 18, 2, FORM_OF_COMPOSITION),
    Position::lookup("Format of music", 20, 1, FORMAT_OF_MUSIC),
    Position::lookup("Music parts", 21, 1, MUSIC_PARTS),
    Position::lookup("Target audience", 22, 1, TARGET_AUDIENCE),
    Position::lookup("Form of item", 23, 1, FORM_OF_ITEM),
    Position::multi("Accompanying matter", 24, 6, ACCOMPANYING_MATTER),
    Position::multi("Literary text for sound recordings", 30, 2, LITERARY_TEXT),
    Position::lookup("Transposition and arrangement", 33, 1, TRANSPOSITION),
];

pub(crate) const CONTINUING_RESOURCES: Layout = &[
    Position::lookup("Frequency", 18, 1, FREQUENCY),
    Position::lookup("Regularity", 19, 1, REGULARITY),
    Position::lookup("Type of continuing resource", 21, 1, CONTINUING_RESOURCE_TYPE),
    Position::lookup("Form of original item", 22, 1, FORM_OF_ORIGINAL_ITEM),
    Position::lookup("Form of item", 23, 1, FORM_OF_ITEM),
    Position::lookup("Nature of entire work", 24, 1, SERIAL_CONTENTS),
    Position::multi("Nature of contents", 25, 3, SERIAL_CONTENTS),
    Position::lookup("Government publication", 28, 1, GOVERNMENT_PUBLICATION),
    Position::lookup("Conference publication", 29, 1, CONFERENCE_PUBLICATION),
    Position::lookup("Original alphabet or script of title", 33, 1, ORIGINAL_SCRIPT),
    Position::lookup("Entry convention", 34, 1, ENTRY_CONVENTION),
];

pub(crate) const VISUAL_MATERIALS: Layout = &[
    Position::range("Running time for motion pictures and videorecordings", 18, 3, "Running time", RUNNING_TIME),
    Position::lookup("Target audience", 22, 1, TARGET_AUDIENCE),
    Position::lookup("Government publication", 28, 1, GOVERNMENT_PUBLICATION),
    Position::lookup("Form of item", 29, 1, FORM_OF_ITEM),
    Position::lookup("Type of visual material", 33, 1, VISUAL_MATERIAL_TYPE),
    Position::lookup("Technique", 34, 1, TECHNIQUE),
];

pub(crate) const MIXED_MATERIALS: Layout = &[
    Position::lookup("Form of item", 23, 1, FORM_OF_ITEM),
];

const TYPE_OF_DATE: CodeTable = &[
    ("b", "No dates given; B.C. date involved"),
    ("c", "Continuing resource currently published"),
    ("d", "Continuing resource ceased publication"),
    ("e", "Detailed date"),
    ("i", "Inclusive dates of collection"),
    ("k", "Range of years of bulk of collection"),
    ("m", "Multiple dates"),
    ("n", "Dates unknown"),
    ("p", "Date of distribution/release/issue and production/recording session when different"),
    ("q", "Questionable date"),
    ("r", "Reprint/reissue date and original date"),
    ("s", "Single known date/probable date"),
    ("t", "Publication date and copyright date"),
    ("u", "Continuing resource status unknown"),
    ("|", "No attempt to code"),
];

const MODIFIED_RECORD: CodeTable = &[
    (" ", "Not modified"),
    ("d", "Dashed-on information omitted"),
    ("o", "Completely romanized/printed cards romanized"),
    ("r", "Completely romanized/printed cards in script"),
    ("s", "Shortened"),
    ("x", "Missing characters"),
    ("|", "No attempt to code"),
];

pub(crate) const CATALOGING_SOURCE: CodeTable = &[
    (" ", "National bibliographic agency"),
    ("c", "Cooperative cataloging program"),
    ("d", "Other"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ILLUSTRATIONS: CodeTable = &[
    (" ", "No illustrations"),
    ("a", "Illustrations"),
    ("b", "Maps"),
    ("c", "Portraits"),
    ("d", "Charts"),
    ("e", "Plans"),
    ("f", "Plates"),
    ("g", "Music"),
    ("h", "Facsimiles"),
    ("i", "Coats of arms"),
    ("j", "Genealogical tables"),
    ("k", "Forms"),
    ("l", "Samples"),
    ("m", "Phonodisc, phonowire, etc."),
    ("o", "Photographs"),
    ("p", "Illuminations"),
    ("|", "No attempt to code"),
];

const TARGET_AUDIENCE: CodeTable = &[
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
];

const FORM_OF_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("r", "Regular print reproduction"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const ONLINE_FORM_OF_ITEM: CodeTable = &[
    (" ", "Unknown or not specified"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("|", "No attempt to code"),
];

const BOOK_CONTENTS: CodeTable = &[
    (" ", "No specified nature of contents"),
    ("a", "Abstracts/summaries"),
    ("b", "Bibliographies"),
    ("c", "Catalogs"),
    ("d", "Dictionaries"),
    ("e", "Encyclopedias"),
    ("f", "Handbooks"),
    ("g", "Legal articles"),
    ("i", "Indexes"),
    ("j", "Patent document"),
    ("k", "Discographies"),
    ("l", "Legislation"),
    ("m", "Theses"),
    ("n", "Surveys of literature in a subject area"),
    ("o", "Reviews"),
    ("p", "Programmed texts"),
    ("q", "Filmographies"),
    ("r", "Directories"),
    ("s", "Statistics"),
    ("t", "Technical reports"),
    ("u", "Standards/specifications"),
    ("v", "Legal cases and case notes"),
    ("w", "Law reports and digests"),
    ("y", "Yearbooks"),
    ("z", "Treaties"),
    ("2", "Offprints"),
    ("5", "Calendars"),
    ("6", "Comics/graphic novels"),
    ("|", "No attempt to code"),
];

const GOVERNMENT_PUBLICATION: CodeTable = &[
    (" ", "Not a government publication"),
    ("a", "Autonomous or semi-autonomous component"),
    ("c", "Multilocal"),
    ("f", "Federal/national"),
    ("i", "International intergovernmental"),
    ("l", "Local"),
    ("m", "Multistate"),
    ("o", "Government publication-level undetermined"),
    ("s", "State, provincial, territorial, dependent, etc."),
    ("u", "Unknown if item is government publication"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const CONFERENCE_PUBLICATION: CodeTable = &[
    ("0", "Not a conference publication"),
    ("1", "Conference publication"),
    ("|", "No attempt to code"),
];

const FESTSCHRIFT: CodeTable = &[
    ("0", "Not a festschrift"),
    ("1", "Festschrift"),
    ("|", "No attempt to code"),
];

const INDEX: CodeTable = &[
    ("0", "No index"),
    ("1", "Index present"),
    ("|", "No attempt to code"),
];

const LITERARY_FORM: CodeTable = &[
    ("0", "Not fiction (not further specified)"),
    ("1", "Fiction (not further specified)"),
    ("c", "Comic strips"),
    ("d", "Dramas"),
    ("e", "Essays"),
    ("f", "Novels"),
    ("h", "Humor, satires, etc."),
    ("i", "Letters"),
    ("j", "Short stories"),
    ("m", "Mixed forms"),
    ("p", "Poetry"),
    ("s", "Speeches"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const BIOGRAPHY: CodeTable = &[
    (" ", "No biographical material"),
    ("a", "Autobiography"),
    ("b", "Individual biography"),
    ("c", "Collective biography"),
    ("d", "Contains biographical information"),
    ("|", "No attempt to code"),
];

const COMPUTER_FILE_TYPE: CodeTable = &[
    ("a", "Numeric data"),
    ("b", "Computer program"),
    ("c", "Representational"),
    ("d", "Document"),
    ("e", "Bibliographic data"),
    ("f", "Font"),
    ("g", "Game"),
    ("h", "Sound"),
    ("i", "Interactive multimedia"),
    ("j", "Online system or service"),
    ("m", "Combination"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const RELIEF: CodeTable = &[
    (" ", "No relief shown"),
    ("a", "Contours"),
    ("b", "Shading"),
    ("c", "Gradient and bathymetric tints"),
    ("d", "Hachures"),
    ("e", "Bathymetry/soundings"),
    ("f", "Form lines"),
    ("g", "Spot heights"),
    ("i", "Pictorially"),
    ("j", "Land forms"),
    ("k", "Bathymetry/isolines"),
    ("m", "Rock drawings"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const PROJECTION: CodeTable = &[
    ("  ", "Projection not specified"),
    ("aa", "Aitoff"),
    ("ab", "Gnomic"),
    ("ac", "Lambert's azimuthal equal area"),
    ("ad", "Orthographic"),
    ("ae", "Azimuthal equidistant"),
    ("af", "Stereographic"),
    ("ag", "General vertical near-sided"),
    ("am", "Modified stereographic for Alaska"),
    ("an", "Chamberlin trimetric"),
    ("ap", "Polar stereographic"),
    ("au", "Azimuthal, specific type unknown"),
    ("az", "Azimuthal, other"),
    ("ba", "Gall"),
    ("bb", "Goode's homolographic"),
    ("bc", "Lambert's cylindrical equal area"),
    ("bd", "Mercator"),
    ("be", "Miller"),
    ("bf", "Mollweide"),
    ("bg", "Sinusoidal"),
    ("bh", "Transverse Mercator"),
    ("bi", "Gauss-Kruger"),
    ("bj", "Equirectangular"),
    ("bk", "Krovak"),
    ("bl", "Cassini-Soldner"),
    ("bo", "Oblique Mercator"),
    ("br", "Robinson"),
    ("bs", "Space oblique Mercator"),
    ("bu", "Cylindrical, specific type unknown"),
    ("bz", "Cylindrical, other"),
    ("ca", "Albers equal area"),
    ("cb", "Bonne"),
    ("cc", "Lambert's conformal conic"),
    ("ce", "Equidistant conic"),
    ("cp", "Polyconic"),
    ("cu", "Conic, specific type unknown"),
    ("cz", "Conic, other"),
    ("da", "Armadillo"),
    ("db", "Butterfly"),
    ("dc", "Eckert"),
    ("dd", "Goode's homolosine"),
    ("de", "Miller's bipolar oblique conformal conic"),
    ("df", "Van Der Grinten"),
    ("dg", "Dimaxion"),
    ("dh", "Cordiform"),
    ("dl", "Lambert conformal"),
    ("zz", "Other"),
    ("||", "No attempt to code"),
];

const CARTOGRAPHIC_TYPE: CodeTable = &[
    ("a", "Single map"),
    ("b", "Map series"),
    ("c", "Map serial"),
    ("d", "Globe"),
    ("e", "Atlas"),
    ("f", "Separate supplement to another work"),
    ("g", "Bound as part of another work"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MAP_SPECIAL_FORMAT: CodeTable = &[
    (" ", "No specified special format characteristics"),
    ("e", "Manuscript"),
    ("j", "Picture card, post card"),
    ("k", "Calendar"),
    ("l", "Puzzle"),
    ("n", "Game"),
    ("o", "Wall map"),
    ("p", "Playing cards"),
    ("r", "Loose-leaf"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const FORM_OF_COMPOSITION: CodeTable = &[
    ("an", "Anthems"),
    ("bd", "Ballads"),
    ("bg", "Bluegrass music"),
    ("bl", "Blues"),
    ("bt", "Ballets"),
    ("ca", "Chaconnes"),
    ("cb", "Chants, Other religions"),
    ("cc", "Chant, Christian"),
    ("cg", "Concerti grossi"),
    ("ch", "Chorales"),
    ("cl", "Chorale preludes"),
    ("cn", "Canons and rounds"),
    ("co", "Concertos"),
    ("cp", "Chansons, polyphonic"),
    ("cr", "Carols"),
    ("cs", "Chance compositions"),
    ("ct", "Cantatas"),
    ("cy", "Country music"),
    ("cz", "Canzonas"),
    ("df", "Dance forms"),
    ("dv", "Divertimentos, serenades, cassations, divertissements, and notturni"),
    ("fg", "Fugues"),
    ("fl", "Flamenco"),
    ("fm", "Folk music"),
    ("ft", "Fantasias"),
    ("gm", "Gospel music"),
    ("hy", "Hymns"),
    ("jz", "Jazz"),
    ("mc", "Musical revues and comedies"),
    ("md", "Madrigals"),
    ("mi", "Minuets"),
    ("mo", "Motets"),
    ("mp", "Motion picture music"),
    ("mr", "Marches"),
    ("ms", "Masses"),
    ("mu", "Multiple forms"),
    ("mz", "Mazurkas"),
    ("nc", "Nocturnes"),
    ("nn", "Not applicable"),
    ("op", "Operas"),
    ("or", "Oratorios"),
    ("ov", "Overtures"),
    ("pg", "Program music"),
    ("pm", "Passion music"),
    ("po", "Polonaises"),
    ("pp", "Popular music"),
    ("pr", "Preludes"),
    ("ps", "Passacaglias"),
    ("pt", "Part-songs"),
    ("pv", "Pavans"),
    ("rc", "Rock music"),
    ("rd", "Rondos"),
    ("rg", "Ragtime music"),
    ("ri", "Ricercars"),
    ("rp", "Rhapsodies"),
    ("rq", "Requiems"),
    ("sd", "Square dance music"),
    ("sg", "Songs"),
    ("sn", "Sonatas"),
    ("sp", "Symphonic poems"),
    ("st", "Studies and exercises"),
    ("su", "Suites"),
    ("sy", "Symphonies"),
    ("tc", "Toccatas"),
    ("tl", "Teatro lirico"),
    ("ts", "Trio-sonatas"),
    ("uu", "Unknown"),
    ("vi", "Villancicos"),
    ("vr", "Variations"),
    ("wz", "Waltzes"),
    ("za", "Zarzuelas"),
    ("zz", "Other"),
    ("||", "No attempt to code"),
];

const FORMAT_OF_MUSIC: CodeTable = &[
    ("a", "Full score"),
    ("b", "Miniature or study score"),
    ("c", "Accompaniment reduced for keyboard"),
    ("d", "Voice score with accompaniment omitted"),
    ("e", "Condensed score or piano-conductor score"),
    ("g", "Close score"),
    ("h", "Chorus score"),
    ("i", "Condensed score"),
    ("j", "Performer-conductor part"),
    ("k", "Vocal score"),
    ("l", "Score"),
    ("m", "Multiple score formats"),
    ("n", "Not applicable"),
    ("p", "Piano score"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const MUSIC_PARTS: CodeTable = &[
    (" ", "No parts in hand or not specified"),
    ("d", "Instrumental and vocal parts"),
    ("e", "Instrumental parts"),
    ("f", "Vocal parts"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const ACCOMPANYING_MATTER: CodeTable = &[
    (" ", "No accompanying matter"),
    ("a", "Discography"),
    ("b", "Bibliography"),
    ("c", "Thematic index"),
    ("d", "Libretto or text"),
    ("e", "Biography of composer or author"),
    ("f", "Biography of performer or history of ensemble"),
    ("g", "Technical and/or historical information on instruments"),
    ("h", "Technical information on music"),
    ("i", "Historical information"),
    ("k", "Ethnological information"),
    ("r", "Instructional materials"),
    ("s", "Music"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const LITERARY_TEXT: CodeTable = &[
    (" ", "Item is a music sound recording"),
    ("a", "Autobiography"),
    ("b", "Biography"),
    ("c", "Conference proceedings"),
    ("d", "Drama"),
    ("e", "Essays"),
    ("f", "Fiction"),
    ("g", "Reporting"),
    ("h", "History"),
    ("i", "Instruction"),
    ("j", "Language instruction"),
    ("k", "Comedy"),
    ("l", "Lectures, speeches"),
    ("m", "Memoirs"),
    ("n", "Not applicable"),
    ("o", "Folktales"),
    ("p", "Poetry"),
    ("r", "Rehearsals"),
    ("s", "Sounds"),
    ("t", "Interviews"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TRANSPOSITION: CodeTable = &[
    (" ", "Not arrangement or transposition or not specified"),
    ("a", "Transposition"),
    ("b", "Arrangement"),
    ("c", "Both transposed and arranged"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("|", "No attempt to code"),
];

const FREQUENCY: CodeTable = &[
    (" ", "No determinable frequency"),
    ("a", "Annual"),
    ("b", "Bimonthly"),
    ("c", "Semiweekly"),
    ("d", "Daily"),
    ("e", "Biweekly"),
    ("f", "Semiannual"),
    ("g", "Biennial"),
    ("h", "Triennial"),
    ("i", "Three times a week"),
    ("j", "Three times a month"),
    ("k", "Continuously updated"),
    ("m", "Monthly"),
    ("q", "Quarterly"),
    ("s", "Semimonthly"),
    ("t", "Three times a year"),
    ("u", "Unknown"),
    ("w", "Weekly"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const REGULARITY: CodeTable = &[
    ("n", "Normalized irregular"),
    ("r", "Regular"),
    ("u", "Unknown"),
    ("x", "Completely irregular"),
    ("|", "No attempt to code"),
];

const CONTINUING_RESOURCE_TYPE: CodeTable = &[
    (" ", "None of the following"),
    ("d", "Updating database"),
    ("l", "Updating loose-leaf"),
    ("m", "Monographic series"),
    ("n", "Newspaper"),
    ("p", "Periodical"),
    ("w", "Updating Web site"),
    ("|", "No attempt to code"),
];

const FORM_OF_ORIGINAL_ITEM: CodeTable = &[
    (" ", "None of the following"),
    ("a", "Microfilm"),
    ("b", "Microfiche"),
    ("c", "Microopaque"),
    ("d", "Large print"),
    ("e", "Newspaper format"),
    ("f", "Braille"),
    ("o", "Online"),
    ("q", "Direct electronic"),
    ("s", "Electronic"),
    ("|", "No attempt to code"),
];

const SERIAL_CONTENTS: CodeTable = &[
    (" ", "Not specified"),
    ("a", "Abstracts/summaries"),
    ("b", "Bibliographies"),
    ("c", "Catalogs"),
    ("d", "Dictionaries"),
    ("e", "Encyclopedias"),
    ("f", "Handbooks"),
    ("g", "Legal articles"),
    ("h", "Biography"),
    ("i", "Indexes"),
    ("k", "Discographies"),
    ("l", "Legislation"),
    ("m", "Theses"),
    ("n", "Surveys of literature in a subject area"),
    ("o", "Reviews"),
    ("p", "Programmed texts"),
    ("q", "Filmographies"),
    ("r", "Directories"),
    ("s", "Statistics"),
    ("t", "Technical reports"),
    ("u", "Standards/specifications"),
    ("v", "Legal cases and case notes"),
    ("w", "Law reports and digests"),
    ("y", "Yearbooks"),
    ("z", "Treaties"),
    ("5", "Calendars"),
    ("6", "Comics/graphic novels"),
    ("|", "No attempt to code"),
];

const ORIGINAL_SCRIPT: CodeTable = &[
    (" ", "No alphabet or script given/No key title"),
    ("a", "Basic Roman"),
    ("b", "Extended Roman"),
    ("c", "Cyrillic"),
    ("d", "Japanese"),
    ("e", "Chinese"),
    ("f", "Arabic"),
    ("g", "Greek"),
    ("h", "Hebrew"),
    ("i", "Thai"),
    ("j", "Devanagari"),
    ("k", "Korean"),
    ("l", "Tamil"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const ENTRY_CONVENTION: CodeTable = &[
    ("0", "Successive entry"),
    ("1", "Latest entry"),
    ("2", "Integrated entry"),
    ("|", "No attempt to code"),
];

const RUNNING_TIME: CodeTable = &[
    ("000", "Running time exceeds three characters"),
    ("---", "Unknown"),
    ("nnn", "Not applicable"),
    ("|||", "No attempt to code"),
];

const VISUAL_MATERIAL_TYPE: CodeTable = &[
    ("a", "Art original"),
    ("b", "Kit"),
    ("c", "Art reproduction"),
    ("d", "Diorama"),
    ("f", "Filmstrip"),
    ("g", "Game"),
    ("i", "Picture"),
    ("k", "Graphic"),
    ("l", "Technical drawing"),
    ("m", "Motion picture"),
    ("n", "Chart"),
    ("o", "Flash card"),
    ("p", "Microscope slide"),
    ("q", "Model"),
    ("r", "Realia"),
    ("s", "Slide"),
    ("t", "Transparency"),
    ("v", "Videorecording"),
    ("w", "Toy"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];

const TECHNIQUE: CodeTable = &[
    ("a", "Animation"),
    ("c", "Animation and live action"),
    ("l", "Live action"),
    ("n", "Not applicable"),
    ("u", "Unknown"),
    ("z", "Other"),
    ("|", "No attempt to code"),
];
