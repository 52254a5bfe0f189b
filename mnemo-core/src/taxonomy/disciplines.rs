use super::TagDef;

/// Producing discipline, judged from affiliation, venue and method.
pub static DISCIPLINES: &[TagDef] = &[
    TagDef::new(
        "DSOC",
        "Sociology",
        &[
            "sociology",
            "sociological",
            "society",
            "social theory",
            "sociologist",
        ],
    ),
    TagDef::new("DHIS", "History", &["history", "historical", "historiography"]),
    TagDef::new(
        "DSPY",
        "Social Psychology",
        &[
            "social psychology",
            "social behavior",
            "group psychology",
        ],
    ),
    TagDef::new(
        "DNEU",
        "Neuroscience",
        &[
            "neuroscience",
            "neural",
            "cognitive science",
            "neurological",
        ],
    ),
    TagDef::new(
        "DPOL",
        "Political Science",
        &[
            "political science",
            "politics",
            "international relations",
            "human rights",
            "transitional justice",
        ],
    ),
    TagDef::new(
        "DANT",
        "Anthropology",
        &[
            "anthropology",
            "anthropological",
            "cultural anthropology",
            "ethnography",
            "anthropologist",
        ],
    ),
    TagDef::new("DGEO", "Geography", &["geography", "geographical", "geographer"]),
    TagDef::new(
        "DARC",
        "Archaeology",
        &[
            "archaeology",
            "archaeological",
            "excavation",
            "archaeologist",
        ],
    ),
    TagDef::new("DLIT", "Literature", &["literature", "literary", "literary studies"]),
    TagDef::new("DCUL", "Cultural Studies", &["cultural studies", "cultural theory"]),
    TagDef::new("DLAW", "Legal Studies", &["legal studies", "jurisprudence", "legal scholar"]),
    TagDef::new(
        "DPHI",
        "Philosophy",
        &[
            "philosophy",
            "philosophical",
            "metaphysics",
            "epistemology",
            "philosopher",
        ],
    ),
    TagDef::new(
        "DPSY",
        "Psychology",
        &[
            "psychology",
            "psychological",
            "mental health",
            "psychologist",
        ],
    ),
    TagDef::new(
        "DMED",
        "Film/Media Studies",
        &[
            "film studies",
            "media studies",
            "cinema",
            "film scholar",
        ],
    ),
    TagDef::new(
        "DEDU",
        "Education",
        &[
            "education",
            "educational",
            "pedagogy",
            "educational studies",
        ],
    ),
    TagDef::new(
        "DHUM",
        "Humanities",
        &[
            "humanities",
            "humanistic",
            "humanities studies",
            "humanist",
        ],
    ),
    TagDef::new(
        "DSS",
        "Social Sciences",
        &[
            "social sciences",
            "social science",
            "interdisciplinary",
            "economics",
            "criminology",
            "social work",
        ],
    ),
    TagDef::new("DMU", "Museum Studies", &["museum studies", "curation"]),
    TagDef::new(
        "DHE",
        "Heritage Studies",
        &[
            "heritage studies",
            "cultural heritage",
            "heritage scholar",
        ],
    ),
    TagDef::new("DAR", "Archival Studies", &["archival studies", "archival", "archivist"]),
];
