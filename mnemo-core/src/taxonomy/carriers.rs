use super::TagDef;

/// The means through which memory is carried.
pub static MEMORY_CARRIERS: &[TagDef] = &[
    TagDef::new("MCSO", "Social media", &["social media", "digital social"]),
    TagDef::new("MCLI", "Literature", &["literature", "literary"]),
    TagDef::new("MCFI", "Film", &["film", "cinema", "movie", "motion picture", "cinematic"]),
    TagDef::new(
        "MCT",
        "Testimony",
        &[
            "testimony",
            "witness",
            "oral history",
            "testimonial",
            "witness account",
        ],
    ),
    TagDef::new("MCAR", "Art", &["artistic", "visual art", "painting", "sculpture", "artwork"]),
    TagDef::new("MCPH", "Photography", &["photography", "photo", "photographic"]),
    TagDef::new(
        "MCC",
        "Commemorations",
        &[
            "commemorations",
            "commemoration",
            "ceremony",
            "ritual",
            "memorial service",
        ],
    ),
    TagDef::new(
        "MCMO",
        "Monuments",
        &[
            "monuments",
            "monument",
            "memorial",
            "statue",
            "memorial structure",
        ],
    ),
    TagDef::new(
        "MCA",
        "Activists",
        &[
            "activists",
            "activism",
            "social movement",
            "protest",
            "activist",
        ],
    ),
    TagDef::new("MCB", "Brain", &["brain", "neural", "neurological", "brain function"]),
    TagDef::new(
        "MCME",
        "Memory scholars",
        &[
            "memory scholars",
            "memory studies",
            "memory researcher",
            "memory academic",
        ],
    ),
    TagDef::new("MCLA", "Law", &["law", "legal system", "jurisprudence", "legal framework"]),
    TagDef::new("MCED", "Educational", &["school", "pedagogy"]),
    TagDef::new("MCMU", "Museums", &["museums", "museum", "curation"]),
    TagDef::new("MCF", "Family", &["family", "household", "kinship", "family memory"]),
    TagDef::new("MCNAT", "Nation", &["nation", "national identity"]),
];
