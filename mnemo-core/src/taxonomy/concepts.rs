use super::TagDef;

/// Memory concepts a publication is most concerned with.
pub static CONCEPTS: &[TagDef] = &[
    TagDef::new("CTArchives", "Archives", &["archives", "archival", "archival memory"]),
    TagDef::new(
        "CTAutobiographicalMemory",
        "Autobiographical Memory",
        &[
            "autobiographical memory",
            "personal memory",
            "life story",
            "autobiography",
        ],
    ),
    TagDef::new(
        "CTAgonisticMemory",
        "Agonistic Memory",
        &[
            "agonistic memory",
            "conflict memory",
            "contestation",
            "memory conflict",
        ],
    ),
    TagDef::new("CTAmnesia", "Amnesia", &["amnesia", "memory loss", "memory impairment"]),
    TagDef::new(
        "CTAestheticMemory",
        "Aesthetic Memory",
        &[
            "aesthetic memory",
            "artistic memory",
            "beauty memory",
            "aesthetic experience",
        ],
    ),
    TagDef::new(
        "CTBanalMnemonics",
        "Banal Mnemonics",
        &[
            "banal mnemonics",
            "everyday memory",
            "mundane memory",
            "ordinary memory",
        ],
    ),
    TagDef::new("CTCanons", "Canons", &["canons", "canonical", "canonical memory"]),
    TagDef::new(
        "CTCommunicativeMemory",
        "Communicative Memory",
        &[
            "communicative memory",
            "memory communication",
        ],
    ),
    TagDef::new(
        "CTCulturalTrauma",
        "Cultural Trauma",
        &[
            "cultural trauma",
            "trauma culture",
            "collective trauma",
        ],
    ),
    TagDef::new(
        "CTCollectiveMemory",
        "Collective Memory",
        &[
            "collective memory",
            "shared memory",
            "group memory",
            "social memory",
        ],
    ),
    TagDef::new(
        "CTCulturalMemory",
        "Cultural Memory",
        &[
            "cultural memory",
            "cultural heritage",
            "cultural tradition",
        ],
    ),
    TagDef::new(
        "CTCosmopolitanMemory",
        "Cosmopolitan Memory",
        &[
            "cosmopolitan memory",
            "global memory",
            "world memory",
        ],
    ),
    TagDef::new(
        "CTCommemoration",
        "Commemoration",
        &[
            "commemoration",
            "memorial",
            "remembrance",
            "anniversary",
        ],
    ),
    TagDef::new(
        "CTCatastrophicMemory",
        "Catastrophic Memory",
        &[
            "catastrophic memory",
            "disaster memory",
            "catastrophe",
        ],
    ),
    TagDef::new(
        "CTCounterMemory",
        "Counter-Memory",
        &[
            "counter memory",
            "oppositional memory",
            "resistance memory",
        ],
    ),
    TagDef::new("CTDialogical", "Dialogical", &["dialogical", "dialogical memory"]),
    TagDef::new(
        "CTDeclarativeMemory",
        "Declarative Memory",
        &[
            "declarative memory",
            "explicit memory",
            "conscious memory",
        ],
    ),
    TagDef::new(
        "CTDigitalMemory",
        "Digital Memory",
        &[
            "digital memory",
            "online memory",
            "virtual memory",
            "digital",
        ],
    ),
    TagDef::new("CTDutyToRemember", "Duty to Remember", &["duty to remember", "memory obligation"]),
    TagDef::new(
        "CTEngrams",
        "Engrams",
        &[
            "engrams",
            "memory traces",
            "neural patterns",
            "memory imprint",
        ],
    ),
    TagDef::new(
        "CTEpisodicMemory",
        "Episodic Memory",
        &[
            "episodic memory",
            "event memory",
            "episode memory",
        ],
    ),
    TagDef::new(
        "CTExplicitMemory",
        "Explicit Memory",
        &[
            "explicit memory",
            "conscious memory",
            "declarative memory",
        ],
    ),
    TagDef::new(
        "CTEntangledMemory",
        "Entangled Memory",
        &[
            "entangled memory",
            "interconnected memory",
            "memory entanglement",
        ],
    ),
    TagDef::new(
        "CTFamilyMemory",
        "Family Memory",
        &[
            "family memory",
            "domestic memory",
            "kinship memory",
        ],
    ),
    TagDef::new(
        "CTFlashbulbMemory",
        "Flashbulb Memory",
        &[
            "flashbulb memory",
            "vivid memory",
            "intense memory",
        ],
    ),
    TagDef::new("CTFlashback", "Flashback", &["flashback", "memory flashback", "intrusive memory"]),
    TagDef::new(
        "CTForgetting",
        "Forgetting",
        &[
            "forgetting",
            "memory loss",
            "oblivion",
            "memory decay",
        ],
    ),
    TagDef::new(
        "CTForgettingCurve",
        "Forgetting Curve",
        &[
            "forgetting curve",
            "memory decay",
            "memory retention",
        ],
    ),
    TagDef::new(
        "CTFalseMemory",
        "False Memory",
        &[
            "false memory",
            "memory error",
            "inaccurate memory",
        ],
    ),
    TagDef::new("CTGenreMemory", "Genre Memory", &["genre memory", "memory genre"]),
    TagDef::new(
        "CTGlobitalMemory",
        "Globital Memory",
        &[
            "globital memory",
            "global digital",
            "digital global",
        ],
    ),
    TagDef::new(
        "CTGlobalMemory",
        "Global Memory",
        &[
            "global memory",
            "world memory",
            "international memory",
        ],
    ),
    TagDef::new(
        "CTGenerationalMemory",
        "Generational Memory",
        &[
            "generational memory",
            "generation memory",
            "intergenerational",
        ],
    ),
    TagDef::new(
        "CTHeritage",
        "Heritage",
        &[
            "heritage",
            "cultural heritage",
            "inheritance",
            "heritage memory",
        ],
    ),
    TagDef::new(
        "CTHistoricalMemory",
        "Historical Memory",
        &[
            "historical memory",
            "memory of history",
            "past memory",
        ],
    ),
    TagDef::new(
        "CTHyperthymesia",
        "Hyperthymesia",
        &[
            "hyperthymesia",
            "exceptional memory",
            "superior memory",
        ],
    ),
    TagDef::new("CTIdentity", "Identity", &["identity", "memory identity", "identity formation"]),
    TagDef::new(
        "CTImplicitMemory",
        "Implicit Memory",
        &[
            "implicit memory",
            "unconscious memory",
            "automatic memory",
        ],
    ),
    TagDef::new(
        "CTIntergenerationalTransmissions",
        "Intergenerational Transmissions",
        &[
            "intergenerational transmission",
            "generation transmission",
        ],
    ),
    TagDef::new(
        "CTIconicMemory",
        "Iconic Memory",
        &[
            "iconic memory",
            "visual memory",
            "image memory",
        ],
    ),
    TagDef::new(
        "CTImaginativeReconstruction",
        "Imaginative Reconstruction",
        &[
            "imaginative reconstruction",
            "creative memory",
        ],
    ),
    TagDef::new("CTLongueDuree", "Longue Durée", &["longue durée", "enduring memory"]),
    TagDef::new(
        "CTMultidirectionalMemory",
        "Multidirectional Memory",
        &[
            "multidirectional memory",
            "multi-directional",
            "memory flows",
        ],
    ),
    TagDef::new(
        "CTMnemonicSecurity",
        "Mnemonic Security",
        &[
            "mnemonic security",
            "memory security",
            "memory protection",
        ],
    ),
    TagDef::new(
        "CTMilieuDeMemoire",
        "Milieu de Memoire",
        &[
            "milieu de mémoire",
            "memory environment",
            "memory space",
        ],
    ),
    TagDef::new(
        "CTMemoryLaws",
        "Memory Laws",
        &[
            "memory laws",
            "legal memory",
            "memory legislation",
        ],
    ),
    TagDef::new(
        "CTMnemohistory",
        "Mnemohistory",
        &[
            "mnemohistory",
            "history of memory",
            "memory historiography",
        ],
    ),
    TagDef::new(
        "CTMemoryConsolidation",
        "Memory Consolidation",
        &[
            "memory consolidation",
            "memory strengthening",
        ],
    ),
    TagDef::new("CTMemoryRetrieval", "Memory Retrieval", &["memory retrieval"]),
    TagDef::new(
        "CTMemoryEncoding",
        "Memory Encoding",
        &[
            "memory encoding",
            "memory formation",
            "memory creation",
        ],
    ),
    TagDef::new(
        "CTMemoryStorage",
        "Memory Storage",
        &[
            "memory storage",
            "memory preservation",
            "memory retention",
        ],
    ),
    TagDef::new(
        "CTMemoryTrace",
        "Memory Trace",
        &[
            "memory trace",
            "neural trace",
            "memory imprint",
        ],
    ),
    TagDef::new(
        "CTMemorySpan",
        "Memory Span",
        &[
            "memory span",
            "memory capacity",
            "memory duration",
        ],
    ),
    TagDef::new(
        "CTMemoryDistortion",
        "Memory Distortion",
        &[
            "memory distortion",
            "memory alteration",
            "memory error",
        ],
    ),
    TagDef::new(
        "CTMemoryAccuracy",
        "Memory Accuracy",
        &[
            "memory accuracy",
            "memory precision",
            "memory reliability",
        ],
    ),
    TagDef::new(
        "CTMemoryBias",
        "Memory Bias",
        &[
            "memory bias",
            "memory distortion",
            "memory error",
        ],
    ),
    TagDef::new(
        "CTMemoryEnhancement",
        "Memory Enhancement",
        &[
            "memory enhancement",
            "memory improvement",
            "memory training",
        ],
    ),
    TagDef::new(
        "CTMemorySuppression",
        "Memory Suppression",
        &[
            "memory suppression",
            "memory inhibition",
        ],
    ),
    TagDef::new(
        "CTMemorySchemas",
        "Memory Schemas",
        &[
            "memory schemas",
            "memory frameworks",
            "memory organization",
        ],
    ),
    TagDef::new(
        "CTMnemonics",
        "Mnemonics",
        &[
            "mnemonics",
            "memory techniques",
            "memory strategies",
        ],
    ),
    TagDef::new(
        "CTMemoryPolitics",
        "Memory Politics",
        &[
            "memory politics",
            "political memory",
            "memory policy",
        ],
    ),
    TagDef::new(
        "CTMnemonicCommunities",
        "Mnemonic Communities",
        &[
            "mnemonic communities",
            "memory communities",
        ],
    ),
    TagDef::new(
        "CTMnemonicSocialization",
        "Mnemonic Socialization",
        &[
            "mnemonic socialization",
            "memory learning",
        ],
    ),
    TagDef::new(
        "CTMemoryEthics",
        "Memory Ethics",
        &[
            "memory ethics",
            "ethical memory",
            "memory morality",
        ],
    ),
    TagDef::new(
        "CTMemoryPractices",
        "Memory Practices",
        &[
            "memory practices",
            "memory activities",
            "memory rituals",
        ],
    ),
    TagDef::new(
        "CTMnemonicStandoff",
        "Mnemonic Standoff",
        &[
            "mnemonic standoff",
            "memory conflict",
            "memory dispute",
        ],
    ),
    TagDef::new(
        "CTNationalMemory",
        "National Memory",
        &[
            "national memory",
            "state memory",
            "country memory",
        ],
    ),
    TagDef::new(
        "CTNonContemporaneity",
        "Non-Contemporaneity",
        &[
            "non-contemporaneity",
            "temporal disjunction",
        ],
    ),
    TagDef::new(
        "CTOfficialMemory",
        "Official Memory",
        &[
            "official memory",
            "institutional memory",
            "state memory",
        ],
    ),
    TagDef::new(
        "CTParticularism",
        "Particularism",
        &[
            "particularism",
            "specific memory",
            "particular memory",
        ],
    ),
    TagDef::new(
        "CTPrivateMemory",
        "Private Memory",
        &[
            "private memory",
            "personal memory",
            "individual memory",
        ],
    ),
    TagDef::new(
        "CTPublicMemory",
        "Public Memory",
        &[
            "public memory",
            "collective memory",
            "shared memory",
        ],
    ),
    TagDef::new(
        "CTPathDependency",
        "Path-Dependency",
        &[
            "path dependency",
            "memory paths",
            "memory trajectories",
        ],
    ),
    TagDef::new(
        "CTProceduralMemory",
        "Procedural Memory",
        &[
            "procedural memory",
            "skill memory",
            "habit memory",
        ],
    ),
    TagDef::new(
        "CTProstheticMemory",
        "Prosthetic Memory",
        &[
            "prosthetic memory",
            "external memory",
            "memory aids",
        ],
    ),
    TagDef::new(
        "CTPostColonialMemory",
        "Post-Colonial Memory",
        &[
            "post-colonial memory",
            "colonial memory",
            "imperial memory",
        ],
    ),
    TagDef::new(
        "CTProspectiveMemory",
        "Prospective Memory",
        &[
            "prospective memory",
            "future memory",
            "memory planning",
        ],
    ),
    TagDef::new(
        "CTProfaneMemory",
        "Profane Memory",
        &[
            "profane memory",
            "secular memory",
            "non-religious memory",
        ],
    ),
    TagDef::new("CTPostMemory", "Post-Memory", &["post-memory", "memory transmission"]),
    TagDef::new(
        "CTRealmsOfMemory",
        "Realms of Memory",
        &[
            "realms of memory",
            "memory domains",
            "memory spheres",
        ],
    ),
    TagDef::new("CTRegret", "Regret", &["regret", "memory regret", "remorse"]),
    TagDef::new("CTRestitution", "Restitution", &["restitution", "memory restitution"]),
    TagDef::new("CTReparations", "Reparations", &["reparations", "memory reparations"]),
    TagDef::new("CTRedress", "Redress", &["redress", "memory redress"]),
    TagDef::new(
        "CTRepressedMemory",
        "Repressed Memory",
        &[
            "repressed memory",
            "suppressed memory",
            "hidden memory",
        ],
    ),
    TagDef::new(
        "CTRecoveredMemory",
        "Recovered Memory",
        &[
            "recovered memory",
            "retrieved memory",
            "restored memory",
        ],
    ),
    TagDef::new("CTRetrospectiveMemory", "Retrospective Memory", &["retrospective memory"]),
    TagDef::new(
        "CTRevisionistMemory",
        "Revisionist Memory",
        &[
            "revisionist memory",
            "memory revision",
        ],
    ),
    TagDef::new(
        "CTReligiousMemory",
        "Religious Memory",
        &[
            "religious memory",
            "sacred memory",
            "spiritual memory",
        ],
    ),
    TagDef::new(
        "CTSemanticMemory",
        "Semantic Memory",
        &[
            "semantic memory",
            "knowledge memory",
            "fact memory",
        ],
    ),
    TagDef::new(
        "CTSocialFrameworks",
        "Social Frameworks",
        &[
            "social frameworks",
            "memory frameworks",
            "social structures",
        ],
    ),
    TagDef::new("CTSlowMemory", "Slow Memory", &["slow memory", "gradual memory"]),
    TagDef::new(
        "CTSocialMemory",
        "Social Memory",
        &[
            "social memory",
            "memory society",
            "social remembrance",
        ],
    ),
    TagDef::new(
        "CTScreenMemory",
        "Screen Memory",
        &[
            "screen memory",
            "protective memory",
            "memory defense",
        ],
    ),
    TagDef::new(
        "CTSensoryMemory",
        "Sensory Memory",
        &[
            "sensory memory",
            "sensory recall",
            "perceptual memory",
        ],
    ),
    TagDef::new(
        "CTSourceMemory",
        "Source Memory",
        &[
            "source memory",
            "memory source",
            "origin memory",
        ],
    ),
    TagDef::new(
        "CTSacredMemory",
        "Sacred Memory",
        &[
            "sacred memory",
            "holy memory",
            "spiritual memory",
        ],
    ),
    TagDef::new("CTTrauma", "Trauma", &["trauma", "traumatic memory", "trauma studies"]),
    TagDef::new(
        "CTTradition",
        "Tradition",
        &[
            "tradition",
            "traditional memory",
            "customary memory",
        ],
    ),
    TagDef::new(
        "CTTravellingMemory",
        "Traveling Memory",
        &[
            "traveling memory",
            "mobile memory",
            "memory movement",
        ],
    ),
    TagDef::new(
        "CTTransnationalMemory",
        "Transnational Memory",
        &[
            "transnational memory",
            "cross-national memory",
        ],
    ),
    TagDef::new(
        "CTTransculturalMemory",
        "Transcultural Memory",
        &[
            "transcultural memory",
            "cross-cultural memory",
        ],
    ),
    TagDef::new(
        "CTTransoceanicMemory",
        "Transoceanic Memory",
        &[
            "transoceanic memory",
            "ocean memory",
            "maritime memory",
        ],
    ),
    TagDef::new(
        "CTUniversalism",
        "Universalism",
        &[
            "universalism",
            "universal memory",
            "global memory",
        ],
    ),
    TagDef::new(
        "CTVernacularMemory",
        "Vernacular Memory",
        &[
            "vernacular memory",
            "local memory",
            "folk memory",
        ],
    ),
    TagDef::new(
        "CTWorkingMemory",
        "Working Memory",
        &[
            "working memory",
            "short-term memory",
            "immediate memory",
        ],
    ),
];
