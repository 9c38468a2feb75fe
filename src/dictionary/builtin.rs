// Built-in word lists. Keys are lowercase source-locale terms; multi-word keys
// are joined by single spaces. Spelling and title values must stay unique so
// the British-to-American tables can be derived by inversion.

/// Vocabulary used only in American English, mapped to the British term
pub const AMERICAN_ONLY: &[(&str, &str)] = &[
    ("apartment", "flat"),
    ("arugula", "rocket"),
    ("band-aid", "plaster"),
    ("candy", "sweets"),
    ("carnival", "funfair"),
    ("cell phone", "mobile phone"),
    ("checking account", "current account"),
    ("cilantro", "coriander"),
    ("condo", "flat"),
    ("cookie", "biscuit"),
    ("diaper", "nappy"),
    ("dish soap", "washing-up liquid"),
    ("drugstore", "chemist"),
    ("eggplant", "aubergine"),
    ("elevator", "lift"),
    ("fanny pack", "bum bag"),
    ("faucet", "tap"),
    ("flashlight", "torch"),
    ("freeway", "motorway"),
    ("french fries", "chips"),
    ("garbage", "rubbish"),
    ("gasoline", "petrol"),
    ("mailman", "postman"),
    ("math", "maths"),
    ("mom", "mum"),
    ("movie theater", "cinema"),
    ("odds and ends", "bits and bobs"),
    ("pacifier", "dummy"),
    ("parking lot", "car park"),
    ("play hooky", "bunk off"),
    ("potato chips", "crisps"),
    ("public holiday", "bank holiday"),
    ("restroom", "toilet"),
    ("rube goldberg machine", "Heath Robinson device"),
    ("rummage sale", "jumble sale"),
    ("sidewalk", "pavement"),
    ("sneakers", "trainers"),
    ("soccer", "football"),
    ("stroller", "pushchair"),
    ("swap meet", "car boot sale"),
    ("sweater", "jumper"),
    ("trash can", "bin"),
    ("trashcan", "bin"),
    ("truck", "lorry"),
    ("tylenol", "paracetamol"),
    ("vacation", "holiday"),
    ("zip code", "postcode"),
    ("zucchini", "courgette"),
];

/// Vocabulary used only in British English, mapped to the American term
pub const BRITISH_ONLY: &[(&str, &str)] = &[
    ("aubergine", "eggplant"),
    ("bank holiday", "public holiday"),
    ("bicky", "cookie"),
    ("biscuit", "cookie"),
    ("bits and bobs", "odds and ends"),
    ("bum bag", "fanny pack"),
    ("bunk off", "play hooky"),
    ("car boot", "trunk"),
    ("car boot sale", "swap meet"),
    ("car park", "parking lot"),
    ("caster sugar", "superfine sugar"),
    ("chippy", "fish-and-chip shop"),
    ("chips", "french fries"),
    ("cinema", "movie theater"),
    ("coriander", "cilantro"),
    ("courgette", "zucchini"),
    ("crisps", "potato chips"),
    ("dustbin", "trash can"),
    ("fortnight", "two weeks"),
    ("funfair", "carnival"),
    ("gobsmacked", "astonished"),
    ("heath robinson device", "Rube Goldberg machine"),
    ("holidaymaker", "vacationer"),
    ("jumble sale", "rummage sale"),
    ("jumper", "sweater"),
    ("kitchen roll", "paper towels"),
    ("knackered", "exhausted"),
    ("loo", "restroom"),
    ("lorry", "truck"),
    ("maths", "math"),
    ("mobile phone", "cell phone"),
    ("motorway", "freeway"),
    ("mum", "mom"),
    ("nappy", "diaper"),
    ("paracetamol", "Tylenol"),
    ("pavement", "sidewalk"),
    ("petrol", "gasoline"),
    ("postcode", "zip code"),
    ("pushchair", "stroller"),
    ("queue", "line"),
    ("rubbish", "garbage"),
    ("tea towel", "dish towel"),
    ("torch", "flashlight"),
    ("trainers", "sneakers"),
    ("washing-up liquid", "dish soap"),
];

/// Spelling differences, American form to British form
pub const AMERICAN_TO_BRITISH_SPELLING: &[(&str, &str)] = &[
    ("accessorize", "accessorise"),
    ("acclimatize", "acclimatise"),
    ("acknowledgment", "acknowledgement"),
    ("aging", "ageing"),
    ("aluminum", "aluminium"),
    ("analog", "analogue"),
    ("analyze", "analyse"),
    ("analyzed", "analysed"),
    ("analyzing", "analysing"),
    ("anemia", "anaemia"),
    ("anesthetic", "anaesthetic"),
    ("apologize", "apologise"),
    ("apologized", "apologised"),
    ("arbor", "arbour"),
    ("ardor", "ardour"),
    ("armor", "armour"),
    ("artifact", "artefact"),
    ("authorize", "authorise"),
    ("behavior", "behaviour"),
    ("behaviors", "behaviours"),
    ("breathalyze", "breathalyse"),
    ("caliber", "calibre"),
    ("canceled", "cancelled"),
    ("canceling", "cancelling"),
    ("candor", "candour"),
    ("caramelize", "caramelise"),
    ("caramelized", "caramelised"),
    ("catalog", "catalogue"),
    ("center", "centre"),
    ("centers", "centres"),
    ("centimeter", "centimetre"),
    ("characterize", "characterise"),
    ("civilization", "civilisation"),
    ("clamor", "clamour"),
    ("color", "colour"),
    ("colored", "coloured"),
    ("colorful", "colourful"),
    ("colors", "colours"),
    ("cozy", "cosy"),
    ("criticize", "criticise"),
    ("customize", "customise"),
    ("defense", "defence"),
    ("dialog", "dialogue"),
    ("donut", "doughnut"),
    ("emphasize", "emphasise"),
    ("encyclopedia", "encyclopaedia"),
    ("endeavor", "endeavour"),
    ("enroll", "enrol"),
    ("estrogen", "oestrogen"),
    ("favor", "favour"),
    ("favorable", "favourable"),
    ("favorite", "favourite"),
    ("favorites", "favourites"),
    ("fervor", "fervour"),
    ("fetus", "foetus"),
    ("fiber", "fibre"),
    ("finalize", "finalise"),
    ("flavor", "flavour"),
    ("flavors", "flavours"),
    ("fulfill", "fulfil"),
    ("gray", "grey"),
    ("harbor", "harbour"),
    ("honor", "honour"),
    ("honored", "honoured"),
    ("humor", "humour"),
    ("jeweler", "jeweller"),
    ("jewelry", "jewellery"),
    ("kilometer", "kilometre"),
    ("labeled", "labelled"),
    ("labor", "labour"),
    ("liter", "litre"),
    ("maneuver", "manoeuvre"),
    ("maneuvers", "manoeuvres"),
    ("maximize", "maximise"),
    ("memorize", "memorise"),
    ("minimize", "minimise"),
    ("modeled", "modelled"),
    ("mold", "mould"),
    ("mustache", "moustache"),
    ("neighbor", "neighbour"),
    ("neighborhood", "neighbourhood"),
    ("odor", "odour"),
    ("offense", "offence"),
    ("optimize", "optimise"),
    ("organization", "organisation"),
    ("organize", "organise"),
    ("organized", "organised"),
    ("pajamas", "pyjamas"),
    ("paralyze", "paralyse"),
    ("parlor", "parlour"),
    ("pediatric", "paediatric"),
    ("plow", "plough"),
    ("prioritize", "prioritise"),
    ("realize", "realise"),
    ("realized", "realised"),
    ("recognize", "recognise"),
    ("recognized", "recognised"),
    ("rumor", "rumour"),
    ("savior", "saviour"),
    ("savor", "savour"),
    ("skeptic", "sceptic"),
    ("skeptical", "sceptical"),
    ("specialty", "speciality"),
    ("splendor", "splendour"),
    ("standardize", "standardise"),
    ("sulfur", "sulphur"),
    ("summarize", "summarise"),
    ("sympathize", "sympathise"),
    ("theater", "theatre"),
    ("theaters", "theatres"),
    ("traveled", "travelled"),
    ("traveler", "traveller"),
    ("traveling", "travelling"),
    ("tumor", "tumour"),
    ("utilize", "utilise"),
    ("valor", "valour"),
    ("vapor", "vapour"),
    ("vaporize", "vaporise"),
    ("vigor", "vigour"),
    ("visualize", "visualise"),
    ("yogurt", "yoghurt"),
];

/// Honorifics: American form carries the trailing period, British does not
pub const AMERICAN_TO_BRITISH_TITLES: &[(&str, &str)] = &[
    ("mr.", "mr"),
    ("mrs.", "mrs"),
    ("ms.", "ms"),
    ("mx.", "mx"),
    ("dr.", "dr"),
    ("prof.", "prof"),
];
