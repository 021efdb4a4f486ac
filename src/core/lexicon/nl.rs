//! Dutch lexicon

use super::{colloquial, d, m, romantic, RawTable};
use crate::types::HorizontalTag;

pub const TABLE: RawTable = RawTable {
    somatic: &[
        d(r"ik kan niet (?:meer )?ademen|krijg geen lucht|kan geen adem halen", 0.9),
        d(r"pijn op (?:de|mijn) borst|borstpijn|druk op (?:de|mijn) borst", 0.9),
        d(r"hart (?:bonkt|bonst|klopt|raast|gaat tekeer)|hartkloppingen", 0.7),
        d(r"paniekaanval", 0.8),
        d(r"hartaanval", 0.9),
        d(r"flauwvallen|flauw gevallen|bewusteloos", 0.7),
        d(r"stik|stikken|verstikking", 0.8),
        d(r"ik bloed|bloed hevig", 0.8),
        d(r"overdosis|epileptische aanval", 0.9),
        m(r"moe|uitgeput|vermoeid", 0.4),
        m(r"hoofdpijn|migraine", 0.5),
        m(r"misselijk|overgeven", 0.5),
        m(r"duizelig(?:heid)?", 0.4),
        m(r"kan niet slapen|slapeloos(?:heid)?", 0.5),
        m(r"pijn", 0.3),
        m(r"ziek|koorts", 0.4),
        m(r"bang|angstig", 0.3),
        m(r"trillen|zweten", 0.4),
        m(r"lichaam|buikpijn", 0.2),
    ],

    functional: &[
        m(r"hoe (?:kan|moet|doe) ik", 0.4),
        m(r"help me|kun je (?:me )?helpen", 0.3),
        m(r"stap voor stap", 0.5),
        m(r"repareren|installeren|instellen|configureren", 0.5),
        m(r"deadline|inleverdatum", 0.5),
        m(r"afspraak|vergadering|agenda", 0.4),
        m(r"werk|baan|taak|project|huiswerk", 0.3),
        m(r"budget|rekening(?:en)?|belasting(?:aangifte)?|betaling", 0.4),
        m(r"e-mail|mail|rapport|spreadsheet|document", 0.3),
        m(r"recept|boodschappen(?:lijst)?", 0.4),
        m(r"fout|bug|crash", 0.4),
        m(r"plannen|organiseren|checklist", 0.3),
    ],

    relational: &[
        m(r"mijn (?:vrouw|man|partner|vriend(?:in)?|moeder|vader|mama|papa|zoon|dochter|broer|zus|familie|baas|collega|kinderen)", 0.5),
        m(r"relatie|huwelijk", 0.5),
        m(r"eenzaam(?:heid)?|alleen", 0.5),
        m(r"ruzie", 0.5),
        m(r"scheiding|uit elkaar|het uitgemaakt", 0.7),
        m(r"mis (?:je|haar|hem|ze)", 0.5),
        m(r"vrienden|vriendschap", 0.3),
        m(r"niemand begrijpt me", 0.7),
        m(r"vertrouwen|verraden|bedrogen", 0.4),
        m(r"ouders|kinderen", 0.3),
    ],

    existential: &[
        m(r"(?:de )?zin van het leven", 0.9),
        m(r"wat betekent (?:het|dit)(?: allemaal)?", 0.6),
        m(r"wat is het nut", 0.5),
        m(r"doel in (?:mijn )?leven|levensdoel", 0.8),
        m(r"waarom (?:ben ik|zijn we) (?:hier|er)", 0.8),
        m(r"authentiek leven", 0.7),
        m(r"authentiek", 0.35),
        m(r"zinloos|betekenisloos", 0.6),
        m(r"niets doet (?:er )?(?:nog )?toe", 0.7),
        m(r"wie ben ik", 0.6),
        m(r"bang (?:om dood te gaan|voor de dood)", 0.8),
        m(r"sterfelijkheid|dood|sterven", 0.4),
        m(r"bestaan|existentieel", 0.5),
        m(r"leegte|leeg van binnen", 0.5),
        m(r"vrije wil", 0.5),
        m(r"zin|betekenis", 0.3),
        m(r"nalatenschap|spijt", 0.3),
        m(r"voel me verloren|de weg kwijt", 0.5),
    ],

    transcendent: &[
        m(r"god|goddelijke?", 0.5),
        m(r"spiritueel|spirituele|spiritualiteit|ziel|geest", 0.5),
        m(r"bid|bidden|gebed", 0.5),
        m(r"(?:één|een) met (?:alles|het universum)|eenheid", 0.8),
        m(r"universum", 0.3),
        m(r"heilige?", 0.5),
        m(r"verlichting|ontwaken", 0.6),
        m(r"mediteren|meditatie", 0.4),
        m(r"transcendent(?:ie)?", 0.6),
        m(r"eeuwigheid|eeuwig|oneindig", 0.4),
        m(r"iets (?:groters|hogers) dan (?:ik|mezelf)", 0.8),
        m(r"ontzag|genade|gezegend", 0.3),
    ],

    exclusions: &[
        romantic(r"als ik (?:aan (?:je|jou|hem|haar) denk|(?:je|jou|hem|haar) zie)"),
        romantic(r"als (?:je|jij|hij|zij) me (?:aankijkt|kust|aanraakt)"),
        romantic(r"door jou|bij jou|in (?:je|jouw) buurt"),
        colloquial(r"van het lachen|lig dubbel|haha\w*|lol"),
        colloquial(r"(?:bijna )?een hartaanval (?:bezorgd|gegeven|gekregen)"),
        colloquial(r"grapje|geintje"),
        colloquial(r"van (?:de )?(?:spanning|opwinding|schaamte)"),
        colloquial(r"in de achtbaan|bij een horrorfilm"),
    ],

    horizontal: &[
        (HorizontalTag::Urgency, r"nu meteen|meteen|dringend|snel|noodgeval|help"),
        (HorizontalTag::Past, r"vroeger|gisteren|toen|jaren geleden|in het verleden"),
        (HorizontalTag::Future, r"morgen|volgende week|volgend jaar|ooit|in de toekomst|zal"),
        (HorizontalTag::Absolute, r"altijd|nooit|niets|alles|iedereen|niemand|allemaal"),
        (HorizontalTag::Uncertainty, r"misschien|wellicht|niet zeker|weet niet|onzeker|vraag me af"),
    ],

    boost: &[
        m(r"ik functioneer alleen nog|op de automatische piloot", 0.6),
        m(r"waar doe ik het (?:allemaal )?voor", 0.7),
        m(r"geen reden (?:om op te staan|om door te gaan)", 0.9),
        m(r"is dit alles", 0.7),
        m(r"ratrace", 0.5),
        m(r"wie ben ik (?:eigenlijk|nog)", 0.6),
        m(r"voel me (?:zo )?leeg", 0.5),
        m(r"waarom nog moeite doen", 0.5),
        m(r"midlifecrisis|levenscrisis", 0.6),
        m(r"dit allemaal|dat allemaal", 0.2),
    ],
};
