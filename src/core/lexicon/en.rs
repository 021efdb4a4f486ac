//! English lexicon (default and fallback)

use super::{colloquial, d, m, romantic, RawTable};
use crate::types::HorizontalTag;

pub const TABLE: RawTable = RawTable {
    // =========================================================================
    // SOMATIC: distress first (emergency-eligible), then general body signal
    // =========================================================================
    somatic: &[
        d(r"(?:can'?t|cannot|can not|unable to) breathe", 0.9),
        d(r"chest pain|pain in my chest|chest (?:is )?(?:tight|hurts)", 0.9),
        d(r"heart (?:is )?(?:pounding|racing|races|pounds|skipping)", 0.7),
        d(r"panic attack", 0.8),
        d(r"heart attack", 0.9),
        d(r"(?:passing|pass|passed) out|fainting|about to faint", 0.7),
        d(r"choking|suffocating", 0.8),
        d(r"(?:i'?m|i am) bleeding", 0.8),
        d(r"overdos(?:e|ed)", 0.9),
        d(r"seizure", 0.8),
        d(r"numb(?:ness)? in my (?:arm|face|leg)", 0.8),
        d(r"short(?:ness)? of breath|gasping", 0.7),
        m(r"tired|exhausted|fatigued?", 0.4),
        m(r"headache|migraine", 0.5),
        m(r"nause(?:a|ous)|vomit(?:ing)?|throw(?:ing)? up", 0.5),
        m(r"dizzy|dizziness|lightheaded", 0.4),
        m(r"(?:can'?t|cannot) sleep|insomnia", 0.5),
        m(r"pain", 0.3),
        m(r"sick|fever", 0.4),
        m(r"scared|afraid|terrified", 0.3),
        m(r"shaking|trembling|sweating", 0.4),
        m(r"stomach(?:ache)?", 0.3),
        m(r"body|muscles?", 0.2),
    ],

    functional: &[
        m(r"how (?:do|can|should|would) i", 0.4),
        m(r"help me|can you help", 0.3),
        m(r"step[- ]by[- ]step", 0.5),
        m(r"fix|repair|install|configure|set up|debug", 0.5),
        m(r"deadline|due date", 0.5),
        m(r"schedule|appointment|meeting|calendar", 0.4),
        m(r"work|job|task|project|assignment|homework", 0.3),
        m(r"budget|invoice|bills?|taxes|tax return|payment", 0.4),
        m(r"email|report|spreadsheet|document", 0.3),
        m(r"recipe|grocer(?:y|ies)|shopping list", 0.4),
        m(r"error|bug|crash(?:es|ed)?", 0.4),
        m(r"book a|reserve|order", 0.3),
        m(r"plan|organi[sz]e|to-do list|checklist", 0.3),
    ],

    relational: &[
        m(r"my (?:wife|husband|partner|boyfriend|girlfriend|mother|father|mom|mum|dad|son|daughter|brother|sister|friend|family|boss|colleague|kids?)", 0.5),
        m(r"relationship|marriage", 0.5),
        m(r"lonely|loneliness|alone", 0.5),
        m(r"argument|fight(?:ing)? with|argued", 0.5),
        m(r"divorce|break ?up|broke up|breaking up", 0.7),
        m(r"miss (?:you|her|him|them)", 0.5),
        m(r"friends?|friendship", 0.3),
        m(r"nobody (?:understands|cares about) me", 0.7),
        m(r"trust|betray(?:ed|al)?", 0.4),
        m(r"family|parents|children", 0.3),
        m(r"love you|loves me", 0.4),
    ],

    existential: &[
        m(r"(?:the )?meaning of (?:life|it all|my life|existence)", 0.9),
        m(r"what does (?:it|any of this|life) (?:all )?mean", 0.6),
        m(r"what(?:'s| is) the point", 0.5),
        m(r"purpose (?:of|in) (?:my )?life|my purpose", 0.8),
        m(r"why (?:am i|are we) (?:even )?(?:here|alive)", 0.8),
        m(r"what am i doing with my life", 0.9),
        m(r"live authentically|authentic life", 0.7),
        m(r"authentic(?:ally|ity)?", 0.35),
        m(r"meaningless|pointless", 0.6),
        m(r"nothing (?:really )?matters", 0.7),
        m(r"who am i", 0.6),
        m(r"(?:afraid|scared) of (?:dying|death)", 0.8),
        m(r"mortality|death|dying", 0.4),
        m(r"existence|existential", 0.5),
        m(r"emptiness|empty inside", 0.5),
        m(r"free will", 0.5),
        m(r"purpose|meaning", 0.3),
        m(r"legacy|regrets?", 0.3),
        m(r"feel(?:ing)? lost|lost my way", 0.5),
        m(r"what matters|does it matter", 0.4),
    ],

    transcendent: &[
        m(r"god|divine", 0.5),
        m(r"spiritual(?:ity)?|spirit|soul", 0.5),
        m(r"pray(?:er|ing|ed)?", 0.5),
        m(r"one with (?:everything|the universe)|oneness", 0.8),
        m(r"universe", 0.3),
        m(r"sacred|holy", 0.5),
        m(r"enlighten(?:ment|ed)|awaken(?:ing|ed)", 0.6),
        m(r"meditat(?:e|ion|ing)", 0.4),
        m(r"transcend(?:ence|ent|ed)?", 0.6),
        m(r"eternity|eternal|infinite", 0.4),
        m(r"something (?:bigger|greater) than (?:me|myself|us)", 0.8),
        m(r"awe|grace|blessed", 0.3),
    ],

    // Each exclusion is anchored to the distress phrase it explains: it must
    // cover the phrase or sit within a couple of words of it
    exclusions: &[
        romantic(r"when (?:i|we) (?:see|think (?:of|about)|look at|hear|kiss|hold|hug) (?:you|him|her|each other)"),
        romantic(r"when (?:you|he|she) (?:looks? at|smiles? at|touch(?:es)?|kiss(?:es)?|holds?|texts?) me"),
        romantic(r"(?:thinking|think) (?:of|about) (?:you|him|her)"),
        romantic(r"(?:around|near|next to|because of) (?:you|him|her|my crush)"),
        colloquial(r"(?:from|with|of) (?:my )?laugh(?:ing|ter)|laughing so hard|lol|lmao|rofl|haha\w*"),
        colloquial(r"(?:gave|give|giving|you'?ll give) me a heart attack"),
        colloquial(r"(?:just )?kidding|jk"),
        colloquial(r"(?:from|with) (?:excitement|embarrassment|cringe)"),
        colloquial(r"(?:on|from|during|watching) (?:the |a |this |that )?(?:roller ?coaster|horror (?:movie|film))"),
    ],

    horizontal: &[
        (HorizontalTag::Urgency, r"right now|immediately|urgent(?:ly)?|asap|hurry|emergency|help"),
        (HorizontalTag::Past, r"used to|yesterday|back then|years ago|in the past|when i was"),
        (HorizontalTag::Future, r"tomorrow|next (?:week|month|year)|someday|in the future|going to|will"),
        (HorizontalTag::Absolute, r"always|never|nothing|everything|everyone|no one|nobody|all"),
        (HorizontalTag::Uncertainty, r"maybe|perhaps|not sure|don'?t know|unsure|i wonder|wondering"),
    ],

    boost: &[
        m(r"going through the motions", 0.6),
        m(r"what(?:'s| is) it all for", 0.7),
        m(r"no reason to (?:get up|go on|keep going|live)", 0.9),
        m(r"is this all there is", 0.8),
        m(r"hamster wheel|rat race|running in circles", 0.5),
        m(r"who (?:even )?am i (?:anymore|really)", 0.6),
        m(r"feels? (?:so )?empty|hollow inside", 0.5),
        m(r"why bother", 0.5),
        m(r"does (?:any of )?(?:this|it) (?:even )?matter", 0.7),
        m(r"point (?:of|in) (?:it all|anything|living|going on)", 0.7),
        m(r"what(?:'s| is) the use", 0.5),
        m(r"drifting through life", 0.6),
        m(r"midlife crisis|quarter[- ]life crisis", 0.6),
        m(r"(?:stuck|lost) in life", 0.5),
        m(r"all (?:of )?this", 0.2),
    ],
};
