//! German lexicon

use super::{colloquial, d, m, romantic, RawTable};
use crate::types::HorizontalTag;

pub const TABLE: RawTable = RawTable {
    somatic: &[
        d(r"(?:ich )?kann nicht (?:mehr )?atmen|kann ich nicht (?:mehr )?atmen|(?:bekomme|kriege) keine luft", 0.9),
        d(r"brustschmerz(?:en)?|schmerzen in der brust|druck auf der brust", 0.9),
        d(r"herz (?:rast|klopft|pocht|hämmert)|herzrasen", 0.7),
        d(r"panikattacke", 0.8),
        d(r"herzinfarkt", 0.9),
        d(r"ohnmächtig|bewusstlos|kippe um", 0.7),
        d(r"ersticke|ersticken", 0.8),
        d(r"ich blute|blute stark", 0.8),
        d(r"überdosis|krampfanfall", 0.9),
        m(r"müde|erschöpft|erschöpfung", 0.4),
        m(r"kopfschmerz(?:en)?|migräne", 0.5),
        m(r"übel|übelkeit|erbrechen", 0.5),
        m(r"schwindel(?:ig)?", 0.4),
        m(r"kann nicht schlafen|schlaflos(?:igkeit)?", 0.5),
        m(r"schmerz(?:en)?", 0.3),
        m(r"krank|fieber", 0.4),
        m(r"angst|ängstlich", 0.3),
        m(r"zittern|schwitzen", 0.4),
        m(r"körper|bauch(?:schmerzen)?", 0.2),
    ],

    functional: &[
        m(r"wie (?:kann|soll|mache) ich", 0.4),
        m(r"hilf mir|kannst du mir helfen", 0.3),
        m(r"schritt für schritt", 0.5),
        m(r"reparieren|installieren|einrichten|konfigurieren", 0.5),
        m(r"frist|deadline|abgabetermin", 0.5),
        m(r"termin|besprechung|meeting|kalender", 0.4),
        m(r"arbeit|job|aufgabe|projekt|hausaufgaben", 0.3),
        m(r"budget|rechnung(?:en)?|steuer(?:n|erklärung)?|zahlung", 0.4),
        m(r"e-mail|email|bericht|tabelle|dokument", 0.3),
        m(r"rezept|einkaufsliste|einkaufen", 0.4),
        m(r"fehler|bug|absturz", 0.4),
        m(r"planen|organisieren|checkliste", 0.3),
    ],

    relational: &[
        m(r"mein(?:e|er|en|em)? (?:frau|mann|partner(?:in)?|freund(?:in)?|mutter|vater|mama|papa|sohn|tochter|bruder|schwester|familie|chef(?:in)?|kollegen?|kinder?)", 0.5),
        m(r"beziehung|ehe", 0.5),
        m(r"einsam(?:keit)?|allein", 0.5),
        m(r"streit|gestritten", 0.5),
        m(r"scheidung|trennung|schluss gemacht", 0.7),
        m(r"vermisse (?:dich|sie|ihn)", 0.5),
        m(r"freunde?|freundschaft", 0.3),
        m(r"niemand versteht mich", 0.7),
        m(r"vertrauen|verraten|betrogen", 0.4),
        m(r"eltern|kinder", 0.3),
    ],

    existential: &[
        m(r"(?:der )?sinn des lebens", 0.9),
        m(r"was bedeutet (?:das|es)(?: alles| überhaupt)?", 0.6),
        m(r"was ist der sinn|wozu das alles|was soll das alles", 0.5),
        m(r"sinn in meinem leben|lebenssinn", 0.8),
        m(r"warum (?:bin ich|sind wir) (?:überhaupt )?(?:hier|am leben)", 0.8),
        m(r"authentisch leben", 0.7),
        m(r"authentisch", 0.35),
        m(r"sinnlos|bedeutungslos", 0.6),
        m(r"nichts (?:hat (?:einen )?sinn|spielt eine rolle)", 0.7),
        m(r"wer bin ich", 0.6),
        m(r"angst vor dem (?:tod|sterben)", 0.8),
        m(r"sterblichkeit|tod|sterben", 0.4),
        m(r"existenz|existenziell", 0.5),
        m(r"leere|innerlich leer", 0.5),
        m(r"freier wille", 0.5),
        m(r"sinn|bedeutung", 0.3),
        m(r"vermächtnis|bereue", 0.3),
        m(r"fühle mich verloren|orientierungslos", 0.5),
    ],

    transcendent: &[
        m(r"gott|göttlich(?:e|en)?", 0.5),
        m(r"spirituell(?:e|en)?|spiritualität|seele|geist", 0.5),
        m(r"bete|beten|gebet", 0.5),
        m(r"eins mit (?:allem|dem universum)|einheit mit", 0.8),
        m(r"universum", 0.3),
        m(r"heilig(?:e|en)?", 0.5),
        m(r"erleuchtung|erwachen", 0.6),
        m(r"meditiere|meditieren|meditation", 0.4),
        m(r"transzendenz|transzendent", 0.6),
        m(r"ewigkeit|ewig|unendlich", 0.4),
        m(r"etwas (?:größeres|höheres) als ich", 0.8),
        m(r"ehrfurcht|gnade|gesegnet", 0.3),
    ],

    exclusions: &[
        romantic(r"wenn ich (?:an (?:dich|ihn|sie) denke|(?:dich|ihn|sie) sehe)"),
        romantic(r"wenn (?:du|er|sie) mich (?:ansiehst|ansieht|küsst|berührst|berührt)"),
        romantic(r"(?:wegen|bei) dir|in deiner nähe"),
        colloquial(r"vor lachen|(?:beim|vom) lachen|haha\w*|lol"),
        colloquial(r"(?:fast )?einen herzinfarkt (?:verpasst|gegeben|bekommen)"),
        colloquial(r"(?:nur )?(?:ein )?scherz|nur spaß"),
        colloquial(r"vor (?:aufregung|freude|scham)"),
        colloquial(r"(?:auf|in) der achterbahn|(?:beim|im) horrorfilm"),
    ],

    horizontal: &[
        (HorizontalTag::Urgency, r"sofort|dringend|schnell|notfall|hilfe"),
        (HorizontalTag::Past, r"früher|gestern|damals|vor jahren|in der vergangenheit"),
        (HorizontalTag::Future, r"morgen|nächste woche|nächstes jahr|irgendwann|in zukunft|werde"),
        (HorizontalTag::Absolute, r"immer|nie|niemals|nichts|alles|jeder|niemand|alle"),
        (HorizontalTag::Uncertainty, r"vielleicht|eventuell|nicht sicher|weiß nicht|unsicher|frage mich"),
    ],

    boost: &[
        m(r"funktioniere nur noch|nur noch funktionieren", 0.6),
        m(r"wofür das alles|wofür mache ich das", 0.7),
        m(r"kein grund (?:aufzustehen|weiterzumachen)", 0.9),
        m(r"war das alles|ist das alles", 0.6),
        m(r"hamsterrad", 0.5),
        m(r"wer bin ich (?:eigentlich|noch)", 0.6),
        m(r"fühle mich (?:so )?leer|innere leere", 0.5),
        m(r"wozu noch|warum noch", 0.5),
        m(r"midlife[- ]crisis|lebenskrise", 0.6),
        m(r"das alles|all das", 0.2),
    ],
};
