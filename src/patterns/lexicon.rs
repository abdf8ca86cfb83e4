//! Keyword tables: profanity, prohibited phrases, obligation triggers and
//! the false-positive / reclassification lists used by the corrector.

use crate::models::PiiType;

pub const PROFANITY_WORDS: &[&str] = &[
    "damn", "hell", "shit", "fuck", "bastard", "ass", "crap", "idiot", "stupid", "dumb", "moron",
    "shut up",
];

/// Pressure tactics and misleading claims that must never be said to a customer
pub const PROHIBITED_PHRASES: &[&str] = &[
    "we will take legal action immediately",
    "your credit score will be ruined",
    "we'll seize your assets",
    "you must decide right now",
    "this is your last chance",
    "don't tell anyone about this offer",
    "zero fees",
    "guaranteed approval",
    "risk-free investment",
];

pub const OBLIGATION_KEYWORDS: &[&str] = &[
    // English
    "must",
    "shall",
    "required",
    "mandatory",
    "obligated",
    "need to",
    "have to",
    "should",
    "will be charged",
    "agree to",
    "consent",
    "acknowledge",
    "confirm",
    "i promise",
    "we guarantee",
    "committed to",
    "by signing",
    "terms and conditions",
    "cooling off",
    "within 30 days",
    "penalty",
    "fee",
    "interest rate",
    // Russian
    "должен",
    "обязан",
    "необходимо",
    "обещаю",
    "гарантирую",
    "подтверждаю",
    "согласен",
    "обязательно",
    "штраф",
    "комиссия",
    "процент",
    "условия",
    "договор",
    "контракт",
    "в течение",
    "обязуюсь",
    "ответственность",
    // Hindi
    "ज़रूरी",
    "अनिवार्य",
    "वादा",
    "सहमत",
    "शर्तें",
];

/// Values the engine tags as PERSON/LOCATION that are never PII
pub const DENY_LIST: &[&str] = &[
    // Applications
    "anydesk", "teamviewer", "zoom", "skype", "whatsapp", "telegram", "chrome", "firefox",
    "safari", "edge", "opera", "windows", "macos", "linux", "ubuntu",
    // Devices
    "pixel", "iphone", "samsung", "motorola", "oneplus", "xiaomi", "huawei", "nokia", "sony",
    "lg", "oppo", "vivo", "realme", "android", "ios",
    // Tech and payment brands
    "google", "apple", "microsoft", "amazon", "facebook", "meta", "paypal", "venmo", "cashapp",
    "cash app", "zelle", "bitcoin", "ethereum", "crypto",
    // Fillers
    "support", "help", "hello", "ok", "okay", "yes", "no", "vpn", "qr", "wifi", "usb", "sim",
];

/// First names the engine tends to tag as LOCATION
pub const PERSON_NOT_LOCATION: &[&str] = &[
    "maryam", "stephen", "michael", "omar", "adam", "sarah", "john", "david", "james", "robert",
    "william", "joseph", "charles", "mary", "patricia", "jennifer", "linda", "elizabeth", "susan",
    "ali", "ahmed", "mohammed", "fatima", "ayesha", "hassan", "raj", "priya", "amit", "sunita",
    "vikram", "anita",
];

/// Trigger phrases looked up in the window before a span; first hit wins
pub const CONTEXT_CORRECTIONS: &[(&str, PiiType)] = &[
    ("speaking to", PiiType::Person),
    ("my name is", PiiType::Person),
    ("name is", PiiType::Person),
    ("this is", PiiType::Person),
    ("manager is", PiiType::Person),
    ("colleague", PiiType::Person),
    ("daughter", PiiType::Person),
    ("son", PiiType::Person),
    ("mr.", PiiType::Person),
    ("mrs.", PiiType::Person),
    ("ms.", PiiType::Person),
    ("dr.", PiiType::Person),
];

/// Short words that look like names or numbers to the engine
pub const STOP_WORDS: &[&str] = &["one", "two", "three", "four", "five", "the", "and", "for"];
