//! Builtin bilingual vocabulary.
//!
//! Entries are written in their natural spelling; the builder normalizes
//! everything, so hamza and taa marbuta variants need not be listed twice.

use crate::lexicon::Attribute;

/// Synonym groups spanning Arabic and English.
pub const SYNONYM_GROUPS: &[&[&str]] = &[
    &[
        "restaurant", "restaurants", "مطعم", "مطاعم", "food", "طعام", "أكل", "dining", "eatery",
        "grill", "مشويات",
    ],
    &[
        "cafe", "café", "cafes", "coffee", "قهوة", "مقهى", "مقاهي", "كافيه", "كوفي", "coffeeshop",
    ],
    &["tea", "شاي", "karak", "كرك"],
    &["bakery", "مخبز", "مخابز", "bread", "خبز", "pastry", "معجنات"],
    &["sweets", "حلويات", "dessert", "desserts", "حلوى", "cake", "كيك"],
    &["hotel", "hotels", "فندق", "فنادق", "lodging", "accommodation", "سكن", "resort", "منتجع"],
    &["pharmacy", "pharmacies", "صيدلية", "صيدليات", "drugstore", "chemist", "دواء"],
    &["hospital", "مستشفى", "clinic", "عيادة", "عيادات", "medical", "طبي", "doctor", "طبيب"],
    &["dentist", "dental", "أسنان", "طبيب أسنان"],
    &["gym", "fitness", "جيم", "رياضة", "sport", "sports", "نادي"],
    &["salon", "صالون", "beauty", "تجميل", "spa", "سبا"],
    &["barber", "barbershop", "حلاق", "حلاقة"],
    &[
        "car", "cars", "سيارة", "سيارات", "auto", "automotive", "garage", "ورشة", "mechanic",
        "ميكانيكي",
    ],
    &["shop", "store", "متجر", "محل", "محلات", "market", "سوق", "mall", "مول"],
    &["supermarket", "grocery", "بقالة", "هايبرماركت", "hypermarket"],
    &["electronics", "إلكترونيات", "الكترونيات", "phones", "mobile", "جوالات", "هواتف"],
    &["school", "مدرسة", "مدارس", "education", "تعليم", "institute", "معهد", "academy", "أكاديمية"],
    &["training", "تدريب", "course", "courses", "دورة", "دورات"],
    &["laundry", "مغسلة", "ملابس", "dryclean", "كوي"],
    &["realestate", "عقارات", "عقار", "property", "properties", "apartment", "شقة", "شقق"],
    &["travel", "سفر", "tourism", "سياحة", "tours", "رحلات", "agency", "وكالة"],
    &["flowers", "florist", "ورد", "زهور", "ورود"],
    &["fashion", "clothes", "clothing", "أزياء", "عبايات", "abaya", "tailor", "خياط"],
    &["perfume", "perfumes", "عطور", "عطر", "oud", "عود", "بخور"],
    &["jewelry", "jewellery", "مجوهرات", "gold", "ذهب"],
    &["furniture", "أثاث", "مفروشات", "decor", "ديكور"],
    &["seafood", "fish", "سمك", "أسماك", "بحري", "مأكولات بحرية"],
];

/// Canonical city key, English display name, Arabic display name, and the
/// spelling variants (transliterations) that map to it.
pub const CITIES: &[(&str, &str, &str, &[&str])] = &[
    ("muscat", "Muscat", "مسقط", &["muscat", "masqat", "maskat", "مسقط"]),
    ("salalah", "Salalah", "صلالة", &["salalah", "salala", "صلالة"]),
    ("sohar", "Sohar", "صحار", &["sohar", "suhar", "صحار"]),
    ("nizwa", "Nizwa", "نزوى", &["nizwa", "nizwah", "نزوى"]),
    ("sur", "Sur", "صور", &["sur", "soor", "صور"]),
    ("ibri", "Ibri", "عبري", &["ibri", "عبري"]),
    ("buraimi", "Al Buraimi", "البريمي", &["buraimi", "alburaimi", "البريمي", "بريمي"]),
    ("seeb", "Seeb", "السيب", &["seeb", "alseeb", "السيب", "سيب"]),
    ("muttrah", "Muttrah", "مطرح", &["muttrah", "matrah", "mutrah", "مطرح"]),
    ("bawshar", "Bawshar", "بوشر", &["bawshar", "bousher", "boshar", "بوشر"]),
    ("khasab", "Khasab", "خصب", &["khasab", "خصب"]),
    ("duqm", "Duqm", "الدقم", &["duqm", "alduqm", "الدقم", "دقم"]),
    ("rustaq", "Rustaq", "الرستاق", &["rustaq", "rostaq", "الرستاق", "رستاق"]),
    ("barka", "Barka", "بركاء", &["barka", "barkaa", "بركاء", "بركا"]),
    ("dubai", "Dubai", "دبي", &["dubai", "دبي"]),
    ("riyadh", "Riyadh", "الرياض", &["riyadh", "الرياض", "رياض"]),
    ("doha", "Doha", "الدوحة", &["doha", "الدوحة", "دوحة"]),
];

/// Query keywords that request a quality attribute.
pub const ATTRIBUTE_KEYWORDS: &[(Attribute, &[&str])] = &[
    (
        Attribute::Verified,
        &[
            "verified", "trusted", "certified", "official", "licensed", "موثق", "موثوق", "موثوقة",
            "معتمد", "معتمدة", "رسمي",
        ],
    ),
    (
        Attribute::Special,
        &["special", "exclusive", "premium", "vip", "مميز", "مميزة", "حصري", "خاص"],
    ),
    (
        Attribute::Featured,
        &[
            "featured", "popular", "famous", "top", "trending", "مشهور", "مشهورة", "شهير",
            "معروف",
        ],
    ),
    (
        Attribute::New,
        &["new", "newest", "latest", "recent", "جديد", "جديدة", "أحدث", "حديث"],
    ),
    (
        Attribute::Open,
        &["open", "opened", "24h", "مفتوح", "مفتوحة", "فاتح"],
    ),
];
