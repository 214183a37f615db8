pub struct SeedCard {
    pub word_hebrew: &'static str,
    pub word_english: &'static str,
    pub transliteration: &'static str,
    pub difficulty_level: i64,
    pub category: &'static str,
    pub gematria_value: Option<i64>,
}

pub const SEED_CARDS: &[SeedCard] = &[
    SeedCard { word_hebrew: "שלום", word_english: "Peace / Hello", transliteration: "shalom", difficulty_level: 1, category: "vocabulary", gematria_value: Some(376) },
    SeedCard { word_hebrew: "אבא", word_english: "Father", transliteration: "abba", difficulty_level: 1, category: "family", gematria_value: Some(4) },
    SeedCard { word_hebrew: "אמא", word_english: "Mother", transliteration: "ima", difficulty_level: 1, category: "family", gematria_value: Some(42) },
    SeedCard { word_hebrew: "ילד", word_english: "Child / Boy", transliteration: "yeled", difficulty_level: 1, category: "family", gematria_value: Some(44) },
    SeedCard { word_hebrew: "מים", word_english: "Water", transliteration: "mayim", difficulty_level: 1, category: "food", gematria_value: Some(90) },
    SeedCard { word_hebrew: "לחם", word_english: "Bread", transliteration: "lechem", difficulty_level: 1, category: "food", gematria_value: Some(78) },
    SeedCard { word_hebrew: "בית", word_english: "House", transliteration: "bayit", difficulty_level: 1, category: "vocabulary", gematria_value: Some(412) },
    SeedCard { word_hebrew: "יום", word_english: "Day", transliteration: "yom", difficulty_level: 2, category: "time", gematria_value: Some(56) },
    SeedCard { word_hebrew: "לילה", word_english: "Night", transliteration: "layla", difficulty_level: 2, category: "time", gematria_value: Some(75) },
    SeedCard { word_hebrew: "אחד", word_english: "One", transliteration: "echad", difficulty_level: 2, category: "numbers", gematria_value: Some(13) },
    SeedCard { word_hebrew: "שתיים", word_english: "Two", transliteration: "shtayim", difficulty_level: 2, category: "numbers", gematria_value: None },
    SeedCard { word_hebrew: "אדום", word_english: "Red", transliteration: "adom", difficulty_level: 2, category: "colors", gematria_value: Some(51) },
    SeedCard { word_hebrew: "לבן", word_english: "White", transliteration: "lavan", difficulty_level: 2, category: "colors", gematria_value: Some(82) },
    SeedCard { word_hebrew: "כלב", word_english: "Dog", transliteration: "kelev", difficulty_level: 2, category: "vocabulary", gematria_value: Some(52) },
    SeedCard { word_hebrew: "חתול", word_english: "Cat", transliteration: "chatul", difficulty_level: 2, category: "vocabulary", gematria_value: Some(444) },
    SeedCard { word_hebrew: "אור", word_english: "Light", transliteration: "or", difficulty_level: 3, category: "biblical", gematria_value: Some(207) },
    SeedCard { word_hebrew: "מלך", word_english: "King", transliteration: "melech", difficulty_level: 3, category: "biblical", gematria_value: Some(90) },
    SeedCard { word_hebrew: "שבת", word_english: "Sabbath", transliteration: "shabbat", difficulty_level: 3, category: "holidays", gematria_value: Some(702) },
    SeedCard { word_hebrew: "משפחה", word_english: "Family", transliteration: "mishpacha", difficulty_level: 3, category: "family", gematria_value: Some(433) },
    SeedCard { word_hebrew: "אהבה", word_english: "Love", transliteration: "ahava", difficulty_level: 3, category: "vocabulary", gematria_value: Some(13) },
    SeedCard { word_hebrew: "חיים", word_english: "Life", transliteration: "chayim", difficulty_level: 4, category: "biblical", gematria_value: Some(68) },
    SeedCard { word_hebrew: "תפילה", word_english: "Prayer", transliteration: "tefila", difficulty_level: 4, category: "prayers", gematria_value: Some(525) },
    SeedCard { word_hebrew: "ברוך", word_english: "Blessed", transliteration: "baruch", difficulty_level: 4, category: "prayers", gematria_value: Some(228) },
    SeedCard { word_hebrew: "תורה", word_english: "Torah / Teaching", transliteration: "torah", difficulty_level: 5, category: "biblical", gematria_value: Some(611) },
    SeedCard { word_hebrew: "צדקה", word_english: "Righteousness / Charity", transliteration: "tzedakah", difficulty_level: 5, category: "biblical", gematria_value: Some(199) },
];

pub struct Category {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
}

pub const CATEGORIES: &[Category] = &[
    Category { id: "vocabulary", name: "Vocabulary", description: "Basic Hebrew words" },
    Category { id: "biblical", name: "Biblical Terms", description: "Words from Torah and Tanakh" },
    Category { id: "modern", name: "Modern Hebrew", description: "Contemporary vocabulary" },
    Category { id: "prayers", name: "Prayer Vocabulary", description: "Words used in prayer" },
    Category { id: "holidays", name: "Holiday Terms", description: "Festival and holiday vocabulary" },
    Category { id: "family", name: "Family Terms", description: "Family relationship words" },
    Category { id: "numbers", name: "Numbers", description: "Hebrew numerals and counting" },
    Category { id: "colors", name: "Colors", description: "Color vocabulary" },
    Category { id: "time", name: "Time", description: "Days, months, seasons" },
    Category { id: "food", name: "Food & Kosher", description: "Food-related vocabulary" },
];
