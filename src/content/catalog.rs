//! The compiled-in azkar catalog.
//!
//! Ids are 1-based positions in the arrays below, which is also the order the
//! seed command inserts them in.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryEntry {
    pub name: &'static str,
    pub name_ar: &'static str,
    pub description: &'static str,
    pub description_ar: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AzkarEntry {
    /// Name of the owning [`CategoryEntry`]
    pub category: &'static str,
    pub title: &'static str,
    pub title_ar: &'static str,
    pub arabic_text: &'static str,
    pub translation: &'static str,
    pub reference: Option<&'static str>,
    pub times: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TasbihPreset {
    pub phrase: &'static str,
    pub transliteration: &'static str,
    pub translation: &'static str,
    pub target: i32,
}

const CATEGORIES: &[CategoryEntry] = &[
    CategoryEntry {
        name: "morning",
        name_ar: "أذكار الصباح",
        description: "Remembrances recited after the dawn prayer until sunrise",
        description_ar: "الأذكار التي تقال بعد صلاة الفجر حتى طلوع الشمس",
    },
    CategoryEntry {
        name: "evening",
        name_ar: "أذكار المساء",
        description: "Remembrances recited after the afternoon prayer until sunset",
        description_ar: "الأذكار التي تقال بعد صلاة العصر حتى غروب الشمس",
    },
    CategoryEntry {
        name: "prayer",
        name_ar: "أذكار بعد الصلاة",
        description: "Remembrances recited after each obligatory prayer",
        description_ar: "الأذكار التي تقال بعد كل صلاة مفروضة",
    },
    CategoryEntry {
        name: "general",
        name_ar: "أذكار عامة",
        description: "Remembrances for any time of the day",
        description_ar: "أذكار تقال في كل وقت",
    },
];

const AZKAR: &[AzkarEntry] = &[
    AzkarEntry {
        category: "morning",
        title: "Ayat al-Kursi",
        title_ar: "آية الكرسي",
        arabic_text: "اللَّهُ لَا إِلَٰهَ إِلَّا هُوَ الْحَيُّ الْقَيُّومُ ۚ لَا تَأْخُذُهُ سِنَةٌ وَلَا نَوْمٌ",
        translation: "Allah, there is no deity except Him, the Ever-Living, the Sustainer of existence. Neither drowsiness overtakes Him nor sleep.",
        reference: Some("Al-Baqarah 2:255"),
        times: 1,
    },
    AzkarEntry {
        category: "morning",
        title: "Morning Affirmation",
        title_ar: "دعاء الصباح",
        arabic_text: "أَصْبَحْنَا وَأَصْبَحَ الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ، لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ",
        translation: "We have reached the morning and the whole kingdom belongs to Allah. All praise is for Allah. None has the right to be worshipped except Allah, alone, without partner.",
        reference: Some("Muslim 2723"),
        times: 1,
    },
    AzkarEntry {
        category: "morning",
        title: "Sayyid al-Istighfar",
        title_ar: "سيد الاستغفار",
        arabic_text: "اللَّهُمَّ أَنْتَ رَبِّي لَا إِلَهَ إِلَّا أَنْتَ، خَلَقْتَنِي وَأَنَا عَبْدُكَ",
        translation: "O Allah, You are my Lord, none has the right to be worshipped except You. You created me and I am Your servant.",
        reference: Some("Bukhari 6306"),
        times: 1,
    },
    AzkarEntry {
        category: "morning",
        title: "Glorification and Praise",
        title_ar: "التسبيح والتحميد",
        arabic_text: "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ",
        translation: "Glory is to Allah and praise is to Him.",
        reference: Some("Muslim 2692"),
        times: 100,
    },
    AzkarEntry {
        category: "morning",
        title: "Protection by the Name of Allah",
        title_ar: "بسم الله الذي لا يضر مع اسمه شيء",
        arabic_text: "بِسْمِ اللَّهِ الَّذِي لَا يَضُرُّ مَعَ اسْمِهِ شَيْءٌ فِي الْأَرْضِ وَلَا فِي السَّمَاءِ وَهُوَ السَّمِيعُ الْعَلِيمُ",
        translation: "In the Name of Allah, with whose Name nothing on earth or in heaven can cause harm, and He is the All-Hearing, the All-Knowing.",
        reference: Some("Abu Dawud 5088"),
        times: 3,
    },
    AzkarEntry {
        category: "evening",
        title: "Evening Affirmation",
        title_ar: "دعاء المساء",
        arabic_text: "أَمْسَيْنَا وَأَمْسَى الْمُلْكُ لِلَّهِ، وَالْحَمْدُ لِلَّهِ",
        translation: "We have reached the evening and the whole kingdom belongs to Allah, and all praise is for Allah.",
        reference: Some("Muslim 2723"),
        times: 1,
    },
    AzkarEntry {
        category: "evening",
        title: "Refuge in the Perfect Words",
        title_ar: "الاستعاذة بكلمات الله التامات",
        arabic_text: "أَعُوذُ بِكَلِمَاتِ اللَّهِ التَّامَّاتِ مِنْ شَرِّ مَا خَلَقَ",
        translation: "I seek refuge in the perfect words of Allah from the evil of what He has created.",
        reference: Some("Muslim 2709"),
        times: 3,
    },
    AzkarEntry {
        category: "evening",
        title: "Surah Al-Ikhlas",
        title_ar: "سورة الإخلاص",
        arabic_text: "قُلْ هُوَ اللَّهُ أَحَدٌ، اللَّهُ الصَّمَدُ، لَمْ يَلِدْ وَلَمْ يُولَدْ، وَلَمْ يَكُنْ لَهُ كُفُوًا أَحَدٌ",
        translation: "Say: He is Allah, the One. Allah, the Eternal Refuge. He neither begets nor is born, nor is there to Him any equivalent.",
        reference: Some("Al-Ikhlas 112"),
        times: 3,
    },
    AzkarEntry {
        category: "evening",
        title: "Contentment with Allah",
        title_ar: "الرضا بالله",
        arabic_text: "رَضِيتُ بِاللَّهِ رَبًّا، وَبِالْإِسْلَامِ دِينًا، وَبِمُحَمَّدٍ نَبِيًّا",
        translation: "I am pleased with Allah as my Lord, with Islam as my religion and with Muhammad as my Prophet.",
        reference: Some("Abu Dawud 5072"),
        times: 3,
    },
    AzkarEntry {
        category: "prayer",
        title: "Seeking Forgiveness After Prayer",
        title_ar: "الاستغفار بعد الصلاة",
        arabic_text: "أَسْتَغْفِرُ اللَّهَ",
        translation: "I seek the forgiveness of Allah.",
        reference: Some("Muslim 591"),
        times: 3,
    },
    AzkarEntry {
        category: "prayer",
        title: "Allahumma Antas-Salam",
        title_ar: "اللهم أنت السلام",
        arabic_text: "اللَّهُمَّ أَنْتَ السَّلَامُ، وَمِنْكَ السَّلَامُ، تَبَارَكْتَ يَا ذَا الْجَلَالِ وَالْإِكْرَامِ",
        translation: "O Allah, You are Peace and from You comes peace. Blessed are You, O Possessor of majesty and honour.",
        reference: Some("Muslim 591"),
        times: 1,
    },
    AzkarEntry {
        category: "prayer",
        title: "Tasbih After Prayer",
        title_ar: "تسبيح دبر الصلاة",
        arabic_text: "سُبْحَانَ اللَّهِ",
        translation: "Glory is to Allah.",
        reference: Some("Muslim 597"),
        times: 33,
    },
    AzkarEntry {
        category: "prayer",
        title: "Tahmid After Prayer",
        title_ar: "تحميد دبر الصلاة",
        arabic_text: "الْحَمْدُ لِلَّهِ",
        translation: "All praise is for Allah.",
        reference: Some("Muslim 597"),
        times: 33,
    },
    AzkarEntry {
        category: "prayer",
        title: "Takbir After Prayer",
        title_ar: "تكبير دبر الصلاة",
        arabic_text: "اللَّهُ أَكْبَرُ",
        translation: "Allah is the Greatest.",
        reference: Some("Muslim 597"),
        times: 34,
    },
    AzkarEntry {
        category: "general",
        title: "Tahlil",
        title_ar: "التهليل",
        arabic_text: "لَا إِلَهَ إِلَّا اللَّهُ وَحْدَهُ لَا شَرِيكَ لَهُ، لَهُ الْمُلْكُ وَلَهُ الْحَمْدُ وَهُوَ عَلَى كُلِّ شَيْءٍ قَدِيرٌ",
        translation: "None has the right to be worshipped except Allah, alone, without partner. To Him belongs all sovereignty and praise, and He is over all things omnipotent.",
        reference: Some("Bukhari 6403"),
        times: 10,
    },
    AzkarEntry {
        category: "general",
        title: "Hawqala",
        title_ar: "الحوقلة",
        arabic_text: "لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللَّهِ",
        translation: "There is no might nor power except with Allah.",
        reference: Some("Bukhari 4205"),
        times: 10,
    },
    AzkarEntry {
        category: "general",
        title: "Salawat upon the Prophet",
        title_ar: "الصلاة على النبي",
        arabic_text: "اللَّهُمَّ صَلِّ عَلَى مُحَمَّدٍ وَعَلَى آلِ مُحَمَّدٍ",
        translation: "O Allah, send prayers upon Muhammad and upon the family of Muhammad.",
        reference: Some("Bukhari 3370"),
        times: 10,
    },
    AzkarEntry {
        category: "general",
        title: "Two Beloved Words",
        title_ar: "كلمتان حبيبتان",
        arabic_text: "سُبْحَانَ اللَّهِ وَبِحَمْدِهِ، سُبْحَانَ اللَّهِ الْعَظِيمِ",
        translation: "Glory is to Allah and praise is to Him, glory is to Allah the Almighty.",
        reference: Some("Bukhari 6682"),
        times: 100,
    },
];

const TASBIH_PRESETS: &[TasbihPreset] = &[
    TasbihPreset {
        phrase: "سُبْحَانَ اللَّهِ",
        transliteration: "SubhanAllah",
        translation: "Glory be to Allah",
        target: 33,
    },
    TasbihPreset {
        phrase: "الْحَمْدُ لِلَّهِ",
        transliteration: "Alhamdulillah",
        translation: "All praise is due to Allah",
        target: 33,
    },
    TasbihPreset {
        phrase: "اللَّهُ أَكْبَرُ",
        transliteration: "Allahu Akbar",
        translation: "Allah is the Greatest",
        target: 34,
    },
    TasbihPreset {
        phrase: "أَسْتَغْفِرُ اللَّهَ",
        transliteration: "Astaghfirullah",
        translation: "I seek forgiveness from Allah",
        target: 100,
    },
    TasbihPreset {
        phrase: "لَا إِلَهَ إِلَّا اللَّهُ",
        transliteration: "La ilaha illallah",
        translation: "There is no god but Allah",
        target: 100,
    },
];

pub fn categories() -> &'static [CategoryEntry] {
    CATEGORIES
}

pub fn azkar() -> &'static [AzkarEntry] {
    AZKAR
}

pub fn tasbih_presets() -> &'static [TasbihPreset] {
    TASBIH_PRESETS
}

pub fn category(name: &str) -> Option<(i32, &'static CategoryEntry)> {
    CATEGORIES
        .iter()
        .zip(1..)
        .find(|(c, _)| c.name == name)
        .map(|(c, id)| (id, c))
}

/// Entries of one category with their catalog ids, in catalog order.
pub fn azkar_in(category: &str) -> impl Iterator<Item = (i32, &'static AzkarEntry)> + '_ {
    AZKAR
        .iter()
        .zip(1..)
        .filter(move |(a, _)| a.category == category)
        .map(|(a, id)| (id, a))
}
