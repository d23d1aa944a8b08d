#[derive(Debug, Clone, Copy)]
pub struct Translations {
    pub home: &'static str,
    pub squad: &'static str,
    pub live_arena: &'static str,
    pub establishing_link: &'static str,
    pub connecting_to: &'static str,
    pub ultra_hd_stream: &'static str,
    pub exclusive_broadcast: &'static str,
    pub choose_language: &'static str,
    pub premium_access: &'static str,
    pub ultimate_experience: &'static str,
    pub about_us: &'static str,
    pub about_site: &'static str,
    pub contacts: &'static str,
    pub privacy_policy: &'static str,
    pub about_us_content: &'static str,
    pub about_site_content: &'static str,
    pub contacts_content: &'static str,
    pub privacy_policy_content: &'static str,
    pub close: &'static str,
    pub goals: &'static str,
    pub assists: &'static str,
    pub appearances: &'static str,
    pub clean_sheets: &'static str,
    pub position: &'static str,
    pub nationality: &'static str,
    pub settings: &'static str,
    pub color_scheme: &'static str,
    pub background: &'static str,
    pub fav_player: &'static str,
    pub language: &'static str,
    pub match_schedule: &'static str,
    pub live_performance: &'static str,
    pub broadcast_description: &'static str,
    pub window_transparency: &'static str,
    pub copyright: &'static str,
    pub anthem: &'static str,
    pub clear_cache: &'static str,
    pub reset_confirm: &'static str,
    pub bright_moments: &'static str,
    pub ucl_bracket: &'static str,
    pub possession: &'static str,
    pub shots: &'static str,
    pub shots_on_target: &'static str,
    pub passing: &'static str,
    pub fouls: &'static str,
    pub corners: &'static str,
    pub expected_goals: &'static str,
    pub match_stats: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Language {
    pub code: &'static str,
    pub name: &'static str,
    pub native_name: &'static str,
    pub stream_url: Option<&'static str>,
    pub is_special: bool,
    pub translations: &'static Translations,
}

pub const DEFAULT_LANGUAGE: &str = "ru";

pub static LANGUAGES: [Language; 4] = [
    Language {
        code: "en",
        name: "English",
        native_name: "English",
        stream_url: None,
        is_special: false,
        translations: &EN,
    },
    Language {
        code: "ru",
        name: "Russian",
        native_name: "Русский",
        stream_url: None,
        is_special: false,
        translations: &RU,
    },
    Language {
        code: "hy",
        name: "Armenian",
        native_name: "Հայերեն",
        stream_url: None,
        is_special: false,
        translations: &HY,
    },
    Language {
        code: "rmtv",
        name: "Real Madrid TV",
        native_name: "Real Madrid TV",
        stream_url: Some("https://rmtv.akamaized.net/hls/live/2043154/rmtv-en-web/bitrate_3.m3u8"),
        is_special: true,
        translations: &RMTV,
    },
];

pub fn find_language(code: &str) -> Option<&'static Language> {
    LANGUAGES.iter().find(|lang| lang.code == code)
}

/// Query parameter first, then the persisted preference, then the default code.
pub fn resolve_language(query: Option<&str>, persisted: Option<&str>) -> &'static Language {
    query
        .or(persisted)
        .and_then(find_language)
        .or_else(|| find_language(DEFAULT_LANGUAGE))
        .unwrap_or(&LANGUAGES[0])
}

/// Languages offered on the landing picker: English lives in Settings only.
pub fn picker_languages() -> Vec<&'static Language> {
    let standard = LANGUAGES
        .iter()
        .filter(|lang| !lang.is_special && lang.code != "en");
    let special = LANGUAGES.iter().filter(|lang| lang.is_special);
    standard.chain(special).collect()
}

pub struct WelcomeTemplate {
    pub title: &'static str,
    pub message: &'static str,
}

pub fn welcome_template(code: &str) -> WelcomeTemplate {
    match code {
        "ru" => WelcomeTemplate {
            title: "С возвращением!",
            message: "Игра против {opponent}! Не пропустите прямую трансляцию!",
        },
        "hy" => WelcomeTemplate {
            title: "Բարի վերադարձ",
            message: "Բաց մի՛ թողեք խաղը ընդդեմ {opponent}-ի:",
        },
        _ => WelcomeTemplate {
            title: "Welcome Back!",
            message: "Match against {opponent}! Watch it live here!",
        },
    }
}

const EN: Translations = Translations {
    home: "Home",
    squad: "Team Squad",
    live_arena: "Live Arena",
    establishing_link: "Establishing link...",
    connecting_to: "Connecting to English broadcast...",
    ultra_hd_stream: "Ultra HD Stream • English",
    exclusive_broadcast: "Exclusive English broadcast",
    choose_language: "Welcome to Walkers Madrid. Choose your language:",
    premium_access: "Premium Access",
    ultimate_experience: "The ultimate sports experience",
    about_us: "About Us",
    about_site: "About Site",
    contacts: "Contacts",
    privacy_policy: "Privacy Policy",
    close: "Close",
    goals: "Goals",
    assists: "Assists",
    appearances: "Apps",
    clean_sheets: "Clean Sheets",
    position: "Position",
    nationality: "Nationality",
    settings: "Settings",
    color_scheme: "Color Scheme",
    background: "Background",
    fav_player: "Fav Player",
    language: "Language",
    match_schedule: "Match Schedule",
    live_performance: "Live Performance",
    broadcast_description: "Experience the match in highest fidelity with localized commentary.",
    window_transparency: "Interface Transparency",
    about_us_content: "• Our mission is to unite Madridistas from every corner of the globe within a single premier digital sanctuary.\n• Walkers Madrid offers more than just streams; it provides a comprehensive matchday atmosphere with deep analytics and live player performance data.\n• We are an independent, fan-led project driven purely by passion for the \"Royal Club\" rather than commercial gain.\n• Every update to this platform is inspired by community feedback, ensuring we maintain the highest standards of quality and loyalty to the club heritage.\n\nHala Madrid i nada mas",
    about_site_content: "• Walkers Madrid is an interactive fan platform built to unite Madridistas globally.\n• Purpose: The site is intended for a premium match-day experience, offering high-quality Ultra HD streams and integrated live statistics.\n• Sources: Broadcast links are aggregated from open legal sources and official club mirror servers to ensure maximum stability and availability.\n• Tech: Developed using modern web standards (React/Tailwind) to provide a seamless, lightweight, and secure viewing sanctuary.\n\nHala Madrid i nada mas",
    contacts_content: "Contact us via social media:\n\n📸 Instagram: @abul_walker\n🎬 YouTube: @abulwalker\n🎵 TikTok: @abul_wa7ker",
    privacy_policy_content: "• We operate on the principle of data minimization: the site functions perfectly without registration, accounts, or collection of personal data.\n• Your preferences (color scheme, background, volume, favorite player) are stored exclusively in your browser's local storage.\n• We do not use third-party advertising trackers or sell information about your browsing habits to external entities.\n• Security First: All data streams are encrypted, and clearing your browser cache instantly removes all site-related data from your device.\n\nHala Madrid i nada mas",
    copyright: "© 2026 Or1G1nal. All rights reserved.",
    anthem: "Real Madrid Anthem",
    clear_cache: "Reset Settings",
    reset_confirm: "Are you sure?",
    bright_moments: "Bright Moments",
    ucl_bracket: "Champions League Bracket",
    possession: "Possession",
    shots: "Total Shots",
    shots_on_target: "Shots on Target",
    passing: "Passing Accuracy",
    fouls: "Fouls",
    corners: "Corners",
    expected_goals: "Expected Goals (xG)",
    match_stats: "Match Statistics",
};

const RU: Translations = Translations {
    home: "Главная",
    squad: "Состав команды",
    live_arena: "Прямой Эфир",
    establishing_link: "Установка соединения...",
    connecting_to: "Подключение к трансляции на русском...",
    ultra_hd_stream: "Ultra HD Поток • Русский",
    exclusive_broadcast: "Эксклюзивная трансляция на русском языке",
    choose_language: "Добро пожаловать в Walkers Madrid. Выберите ваш язык:",
    premium_access: "Премиум Доступ",
    ultimate_experience: "Лучший опыт просмотра спорта",
    about_us: "О нас",
    about_site: "О сайте",
    contacts: "Contacts",
    privacy_policy: "Политика конфиденциальности",
    close: "Закрыть",
    goals: "Голы",
    assists: "Пасы",
    appearances: "Матчи",
    clean_sheets: "Сухие матчи",
    position: "Позиция",
    nationality: "Национальность",
    settings: "Настройки",
    color_scheme: "Цветовая гамма",
    background: "Фон",
    fav_player: "Любимый игрок",
    language: "Язык сайта",
    match_schedule: "Расписание матчей",
    live_performance: "Текущая форма",
    broadcast_description: "Наслаждайтесь матчем в высочайшем качестве с локализованными комментариями.",
    window_transparency: "Прозрачность интерфейса",
    about_us_content: "• Наша миссия — объединить мадридистов со всех уголков планеты в едином цифровом пространстве.\n• Walkers Madrid — это не просто трансляции, это полноценная атмосфера игрового дня с глубокой аналитикой и живой статистикой.\n• Мы являемся независимым фанатским проектом, движимым исключительно страстью к «королевскому клубу», а не коммерческой выгодой.\n• Каждое обновление сайта вдохновлено отзывами нашего сообщества, чтобы соответствовать самым высоким стандартам качества и верности наследию.\n\nHala Madrid i nada mas",
    about_site_content: "• Walkers Madrid — это интерактивная платформа, созданная для объединения болельщиков клуба по всему миру.\n• Предназначение: Сайт предназначен для комфортного просмотра матчей в высоком качестве (Ultra HD) с доступом к актуальной статистике в реальном времени.\n• Источники: Ссылки на трансляции собираются из открытых легальных источников и официальных зеркальных серверов клуба для обеспечения стабильного доступа.\n• Технологии: Мы используем современные архитектуры на базе React и Tailwind CSS для создания максимально быстрого и легкого интерфейса.\n\nHala Madrid i nada mas",
    contacts_content: "Связаться с нами можно через социальные сети:\n\n📸 Instagram: @abul_walker\n🎬 YouTube: @abulwalker\n🎵 TikTok: @abul_wa7ker",
    privacy_policy_content: "• Мы придерживаемся принципа минимизации данных: сайт работает без регистрации, паролей и сбора личной информации.\n• Ваши предпочтения (цветовая схема, громкость, любимый игрок) хранятся исключительно в локальном хранилище вашего браузера.\n• Мы не используем сторонние рекламные трекеры и не передаем данные о ваших действиях третьим лицам.\n• Безопасность: Потоки данных защищены шифрованием, а очистка кэша браузера мгновенно удаляет все сохраненные настройки сайта.\n\nHala Madrid i nada mas",
    copyright: "© 2026 Or1G1nal. Все права защищены.",
    anthem: "Гимн Real Madrid",
    clear_cache: "Сбросить настройки",
    reset_confirm: "Вы уверены?",
    bright_moments: "Яркие моменты",
    ucl_bracket: "Сетка Плей-офф ЛЧ",
    possession: "Владение",
    shots: "Всего ударов",
    shots_on_target: "Удары в створ",
    passing: "Точность передач",
    fouls: "Фолы",
    corners: "Угловые",
    expected_goals: "Ожидаемые голы (xG)",
    match_stats: "Статистика матча",
};

const HY: Translations = Translations {
    home: "Գլխավոր",
    squad: "Թիմի կազմը",
    live_arena: "Ուղիղ եթեր",
    establishing_link: "Միացում...",
    connecting_to: "Միացում հայերեն հեռարձակմանը...",
    ultra_hd_stream: "Ultra HD • Հայերեն",
    exclusive_broadcast: "Բացառիկ հեռարձակում հայերենով",
    choose_language: "Բարի գալուստ Walkers Madrid: Ընտրեք ձեր լեզուն.",
    premium_access: "Պրեմիում մուտք",
    ultimate_experience: "Լավագույն մարզական փորձը",
    about_us: "Մեր մասին",
    about_site: "Կայքի մասին",
    contacts: "Կոնտակտներ",
    privacy_policy: "Գաղտնիության քաղաքականություն",
    close: "Փակել",
    goals: "Գոլեր",
    assists: "Գոլային փոխանցումներ",
    appearances: "Խաղեր",
    clean_sheets: "Չոր հանդիպումներ",
    position: "Դիրք",
    nationality: "Ազգություն",
    settings: "Կարգավորումներ",
    color_scheme: "Գունային սխեման",
    background: "Ֆոն",
    fav_player: "Սիրված խաղացող",
    language: "Կայքի լեզուն",
    match_schedule: "Խաղերի ժամանակացույց",
    live_performance: "Կատարողականություն",
    broadcast_description: "Վայելեք հանդիպումը բարձրագույն որակով՝ տեղայնացված մեկնաբանություններով։",
    window_transparency: "Պատուհանների թափանցիկություն",
    about_us_content: "• Մեր առաքելությունն է միավորել մադրիդիստներին աշխարհի բոլոր ծայրերից մեկ միասնական թվային հարթակում:\n• Walkers Madrid-ը պարզապես հեռարձակում չէ, այն խաղային օրվա ամբողջական մթնոլորտ է՝ խորը վերլուծություններով և վիճակագրությամբ:\n• Մենք անկախ երկրպագուների նախագիծ ենք, որը առաջնորդվում է բացառապես սիրով դեպի \"Արքայական ակումբ\":\n• Կայքի յուրաքանչյուր թարմացում ներշնչված է մեր համայնքի կարծիքներով՝ ապահովելու որակի ամենաբարձր չափանիշները:\n\nHala Madrid i nada mas",
    about_site_content: "• Walkers Madrid-ը ինտերակտիվ երկրպագուների հարթակ է, որը ստեղծված է աշխարհի մադրիդիստներին միավորելու համար:\n• Նպատակը: Կայքը նախատեսված է խաղերը բարձր որակով (Ultra HD) դիտելու և իրական ժամանակի վիճակագրությանը հետևելու համար:\n• Աղբյուրները: Հեռարձակման հղումները հավաքվում են բաց օրինական աղբյուրներից և ակումբի պաշտոնական հայելային սերվերներից՝ կայուն հասանելիություն ապահովելու համար:\n• Տեխնոլոգիաներ: Մենք օգտագործում ենք ժամանակակից React և Tailwind CSS տեխնոլոգիաներ՝ թեթև և արագ ինտերֆեյս ստեղծելու համար:\n\nHala Madrid i nada mas",
    contacts_content: "Կապվեք մեզ հետ սոցիալական ցանցերի միջոցով:\n\n📸 Instagram: @abul_walker\n🎬 YouTube: @abulwalker\n🎵 TikTok: @abul_wa7ker",
    privacy_policy_content: "• Մենք հետևում ենք տվյալների նվազագույնի հասցման սկզբունքին. կայքն աշխատում է առանց գրանցման և անձնական տվյալների հավաքագրման:\n• Ձեր նախապատվությունները (գույնը, ձայնի բարձրությունը, սիրված խաղացողը) պահվում են բացառապես ձեր բրաուզերում:\n• Մենք չենք օգտագործում գովազդային հետքեր և չենք փոխանցում ձեր տվյալները երրորդ անձանց:\n• Անվտանգություն. Տվյալների հոսքերը պաշտպանված են վերծանմամբ, իսկ բրաուզերի քեշի մաքրումը անմիջապես ջնջում է կայքի բոլոր կարգավորումները:\n\nHala Madrid i nada mas",
    copyright: "© 2026 Or1G1nal. Բոլոր իրավունքները պաշտպանված են:",
    anthem: "Real Madrid-ի օրհներգը",
    clear_cache: "Վերականգնել կարգավորումները",
    reset_confirm: "Վստա՞հ եք:",
    bright_moments: "Պայծառ պահեր",
    ucl_bracket: "Չեմպիոնների Լիգայի Փլեյ-օֆֆ",
    possession: "Գնդակի տիրապետում",
    shots: "Ընդհանուր հարվածներ",
    shots_on_target: "Հարվածներ դարպասին",
    passing: "Փոխանցումների ճշգրտություն",
    fouls: "Խախտումներ",
    corners: "Անկյունայիններ",
    expected_goals: "xG (Սպասվող գոլեր)",
    match_stats: "Խաղի վիճակագրություն",
};

const RMTV: Translations = Translations {
    home: "Home",
    squad: "Team Squad",
    live_arena: "RM TV Live",
    establishing_link: "Connecting...",
    connecting_to: "Connecting to Real Madrid TV Official Channel...",
    ultra_hd_stream: "Official Channel",
    exclusive_broadcast: "Official Club Broadcast",
    choose_language: "Select Official Channel Language",
    premium_access: "Official Access",
    ultimate_experience: "The Real Madrid Official Experience",
    about_us: "About Us",
    about_site: "About Site",
    contacts: "Contacts",
    privacy_policy: "Privacy Policy",
    close: "Close",
    goals: "Goals",
    assists: "Assists",
    appearances: "Apps",
    clean_sheets: "Clean Sheets",
    position: "Position",
    nationality: "Nationality",
    settings: "Settings",
    color_scheme: "Color Scheme",
    background: "Background",
    fav_player: "Favorite Player",
    language: "Language",
    match_schedule: "Match Schedule",
    live_performance: "Team Performance",
    broadcast_description: "Official Real Madrid TV stream.",
    window_transparency: "UI Opacity",
    about_us_content: "• Official professional portal dedicated to the global delivery of Real Madrid CF content.\n• Our primary objective is to maintain a high-grade digital sanctuary for club supporters and media partners.\n• We operate with professional transparency, ensuring the club's legacy is protected through verified media channels.\n• This platform serves as a reliable node for official club updates, historical archives, and live events.\n\nHala Madrid i nada mas",
    about_site_content: "• Official fan hub for high-fidelity content delivery.\n• Intended for authorized broadcasting of live matches and historical club archives.\n• Sources: Links are served directly from official club infrastructure and verified global partners.\n• Design: Secure, low-latency delivery designed for the best possible fan experience.\n\nHala Madrid i nada mas",
    contacts_content: "Contact us via official channels.",
    privacy_policy_content: "• Standard enterprise-grade privacy protocols apply to all official streaming sessions.\n• We ensure total protection of session metadata; no personally identifiable information (PII) is captured during visits.\n• Local storage is utilized solely for maintaining technical state and user interface preferences.\n• Any external nodes accessed through this portal are verified for security and compliance with international media laws.\n\nHala Madrid i nada mas",
    copyright: "© 2026 Or1G1nal. All rights reserved.",
    anthem: "Real Madrid Anthem",
    clear_cache: "Reset Settings",
    reset_confirm: "Are you sure?",
    bright_moments: "Bright Moments",
    ucl_bracket: "UCL Tournament Bracket",
    possession: "Possession",
    shots: "Total Shots",
    shots_on_target: "Shots on Target",
    passing: "Passing %",
    fouls: "Fouls",
    corners: "Corners",
    expected_goals: "xG",
    match_stats: "Match Stats",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_prefers_query_then_persisted_then_default() {
        assert_eq!(resolve_language(Some("hy"), Some("en")).code, "hy");
        assert_eq!(resolve_language(None, Some("en")).code, "en");
        assert_eq!(resolve_language(None, None).code, "ru");
        assert_eq!(resolve_language(Some("xx"), None).code, "ru");
    }

    #[test]
    fn picker_hides_english_and_lists_special_last() {
        let codes: Vec<_> = picker_languages().iter().map(|l| l.code).collect();
        assert_eq!(codes, vec!["ru", "hy", "rmtv"]);
    }

    #[test]
    fn unknown_template_falls_back_to_english() {
        assert_eq!(welcome_template("rmtv").title, "Welcome Back!");
    }
}
