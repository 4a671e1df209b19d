//! Localized labels.

use crate::application::navigation::ScreenKind;
use crate::infrastructure::config::Locale;

/// Symbolic key for every user-visible label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum StringKey {
    AppName,
    PlacesList,
    PlaceDetails,
    AboutApp,
    PlaceNotFound,
    NoPlaces,
    CategoryLabel,
    AddressLabel,
    AboutHeading,
    AboutBody,
    HintMove,
    HintOpen,
    HintBack,
    HintAbout,
    HintQuit,
    HintScroll,
}

impl StringKey {
    /// Title key for a screen.
    #[must_use]
    pub const fn title_for(kind: ScreenKind) -> Self {
        match kind {
            ScreenKind::CategoryList => Self::AppName,
            ScreenKind::PlaceList => Self::PlacesList,
            ScreenKind::PlaceDetail => Self::PlaceDetails,
            ScreenKind::About => Self::AboutApp,
        }
    }
}

/// String table for one locale.
#[derive(Debug, Clone, Copy, Default)]
pub struct Strings {
    locale: Locale,
}

impl Strings {
    /// Creates the table for `locale`.
    #[must_use]
    pub const fn new(locale: Locale) -> Self {
        Self { locale }
    }

    /// Active locale.
    #[must_use]
    pub const fn locale(&self) -> Locale {
        self.locale
    }

    /// Label for `key`.
    #[must_use]
    pub const fn get(&self, key: StringKey) -> &'static str {
        match self.locale {
            Locale::En => en(key),
            Locale::Ru => ru(key),
        }
    }

    /// Screen title.
    #[must_use]
    pub const fn title(&self, kind: ScreenKind) -> &'static str {
        self.get(StringKey::title_for(kind))
    }
}

const fn en(key: StringKey) -> &'static str {
    match key {
        StringKey::AppName => "City Guide",
        StringKey::PlacesList => "Places",
        StringKey::PlaceDetails => "Place details",
        StringKey::AboutApp => "About",
        StringKey::PlaceNotFound => "Place not found",
        StringKey::NoPlaces => "No places in this category",
        StringKey::CategoryLabel => "Category",
        StringKey::AddressLabel => "Address",
        StringKey::AboutHeading => "City Guide",
        StringKey::AboutBody => {
            "Browse the city's places by category.\nPick a category, then a place to read about it."
        }
        StringKey::HintMove => "Move",
        StringKey::HintOpen => "Open",
        StringKey::HintBack => "Back",
        StringKey::HintAbout => "About",
        StringKey::HintQuit => "Quit",
        StringKey::HintScroll => "Scroll",
    }
}

const fn ru(key: StringKey) -> &'static str {
    match key {
        StringKey::AppName => "Путеводитель",
        StringKey::PlacesList => "Список мест",
        StringKey::PlaceDetails => "Подробнее о месте",
        StringKey::AboutApp => "О приложении",
        StringKey::PlaceNotFound => "Место не найдено",
        StringKey::NoPlaces => "В этой категории нет мест",
        StringKey::CategoryLabel => "Категория",
        StringKey::AddressLabel => "Адрес",
        StringKey::AboutHeading => "Путеводитель по городу",
        StringKey::AboutBody => {
            "Просмотр мест города по категориям.\nВыберите категорию, затем место, чтобы узнать о нём."
        }
        StringKey::HintMove => "Выбор",
        StringKey::HintOpen => "Открыть",
        StringKey::HintBack => "Назад",
        StringKey::HintAbout => "О приложении",
        StringKey::HintQuit => "Выход",
        StringKey::HintScroll => "Прокрутка",
    }
}
