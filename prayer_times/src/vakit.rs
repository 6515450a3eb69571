use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The six daily prayer times, named by the `data-vakit-name` values the
/// source page uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Vakit {
    Imsak,
    Gunes,
    Ogle,
    Ikindi,
    Aksam,
    Yatsi,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Display, EnumIter, EnumString)]
pub enum Language {
    #[default]
    #[strum(serialize = "tr")]
    Turkish,
    #[strum(serialize = "en")]
    English,
    #[strum(serialize = "ar")]
    Arabic,
}

impl Vakit {
    pub fn label(self, language: Language) -> &'static str {
        match language {
            Language::Turkish => self.canonical_id(),
            Language::English => match self {
                Vakit::Imsak => "Fajr",
                Vakit::Gunes => "Sunrise",
                Vakit::Ogle => "Dhuhr",
                Vakit::Ikindi => "Asr",
                Vakit::Aksam => "Maghrib",
                Vakit::Yatsi => "Isha",
            },
            Language::Arabic => match self {
                Vakit::Imsak => "الفجر",
                Vakit::Gunes => "الشروق",
                Vakit::Ogle => "الظهر",
                Vakit::Ikindi => "العصر",
                Vakit::Aksam => "المغرب",
                Vakit::Yatsi => "العشاء",
            },
        }
    }

    pub fn canonical_id(self) -> &'static str {
        self.into()
    }
}
