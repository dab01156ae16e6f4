use clap::ValueEnum;

/// Output language of the fixed report strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Language {
    #[default]
    Ru,
    En,
}

impl Language {
    pub fn report_title(self) -> &'static str {
        match self {
            Language::Ru => "Отчет по звонкам",
            Language::En => "Calls report",
        }
    }

    pub fn hours(self) -> &'static str {
        match self {
            Language::Ru => "ч",
            Language::En => "h",
        }
    }

    pub fn minutes(self) -> &'static str {
        match self {
            Language::Ru => "мин",
            Language::En => "min",
        }
    }

    pub fn seconds(self) -> &'static str {
        match self {
            Language::Ru => "сек",
            Language::En => "sec",
        }
    }
}
