//! Generated index documents
//!
//! Both documents are rendered purely from catalog data, independent of
//! which APIs were fetched successfully.

use crate::catalog::{self, ApiEntry, Category};
use chrono::NaiveDateTime;

/// Timestamp format of the "last updated" line (`dd.mm.yyyy, HH:MM:SS`)
const TIMESTAMP_FORMAT: &str = "%d.%m.%Y, %H:%M:%S";

/// `README.md` of a single category directory
pub fn render_category_index(category: Category, apis: &[ApiEntry]) -> String {
    let mut out = String::new();
    out.push_str(&format!("# {}\n\n", category.title()));
    out.push_str(&format!("{}\n\n", category.description()));
    out.push_str("## Доступные API\n\n");

    for api in catalog::by_category(apis, category) {
        out.push_str(&format!(
            "- [{}](./{}-api.md) - {}\n",
            api.title, api.name, api.description
        ));
    }
    out
}

/// Top-level `README.md` linking every category and API
pub fn render_main_readme(
    apis: &[ApiEntry],
    source_url: &str,
    generated_at: NaiveDateTime,
) -> String {
    let mut out = String::new();
    out.push_str("# 2GIS API Documentation\n\n");
    out.push_str("Документация всех доступных API 2GIS, извлеченная из официальных источников.\n\n");
    out.push_str("## Категории API\n\n");

    for category in catalog::categories(apis) {
        out.push_str(&format!(
            "### [{}](./{}/README.md)\n\n",
            category.title(),
            category.slug()
        ));
        out.push_str(&format!("{}\n\n", category.description()));
        for api in catalog::by_category(apis, category) {
            out.push_str(&format!(
                "- [{}](./{}/{}-api.md)\n",
                api.title,
                category.slug(),
                api.name
            ));
        }
        out.push('\n');
    }

    out.push_str("## Обновление документации\n\n");
    out.push_str("Документация автоматически обновляется из официальных источников 2GIS.\n");
    out.push_str(&format!(
        "Последнее обновление: {}\n\n",
        generated_at.format(TIMESTAMP_FORMAT)
    ));
    out.push_str("## Источник\n\n");
    out.push_str(&format!(
        "Официальная документация: {}/\n",
        source_url.trim_end_matches('/')
    ));
    out
}
