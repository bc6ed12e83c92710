//! Static catalog of documented APIs
//!
//! The catalog is plain data: adding an API means adding an [`ApiEntry`]
//! to [`APIS`].

use serde::Serialize;
use std::fmt;

/// Group an API belongs to; also the output subdirectory
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Search,
    Navigation,
}

impl Category {
    /// Directory and URL segment
    pub fn slug(self) -> &'static str {
        match self {
            Category::Search => "search",
            Category::Navigation => "navigation",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Category::Search => "Search APIs",
            Category::Navigation => "Navigation APIs",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Category::Search => "APIs для поиска организаций, геокодирования и работы с данными",
            Category::Navigation => "APIs для навигации, маршрутизации и логистики",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

/// One documented API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ApiEntry {
    /// Slug used in file names and OpenAPI URLs
    pub name: &'static str,
    /// Page path below `/<locale>/api/`
    pub path: &'static str,
    pub category: Category,
    pub title: &'static str,
    pub description: &'static str,
}

const fn api(
    name: &'static str,
    path: &'static str,
    category: Category,
    title: &'static str,
    description: &'static str,
) -> ApiEntry {
    ApiEntry {
        name,
        path,
        category,
        title,
        description,
    }
}

/// Every API the scraper knows about, in processing order
pub const APIS: &[ApiEntry] = &[
    api(
        "places",
        "search/places/overview",
        Category::Search,
        "Places API",
        "Поиск организаций, зданий и мест",
    ),
    api(
        "geocoder",
        "search/geocoder/overview",
        Category::Search,
        "Geocoder API",
        "Прямое и обратное геокодирование",
    ),
    api(
        "suggest",
        "search/suggest/overview",
        Category::Search,
        "Suggest API",
        "Автодополнение для поиска",
    ),
    api(
        "categories",
        "search/categories/overview",
        Category::Search,
        "Categories API",
        "Работа с категориями организаций",
    ),
    api(
        "regions",
        "search/regions/overview",
        Category::Search,
        "Regions API",
        "Информация о регионах и административных единицах",
    ),
    api(
        "markers",
        "search/markers/overview",
        Category::Search,
        "Markers API",
        "Работа с маркерами на карте",
    ),
    api(
        "routing",
        "navigation/routing/overview",
        Category::Navigation,
        "Routing API",
        "Построение маршрутов",
    ),
    api(
        "public-transport",
        "navigation/public-transport/overview",
        Category::Navigation,
        "Public Transport API",
        "Маршруты общественного транспорта",
    ),
    api(
        "directions",
        "navigation/directions/overview",
        Category::Navigation,
        "Directions API",
        "Построение направлений (устаревший)",
    ),
    api(
        "pairs",
        "navigation/pairs/overview",
        Category::Navigation,
        "Pairs Directions API",
        "Маршруты между парами точек (устаревший)",
    ),
    api(
        "truck-directions",
        "navigation/truck-directions/overview",
        Category::Navigation,
        "Truck Directions API",
        "Маршруты для грузового транспорта (устаревший)",
    ),
    api(
        "distance-matrix",
        "navigation/distance-matrix/overview",
        Category::Navigation,
        "Distance Matrix API",
        "Матрица расстояний между точками",
    ),
    api(
        "tsp",
        "navigation/tsp/overview",
        Category::Navigation,
        "TSP API",
        "Решение задачи коммивояжера",
    ),
    api(
        "isochrone",
        "navigation/isochrone/overview",
        Category::Navigation,
        "Isochrone API",
        "Изохронные области",
    ),
    api(
        "map-matching",
        "navigation/map-matching/overview",
        Category::Navigation,
        "Map Matching API",
        "Привязка треков к дорожной сети",
    ),
    api(
        "radar",
        "navigation/radar/overview",
        Category::Navigation,
        "Radar API",
        "Поиск объектов в радиусе",
    ),
];

/// Look up an API by name
pub fn find(name: &str) -> Option<&'static ApiEntry> {
    APIS.iter().find(|api| api.name == name)
}

/// Distinct categories of `apis`, in first-seen order
pub fn categories(apis: &[ApiEntry]) -> Vec<Category> {
    let mut seen = Vec::new();
    for api in apis {
        if !seen.contains(&api.category) {
            seen.push(api.category);
        }
    }
    seen
}

/// Entries of `apis` in `category`, order preserved
pub fn by_category(apis: &[ApiEntry], category: Category) -> Vec<&ApiEntry> {
    apis.iter().filter(|api| api.category == category).collect()
}
