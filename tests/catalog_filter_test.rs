use outfit_assistant::core::CatalogSource;
use outfit_assistant::{filter_items, Catalog, Category, FilterCriteria, Formality};

fn catalog() -> Catalog {
    Catalog::embedded().expect("embedded catalog should load")
}

#[test]
fn test_every_category_filter_returns_only_that_category() {
    let catalog = catalog();

    for category in [
        Category::Outerwear,
        Category::Tops,
        Category::Bottoms,
        Category::Footwear,
        Category::Accessories,
    ] {
        let criteria = FilterCriteria::by_category(category);
        let items = filter_items(&catalog, Some(&criteria));

        assert!(!items.is_empty(), "{} should not be empty", category);
        assert!(items.iter().all(|item| item.category == category));
    }
}

#[test]
fn test_available_filter() {
    let catalog = catalog();
    let criteria = FilterCriteria::default().only_available();

    let items = filter_items(&catalog, Some(&criteria));
    assert!(items.iter().all(|item| item.available));
}

#[test]
fn test_no_criteria_returns_each_item_once_in_order() {
    let catalog = catalog();
    let ids: Vec<_> = filter_items(&catalog, None)
        .iter()
        .map(|item| item.id.clone())
        .collect();

    let expected: Vec<_> = catalog.items().iter().map(|item| item.id.clone()).collect();
    assert_eq!(ids, expected);
}

#[test]
fn test_season_membership() {
    let catalog = catalog();

    for season in ["summer", "winter", "all"] {
        let criteria = FilterCriteria::default().with_season(season);
        let items = filter_items(&catalog, Some(&criteria));

        assert!(!items.is_empty());
        assert!(items
            .iter()
            .all(|item| item.season.iter().any(|s| s == season)));
    }

    // "all" is a literal season tag, not a wildcard
    let criteria = FilterCriteria::default().with_season("all");
    let ids: Vec<_> = filter_items(&catalog, Some(&criteria))
        .iter()
        .map(|item| item.id.as_str())
        .collect();
    assert_eq!(ids, vec!["belt_001"]);
}

#[test]
fn test_combined_criteria_are_anded() {
    let catalog = catalog();
    let criteria = FilterCriteria::by_category(Category::Tops)
        .with_formality(Formality::BusinessCasual)
        .with_season("summer");

    let ids: Vec<_> = filter_items(&catalog, Some(&criteria))
        .iter()
        .map(|item| item.id.as_str())
        .collect();

    assert_eq!(ids, vec!["polo_001", "linen_shirt_001"]);
}

#[test]
fn test_no_match_is_empty_not_error() {
    let catalog = catalog();
    let criteria = FilterCriteria::by_category(Category::Accessories).with_season("monsoon");

    assert!(filter_items(&catalog, Some(&criteria)).is_empty());
}
