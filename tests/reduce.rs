use marquee::*;

#[test]
fn empty_fragment_list_reduces_to_an_empty_patch() {
    let patch = reduce(&[], ContentType::Movie);
    assert!(patch.is_empty());
}

#[test]
fn year_endpoints_merge_into_the_context_date_range() {
    let fragments = compile("since 2015 until 2020");
    assert_eq!(fragments.len(), 2);

    let patch = reduce(&fragments, ContentType::Movie);
    assert_eq!(
        patch.release_date,
        Some(DateRange {
            start: Some("2015".to_string()),
            end: Some("2020".to_string()),
        })
    );
    assert_eq!(patch.first_air_date, None);

    let patch = reduce(&fragments, ContentType::Tv);
    assert_eq!(
        patch.first_air_date,
        Some(DateRange {
            start: Some("2015".to_string()),
            end: Some("2020".to_string()),
        })
    );
    assert_eq!(patch.release_date, None);
}

#[test]
fn an_exact_year_pins_both_endpoints() {
    let patch = reduce(&compile("2016"), ContentType::Movie);
    assert_eq!(
        patch.release_date,
        Some(DateRange {
            start: Some("2016".to_string()),
            end: Some("2016".to_string()),
        })
    );
}

#[test]
fn later_year_fragments_overwrite_earlier_endpoints() {
    // two exact years: the second write wins for both endpoints
    let patch = reduce(&compile("2015 2018"), ContentType::Movie);
    assert_eq!(
        patch.release_date,
        Some(DateRange {
            start: Some("2018".to_string()),
            end: Some("2018".to_string()),
        })
    );
}

#[test]
fn rating_endpoints_merge_independently() {
    let patch = reduce(&compile("rated above 6 rated below 9"), ContentType::Movie);
    assert_eq!(
        patch.rating,
        Some(RatingBounds {
            min: Some(6.0),
            max: Some(9.0),
        })
    );
}

#[test]
fn a_rating_range_writes_both_bounds() {
    let patch = reduce(&compile("rated between 6 and 8"), ContentType::Movie);
    assert_eq!(
        patch.rating,
        Some(RatingBounds {
            min: Some(6.0),
            max: Some(8.0),
        })
    );
}

#[test]
fn duplicate_genre_ids_collapse_to_one_entry() {
    let fragments = compile("action action movies");
    let genre_count = fragments
        .iter()
        .filter(|f| matches!(f.value, FragmentValue::Genre { .. }))
        .count();
    assert_eq!(genre_count, 2);

    let patch = reduce(&fragments, ContentType::Movie);
    assert_eq!(patch.genres, [28]);
}

#[test]
fn duplicate_provider_ids_collapse_to_one_entry() {
    let patch = reduce(&compile("netflix netflix"), ContentType::Movie);
    assert_eq!(patch.providers, [8]);
}

#[test]
fn the_last_content_type_mention_wins() {
    let fragments = compile("movies tv shows");
    let patch = reduce(&fragments, ContentType::Movie);
    assert_eq!(patch.content_type, Some(ContentType::Tv));
}

#[test]
fn country_overwrites_the_region_scalar() {
    let patch = reduce(&compile("in france in japan"), ContentType::Movie);
    assert_eq!(patch.region, Some("JP".to_string()));
}

#[test]
fn removing_a_fragment_removes_its_effect() {
    let fragments = compile("action movies on netflix rated above 7");
    let trimmed: Vec<Fragment> = fragments
        .into_iter()
        .filter(|f| !matches!(f.value, FragmentValue::Provider { .. }))
        .collect();

    let patch = reduce(&trimmed, ContentType::Movie);
    assert!(patch.providers.is_empty());
    assert_eq!(patch.genres, [28]);
    assert_eq!(patch.content_type, Some(ContentType::Movie));
    assert_eq!(
        patch.rating,
        Some(RatingBounds {
            min: Some(7.0),
            max: None,
        })
    );
}

#[test]
fn reduction_is_deterministic() {
    let fragments = compile("comedy shows on hulu rated above 6 since 2018");
    let first = reduce(&fragments, ContentType::Tv);
    let second = reduce(&fragments, ContentType::Tv);
    assert_eq!(first, second);
}
