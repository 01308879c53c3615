use crate::domain::model::{Catalog, MatchedField, PackageRecord, RankedResult};

/// Queries shorter than this (after trimming) return nothing.
pub const MIN_QUERY_CHARS: usize = 2;

/// Trims and lower-cases a raw query, or `None` when it is too short to search.
pub fn normalize_query(query: &str) -> Option<String> {
    let term = query.trim().to_lowercase();
    if term.chars().count() < MIN_QUERY_CHARS {
        return None;
    }
    Some(term)
}

fn contains(field: &str, term: &str) -> bool {
    field.to_lowercase().contains(term)
}

/// Scores one package against an already normalized term.
///
/// Every matching city and tag adds its weight; the label is recorded once.
pub fn score_package(package: &PackageRecord, term: &str) -> (u32, Vec<MatchedField>) {
    let mut score = 0;
    let mut matched = Vec::new();

    let mut hit = |field: MatchedField, occurrences: usize| {
        if occurrences > 0 {
            score += field.weight() * occurrences as u32;
            if !matched.contains(&field) {
                matched.push(field);
            }
        }
    };

    hit(MatchedField::Name, contains(&package.name, term) as usize);
    hit(
        MatchedField::City,
        package.cities.iter().filter(|c| contains(c, term)).count(),
    );
    hit(MatchedField::Region, contains(&package.region, term) as usize);
    hit(
        MatchedField::Tag,
        package.tags.iter().filter(|t| contains(t, term)).count(),
    );
    hit(MatchedField::Type, contains(&package.r#type, term) as usize);
    hit(MatchedField::Duration, contains(&package.duration, term) as usize);

    (score, matched)
}

/// Ranks the catalog against `query`, highest score first.
///
/// Zero-score packages are dropped. Equal scores keep catalog order.
pub fn search(query: &str, catalog: &Catalog) -> Vec<RankedResult> {
    let Some(term) = normalize_query(query) else {
        return Vec::new();
    };

    let mut results: Vec<RankedResult> = catalog
        .packages()
        .iter()
        .filter_map(|package| {
            let (score, matched_fields) = score_package(package, &term);
            (score > 0).then(|| RankedResult {
                package: package.clone(),
                score,
                matched_fields,
            })
        })
        .collect();

    // sort_by 是穩定排序
    results.sort_by(|a, b| b.score.cmp(&a.score));
    results
}
