use chrono::{Datelike, NaiveDate};
use interfaces_github_search::models::Repository;
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

const TOP_LANGUAGES: usize = 8;
const TIMELINE_MONTHS: usize = 12;
const NO_LANGUAGE: &str = "None";

/// Headline numbers shown above the result grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RepoStats {
    pub total_repos: u64,
    pub total_stars: u64,
    pub top_language: String,
    pub avg_forks: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LanguageCount {
    pub language: String,
    pub count: u64,
}

/// Repositories created in one calendar month
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBucket {
    pub period: String, // "2024-01"
    pub label: String,  // "Jan 2024"
    pub count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeRange {
    Small,
    Medium,
    Large,
    VeryLarge,
}

impl SizeRange {
    pub const ALL: [SizeRange; 4] = [
        SizeRange::Small,
        SizeRange::Medium,
        SizeRange::Large,
        SizeRange::VeryLarge,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SizeRange::Small => "Small (< 1MB)",
            SizeRange::Medium => "Medium (1-10MB)",
            SizeRange::Large => "Large (10-100MB)",
            SizeRange::VeryLarge => "Very Large (> 100MB)",
        }
    }

    /// Classifies a size given in kilobytes
    pub fn of_kilobytes(size_kb: u64) -> Self {
        let size_mb = size_kb as f64 / 1024.0;
        if size_mb < 1.0 {
            SizeRange::Small
        } else if size_mb < 10.0 {
            SizeRange::Medium
        } else if size_mb < 100.0 {
            SizeRange::Large
        } else {
            SizeRange::VeryLarge
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SizeBucket {
    pub range: &'static str,
    pub count: u64,
}

/// Counts non-empty languages, keeping first-encountered order
fn count_languages(repositories: &[Repository]) -> Vec<(String, u64)> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut counts: Vec<(String, u64)> = Vec::new();

    for language in repositories
        .iter()
        .filter_map(|repo| repo.language.as_deref())
        .filter(|language| !language.is_empty())
    {
        match positions.get(language) {
            Some(&idx) => counts[idx].1 += 1,
            None => {
                positions.insert(language, counts.len());
                counts.push((language.to_string(), 1));
            }
        }
    }

    counts
}

pub fn calculate_stats(repositories: &[Repository]) -> RepoStats {
    if repositories.is_empty() {
        return RepoStats {
            total_repos: 0,
            total_stars: 0,
            top_language: NO_LANGUAGE.to_string(),
            avg_forks: 0,
        };
    }

    let total_stars = repositories.iter().map(|repo| repo.stargazers_count).sum();
    let total_forks: u64 = repositories.iter().map(|repo| repo.forks_count).sum();
    let avg_forks = (total_forks as f64 / repositories.len() as f64).round() as u64;

    // Strict comparison: on equal counts the earlier language stays on top
    let top_language = count_languages(repositories)
        .into_iter()
        .fold(None::<(String, u64)>, |best, (language, count)| match best {
            Some((_, best_count)) if best_count >= count => best,
            _ => Some((language, count)),
        })
        .map(|(language, _)| language)
        .unwrap_or_else(|| NO_LANGUAGE.to_string());

    RepoStats {
        total_repos: repositories.len() as u64,
        total_stars,
        top_language,
        avg_forks,
    }
}

/// Top languages by repository count, most frequent first
pub fn language_distribution(repositories: &[Repository]) -> Vec<LanguageCount> {
    let mut counts = count_languages(repositories);
    counts.sort_by(|a, b| b.1.cmp(&a.1));

    counts
        .into_iter()
        .take(TOP_LANGUAGES)
        .map(|(language, count)| LanguageCount { language, count })
        .collect()
}

/// Creation-month histogram over the most recent twelve months that have data
pub fn creation_timeline(repositories: &[Repository]) -> Vec<TimelineBucket> {
    let mut months: BTreeMap<(i32, u32), u64> = BTreeMap::new();
    for repo in repositories {
        let created = repo.created_at.date_naive();
        *months.entry((created.year(), created.month())).or_insert(0) += 1;
    }

    let skip = months.len().saturating_sub(TIMELINE_MONTHS);
    months
        .into_iter()
        .skip(skip)
        .map(|((year, month), count)| TimelineBucket {
            period: format!("{year:04}-{month:02}"),
            label: NaiveDate::from_ymd_opt(year, month, 1)
                .map(|first| first.format("%b %Y").to_string())
                .unwrap_or_else(|| format!("{year:04}-{month:02}")),
            count,
        })
        .collect()
}

/// Always four buckets, smallest first; counts sum to the input length
pub fn size_distribution(repositories: &[Repository]) -> Vec<SizeBucket> {
    let mut counts = [0u64; 4];
    for repo in repositories {
        counts[SizeRange::of_kilobytes(repo.size) as usize] += 1;
    }

    SizeRange::ALL
        .iter()
        .zip(counts)
        .map(|(range, count)| SizeBucket {
            range: range.label(),
            count,
        })
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use chrono::{DateTime, TimeZone, Utc};
    use interfaces_github_search::models::Owner;

    pub(crate) fn repo(id: u64, language: Option<&str>, stars: u64, forks: u64) -> Repository {
        let created: DateTime<Utc> = Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap();
        Repository {
            id,
            name: format!("repo-{id}"),
            full_name: format!("octo/repo-{id}"),
            description: None,
            html_url: format!("https://github.com/octo/repo-{id}"),
            stargazers_count: stars,
            forks_count: forks,
            watchers_count: stars,
            language: language.map(str::to_string),
            size: 100,
            created_at: created,
            updated_at: created,
            pushed_at: created,
            owner: Owner {
                login: "octo".to_string(),
                avatar_url: "https://github.com/octo.png".to_string(),
                html_url: "https://github.com/octo".to_string(),
            },
            topics: Vec::new(),
            license: None,
            open_issues_count: 0,
            default_branch: "main".to_string(),
        }
    }

    fn created_in(id: u64, year: i32, month: u32) -> Repository {
        let mut r = repo(id, None, 0, 0);
        r.created_at = Utc.with_ymd_and_hms(year, month, 3, 0, 0, 0).unwrap();
        r
    }

    fn sized(id: u64, size_kb: u64) -> Repository {
        let mut r = repo(id, None, 0, 0);
        r.size = size_kb;
        r
    }

    #[test]
    fn stats_for_small_sample() {
        let repos = vec![
            repo(1, Some("Go"), 100, 10),
            repo(2, Some("Go"), 50, 5),
            repo(3, Some("Rust"), 10, 1),
        ];

        assert_eq!(
            calculate_stats(&repos),
            RepoStats {
                total_repos: 3,
                total_stars: 160,
                top_language: "Go".to_string(),
                avg_forks: 5,
            }
        );
    }

    #[test]
    fn stats_for_empty_list() {
        let stats = calculate_stats(&[]);
        assert_eq!(stats.total_repos, 0);
        assert_eq!(stats.total_stars, 0);
        assert_eq!(stats.avg_forks, 0);
        assert_eq!(stats.top_language, "None");
    }

    #[test]
    fn stats_serialize_camel_case() {
        let json = serde_json::to_value(calculate_stats(&[])).unwrap();
        assert_eq!(
            json,
            serde_json::json!({"totalRepos": 0, "totalStars": 0, "topLanguage": "None", "avgForks": 0})
        );
    }

    #[test]
    fn top_language_tie_keeps_first_seen() {
        let repos = vec![
            repo(1, Some("Rust"), 0, 0),
            repo(2, Some("Go"), 0, 0),
            repo(3, Some("Go"), 0, 0),
            repo(4, Some("Rust"), 0, 0),
        ];
        assert_eq!(calculate_stats(&repos).top_language, "Rust");
    }

    #[test]
    fn top_language_ignores_missing_languages() {
        let repos = vec![repo(1, None, 3, 2), repo(2, Some(""), 4, 1)];
        let stats = calculate_stats(&repos);
        assert_eq!(stats.top_language, "None");
        assert_eq!(stats.total_stars, 7);
        // 1.5 rounds up
        assert_eq!(stats.avg_forks, 2);
    }

    #[test]
    fn language_distribution_is_sorted_and_capped() {
        let names = ["A", "B", "C", "D", "E", "F", "G", "H", "I", "J"];
        let mut repos = Vec::new();
        let mut id = 0;
        for (rank, name) in names.iter().enumerate() {
            for _ in 0..(names.len() - rank) {
                id += 1;
                repos.push(repo(id, Some(*name), 0, 0));
            }
        }
        repos.push(repo(1000, None, 0, 0));

        let distribution = language_distribution(&repos);
        assert_eq!(distribution.len(), 8);
        assert_eq!(distribution[0], LanguageCount { language: "A".to_string(), count: 10 });
        assert!(distribution.windows(2).all(|w| w[0].count >= w[1].count));

        let with_language = repos.iter().filter(|r| r.language.is_some()).count() as u64;
        assert!(distribution.iter().map(|l| l.count).sum::<u64>() <= with_language);
    }

    #[test]
    fn language_distribution_ties_keep_first_seen() {
        let repos = vec![
            repo(1, Some("Zig"), 0, 0),
            repo(2, Some("Ada"), 0, 0),
            repo(3, Some("Ada"), 0, 0),
            repo(4, Some("Zig"), 0, 0),
            repo(5, Some("C"), 0, 0),
        ];
        let languages: Vec<_> = language_distribution(&repos)
            .into_iter()
            .map(|l| l.language)
            .collect();
        assert_eq!(languages, vec!["Zig", "Ada", "C"]);
    }

    #[test]
    fn timeline_keeps_latest_twelve_months_in_order() {
        let mut repos = Vec::new();
        for month in 1..=12 {
            repos.push(created_in(month as u64, 2023, month));
        }
        repos.push(created_in(100, 2024, 2));
        repos.push(created_in(101, 2024, 2));

        let timeline = creation_timeline(&repos);
        assert_eq!(timeline.len(), 12);
        assert_eq!(timeline[0].period, "2023-02");
        assert_eq!(timeline[0].label, "Feb 2023");
        let last = timeline.last().unwrap();
        assert_eq!(last.period, "2024-02");
        assert_eq!(last.label, "Feb 2024");
        assert_eq!(last.count, 2);
    }

    #[test]
    fn timeline_of_empty_list_is_empty() {
        assert!(creation_timeline(&[]).is_empty());
    }

    #[test]
    fn size_buckets_use_megabyte_bounds() {
        assert_eq!(SizeRange::of_kilobytes(1023), SizeRange::Small);
        assert_eq!(SizeRange::of_kilobytes(1024), SizeRange::Medium);
        assert_eq!(SizeRange::of_kilobytes(10 * 1024 - 1), SizeRange::Medium);
        assert_eq!(SizeRange::of_kilobytes(10 * 1024), SizeRange::Large);
        assert_eq!(SizeRange::of_kilobytes(100 * 1024), SizeRange::VeryLarge);
    }

    #[test]
    fn size_distribution_counts_every_repository() {
        let repos = vec![sized(1, 0), sized(2, 2048), sized(3, 20_000), sized(4, 500_000), sized(5, 10)];
        let buckets = size_distribution(&repos);

        assert_eq!(buckets.len(), 4);
        assert_eq!(buckets.iter().map(|b| b.count).sum::<u64>(), repos.len() as u64);
        assert_eq!(buckets[0], SizeBucket { range: "Small (< 1MB)", count: 2 });
        assert_eq!(buckets[3].range, "Very Large (> 100MB)");

        let empty = size_distribution(&[]);
        assert_eq!(empty.len(), 4);
        assert!(empty.iter().all(|b| b.count == 0));
    }
}
