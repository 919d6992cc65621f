use log::{info, warn};
use std::fs;
use std::path::Path;

use paygrid_core::errors::{Error, Result};

/// Query file compiled into the crate, used when no override is configured.
pub const BUNDLED_QUERIES: &str = include_str!("../../sql/queries.sql");

const NAME_PREFIX: &str = "-- name:";

/// Named queries the repository knows how to bind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CannedQuery {
    TotalCompensationByRegion,
    TotalCompensationPerEmployeeLatest,
    AverageSalaryPerJobCategory,
    EmployeesChangedDepartments,
    TopPaidPerDepartment,
}

impl CannedQuery {
    pub const ALL: [CannedQuery; 5] = [
        CannedQuery::TotalCompensationByRegion,
        CannedQuery::TotalCompensationPerEmployeeLatest,
        CannedQuery::AverageSalaryPerJobCategory,
        CannedQuery::EmployeesChangedDepartments,
        CannedQuery::TopPaidPerDepartment,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            CannedQuery::TotalCompensationByRegion => "total_compensation_by_region",
            CannedQuery::TotalCompensationPerEmployeeLatest => {
                "total_compensation_per_employee_latest"
            }
            CannedQuery::AverageSalaryPerJobCategory => "average_salary_per_job_category",
            CannedQuery::EmployeesChangedDepartments => "employees_changed_departments",
            CannedQuery::TopPaidPerDepartment => "top_paid_per_department",
        }
    }

    /// Number of values the repository binds, as `?1..=?n`.
    pub fn parameter_count(&self) -> usize {
        match self {
            CannedQuery::TotalCompensationByRegion => 0,
            CannedQuery::TotalCompensationPerEmployeeLatest => 0,
            CannedQuery::AverageSalaryPerJobCategory => 1,
            CannedQuery::EmployeesChangedDepartments => 2,
            CannedQuery::TopPaidPerDepartment => 1,
        }
    }

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|query| query.name() == name)
    }

    fn index(&self) -> usize {
        *self as usize
    }
}

/// SQL text of every canned query, loaded once at startup.
#[derive(Debug, Clone)]
pub struct QueryCatalog {
    queries: Vec<String>,
}

impl QueryCatalog {
    pub fn bundled() -> Result<Self> {
        Self::parse(BUNDLED_QUERIES)
    }

    pub fn load(path: &Path) -> Result<Self> {
        info!("Loading canned queries from {}", path.display());
        let text = fs::read_to_string(path).map_err(|e| {
            Error::QueryCatalog(format!("Cannot read {}: {}", path.display(), e))
        })?;
        Self::parse(&text)
    }

    /// Loads `path` when given, the bundled queries otherwise.
    pub fn from_optional_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Self::bundled(),
        }
    }

    /// Parses a query file.
    ///
    /// Blocks are separated by blank lines and each one opens with a
    /// `-- name: <query>` line. Every known query must be present exactly once
    /// and use numbered placeholders up to its parameter count.
    pub fn parse(text: &str) -> Result<Self> {
        let mut slots: Vec<Option<String>> = vec![None; CannedQuery::ALL.len()];

        for block in split_blocks(text) {
            let Some(name) = block_name(&block) else {
                return Err(Error::QueryCatalog(format!(
                    "Query block without a '{}' header: {}",
                    NAME_PREFIX,
                    first_line(&block)
                )));
            };
            let Some(query) = CannedQuery::from_name(name) else {
                warn!("Ignoring unknown canned query '{}'", name);
                continue;
            };

            let highest = highest_placeholder(&block)?;
            if highest != query.parameter_count() {
                return Err(Error::QueryCatalog(format!(
                    "Query '{}' uses {} parameter(s), expected {}",
                    name,
                    highest,
                    query.parameter_count()
                )));
            }

            let slot = &mut slots[query.index()];
            if slot.is_some() {
                return Err(Error::QueryCatalog(format!(
                    "Query '{}' is defined more than once",
                    name
                )));
            }
            *slot = Some(block);
        }

        let queries = CannedQuery::ALL
            .iter()
            .zip(slots)
            .map(|(query, slot)| {
                slot.ok_or_else(|| {
                    Error::QueryCatalog(format!("Missing canned query '{}'", query.name()))
                })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { queries })
    }

    pub fn sql(&self, query: CannedQuery) -> &str {
        &self.queries[query.index()]
    }
}

/// Splits on runs of blank lines, dropping empty blocks.
fn split_blocks(text: &str) -> Vec<String> {
    let mut blocks = Vec::new();
    let mut current: Vec<&str> = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                blocks.push(current.join("\n"));
                current.clear();
            }
        } else {
            current.push(line);
        }
    }
    if !current.is_empty() {
        blocks.push(current.join("\n"));
    }
    blocks
}

fn block_name(block: &str) -> Option<&str> {
    block
        .lines()
        .next()
        .and_then(|line| line.trim().strip_prefix(NAME_PREFIX))
        .map(str::trim)
        .filter(|name| !name.is_empty())
}

fn first_line(block: &str) -> &str {
    block.lines().next().unwrap_or_default()
}

/// Highest `?N` index in the SQL, skipping `--` and `/* */` comments and
/// string literals.
///
/// Bare `?` placeholders are rejected: their position depends on the text
/// around them.
fn highest_placeholder(sql: &str) -> Result<usize> {
    let mut highest = 0;
    let mut chars = sql.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '-' if chars.peek() == Some(&'-') => {
                for skipped in chars.by_ref() {
                    if skipped == '\n' {
                        break;
                    }
                }
            }
            '/' if chars.peek() == Some(&'*') => {
                chars.next();
                let mut previous = '\0';
                for skipped in chars.by_ref() {
                    if previous == '*' && skipped == '/' {
                        break;
                    }
                    previous = skipped;
                }
            }
            '\'' | '"' => {
                for skipped in chars.by_ref() {
                    if skipped == c {
                        break;
                    }
                }
            }
            '?' => {
                let mut digits = String::new();
                while let Some(d) = chars.peek().filter(|d| d.is_ascii_digit()) {
                    digits.push(*d);
                    chars.next();
                }
                let index = digits.parse::<usize>().map_err(|_| {
                    Error::QueryCatalog(
                        "Canned queries must use numbered placeholders (?1, ?2, ...)".to_string(),
                    )
                })?;
                highest = highest.max(index);
            }
            _ => {}
        }
    }

    Ok(highest)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_file(extra: &str) -> String {
        format!(
            "-- name: total_compensation_by_region\nSELECT 1\n\n\
             -- name: total_compensation_per_employee_latest\nSELECT 2\n\n\
             -- name: average_salary_per_job_category\nSELECT ?1\n\n\
             -- name: employees_changed_departments\nSELECT ?1, ?2, ?1\n\n\
             -- name: top_paid_per_department\nSELECT * FROM t WHERE r <= ?1\n{}",
            extra
        )
    }

    #[test]
    fn test_bundled_queries_parse() {
        let catalog = QueryCatalog::bundled().unwrap();
        for query in CannedQuery::ALL {
            assert!(catalog.sql(query).contains(query.name()));
        }
    }

    #[test]
    fn test_blocks_split_on_blank_lines() {
        let blocks = split_blocks("a\nb\n\n\n  \nc\n\t\nd\n");
        assert_eq!(blocks, vec!["a\nb", "c", "d"]);
    }

    #[test]
    fn test_parse_maps_blocks_by_name() {
        let catalog = QueryCatalog::parse(&minimal_file("")).unwrap();
        assert!(catalog
            .sql(CannedQuery::TopPaidPerDepartment)
            .ends_with("WHERE r <= ?1"));
        assert!(catalog
            .sql(CannedQuery::TotalCompensationPerEmployeeLatest)
            .ends_with("SELECT 2"));
    }

    #[test]
    fn test_unknown_block_is_ignored() {
        let text = minimal_file("\n-- name: something_else\nSELECT 3\n");
        assert!(QueryCatalog::parse(&text).is_ok());
    }

    #[test]
    fn test_missing_query_is_rejected() {
        let text = "-- name: total_compensation_by_region\nSELECT 1\n";
        let err = QueryCatalog::parse(text).unwrap_err();
        assert!(err.to_string().contains("Missing canned query"));
    }

    #[test]
    fn test_duplicate_query_is_rejected() {
        let text = minimal_file("\n-- name: total_compensation_by_region\nSELECT 1\n");
        let err = QueryCatalog::parse(&text).unwrap_err();
        assert!(err.to_string().contains("more than once"));
    }

    #[test]
    fn test_block_without_header_is_rejected() {
        let text = minimal_file("\nSELECT 4\n");
        assert!(QueryCatalog::parse(&text).is_err());
    }

    #[test]
    fn test_arity_mismatch_is_rejected() {
        let text = minimal_file("").replace("WHERE r <= ?1", "WHERE r <= ?2");
        let err = QueryCatalog::parse(&text).unwrap_err();
        assert!(err.to_string().contains("top_paid_per_department"));
    }

    #[test]
    fn test_placeholder_scan() {
        assert_eq!(highest_placeholder("SELECT 1").unwrap(), 0);
        assert_eq!(highest_placeholder("SELECT ?2, ?1, ?2").unwrap(), 2);
        assert_eq!(
            highest_placeholder("-- ?7 in a comment\nSELECT '?5', ?1").unwrap(),
            1
        );
        assert!(highest_placeholder("SELECT ?").is_err());
    }

    #[test]
    fn test_placeholder_scan_skips_block_comments() {
        assert_eq!(
            highest_placeholder("SELECT /* ? or ?9 */ ?1 /**/ FROM t").unwrap(),
            1
        );
        assert_eq!(
            highest_placeholder("SELECT ?1 /* spans\n lines ?7 */, ?2").unwrap(),
            2
        );
        assert_eq!(highest_placeholder("SELECT 1 / 2 * ?1").unwrap(), 1);
    }

    #[test]
    fn test_literal_years_are_left_alone() {
        let catalog = QueryCatalog::parse(&minimal_file("").replace(
            "SELECT ?1, ?2, ?1",
            "SELECT ?1, ?2 FROM t WHERE note <> 'since 2005' AND code = 2005",
        ))
        .unwrap();
        assert!(catalog
            .sql(CannedQuery::EmployeesChangedDepartments)
            .contains("code = 2005"));
    }

    #[test]
    fn test_load_reads_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("queries.sql");
        std::fs::write(&path, minimal_file("")).unwrap();

        assert!(QueryCatalog::from_optional_path(Some(&path)).is_ok());
        assert!(QueryCatalog::load(&tmp.path().join("missing.sql")).is_err());
    }
}
