//! Synonym groups: canonical skill names and their alternate spellings.
//!
//! Loaded once at startup (built-in table, or a JSON file named by
//! `SKILL_SYNONYMS_PATH`) and shared read-only through `AppState`.
//! A term may belong to several groups ("postgres" is both an SQL dialect
//! and a PostgreSQL alias); matching asks whether two terms share any group.

use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::skills::normalizer::normalize;

/// Built-in groups: (canonical, alternates).
const BUILTIN_GROUPS: &[(&str, &[&str])] = &[
    ("react", &["react.js", "react js", "reactjs"]),
    ("vue", &["vue.js", "vue js", "vuejs"]),
    ("angular", &["angular.js", "angularjs"]),
    ("node", &["node.js", "nodejs"]),
    ("express", &["express.js", "expressjs"]),
    ("django", &["django framework"]),
    ("flask", &["flask framework"]),
    ("python", &["py", "python3", "python 3"]),
    ("javascript", &["js", "es6", "es2020"]),
    ("typescript", &["ts"]),
    (
        "sql",
        &["mysql", "postgresql", "postgres", "sql server", "mariadb"],
    ),
    (
        "nosql",
        &["mongodb", "dynamodb", "firebase", "cassandra", "couchdb"],
    ),
    ("mongodb", &["mongo", "nosql database"]),
    ("postgresql", &["postgres", "psql"]),
    ("aws", &["amazon web services", "amazon aws"]),
    ("gcp", &["google cloud", "google cloud platform"]),
    ("azure", &["microsoft azure"]),
    ("docker", &["containerization", "containers"]),
    ("kubernetes", &["k8s", "container orchestration"]),
    ("git", &["version control", "github", "gitlab", "bitbucket"]),
    ("rest api", &["restful api", "rest apis"]),
    ("graphql", &["graph ql"]),
    ("agile", &["agile development", "scrum", "kanban", "sprint"]),
    ("html", &["html5", "semantic html"]),
    ("css", &["css3", "sass", "scss", "less"]),
    ("tailwind", &["tailwindcss", "tailwind css"]),
    ("bootstrap", &["bootstrap framework"]),
    ("junit", &["java unit testing"]),
    (
        "testing",
        &[
            "unit testing",
            "integration testing",
            "test automation",
            "jest",
            "mocha",
        ],
    ),
    (
        "ci/cd",
        &[
            "continuous integration",
            "continuous deployment",
            "github actions",
            "jenkins",
            "gitlab ci",
        ],
    ),
];

/// A canonical skill name plus its known alternate spellings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SynonymGroup {
    pub canonical: String,
    pub alternates: Vec<String>,
}

/// Immutable synonym lookup. Names are normalized at load time.
#[derive(Debug, Clone, Default)]
pub struct SynonymTable {
    groups: Vec<SynonymGroup>,
    /// normalized term -> indices of every group containing it
    index: HashMap<String, Vec<usize>>,
}

impl SynonymTable {
    pub fn builtin() -> Self {
        Self::from_groups(BUILTIN_GROUPS.iter().map(|(canonical, alternates)| SynonymGroup {
            canonical: canonical.to_string(),
            alternates: alternates.iter().map(|a| a.to_string()).collect(),
        }))
    }

    pub fn from_groups(groups: impl IntoIterator<Item = SynonymGroup>) -> Self {
        let groups: Vec<SynonymGroup> = groups
            .into_iter()
            .map(|g| SynonymGroup {
                canonical: normalize(&g.canonical),
                alternates: g.alternates.iter().map(|a| normalize(a)).collect(),
            })
            .filter(|g| !g.canonical.is_empty())
            .collect();

        let mut index: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, group) in groups.iter().enumerate() {
            for term in std::iter::once(&group.canonical).chain(&group.alternates) {
                let slots = index.entry(term.clone()).or_default();
                if !slots.contains(&i) {
                    slots.push(i);
                }
            }
        }

        SynonymTable { groups, index }
    }

    /// Parses `{"canonical": ["alternate", ...], ...}`.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let raw: BTreeMap<String, Vec<String>> = serde_json::from_str(json)?;
        Ok(Self::from_groups(raw.into_iter().map(|(canonical, alternates)| {
            SynonymGroup {
                canonical,
                alternates,
            }
        })))
    }

    /// Loads the table from `path` when given, otherwise the built-in table.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let table = match path {
            Some(path) => {
                let json = std::fs::read_to_string(Path::new(path))
                    .with_context(|| format!("Failed to read synonym table '{path}'"))?;
                Self::from_json(&json)
                    .with_context(|| format!("Synonym table '{path}' is not valid JSON"))?
            }
            None => Self::builtin(),
        };
        info!(
            "Skill synonym table loaded: {} groups, {} terms",
            table.groups.len(),
            table.index.len()
        );
        Ok(table)
    }

    pub fn groups(&self) -> &[SynonymGroup] {
        &self.groups
    }

    /// True when both normalized terms belong to at least one common group.
    pub fn share_group(&self, a: &str, b: &str) -> bool {
        match (self.index.get(a), self.index.get(b)) {
            (Some(left), Some(right)) => left.iter().any(|i| right.contains(i)),
            _ => false,
        }
    }
}
