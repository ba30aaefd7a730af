//! Documentation categories.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::error::Error;

/// The kind of documentation a converted file belongs to.
///
/// A category picks the output subdirectory, the banner placed under the
/// front matter and the `type` label of the metadata header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// System design, components, diagrams
    Architecture,
    /// Features, requirements, user stories
    Functional,
    /// Implementation details, APIs, configurations
    Technical,
}

impl Category {
    /// All categories in declaration order.
    pub const ALL: [Category; 3] = [
        Category::Architecture,
        Category::Functional,
        Category::Technical,
    ];

    /// Identifier used for directories and the `category` metadata field.
    pub fn id(&self) -> &'static str {
        match self {
            Category::Architecture => "architecture",
            Category::Functional => "functional",
            Category::Technical => "technical",
        }
    }

    /// Human readable name, e.g. `"Architecture Document"`.
    pub fn display_name(&self) -> String {
        format!("{} Document", title_case(&self.id().replace('_', " ")))
    }

    /// One-line summary shown in CLI help.
    pub fn summary(&self) -> &'static str {
        match self {
            Category::Architecture => "System design, components, and architecture diagrams",
            Category::Functional => "Features, requirements, and user stories",
            Category::Technical => "Implementation details, APIs, and configurations",
        }
    }

    /// What a document of this category describes, used in the banner.
    pub fn description(&self) -> &'static str {
        match self {
            Category::Architecture => "the system architecture, components, and design decisions",
            Category::Functional => "the functional requirements, features, and user stories",
            Category::Technical => "the technical implementation, APIs, and configurations",
        }
    }

    /// Directory that receives documents of this category.
    pub fn output_dir(&self, docs_root: &Path) -> PathBuf {
        docs_root.join(self.id())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.id() == wanted)
            .ok_or_else(|| {
                Error::InvalidInput(format!(
                    "Unknown category '{}' (expected architecture, functional or technical)",
                    s
                ))
            })
    }
}

/// Upper-case the first letter of every word, lower-case the rest.
fn title_case(s: &str) -> String {
    s.split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
