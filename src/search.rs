//! Method Catalogue Search
//!
//! Case-insensitive filter over the index page's method catalogue,
//! matching name, search reference, and tags.

use crate::models::{DocumentImplementations, Implementation};

fn matches(implementation: &Implementation, needle: &str) -> bool {
    implementation.name.to_lowercase().contains(needle)
        || implementation.search_reference.to_lowercase().contains(needle)
        || implementation
            .tags
            .iter()
            .any(|tag| tag.to_lowercase().contains(needle))
}

/// Filter the grouped catalogue. A blank query returns everything;
/// document groups left with no matches are dropped.
pub fn filter_implementations(
    catalogue: &[DocumentImplementations],
    query: &str,
) -> Vec<DocumentImplementations> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return catalogue.to_vec();
    }

    catalogue
        .iter()
        .filter_map(|group| {
            let implementations: Vec<Implementation> = group
                .implementations
                .iter()
                .filter(|i| matches(i, &needle))
                .cloned()
                .collect();
            if implementations.is_empty() {
                None
            } else {
                Some(DocumentImplementations {
                    document: group.document.clone(),
                    implementations,
                })
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Document, Icon, MethodType};

    fn implementation(name: &str, search_reference: &str, tags: &[&str]) -> Implementation {
        Implementation {
            name: name.into(),
            tags: tags.iter().map(|t| t.to_string()).collect(),
            description: String::new(),
            reference: Document::BR187(None),
            search_reference: search_reference.into(),
            method_type: MethodType::BR187Chapter1Equation1,
            icon: Icon::FireIcon,
            colors: "text-red-700 bg-red-50".into(),
        }
    }

    fn catalogue() -> Vec<DocumentImplementations> {
        vec![
            DocumentImplementations {
                document: "BR 187".into(),
                implementations: vec![implementation(
                    "BR187 Ventilation Factor",
                    "BR 187, Chapter 1, Equation 1",
                    &["Fire Scenario"],
                )],
            },
            DocumentImplementations {
                document: "PD 7974".into(),
                implementations: vec![implementation(
                    "Heat Content of Plume",
                    "PD7974-2:2019 Section 7.1",
                    &["Fire Scenario", "Temp Vs Time"],
                )],
            },
        ]
    }

    #[test]
    fn blank_query_returns_everything() {
        let all = filter_implementations(&catalogue(), "   ");
        assert_eq!(all.len(), 2);
    }

    #[test]
    fn matches_name_case_insensitively() {
        let found = filter_implementations(&catalogue(), "ventilation");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].document, "BR 187");
    }

    #[test]
    fn matches_reference_and_tags() {
        let by_reference = filter_implementations(&catalogue(), "section 7");
        assert_eq!(by_reference.len(), 1);
        assert_eq!(by_reference[0].document, "PD 7974");

        let by_tag = filter_implementations(&catalogue(), "temp vs");
        assert_eq!(by_tag.len(), 1);
    }

    #[test]
    fn empty_groups_are_dropped() {
        let none = filter_implementations(&catalogue(), "zzz");
        assert!(none.is_empty());
    }
}
