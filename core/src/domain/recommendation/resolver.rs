use std::sync::Arc;

use crate::domain::recommendation::{
    entities::RecommendationRecord, knowledge_base::KnowledgeBase, value_objects::MatchKind,
};

/// Result of resolving a free-text query against the knowledge base.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Resolution<'a> {
    pub record: &'a RecommendationRecord,
    pub symptom: Option<&'a str>,
    pub exact: bool,
}

impl Resolution<'_> {
    pub fn match_kind(&self) -> MatchKind {
        match (self.symptom, self.exact) {
            (Some(symptom), true) => MatchKind::Exact {
                symptom: symptom.to_string(),
            },
            (Some(symptom), false) => MatchKind::Partial {
                symptom: symptom.to_string(),
            },
            (None, _) => MatchKind::Default,
        }
    }

    pub fn is_default(&self) -> bool {
        self.symptom.is_none()
    }
}

/// Maps any query to exactly one record.
///
/// The query is only lower-cased. An exact pass runs first, then a partial
/// pass where either string may contain the other; both passes walk keys in
/// definition order and the first hit wins. An empty query is contained in
/// every key and therefore resolves to the first one.
#[derive(Debug, Clone)]
pub struct Resolver {
    knowledge_base: Arc<KnowledgeBase>,
}

impl Resolver {
    pub fn new(knowledge_base: Arc<KnowledgeBase>) -> Self {
        Self { knowledge_base }
    }

    pub fn knowledge_base(&self) -> &KnowledgeBase {
        &self.knowledge_base
    }

    pub fn resolve(&self, query: &str) -> &RecommendationRecord {
        self.resolve_match(query).record
    }

    pub fn resolve_match(&self, query: &str) -> Resolution<'_> {
        let normalized = query.to_lowercase();

        let exact = self
            .knowledge_base
            .entries()
            .find(|(symptom, _)| symptom.to_lowercase() == normalized);

        if let Some((symptom, record)) = exact {
            tracing::debug!(symptom, "exact symptom match");
            return Resolution {
                record,
                symptom: Some(symptom),
                exact: true,
            };
        }

        let partial = self.knowledge_base.entries().find(|(symptom, _)| {
            let key = symptom.to_lowercase();
            normalized.contains(&key) || key.contains(&normalized)
        });

        if let Some((symptom, record)) = partial {
            tracing::debug!(symptom, "partial symptom match");
            return Resolution {
                record,
                symptom: Some(symptom),
                exact: false,
            };
        }

        tracing::debug!("no symptom match, using default record");
        Resolution {
            record: self.knowledge_base.default_record(),
            symptom: None,
            exact: false,
        }
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::new(Arc::new(KnowledgeBase::builtin()))
    }
}
