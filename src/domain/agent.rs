use std::collections::BTreeMap;

/// A reviewer persona: the system-role instruction that primes the chat
/// provider to respond as a specific kind of lawyer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AgentDefinition {
    pub key: &'static str,
    pub name: &'static str,
    pub persona: &'static str,
}

/// Immutable lookup table of the available review agents. Constructed once
/// at startup and shared behind an `Arc`; there are no mutation operations.
#[derive(Debug, Clone)]
pub struct AgentCatalog {
    agents: Vec<AgentDefinition>,
}

impl AgentCatalog {
    /// The fixed set of legal review agents.
    pub fn builtin() -> Self {
        Self {
            agents: vec![
                AgentDefinition {
                    key: "ppm_review",
                    name: "PPM Review Agent",
                    persona: "You are a fund formation attorney. Review the text for legal \
                              risks, missing disclosures, problematic terms, and investor \
                              risk issues. Provide a checklist summary.",
                },
                AgentDefinition {
                    key: "employment_review",
                    name: "Employment Agreement Review Agent",
                    persona: "You are an employment lawyer. Review this agreement for \
                              employer-side risks, overly employee-favorable terms, missing \
                              IP clauses, or legal concerns.",
                },
                AgentDefinition {
                    key: "nda_review",
                    name: "NDA Review Agent",
                    persona: "You are a contracts attorney reviewing an NDA. Identify risks, \
                              ambiguities, missing terms, and unenforceable clauses.",
                },
            ],
        }
    }

    pub fn get(&self, key: &str) -> Option<&AgentDefinition> {
        self.agents.iter().find(|agent| agent.key == key)
    }

    /// Identifier → display name mapping, in stable key order. Personas are
    /// deliberately absent; they are never exposed over the API.
    pub fn listing(&self) -> BTreeMap<&'static str, &'static str> {
        self.agents
            .iter()
            .map(|agent| (agent.key, agent.name))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.agents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.agents.is_empty()
    }
}
